use tracing::warn;

use super::snapshot::DomElement;

/// Named controls found on a page, each list in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageControls {
    pub inputs: Vec<String>,
    pub buttons: Vec<String>,
    pub links: Vec<String>,
}

pub fn classify(elements: &[DomElement]) -> PageControls {
    let mut controls = PageControls::default();

    for el in elements {
        if is_link(el) {
            push_named(&mut controls.links, label_for(el), el);
        } else if is_button(el) {
            push_named(&mut controls.buttons, label_for(el), el);
        } else if is_text_input(el) {
            push_named(&mut controls.inputs, control_name(el), el);
        }
    }

    controls
}

fn push_named(target: &mut Vec<String>, name: Option<String>, el: &DomElement) {
    match name {
        Some(name) => target.push(name),
        None => warn!(tag = %el.tag, "skipping control without a usable name"),
    }
}

fn is_text_input(el: &DomElement) -> bool {
    if el.disabled {
        return false;
    }

    match el.tag.as_str() {
        "textarea" => true,
        "input" => matches!(
            el.r#type.as_deref(),
            None | Some("text")
                | Some("email")
                | Some("password")
                | Some("search")
                | Some("number")
                | Some("tel")
                | Some("url")
        ),
        _ => false,
    }
}

fn is_button(el: &DomElement) -> bool {
    if el.disabled {
        return false;
    }

    el.tag == "button"
        || el.role.as_deref() == Some("button")
        || (el.tag == "input" && matches!(el.r#type.as_deref(), Some("submit") | Some("button")))
}

fn is_link(el: &DomElement) -> bool {
    el.tag == "a" && !el.disabled
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Input identifier: `formControlName`, then `name`, `id`, aria label.
fn control_name(el: &DomElement) -> Option<String> {
    non_empty(&el.form_control_name)
        .or_else(|| non_empty(&el.name))
        .or_else(|| non_empty(&el.id))
        .or_else(|| non_empty(&el.aria_label))
}

/// Button/link label: visible text, then the `value` attribute of
/// `<input type=submit>`, then aria label.
fn label_for(el: &DomElement) -> Option<String> {
    non_empty(&el.text)
        .or_else(|| non_empty(&el.value))
        .or_else(|| non_empty(&el.aria_label))
}
