mod common;

use common::fixtures::{LOGIN_SNAPSHOT_JSON, login_config, names};
use form_scenarios::discovery::adapter::{PageDiscovery, collect_elements};
use form_scenarios::discovery::classifier::PageControls;
use form_scenarios::discovery::element_list::ElementList;
use form_scenarios::discovery::snapshot::SnapshotDiscovery;
use form_scenarios::error::{GenerationError, LoadError};
use form_scenarios::form::form_model::{FormElement, FormKind};
use form_scenarios::generator::pipeline::generate_feature;

struct FixedPage;

impl PageDiscovery for FixedPage {
    fn input_names(&self) -> Result<Vec<String>, LoadError> {
        Ok(vec!["email".into(), "password".into()])
    }

    fn button_names(&self) -> Result<Vec<String>, LoadError> {
        Ok(vec!["Login".into()])
    }

    fn link_names(&self) -> Result<Vec<String>, LoadError> {
        Ok(vec!["Help".into()])
    }
}

struct BrokenPage;

impl PageDiscovery for BrokenPage {
    fn input_names(&self) -> Result<Vec<String>, LoadError> {
        Err(LoadError::SnapshotStructure("page never loaded".into()))
    }

    fn button_names(&self) -> Result<Vec<String>, LoadError> {
        Ok(vec![])
    }

    fn link_names(&self) -> Result<Vec<String>, LoadError> {
        Ok(vec![])
    }
}

// =========================================================================
// collect_elements
// =========================================================================

#[test]
fn collect_orders_inputs_buttons_links() {
    let elements = collect_elements(&FixedPage).unwrap();
    assert_eq!(
        elements,
        vec![
            FormElement::input("email"),
            FormElement::input("password"),
            FormElement::button("Login"),
            FormElement::link("Help"),
        ]
    );
    assert!(elements.iter().all(|el| el.value.is_none()));
}

#[test]
fn collect_propagates_discovery_errors() {
    let err = collect_elements(&BrokenPage).unwrap_err();
    assert!(matches!(err, LoadError::SnapshotStructure(_)));
}

// =========================================================================
// Snapshot classification
// =========================================================================

#[test]
fn snapshot_classifies_named_controls() {
    let discovery = SnapshotDiscovery::from_json(LOGIN_SNAPSHOT_JSON).unwrap();

    assert_eq!(
        discovery.controls(),
        &PageControls {
            inputs: vec!["email".into(), "password".into()],
            buttons: vec!["Login".into()],
            links: vec!["Help".into(), "Close dialog".into()],
        }
    );
    assert_eq!(discovery.snapshot.title.as_deref(), Some("Login"));
}

#[test]
fn snapshot_elements_feed_generation() {
    let discovery = SnapshotDiscovery::from_json(LOGIN_SNAPSHOT_JSON).unwrap();
    let elements = collect_elements(&discovery).unwrap();
    assert_eq!(
        names(&elements),
        vec!["email", "password", "Login", "Help", "Close dialog"]
    );

    // 5! * 1^2
    let text = generate_feature(&elements, &login_config(&["x"])).unwrap();
    assert_eq!(text.matches("Scenario:").count(), 120);
}

#[test]
fn submit_input_uses_value_as_label() {
    let json = r#"{"dom": [
        {"tag": "input", "type": "submit", "value": "Send"},
        {"tag": "input", "type": "text", "id": "query"},
        {"tag": "div", "role": "button", "text": "Menu"}
    ]}"#;
    let discovery = SnapshotDiscovery::from_json(json).unwrap();
    assert_eq!(discovery.controls().buttons, vec!["Send", "Menu"]);
    assert_eq!(discovery.controls().inputs, vec!["query"]);
}

#[test]
fn nameless_controls_are_skipped() {
    let json = r#"{"dom": [
        {"tag": "input", "type": "text"},
        {"tag": "button", "text": "   "},
        {"tag": "a"}
    ]}"#;
    let discovery = SnapshotDiscovery::from_json(json).unwrap();
    assert_eq!(discovery.controls(), &PageControls::default());
}

#[test]
fn select_and_untypeable_controls_are_not_inputs() {
    let json = r#"{"dom": [
        {"tag": "select", "name": "country"},
        {"tag": "input", "type": "radio", "name": "plan"},
        {"tag": "input", "type": "file", "name": "avatar"},
        {"tag": "input", "name": "nickname"},
        {"tag": "textarea", "name": "bio"},
        {"tag": "input", "type": "email", "name": "contact", "disabled": true}
    ]}"#;
    let discovery = SnapshotDiscovery::from_json(json).unwrap();
    assert_eq!(discovery.controls().inputs, vec!["nickname", "bio"]);
    assert!(discovery.controls().buttons.is_empty());
}

#[test]
fn link_labels_fall_back_to_value_then_aria_label() {
    let json = r#"{"dom": [
        {"tag": "a", "text": "Help", "value": "ignored"},
        {"tag": "a", "value": "Terms"},
        {"tag": "a", "ariaLabel": "Close dialog"},
        {"tag": "a", "text": "Archived", "disabled": true}
    ]}"#;
    let discovery = SnapshotDiscovery::from_json(json).unwrap();
    assert_eq!(discovery.controls().links, vec!["Help", "Terms", "Close dialog"]);
}

#[test]
fn snapshot_without_dom_array_is_rejected() {
    let err = SnapshotDiscovery::from_json(r#"{"url": "x", "dom": {}}"#).unwrap_err();
    assert!(matches!(err, LoadError::SnapshotStructure(_)));

    let err = SnapshotDiscovery::from_json("not json").unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));
}

// =========================================================================
// Explicit element lists
// =========================================================================

#[test]
fn element_list_keeps_written_order() {
    let yaml = r#"
- kind: BUTTON
  name: Login
- kind: input
  name: email
- kind: Link
  name: Help
"#;
    let list = ElementList::from_yaml(yaml).unwrap();
    assert_eq!(
        list.elements,
        vec![
            FormElement::button("Login"),
            FormElement::input("email"),
            FormElement::link("Help"),
        ]
    );
}

#[test]
fn element_list_from_json() {
    let json = r#"[{"kind": "INPUT", "name": "email"}]"#;
    let list = ElementList::from_json(json).unwrap();
    assert_eq!(list.elements[0].kind, FormKind::Input);
}

#[test]
fn element_list_rejects_unknown_kind() {
    let yaml = "- kind: CHECKBOX\n  name: remember\n";
    let err = ElementList::from_yaml(yaml).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Generation(GenerationError::UnknownKind(ref k)) if k == "CHECKBOX"
    ));
}
