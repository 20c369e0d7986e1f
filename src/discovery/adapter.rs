use tracing::debug;

use crate::error::LoadError;
use crate::form::form_model::FormElement;

/// Source of a page's named controls.
///
/// Implementations do the page lookup (and any waiting) themselves; the
/// generator only ever sees the finished name lists.
pub trait PageDiscovery {
    /// Identifiers of the text input controls
    fn input_names(&self) -> Result<Vec<String>, LoadError>;

    /// Visible labels of the buttons
    fn button_names(&self) -> Result<Vec<String>, LoadError>;

    /// Visible labels of the links
    fn link_names(&self) -> Result<Vec<String>, LoadError>;
}

/// Build the element sequence for a page: inputs, then buttons, then links,
/// each in discovery order. Inputs start unresolved. Duplicate names are kept.
pub fn collect_elements(discovery: &dyn PageDiscovery) -> Result<Vec<FormElement>, LoadError> {
    let inputs = discovery.input_names()?;
    let buttons = discovery.button_names()?;
    let links = discovery.link_names()?;

    debug!(
        inputs = inputs.len(),
        buttons = buttons.len(),
        links = links.len(),
        "collected page controls"
    );

    let elements = inputs
        .into_iter()
        .map(FormElement::input)
        .chain(buttons.into_iter().map(FormElement::button))
        .chain(links.into_iter().map(FormElement::link))
        .collect();

    Ok(elements)
}
