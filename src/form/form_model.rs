use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// The closed set of actions a scenario can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormKind {
    Input,
    Button,
    Link,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::Input => write!(f, "INPUT"),
            FormKind::Button => write!(f, "BUTTON"),
            FormKind::Link => write!(f, "LINK"),
        }
    }
}

impl FromStr for FormKind {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INPUT" => Ok(FormKind::Input),
            "BUTTON" => Ok(FormKind::Button),
            "LINK" => Ok(FormKind::Link),
            _ => Err(GenerationError::UnknownKind(s.to_string())),
        }
    }
}

/// One discovered action on the page.
///
/// `value` is only meaningful for inputs: `None` is an unresolved slot,
/// `Some(sample)` a slot filled during expansion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormElement {
    pub kind: FormKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FormElement {
    pub fn input(name: impl Into<String>) -> Self {
        Self {
            kind: FormKind::Input,
            name: name.into(),
            value: None,
        }
    }

    pub fn button(name: impl Into<String>) -> Self {
        Self {
            kind: FormKind::Button,
            name: name.into(),
            value: None,
        }
    }

    pub fn link(name: impl Into<String>) -> Self {
        Self {
            kind: FormKind::Link,
            name: name.into(),
            value: None,
        }
    }

    /// True for an input whose value has not been assigned yet.
    pub fn is_unresolved_slot(&self) -> bool {
        self.kind == FormKind::Input && self.value.is_none()
    }

    /// Fill this input's slot. Buttons and links are left untouched.
    pub fn resolve(&mut self, sample: &str) {
        if self.kind == FormKind::Input {
            self.value = Some(sample.to_string());
        }
    }
}

/// One permutation of the discovered elements. Each order owns its copies.
pub type ActionOrder = Vec<FormElement>;

/// Number of unresolved input slots in an order.
pub fn unresolved_slots(order: &[FormElement]) -> usize {
    order.iter().filter(|el| el.is_unresolved_slot()).count()
}

/// Index of the leftmost unresolved slot, if any.
pub fn first_unresolved_slot(order: &[FormElement]) -> Option<usize> {
    order.iter().position(FormElement::is_unresolved_slot)
}
