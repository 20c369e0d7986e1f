use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;
use crate::form::form_model::{FormElement, FormKind};

#[derive(Debug, Deserialize)]
struct RawElement {
    kind: String,
    name: String,
}

/// An explicit, ordered list of page controls: `[{kind: INPUT, name: email}, ...]`.
///
/// Order is kept as written. Kinds are matched case-insensitively; anything
/// other than INPUT, BUTTON or LINK is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementList {
    pub elements: Vec<FormElement>,
}

impl ElementList {
    pub fn from_yaml(content: &str) -> Result<Self, LoadError> {
        let raw: Vec<RawElement> = serde_yaml::from_str(content).map_err(|e| LoadError::Yaml {
            context: "element list".into(),
            source: e,
        })?;
        Self::from_raw(raw)
    }

    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        let raw: Vec<RawElement> = serde_json::from_str(content).map_err(|e| LoadError::Json {
            context: "element list".into(),
            source: e,
        })?;
        Self::from_raw(raw)
    }

    /// Load from YAML, or JSON when the file ends in `.json`.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        if path.extension().is_some_and(|e| e == "json") {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    fn from_raw(raw: Vec<RawElement>) -> Result<Self, LoadError> {
        let elements = raw
            .into_iter()
            .map(|r| -> Result<FormElement, LoadError> {
                let kind: FormKind = r.kind.parse()?;
                Ok(FormElement {
                    kind,
                    name: r.name,
                    value: None,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { elements })
    }
}
