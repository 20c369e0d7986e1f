use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;

use super::adapter::PageDiscovery;
use super::classifier::{PageControls, classify};

/// One element of an extracted DOM snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct DomElement {
    pub tag: String,
    pub text: Option<String>,
    pub role: Option<String>,
    pub r#type: Option<String>,
    #[serde(rename = "ariaLabel")]
    pub aria_label: Option<String>,
    #[serde(default)]
    pub disabled: bool,

    #[serde(rename = "formControlName", default)]
    pub form_control_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// An extracted page: `{"url": ..., "title": ..., "dom": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageSnapshot {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub dom: Vec<DomElement>,
}

/// Discovery over a DOM snapshot captured ahead of time.
#[derive(Debug, Clone)]
pub struct SnapshotDiscovery {
    pub snapshot: PageSnapshot,
    controls: PageControls,
}

impl SnapshotDiscovery {
    pub fn new(snapshot: PageSnapshot) -> Self {
        let controls = classify(&snapshot.dom);
        Self { snapshot, controls }
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(|e| LoadError::Json {
            context: "DOM snapshot".into(),
            source: e,
        })?;

        if !value.get("dom").is_some_and(|d| d.is_array()) {
            return Err(LoadError::SnapshotStructure(
                "snapshot has no 'dom' array".into(),
            ));
        }

        let snapshot: PageSnapshot = serde_json::from_value(value).map_err(|e| LoadError::Json {
            context: "DOM snapshot elements".into(),
            source: e,
        })?;

        Ok(Self::new(snapshot))
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    pub fn controls(&self) -> &PageControls {
        &self.controls
    }
}

impl PageDiscovery for SnapshotDiscovery {
    fn input_names(&self) -> Result<Vec<String>, LoadError> {
        Ok(self.controls.inputs.clone())
    }

    fn button_names(&self) -> Result<Vec<String>, LoadError> {
        Ok(self.controls.buttons.clone())
    }

    fn link_names(&self) -> Result<Vec<String>, LoadError> {
        Ok(self.controls.links.clone())
    }
}
