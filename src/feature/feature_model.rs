use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Template for the generated feature. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Text after `Feature:`
    pub feature_name: String,

    /// Who wants the feature (`As a ...`)
    pub stakeholder: String,

    /// What they need to do (`I need to ...`)
    pub task: String,

    /// Why (`So that I can ...`)
    pub justification: String,

    /// Scenario title prefix; the 1-based index is appended
    pub scenario_description: String,

    /// Page named in every `Given`
    pub current_page: String,

    /// Assertion line used as every scenario's `Then`
    pub default_then: String,

    /// Values each input field is filled with, one scenario per value
    pub text_input_samples: Vec<String>,
}

impl ScenarioConfig {
    /// Load a scenario config from YAML, or JSON when the file ends in `.json`.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let context = format!("scenario config {}", path.display());
        if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content).map_err(|e| LoadError::Json { context, source: e })
        } else {
            serde_yaml::from_str(&content).map_err(|e| LoadError::Yaml { context, source: e })
        }
    }
}

/// One resolved order, phrased as Given / When* / Then.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderedScenario {
    pub given: String,
    pub whens: Vec<String>,
    pub then: String,
}

impl RenderedScenario {
    /// Stable SHA-1 over the scenario's steps, for tracing and export.
    pub fn fingerprint(&self) -> String {
        use sha1::{Digest, Sha1};

        let mut hasher = Sha1::new();
        hasher.update(self.given.as_bytes());
        for when in &self.whens {
            hasher.update(b"\n");
            hasher.update(when.as_bytes());
        }
        hasher.update(b"\n");
        hasher.update(self.then.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
