use serde::{Deserialize, Serialize};

use super::feature_model::{RenderedScenario, ScenarioConfig};

/// Structured form of a generated feature, for YAML/JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureDocument {
    pub feature: String,
    pub stakeholder: String,
    pub task: String,
    pub justification: String,
    pub scenarios: Vec<ScenarioRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioRecord {
    /// 1-based, in emission order
    pub index: usize,
    pub title: String,
    pub fingerprint: String,
    pub given: String,
    pub whens: Vec<String>,
    pub then: String,
}

impl FeatureDocument {
    pub fn build(config: &ScenarioConfig, scenarios: &[RenderedScenario]) -> Self {
        let scenarios = scenarios
            .iter()
            .enumerate()
            .map(|(i, scenario)| ScenarioRecord {
                index: i + 1,
                title: format!("{} {}", config.scenario_description, i + 1),
                fingerprint: scenario.fingerprint(),
                given: scenario.given.clone(),
                whens: scenario.whens.clone(),
                then: scenario.then.clone(),
            })
            .collect();

        FeatureDocument {
            feature: config.feature_name.clone(),
            stakeholder: config.stakeholder.clone(),
            task: config.task.clone(),
            justification: config.justification.clone(),
            scenarios,
        }
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
