use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::feature::feature_model::RenderedScenario;

/// Generation stage a trace line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStage {
    Discovered,
    Permuted,
    Expanded,
    Rendered,
}

#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub stage: TraceStage,

    /// Items produced by the stage (elements, orders, scenarios)
    pub count: Option<usize>,

    pub scenario_index: Option<usize>,
    pub fingerprint: Option<String>,
    pub steps: Option<usize>,

    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn now(stage: TraceStage) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            stage,
            count: None,
            scenario_index: None,
            fingerprint: None,
            steps: None,
            detail: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Describe one rendered scenario by its 1-based index.
    pub fn with_scenario(mut self, index: usize, scenario: &RenderedScenario) -> Self {
        self.scenario_index = Some(index);
        self.fingerprint = Some(scenario.fingerprint());
        self.steps = Some(scenario.whens.len() + 2);
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}
