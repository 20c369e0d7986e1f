use tracing::{debug, info};

use crate::error::GenerationError;
use crate::feature::feature_model::{RenderedScenario, ScenarioConfig};
use crate::feature::renderer::{render_feature, render_scenario};
use crate::form::form_model::FormElement;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::{TraceEvent, TraceStage};

use super::count::{ScenarioCount, predict};
use super::expansion::expand_slots;
use super::permutation::permute;

/// Library default is unlimited.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    /// Refuse to generate more scenarios than this. `None` disables the check.
    pub max_scenarios: Option<u64>,
}

/// Scenarios of one run, in emission order, plus the predicted figures.
#[derive(Debug, Clone)]
pub struct GeneratedScenarios {
    pub count: ScenarioCount,
    pub scenarios: Vec<RenderedScenario>,
}

// ============================================================================
// Generation pipeline: predict -> permute -> expand -> render
// ============================================================================

/// Generate every scenario for `elements` under `config`.
///
/// The size check runs before any ordering is built, so an empty sample list
/// or an oversized run fails without doing factorial work.
pub fn generate_scenarios(
    elements: &[FormElement],
    config: &ScenarioConfig,
    options: &GenerationOptions,
    tracer: &TraceLogger,
) -> Result<GeneratedScenarios, GenerationError> {
    let count = predict(elements, &config.text_input_samples)?;
    tracer.log(
        &TraceEvent::now(TraceStage::Discovered)
            .with_count(count.elements)
            .with_detail(format!(
                "inputs={} samples={} predicted={}",
                count.inputs, count.samples, count.scenarios
            )),
    );

    if let Some(limit) = options.max_scenarios {
        if count.scenarios > u128::from(limit) {
            return Err(GenerationError::TooManyScenarios {
                predicted: count.scenarios,
                limit: u128::from(limit),
            });
        }
    }

    info!(
        elements = count.elements,
        inputs = count.inputs,
        samples = count.samples,
        predicted = %count.scenarios,
        "generating scenarios"
    );

    let orders = permute(elements);
    tracer.log(&TraceEvent::now(TraceStage::Permuted).with_count(orders.len()));

    let resolved = expand_slots(orders, &config.text_input_samples)?;
    tracer.log(&TraceEvent::now(TraceStage::Expanded).with_count(resolved.len()));

    let mut scenarios = Vec::with_capacity(resolved.len());
    for (i, order) in resolved.iter().enumerate() {
        let scenario = render_scenario(order, config)?;
        if tracer.is_enabled() {
            tracer.log(&TraceEvent::now(TraceStage::Rendered).with_scenario(i + 1, &scenario));
        }
        scenarios.push(scenario);
    }

    debug!(scenarios = scenarios.len(), "rendered scenarios");

    Ok(GeneratedScenarios { count, scenarios })
}

/// Generate the complete feature text for `elements` with no scenario
/// ceiling and no trace file.
pub fn generate_feature(elements: &[FormElement], config: &ScenarioConfig) -> Result<String, GenerationError> {
    let generated = generate_scenarios(
        elements,
        config,
        &GenerationOptions::default(),
        &TraceLogger::disabled(),
    )?;

    Ok(render_feature(config, &generated.scenarios))
}
