use std::path::Path;

use tracing::info;

use crate::cli::config::{GenerateConfig, build_generation_options};
use crate::discovery::adapter::collect_elements;
use crate::discovery::element_list::ElementList;
use crate::discovery::snapshot::SnapshotDiscovery;
use crate::error::LoadError;
use crate::feature::export::FeatureDocument;
use crate::feature::feature_model::ScenarioConfig;
use crate::feature::renderer::render_feature;
use crate::feature::steps::StepPattern;
use crate::form::form_model::FormElement;
use crate::generator::count::predict;
use crate::generator::pipeline::generate_scenarios;
use crate::trace::logger::TraceLogger;

// ============================================================================
// generate subcommand
// ============================================================================

pub fn cmd_generate(
    scenario_path: &str,
    elements_path: Option<&str>,
    snapshot_path: Option<&str>,
    format: Option<&str>,
    output: Option<&str>,
    max_scenarios: Option<u64>,
    trace_path: Option<&str>,
    defaults: &GenerateConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ScenarioConfig::load(Path::new(scenario_path))?;
    let elements = load_elements(elements_path, snapshot_path)?;
    let options = build_generation_options(max_scenarios, defaults);

    let tracer = match trace_path.or(defaults.trace.as_deref()) {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    let format = format.unwrap_or(defaults.format.as_str());
    let generated = generate_scenarios(&elements, &config, &options, &tracer)?;

    let output_content = match format {
        "gherkin" | "feature" => render_feature(&config, &generated.scenarios),
        "yaml" => FeatureDocument::build(&config, &generated.scenarios).to_yaml()?,
        "json" => FeatureDocument::build(&config, &generated.scenarios).to_json()?,
        other => return Err(format!("unknown output format '{}' (expected gherkin, yaml or json)", other).into()),
    };

    // Write or print
    match output {
        Some(path) => {
            std::fs::write(path, &output_content)?;
            info!(path, scenarios = generated.scenarios.len(), "wrote feature");
        }
        None => print!("{}", output_content),
    }

    Ok(())
}

// ============================================================================
// count subcommand
// ============================================================================

pub fn cmd_count(
    scenario_path: &str,
    elements_path: Option<&str>,
    snapshot_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ScenarioConfig::load(Path::new(scenario_path))?;
    let elements = load_elements(elements_path, snapshot_path)?;
    let count = predict(&elements, &config.text_input_samples)?;

    println!("elements (n): {}", count.elements);
    println!("inputs   (m): {}", count.inputs);
    println!("samples  (k): {}", count.samples);
    println!("scenarios   : {}", count.scenarios);

    Ok(())
}

// ============================================================================
// steps subcommand
// ============================================================================

pub fn cmd_steps() {
    print!("{}", format_step_catalog());
}

/// One line per step expression, keyword first.
pub fn format_step_catalog() -> String {
    let mut out = String::new();
    for pattern in StepPattern::ALL {
        out.push_str(&format!("{} {}\n", pattern.keyword(), pattern.expression()));
    }
    out.push_str("Then <defaultThen>\n");
    out
}

// ============================================================================
// Helpers
// ============================================================================

/// Read page elements from an explicit list or from a DOM snapshot.
pub fn load_elements(
    elements_path: Option<&str>,
    snapshot_path: Option<&str>,
) -> Result<Vec<FormElement>, LoadError> {
    match (elements_path, snapshot_path) {
        (Some(path), _) => Ok(ElementList::load(Path::new(path))?.elements),
        (None, Some(path)) => {
            let discovery = SnapshotDiscovery::load(Path::new(path))?;
            collect_elements(&discovery)
        }
        (None, None) => Err(LoadError::NoElementSource),
    }
}
