use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::generator::pipeline::GenerationOptions;

/// Default scenario ceiling for CLI runs. 8 elements with 2 inputs and 3
/// samples already produce 362880 scenarios.
pub const DEFAULT_MAX_SCENARIOS: u64 = 100_000;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "form-scenarios",
    version,
    about = "Generate exhaustive Given/When/Then scenarios for a form page"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: form-scenarios.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate every scenario for a page and write the feature
    Generate {
        /// Scenario template (YAML, or JSON with a .json extension)
        #[arg(long)]
        scenario: String,

        /// Explicit element list (YAML or JSON)
        #[arg(long, conflicts_with = "snapshot", required_unless_present = "snapshot")]
        elements: Option<String>,

        /// Extracted DOM snapshot (JSON)
        #[arg(long)]
        snapshot: Option<String>,

        /// Output format: gherkin, yaml, json
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Refuse to generate more scenarios than this (0 disables the limit)
        #[arg(long)]
        max_scenarios: Option<u64>,

        /// Append a JSONL generation trace to this file
        #[arg(long)]
        trace: Option<String>,
    },

    /// Print how many scenarios a page would produce, without generating them
    Count {
        /// Scenario template (YAML, or JSON with a .json extension)
        #[arg(long)]
        scenario: String,

        /// Explicit element list (YAML or JSON)
        #[arg(long, conflicts_with = "snapshot", required_unless_present = "snapshot")]
        elements: Option<String>,

        /// Extracted DOM snapshot (JSON)
        #[arg(long)]
        snapshot: Option<String>,
    },

    /// List the step expressions generated scenarios use
    Steps,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `form-scenarios.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(default = "default_gherkin")]
    pub format: String,

    #[serde(default = "default_max_scenarios")]
    pub max_scenarios: u64,

    pub trace: Option<String>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            format: "gherkin".to_string(),
            max_scenarios: DEFAULT_MAX_SCENARIOS,
            trace: None,
        }
    }
}

// Serde default helpers
fn default_gherkin() -> String { "gherkin".to_string() }
fn default_max_scenarios() -> u64 { DEFAULT_MAX_SCENARIOS }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("form-scenarios.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => match serde_yaml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = config_path, error = %e, "ignoring malformed config file");
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

/// Resolve the scenario ceiling: CLI > config file > default. Zero means no limit.
pub fn build_generation_options(cli_max: Option<u64>, config: &GenerateConfig) -> GenerationOptions {
    let limit = cli_max.unwrap_or(config.max_scenarios);
    GenerationOptions {
        max_scenarios: (limit > 0).then_some(limit),
    }
}
