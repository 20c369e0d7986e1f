//! Exhaustive behavior-scenario generation for form pages.
//!
//! Discovered page controls are permuted into every action order, each
//! order's input fields are expanded into every combination of sample
//! values, and the results are rendered as Given/When/Then scenarios.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod feature;
pub mod form;
pub mod generator;
pub mod logging;
pub mod trace;

pub use error::{GenerationError, LoadError};
pub use feature::feature_model::{RenderedScenario, ScenarioConfig};
pub use form::form_model::{FormElement, FormKind};
pub use generator::pipeline::{GenerationOptions, generate_feature, generate_scenarios};
