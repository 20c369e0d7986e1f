use thiserror::Error;

use crate::form::form_model::FormKind;

/// Errors raised while permuting, expanding or rendering scenarios.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// An input slot needs a value but the sample list is empty
    #[error("input field '{slot}' has no sample values to expand into (textInputSamples is empty)")]
    EmptySamples { slot: String },

    /// Element kind outside INPUT / BUTTON / LINK
    #[error("unknown element kind '{0}' (expected INPUT, BUTTON or LINK)")]
    UnknownKind(String),

    /// Rendering reached an input that expansion never resolved
    #[error("input field '{name}' was rendered without a value")]
    UnresolvedSlot { name: String },

    /// A button or link carries a value
    #[error("{kind} '{name}' must not carry a value")]
    UnexpectedValue { kind: FormKind, name: String },

    /// Predicted scenario count is over the configured ceiling
    #[error("generation would emit {predicted} scenarios, over the limit of {limit}")]
    TooManyScenarios { predicted: u128, limit: u128 },

    /// n! * k^m does not fit in a u128
    #[error("scenario count overflows for {elements} elements, {inputs} inputs and {samples} samples")]
    CountOverflow {
        elements: usize,
        inputs: usize,
        samples: usize,
    },
}

/// Errors raised while reading configuration, snapshots or element lists.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parse error ({context}): {source}")]
    Yaml {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("JSON parse error ({context}): {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no element source given (expected an element list or a DOM snapshot)")]
    NoElementSource,

    #[error("unexpected snapshot structure: {0}")]
    SnapshotStructure(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}
