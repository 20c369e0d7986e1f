use crate::error::GenerationError;
use crate::form::form_model::FormElement;

/// Size figures for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioCount {
    /// Discovered elements (n)
    pub elements: usize,
    /// Unresolved input slots (m)
    pub inputs: usize,
    /// Sample values (k)
    pub samples: usize,
    /// n! * k^m, or 0 when nothing was discovered
    pub scenarios: u128,
}

/// Predict how many scenarios `elements` and `samples` expand into.
pub fn predict(elements: &[FormElement], samples: &[String]) -> Result<ScenarioCount, GenerationError> {
    let inputs = elements.iter().filter(|el| el.is_unresolved_slot()).count();
    if samples.is_empty() {
        if let Some(first) = elements.iter().find(|el| el.is_unresolved_slot()) {
            return Err(GenerationError::EmptySamples {
                slot: first.name.clone(),
            });
        }
    }
    let scenarios = scenario_count(elements.len(), inputs, samples.len())?;

    Ok(ScenarioCount {
        elements: elements.len(),
        inputs,
        samples: samples.len(),
        scenarios,
    })
}

/// `n! * k^m` with overflow checking.
///
/// `n = 0` gives 0: nothing discovered means nothing to generate. `k = 0`
/// with `m > 0` is a configuration error rather than a count of zero.
pub fn scenario_count(elements: usize, inputs: usize, samples: usize) -> Result<u128, GenerationError> {
    if elements == 0 {
        return Ok(0);
    }
    if inputs > 0 && samples == 0 {
        return Err(GenerationError::EmptySamples {
            slot: format!("{inputs} input(s)"),
        });
    }

    let overflow = || GenerationError::CountOverflow {
        elements,
        inputs,
        samples,
    };

    let mut total: u128 = 1;
    for i in 2..=elements as u128 {
        total = total.checked_mul(i).ok_or_else(overflow)?;
    }

    let exponent = u32::try_from(inputs).map_err(|_| overflow())?;
    let assignments = (samples as u128).checked_pow(exponent).ok_or_else(overflow)?;

    total.checked_mul(assignments).ok_or_else(overflow)
}
