use crate::error::GenerationError;
use crate::form::form_model::{FormElement, FormKind};

use super::feature_model::{RenderedScenario, ScenarioConfig};
use super::steps::StepPattern;

// ============================================================================
// Scenario rendering
// ============================================================================

/// Phrase a single action as the text of a `When` step.
pub fn render_when(element: &FormElement) -> Result<String, GenerationError> {
    match (element.kind, element.value.as_deref()) {
        (FormKind::Input, Some(value)) => Ok(StepPattern::TypeInto.phrase(&[value, element.name.as_str()])),
        (FormKind::Input, None) => Err(GenerationError::UnresolvedSlot {
            name: element.name.clone(),
        }),
        (FormKind::Button, None) => Ok(StepPattern::ClickButton.phrase(&[element.name.as_str()])),
        (FormKind::Link, None) => Ok(StepPattern::ClickLink.phrase(&[element.name.as_str()])),
        (kind, Some(_)) => Err(GenerationError::UnexpectedValue {
            kind,
            name: element.name.clone(),
        }),
    }
}

/// Render one fully resolved order.
pub fn render_scenario(
    order: &[FormElement],
    config: &ScenarioConfig,
) -> Result<RenderedScenario, GenerationError> {
    let whens = order
        .iter()
        .map(render_when)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RenderedScenario {
        given: StepPattern::OnPage.phrase(&[config.current_page.as_str()]),
        whens,
        then: config.default_then.clone(),
    })
}

// ============================================================================
// Feature file text
// ============================================================================

/// Format the feature header and every scenario as feature-file text.
///
/// Produces output like:
/// ```text
/// Feature: Login
///   As a website user
///   I need to authenticate myself
///   So that I can gain access to my data
///
///   Scenario: Entering in credentials 1
///     Given I am on the "login" page
///     When I type "a@x.com" into the "email" field
///     When I click the "Login" button
///     Then ASSERT EXPECTATION
/// ```
///
/// With no scenarios only the header is written.
pub fn render_feature(config: &ScenarioConfig, scenarios: &[RenderedScenario]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Feature: {}\n", config.feature_name));
    out.push_str(&format!("  As a {}\n", config.stakeholder));
    out.push_str(&format!("  I need to {}\n", config.task));
    out.push_str(&format!("  So that I can {}\n", config.justification));

    for (index, scenario) in scenarios.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!(
            "  Scenario: {} {}\n",
            config.scenario_description,
            index + 1
        ));
        out.push_str(&format!("    Given {}\n", scenario.given));
        for when in &scenario.whens {
            out.push_str(&format!("    When {}\n", when));
        }
        out.push_str(&format!("    Then {}\n", scenario.then));
    }

    out
}
