#![allow(dead_code)]

use form_scenarios::feature::feature_model::ScenarioConfig;
use form_scenarios::form::form_model::{FormElement, FormKind};

pub fn login_config(samples: &[&str]) -> ScenarioConfig {
    ScenarioConfig {
        feature_name: "Login".into(),
        stakeholder: "website user".into(),
        task: "authenticate myself".into(),
        justification: "gain access to my data".into(),
        scenario_description: "Entering in credentials".into(),
        current_page: "login".into(),
        default_then: "ASSERT EXPECTATION".into(),
        text_input_samples: samples.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn samples(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

pub fn names(order: &[FormElement]) -> Vec<String> {
    order.iter().map(|el| el.name.clone()).collect()
}

pub fn values(order: &[FormElement]) -> Vec<Option<String>> {
    order
        .iter()
        .filter(|el| el.kind == FormKind::Input)
        .map(|el| el.value.clone())
        .collect()
}

pub fn factorial(n: usize) -> usize {
    (1..=n).product()
}

pub const LOGIN_SCENARIO_YAML: &str = r#"
featureName: Login
stakeholder: website user
task: authenticate myself
justification: gain access to my data
scenarioDescription: Entering in credentials
currentPage: login
defaultThen: ASSERT EXPECTATION
textInputSamples:
  - a@x.com
  - pw
"#;

pub const LOGIN_SNAPSHOT_JSON: &str = r#"{
  "url": "https://example.com/login",
  "title": "Login",
  "dom": [
    {"tag": "h1", "text": "Sign in", "disabled": false},
    {"tag": "input", "type": "email", "formControlName": "email", "name": "user_email", "disabled": false},
    {"tag": "input", "type": "password", "name": "password", "disabled": false},
    {"tag": "input", "type": "checkbox", "name": "remember", "disabled": false},
    {"tag": "input", "type": "hidden", "name": "csrf", "disabled": false},
    {"tag": "button", "text": " Login ", "type": "submit", "disabled": false},
    {"tag": "button", "text": "Archived", "disabled": true},
    {"tag": "a", "text": "Help", "disabled": false},
    {"tag": "a", "ariaLabel": "Close dialog", "disabled": false}
  ]
}"#;
