mod common;

use std::collections::HashSet;

use common::fixtures::{names, samples, values};
use form_scenarios::error::GenerationError;
use form_scenarios::form::form_model::{FormElement, unresolved_slots};
use form_scenarios::generator::expansion::expand_slots;
use form_scenarios::generator::permutation::permute;

// =========================================================================
// Basic expansion
// =========================================================================

#[test]
fn single_slot_expands_once_per_sample() {
    let orders = vec![vec![FormElement::input("email"), FormElement::button("Login")]];
    let resolved = expand_slots(orders, &samples(&["a@x.com", "pw"])).unwrap();

    assert_eq!(resolved.len(), 2);
    assert_eq!(values(&resolved[0]), vec![Some("a@x.com".to_string())]);
    assert_eq!(values(&resolved[1]), vec![Some("pw".to_string())]);
    assert!(resolved.iter().all(|o| unresolved_slots(o) == 0));
}

#[test]
fn two_slots_cover_every_combination_leftmost_first() {
    let orders = vec![vec![
        FormElement::input("email"),
        FormElement::input("password"),
    ]];
    let resolved = expand_slots(orders, &samples(&["x", "y"])).unwrap();

    let got: Vec<Vec<Option<String>>> = resolved.iter().map(|o| values(o)).collect();
    let some = |a: &str, b: &str| vec![Some(a.to_string()), Some(b.to_string())];

    assert_eq!(
        got,
        vec![some("x", "x"), some("x", "y"), some("y", "x"), some("y", "y")],
        "Leftmost slot varies slowest"
    );
}

#[test]
fn order_of_incoming_orders_is_outermost() {
    let elements = vec![FormElement::input("email"), FormElement::button("Login")];
    let resolved = expand_slots(permute(&elements), &samples(&["a", "b"])).unwrap();

    let got: Vec<(Vec<String>, Vec<Option<String>>)> =
        resolved.iter().map(|o| (names(o), values(o))).collect();

    assert_eq!(got.len(), 4);
    assert_eq!(got[0].0, vec!["email", "Login"]);
    assert_eq!(got[1].0, vec!["email", "Login"]);
    assert_eq!(got[2].0, vec!["Login", "email"]);
    assert_eq!(got[3].0, vec!["Login", "email"]);
    assert_eq!(got[0].1, vec![Some("a".to_string())]);
    assert_eq!(got[1].1, vec![Some("b".to_string())]);
    assert_eq!(got[2].1, vec![Some("a".to_string())]);
    assert_eq!(got[3].1, vec![Some("b".to_string())]);
}

#[test]
fn slots_are_independent_of_each_other() {
    let orders = vec![vec![
        FormElement::input("a"),
        FormElement::input("b"),
        FormElement::input("c"),
    ]];
    let resolved = expand_slots(orders, &samples(&["1", "2", "3"])).unwrap();

    assert_eq!(resolved.len(), 27);
    let distinct: HashSet<Vec<Option<String>>> = resolved.iter().map(|o| values(o)).collect();
    assert_eq!(distinct.len(), 27, "Every assignment appears exactly once");
}

// =========================================================================
// Edge cases
// =========================================================================

#[test]
fn orders_without_inputs_pass_through_unchanged() {
    let orders = permute(&[FormElement::button("Submit"), FormElement::link("Help")]);
    let resolved = expand_slots(orders.clone(), &samples(&["ignored"])).unwrap();
    assert_eq!(resolved, orders);
}

#[test]
fn orders_without_inputs_need_no_samples() {
    let orders = permute(&[FormElement::button("Submit")]);
    let resolved = expand_slots(orders.clone(), &[]).unwrap();
    assert_eq!(resolved, orders);
}

#[test]
fn empty_samples_with_a_slot_fails_fast() {
    let orders = vec![vec![FormElement::button("Go"), FormElement::input("email")]];
    let err = expand_slots(orders, &[]).unwrap_err();
    assert_eq!(
        err,
        GenerationError::EmptySamples {
            slot: "email".into()
        }
    );
}

#[test]
fn already_resolved_orders_come_first() {
    let mut done = FormElement::input("email");
    done.resolve("fixed");
    let orders = vec![
        vec![FormElement::input("email")],
        vec![done.clone()],
    ];

    let resolved = expand_slots(orders, &samples(&["a", "b"])).unwrap();
    assert_eq!(resolved.len(), 3);
    assert_eq!(resolved[0], vec![done]);
    assert_eq!(values(&resolved[1]), vec![Some("a".to_string())]);
    assert_eq!(values(&resolved[2]), vec![Some("b".to_string())]);
}

#[test]
fn resolved_copies_do_not_share_values() {
    let orders = vec![vec![FormElement::input("email")]];
    let mut resolved = expand_slots(orders, &samples(&["a", "b"])).unwrap();

    resolved[0][0].value = Some("changed".into());
    assert_eq!(resolved[1][0].value.as_deref(), Some("b"));
}
