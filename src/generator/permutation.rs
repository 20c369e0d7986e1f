use tracing::debug;

use crate::form::form_model::{ActionOrder, FormElement};

// ============================================================================
// Permutation engine
// ============================================================================

/// Produce every ordering of `elements`.
///
/// Orders come out lexicographically by original index: position 0 tries
/// element 0 first, then element 1, and so on, with the remaining elements
/// kept in their original relative order. Duplicate elements are treated as
/// distinct positions, so the result always holds exactly `n!` orders.
///
/// An empty input yields no orders at all (not one empty order).
pub fn permute(elements: &[FormElement]) -> Vec<ActionOrder> {
    let mut orders = Vec::new();
    if elements.is_empty() {
        return orders;
    }

    let mut used = vec![false; elements.len()];
    let mut chosen = Vec::with_capacity(elements.len());
    select_next(elements, &mut used, &mut chosen, &mut orders);

    debug!(elements = elements.len(), orders = orders.len(), "permuted elements");
    orders
}

/// Place each still-unused element at the next position, recurse, then undo.
fn select_next(
    elements: &[FormElement],
    used: &mut [bool],
    chosen: &mut Vec<usize>,
    orders: &mut Vec<ActionOrder>,
) {
    if chosen.len() == elements.len() {
        orders.push(chosen.iter().map(|&i| elements[i].clone()).collect());
        return;
    }

    for i in 0..elements.len() {
        if used[i] {
            continue;
        }

        used[i] = true;
        chosen.push(i);

        select_next(elements, used, chosen, orders);

        chosen.pop();
        used[i] = false;
    }
}
