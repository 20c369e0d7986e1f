use std::collections::VecDeque;

use tracing::debug;

use crate::error::GenerationError;
use crate::form::form_model::{ActionOrder, first_unresolved_slot};

// ============================================================================
// Slot-expansion engine
// ============================================================================

/// Resolve every input slot of every order against every sample.
///
/// Works as a FIFO worklist: the oldest incomplete order is taken off the
/// queue and replaced by one copy per sample, each with its leftmost open slot
/// filled; copies that still have open slots go to the back of the queue.
/// An order with `m` open slots therefore ends up as `samples.len()^m`
/// resolved orders, emitted in worklist order: incoming order outermost,
/// sample choice innermost. Orders without open slots pass through first,
/// unchanged and in their original order.
///
/// Every copy is a deep clone, so filling one order's slot never touches
/// another's.
pub fn expand_slots(
    orders: Vec<ActionOrder>,
    samples: &[String],
) -> Result<Vec<ActionOrder>, GenerationError> {
    let mut resolved = Vec::with_capacity(orders.len());
    let mut worklist = VecDeque::new();

    for order in orders {
        match first_unresolved_slot(&order) {
            Some(slot) if samples.is_empty() => {
                return Err(GenerationError::EmptySamples {
                    slot: order[slot].name.clone(),
                });
            }
            Some(_) => worklist.push_back(order),
            None => resolved.push(order),
        }
    }

    let passthrough = resolved.len();

    while let Some(incomplete) = worklist.pop_front() {
        let Some(slot) = first_unresolved_slot(&incomplete) else {
            resolved.push(incomplete);
            continue;
        };

        for sample in samples {
            let mut copy = incomplete.clone();
            copy[slot].resolve(sample);

            if first_unresolved_slot(&copy).is_some() {
                worklist.push_back(copy);
            } else {
                resolved.push(copy);
            }
        }
    }

    debug!(
        passthrough,
        expanded = resolved.len() - passthrough,
        samples = samples.len(),
        "expanded input slots"
    );

    Ok(resolved)
}
