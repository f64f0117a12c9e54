//! Left-fold evaluation of an element/reagent sequence.
//!
//! `evaluate_full` is the authoritative end-of-round computation with a
//! strict length contract; `evaluate_partial` tolerates any prefix and
//! powers the live preview while the player is still placing pieces.

use num_bigint::BigInt;

use crate::game::operators;
use crate::game::{EngineError, OperatorId, Reagent};

/// One applied operator: the running value entering the step, the element
/// consumed, the result, and the rendered log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub a: BigInt,
    pub op: OperatorId,
    pub glyph: String,
    pub b: BigInt,
    pub result: BigInt,
    pub log: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub steps: Vec<Step>,
    pub final_value: BigInt,
}

fn fold_steps(elements: &[u32], reagents: &[Reagent], step_count: usize) -> Evaluation {
    let mut current = BigInt::from(elements[0]);
    let mut steps = Vec::with_capacity(step_count);
    for (reagent, element) in reagents.iter().zip(&elements[1..]).take(step_count) {
        let b = BigInt::from(*element);
        let result = operators::apply(reagent.op, &current, &b);
        // Log lines show the per-puzzle glyph, never the registry default.
        let log = format!("{current} {} {b} = {result}", reagent.glyph);
        steps.push(Step {
            a: current,
            op: reagent.op,
            glyph: reagent.glyph.clone(),
            b,
            result: result.clone(),
            log,
        });
        current = result;
    }
    Evaluation {
        steps,
        final_value: current,
    }
}

/// Authoritative evaluation. Requires exactly one more element than
/// reagents; anything else is a caller contract violation.
pub fn evaluate_full(elements: &[u32], reagents: &[Reagent]) -> Result<Evaluation, EngineError> {
    if elements.len() != reagents.len() + 1 {
        return Err(EngineError::LengthMismatch {
            elements: elements.len(),
            reagents: reagents.len(),
        });
    }
    Ok(fold_steps(elements, reagents, reagents.len()))
}

/// Prefix evaluation for the live preview: applies as many steps as the
/// placed pieces allow and silently ignores any surplus on either side.
/// `None` when no element has been placed yet.
pub fn evaluate_partial(elements: &[u32], reagents: &[Reagent]) -> Option<Evaluation> {
    if elements.is_empty() {
        return None;
    }
    let step_count = reagents.len().min(elements.len() - 1);
    Some(fold_steps(elements, reagents, step_count))
}
