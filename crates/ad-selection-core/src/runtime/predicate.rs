// crates/ad-selection-core/src/runtime/predicate.rs
// ============================================================================
// Module: Predicate Evaluation
// Description: Tri-state evaluation of targeting predicates.
// Purpose: Convert spend lookups and request identity into predicate verdicts.
// Dependencies: crate::{core, interfaces}, targeting-logic
// ============================================================================

//! ## Overview
//! Spend predicates follow three rules in order:
//! - an unrecognized requester is `Indeterminate`, and inversion leaves it so;
//! - a category missing from the spend map is `True`, inverted or not;
//! - otherwise the comparison outcome is returned, negated when inverted.
//!
//! The spend store is only consulted for recognized requesters.

// ============================================================================
// SECTION: Imports
// ============================================================================

use targeting_logic::TriState;
use targeting_logic::TriStatePredicateEval;

use crate::core::CategorySpendPredicate;
use crate::core::RecognizedPredicate;
use crate::core::RequestContext;
use crate::core::Spend;
use crate::core::TargetingPredicate;
use crate::interfaces::SpendStore;
use crate::interfaces::StoreError;
use crate::runtime::comparison::compare;

// ============================================================================
// SECTION: Evaluation Context
// ============================================================================

/// Request identity plus the read-only spend collaborator.
#[derive(Clone, Copy)]
pub struct EvaluationContext<'a> {
    /// Request being evaluated.
    pub request: &'a RequestContext,
    /// Spend metric source.
    pub spend: &'a dyn SpendStore,
}

impl<'a> EvaluationContext<'a> {
    /// Creates an evaluation context.
    #[must_use]
    pub const fn new(request: &'a RequestContext, spend: &'a dyn SpendStore) -> Self {
        Self {
            request,
            spend,
        }
    }
}

// ============================================================================
// SECTION: Predicate Evaluation
// ============================================================================

impl TriStatePredicateEval for TargetingPredicate {
    type Context<'a> = EvaluationContext<'a>;
    type Error = StoreError;

    fn eval_tristate(&self, ctx: &Self::Context<'_>) -> Result<TriState, Self::Error> {
        match self {
            Self::CategorySpendValue(predicate) => {
                evaluate_spend(predicate, ctx, |spend| spend.usd_spent)
            }
            Self::CategorySpendFrequency(predicate) => {
                evaluate_spend(predicate, ctx, |spend| spend.number_of_purchases)
            }
            Self::Recognized(predicate) => Ok(evaluate_recognized(*predicate, ctx.request)),
        }
    }
}

/// Evaluates a category spend threshold using the selected metric.
fn evaluate_spend(
    predicate: &CategorySpendPredicate,
    ctx: &EvaluationContext<'_>,
    metric: fn(&Spend) -> i64,
) -> Result<TriState, StoreError> {
    if !ctx.request.is_recognized() {
        return Ok(TriState::Indeterminate);
    }

    let spend = ctx.spend.spend_for(ctx.request)?;
    let Some(record) = spend.get(&predicate.category) else {
        return Ok(TriState::True);
    };

    let outcome = TriState::from(compare(metric(record), predicate.comparison, predicate.value));
    Ok(apply_inverse(outcome, predicate.inverse))
}

/// Evaluates requester recognition.
fn evaluate_recognized(predicate: RecognizedPredicate, request: &RequestContext) -> TriState {
    apply_inverse(TriState::from(request.is_recognized()), predicate.inverse)
}

/// Negates a definite outcome when inversion is requested.
const fn apply_inverse(outcome: TriState, inverse: bool) -> TriState {
    if inverse { outcome.negate() } else { outcome }
}
