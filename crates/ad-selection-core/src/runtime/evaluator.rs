// crates/ad-selection-core/src/runtime/evaluator.rs
// ============================================================================
// Module: Targeting Evaluator
// Description: Group-level tri-state evaluation and trace collection.
// Purpose: Fold a targeting group's predicates into one eligibility verdict.
// Dependencies: crate::{core, interfaces, runtime::predicate}, targeting-logic
// ============================================================================

//! ## Overview
//! The evaluator bridges targeting groups and the tri-state rule set. The
//! logic mode decides how `Indeterminate` verdicts combine; the default
//! strict mode keeps them, so an unrecognized customer never makes a group
//! eligible through a spend rule alone.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use targeting_logic::LogicMode;
use targeting_logic::RuleTrace;
use targeting_logic::TriState;

use crate::core::ContentId;
use crate::core::RequestContext;
use crate::core::TargetingGroup;
use crate::core::TargetingGroupId;
use crate::core::TargetingPredicate;
use crate::interfaces::SpendStore;
use crate::interfaces::StoreError;
use crate::runtime::predicate::EvaluationContext;

// ============================================================================
// SECTION: Evaluation Records
// ============================================================================

/// Verdict recorded for one evaluated predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredicateTraceEntry {
    /// Predicate that was evaluated.
    pub predicate: TargetingPredicate,
    /// Resulting verdict.
    pub status: TriState,
}

/// Outcome of evaluating one targeting group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupEvaluation {
    /// Evaluated targeting group.
    pub targeting_group_id: TargetingGroupId,
    /// Content gated by the group.
    pub content_id: ContentId,
    /// Group click-through rate.
    pub click_through_rate: f64,
    /// Combined verdict.
    pub status: TriState,
    /// Per-predicate verdicts in evaluation order.
    pub trace: Vec<PredicateTraceEntry>,
}

impl GroupEvaluation {
    /// Returns true when the group is eligible.
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        self.status.is_true()
    }
}

// ============================================================================
// SECTION: Targeting Evaluator
// ============================================================================

/// Evaluates targeting groups against a request using tri-state logic.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetingEvaluator {
    /// Conjunction table used to combine predicate verdicts.
    logic: LogicMode,
}

impl TargetingEvaluator {
    /// Creates an evaluator with the provided logic mode.
    #[must_use]
    pub const fn new(logic: LogicMode) -> Self {
        Self {
            logic,
        }
    }

    /// Returns the active logic mode.
    #[must_use]
    pub const fn logic(&self) -> LogicMode {
        self.logic
    }

    /// Evaluates a targeting group and returns its combined verdict.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when a predicate cannot read spend data.
    pub fn evaluate(
        &self,
        group: &TargetingGroup,
        request: &RequestContext,
        spend: &dyn SpendStore,
    ) -> Result<TriState, StoreError> {
        let ctx = EvaluationContext::new(request, spend);
        group.predicates.eval_tristate(&ctx, &self.logic)
    }

    /// Evaluates a targeting group and records every predicate verdict.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when a predicate cannot read spend data.
    pub fn evaluate_traced(
        &self,
        group: &TargetingGroup,
        request: &RequestContext,
        spend: &dyn SpendStore,
    ) -> Result<GroupEvaluation, StoreError> {
        let ctx = EvaluationContext::new(request, spend);
        let mut trace = GroupTrace::default();
        let status = group.predicates.eval_tristate_with_trace(&ctx, &self.logic, &mut trace)?;
        Ok(GroupEvaluation {
            targeting_group_id: group.targeting_group_id.clone(),
            content_id: group.content_id.clone(),
            click_through_rate: group.click_through_rate,
            status,
            trace: trace.entries,
        })
    }
}

// ============================================================================
// SECTION: Group Trace
// ============================================================================

/// Predicate trace collector.
#[derive(Default)]
struct GroupTrace {
    /// Trace entries captured during evaluation.
    entries: Vec<PredicateTraceEntry>,
}

impl RuleTrace<TargetingPredicate> for GroupTrace {
    fn on_predicate_evaluated(&mut self, predicate: &TargetingPredicate, result: TriState) {
        self.entries.push(PredicateTraceEntry {
            predicate: predicate.clone(),
            status: result,
        });
    }
}
