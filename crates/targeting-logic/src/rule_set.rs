// crates/targeting-logic/src/rule_set.rs
// ============================================================================
// Module: Rule Set
// Description: Ordered conjunction of independent predicates.
// Purpose: Fold predicate verdicts into one tri-state result.
// Dependencies: serde::{Deserialize, Serialize}, smallvec::SmallVec
// ============================================================================

//! ## Overview
//! A [`RuleSet`] is the flat conjunction that gates a targeting group. The
//! empty set is vacuously `True`. Evaluation walks predicates in stored order.
//! Strict logic stops at the first `False`, so later predicates are neither
//! evaluated nor traced and their errors never surface. Permissive logic
//! evaluates every predicate, and any predicate error fails the whole set.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use smallvec::SmallVec;

use crate::traits::TriStatePredicateEval;
use crate::tristate::NoopTrace;
use crate::tristate::RuleTrace;
use crate::tristate::TriLogic;
use crate::tristate::TriState;

// ============================================================================
// SECTION: Rule Set Definition
// ============================================================================

/// Ordered collection of predicates combined by conjunction
///
/// # Invariants
/// - Predicate order is preserved exactly as constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet<P> {
    /// Predicates in evaluation order.
    predicates: SmallVec<[P; 4]>,
}

impl<P> RuleSet<P> {
    /// Creates a rule set from predicates in evaluation order
    #[must_use]
    pub fn new(predicates: Vec<P>) -> Self {
        Self {
            predicates: predicates.into_iter().collect(),
        }
    }

    /// Creates an empty (vacuously true) rule set
    #[must_use]
    pub fn empty() -> Self {
        Self {
            predicates: SmallVec::new(),
        }
    }

    /// Appends a predicate to the end of the evaluation order
    pub fn push(&mut self, predicate: P) {
        self.predicates.push(predicate);
    }

    /// Returns the predicates in evaluation order
    #[must_use]
    pub fn predicates(&self) -> &[P] {
        &self.predicates
    }

    /// Returns the number of predicates
    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns true when the set has no predicates
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

// ============================================================================
// SECTION: Tri-State Evaluation
// ============================================================================

impl<P> RuleSet<P>
where
    P: TriStatePredicateEval,
{
    /// Evaluates the rule set with the supplied conjunction table
    ///
    /// # Errors
    ///
    /// Returns the first predicate error encountered.
    pub fn eval_tristate<L>(&self, ctx: &P::Context<'_>, logic: &L) -> Result<TriState, P::Error>
    where
        L: TriLogic,
    {
        let mut trace = NoopTrace;
        self.eval_tristate_with_trace(ctx, logic, &mut trace)
    }

    /// Evaluates the rule set and reports each predicate verdict to a trace hook
    ///
    /// # Errors
    ///
    /// Returns the first predicate error encountered. Under a logic that stops
    /// on `False`, predicates after the first `False` are never evaluated.
    pub fn eval_tristate_with_trace<L, T>(
        &self,
        ctx: &P::Context<'_>,
        logic: &L,
        trace: &mut T,
    ) -> Result<TriState, P::Error>
    where
        L: TriLogic,
        T: RuleTrace<P>,
    {
        let mut acc = TriState::True;
        for predicate in &self.predicates {
            let result = predicate.eval_tristate(ctx)?;
            trace.on_predicate_evaluated(predicate, result);
            acc = logic.and(acc, result);
            if result.is_false() && logic.stops_on_false() {
                break;
            }
        }
        Ok(acc)
    }
}

// ============================================================================
// SECTION: Standard Trait Implementations
// ============================================================================

impl<P> Default for RuleSet<P> {
    /// Creates an empty rule set (vacuously true)
    fn default() -> Self {
        Self::empty()
    }
}

impl<P> FromIterator<P> for RuleSet<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            predicates: iter.into_iter().collect(),
        }
    }
}

impl<P> From<Vec<P>> for RuleSet<P> {
    fn from(predicates: Vec<P>) -> Self {
        Self::new(predicates)
    }
}
