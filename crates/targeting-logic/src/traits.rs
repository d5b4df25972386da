// crates/targeting-logic/src/traits.rs
// ============================================================================
// Module: Predicate Traits
// Description: Evaluation contract for domain predicates.
// Purpose: Let domains plug fallible, context-driven predicates into rule sets.
// Dependencies: crate::tristate
// ============================================================================

//! ## Overview
//! A predicate evaluates against a domain context and yields a tri-state
//! verdict. Evaluation may consult read-only collaborators through the
//! context, so it can fail; failures are propagated untouched and are never
//! folded into a verdict.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::tristate::TriState;

// ============================================================================
// SECTION: Predicate Trait
// ============================================================================

/// Predicate evaluation that can return `Indeterminate`
pub trait TriStatePredicateEval {
    /// Domain-specific evaluation context
    ///
    /// Typically bundles the request identity with read-only data sources.
    type Context<'a>;

    /// Error raised when a collaborator read fails
    type Error;

    /// Evaluates the predicate against the context
    ///
    /// Returns `TriState::Indeterminate` when the context lacks the data
    /// required to decide.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` when an underlying data source cannot be read.
    fn eval_tristate(&self, ctx: &Self::Context<'_>) -> Result<TriState, Self::Error>;
}
