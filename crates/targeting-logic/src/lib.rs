// crates/targeting-logic/src/lib.rs
// ============================================================================
// Module: Targeting Logic Root
// Description: Public API surface for tri-state targeting evaluation.
// Purpose: Wire together tri-state values, logic tables, and rule sets.
// Dependencies: crate::{rule_set, traits, tristate}
// ============================================================================

//! ## Overview
//! Domain-agnostic building blocks for evaluating an ordered set of
//! independent predicates into a single tri-state verdict. Domains supply the
//! predicate type and its evaluation context; this crate owns how verdicts are
//! combined.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod rule_set;
pub mod traits;
pub mod tristate;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use rule_set::RuleSet;
pub use traits::TriStatePredicateEval;
pub use tristate::LogicMode;
pub use tristate::NoopTrace;
pub use tristate::PermissiveLogic;
pub use tristate::RuleTrace;
pub use tristate::StrictLogic;
pub use tristate::TriLogic;
pub use tristate::TriState;
