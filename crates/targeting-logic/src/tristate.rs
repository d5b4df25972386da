// crates/targeting-logic/src/tristate.rs
// ============================================================================
// Module: Tri-State Logic
// Description: Tri-state truth values and selectable conjunction tables.
// Purpose: Provide deterministic tri-state combination for targeting rules.
// Dependencies: serde::{Deserialize, Serialize}
// ============================================================================

//! ## Overview
//! Defines tri-state truth values (`true/false/indeterminate`) and the
//! conjunction tables used to fold predicate verdicts together. The default
//! table is strict (strong Kleene): an indeterminate verdict blocks
//! eligibility unless a definite `False` is also present.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Tri-State Value
// ============================================================================

/// Tri-state truth value for targeting evaluation
///
/// # Invariants
/// - Represents a closed set of truth values: true, false, or indeterminate.
/// - `Indeterminate` is never equal to `False`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriState {
    /// Definitively true
    True,
    /// Definitively false
    False,
    /// Could not be evaluated (for example, an unrecognized customer)
    Indeterminate,
}

impl TriState {
    /// Returns true if the value is `True`
    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    /// Returns true if the value is `False`
    #[must_use]
    pub const fn is_false(self) -> bool {
        matches!(self, Self::False)
    }

    /// Returns true if the value is `Indeterminate`
    #[must_use]
    pub const fn is_indeterminate(self) -> bool {
        matches!(self, Self::Indeterminate)
    }

    /// Logical NOT; `Indeterminate` stays `Indeterminate`
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
            Self::Indeterminate => Self::Indeterminate,
        }
    }

    /// Returns the lowercase label used in logs and reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::Indeterminate => "indeterminate",
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Logic Tables
// ============================================================================

/// Conjunction table used to fold predicate verdicts
pub trait TriLogic {
    /// Logical AND for tri-state values
    fn and(&self, lhs: TriState, rhs: TriState) -> TriState;

    /// Returns true when folding may stop at the first `False` verdict
    fn stops_on_false(&self) -> bool;
}

/// Strict conjunction (strong Kleene AND)
///
/// `False` dominates, then `Indeterminate`, then `True`.
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Clone, Copy)]
pub struct StrictLogic;

impl TriLogic for StrictLogic {
    fn and(&self, lhs: TriState, rhs: TriState) -> TriState {
        match (lhs, rhs) {
            (TriState::False, _) | (_, TriState::False) => TriState::False,
            (TriState::True, TriState::True) => TriState::True,
            _ => TriState::Indeterminate,
        }
    }

    fn stops_on_false(&self) -> bool {
        true
    }
}

/// Permissive conjunction
///
/// Only `False` is significant; `Indeterminate` is absorbed into `True`.
/// Every predicate is still evaluated, so a later predicate error is never
/// masked by an earlier `False`.
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Clone, Copy)]
pub struct PermissiveLogic;

impl TriLogic for PermissiveLogic {
    fn and(&self, lhs: TriState, rhs: TriState) -> TriState {
        match (lhs, rhs) {
            (TriState::False, _) | (_, TriState::False) => TriState::False,
            _ => TriState::True,
        }
    }

    fn stops_on_false(&self) -> bool {
        false
    }
}

/// Runtime-selectable logic mode
///
/// # Invariants
/// - Enumerates the supported conjunction tables; `Strict` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicMode {
    /// Strict conjunction (default)
    #[default]
    Strict,
    /// Permissive conjunction
    Permissive,
}

impl LogicMode {
    /// Returns the lowercase label used in configuration and logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }
}

impl fmt::Display for LogicMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TriLogic for LogicMode {
    fn and(&self, lhs: TriState, rhs: TriState) -> TriState {
        match self {
            Self::Strict => StrictLogic.and(lhs, rhs),
            Self::Permissive => PermissiveLogic.and(lhs, rhs),
        }
    }

    fn stops_on_false(&self) -> bool {
        match self {
            Self::Strict => StrictLogic.stops_on_false(),
            Self::Permissive => PermissiveLogic.stops_on_false(),
        }
    }
}

// ============================================================================
// SECTION: Trace Hooks
// ============================================================================

/// Trace hook for predicate evaluation
pub trait RuleTrace<P> {
    /// Called whenever a predicate is evaluated
    fn on_predicate_evaluated(&mut self, predicate: &P, result: TriState);
}

/// No-op trace hook for fast paths
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Default)]
pub struct NoopTrace;

impl<P> RuleTrace<P> for NoopTrace {
    fn on_predicate_evaluated(&mut self, _predicate: &P, _result: TriState) {}
}
