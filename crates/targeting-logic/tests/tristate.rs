// crates/targeting-logic/tests/tristate.rs
// ============================================================================
// Module: Tri-State Tests
// Description: Truth tables for the strict and permissive conjunctions.
// ============================================================================
//! ## Overview
//! Pins the full conjunction tables for both logic modes and the value helpers.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use targeting_logic::LogicMode;
use targeting_logic::PermissiveLogic;
use targeting_logic::StrictLogic;
use targeting_logic::TriLogic;
use targeting_logic::TriState;
use support::TestResult;
use support::ensure;

/// All tri-state values in a fixed order.
const ALL: [TriState; 3] = [TriState::True, TriState::False, TriState::Indeterminate];

// ============================================================================
// SECTION: Strict Logic
// ============================================================================

#[test]
fn test_strict_and_table() -> TestResult {
    use TriState::False as F;
    use TriState::Indeterminate as I;
    use TriState::True as T;

    let table = [
        (T, T, T),
        (T, F, F),
        (T, I, I),
        (F, T, F),
        (F, F, F),
        (F, I, F),
        (I, T, I),
        (I, F, F),
        (I, I, I),
    ];
    for (lhs, rhs, expected) in table {
        let actual = StrictLogic.and(lhs, rhs);
        ensure(actual == expected, format!("strict {lhs} AND {rhs} gave {actual}"))?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Permissive Logic
// ============================================================================

#[test]
fn test_permissive_and_table() -> TestResult {
    use TriState::False as F;
    use TriState::Indeterminate as I;
    use TriState::True as T;

    let table = [
        (T, T, T),
        (T, F, F),
        (T, I, T),
        (F, T, F),
        (F, F, F),
        (F, I, F),
        (I, T, T),
        (I, F, F),
        (I, I, T),
    ];
    for (lhs, rhs, expected) in table {
        let actual = PermissiveLogic.and(lhs, rhs);
        ensure(actual == expected, format!("permissive {lhs} AND {rhs} gave {actual}"))?;
    }
    Ok(())
}

#[test]
fn test_logic_mode_delegates_to_tables() -> TestResult {
    for lhs in ALL {
        for rhs in ALL {
            ensure(
                LogicMode::Strict.and(lhs, rhs) == StrictLogic.and(lhs, rhs),
                "LogicMode::Strict must match StrictLogic",
            )?;
            ensure(
                LogicMode::Permissive.and(lhs, rhs) == PermissiveLogic.and(lhs, rhs),
                "LogicMode::Permissive must match PermissiveLogic",
            )?;
        }
    }
    ensure(LogicMode::default() == LogicMode::Strict, "strict must be the default mode")?;
    Ok(())
}

#[test]
fn test_only_strict_logic_stops_on_false() -> TestResult {
    ensure(StrictLogic.stops_on_false(), "strict logic may stop at the first false")?;
    ensure(!PermissiveLogic.stops_on_false(), "permissive logic evaluates every predicate")?;
    ensure(LogicMode::Strict.stops_on_false(), "LogicMode::Strict must match StrictLogic")?;
    ensure(
        !LogicMode::Permissive.stops_on_false(),
        "LogicMode::Permissive must match PermissiveLogic",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Value Helpers
// ============================================================================

#[test]
fn test_negate_keeps_indeterminate() -> TestResult {
    ensure(TriState::True.negate() == TriState::False, "NOT true")?;
    ensure(TriState::False.negate() == TriState::True, "NOT false")?;
    ensure(
        TriState::Indeterminate.negate() == TriState::Indeterminate,
        "NOT indeterminate must stay indeterminate",
    )?;
    Ok(())
}

#[test]
fn test_predicates_and_conversion() -> TestResult {
    ensure(TriState::from(true).is_true(), "true converts to True")?;
    ensure(TriState::from(false).is_false(), "false converts to False")?;
    ensure(TriState::Indeterminate.is_indeterminate(), "Indeterminate is indeterminate")?;
    ensure(!TriState::Indeterminate.is_false(), "Indeterminate is not False")?;
    ensure(TriState::Indeterminate != TriState::False, "Indeterminate never equals False")?;
    Ok(())
}

#[test]
fn test_serde_labels() -> TestResult {
    let encoded = serde_json::to_string(&TriState::Indeterminate)?;
    ensure(encoded == "\"indeterminate\"", format!("unexpected encoding {encoded}"))?;
    let mode: LogicMode = serde_json::from_str("\"permissive\"")?;
    ensure(mode == LogicMode::Permissive, "permissive label must decode")?;
    ensure(LogicMode::Strict.to_string() == "strict", "strict label")?;
    Ok(())
}
