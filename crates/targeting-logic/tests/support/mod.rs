// crates/targeting-logic/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared helpers and fixture predicates for targeting logic tests.
// ============================================================================
//! ## Overview
//! Shared test helpers for consistent Result-based assertions plus a scripted
//! predicate whose verdicts come straight from the evaluation context.

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
    dead_code,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::cell::Cell;
use std::error::Error;
use std::fmt;

use targeting_logic::TriState;
use targeting_logic::TriStatePredicateEval;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across targeting logic integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl TestError {
    /// Creates a new test error with the provided message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition { Ok(()) } else { Err(Box::new(TestError::new(message))) }
}

// ========================================================================
// Scripted Predicate
// ========================================================================

/// Error produced by the failing scripted predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure(pub usize);

/// Predicate that reads its verdict from a slot in the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scripted {
    /// Returns the verdict stored at the slot.
    Slot(usize),
    /// Fails with [`ReadFailure`] carrying the slot.
    Fail(usize),
}

/// Context carrying per-slot verdicts and an evaluation counter.
pub struct ScriptContext {
    /// Verdicts indexed by slot.
    pub verdicts: Vec<TriState>,
    /// Number of predicate evaluations performed.
    pub calls: Cell<usize>,
}

impl ScriptContext {
    /// Creates a context with the provided verdicts.
    pub fn new(verdicts: Vec<TriState>) -> Self {
        Self {
            verdicts,
            calls: Cell::new(0),
        }
    }
}

impl TriStatePredicateEval for Scripted {
    type Context<'a> = ScriptContext;
    type Error = ReadFailure;

    fn eval_tristate(&self, ctx: &Self::Context<'_>) -> Result<TriState, Self::Error> {
        ctx.calls.set(ctx.calls.get() + 1);
        match self {
            Self::Slot(slot) => Ok(ctx.verdicts[*slot]),
            Self::Fail(slot) => Err(ReadFailure(*slot)),
        }
    }
}
