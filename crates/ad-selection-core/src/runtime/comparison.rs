// crates/ad-selection-core/src/runtime/comparison.rs
// ============================================================================
// Module: Threshold Comparison
// Description: Integer comparison between a metric and a threshold.
// Purpose: Give predicates one definitive comparison routine.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Spend metrics are whole integers, so every comparison is total and
//! definite. Missing data is handled by the caller before reaching here.

use crate::core::Comparison;

/// Returns `metric <comparison> threshold`.
#[must_use]
pub const fn compare(metric: i64, comparison: Comparison, threshold: i64) -> bool {
    match comparison {
        Comparison::Lt => metric < threshold,
        Comparison::Le => metric <= threshold,
        Comparison::Gt => metric > threshold,
        Comparison::Ge => metric >= threshold,
        Comparison::Eq => metric == threshold,
        Comparison::Ne => metric != threshold,
    }
}
