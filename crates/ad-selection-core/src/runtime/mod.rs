// crates/ad-selection-core/src/runtime/mod.rs
// ============================================================================
// Module: Ad Selection Runtime
// Description: Predicate evaluation, group evaluation, and ad selection.
// Purpose: Execute selection requests against collaborator interfaces.
// Dependencies: crate::{core, interfaces}, targeting-logic
// ============================================================================

//! ## Overview
//! Runtime modules implement the evaluation path bottom-up: comparisons feed
//! predicates, predicates feed the group evaluator, and the selector ranks
//! eligible groups. In-memory stores and audit sinks round out local use.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod audit;
pub mod comparison;
pub mod evaluator;
pub mod predicate;
pub mod selection;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::FileAuditSink;
pub use audit::NoopAuditSink;
pub use audit::RecordingAuditSink;
pub use audit::StderrAuditSink;
pub use evaluator::GroupEvaluation;
pub use evaluator::PredicateTraceEntry;
pub use evaluator::TargetingEvaluator;
pub use predicate::EvaluationContext;
pub use selection::AdvertisementSelector;
pub use selection::SelectionError;
pub use selection::SelectionReport;
pub use selection::SelectorConfig;
pub use store::InMemoryContentStore;
pub use store::InMemorySpendStore;
pub use store::InMemoryTargetingGroupStore;
