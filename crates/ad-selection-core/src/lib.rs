// crates/ad-selection-core/src/lib.rs
// ============================================================================
// Module: Ad Selection Core Library
// Description: Public API surface for targeting evaluation and ad selection.
// Purpose: Expose core types, collaborator interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Ad selection picks, for one customer and marketplace, the eligible
//! advertisement with the highest click-through rate. Eligibility is decided
//! by tri-state targeting rules; data is read through explicit collaborator
//! interfaces so the core stays storage-agnostic.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::AuditLevel;
pub use interfaces::ContentStore;
pub use interfaces::SelectionAuditEvent;
pub use interfaces::SelectionAuditSink;
pub use interfaces::SelectionEventKind;
pub use interfaces::SpendStore;
pub use interfaces::StoreError;
pub use interfaces::TargetingGroupStore;
pub use runtime::AdvertisementSelector;
pub use runtime::FileAuditSink;
pub use runtime::GroupEvaluation;
pub use runtime::InMemoryContentStore;
pub use runtime::InMemorySpendStore;
pub use runtime::InMemoryTargetingGroupStore;
pub use runtime::NoopAuditSink;
pub use runtime::PredicateTraceEntry;
pub use runtime::RecordingAuditSink;
pub use runtime::SelectionError;
pub use runtime::SelectionReport;
pub use runtime::SelectorConfig;
pub use runtime::StderrAuditSink;
pub use runtime::TargetingEvaluator;
pub use targeting_logic::LogicMode;
pub use targeting_logic::TriState;
