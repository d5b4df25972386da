// crates/ad-selection-core/src/interfaces/mod.rs
// ============================================================================
// Module: Ad Selection Interfaces
// Description: Read-only collaborator contracts and the audit sink.
// Purpose: Define the surfaces the selection runtime consumes.
// Dependencies: crate::core, serde, targeting-logic, thiserror
// ============================================================================

//! ## Overview
//! Interfaces describe how ad selection reads content, targeting groups, and
//! spend metrics without embedding storage details. Every collaborator must
//! be safe for concurrent reads (`Send + Sync`); an unknown key yields an
//! empty result, and only a genuine read failure yields an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use targeting_logic::LogicMode;
use thiserror::Error;

use crate::core::AdvertisementContent;
use crate::core::Category;
use crate::core::ContentId;
use crate::core::MarketplaceId;
use crate::core::RequestContext;
use crate::core::Spend;
use crate::core::TargetingGroup;

// ============================================================================
// SECTION: Store Errors
// ============================================================================

/// Collaborator read errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store reported an error.
    #[error("data store error: {0}")]
    Store(String),
    /// The store could not be reached.
    #[error("data store unavailable: {0}")]
    Unavailable(String),
}

// ============================================================================
// SECTION: Data Stores
// ============================================================================

/// Source of candidate advertisements per marketplace.
pub trait ContentStore: Send + Sync {
    /// Returns candidates for the marketplace in retrieval order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be read.
    fn contents_for(
        &self,
        marketplace_id: &MarketplaceId,
    ) -> Result<Vec<AdvertisementContent>, StoreError>;
}

/// Source of targeting groups per content identifier.
pub trait TargetingGroupStore: Send + Sync {
    /// Returns the targeting groups gating the content in retrieval order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be read.
    fn groups_for(&self, content_id: &ContentId) -> Result<Vec<TargetingGroup>, StoreError>;
}

/// Source of per-category spend metrics for a requester.
pub trait SpendStore: Send + Sync {
    /// Returns spend keyed by category for the request.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be read.
    fn spend_for(&self, request: &RequestContext)
    -> Result<BTreeMap<Category, Spend>, StoreError>;
}

impl<T: ContentStore + ?Sized> ContentStore for Arc<T> {
    fn contents_for(
        &self,
        marketplace_id: &MarketplaceId,
    ) -> Result<Vec<AdvertisementContent>, StoreError> {
        (**self).contents_for(marketplace_id)
    }
}

impl<T: TargetingGroupStore + ?Sized> TargetingGroupStore for Arc<T> {
    fn groups_for(&self, content_id: &ContentId) -> Result<Vec<TargetingGroup>, StoreError> {
        (**self).groups_for(content_id)
    }
}

impl<T: SpendStore + ?Sized> SpendStore for Arc<T> {
    fn spend_for(
        &self,
        request: &RequestContext,
    ) -> Result<BTreeMap<Category, Spend>, StoreError> {
        (**self).spend_for(request)
    }
}

// ============================================================================
// SECTION: Audit Events
// ============================================================================

/// Severity attached to an audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditLevel {
    /// Routine outcome.
    Info,
    /// Reportable but non-fatal condition.
    Warn,
}

/// Kinds of selection audit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionEventKind {
    /// Request arrived without a marketplace identifier.
    MarketplaceMissing,
    /// An eligible advertisement was selected.
    SelectionCompleted,
    /// No candidate was eligible.
    SelectionEmpty,
    /// A collaborator read failed.
    StoreFailure,
}

impl SelectionEventKind {
    /// Returns the severity for the event kind.
    #[must_use]
    pub const fn level(self) -> AuditLevel {
        match self {
            Self::MarketplaceMissing | Self::StoreFailure => AuditLevel::Warn,
            Self::SelectionCompleted | Self::SelectionEmpty => AuditLevel::Info,
        }
    }
}

/// Structured audit record for one selection request.
///
/// Customer identifiers are never recorded; only recognition is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionAuditEvent {
    /// Event kind.
    pub event: SelectionEventKind,
    /// Event severity.
    pub level: AuditLevel,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Marketplace identifier when provided.
    pub marketplace_id: Option<String>,
    /// Whether the request carried a customer identifier.
    pub customer_recognized: bool,
    /// Conjunction table used for eligibility.
    pub logic_mode: LogicMode,
    /// Candidates retrieved for the marketplace.
    pub candidates: usize,
    /// Targeting groups that evaluated to true.
    pub eligible_groups: usize,
    /// Selected content identifier.
    pub content_id: Option<String>,
    /// Error description for failure events.
    pub error: Option<String>,
}

impl SelectionAuditEvent {
    /// Creates an event of the given kind with a current timestamp.
    #[must_use]
    pub fn new(
        event: SelectionEventKind,
        marketplace_id: Option<&str>,
        customer_recognized: bool,
        logic_mode: LogicMode,
    ) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event,
            level: event.level(),
            timestamp_ms,
            marketplace_id: marketplace_id.map(str::to_string),
            customer_recognized,
            logic_mode,
            candidates: 0,
            eligible_groups: 0,
            content_id: None,
            error: None,
        }
    }
}

// ============================================================================
// SECTION: Audit Sink
// ============================================================================

/// Sink for selection audit events.
pub trait SelectionAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &SelectionAuditEvent);
}
