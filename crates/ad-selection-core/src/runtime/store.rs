// crates/ad-selection-core/src/runtime/store.rs
// ============================================================================
// Module: In-Memory Stores
// Description: Simple in-memory collaborators for tests, fixtures, and the CLI.
// Purpose: Provide deterministic store implementations without external deps.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! In-memory implementations of the read collaborators. Insertion order is
//! retrieval order, which keeps ranking tie-breaks reproducible. Maps are
//! guarded by `RwLock` so stores can be shared across threads; a poisoned
//! lock surfaces as [`StoreError::Store`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::RwLock;

use crate::core::AdvertisementContent;
use crate::core::Category;
use crate::core::ContentId;
use crate::core::CustomerId;
use crate::core::MarketplaceId;
use crate::core::RequestContext;
use crate::core::Spend;
use crate::core::TargetingGroup;
use crate::interfaces::ContentStore;
use crate::interfaces::SpendStore;
use crate::interfaces::StoreError;
use crate::interfaces::TargetingGroupStore;

// ============================================================================
// SECTION: Content Store
// ============================================================================

/// In-memory content store keyed by marketplace.
#[derive(Debug, Default, Clone)]
pub struct InMemoryContentStore {
    /// Candidates per marketplace in insertion order.
    contents: Arc<RwLock<BTreeMap<MarketplaceId, Vec<AdvertisementContent>>>>,
}

impl InMemoryContentStore {
    /// Creates an empty content store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends content to its marketplace.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store lock is poisoned.
    pub fn insert(&self, content: AdvertisementContent) -> Result<(), StoreError> {
        let mut guard = self
            .contents
            .write()
            .map_err(|_| StoreError::Store("content store lock poisoned".to_string()))?;
        guard.entry(content.marketplace_id.clone()).or_default().push(content);
        Ok(())
    }
}

impl ContentStore for InMemoryContentStore {
    fn contents_for(
        &self,
        marketplace_id: &MarketplaceId,
    ) -> Result<Vec<AdvertisementContent>, StoreError> {
        let guard = self
            .contents
            .read()
            .map_err(|_| StoreError::Store("content store lock poisoned".to_string()))?;
        Ok(guard.get(marketplace_id).cloned().unwrap_or_default())
    }
}

// ============================================================================
// SECTION: Targeting Group Store
// ============================================================================

/// In-memory targeting group store keyed by content identifier.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTargetingGroupStore {
    /// Groups per content in insertion order.
    groups: Arc<RwLock<BTreeMap<ContentId, Vec<TargetingGroup>>>>,
}

impl InMemoryTargetingGroupStore {
    /// Creates an empty targeting group store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a targeting group to its content.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store lock is poisoned.
    pub fn insert(&self, group: TargetingGroup) -> Result<(), StoreError> {
        let mut guard = self
            .groups
            .write()
            .map_err(|_| StoreError::Store("targeting group store lock poisoned".to_string()))?;
        guard.entry(group.content_id.clone()).or_default().push(group);
        Ok(())
    }
}

impl TargetingGroupStore for InMemoryTargetingGroupStore {
    fn groups_for(&self, content_id: &ContentId) -> Result<Vec<TargetingGroup>, StoreError> {
        let guard = self
            .groups
            .read()
            .map_err(|_| StoreError::Store("targeting group store lock poisoned".to_string()))?;
        Ok(guard.get(content_id).cloned().unwrap_or_default())
    }
}

// ============================================================================
// SECTION: Spend Store
// ============================================================================

/// In-memory spend store keyed by customer.
#[derive(Debug, Default, Clone)]
pub struct InMemorySpendStore {
    /// Spend per customer and category.
    spend: Arc<RwLock<BTreeMap<CustomerId, BTreeMap<Category, Spend>>>>,
}

impl InMemorySpendStore {
    /// Creates an empty spend store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records spend for a customer and category, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store lock is poisoned.
    pub fn insert(
        &self,
        customer_id: CustomerId,
        category: Category,
        spend: Spend,
    ) -> Result<(), StoreError> {
        let mut guard = self
            .spend
            .write()
            .map_err(|_| StoreError::Store("spend store lock poisoned".to_string()))?;
        guard.entry(customer_id).or_default().insert(category, spend);
        Ok(())
    }
}

impl SpendStore for InMemorySpendStore {
    fn spend_for(
        &self,
        request: &RequestContext,
    ) -> Result<BTreeMap<Category, Spend>, StoreError> {
        let Some(customer_id) = request.customer_id() else {
            return Ok(BTreeMap::new());
        };
        let guard = self
            .spend
            .read()
            .map_err(|_| StoreError::Store("spend store lock poisoned".to_string()))?;
        Ok(guard.get(customer_id).cloned().unwrap_or_default())
    }
}
