// crates/ad-selection-config/src/catalog.rs
// ============================================================================
// Module: Catalog Fixtures
// Description: TOML catalogs of content, targeting groups, and spend records.
// Purpose: Seed the in-memory stores for local selection runs.
// Dependencies: ad-selection-core, serde, toml
// ============================================================================

//! ## Overview
//! A catalog lists `[[contents]]`, `[[targeting_groups]]` (each with
//! `[[targeting_groups.predicates]]` tagged by `kind`), and `[[spend]]`
//! records. Loading enforces the same path limits as configuration plus a
//! larger size cap. Validation runs before any store is built; record order
//! in the file becomes retrieval order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use ad_selection_core::AdvertisementContent;
use ad_selection_core::AdvertisementSelector;
use ad_selection_core::Category;
use ad_selection_core::CustomerId;
use ad_selection_core::InMemoryContentStore;
use ad_selection_core::InMemorySpendStore;
use ad_selection_core::InMemoryTargetingGroupStore;
use ad_selection_core::SelectorConfig;
use ad_selection_core::Spend;
use ad_selection_core::StoreError;
use ad_selection_core::TargetingGroup;
use ad_selection_core::TargetingPredicate;
use serde::Deserialize;
use thiserror::Error;

use crate::config::check_path_limits;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum catalog file size in bytes.
pub(crate) const MAX_CATALOG_FILE_SIZE: usize = 8 * 1024 * 1024;

// ============================================================================
// SECTION: Catalog Types
// ============================================================================

/// Spend recorded for one customer and category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpendRecord {
    /// Customer the spend belongs to.
    pub customer_id: CustomerId,
    /// Category the spend was made in.
    pub category: Category,
    /// Number of purchases.
    #[serde(default)]
    pub number_of_purchases: i64,
    /// Dollars spent.
    #[serde(default)]
    pub usd_spent: i64,
}

/// Catalog fixture contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    /// Candidate content in retrieval order.
    #[serde(default)]
    pub contents: Vec<AdvertisementContent>,
    /// Targeting groups in retrieval order.
    #[serde(default)]
    pub targeting_groups: Vec<TargetingGroup>,
    /// Spend records.
    #[serde(default)]
    pub spend: Vec<SpendRecord>,
}

/// In-memory stores seeded from a catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogStores {
    /// Content store.
    pub contents: InMemoryContentStore,
    /// Targeting group store.
    pub targeting: InMemoryTargetingGroupStore,
    /// Spend store.
    pub spend: InMemorySpendStore,
}

/// Selector backed by catalog stores.
pub type CatalogSelector =
    AdvertisementSelector<InMemoryContentStore, InMemoryTargetingGroupStore, InMemorySpendStore>;

impl CatalogStores {
    /// Wraps the stores in a selector.
    #[must_use]
    pub fn into_selector(self, config: SelectorConfig) -> CatalogSelector {
        AdvertisementSelector::new(self.contents, self.targeting, self.spend, config)
    }
}

impl Catalog {
    /// Loads and validates a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when loading or validation fails.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        check_path_limits(path)
            .map_err(|reason| CatalogError::Invalid(format!("catalog {reason}")))?;
        let bytes = fs::read(path).map_err(|err| CatalogError::Io(err.to_string()))?;
        if bytes.len() > MAX_CATALOG_FILE_SIZE {
            return Err(CatalogError::Invalid("catalog file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| CatalogError::Invalid("catalog file must be utf-8".to_string()))?;
        let catalog = Self::parse(content)?;
        Ok(catalog)
    }

    /// Parses and validates catalog TOML.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when parsing or validation fails.
    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        let catalog: Self =
            toml::from_str(content).map_err(|err| CatalogError::Parse(err.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Validates identifiers, references, rates, and spend key uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Invalid`] on the first violation.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut content_ids = BTreeSet::new();
        for (index, content) in self.contents.iter().enumerate() {
            let field = format!("contents[{index}]");
            require_non_empty(&field, "content_id", content.content_id.as_str())?;
            require_non_empty(&field, "marketplace_id", content.marketplace_id.as_str())?;
            require_rate(&field, content.click_through_rate)?;
            if !content_ids.insert(content.content_id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "{field}.content_id {} is duplicated",
                    content.content_id
                )));
            }
        }

        let mut group_ids = BTreeSet::new();
        for (index, group) in self.targeting_groups.iter().enumerate() {
            let field = format!("targeting_groups[{index}]");
            require_non_empty(&field, "targeting_group_id", group.targeting_group_id.as_str())?;
            require_non_empty(&field, "content_id", group.content_id.as_str())?;
            require_rate(&field, group.click_through_rate)?;
            if !content_ids.contains(group.content_id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "{field}.content_id {} does not match any content",
                    group.content_id
                )));
            }
            if !group_ids.insert(group.targeting_group_id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "{field}.targeting_group_id {} is duplicated",
                    group.targeting_group_id
                )));
            }
            for (position, predicate) in group.predicates.predicates().iter().enumerate() {
                validate_predicate(&format!("{field}.predicates[{position}]"), predicate)?;
            }
        }

        let mut spend_keys = BTreeSet::new();
        for (index, record) in self.spend.iter().enumerate() {
            let field = format!("spend[{index}]");
            require_non_empty(&field, "customer_id", record.customer_id.as_str())?;
            require_non_empty(&field, "category", record.category.as_str())?;
            if !spend_keys.insert((record.customer_id.as_str(), record.category.as_str())) {
                return Err(CatalogError::Invalid(format!(
                    "{field} duplicates spend for customer {} in category {}",
                    record.customer_id, record.category
                )));
            }
        }
        Ok(())
    }

    /// Builds in-memory stores seeded with the catalog records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the catalog is invalid or a store rejects a
    /// record.
    pub fn into_stores(self) -> Result<CatalogStores, CatalogError> {
        self.validate()?;
        let stores = CatalogStores::default();
        for content in self.contents {
            stores.contents.insert(content)?;
        }
        for group in self.targeting_groups {
            stores.targeting.insert(group)?;
        }
        for record in self.spend {
            stores.spend.insert(
                record.customer_id,
                record.category,
                Spend {
                    number_of_purchases: record.number_of_purchases,
                    usd_spent: record.usd_spent,
                },
            )?;
        }
        Ok(stores)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Catalog loading or validation errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O failure while reading the catalog.
    #[error("catalog io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("catalog parse error: {0}")]
    Parse(String),
    /// Invalid catalog data.
    #[error("invalid catalog: {0}")]
    Invalid(String),
    /// Store rejected a catalog record.
    #[error("catalog store error: {0}")]
    Store(#[from] StoreError),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Rejects blank identifiers and identifiers with surrounding whitespace.
///
/// Request customer ids are trimmed before lookup, so a padded spend key
/// would never be found; padding is rejected for every identifier alike.
fn require_non_empty(field: &str, name: &str, value: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::Invalid(format!("{field}.{name} must be non-empty")));
    }
    if value.trim() != value {
        return Err(CatalogError::Invalid(format!(
            "{field}.{name} must not have surrounding whitespace"
        )));
    }
    Ok(())
}

/// Rejects non-finite or negative click-through rates.
fn require_rate(field: &str, rate: f64) -> Result<(), CatalogError> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(CatalogError::Invalid(format!(
            "{field}.click_through_rate must be finite and non-negative"
        )));
    }
    Ok(())
}

/// Validates predicate fields.
fn validate_predicate(field: &str, predicate: &TargetingPredicate) -> Result<(), CatalogError> {
    match predicate {
        TargetingPredicate::CategorySpendValue(spend)
        | TargetingPredicate::CategorySpendFrequency(spend) => {
            require_non_empty(field, "category", spend.category.as_str())
        }
        TargetingPredicate::Recognized(_) => Ok(()),
    }
}
