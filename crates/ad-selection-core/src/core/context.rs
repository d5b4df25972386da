// crates/ad-selection-core/src/core/context.rs
// ============================================================================
// Module: Request Context
// Description: Immutable identity of a selection request.
// Purpose: Carry the customer and marketplace into predicate evaluation.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! A request context is built once per selection and never mutated. A
//! missing or blank customer identifier marks the requester as unrecognized,
//! which spend predicates report as `Indeterminate`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::core::identifiers::CustomerId;
use crate::core::identifiers::MarketplaceId;

// ============================================================================
// SECTION: Request Context
// ============================================================================

/// Identity of the requester used for lookups and predicate evaluation.
///
/// # Invariants
/// - `customer_id`, when present, is never blank or padded, including after
///   deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RequestContext {
    /// Customer identifier; `None` when the requester is unrecognized.
    customer_id: Option<CustomerId>,
    /// Marketplace the advertisement will render on.
    marketplace_id: MarketplaceId,
}

impl RequestContext {
    /// Creates a request context, treating blank customer identifiers as absent.
    #[must_use]
    pub fn new(customer_id: Option<&str>, marketplace_id: impl Into<MarketplaceId>) -> Self {
        let customer_id = customer_id
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(CustomerId::new);
        Self {
            customer_id,
            marketplace_id: marketplace_id.into(),
        }
    }

    /// Returns the customer identifier when the requester is recognized.
    #[must_use]
    pub const fn customer_id(&self) -> Option<&CustomerId> {
        self.customer_id.as_ref()
    }

    /// Returns the marketplace identifier.
    #[must_use]
    pub const fn marketplace_id(&self) -> &MarketplaceId {
        &self.marketplace_id
    }

    /// Returns true when a customer identifier is present.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        self.customer_id.is_some()
    }
}

// ============================================================================
// SECTION: Deserialization
// ============================================================================

/// Serialized form of [`RequestContext`] before customer normalization.
#[derive(Deserialize)]
struct RequestContextWire {
    /// Raw customer identifier.
    #[serde(default)]
    customer_id: Option<String>,
    /// Marketplace identifier.
    marketplace_id: MarketplaceId,
}

impl<'de> Deserialize<'de> for RequestContext {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = RequestContextWire::deserialize(deserializer)?;
        Ok(Self::new(wire.customer_id.as_deref(), wire.marketplace_id))
    }
}
