// crates/ad-selection-core/src/core/content.rs
// ============================================================================
// Module: Advertisement Content
// Description: Candidate ads and the selection result.
// Purpose: Represent "an ad" and "no ad" as distinct, structural outcomes.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! [`AdvertisementContent`] is a read-only candidate owned by the content
//! store. [`GeneratedAdvertisement`] is what selection returns: either one
//! concrete candidate or the explicit empty variant.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ContentId;
use crate::core::identifiers::MarketplaceId;

// ============================================================================
// SECTION: Advertisement Content
// ============================================================================

/// Candidate advertisement for a marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertisementContent {
    /// Unique content identifier.
    pub content_id: ContentId,
    /// Marketplace the content belongs to.
    pub marketplace_id: MarketplaceId,
    /// Renderable payload handed to the presentation layer.
    pub renderable_content: String,
    /// Recorded click-through rate for the content as a whole.
    #[serde(default)]
    pub click_through_rate: f64,
}

// ============================================================================
// SECTION: Generated Advertisement
// ============================================================================

/// Result of a selection request.
///
/// # Invariants
/// - Exactly one of "has content" and "is empty" holds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneratedAdvertisement {
    /// A concrete advertisement to render.
    Content(AdvertisementContent),
    /// No advertisement is available or eligible.
    #[default]
    Empty,
}

impl GeneratedAdvertisement {
    /// Returns the selected content, if any.
    #[must_use]
    pub const fn content(&self) -> Option<&AdvertisementContent> {
        match self {
            Self::Content(content) => Some(content),
            Self::Empty => None,
        }
    }

    /// Returns the selected content identifier, if any.
    #[must_use]
    pub fn content_id(&self) -> Option<&ContentId> {
        self.content().map(|content| &content.content_id)
    }

    /// Returns true for the empty variant.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<AdvertisementContent> for GeneratedAdvertisement {
    fn from(content: AdvertisementContent) -> Self {
        Self::Content(content)
    }
}
