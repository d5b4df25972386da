// crates/ad-selection-core/src/core/mod.rs
// ============================================================================
// Module: Ad Selection Core Types
// Description: Canonical request, content, and targeting structures.
// Purpose: Provide stable, serializable types shared by every selection surface.
// Dependencies: serde, targeting-logic
// ============================================================================

//! ## Overview
//! Core types describe who is asking (request context), what can be shown
//! (advertisement content), and the rules gating each piece of content
//! (targeting groups and predicates). All of them are plain values built per
//! request; none carry mutable state.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod content;
pub mod context;
pub mod identifiers;
pub mod targeting;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use content::AdvertisementContent;
pub use content::GeneratedAdvertisement;
pub use context::RequestContext;
pub use identifiers::Category;
pub use identifiers::ContentId;
pub use identifiers::CustomerId;
pub use identifiers::MarketplaceId;
pub use identifiers::TargetingGroupId;
pub use targeting::CategorySpendPredicate;
pub use targeting::Comparison;
pub use targeting::RecognizedPredicate;
pub use targeting::Spend;
pub use targeting::TargetingGroup;
pub use targeting::TargetingPredicate;
