// crates/ad-selection-config/src/lib.rs
// ============================================================================
// Module: Ad Selection Config Library
// Description: Canonical config model, catalog fixtures, and validation.
// Purpose: Single source of truth for ad-selection.toml semantics.
// Dependencies: ad-selection-core, serde, toml
// ============================================================================

//! ## Overview
//! `ad-selection-config` defines the configuration model for ad selection and
//! the catalog fixture format used to seed in-memory stores. Both are parsed
//! strictly and validated before use.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::*;
pub use config::*;
