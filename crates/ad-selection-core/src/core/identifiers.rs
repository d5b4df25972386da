// crates/ad-selection-core/src/core/identifiers.rs
// ============================================================================
// Module: Ad Selection Identifiers
// Description: Opaque string identifiers for customers, content, and targeting.
// Purpose: Provide strongly typed, serializable IDs with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Identifiers are opaque and serialize as plain strings. Validation (such as
//! rejecting empty marketplace identifiers) happens at the selection boundary
//! rather than inside these wrappers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Macro
// ============================================================================

/// Declares a transparent string identifier with the shared helper surface.
macro_rules! string_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }
    };
}

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

string_identifier! {
    /// Customer identifier attached to a selection request.
    CustomerId
}

string_identifier! {
    /// Marketplace identifier scoping the candidate catalog.
    MarketplaceId
}

string_identifier! {
    /// Unique identifier of a piece of advertisement content.
    ContentId
}

string_identifier! {
    /// Identifier of a targeting group gating one piece of content.
    TargetingGroupId
}

string_identifier! {
    /// Product category key used by spend metrics.
    Category
}
