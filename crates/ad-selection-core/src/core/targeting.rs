// crates/ad-selection-core/src/core/targeting.rs
// ============================================================================
// Module: Targeting Types
// Description: Targeting groups, predicate variants, and spend metrics.
// Purpose: Describe the rules gating each piece of content as plain data.
// Dependencies: crate::core::identifiers, serde, targeting-logic
// ============================================================================

//! ## Overview
//! A targeting group gates one piece of content with an ordered rule set and
//! carries the click-through rate used for ranking. Predicates are a closed
//! set of variants; their evaluation lives in `runtime::predicate`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use targeting_logic::RuleSet;

use crate::core::identifiers::Category;
use crate::core::identifiers::ContentId;
use crate::core::identifiers::TargetingGroupId;

// ============================================================================
// SECTION: Comparison Operators
// ============================================================================

/// Comparison applied between a metric value and a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    /// Metric strictly less than threshold.
    Lt,
    /// Metric less than or equal to threshold.
    Le,
    /// Metric strictly greater than threshold.
    Gt,
    /// Metric greater than or equal to threshold.
    Ge,
    /// Metric equal to threshold.
    Eq,
    /// Metric not equal to threshold.
    Ne,
}

impl Comparison {
    /// Returns the operator symbol used in reports.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Eq => "==",
            Self::Ne => "!=",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// SECTION: Spend Metrics
// ============================================================================

/// Customer spend recorded for one product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Spend {
    /// Number of purchases in the category.
    #[serde(default)]
    pub number_of_purchases: i64,
    /// Total spent in the category, in whole US dollars.
    #[serde(default)]
    pub usd_spent: i64,
}

// ============================================================================
// SECTION: Predicates
// ============================================================================

/// Threshold comparison over a category-scoped spend metric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategorySpendPredicate {
    /// Category whose spend is inspected.
    pub category: Category,
    /// Comparison applied as `metric <op> value`.
    pub comparison: Comparison,
    /// Threshold value.
    pub value: i64,
    /// Negates a definite outcome when set.
    #[serde(default)]
    pub inverse: bool,
}

impl CategorySpendPredicate {
    /// Creates a non-inverted spend predicate.
    pub fn new(category: impl Into<Category>, comparison: Comparison, value: i64) -> Self {
        Self {
            category: category.into(),
            comparison,
            value,
            inverse: false,
        }
    }

    /// Returns the predicate with inversion enabled.
    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.inverse = true;
        self
    }
}

/// Matches requests that carry a customer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RecognizedPredicate {
    /// Matches unrecognized requests instead when set.
    #[serde(default)]
    pub inverse: bool,
}

/// Closed set of targeting predicate kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetingPredicate {
    /// Compares dollars spent in a category.
    CategorySpendValue(CategorySpendPredicate),
    /// Compares the number of purchases in a category.
    CategorySpendFrequency(CategorySpendPredicate),
    /// Checks whether the customer is recognized.
    Recognized(RecognizedPredicate),
}

impl TargetingPredicate {
    /// Returns the snake-case kind label used in traces.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::CategorySpendValue(_) => "category_spend_value",
            Self::CategorySpendFrequency(_) => "category_spend_frequency",
            Self::Recognized(_) => "recognized",
        }
    }
}

// ============================================================================
// SECTION: Targeting Groups
// ============================================================================

/// Rule set gating one piece of content, plus its ranking metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetingGroup {
    /// Targeting group identifier.
    pub targeting_group_id: TargetingGroupId,
    /// Content gated by this group.
    pub content_id: ContentId,
    /// Click-through rate used for ranking when the group is eligible.
    pub click_through_rate: f64,
    /// Predicates combined by conjunction.
    #[serde(default)]
    pub predicates: RuleSet<TargetingPredicate>,
}

impl TargetingGroup {
    /// Creates a targeting group with the provided rules.
    pub fn new(
        targeting_group_id: impl Into<TargetingGroupId>,
        content_id: impl Into<ContentId>,
        click_through_rate: f64,
        predicates: Vec<TargetingPredicate>,
    ) -> Self {
        Self {
            targeting_group_id: targeting_group_id.into(),
            content_id: content_id.into(),
            click_through_rate,
            predicates: RuleSet::new(predicates),
        }
    }
}
