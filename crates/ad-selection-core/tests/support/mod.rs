// crates/ad-selection-core/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared assertions, fixtures, and instrumented stores.
// ============================================================================
//! ## Overview
//! Fixture builders and call-counting collaborators shared by the ad
//! selection integration tests.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    dead_code,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use ad_selection_core::AdvertisementContent;
use ad_selection_core::Category;
use ad_selection_core::CategorySpendPredicate;
use ad_selection_core::Comparison;
use ad_selection_core::ContentId;
use ad_selection_core::ContentStore;
use ad_selection_core::MarketplaceId;
use ad_selection_core::RequestContext;
use ad_selection_core::Spend;
use ad_selection_core::SpendStore;
use ad_selection_core::StoreError;
use ad_selection_core::TargetingGroup;
use ad_selection_core::TargetingGroupStore;
use ad_selection_core::TargetingPredicate;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across ad selection integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition {
        Ok(())
    } else {
        Err(Box::new(TestError {
            message: message.into(),
        }))
    }
}

// ========================================================================
// Fixtures
// ========================================================================

/// Customer used by fixtures.
pub const CUSTOMER_ID: &str = "1";
/// Marketplace used by fixtures.
pub const MARKETPLACE_ID: &str = "2";
/// Category with recorded spend.
pub const COMPUTERS: &str = "COMPUTERS";
/// Category without recorded spend.
pub const AMAZON_MUSIC: &str = "AMAZON_MUSIC";
/// Dollars spent in [`COMPUTERS`].
pub const USD_SPENT: i64 = 1000;

/// Builds content for the fixture marketplace.
pub fn content(content_id: &str, click_through_rate: f64) -> AdvertisementContent {
    AdvertisementContent {
        content_id: ContentId::new(content_id),
        marketplace_id: MarketplaceId::new(MARKETPLACE_ID),
        renderable_content: format!("<div>{content_id}</div>"),
        click_through_rate,
    }
}

/// Predicate that is true for the fixture customer.
pub fn passing_predicate() -> TargetingPredicate {
    TargetingPredicate::CategorySpendValue(CategorySpendPredicate::new(
        COMPUTERS,
        Comparison::Lt,
        USD_SPENT + 100,
    ))
}

/// Predicate that is false for the fixture customer.
pub fn failing_predicate() -> TargetingPredicate {
    TargetingPredicate::CategorySpendValue(CategorySpendPredicate::new(
        COMPUTERS,
        Comparison::Gt,
        USD_SPENT + 100,
    ))
}

/// Builds a targeting group gating the content.
pub fn group(
    group_id: &str,
    content_id: &str,
    click_through_rate: f64,
    predicates: Vec<TargetingPredicate>,
) -> TargetingGroup {
    TargetingGroup::new(group_id, content_id, click_through_rate, predicates)
}

// ========================================================================
// Instrumented Stores
// ========================================================================

/// Content store with a fixed candidate list and a call counter.
#[derive(Default)]
pub struct CountingContentStore {
    /// Candidates returned for the fixture marketplace.
    pub contents: Vec<AdvertisementContent>,
    /// Number of reads performed.
    pub calls: AtomicUsize,
}

impl CountingContentStore {
    /// Creates a store returning the candidates.
    pub fn new(contents: Vec<AdvertisementContent>) -> Self {
        Self {
            contents,
            calls: AtomicUsize::new(0),
        }
    }

    /// Returns the number of reads performed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ContentStore for CountingContentStore {
    fn contents_for(
        &self,
        marketplace_id: &MarketplaceId,
    ) -> Result<Vec<AdvertisementContent>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if marketplace_id.as_str() == MARKETPLACE_ID {
            Ok(self.contents.clone())
        } else {
            Ok(Vec::new())
        }
    }
}

/// Targeting store with fixed groups and a call counter.
#[derive(Default)]
pub struct CountingTargetingStore {
    /// Groups in retrieval order.
    pub groups: Vec<TargetingGroup>,
    /// Number of reads performed.
    pub calls: AtomicUsize,
}

impl CountingTargetingStore {
    /// Creates a store returning the groups.
    pub fn new(groups: Vec<TargetingGroup>) -> Self {
        Self {
            groups,
            calls: AtomicUsize::new(0),
        }
    }

    /// Returns the number of reads performed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TargetingGroupStore for CountingTargetingStore {
    fn groups_for(&self, content_id: &ContentId) -> Result<Vec<TargetingGroup>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.groups.iter().filter(|group| &group.content_id == content_id).cloned().collect())
    }
}

/// Spend store returning one fixed map for every recognized customer.
#[derive(Default)]
pub struct FixedSpendStore {
    /// Spend returned for every request.
    pub spend: BTreeMap<Category, Spend>,
    /// Number of reads performed.
    pub calls: AtomicUsize,
}

impl FixedSpendStore {
    /// Creates a store with one category entry.
    pub fn single(category: &str, usd_spent: i64, number_of_purchases: i64) -> Self {
        let mut spend = BTreeMap::new();
        spend.insert(
            Category::new(category),
            Spend {
                number_of_purchases,
                usd_spent,
            },
        );
        Self {
            spend,
            calls: AtomicUsize::new(0),
        }
    }

    /// Creates the standard fixture: 1000 USD over 1 purchase in computers.
    pub fn computers() -> Self {
        Self::single(COMPUTERS, USD_SPENT, 1)
    }

    /// Returns the number of reads performed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SpendStore for FixedSpendStore {
    fn spend_for(
        &self,
        _request: &RequestContext,
    ) -> Result<BTreeMap<Category, Spend>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.spend.clone())
    }
}

/// Spend store whose reads always fail.
pub struct UnavailableSpendStore;

impl SpendStore for UnavailableSpendStore {
    fn spend_for(
        &self,
        _request: &RequestContext,
    ) -> Result<BTreeMap<Category, Spend>, StoreError> {
        Err(StoreError::Unavailable("spend service offline".to_string()))
    }
}
