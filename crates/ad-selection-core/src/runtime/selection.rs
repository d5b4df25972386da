// crates/ad-selection-core/src/runtime/selection.rs
// ============================================================================
// Module: Advertisement Selection
// Description: Candidate retrieval, eligibility filtering, and ranking.
// Purpose: Pick the eligible ad with the highest click-through rate.
// Dependencies: crate::{core, interfaces, runtime::evaluator}, targeting-logic
// ============================================================================

//! ## Overview
//! Selection reads candidates for the marketplace, evaluates every targeting
//! group of every candidate, and keeps the eligible group with the highest
//! click-through rate. Ties go to the pair seen first in retrieval order
//! (content order, then group order); a later pair wins only with a strictly
//! greater rate. Groups with a non-finite rate never rank.
//!
//! A missing marketplace and "nothing eligible" both yield
//! [`GeneratedAdvertisement::Empty`]; only collaborator read failures are
//! errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Serialize;
use targeting_logic::LogicMode;
use thiserror::Error;

use crate::core::AdvertisementContent;
use crate::core::GeneratedAdvertisement;
use crate::core::MarketplaceId;
use crate::core::RequestContext;
use crate::interfaces::ContentStore;
use crate::interfaces::SelectionAuditEvent;
use crate::interfaces::SelectionAuditSink;
use crate::interfaces::SelectionEventKind;
use crate::interfaces::SpendStore;
use crate::interfaces::StoreError;
use crate::interfaces::TargetingGroupStore;
use crate::runtime::audit::NoopAuditSink;
use crate::runtime::evaluator::GroupEvaluation;
use crate::runtime::evaluator::TargetingEvaluator;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Selector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectorConfig {
    /// Tri-state logic mode used for group evaluation.
    pub logic_mode: LogicMode,
}

// ============================================================================
// SECTION: Errors + Reports
// ============================================================================

/// Selection errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// A collaborator read failed.
    #[error("selection aborted: {0}")]
    Store(#[from] StoreError),
}

/// Selection outcome with the evaluations that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionReport {
    /// Selected advertisement or the empty result.
    pub advertisement: GeneratedAdvertisement,
    /// Logic mode used for eligibility.
    pub logic_mode: LogicMode,
    /// Number of candidates retrieved for the marketplace.
    pub candidates: usize,
    /// Every evaluated targeting group in evaluation order.
    pub evaluations: Vec<GroupEvaluation>,
}

impl SelectionReport {
    /// Returns the number of eligible targeting groups.
    #[must_use]
    pub fn eligible_groups(&self) -> usize {
        self.evaluations.iter().filter(|evaluation| evaluation.is_eligible()).count()
    }
}

// ============================================================================
// SECTION: Selector
// ============================================================================

/// Picks the advertisement to render for a request.
pub struct AdvertisementSelector<C, T, S> {
    /// Candidate content source.
    contents: C,
    /// Targeting group source.
    targeting: T,
    /// Spend metric source consulted by predicates.
    spend: S,
    /// Group evaluator.
    evaluator: TargetingEvaluator,
    /// Audit sink for selection outcomes.
    audit: Arc<dyn SelectionAuditSink>,
}

impl<C, T, S> AdvertisementSelector<C, T, S>
where
    C: ContentStore,
    T: TargetingGroupStore,
    S: SpendStore,
{
    /// Creates a selector with a no-op audit sink.
    #[must_use]
    pub fn new(contents: C, targeting: T, spend: S, config: SelectorConfig) -> Self {
        Self {
            contents,
            targeting,
            spend,
            evaluator: TargetingEvaluator::new(config.logic_mode),
            audit: Arc::new(NoopAuditSink),
        }
    }

    /// Replaces the audit sink.
    #[must_use]
    pub fn with_audit_sink(mut self, audit: Arc<dyn SelectionAuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Returns the active logic mode.
    #[must_use]
    pub const fn logic_mode(&self) -> LogicMode {
        self.evaluator.logic()
    }

    /// Selects the eligible advertisement with the highest click-through rate.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Store`] when a collaborator read fails.
    pub fn select_advertisement(
        &self,
        customer_id: Option<&str>,
        marketplace_id: Option<&str>,
    ) -> Result<GeneratedAdvertisement, SelectionError> {
        self.select_with_report(customer_id, marketplace_id).map(|report| report.advertisement)
    }

    /// Selects an advertisement and returns every group evaluation alongside it.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Store`] when a collaborator read fails.
    pub fn select_with_report(
        &self,
        customer_id: Option<&str>,
        marketplace_id: Option<&str>,
    ) -> Result<SelectionReport, SelectionError> {
        let logic_mode = self.logic_mode();
        let Some(marketplace_id) = marketplace_id.filter(|value| !value.trim().is_empty()) else {
            let recognized = customer_id.is_some_and(|value| !value.trim().is_empty());
            self.audit.record(&SelectionAuditEvent::new(
                SelectionEventKind::MarketplaceMissing,
                marketplace_id,
                recognized,
                logic_mode,
            ));
            return Ok(SelectionReport {
                advertisement: GeneratedAdvertisement::Empty,
                logic_mode,
                candidates: 0,
                evaluations: Vec::new(),
            });
        };

        let request = RequestContext::new(customer_id, MarketplaceId::new(marketplace_id));
        match self.rank(&request) {
            Ok(report) => {
                self.record_outcome(&request, &report);
                Ok(report)
            }
            Err(err) => {
                let mut event = SelectionAuditEvent::new(
                    SelectionEventKind::StoreFailure,
                    Some(marketplace_id),
                    request.is_recognized(),
                    logic_mode,
                );
                event.error = Some(err.to_string());
                self.audit.record(&event);
                Err(err.into())
            }
        }
    }

    /// Evaluates every candidate group and keeps the best eligible one.
    fn rank(&self, request: &RequestContext) -> Result<SelectionReport, StoreError> {
        let candidates = self.contents.contents_for(request.marketplace_id())?;
        let mut evaluations = Vec::new();
        let mut best: Option<(f64, &AdvertisementContent)> = None;

        for content in &candidates {
            for group in self.targeting.groups_for(&content.content_id)? {
                let evaluation = self.evaluator.evaluate_traced(&group, request, &self.spend)?;
                let eligible = evaluation.is_eligible();
                evaluations.push(evaluation);

                let rate = group.click_through_rate;
                if !eligible || !rate.is_finite() {
                    continue;
                }
                if best.is_none_or(|(best_rate, _)| rate > best_rate) {
                    best = Some((rate, content));
                }
            }
        }

        let advertisement = best
            .map(|(_, content)| GeneratedAdvertisement::Content(content.clone()))
            .unwrap_or_default();
        Ok(SelectionReport {
            advertisement,
            logic_mode: self.logic_mode(),
            candidates: candidates.len(),
            evaluations,
        })
    }

    /// Emits the audit event for a completed selection.
    fn record_outcome(&self, request: &RequestContext, report: &SelectionReport) {
        let kind = if report.advertisement.is_empty() {
            SelectionEventKind::SelectionEmpty
        } else {
            SelectionEventKind::SelectionCompleted
        };
        let mut event = SelectionAuditEvent::new(
            kind,
            Some(request.marketplace_id().as_str()),
            request.is_recognized(),
            report.logic_mode,
        );
        event.candidates = report.candidates;
        event.eligible_groups = report.eligible_groups();
        event.content_id =
            report.advertisement.content_id().map(|content_id| content_id.as_str().to_string());
        self.audit.record(&event);
    }
}
