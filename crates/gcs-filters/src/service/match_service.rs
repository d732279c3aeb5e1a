//! Match Service
//!
//! Orchestrates a query batch against a built filter: resolves the
//! degenerate cases, reduces the raw items into the filter's value domain,
//! asks the cost model for the cheaper strategy, and dispatches.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::domain::config::MatcherConfig;
use crate::domain::cost::{CostEstimate, CostModel, MatchStrategy};
use crate::domain::filter::GcsFilter;
use crate::domain::golomb::GolombEntries;
use crate::domain::matcher::{hash_match_all, hash_match_any, zip_match_all, zip_match_any};
use crate::error::FilterError;
use crate::metrics::Metrics;
use crate::ports::inbound::FilterQueryApi;

/// Cost-driven filter matching service.
///
/// Implements the `FilterQueryApi` port. Selection only picks the execution
/// path: for a given filter and batch, every path returns the same answer.
pub struct MatchService {
    model: CostModel,
    metrics: Arc<Metrics>,
}

impl MatchService {
    /// Create a service from a validated configuration.
    pub fn new(config: MatcherConfig) -> Result<Self, FilterError> {
        Self::with_metrics(config, Arc::new(Metrics::new()))
    }

    /// Create a service that records into a shared metrics collector.
    pub fn with_metrics(config: MatcherConfig, metrics: Arc<Metrics>) -> Result<Self, FilterError> {
        config.validate()?;
        Ok(Self {
            model: CostModel::new(config.params.m, config.weights),
            metrics,
        })
    }

    /// The shared metrics collector.
    pub fn metrics(&self) -> Arc<Metrics> {
        Arc::clone(&self.metrics)
    }

    fn reduce_batch(&self, filter: &GcsFilter, items: &[&[u8]]) -> Vec<u64> {
        items.iter().map(|item| filter.reduce_item(item)).collect()
    }

    fn record<T>(&self, result: Result<T, FilterError>) -> Result<T, FilterError> {
        if result.is_err() {
            self.metrics.record_decode_failure();
        }
        result
    }
}

impl FilterQueryApi for MatchService {
    fn select_strategy(&self, query_size: usize, filter_size: usize) -> CostEstimate {
        if query_size == 0 || filter_size == 0 {
            return CostEstimate {
                strategy: MatchStrategy::Block,
                cost: 0.0,
                confidence: 1.0,
            };
        }
        self.model.optimize(query_size, filter_size)
    }

    fn match_any(&self, filter: &GcsFilter, items: &[&[u8]]) -> Result<bool, FilterError> {
        let estimate = self.select_strategy(items.len(), filter.len());
        self.metrics.record_selection(estimate.strategy);
        debug!(
            strategy = %estimate.strategy,
            confidence = estimate.confidence,
            queries = items.len(),
            entries = filter.len(),
            "match_any"
        );

        let found = match estimate.strategy {
            MatchStrategy::Block => false,
            MatchStrategy::Zip => self.record(zip_match_any(
                GolombEntries::for_filter(filter),
                self.reduce_batch(filter, items),
            ))?,
            MatchStrategy::Hash => self.record(hash_match_any(
                GolombEntries::for_filter(filter),
                &self.reduce_batch(filter, items),
            ))?,
        };

        if found {
            self.metrics.record_match();
        }
        Ok(found)
    }

    fn match_item(&self, filter: &GcsFilter, item: &[u8]) -> Result<bool, FilterError> {
        self.match_any(filter, &[item])
    }

    fn matching_items<'a>(
        &self,
        filter: &GcsFilter,
        items: &[&'a [u8]],
    ) -> Result<Vec<&'a [u8]>, FilterError> {
        let estimate = self.select_strategy(items.len(), filter.len());
        self.metrics.record_selection(estimate.strategy);
        debug!(
            strategy = %estimate.strategy,
            confidence = estimate.confidence,
            queries = items.len(),
            entries = filter.len(),
            "matching_items"
        );

        let reduced = self.reduce_batch(filter, items);
        let matched: Vec<u64> = match estimate.strategy {
            MatchStrategy::Block => return Ok(Vec::new()),
            MatchStrategy::Zip => self.record(zip_match_all(
                GolombEntries::for_filter(filter),
                reduced.clone(),
            ))?,
            MatchStrategy::Hash => {
                self.record(hash_match_all(GolombEntries::for_filter(filter), &reduced))?
            }
        };

        if !matched.is_empty() {
            self.metrics.record_match();
        }

        let matched: HashSet<u64> = matched.into_iter().collect();
        Ok(items
            .iter()
            .zip(&reduced)
            .filter(|(_, value)| matched.contains(value))
            .map(|(item, _)| *item)
            .collect())
    }
}
