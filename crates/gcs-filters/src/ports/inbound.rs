//! Inbound Ports (Driving Ports)
//!
//! The API external callers use to match query batches against a built
//! filter.

use crate::domain::cost::CostEstimate;
use crate::domain::filter::GcsFilter;
use crate::error::FilterError;

/// Primary filter matching API (Driving Port)
pub trait FilterQueryApi: Send + Sync {
    /// Pick the cheaper strategy for a batch of the given size.
    ///
    /// Returns the `Block` tag when either side is empty; that case is
    /// resolved without running a matcher and without consulting the cost
    /// model.
    fn select_strategy(&self, query_size: usize, filter_size: usize) -> CostEstimate;

    /// True if any of `items` may be in the filter.
    ///
    /// Probabilistic in one direction only: a `true` may be a false
    /// positive, a `false` is definite.
    fn match_any(&self, filter: &GcsFilter, items: &[&[u8]]) -> Result<bool, FilterError>;

    /// True if `item` may be in the filter.
    fn match_item(&self, filter: &GcsFilter, item: &[u8]) -> Result<bool, FilterError>;

    /// The subset of `items` that may be in the filter, in input order.
    ///
    /// Raw duplicates that reduce to the same matched value are each
    /// returned; deduplication is the caller's policy.
    fn matching_items<'a>(
        &self,
        filter: &GcsFilter,
        items: &[&'a [u8]],
    ) -> Result<Vec<&'a [u8]>, FilterError>;
}
