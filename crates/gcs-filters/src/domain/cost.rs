//! Match strategy cost model
//!
//! Closed-form estimates of the expected CPU cost of the two batch-matching
//! strategies, and the selector that picks the cheaper one. This is a
//! miniature query planner: both strategies answer the same question, the
//! model only decides which execution path runs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::config::CostWeights;

/// How a query batch is matched against a filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStrategy {
    /// Degenerate case: empty query set or empty filter. Resolved by the
    /// service before the cost model runs; `CostModel::optimize` never
    /// returns it.
    Block,
    /// Sort-merge walk over lazily decoded filter entries.
    Zip,
    /// Materialize the filter into a hash set, then probe per query.
    Hash,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStrategy::Block => write!(f, "Block"),
            MatchStrategy::Zip => write!(f, "Zip"),
            MatchStrategy::Hash => write!(f, "Hash"),
        }
    }
}

/// Outcome of strategy selection.
#[derive(Clone, Copy, Debug)]
pub struct CostEstimate {
    /// The cheaper strategy
    pub strategy: MatchStrategy,
    /// Estimated cost of the chosen strategy, in relative weight units
    pub cost: f64,
    /// Cheaper cost over costlier cost, in `(0, 1]`. Small values mean the
    /// chosen strategy wins by a wide margin.
    pub confidence: f64,
}

/// Analytic cost model over query size `q` and filter size `n`.
///
/// Pure and stateless: instances are cheap, hold no mutable state, and may
/// be shared across any number of threads.
#[derive(Clone, Debug)]
pub struct CostModel {
    /// Domain-scale constant as a float, the filter's slots per element
    m: f64,
    weights: CostWeights,
}

impl CostModel {
    pub fn new(domain_scale: u64, weights: CostWeights) -> Self {
        Self {
            m: domain_scale as f64,
            weights,
        }
    }

    /// Expected number of distinct query-domain slots hit by `q` queries:
    /// `m * (1 - e^(-q/m))`.
    ///
    /// Models birthday-style saturation: past `m` queries, additional
    /// queries increasingly land on slots already used, so marginal growth
    /// flattens instead of staying linear.
    pub fn expected_queries(&self, q: usize) -> f64 {
        self.m * (1.0 - (-(q as f64) / self.m).exp())
    }

    /// Expected number of filter entries a merge walk decodes before one of
    /// the two sequences is exhausted, assuming uniform-random interleaving:
    /// `((n + 1) / (q + 1)) * expected_queries(q)`.
    ///
    /// The `+ 1` terms keep the estimate defined at zero sizes.
    pub fn expected_reads(&self, q: usize, n: usize) -> f64 {
        ((n as f64 + 1.0) / (q as f64 + 1.0)) * self.expected_queries(q)
    }

    /// Expected cost of the merge (`Zip`) strategy: derive a reduced value
    /// per query, sort the reduced list, then pay comparisons and stream
    /// reads over the expected touched region.
    pub fn cost_zip(&self, q: usize, n: usize) -> f64 {
        let w = &self.weights;
        let exp_q = self.expected_queries(q);
        let exp_n = self.expected_reads(q, n);
        let qf = q as f64;

        // log2 is zero at q = 1 and undefined at q = 0; below two elements
        // there is nothing to sort either way.
        let sort_term = if q > 1 { qf * qf.log2() * w.sort } else { 0.0 };

        qf * w.key + sort_term + (exp_q + exp_n) * w.compare + exp_n * w.read
    }

    /// Expected cost of the `Hash` strategy: decode and insert every filter
    /// entry, then derive and probe per effective query.
    ///
    /// The query-side terms are weighted by the collision-adjusted
    /// `expected_queries(q)` rather than raw `q`: duplicate queries landing
    /// on an already-resolved slot are billed as free re-probes. This is a
    /// modeling assumption; check it against the calibration benchmarks
    /// before tuning either way.
    pub fn cost_hash(&self, q: usize, n: usize) -> f64 {
        let w = &self.weights;
        let exp_q = self.expected_queries(q);
        n as f64 * (w.insert + w.read) + exp_q * w.key + exp_q * w.lookup
    }

    /// Pick the cheaper strategy for a `q`-item batch against an `n`-entry
    /// filter.
    ///
    /// Returns only `Zip` or `Hash`; the degenerate empty-batch and
    /// empty-filter cases are the caller's to resolve first, since they are
    /// not cost-driven. Ties go to `Zip`, so a zero-size batch trivially
    /// selects the merge walk.
    pub fn optimize(&self, query_size: usize, filter_size: usize) -> CostEstimate {
        let c_zip = self.cost_zip(query_size, filter_size);
        let c_hash = self.cost_hash(query_size, filter_size);

        let (strategy, cheaper, costlier) = if c_zip <= c_hash {
            (MatchStrategy::Zip, c_zip, c_hash)
        } else {
            (MatchStrategy::Hash, c_hash, c_zip)
        };

        // Zero sizes drive a cost to exactly zero; keep the reported
        // confidence inside (0, 1].
        let confidence = if costlier <= 0.0 {
            1.0
        } else {
            (cheaper / costlier).max(f64::EPSILON)
        };

        CostEstimate {
            strategy,
            cost: cheaper,
            confidence,
        }
    }
}
