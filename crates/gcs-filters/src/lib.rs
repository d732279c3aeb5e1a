//! # GCS Filters
//!
//! Golomb-Coded Set membership filters with cost-driven query strategy
//! selection.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `GcsFilter`: filter construction (keyed SipHash, reduction, gap
//!     coding)
//!   - `GolombEntries`: lazy Golomb-Rice stream decoder
//!   - `CostModel`: analytic cost estimates and strategy selection
//!   - `zip_match_*` / `hash_match_*`: the two batch matchers
//!   - `MatcherConfig`: calibration with validation and builder
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `FilterQueryApi`: Driving port (inbound API)
//!   - `EntrySource`: Driven port (decoded entry stream)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `MatchService`: Implements `FilterQueryApi`
//!
//! - **Adapters Layer** (`adapters/`): Alternate entry sources
//!   - `MemoryEntries`: already-decoded values for tests and caches
//!
//! ## Strategy selection
//!
//! Matching a batch of `q` items against an `n`-entry filter can run two
//! ways: a sort-merge walk over the lazily decoded stream ("Zip"), or
//! materializing the stream into a hash set and probing it ("Hash"). Both
//! answer identically; the cost model picks whichever is expected to be
//! cheaper for the given `(q, n)`, like a database planner choosing a join
//! strategy. Small batches keep the walk lazy; huge batches amortize the
//! one-time decode into the probe set.
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: Strategy equivalence - for any filter and any batch,
//!   Zip and Hash return the same result; selection never changes answers
//! - **INVARIANT-2**: No false negatives - every element a filter was built
//!   from matches
//! - **INVARIANT-3**: A truncated or corrupt stream propagates as an error,
//!   never as "no match"
//!
//! ## Usage Example
//!
//! ```ignore
//! use gcs_filters::{FilterParams, FilterQueryApi, GcsFilter, MatcherConfig, MatchService};
//!
//! let elements: Vec<&[u8]> = vec![b"output_script_1", b"output_script_2"];
//! let filter = GcsFilter::build([0xAB; 16], FilterParams::default(), &elements)?;
//!
//! let service = MatchService::new(MatcherConfig::default())?;
//! assert!(service.match_item(&filter, b"output_script_1")?);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::MemoryEntries;
pub use domain::{
    hash_match_all, hash_match_any, reduce, zip_match_all, zip_match_any, CostEstimate, CostModel,
    CostWeights, FilterParams, GcsFilter, GolombEntries, MatchStrategy, MatcherConfig,
    MatcherConfigBuilder, DEFAULT_M, DEFAULT_P,
};
pub use error::{DecodeError, FilterError};
pub use metrics::{Metrics, MetricsSnapshot};
pub use ports::{EntryResult, EntrySource, FilterQueryApi};
pub use service::MatchService;
