//! Domain Layer - Pure matching logic
//!
//! This layer contains:
//! - Filter parameters and cost calibration
//! - Hash-to-domain reduction
//! - The strategy cost model and selector
//! - Golomb-Coded Set construction and the gap-stream codec
//! - The two batch matchers
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod config;
pub mod cost;
pub mod filter;
pub mod golomb;
pub mod matcher;
pub mod reduce;

pub use config::{
    CostWeights, FilterParams, MatcherConfig, MatcherConfigBuilder, DEFAULT_M, DEFAULT_P,
};
pub use cost::{CostEstimate, CostModel, MatchStrategy};
pub use filter::GcsFilter;
pub use golomb::GolombEntries;
pub use matcher::{hash_match_all, hash_match_any, zip_match_all, zip_match_any};
pub use reduce::reduce;
