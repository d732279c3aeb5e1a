//! Cross-layer integration tests

pub mod end_to_end;
pub mod strategy_equivalence;
