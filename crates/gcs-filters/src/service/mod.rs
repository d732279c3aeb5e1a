//! Service Layer
//!
//! Orchestration: implements the driving port over the domain logic.

pub mod match_service;

pub use match_service::MatchService;
