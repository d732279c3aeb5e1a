//! Adapters Layer (Driven Adapters)
//!
//! Alternate implementations of the entry-stream seam.
//!
//! ## Adapters
//!
//! - `MemoryEntries` - entry source over already-decoded values, for tests
//!   and cached filters
//!
//! The bit-level Golomb-Rice decoder lives with the codec in
//! `domain::golomb`; it implements the same seam.

pub mod memory;

pub use memory::MemoryEntries;
