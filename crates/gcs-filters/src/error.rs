//! Error types for the GCS filter subsystem

use thiserror::Error;

/// Errors that can occur when configuring, building, or matching a filter
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid filter parameters: {0}")]
    InvalidParameters(String),

    #[error("Invalid cost weight {name}: {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("Filter stream error: {0}")]
    Decode(#[from] DecodeError),
}

/// Errors from decoding an encoded entry stream.
///
/// Normal exhaustion (all declared entries consumed) is signalled by the
/// entry iterator returning `None`, never by an error. Every variant here is
/// a corrupt stream and must propagate as a failure: a match result is never
/// reported as "no match" when the filter was actually undecodable.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Stream truncated: {decoded} of {declared} declared entries decodable")]
    Truncated { decoded: usize, declared: usize },

    #[error("Entry accumulator overflowed the u64 value domain")]
    ValueOverflow,
}
