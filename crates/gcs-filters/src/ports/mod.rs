//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for external callers
//! - Driven Ports (outbound) - the decoded entry stream the matchers consume

pub mod inbound;
pub mod outbound;

pub use inbound::FilterQueryApi;
pub use outbound::{EntryResult, EntrySource};
