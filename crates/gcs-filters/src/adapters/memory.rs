//! In-memory entry source
//!
//! Stands in for the bit-stream decoder wherever the entries already exist
//! in decoded form: synthetic sequences in tests, or callers that cache a
//! decoded filter and re-match query batches against it.

use crate::error::DecodeError;
use crate::ports::outbound::EntryResult;

/// Entry source over already-decoded, ascending values.
///
/// Yields the values in order, then `None`. A declared count larger than
/// the backing vector models a truncated stream: the shortfall is reported
/// as `DecodeError::Truncated`, exactly like the bit-level decoder.
pub struct MemoryEntries {
    values: Vec<u64>,
    pos: usize,
    declared: usize,
    failed: bool,
}

impl MemoryEntries {
    /// Source over `values` with a matching declared count.
    pub fn new(values: Vec<u64>) -> Self {
        let declared = values.len();
        Self::with_declared(values, declared)
    }

    /// Source that declares `declared` entries regardless of how many are
    /// actually backed.
    pub fn with_declared(values: Vec<u64>, declared: usize) -> Self {
        Self {
            values,
            pos: 0,
            declared,
            failed: false,
        }
    }
}

impl Iterator for MemoryEntries {
    type Item = EntryResult;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos == self.declared {
            return None;
        }
        match self.values.get(self.pos) {
            Some(&value) => {
                self.pos += 1;
                Some(Ok(value))
            }
            None => {
                self.failed = true;
                Some(Err(DecodeError::Truncated {
                    decoded: self.pos,
                    declared: self.declared,
                }))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        (0, Some(self.declared - self.pos))
    }
}
