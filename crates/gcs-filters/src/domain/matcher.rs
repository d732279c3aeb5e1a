//! Batch matching strategies
//!
//! Two physical executions of the same logical operation: "does this filter
//! contain any of these reduced values". For a given filter and batch both
//! must return the same answer; the strategy selector only changes which
//! one runs.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::error::{DecodeError, FilterError};

/// Merge-walk ("Zip") existence match.
///
/// Sorts the reduced query values, then walks both ascending sequences in
/// lockstep, decoding filter entries only while an unresolved query could
/// still land among them. Returns on the first hit. Returning `false` once
/// the query side is exhausted is sound even against a stream damaged past
/// the touched region: missing entries are all >= the last decoded one,
/// which is greater than every retired query value.
pub fn zip_match_any<I>(entries: I, mut queries: Vec<u64>) -> Result<bool, FilterError>
where
    I: IntoIterator<Item = Result<u64, DecodeError>>,
{
    queries.sort_unstable();
    let mut queries = queries.into_iter().peekable();
    if queries.peek().is_none() {
        return Ok(false);
    }

    for entry in entries {
        let entry = entry?;
        while let Some(&query) = queries.peek() {
            match query.cmp(&entry) {
                Ordering::Equal => return Ok(true),
                // The stream has passed this query; it can no longer match.
                Ordering::Less => {
                    queries.next();
                }
                // Decode further.
                Ordering::Greater => break,
            }
        }
        if queries.peek().is_none() {
            break;
        }
    }

    Ok(false)
}

/// Merge-walk enumeration: every distinct reduced query value present in
/// the filter, ascending.
pub fn zip_match_all<I>(entries: I, mut queries: Vec<u64>) -> Result<Vec<u64>, FilterError>
where
    I: IntoIterator<Item = Result<u64, DecodeError>>,
{
    queries.sort_unstable();
    queries.dedup();
    let mut queries = queries.into_iter().peekable();
    let mut matched = Vec::new();
    if queries.peek().is_none() {
        return Ok(matched);
    }

    for entry in entries {
        let entry = entry?;
        while let Some(&query) = queries.peek() {
            if query > entry {
                break;
            }
            queries.next();
            if query == entry {
                matched.push(query);
            }
        }
        if queries.peek().is_none() {
            break;
        }
    }

    Ok(matched)
}

/// Hash-probe existence match.
///
/// Drains the whole stream into a probe set, then checks each query value.
/// Materializing everything means a truncated or corrupt stream always
/// surfaces here, whatever the query values are.
pub fn hash_match_any<I>(entries: I, queries: &[u64]) -> Result<bool, FilterError>
where
    I: IntoIterator<Item = Result<u64, DecodeError>>,
{
    let set = materialize(entries)?;
    Ok(queries.iter().any(|query| set.contains(query)))
}

/// Hash-probe enumeration: every distinct reduced query value present in
/// the filter, ascending.
pub fn hash_match_all<I>(entries: I, queries: &[u64]) -> Result<Vec<u64>, FilterError>
where
    I: IntoIterator<Item = Result<u64, DecodeError>>,
{
    let set = materialize(entries)?;
    let mut matched: Vec<u64> = queries
        .iter()
        .copied()
        .filter(|query| set.contains(query))
        .collect();
    matched.sort_unstable();
    matched.dedup();
    Ok(matched)
}

fn materialize<I>(entries: I) -> Result<HashSet<u64>, FilterError>
where
    I: IntoIterator<Item = Result<u64, DecodeError>>,
{
    let entries = entries.into_iter();
    let mut set = HashSet::with_capacity(entries.size_hint().1.unwrap_or(0));
    for entry in entries {
        set.insert(entry?);
    }
    Ok(set)
}
