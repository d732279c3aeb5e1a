//! Hash-to-domain reduction
//!
//! Maps an unbounded 64-bit hash into a bounded integer domain without a
//! 128-bit division.

/// Map `hash` uniformly into `[0, bound)`.
///
/// Computes `floor(hash * bound / 2^64)` from the four 32-bit partial
/// products of the operands. Bias over the output range is O(bound / 2^64),
/// negligible for realistic filter domains.
///
/// The builder and the matcher of a filter must agree bit-for-bit on this
/// mapping; it is part of the filter's cross-component contract, not an
/// internal detail.
pub fn reduce(hash: u64, bound: u64) -> u64 {
    let bound_hi = bound >> 32;
    let bound_lo = bound & 0xffff_ffff;
    let hash_hi = hash >> 32;
    let hash_lo = hash & 0xffff_ffff;

    let upper = hash_hi * bound_hi;
    let mid_a = hash_hi * bound_lo;
    let mid_b = bound_hi * hash_lo;
    let lower = hash_lo * bound_lo;

    let carry = ((mid_a & 0xffff_ffff) + (mid_b & 0xffff_ffff) + (lower >> 32)) >> 32;

    upper + (mid_a >> 32) + (mid_b >> 32) + carry
}
