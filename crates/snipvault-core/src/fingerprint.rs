//! 32-bit FNV-1a content fingerprint.
//!
//! A cheap equality proxy for duplicate detection, not a security primitive.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Hash already-normalized code, one step per character code point.
///
/// Rendered as lowercase hex with no zero padding.
pub fn fingerprint(normalized: &str) -> String {
    let hash = normalized.chars().fold(FNV_OFFSET_BASIS, |acc, c| {
        (acc ^ u32::from(c)).wrapping_mul(FNV_PRIME)
    });
    format!("{hash:x}")
}
