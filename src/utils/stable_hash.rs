//! Stable short identifiers for postings without a structural id.
//!
//! The output is persisted as an external id, so the algorithm and the
//! output format must never change.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Hashes `input` with 32-bit FNV-1a and renders it as 8 lowercase hex characters.
///
/// The hash runs over UTF-16 code units rather than UTF-8 bytes so that ids
/// produced by the browser form helper and by this crate agree for any input.
///
/// # Examples
///
/// ```
/// use jobhint::utils::stable_hash::stable_hash;
///
/// assert_eq!(stable_hash(""), "811c9dc5");
/// assert_eq!(stable_hash("a"), "e40c292c");
/// ```
pub fn stable_hash(input: &str) -> String {
    let hash = input.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
        (h ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    });

    format!("{hash:08x}")
}
