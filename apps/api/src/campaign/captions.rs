//! Caption extraction from a raw generation-service text block.
//!
//! Input format: captions separated by a blank line (`"\n\n"`). This is the
//! only boundary the parser understands. A response that uses single newlines
//! or numbered lists instead is NOT repaired here; it simply yields fewer (or
//! more) captions than intended.

/// Splits `raw` on blank lines, trims each segment, drops empty segments and
/// keeps at most `n` captions.
pub fn split_captions(raw: &str, n: u32) -> Vec<String> {
    raw.split("\n\n")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .take(n as usize)
        .map(str::to_string)
        .collect()
}
