//! Cosine similarity over dense embedding vectors.
//!
//! Accumulation happens in `f64` regardless of the storage type. A zero-norm
//! operand yields `0.0` instead of `NaN`.

/// Cosine similarity of two dense vectors (`0.0` if either has zero norm).
///
/// Vectors of different lengths are compared over their common prefix; the
/// encoder guarantees equal widths, this only keeps the function total.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;

    for (&x, &y) in a.iter().zip(b.iter()) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    cosine_from_parts(dot, norm_a.sqrt(), norm_b.sqrt())
}

/// Combines a dot product and two norms, guarding zero vectors.
pub(crate) fn cosine_from_parts(dot: f64, norm_a: f64, norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
