//! Stable BLAKE3-derived hashes.
//!
//! The stub embedder buckets tokens by hash, so the mapping has to be identical
//! across processes and toolchains. `std`'s `DefaultHasher` makes no such promise.

/// Computes a 64-bit hash of `data` from the first 8 bytes of its BLAKE3 digest.
///
/// Collisions only merge two tokens into one embedding bucket, which is
/// acceptable for the stub encoder.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

/// Hashes a single (already lower-cased) token.
#[inline]
pub fn hash_token(token: &str) -> u64 {
    hash_to_u64(token.as_bytes())
}

/// Maps a token to an embedding bucket and a sign (`+1.0` / `-1.0`).
///
/// The low bits pick the bucket, the top bit picks the sign, so the two are
/// independent for any `dim` below 2^63.
#[inline]
pub fn token_bucket(token: &str, dim: usize) -> (usize, f32) {
    let hash = hash_token(token);
    let bucket = (hash % dim.max(1) as u64) as usize;
    let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
    (bucket, sign)
}
