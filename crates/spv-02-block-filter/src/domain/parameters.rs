//! Bloom filter sizing
//!
//! Formulas, capped at the protocol limits:
//! - size = -n*ln(fpr) / (ln(2)^2) bits, rounded down to whole bytes
//! - k = (size_bits / n) * ln(2)

use std::f64::consts::LN_2;

/// Largest filter a peer will load, in bytes.
pub const MAX_FILTER_SIZE: usize = 36_000;

/// Most hash functions a peer will accept.
pub const MAX_HASH_FUNCS: u32 = 50;

/// Bloom filter parameters
#[derive(Clone, Debug, PartialEq)]
pub struct BloomFilterParams {
    /// Filter size in bytes
    pub size_bytes: usize,
    /// Number of hash functions
    pub hash_count: u32,
    /// Expected false positive rate with these parameters
    pub expected_fpr: f64,
}

/// Calculate capped filter parameters for `num_elements` at `target_fpr`
///
/// The rate is clamped to `[1e-9, 1]`. A result of zero bytes is possible for
/// tiny, noisy filters; such a filter matches everything.
pub fn calculate_optimal_parameters(num_elements: usize, target_fpr: f64) -> BloomFilterParams {
    if num_elements == 0 {
        return BloomFilterParams {
            size_bytes: 1,
            hash_count: 1,
            expected_fpr: 0.0,
        };
    }

    let fpr = target_fpr.clamp(1e-9, 1.0);
    let n = num_elements as f64;
    let ln2_squared = LN_2 * LN_2;

    let size_bits = (-n * fpr.ln() / ln2_squared) as usize;
    let size_bytes = size_bits.min(MAX_FILTER_SIZE * 8) / 8;

    let hash_count = ((size_bytes * 8) as f64 / n * LN_2) as u32;
    let hash_count = hash_count.min(MAX_HASH_FUNCS);

    BloomFilterParams {
        size_bytes,
        hash_count,
        expected_fpr: calculate_fpr(size_bytes * 8, num_elements, hash_count),
    }
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: u32) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}
