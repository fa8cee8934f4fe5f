//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use spv_02_block_filter::domain::BloomConfigBuilder;
//!
//! let config = BloomConfigBuilder::new()
//!     .target_fpr(0.001)
//!     .expected_elements(20)
//!     .update(BloomUpdate::All)
//!     .build()?;
//! ```

use serde::{Deserialize, Serialize};

use super::bloom_filter::BloomUpdate;
use crate::error::FilterError;

/// Largest element count a single filter is sized for.
pub const MAX_EXPECTED_ELEMENTS: usize = 100_000;

/// Bloom filter configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloomConfig {
    /// Target false positive rate, in (0, 1]
    pub target_fpr: f64,
    /// Number of elements the filter is sized for
    pub expected_elements: usize,
    /// Hash seed tweak
    pub tweak: u32,
    /// Update behaviour on match
    pub update: BloomUpdate,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            target_fpr: 0.0001,
            expected_elements: 50,
            tweak: 0,
            update: BloomUpdate::All,
        }
    }
}

impl BloomConfig {
    /// Validate the configuration against the protocol limits
    pub fn validate(&self) -> Result<(), FilterError> {
        if !(self.target_fpr > 0.0 && self.target_fpr <= 1.0) {
            return Err(FilterError::InvalidFPR { fpr: self.target_fpr });
        }

        if self.expected_elements == 0 {
            return Err(FilterError::InvalidParameters(
                "expected_elements cannot be 0".to_string(),
            ));
        }

        if self.expected_elements > MAX_EXPECTED_ELEMENTS {
            return Err(FilterError::TooManyElements {
                count: self.expected_elements,
                max: MAX_EXPECTED_ELEMENTS,
            });
        }

        Ok(())
    }
}

/// Builder for BloomConfig with validation
#[derive(Default)]
pub struct BloomConfigBuilder {
    target_fpr: Option<f64>,
    expected_elements: Option<usize>,
    tweak: Option<u32>,
    update: Option<BloomUpdate>,
}

impl BloomConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set target false positive rate
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    /// Set the number of elements the filter is sized for
    pub fn expected_elements(mut self, elements: usize) -> Self {
        self.expected_elements = Some(elements);
        self
    }

    /// Set the hash seed tweak
    pub fn tweak(mut self, tweak: u32) -> Self {
        self.tweak = Some(tweak);
        self
    }

    /// Set the update behaviour
    pub fn update(mut self, update: BloomUpdate) -> Self {
        self.update = Some(update);
        self
    }

    /// Build the BloomConfig, validating all parameters
    pub fn build(self) -> Result<BloomConfig, FilterError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> BloomConfig {
        let defaults = BloomConfig::default();

        BloomConfig {
            target_fpr: self.target_fpr.unwrap_or(defaults.target_fpr),
            expected_elements: self.expected_elements.unwrap_or(defaults.expected_elements),
            tweak: self.tweak.unwrap_or(defaults.tweak),
            update: self.update.unwrap_or(defaults.update),
        }
    }
}
