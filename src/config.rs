//! Generation options: defaults, JSON loading and validation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{DungeonError, Result};
use crate::random::GaussianOptions;

/// Everything a generation run depends on. Identical options always produce
/// an identical dungeon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub seed: String,
    pub width: i32,
    pub height: i32,
    /// Split position, as a fraction of the side being split
    pub partition: GaussianOptions,
    /// Room margin, as a fraction of the leaf side it is measured against
    pub padding: GaussianOptions,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            partition: GaussianOptions::new(DEFAULT_PARTITION_MU, DEFAULT_PARTITION_SIGMA),
            padding: GaussianOptions::new(DEFAULT_PADDING_MU, DEFAULT_PADDING_SIGMA),
        }
    }
}

impl GenerationOptions {
    pub fn new(seed: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            seed: seed.into(),
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_partition(mut self, mu: f64, sigma: f64) -> Self {
        self.partition = GaussianOptions::new(mu, sigma);
        self
    }

    pub fn with_padding(mut self, mu: f64, sigma: f64) -> Self {
        self.padding = GaussianOptions::new(mu, sigma);
        self
    }

    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| DungeonError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject options that cannot describe a grid.
    ///
    /// `mu` values outside `[0, 1]` are unusual but accepted: the clamp in
    /// the sampler keeps every offset on the grid.
    pub fn validate(&self) -> Result<()> {
        let valid_side = 1..=MAX_DIMENSION;
        if !valid_side.contains(&self.width) || !valid_side.contains(&self.height) {
            return Err(DungeonError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        check_distribution("partition", self.partition)?;
        check_distribution("padding", self.padding)?;
        Ok(())
    }
}

fn check_distribution(field: &'static str, dist: GaussianOptions) -> Result<()> {
    if dist.mu.is_finite() && dist.sigma.is_finite() {
        return Ok(());
    }
    Err(DungeonError::InvalidDistribution {
        field,
        mu: dist.mu,
        sigma: dist.sigma,
    })
}
