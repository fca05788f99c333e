//! Layout solver configuration.

use std::borrow::Cow;

use gw_core::ensure_finite;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{LayoutError, LayoutResult};

/// How initial positions are seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// Reproducible layout: the same graph always lands in the same place.
    Fixed(u64),
    /// Fresh OS entropy on every solve.
    #[default]
    Entropy,
}

/// Force-relaxation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Drawing area width.
    pub width: f64,
    /// Drawing area height.
    pub height: f64,
    /// Positions are clamped to `[margin, size - margin]` after every iteration.
    pub margin: f64,
    /// Initial positions are drawn from `[spawn_margin, size - spawn_margin)`.
    pub spawn_margin: f64,
    /// Fixed iteration budget.
    pub iterations: usize,
    /// Pairs closer than this repel each other.
    pub min_distance: f64,
    /// Repulsion damping factor.
    pub repulsion: f64,
    /// Rest length of an edge.
    pub ideal_distance: f64,
    /// Attraction damping factor.
    pub attraction: f64,
    pub seed: SeedPolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 350.0,
            margin: 30.0,
            spawn_margin: 50.0,
            iterations: 100,
            min_distance: 120.0,
            repulsion: 0.5,
            ideal_distance: 150.0,
            attraction: 0.1,
            seed: SeedPolicy::default(),
        }
    }
}

impl LayoutConfig {
    /// Same parameters with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = SeedPolicy::Fixed(seed);
        self
    }

    pub fn validate(&self) -> LayoutResult<()> {
        ensure_finite(self.width, "width")?;
        ensure_finite(self.height, "height")?;
        ensure_finite(self.margin, "margin")?;
        ensure_finite(self.spawn_margin, "spawn_margin")?;
        ensure_finite(self.min_distance, "min_distance")?;
        ensure_finite(self.repulsion, "repulsion")?;
        ensure_finite(self.ideal_distance, "ideal_distance")?;
        ensure_finite(self.attraction, "attraction")?;

        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(LayoutError::InvalidConfig {
                what: "width and height must be positive",
            });
        }
        if self.margin < 0.0 || 2.0 * self.margin > self.width.min(self.height) {
            return Err(LayoutError::InvalidConfig {
                what: "margin must leave a non-empty drawing area",
            });
        }
        if self.spawn_margin < 0.0 || 2.0 * self.spawn_margin >= self.width.min(self.height) {
            return Err(LayoutError::InvalidConfig {
                what: "spawn_margin must leave a non-empty spawn area",
            });
        }
        if self.min_distance < 0.0 || self.ideal_distance < 0.0 {
            return Err(LayoutError::InvalidConfig {
                what: "distances must be non-negative",
            });
        }
        Ok(())
    }

    /// This config when it validates; otherwise the defaults with the same seed
    /// and iteration budget.
    pub fn sanitized(&self) -> Cow<'_, LayoutConfig> {
        match self.validate() {
            Ok(()) => Cow::Borrowed(self),
            Err(e) => {
                warn!(error = %e, "invalid layout config, falling back to defaults");
                Cow::Owned(LayoutConfig {
                    iterations: self.iterations,
                    seed: self.seed,
                    ..LayoutConfig::default()
                })
            }
        }
    }
}
