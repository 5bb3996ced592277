use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::glow::GlowOptions;
use crate::animation::PerState;
use crate::error::{invalid, AnimusError};
use crate::form::cloud::{Layer, PerLayer};

/// Radius band and population of one density shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ShellSpec {
    /// Inner radius of the sampling band.
    pub inner_radius: f32,
    /// Outer radius of the sampling band; also the containment maximum.
    pub outer_radius: f32,
    /// Number of particles in the shell.
    pub count: usize,
    /// Sprite size of every particle in the shell.
    pub size: f32,
}

impl ShellSpec {
    /// Fail fast on radius bands that cannot be sampled.
    ///
    /// # Errors
    ///
    /// [`AnimusError::InvalidConfig`] on a non-finite, negative or inverted
    /// band.
    pub fn validate(&self, layer: Layer) -> Result<(), AnimusError> {
        if !self.inner_radius.is_finite()
            || !self.outer_radius.is_finite()
            || self.inner_radius < 0.0
            || self.outer_radius <= self.inner_radius
        {
            return Err(invalid(format!(
                "{} shell band [{}, {}) is invalid",
                layer.name(),
                self.inner_radius,
                self.outer_radius
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Cloud", inline)]
#[serde(default)]
/// Cloud form: three nested density shells in a bounded flow field.
pub struct CloudOptions {
    /// Shell bands, core to edge.
    #[schemars(skip)]
    pub shells: PerLayer<ShellSpec>,
    /// Orbital flow rate around the vertical axis.
    pub flow_speed: PerState<f32>,
    /// Containment radius multiplier.
    pub contraction: PerState<f32>,
    /// Sprite intensity.
    pub intensity: PerState<f32>,
    /// Inward spiral pull.
    pub spiral_strength: PerState<f32>,
    /// Per-axis random jitter amplitude.
    pub chaos: PerState<f32>,
    /// Centering attraction rate, scaled by flow speed.
    #[schemars(title = "Centering", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub centering: f32,
    /// Target color per shell per state.
    #[schemars(skip)]
    pub colors: PerLayer<PerState<[f32; 3]>>,
    /// Exponential color approach rate (per second).
    #[schemars(title = "Color Rate", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub color_rate: f32,
    /// Heart glow shell.
    pub heart: GlowOptions,
}

impl Default for CloudOptions {
    fn default() -> Self {
        let shell = |inner_radius, outer_radius, count, size| ShellSpec {
            inner_radius,
            outer_radius,
            count,
            size,
        };
        Self {
            shells: PerLayer::new(
                shell(0.0, 0.8, 1500, 0.06),
                shell(0.8, 1.6, 1200, 0.045),
                shell(1.6, 2.4, 800, 0.03),
            ),
            flow_speed: PerState::new(0.3, 0.8, 1.5),
            contraction: PerState::new(1.0, 0.85, 0.7),
            intensity: PerState::new(0.6, 0.9, 1.3),
            spiral_strength: PerState::new(0.0, 0.3, 0.6),
            chaos: PerState::new(0.002, 0.004, 0.012),
            centering: 0.05,
            colors: PerLayer::new(
                PerState::new(
                    [0.9, 0.95, 1.0],
                    [0.95, 0.85, 1.0],
                    [1.0, 0.9, 0.7],
                ),
                PerState::new(
                    [0.45, 0.65, 1.0],
                    [0.6, 0.4, 1.0],
                    [1.0, 0.55, 0.25],
                ),
                PerState::new(
                    [0.2, 0.3, 0.8],
                    [0.35, 0.15, 0.7],
                    [0.85, 0.25, 0.1],
                ),
            ),
            color_rate: 3.0,
            heart: GlowOptions::heart(),
        }
    }
}

impl CloudOptions {
    /// Validate every shell and require a non-empty cloud.
    ///
    /// # Errors
    ///
    /// The first shell problem, or an empty cloud.
    pub fn validate(&self) -> Result<(), AnimusError> {
        for layer in Layer::ALL {
            self.shells.get(layer).validate(layer)?;
        }
        if Layer::ALL.iter().all(|&l| self.shells.get(l).count == 0) {
            return Err(invalid("cloud form has zero particles"));
        }
        self.heart.validate("cloud heart")
    }

    /// Total particle count across shells.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        Layer::ALL.iter().map(|&l| self.shells.get(l).count).sum()
    }
}
