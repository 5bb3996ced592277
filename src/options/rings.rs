use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::glow::GlowOptions;
use crate::animation::PerState;
use crate::error::{invalid, AnimusError};

/// Geometry and motion of a single ring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct RingSpec {
    /// Rotation axis (ring plane normal). Need not be normalized.
    pub axis: [f32; 3],
    /// Nominal radius.
    pub radius: f32,
    /// Angular speed in radians per second; the sign sets the direction.
    pub base_speed: f32,
    /// Angle of the first particle around the ring.
    pub phase_offset: f32,
    /// Number of particles sampled along the ring.
    pub particle_count: usize,
}

impl RingSpec {
    /// Fail fast on geometry that cannot be sampled.
    ///
    /// # Errors
    ///
    /// [`AnimusError::InvalidConfig`] on zero particles, a non-positive or
    /// non-finite radius, or a zero-length or non-finite axis.
    pub fn validate(&self, index: usize) -> Result<(), AnimusError> {
        if self.particle_count == 0 {
            return Err(invalid(format!("ring {index} has zero particles")));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(invalid(format!(
                "ring {index} radius must be positive, got {}",
                self.radius
            )));
        }
        if glam::Vec3::from_array(self.axis).try_normalize().is_none() {
            return Err(invalid(format!("ring {index} axis is zero-length")));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rings", inline)]
#[serde(default)]
/// Ring form: interlocking rotating rings around a core glow.
pub struct RingOptions {
    /// Ring layout.
    #[schemars(skip)]
    pub rings: Vec<RingSpec>,
    /// Smallest particle sprite size.
    #[schemars(title = "Min Size", range(min = 0.001, max = 0.5), extend("step" = 0.005))]
    pub size_min: f32,
    /// Largest particle sprite size, inclusive.
    #[schemars(title = "Max Size", range(min = 0.001, max = 0.5), extend("step" = 0.005))]
    pub size_max: f32,
    /// Multiplier on every ring's base angular speed.
    pub speed_multiplier: PerState<f32>,
    /// Amplitude of the render-time radial drift.
    pub spread: PerState<f32>,
    /// Sprite opacity.
    pub opacity: PerState<f32>,
    /// Sprite glow intensity.
    pub pulse_intensity: PerState<f32>,
    /// Target ring color per state.
    #[schemars(skip)]
    pub colors: PerState<[f32; 3]>,
    /// Exponential color approach rate (per second).
    #[schemars(title = "Color Rate", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub color_rate: f32,
    /// Core glow shell.
    pub core: GlowOptions,
}

impl Default for RingOptions {
    fn default() -> Self {
        Self {
            rings: vec![
                RingSpec {
                    axis: [1.0, 0.0, 0.0],
                    radius: 2.0,
                    base_speed: 0.6,
                    phase_offset: 0.0,
                    particle_count: 900,
                },
                RingSpec {
                    axis: [0.0, 1.0, 0.0],
                    radius: 2.2,
                    base_speed: -0.45,
                    phase_offset: 1.0,
                    particle_count: 900,
                },
                RingSpec {
                    axis: [0.0, 0.6, 0.8],
                    radius: 2.4,
                    base_speed: 0.35,
                    phase_offset: 2.0,
                    particle_count: 900,
                },
            ],
            size_min: 0.02,
            size_max: 0.06,
            speed_multiplier: PerState::new(1.0, 2.5, 4.0),
            spread: PerState::new(0.02, 0.05, 0.12),
            opacity: PerState::new(0.6, 0.8, 1.0),
            pulse_intensity: PerState::new(0.5, 0.8, 1.2),
            colors: PerState::new(
                [0.35, 0.55, 1.0],
                [0.65, 0.35, 1.0],
                [1.0, 0.55, 0.2],
            ),
            color_rate: 3.0,
            core: GlowOptions::core(),
        }
    }
}

impl RingOptions {
    /// Validate every ring plus the shared size range.
    ///
    /// # Errors
    ///
    /// The first ring or size-range problem found.
    pub fn validate(&self) -> Result<(), AnimusError> {
        if self.rings.is_empty() {
            return Err(invalid("ring form needs at least one ring"));
        }
        for (i, ring) in self.rings.iter().enumerate() {
            ring.validate(i)?;
        }
        if !self.size_min.is_finite()
            || !self.size_max.is_finite()
            || self.size_min <= 0.0
            || self.size_min > self.size_max
        {
            return Err(invalid(format!(
                "ring size range [{}, {}] is invalid",
                self.size_min, self.size_max
            )));
        }
        self.core.validate("ring core")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(RingOptions::default().validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_rings() {
        let base = RingOptions::default().rings[0];
        let zero_count = RingSpec {
            particle_count: 0,
            ..base
        };
        let zero_axis = RingSpec {
            axis: [0.0; 3],
            ..base
        };
        let bad_radius = RingSpec {
            radius: -1.0,
            ..base
        };
        for spec in [zero_count, zero_axis, bad_radius] {
            assert!(spec.validate(0).is_err());
        }
        let empty = RingOptions {
            rings: Vec::new(),
            ..RingOptions::default()
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_geometry() {
        let base = RingOptions::default().rings[0];
        let nan_radius = RingSpec {
            radius: f32::NAN,
            ..base
        };
        let inf_radius = RingSpec {
            radius: f32::INFINITY,
            ..base
        };
        let nan_axis = RingSpec {
            axis: [f32::NAN, 1.0, 0.0],
            ..base
        };
        for spec in [nan_radius, inf_radius, nan_axis] {
            assert!(spec.validate(0).is_err());
        }
        for (min, max) in [(f32::NAN, 0.06), (0.02, f32::NAN), (0.02, f32::INFINITY)] {
            let opts = RingOptions {
                size_min: min,
                size_max: max,
                ..RingOptions::default()
            };
            assert!(opts.validate().is_err(), "[{min}, {max}]");
        }
    }
}
