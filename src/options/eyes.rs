use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{invalid, AnimusError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Eyes", inline)]
#[serde(default)]
/// Camera-facing iris clusters floating around the ring form.
pub struct EyeOptions {
    /// Whether the ring form draws eyes at all.
    #[schemars(title = "Show Eyes")]
    pub enabled: bool,
    /// Distance of each eye anchor from the center.
    #[schemars(title = "Anchor Radius", range(min = 0.5, max = 6.0), extend("step" = 0.1))]
    pub anchor_radius: f32,
    /// Number of concentric iris rings around the pupil.
    #[schemars(skip)]
    pub iris_rings: usize,
    /// Particles on the innermost iris ring; ring k holds `k` times this.
    #[schemars(skip)]
    pub base_count: usize,
    /// Radial gap between iris rings.
    #[schemars(skip)]
    pub ring_spacing: f32,
    /// Sprite size of the center pupil particle.
    #[schemars(skip)]
    pub pupil_size: f32,
    /// Size multiplier applied per ring outward.
    #[schemars(skip)]
    pub size_falloff: f32,
    /// Brightness multiplier applied per ring outward.
    #[schemars(skip)]
    pub brightness_falloff: f32,
    /// Steady brightness while resting.
    #[schemars(title = "Rest Intensity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub rest_intensity: f32,
    /// Angular rate of the thinking scan wave.
    #[schemars(title = "Scan Speed", range(min = 0.5, max = 10.0), extend("step" = 0.1))]
    pub scan_speed: f32,
    /// Angular rate of the acting blaze pulse.
    #[schemars(title = "Blaze Speed", range(min = 1.0, max = 30.0), extend("step" = 0.5))]
    pub blaze_speed: f32,
}

impl Default for EyeOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            anchor_radius: 3.0,
            iris_rings: 3,
            base_count: 6,
            ring_spacing: 0.06,
            pupil_size: 0.09,
            size_falloff: 0.75,
            brightness_falloff: 0.7,
            rest_intensity: 0.6,
            scan_speed: 3.0,
            blaze_speed: 14.0,
        }
    }
}

impl EyeOptions {
    /// Reject iris layouts with no visible particles beyond the pupil.
    ///
    /// # Errors
    ///
    /// [`AnimusError::InvalidConfig`] for an empty iris, or a non-positive
    /// anchor radius or ring spacing.
    pub fn validate(&self) -> Result<(), AnimusError> {
        if self.enabled && (self.iris_rings == 0 || self.base_count == 0) {
            return Err(invalid("eye iris needs at least one populated ring"));
        }
        if self.anchor_radius <= 0.0 || self.ring_spacing <= 0.0 {
            return Err(invalid("eye anchor radius and spacing must be positive"));
        }
        Ok(())
    }
}
