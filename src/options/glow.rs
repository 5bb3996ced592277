use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::PerState;
use crate::error::{invalid, AnimusError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Glow Shell", inline)]
#[serde(default)]
/// Enclosing translucent shell (ring core glow / cloud heart).
pub struct GlowOptions {
    /// Base brightness per state.
    pub intensity: PerState<f32>,
    /// Base scale per state, before breathing.
    pub scale: PerState<f32>,
    /// Breathing angular rate per state (radians per second).
    pub breathing_rate: PerState<f32>,
    /// Relative breathing amplitude applied to the scale.
    #[schemars(title = "Breathing", range(min = 0.0, max = 0.3), extend("step" = 0.01))]
    pub breathing_amplitude: f32,
    /// Exponent of the view-angle edge-brightening term.
    #[schemars(title = "Fresnel Power", range(min = 0.5, max = 8.0), extend("step" = 0.1))]
    pub fresnel_power: f32,
}

impl GlowOptions {
    /// Ring-form core glow defaults.
    #[must_use]
    pub fn core() -> Self {
        Self {
            intensity: PerState::new(0.4, 0.7, 1.1),
            scale: PerState::new(1.0, 0.95, 1.1),
            breathing_rate: PerState::new(1.2, 1.2, 1.2),
            breathing_amplitude: 0.04,
            fresnel_power: 2.5,
        }
    }

    /// Cloud-form heart shell defaults.
    #[must_use]
    pub fn heart() -> Self {
        Self {
            intensity: PerState::new(0.5, 0.8, 1.2),
            scale: PerState::new(0.9, 0.75, 0.65),
            breathing_rate: PerState::new(1.5, 2.5, 4.0),
            breathing_amplitude: 0.06,
            fresnel_power: 3.0,
        }
    }

    pub(crate) fn validate(&self, owner: &str) -> Result<(), AnimusError> {
        if self.fresnel_power <= 0.0 {
            return Err(invalid(format!(
                "{owner} glow fresnel power must be positive"
            )));
        }
        Ok(())
    }
}

impl Default for GlowOptions {
    fn default() -> Self {
        Self::core()
    }
}
