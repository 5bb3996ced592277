use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit camera placement and turntable rotation.
pub struct CameraOptions {
    /// Distance from the entity center.
    #[schemars(title = "Distance", range(min = 2.0, max = 40.0), extend("step" = 0.5))]
    pub distance: f32,
    /// Initial elevation above the horizontal plane, in radians.
    #[schemars(skip)]
    pub elevation: f32,
    /// Whether turntable rotation starts enabled.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
    /// Turntable angular speed in radians per second.
    #[schemars(title = "Rotate Speed", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub auto_rotate_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            distance: 8.0,
            elevation: 0.3,
            auto_rotate: true,
            auto_rotate_speed: 0.25,
        }
    }
}
