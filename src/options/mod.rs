//! Centralized entity options with TOML preset support.
//!
//! All tweakable settings (transition timing, ring and cloud forms, eyes,
//! camera, keybindings) are consolidated here. Options serialize to/from
//! TOML for presets; every section uses `#[serde(default)]` so partial files
//! work.

mod camera;
mod cloud;
mod eyes;
mod glow;
mod keybindings;
mod rings;
mod transitions;

use std::path::Path;

pub use camera::CameraOptions;
pub use cloud::{CloudOptions, ShellSpec};
pub use eyes::EyeOptions;
pub use glow::GlowOptions;
pub use keybindings::KeybindingOptions;
pub use rings::{RingOptions, RingSpec};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transitions::{DurationEntry, TransitionOptions};

use crate::error::AnimusError;
use crate::form::FormKind;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Form shown at startup.
    #[schemars(title = "Form")]
    pub initial_form: FormKind,
    /// Fixed RNG seed for reproducible layouts; entropy when absent.
    #[schemars(skip)]
    pub seed: Option<u64>,
    /// Transition easing and durations.
    pub transitions: TransitionOptions,
    /// Ring form parameters.
    pub rings: RingOptions,
    /// Eye cluster parameters (ring form).
    pub eyes: EyeOptions,
    /// Cloud form parameters.
    pub cloud: CloudOptions,
    /// Orbit camera parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`AnimusError::OptionsParse`] when the TOML is malformed.
    pub fn from_toml_str(content: &str) -> Result<Self, AnimusError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| AnimusError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`AnimusError::Io`] if the file cannot be read, or
    /// [`AnimusError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, AnimusError> {
        let content = std::fs::read_to_string(path)?;
        let opts = Self::from_toml_str(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Serialization or filesystem failures.
    pub fn save(&self, path: &Path) -> Result<(), AnimusError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AnimusError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Check every section for geometry or tables that cannot be built.
    ///
    /// Both live forms are validated up front so that switching forms at
    /// runtime can never fail.
    ///
    /// # Errors
    ///
    /// [`AnimusError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<(), AnimusError> {
        self.transitions.validate()?;
        self.rings.validate()?;
        self.eyes.validate()?;
        self.cloud.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::EntityState;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
initial_form = "cloud"

[cloud]
centering = 0.1

[cloud.chaos]
resting = 0.0
thinking = 0.0
acting = 0.5
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.initial_form, FormKind::Cloud);
        assert_eq!(opts.cloud.centering, 0.1);
        assert_eq!(opts.cloud.chaos.get(EntityState::Acting), 0.5);
        // Everything else should be default
        assert_eq!(opts.cloud.shells, CloudOptions::default().shells);
        assert_eq!(opts.rings, RingOptions::default());
        assert!(opts.seed.is_none());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml_str("rings = 3").unwrap_err();
        assert!(matches!(err, AnimusError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup_after_parse() {
        let toml_str = r#"
[keybindings.bindings]
thinking = "KeyX"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyX"), Some(KeyAction::Thinking));
        assert_eq!(opts.keybindings.lookup("KeyT"), None);
    }

    #[test]
    fn default_keybindings() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyR"), Some(KeyAction::Resting));
        assert_eq!(
            opts.keybindings.lookup("KeyO"),
            Some(KeyAction::ToggleAutoRotate)
        );
        assert_eq!(
            opts.keybindings.lookup("Digit3"),
            Some(KeyAction::FormLattice)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn defaults_validate() {
        assert!(Options::default().validate().is_ok());
    }

    fn shells_preset(core_inner: &str, edge_outer: &str) -> String {
        format!(
            "[cloud.shells.core]\ninner_radius = {core_inner}\nouter_radius = 0.8\n\
             count = 1500\nsize = 0.06\n\n\
             [cloud.shells.mid]\ninner_radius = 0.8\nouter_radius = 1.6\n\
             count = 1200\nsize = 0.045\n\n\
             [cloud.shells.edge]\ninner_radius = 1.6\nouter_radius = {edge_outer}\n\
             count = 800\nsize = 0.03\n"
        )
    }

    #[test]
    fn non_finite_presets_parse_but_fail_validation() {
        assert!(Options::from_toml_str(&shells_preset("0.0", "2.4"))
            .unwrap()
            .validate()
            .is_ok());
        let presets = [
            shells_preset("nan", "2.4"),
            shells_preset("0.0", "inf"),
            "[rings]\nsize_min = nan\n".to_owned(),
            "[rings]\nsize_max = inf\n".to_owned(),
            "[[rings.rings]]\naxis = [1.0, 0.0, 0.0]\nradius = nan\n\
             base_speed = 0.6\nphase_offset = 0.0\nparticle_count = 900\n"
                .to_owned(),
        ];
        for preset in &presets {
            let opts = Options::from_toml_str(preset).unwrap();
            assert!(
                matches!(opts.validate(), Err(AnimusError::InvalidConfig(_))),
                "{preset}"
            );
        }
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("animus-options-{}", std::process::id()));
        let path = dir.join("calm.toml");
        let mut opts = Options::default();
        opts.seed = Some(7);
        opts.camera.auto_rotate = false;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["calm".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("rings"));
        assert!(props.contains_key("cloud"));
        assert!(props.contains_key("eyes"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("transitions"));

        // Skipped sections should be absent
        assert!(!props.contains_key("keybindings"));
        assert!(!props.contains_key("seed"));

        let cloud = &props["cloud"]["properties"];
        assert!(cloud.get("centering").is_some());
        assert!(cloud.get("shells").is_none());
    }
}
