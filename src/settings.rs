//! Demo Settings
//!
//! Knobs for the animated hierarchy demo, loadable from JSON. Every field
//! has a default, so a settings file only needs the values it changes.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use orrery::settings::DemoSettings;
//!
//! // Defaults: 360 frames, 0.5 degree steps, camera at (10, 10, 25)
//! let settings = DemoSettings::default();
//!
//! // Override a few fields
//! let settings = DemoSettings::from_json_str(r#"{ "frames": 60, "camera": { "fov_degrees": 45.0 } }"#)?;
//! ```

use std::path::Path;

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::errors::{OrreryError, Result};
use crate::scene::Camera;

/// Camera placement and lens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            eye: [10.0, 10.0, 25.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fov_degrees: 30.0,
            aspect: 1.5,
            near: 1.0,
            far: 100.0,
        }
    }
}

impl CameraSettings {
    #[must_use]
    pub fn build(&self) -> Camera {
        Camera::new_perspective(self.fov_degrees, self.aspect, self.near, self.far).looking_at(
            Vec3::from(self.eye),
            Vec3::from(self.target),
            Vec3::from(self.up),
        )
    }
}

/// Settings for the animated hierarchy demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Number of frames to simulate.
    pub frames: u32,
    /// Rotation step per frame, in degrees.
    pub increment_degrees: f32,
    /// The swing reverses once the accumulated rotation leaves `[-limit, limit]`.
    pub swing_limit_degrees: f32,
    pub camera: CameraSettings,
    pub clear_color: [f32; 4],
    pub mesh_color: [f32; 4],
    pub light_position: [f32; 4],
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            frames: 360,
            increment_degrees: 0.5,
            swing_limit_degrees: 30.0,
            camera: CameraSettings::default(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            mesh_color: [0.0, 1.0, 0.0, 1.0],
            light_position: [5.0, 10.0, 5.0, 1.0],
        }
    }
}

impl DemoSettings {
    /// Parses and validates settings from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads settings from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading settings from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reads settings from `path` when given, falling back to defaults when
    /// the path is `None`.
    pub fn load_or_default(path: Option<impl AsRef<Path>>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::warn!("No settings file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Rejects values that would break the camera or the swing animation.
    /// NaN fails every range check.
    pub fn validate(&self) -> Result<()> {
        let camera = &self.camera;
        if self.frames == 0 {
            return Err(OrreryError::InvalidSettings("frames must be positive".to_string()));
        }
        if !self.increment_degrees.is_finite() {
            return Err(OrreryError::InvalidSettings(format!(
                "increment must be finite, got {}",
                self.increment_degrees
            )));
        }
        if !is_non_negative(self.swing_limit_degrees) {
            return Err(OrreryError::InvalidSettings(format!(
                "swing limit must be >= 0, got {}",
                self.swing_limit_degrees
            )));
        }
        if !is_positive(camera.aspect) {
            return Err(OrreryError::InvalidSettings(format!(
                "aspect must be positive, got {}",
                camera.aspect
            )));
        }
        if !is_positive(camera.near) || !is_positive(camera.far - camera.near) {
            return Err(OrreryError::InvalidSettings(format!(
                "need 0 < near < far, got near {} far {}",
                camera.near, camera.far
            )));
        }
        if !(is_positive(camera.fov_degrees) && camera.fov_degrees < 180.0) {
            return Err(OrreryError::InvalidSettings(format!(
                "fov must be in (0, 180), got {}",
                camera.fov_degrees
            )));
        }
        let vectors = camera.eye.iter().chain(&camera.target).chain(&camera.up);
        if !vectors.copied().all(f32::is_finite) {
            return Err(OrreryError::InvalidSettings(
                "camera eye, target and up must be finite".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn clear_color(&self) -> Vec4 {
        Vec4::from(self.clear_color)
    }

    #[must_use]
    pub fn mesh_color(&self) -> Vec4 {
        Vec4::from(self.mesh_color)
    }

    #[must_use]
    pub fn light_position(&self) -> Vec4 {
        Vec4::from(self.light_position)
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
