//! TOML configuration: query parameters and the mesh placement.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use meshprobe_kernel::{MeshQuery, QueryParams};
use meshprobe_math::Transform;
use serde::{Deserialize, Serialize};

/// Contents of a `--config` file. Every table and field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Numeric query parameters.
    pub query: QueryParams,
    /// Local-to-world placement of the mesh.
    pub transform: TransformConfig,
}

/// Placement as translation, Euler rotation in degrees and per-axis scale.
///
/// Applied to a local point in the order scale, rotate about X, about Y,
/// about Z, translate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformConfig {
    pub translation: [f64; 3],
    pub rotation_deg: [f64; 3],
    pub scale: [f64; 3],
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            translation: [0.0; 3],
            rotation_deg: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

impl TransformConfig {
    /// The placement as a 4x4 transform.
    pub fn to_transform(&self) -> Transform {
        let [tx, ty, tz] = self.translation;
        let [rx, ry, rz] = self.rotation_deg.map(f64::to_radians);
        let [sx, sy, sz] = self.scale;
        Transform::translation(tx, ty, tz)
            .then(&Transform::rotation_z(rz))
            .then(&Transform::rotation_y(ry))
            .then(&Transform::rotation_x(rx))
            .then(&Transform::scale(sx, sy, sz))
    }
}

impl Config {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.query.validate()?;
        Ok(config)
    }

    /// Read `path`, or return the default config when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Query runner for the configured parameters.
    pub fn query(&self) -> Result<MeshQuery> {
        Ok(MeshQuery::new(self.query)?)
    }
}
