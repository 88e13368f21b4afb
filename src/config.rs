use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything the sandbox needs to set up its one scene.
///
/// Every field has a default, so a config file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub window: WindowConfig,
    pub shaders: ShaderPaths,
    pub textures: Vec<TextureBinding>,
    pub camera: CameraConfig,
    pub clear_color: [f32; 4],
    /// `env_logger` filter; falls back to `RUST_LOG` when unset.
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

/// A texture file and the sampler uniform that reads it from `unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureBinding {
    pub path: PathBuf,
    pub uniform: String,
    pub unit: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub model_pitch_deg: f32,
    pub view_offset: [f32; 3],
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            shaders: ShaderPaths::default(),
            textures: vec![
                TextureBinding {
                    path: "./tex.png".into(),
                    uniform: "texture1".into(),
                    unit: 0,
                },
                TextureBinding {
                    path: "./lumi.jpg".into(),
                    uniform: "texture2".into(),
                    unit: 1,
                },
            ],
            camera: CameraConfig::default(),
            clear_color: [0.2, 0.3, 0.3, 1.0],
            log_filter: None,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Testing".into(),
            width: 640,
            height: 480,
        }
    }
}

impl Default for ShaderPaths {
    fn default() -> Self {
        Self {
            vertex: "./vertex.glsl".into(),
            fragment: "./fragment.glsl".into(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 45.0,
            near: 0.1,
            far: 100.0,
            model_pitch_deg: -55.0,
            view_offset: [0.0, -0.2, 0.0],
        }
    }
}

impl SandboxConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn aspect(&self) -> f32 {
        self.window.width as f32 / self.window.height as f32
    }
}
