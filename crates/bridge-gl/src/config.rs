use std::path::Path;

use bitflags::bitflags;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    format,
    gl::GLenum,
};

bitflags! {
    /// Optional features a device exposes on top of its client version.
    #[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    #[serde(transparent)]
    pub struct Capabilities: u32 {
        const TEXTURE_FILTER_ANISOTROPIC = 0b0000_0001;
        const COLOR_BUFFER_FLOAT         = 0b0000_0010;
        const COLOR_BUFFER_HALF_FLOAT    = 0b0000_0100;
        const RGB8_RGBA8                 = 0b0000_1000;
        const PACKED_DEPTH_STENCIL       = 0b0001_0000;
        const DEPTH32                    = 0b0010_0000;
        const BGRA8_RENDERABLE           = 0b0100_0000;
        const FRAMEBUFFER_MULTISAMPLE    = 0b1000_0000;
    }
}

/// Device limits consulted by validation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Limits {
    /// Largest width or height a renderbuffer may have.
    pub max_renderbuffer_size: i32,
    /// Hardware wide sample count ceiling.
    pub max_samples: i32,
    /// Number of color attachments a framebuffer can enable at once.
    pub max_draw_buffers: usize,
    /// Per-format sample count ceilings. Formats not listed here fall back to `max_samples`.
    pub format_samples: FxHashMap<GLenum, i32>,
}

/// Everything static about a device: which version of the source API it speaks, which optional
/// features it has, and its limits.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DeviceConfig {
    /// Major version of the client API.
    pub client_version: u32,
    pub capabilities: Capabilities,
    pub limits: Limits,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read device configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("device configuration is invalid: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

impl Limits {
    /// Sample ceiling for a specific internal format.
    pub fn max_format_samples(
        &self,
        format: GLenum,
        client_version: u32,
        capabilities: Capabilities,
    ) -> i32 {
        if let Some(samples) = self.format_samples.get(&format) {
            return *samples;
        }

        // Integer formats cannot be multisampled at all
        if format::is_integer_format(format, client_version) {
            return 0;
        }

        let renderable = format::is_color_rendering_supported(format, client_version, capabilities)
            || format::is_depth_rendering_supported(format, client_version, capabilities)
            || format::is_stencil_rendering_supported(format, client_version, capabilities);

        if renderable {
            self.max_samples
        } else {
            0
        }
    }
}

impl DeviceConfig {
    pub fn from_ron_str(data: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str::<DeviceConfig>(data)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    #[inline(always)]
    pub fn supports(&self, capabilities: Capabilities) -> bool {
        self.capabilities.contains(capabilities)
    }

    #[inline(always)]
    pub fn max_format_samples(&self, format: GLenum) -> i32 {
        self.limits
            .max_format_samples(format, self.client_version, self.capabilities)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_renderbuffer_size: 16384,
            max_samples: 4,
            max_draw_buffers: 4,
            format_samples: FxHashMap::default(),
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            client_version: 3,
            capabilities: Capabilities::empty(),
            limits: Limits::default(),
        }
    }
}
