//! Vocabulary of the source API: tokens, internal formats, error classes and device
//! configuration.

pub mod config;
pub mod error;
pub mod format;
pub mod gl;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::config::{Capabilities, ConfigError, DeviceConfig, Limits};
    pub use crate::error::ErrorKind;
    pub use crate::format::{ComponentType, InternalFormatInfo};
    pub use crate::gl::{GLbitfield, GLenum, GLint, GLsizei, GLuint};
}
