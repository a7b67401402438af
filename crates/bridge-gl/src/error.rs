use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gl::{self, GLenum};

/// Error classes a rejected call can raise.
#[derive(Debug, Error, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    /// An enumerated argument is not part of the legal set for the call.
    #[error("invalid enum")]
    InvalidEnum,
    /// A numeric argument is outside of its legal domain.
    #[error("invalid value")]
    InvalidValue,
    /// The call is well formed but not allowed in the current state.
    #[error("invalid operation")]
    InvalidOperation,
    /// A framebuffer the call reads from or writes to is not complete.
    #[error("invalid framebuffer operation")]
    InvalidFramebufferOperation,
}

impl ErrorKind {
    #[inline(always)]
    pub fn gl_code(self) -> GLenum {
        match self {
            ErrorKind::InvalidEnum => gl::INVALID_ENUM,
            ErrorKind::InvalidValue => gl::INVALID_VALUE,
            ErrorKind::InvalidOperation => gl::INVALID_OPERATION,
            ErrorKind::InvalidFramebufferOperation => gl::INVALID_FRAMEBUFFER_OPERATION,
        }
    }

    pub fn from_gl_code(code: GLenum) -> Option<Self> {
        match code {
            gl::INVALID_ENUM => Some(ErrorKind::InvalidEnum),
            gl::INVALID_VALUE => Some(ErrorKind::InvalidValue),
            gl::INVALID_OPERATION => Some(ErrorKind::InvalidOperation),
            gl::INVALID_FRAMEBUFFER_OPERATION => Some(ErrorKind::InvalidFramebufferOperation),
            _ => None,
        }
    }
}
