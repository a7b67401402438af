use bridge_gl::{error::ErrorKind, gl::{self, GLenum}};
use bridge_log::{debug, trace};
use thiserror::Error;

/// Why a call was rejected.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
#[error("{kind}: {problem}")]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub problem: &'static str,
}

/// Receives the error of every rejected call.
pub trait ErrorSink {
    fn record(&mut self, error: &ValidationError);
}

/// The sticky error register of a context.
///
/// The first error recorded is kept until it is taken. Errors recorded while one is already
/// latched are dropped.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct LatchedError(Option<ErrorKind>);

impl ValidationError {
    #[inline(always)]
    pub const fn new(kind: ErrorKind, problem: &'static str) -> Self {
        Self { kind, problem }
    }

    #[inline(always)]
    pub const fn invalid_enum(problem: &'static str) -> Self {
        Self::new(ErrorKind::InvalidEnum, problem)
    }

    #[inline(always)]
    pub const fn invalid_value(problem: &'static str) -> Self {
        Self::new(ErrorKind::InvalidValue, problem)
    }

    #[inline(always)]
    pub const fn invalid_operation(problem: &'static str) -> Self {
        Self::new(ErrorKind::InvalidOperation, problem)
    }

    #[inline(always)]
    pub const fn invalid_framebuffer_operation(problem: &'static str) -> Self {
        Self::new(ErrorKind::InvalidFramebufferOperation, problem)
    }
}

impl LatchedError {
    #[inline(always)]
    pub fn peek(&self) -> Option<ErrorKind> {
        self.0
    }

    #[inline(always)]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the latched error and clears the register.
    #[inline(always)]
    pub fn take(&mut self) -> Option<ErrorKind> {
        self.0.take()
    }

    /// Same as `take`, but as an error code. Returns `NO_ERROR` when nothing is latched.
    pub fn get_error(&mut self) -> GLenum {
        self.take()
            .map(ErrorKind::gl_code)
            .unwrap_or(gl::NO_ERROR)
    }
}

impl ErrorSink for LatchedError {
    fn record(&mut self, error: &ValidationError) {
        match self.0 {
            Some(latched) => trace!("dropping `{error}`, `{latched}` is still latched"),
            None => self.0 = Some(error.kind),
        }
    }
}

impl ErrorSink for Vec<ValidationError> {
    #[inline(always)]
    fn record(&mut self, error: &ValidationError) {
        self.push(*error);
    }
}

/// Hands the error of a rejected call to the sink.
pub(crate) fn report<T>(
    operation: &str,
    errors: &mut impl ErrorSink,
    result: Result<T, ValidationError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!("{operation} rejected: {err}");
            errors.record(&err);
            None
        }
    }
}
