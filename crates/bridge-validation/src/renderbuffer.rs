use bridge_gl::gl::{self, GLenum, GLsizei};
use serde::{Deserialize, Serialize};

use crate::{
    context::ValidationContext,
    error::{report, ErrorSink, ValidationError},
};

/// Which entry point a renderbuffer allocation came through.
#[derive(Debug, Default, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RenderbufferEntryPoint {
    /// `glRenderbufferStorage` and `glRenderbufferStorageMultisample`. Samples are limited by the
    /// per-format ceiling.
    #[default]
    Core,
    /// `glRenderbufferStorageMultisampleANGLE`. Samples are limited by the device wide ceiling.
    Extension,
}

/// Arguments of a renderbuffer storage call.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RenderbufferStorage {
    pub target: GLenum,
    pub samples: GLsizei,
    pub internal_format: GLenum,
    pub width: GLsizei,
    pub height: GLsizei,
    #[serde(default)]
    pub entry_point: RenderbufferEntryPoint,
}

impl RenderbufferStorage {
    /// Single sampled storage on the renderbuffer target.
    #[inline]
    pub fn new(internal_format: GLenum, width: GLsizei, height: GLsizei) -> Self {
        Self {
            target: gl::RENDERBUFFER,
            samples: 0,
            internal_format,
            width,
            height,
            entry_point: RenderbufferEntryPoint::Core,
        }
    }

    #[inline]
    pub fn samples(mut self, samples: GLsizei) -> Self {
        self.samples = samples;
        self
    }

    #[inline]
    pub fn target(mut self, target: GLenum) -> Self {
        self.target = target;
        self
    }

    #[inline]
    pub fn entry_point(mut self, entry_point: RenderbufferEntryPoint) -> Self {
        self.entry_point = entry_point;
        self
    }
}

/// Checks a renderbuffer storage call against the context.
///
/// Ordering is important.
pub fn check_renderbuffer_storage(
    ctx: &impl ValidationContext,
    params: &RenderbufferStorage,
) -> Result<(), ValidationError> {
    let RenderbufferStorage {
        target,
        samples,
        internal_format,
        width,
        height,
        entry_point,
    } = *params;

    if target != gl::RENDERBUFFER {
        return Err(ValidationError::invalid_enum(
            "`target` must be `RENDERBUFFER`",
        ));
    }

    if width < 0 || height < 0 || samples < 0 {
        return Err(ValidationError::invalid_value(
            "`width`, `height` and `samples` must not be negative",
        ));
    }

    if !ctx.is_valid_internal_format(internal_format) {
        return Err(ValidationError::invalid_enum(
            "`internal_format` is not a known internal format",
        ));
    }

    // The multisample extension only lists sized formats, and the core API requires them.
    if !ctx.is_sized_format(internal_format) {
        return Err(ValidationError::invalid_enum(
            "`internal_format` must be a sized internal format",
        ));
    }

    if ctx.is_integer_format(internal_format) && samples > 0 {
        return Err(ValidationError::invalid_operation(
            "integer formats cannot be multisampled",
        ));
    }

    if !ctx.supports_color_rendering(internal_format)
        && !ctx.supports_depth_rendering(internal_format)
        && !ctx.supports_stencil_rendering(internal_format)
    {
        return Err(ValidationError::invalid_enum(
            "`internal_format` is not color, depth or stencil renderable",
        ));
    }

    if width.max(height) > ctx.maximum_renderbuffer_dimension() {
        return Err(ValidationError::invalid_value(
            "`width` or `height` exceeds the maximum renderbuffer size",
        ));
    }

    let max_samples = match entry_point {
        RenderbufferEntryPoint::Extension => ctx.max_supported_samples(),
        RenderbufferEntryPoint::Core => ctx.max_supported_format_samples(internal_format),
    };
    if samples > max_samples {
        return Err(ValidationError::invalid_value(
            "`samples` exceeds the maximum sample count",
        ));
    }

    if ctx.bound_renderbuffer_handle() == 0 {
        return Err(ValidationError::invalid_operation(
            "no renderbuffer is bound",
        ));
    }

    Ok(())
}

/// Validates a renderbuffer storage call, recording the error of a rejected call in `errors`.
pub fn validate_renderbuffer_storage_parameters(
    ctx: &impl ValidationContext,
    errors: &mut impl ErrorSink,
    params: &RenderbufferStorage,
) -> bool {
    report(
        "renderbuffer storage",
        errors,
        check_renderbuffer_storage(ctx, params),
    )
    .is_some()
}
