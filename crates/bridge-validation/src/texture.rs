use bridge_gl::gl::{self, GLenum, GLint};
use bridge_log::warn;

use crate::{
    context::ValidationContext,
    error::{report, ErrorSink, ValidationError},
};

/// How an accepted texture parameter is handled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TexParamSupport {
    Supported,
    /// The name is legal but setting it has no effect yet.
    Unimplemented,
}

/// Checks a texture parameter and its value.
///
/// Version gated names are rejected before their value is looked at.
pub fn check_tex_param(
    ctx: &impl ValidationContext,
    pname: GLenum,
    param: GLint,
) -> Result<TexParamSupport, ValidationError> {
    if requires_client_version_3(pname) && ctx.client_version() < 3 {
        return Err(ValidationError::invalid_enum(
            "`pname` requires client version 3",
        ));
    }

    let value = GLenum::try_from(param).ok();
    let supported = |legal: bool, problem: &'static str| {
        if legal {
            Ok(TexParamSupport::Supported)
        } else {
            Err(ValidationError::invalid_enum(problem))
        }
    };

    match pname {
        gl::TEXTURE_WRAP_S | gl::TEXTURE_WRAP_T | gl::TEXTURE_WRAP_R => supported(
            matches!(
                value,
                Some(gl::REPEAT | gl::CLAMP_TO_EDGE | gl::MIRRORED_REPEAT)
            ),
            "not a wrap mode",
        ),
        gl::TEXTURE_MIN_FILTER => supported(
            matches!(
                value,
                Some(
                    gl::NEAREST
                        | gl::LINEAR
                        | gl::NEAREST_MIPMAP_NEAREST
                        | gl::LINEAR_MIPMAP_NEAREST
                        | gl::NEAREST_MIPMAP_LINEAR
                        | gl::LINEAR_MIPMAP_LINEAR
                )
            ),
            "not a minification filter",
        ),
        gl::TEXTURE_MAG_FILTER => supported(
            matches!(value, Some(gl::NEAREST | gl::LINEAR)),
            "not a magnification filter",
        ),
        gl::TEXTURE_USAGE_ANGLE => supported(
            matches!(value, Some(gl::NONE | gl::FRAMEBUFFER_ATTACHMENT_ANGLE)),
            "not a texture usage",
        ),
        gl::TEXTURE_MAX_ANISOTROPY_EXT => {
            if !ctx.supports_anisotropic_filtering() {
                return Err(ValidationError::invalid_enum(
                    "anisotropic filtering is not supported",
                ));
            }

            // Float values are truncated before they get here
            if param < 1 {
                return Err(ValidationError::invalid_value(
                    "maximum anisotropy must be at least 1",
                ));
            }

            Ok(TexParamSupport::Supported)
        }
        gl::TEXTURE_MIN_LOD | gl::TEXTURE_MAX_LOD => Ok(TexParamSupport::Supported),
        gl::TEXTURE_COMPARE_MODE => supported(
            matches!(value, Some(gl::NONE | gl::COMPARE_REF_TO_TEXTURE)),
            "not a compare mode",
        ),
        gl::TEXTURE_COMPARE_FUNC => supported(
            matches!(
                value,
                Some(
                    gl::LEQUAL
                        | gl::GEQUAL
                        | gl::LESS
                        | gl::GREATER
                        | gl::EQUAL
                        | gl::NOTEQUAL
                        | gl::ALWAYS
                        | gl::NEVER
                )
            ),
            "not a compare function",
        ),
        gl::TEXTURE_SWIZZLE_R
        | gl::TEXTURE_SWIZZLE_G
        | gl::TEXTURE_SWIZZLE_B
        | gl::TEXTURE_SWIZZLE_A
        | gl::TEXTURE_BASE_LEVEL
        | gl::TEXTURE_MAX_LEVEL => {
            warn!("texture parameter {pname:#06x} is accepted but not implemented");
            Ok(TexParamSupport::Unimplemented)
        }
        _ => Err(ValidationError::invalid_enum(
            "`pname` is not a texture parameter",
        )),
    }
}

/// Validates a texture parameter and its value, recording the error of a rejected call in
/// `errors`.
pub fn validate_tex_param_parameters(
    ctx: &impl ValidationContext,
    errors: &mut impl ErrorSink,
    pname: GLenum,
    param: GLint,
) -> bool {
    report("texture parameter", errors, check_tex_param(ctx, pname, param)).is_some()
}

/// Checks that `pname` can be set on a sampler object.
pub fn check_sampler_object_parameter(pname: GLenum) -> Result<(), ValidationError> {
    match pname {
        gl::TEXTURE_MIN_FILTER
        | gl::TEXTURE_MAG_FILTER
        | gl::TEXTURE_WRAP_S
        | gl::TEXTURE_WRAP_T
        | gl::TEXTURE_WRAP_R
        | gl::TEXTURE_MIN_LOD
        | gl::TEXTURE_MAX_LOD
        | gl::TEXTURE_COMPARE_MODE
        | gl::TEXTURE_COMPARE_FUNC => Ok(()),
        _ => Err(ValidationError::invalid_enum(
            "`pname` is not a sampler parameter",
        )),
    }
}

/// Validates a sampler parameter name, recording the error of a rejected call in `errors`.
pub fn validate_sampler_object_parameter(errors: &mut impl ErrorSink, pname: GLenum) -> bool {
    report(
        "sampler parameter",
        errors,
        check_sampler_object_parameter(pname),
    )
    .is_some()
}

/// Validates a sampler parameter name and then its value with the texture parameter rules.
pub fn validate_sampler_parameter(
    ctx: &impl ValidationContext,
    errors: &mut impl ErrorSink,
    pname: GLenum,
    param: GLint,
) -> bool {
    let result = check_sampler_object_parameter(pname)
        .and_then(|_| check_tex_param(ctx, pname, param).map(|_| ()));
    report("sampler parameter", errors, result).is_some()
}

#[inline]
fn requires_client_version_3(pname: GLenum) -> bool {
    matches!(
        pname,
        gl::TEXTURE_WRAP_R
            | gl::TEXTURE_SWIZZLE_R
            | gl::TEXTURE_SWIZZLE_G
            | gl::TEXTURE_SWIZZLE_B
            | gl::TEXTURE_SWIZZLE_A
            | gl::TEXTURE_BASE_LEVEL
            | gl::TEXTURE_MAX_LEVEL
            | gl::TEXTURE_COMPARE_MODE
            | gl::TEXTURE_COMPARE_FUNC
            | gl::TEXTURE_MIN_LOD
            | gl::TEXTURE_MAX_LOD
    )
}
