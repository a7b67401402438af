use bridge_gl::gl::{self, GLenum};
use static_assertions::const_assert_eq;

use crate::error::{report, ErrorSink, ValidationError};

// The extension token aliases the core one, so a single match arm serves both without a version
// check.
const_assert_eq!(
    gl::VERTEX_ATTRIB_ARRAY_DIVISOR,
    gl::VERTEX_ATTRIB_ARRAY_DIVISOR_ANGLE
);

/// Checks the `pname` of a vertex attribute query.
pub fn check_get_vertex_attrib(pname: GLenum, client_version: u32) -> Result<(), ValidationError> {
    match pname {
        gl::VERTEX_ATTRIB_ARRAY_ENABLED
        | gl::VERTEX_ATTRIB_ARRAY_SIZE
        | gl::VERTEX_ATTRIB_ARRAY_STRIDE
        | gl::VERTEX_ATTRIB_ARRAY_TYPE
        | gl::VERTEX_ATTRIB_ARRAY_NORMALIZED
        | gl::VERTEX_ATTRIB_ARRAY_BUFFER_BINDING
        | gl::CURRENT_VERTEX_ATTRIB
        | gl::VERTEX_ATTRIB_ARRAY_DIVISOR => Ok(()),
        gl::VERTEX_ATTRIB_ARRAY_INTEGER if client_version >= 3 => Ok(()),
        gl::VERTEX_ATTRIB_ARRAY_INTEGER => Err(ValidationError::invalid_enum(
            "`VERTEX_ATTRIB_ARRAY_INTEGER` requires client version 3",
        )),
        _ => Err(ValidationError::invalid_enum(
            "`pname` is not a vertex attribute parameter",
        )),
    }
}

/// Validates the `pname` of a vertex attribute query, recording the error of a rejected call in
/// `errors`.
pub fn validate_get_vertex_attrib_parameters(
    errors: &mut impl ErrorSink,
    pname: GLenum,
    client_version: u32,
) -> bool {
    report(
        "vertex attribute query",
        errors,
        check_get_vertex_attrib(pname, client_version),
    )
    .is_some()
}
