//! Internal format table and the classification predicates validation is written against.

use crate::{
    config::Capabilities,
    gl::{self, GLenum},
};

/// How the components of a format are interpreted when read.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ComponentType {
    UnsignedNormalized,
    SignedNormalized,
    UnsignedInt,
    SignedInt,
    Float,
    /// Stencil-only formats carry no color or depth components.
    Stencil,
}

/// Condition under which a format, or one of its uses, is available.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Availability {
    Never,
    /// Available from the given client version on.
    Core(u32),
    /// Available when any of the listed capabilities is present.
    Extension(Capabilities),
    /// Available from the given client version on, or earlier with any of the capabilities.
    CoreOr(u32, Capabilities),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct InternalFormatInfo {
    pub format: GLenum,
    pub sized: bool,
    pub component_type: ComponentType,
    pub depth_bits: u8,
    pub stencil_bits: u8,
    /// When the format is accepted as an internal format at all.
    pub available: Availability,
    /// When the format can be rendered to as a color attachment.
    pub color_renderable: Availability,
}

impl Availability {
    #[inline]
    pub fn is_met(self, client_version: u32, capabilities: Capabilities) -> bool {
        match self {
            Availability::Never => false,
            Availability::Core(version) => client_version >= version,
            Availability::Extension(required) => capabilities.intersects(required),
            Availability::CoreOr(version, required) => {
                client_version >= version || capabilities.intersects(required)
            }
        }
    }
}

const ES2: Availability = Availability::Core(2);
const ES3: Availability = Availability::Core(3);
const HALF_FLOAT_RT: Availability = Availability::Extension(
    Capabilities::COLOR_BUFFER_HALF_FLOAT.union(Capabilities::COLOR_BUFFER_FLOAT),
);
const FLOAT_RT: Availability = Availability::Extension(Capabilities::COLOR_BUFFER_FLOAT);

const fn color(
    format: GLenum,
    sized: bool,
    component_type: ComponentType,
    available: Availability,
    color_renderable: Availability,
) -> InternalFormatInfo {
    InternalFormatInfo {
        format,
        sized,
        component_type,
        depth_bits: 0,
        stencil_bits: 0,
        available,
        color_renderable,
    }
}

const fn depth_stencil(
    format: GLenum,
    sized: bool,
    component_type: ComponentType,
    depth_bits: u8,
    stencil_bits: u8,
    available: Availability,
) -> InternalFormatInfo {
    InternalFormatInfo {
        format,
        sized,
        component_type,
        depth_bits,
        stencil_bits,
        available,
        color_renderable: Availability::Never,
    }
}

use ComponentType::*;

const FORMATS: &[InternalFormatInfo] = &[
    // Unsized
    color(gl::RGBA, false, UnsignedNormalized, ES2, ES2),
    color(gl::RGB, false, UnsignedNormalized, ES2, ES2),
    color(gl::ALPHA, false, UnsignedNormalized, ES2, Availability::Never),
    color(gl::LUMINANCE, false, UnsignedNormalized, ES2, Availability::Never),
    color(gl::LUMINANCE_ALPHA, false, UnsignedNormalized, ES2, Availability::Never),
    depth_stencil(gl::DEPTH_COMPONENT, false, UnsignedNormalized, 16, 0, ES2),
    depth_stencil(
        gl::DEPTH_STENCIL,
        false,
        UnsignedNormalized,
        24,
        8,
        Availability::CoreOr(3, Capabilities::PACKED_DEPTH_STENCIL),
    ),
    // Normalized
    color(gl::RGBA4, true, UnsignedNormalized, ES2, ES2),
    color(gl::RGB5_A1, true, UnsignedNormalized, ES2, ES2),
    color(gl::RGB565, true, UnsignedNormalized, ES2, ES2),
    color(
        gl::RGB8,
        true,
        UnsignedNormalized,
        Availability::CoreOr(3, Capabilities::RGB8_RGBA8),
        Availability::CoreOr(3, Capabilities::RGB8_RGBA8),
    ),
    color(
        gl::RGBA8,
        true,
        UnsignedNormalized,
        Availability::CoreOr(3, Capabilities::RGB8_RGBA8),
        Availability::CoreOr(3, Capabilities::RGB8_RGBA8),
    ),
    color(
        gl::BGRA8_EXT,
        true,
        UnsignedNormalized,
        Availability::Extension(Capabilities::BGRA8_RENDERABLE),
        Availability::Extension(Capabilities::BGRA8_RENDERABLE),
    ),
    color(gl::R8, true, UnsignedNormalized, ES3, ES3),
    color(gl::RG8, true, UnsignedNormalized, ES3, ES3),
    color(gl::RGB10_A2, true, UnsignedNormalized, ES3, ES3),
    color(gl::SRGB8_ALPHA8, true, UnsignedNormalized, ES3, ES3),
    color(gl::R8_SNORM, true, SignedNormalized, ES3, Availability::Never),
    color(gl::RGBA8_SNORM, true, SignedNormalized, ES3, Availability::Never),
    // Unsigned integer
    color(gl::R8UI, true, UnsignedInt, ES3, ES3),
    color(gl::R16UI, true, UnsignedInt, ES3, ES3),
    color(gl::R32UI, true, UnsignedInt, ES3, ES3),
    color(gl::RG8UI, true, UnsignedInt, ES3, ES3),
    color(gl::RG16UI, true, UnsignedInt, ES3, ES3),
    color(gl::RG32UI, true, UnsignedInt, ES3, ES3),
    color(gl::RGBA8UI, true, UnsignedInt, ES3, ES3),
    color(gl::RGBA16UI, true, UnsignedInt, ES3, ES3),
    color(gl::RGBA32UI, true, UnsignedInt, ES3, ES3),
    color(gl::RGB10_A2UI, true, UnsignedInt, ES3, ES3),
    // Signed integer
    color(gl::R8I, true, SignedInt, ES3, ES3),
    color(gl::R16I, true, SignedInt, ES3, ES3),
    color(gl::R32I, true, SignedInt, ES3, ES3),
    color(gl::RG8I, true, SignedInt, ES3, ES3),
    color(gl::RG16I, true, SignedInt, ES3, ES3),
    color(gl::RG32I, true, SignedInt, ES3, ES3),
    color(gl::RGBA8I, true, SignedInt, ES3, ES3),
    color(gl::RGBA16I, true, SignedInt, ES3, ES3),
    color(gl::RGBA32I, true, SignedInt, ES3, ES3),
    // Floating point
    color(
        gl::R16F,
        true,
        Float,
        Availability::CoreOr(3, Capabilities::COLOR_BUFFER_HALF_FLOAT),
        HALF_FLOAT_RT,
    ),
    color(
        gl::RG16F,
        true,
        Float,
        Availability::CoreOr(3, Capabilities::COLOR_BUFFER_HALF_FLOAT),
        HALF_FLOAT_RT,
    ),
    color(
        gl::RGBA16F,
        true,
        Float,
        Availability::CoreOr(3, Capabilities::COLOR_BUFFER_HALF_FLOAT),
        HALF_FLOAT_RT,
    ),
    color(gl::RGB16F, true, Float, ES3, Availability::Never),
    color(
        gl::R32F,
        true,
        Float,
        Availability::CoreOr(3, Capabilities::COLOR_BUFFER_FLOAT),
        FLOAT_RT,
    ),
    color(
        gl::RG32F,
        true,
        Float,
        Availability::CoreOr(3, Capabilities::COLOR_BUFFER_FLOAT),
        FLOAT_RT,
    ),
    color(
        gl::RGBA32F,
        true,
        Float,
        Availability::CoreOr(3, Capabilities::COLOR_BUFFER_FLOAT),
        FLOAT_RT,
    ),
    color(gl::RGB32F, true, Float, ES3, Availability::Never),
    color(gl::R11F_G11F_B10F, true, Float, ES3, FLOAT_RT),
    // Depth and stencil
    depth_stencil(gl::DEPTH_COMPONENT16, true, UnsignedNormalized, 16, 0, ES2),
    depth_stencil(gl::DEPTH_COMPONENT24, true, UnsignedNormalized, 24, 0, ES3),
    depth_stencil(
        gl::DEPTH_COMPONENT32_OES,
        true,
        UnsignedNormalized,
        32,
        0,
        Availability::Extension(Capabilities::DEPTH32),
    ),
    depth_stencil(gl::DEPTH_COMPONENT32F, true, Float, 32, 0, ES3),
    depth_stencil(
        gl::DEPTH24_STENCIL8,
        true,
        UnsignedNormalized,
        24,
        8,
        Availability::CoreOr(3, Capabilities::PACKED_DEPTH_STENCIL),
    ),
    depth_stencil(gl::DEPTH32F_STENCIL8, true, Float, 32, 8, ES3),
    depth_stencil(gl::STENCIL_INDEX8, true, Stencil, 0, 8, ES2),
];

/// Looks up a format in the table regardless of whether the current device supports it.
pub fn internal_format_info(format: GLenum) -> Option<&'static InternalFormatInfo> {
    FORMATS.iter().find(|info| info.format == format)
}

#[inline]
fn available_info(
    format: GLenum,
    client_version: u32,
    capabilities: Capabilities,
) -> Option<&'static InternalFormatInfo> {
    internal_format_info(format).filter(|info| info.available.is_met(client_version, capabilities))
}

#[inline]
fn component_type(format: GLenum) -> Option<ComponentType> {
    internal_format_info(format).map(|info| info.component_type)
}

/// `true` if the format is a legal internal format for this client version and capabilities.
pub fn is_valid_internal_format(
    format: GLenum,
    client_version: u32,
    capabilities: Capabilities,
) -> bool {
    available_info(format, client_version, capabilities).is_some()
}

pub fn is_sized_internal_format(format: GLenum, _client_version: u32) -> bool {
    internal_format_info(format)
        .map(|info| info.sized)
        .unwrap_or(false)
}

pub fn is_integer_format(format: GLenum, client_version: u32) -> bool {
    is_unsigned_integer_format(format, client_version)
        || is_signed_integer_format(format, client_version)
}

pub fn is_unsigned_integer_format(format: GLenum, _client_version: u32) -> bool {
    component_type(format) == Some(ComponentType::UnsignedInt)
}

pub fn is_signed_integer_format(format: GLenum, _client_version: u32) -> bool {
    component_type(format) == Some(ComponentType::SignedInt)
}

/// Only unsigned normalized formats count as fixed point for blit compatibility.
pub fn is_normalized_fixed_point_format(format: GLenum, _client_version: u32) -> bool {
    component_type(format) == Some(ComponentType::UnsignedNormalized)
}

pub fn is_color_rendering_supported(
    format: GLenum,
    client_version: u32,
    capabilities: Capabilities,
) -> bool {
    available_info(format, client_version, capabilities)
        .map(|info| info.color_renderable.is_met(client_version, capabilities))
        .unwrap_or(false)
}

pub fn is_depth_rendering_supported(
    format: GLenum,
    client_version: u32,
    capabilities: Capabilities,
) -> bool {
    available_info(format, client_version, capabilities)
        .map(|info| info.depth_bits > 0)
        .unwrap_or(false)
}

pub fn is_stencil_rendering_supported(
    format: GLenum,
    client_version: u32,
    capabilities: Capabilities,
) -> bool {
    available_info(format, client_version, capabilities)
        .map(|info| info.stencil_bits > 0)
        .unwrap_or(false)
}
