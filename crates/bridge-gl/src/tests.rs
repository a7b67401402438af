use crate::{
    config::{Capabilities, ConfigError, DeviceConfig},
    error::ErrorKind,
    format::*,
    gl,
};

#[test]
fn error_codes_round_trip() {
    for kind in [
        ErrorKind::InvalidEnum,
        ErrorKind::InvalidValue,
        ErrorKind::InvalidOperation,
        ErrorKind::InvalidFramebufferOperation,
    ] {
        assert_eq!(ErrorKind::from_gl_code(kind.gl_code()), Some(kind));
    }
    assert_eq!(ErrorKind::from_gl_code(gl::NO_ERROR), None);
}

#[test]
fn es3_formats_are_unknown_to_es2() {
    let caps = Capabilities::empty();
    assert!(is_valid_internal_format(gl::RGBA8, 3, caps));
    assert!(!is_valid_internal_format(gl::RGBA8, 2, caps));
    assert!(is_valid_internal_format(
        gl::RGBA8,
        2,
        Capabilities::RGB8_RGBA8
    ));
    assert!(!is_valid_internal_format(gl::R32UI, 2, caps));
    assert!(is_valid_internal_format(gl::RGBA4, 2, caps));
    assert!(!is_valid_internal_format(0xDEAD, 3, caps));
}

#[test]
fn sized_formats() {
    assert!(is_sized_internal_format(gl::RGBA8, 3));
    assert!(is_sized_internal_format(gl::DEPTH_COMPONENT16, 2));
    assert!(!is_sized_internal_format(gl::RGBA, 3));
    assert!(!is_sized_internal_format(gl::DEPTH_STENCIL, 3));
    assert!(!is_sized_internal_format(0xDEAD, 3));
}

#[test]
fn component_classification() {
    assert!(is_integer_format(gl::RGBA8UI, 3));
    assert!(is_integer_format(gl::R32I, 3));
    assert!(!is_integer_format(gl::RGBA8, 3));
    assert!(!is_integer_format(gl::STENCIL_INDEX8, 3));

    assert!(is_unsigned_integer_format(gl::RGB10_A2UI, 3));
    assert!(!is_unsigned_integer_format(gl::RGBA8I, 3));
    assert!(is_signed_integer_format(gl::RGBA8I, 3));

    assert!(is_normalized_fixed_point_format(gl::SRGB8_ALPHA8, 3));
    assert!(!is_normalized_fixed_point_format(gl::RGBA8_SNORM, 3));
    assert!(!is_normalized_fixed_point_format(gl::RGBA16F, 3));
}

#[test]
fn rendering_support() {
    let none = Capabilities::empty();
    assert!(is_color_rendering_supported(gl::RGBA8, 3, none));
    assert!(!is_color_rendering_supported(gl::RGBA8_SNORM, 3, none));
    assert!(!is_color_rendering_supported(gl::RGBA32F, 3, none));
    assert!(is_color_rendering_supported(
        gl::RGBA32F,
        3,
        Capabilities::COLOR_BUFFER_FLOAT
    ));
    assert!(is_color_rendering_supported(
        gl::RGBA16F,
        3,
        Capabilities::COLOR_BUFFER_FLOAT
    ));
    assert!(!is_color_rendering_supported(gl::DEPTH_COMPONENT16, 3, none));

    assert!(is_depth_rendering_supported(gl::DEPTH24_STENCIL8, 3, none));
    assert!(is_stencil_rendering_supported(gl::DEPTH24_STENCIL8, 3, none));
    assert!(!is_depth_rendering_supported(gl::STENCIL_INDEX8, 3, none));
    assert!(is_stencil_rendering_supported(gl::STENCIL_INDEX8, 2, none));
    assert!(!is_depth_rendering_supported(gl::DEPTH24_STENCIL8, 2, none));
}

#[test]
fn format_sample_ceilings() {
    let mut config = DeviceConfig::default();
    config.limits.max_samples = 8;
    config.limits.format_samples.insert(gl::RGBA16F, 2);

    assert_eq!(config.max_format_samples(gl::RGBA8), 8);
    assert_eq!(config.max_format_samples(gl::RGBA16F), 2);
    assert_eq!(config.max_format_samples(gl::RGBA8UI), 0);
    assert_eq!(config.max_format_samples(gl::RGBA8_SNORM), 0);
    assert_eq!(config.max_format_samples(gl::DEPTH_COMPONENT24), 8);
}

#[test]
fn device_config_from_ron() {
    let config = DeviceConfig::from_ron_str(
        r#"(
            client_version: 2,
            capabilities: "TEXTURE_FILTER_ANISOTROPIC | RGB8_RGBA8",
            limits: (
                max_renderbuffer_size: 4096,
                max_samples: 2,
            ),
        )"#,
    )
    .unwrap();

    assert_eq!(config.client_version, 2);
    assert!(config.supports(Capabilities::TEXTURE_FILTER_ANISOTROPIC));
    assert!(config.supports(Capabilities::RGB8_RGBA8));
    assert!(!config.supports(Capabilities::COLOR_BUFFER_FLOAT));
    assert_eq!(config.limits.max_renderbuffer_size, 4096);
    assert_eq!(config.limits.max_samples, 2);
    // Unlisted fields fall back to their defaults
    assert_eq!(config.limits.max_draw_buffers, 4);
    assert!(config.limits.format_samples.is_empty());
}

#[test]
fn empty_device_config_is_default() {
    let config = DeviceConfig::from_ron_str("()").unwrap();
    assert_eq!(config, DeviceConfig::default());
}

#[test]
fn malformed_device_config() {
    assert!(matches!(
        DeviceConfig::from_ron_str("(client_version: \"three\")"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        DeviceConfig::load("./does/not/exist.ron"),
        Err(ConfigError::Io(_))
    ));
}
