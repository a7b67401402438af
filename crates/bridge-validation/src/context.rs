use bridge_gl::{
    config::Capabilities,
    format,
    gl::{self, GLenum, GLuint},
};
use serde::{Deserialize, Serialize};

/// What a framebuffer attachment point refers to.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttachmentKind {
    Texture2D,
    TextureCubeMap,
    Texture3D,
    Texture2DArray,
    Renderbuffer,
}

/// Description of the image bound to an attachment point.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Attachment {
    pub kind: AttachmentKind,
    /// Format the backend actually allocated.
    pub format: GLenum,
    pub samples: i32,
    pub width: i32,
    pub height: i32,
}

/// Read only view of a framebuffer.
pub trait FramebufferView {
    /// One of the framebuffer status tokens.
    fn completeness(&self) -> GLenum;

    fn samples(&self) -> i32;

    fn color_attachment(&self, index: usize) -> Option<Attachment>;

    /// `true` if there is an attachment at `index` and draws are routed to it.
    fn is_enabled_color_attachment(&self, index: usize) -> bool;

    /// Attachment selected as the read buffer.
    fn read_color_attachment(&self) -> Option<Attachment>;

    fn depth_attachment(&self) -> Option<Attachment>;

    fn stencil_attachment(&self) -> Option<Attachment>;

    #[inline]
    fn is_complete(&self) -> bool {
        self.completeness() == gl::FRAMEBUFFER_COMPLETE
    }

    fn first_color_attachment(&self) -> Option<Attachment> {
        (0..gl::IMPLEMENTATION_MAX_DRAW_BUFFERS).find_map(|i| self.color_attachment(i))
    }

    /// Size of the buffers a blit reads from when this is the read framebuffer.
    fn read_dimensions(&self) -> (i32, i32) {
        extent(
            self.read_color_attachment()
                .or_else(|| self.depth_attachment())
                .or_else(|| self.stencil_attachment()),
        )
    }

    /// Size of the buffers a blit writes to when this is the draw framebuffer.
    fn draw_dimensions(&self) -> (i32, i32) {
        extent(
            self.first_color_attachment()
                .or_else(|| self.depth_attachment())
                .or_else(|| self.stencil_attachment()),
        )
    }
}

/// Everything validation needs to know about the calling context.
///
/// The format predicates default to the internal format table, evaluated against the context's
/// client version and capabilities.
pub trait ValidationContext {
    type Framebuffer: FramebufferView;

    /// Major version of the client API.
    fn client_version(&self) -> u32;

    fn capabilities(&self) -> Capabilities;

    fn maximum_renderbuffer_dimension(&self) -> i32;

    /// Sample ceiling of the multisampled renderbuffer extension.
    fn max_supported_samples(&self) -> i32;

    /// Sample ceiling for a particular format.
    fn max_supported_format_samples(&self, format: GLenum) -> i32;

    /// Number of color attachments that draws can be routed to.
    fn max_draw_buffers(&self) -> usize;

    /// `0` if no renderbuffer is bound.
    fn bound_renderbuffer_handle(&self) -> GLuint;

    fn read_framebuffer_handle(&self) -> GLuint;

    fn draw_framebuffer_handle(&self) -> GLuint;

    fn read_framebuffer(&self) -> Option<&Self::Framebuffer>;

    fn draw_framebuffer(&self) -> Option<&Self::Framebuffer>;

    #[inline]
    fn supports_anisotropic_filtering(&self) -> bool {
        self.capabilities()
            .contains(Capabilities::TEXTURE_FILTER_ANISOTROPIC)
    }

    #[inline]
    fn is_valid_internal_format(&self, format: GLenum) -> bool {
        format::is_valid_internal_format(format, self.client_version(), self.capabilities())
    }

    #[inline]
    fn is_sized_format(&self, format: GLenum) -> bool {
        format::is_sized_internal_format(format, self.client_version())
    }

    #[inline]
    fn is_integer_format(&self, format: GLenum) -> bool {
        format::is_integer_format(format, self.client_version())
    }

    #[inline]
    fn is_unsigned_integer_format(&self, format: GLenum) -> bool {
        format::is_unsigned_integer_format(format, self.client_version())
    }

    #[inline]
    fn is_signed_integer_format(&self, format: GLenum) -> bool {
        format::is_signed_integer_format(format, self.client_version())
    }

    #[inline]
    fn is_normalized_fixed_point_format(&self, format: GLenum) -> bool {
        format::is_normalized_fixed_point_format(format, self.client_version())
    }

    #[inline]
    fn supports_color_rendering(&self, format: GLenum) -> bool {
        format::is_color_rendering_supported(format, self.client_version(), self.capabilities())
    }

    #[inline]
    fn supports_depth_rendering(&self, format: GLenum) -> bool {
        format::is_depth_rendering_supported(format, self.client_version(), self.capabilities())
    }

    #[inline]
    fn supports_stencil_rendering(&self, format: GLenum) -> bool {
        format::is_stencil_rendering_supported(format, self.client_version(), self.capabilities())
    }
}

impl AttachmentKind {
    pub fn to_gl(self) -> GLenum {
        match self {
            AttachmentKind::Texture2D => gl::TEXTURE_2D,
            AttachmentKind::TextureCubeMap => gl::TEXTURE_CUBE_MAP,
            AttachmentKind::Texture3D => gl::TEXTURE_3D,
            AttachmentKind::Texture2DArray => gl::TEXTURE_2D_ARRAY,
            AttachmentKind::Renderbuffer => gl::RENDERBUFFER,
        }
    }
}

impl Attachment {
    #[inline]
    pub fn renderbuffer(format: GLenum, width: i32, height: i32, samples: i32) -> Self {
        Self {
            kind: AttachmentKind::Renderbuffer,
            format,
            samples,
            width,
            height,
        }
    }

    #[inline]
    pub fn texture(kind: AttachmentKind, format: GLenum, width: i32, height: i32) -> Self {
        Self {
            kind,
            format,
            samples: 0,
            width,
            height,
        }
    }
}

#[inline]
fn extent(attachment: Option<Attachment>) -> (i32, i32) {
    attachment
        .map(|attachment| (attachment.width, attachment.height))
        .unwrap_or((0, 0))
}
