use bridge_gl::{
    config::{Capabilities, ConfigError, DeviceConfig},
    gl::{self, GLenum, GLuint},
};
use serde::{Deserialize, Serialize};

use crate::context::{Attachment, FramebufferView, ValidationContext};

/// Owned copy of the state validation reads from a context.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContextSnapshot {
    pub device: DeviceConfig,
    /// Bound renderbuffer. `0` if none.
    pub renderbuffer: GLuint,
    pub read_framebuffer: Option<FramebufferSnapshot>,
    pub draw_framebuffer: Option<FramebufferSnapshot>,
}

/// Owned copy of the state of one framebuffer object.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FramebufferSnapshot {
    pub handle: GLuint,
    pub status: GLenum,
    pub color_attachments: Vec<Option<Attachment>>,
    /// Bit `i` routes draws to color attachment `i`.
    pub draw_buffers: u32,
    /// Index of the color attachment reads come from.
    pub read_buffer: usize,
    pub depth: Option<Attachment>,
    pub stencil: Option<Attachment>,
}

impl ContextSnapshot {
    pub fn new(device: DeviceConfig) -> Self {
        Self {
            device,
            ..Default::default()
        }
    }

    pub fn from_ron_str(data: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str::<ContextSnapshot>(data)?)
    }

    #[inline]
    pub fn with_renderbuffer(mut self, handle: GLuint) -> Self {
        self.renderbuffer = handle;
        self
    }

    #[inline]
    pub fn with_read_framebuffer(mut self, framebuffer: FramebufferSnapshot) -> Self {
        self.read_framebuffer = Some(framebuffer);
        self
    }

    #[inline]
    pub fn with_draw_framebuffer(mut self, framebuffer: FramebufferSnapshot) -> Self {
        self.draw_framebuffer = Some(framebuffer);
        self
    }
}

impl FramebufferSnapshot {
    pub fn new(handle: GLuint) -> Self {
        Self {
            handle,
            ..Default::default()
        }
    }

    /// Attaches `attachment` at color attachment point `index`.
    pub fn color(mut self, index: usize, attachment: Attachment) -> Self {
        if self.color_attachments.len() <= index {
            self.color_attachments.resize(index + 1, None);
        }
        self.color_attachments[index] = Some(attachment);
        self
    }

    #[inline]
    pub fn depth(mut self, attachment: Attachment) -> Self {
        self.depth = Some(attachment);
        self
    }

    #[inline]
    pub fn stencil(mut self, attachment: Attachment) -> Self {
        self.stencil = Some(attachment);
        self
    }

    #[inline]
    pub fn draw_buffers(mut self, mask: u32) -> Self {
        self.draw_buffers = mask;
        self
    }

    #[inline]
    pub fn read_buffer(mut self, index: usize) -> Self {
        self.read_buffer = index;
        self
    }

    #[inline]
    pub fn status(mut self, status: GLenum) -> Self {
        self.status = status;
        self
    }
}

impl Default for FramebufferSnapshot {
    fn default() -> Self {
        Self {
            handle: 0,
            status: gl::FRAMEBUFFER_COMPLETE,
            color_attachments: Vec::default(),
            draw_buffers: 1,
            read_buffer: 0,
            depth: None,
            stencil: None,
        }
    }
}

impl FramebufferView for FramebufferSnapshot {
    #[inline]
    fn completeness(&self) -> GLenum {
        self.status
    }

    fn samples(&self) -> i32 {
        // A complete framebuffer has the same sample count on every attachment
        self.color_attachments
            .iter()
            .flatten()
            .chain(self.depth.iter())
            .chain(self.stencil.iter())
            .next()
            .map(|attachment| attachment.samples)
            .unwrap_or(0)
    }

    #[inline]
    fn color_attachment(&self, index: usize) -> Option<Attachment> {
        self.color_attachments.get(index).copied().flatten()
    }

    fn is_enabled_color_attachment(&self, index: usize) -> bool {
        index < u32::BITS as usize
            && self.draw_buffers & (1 << index) != 0
            && self.color_attachment(index).is_some()
    }

    #[inline]
    fn read_color_attachment(&self) -> Option<Attachment> {
        self.color_attachment(self.read_buffer)
    }

    #[inline]
    fn depth_attachment(&self) -> Option<Attachment> {
        self.depth
    }

    #[inline]
    fn stencil_attachment(&self) -> Option<Attachment> {
        self.stencil
    }
}

impl ValidationContext for ContextSnapshot {
    type Framebuffer = FramebufferSnapshot;

    #[inline]
    fn client_version(&self) -> u32 {
        self.device.client_version
    }

    #[inline]
    fn capabilities(&self) -> Capabilities {
        self.device.capabilities
    }

    #[inline]
    fn maximum_renderbuffer_dimension(&self) -> i32 {
        self.device.limits.max_renderbuffer_size
    }

    #[inline]
    fn max_supported_samples(&self) -> i32 {
        self.device.limits.max_samples
    }

    #[inline]
    fn max_supported_format_samples(&self, format: GLenum) -> i32 {
        self.device.max_format_samples(format)
    }

    #[inline]
    fn max_draw_buffers(&self) -> usize {
        self.device
            .limits
            .max_draw_buffers
            .min(gl::IMPLEMENTATION_MAX_DRAW_BUFFERS)
    }

    #[inline]
    fn bound_renderbuffer_handle(&self) -> GLuint {
        self.renderbuffer
    }

    #[inline]
    fn read_framebuffer_handle(&self) -> GLuint {
        self.read_framebuffer.as_ref().map_or(0, |fb| fb.handle)
    }

    #[inline]
    fn draw_framebuffer_handle(&self) -> GLuint {
        self.draw_framebuffer.as_ref().map_or(0, |fb| fb.handle)
    }

    #[inline]
    fn read_framebuffer(&self) -> Option<&FramebufferSnapshot> {
        self.read_framebuffer.as_ref()
    }

    #[inline]
    fn draw_framebuffer(&self) -> Option<&FramebufferSnapshot> {
        self.draw_framebuffer.as_ref()
    }
}
