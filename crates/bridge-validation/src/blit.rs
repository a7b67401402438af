use bridge_gl::gl::{self, GLbitfield, GLenum, GLint};
use bridge_log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    clip::{clip_blit_rectangles, ClippedBlit},
    context::{Attachment, AttachmentKind, FramebufferView, ValidationContext},
    error::{report, ErrorSink, ValidationError},
};

/// Which entry point a blit came through.
#[derive(Debug, Default, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BlitEntryPoint {
    /// `glBlitFramebuffer`.
    #[default]
    Core,
    /// `glBlitFramebufferANGLE`. No scaling, no linear filtering, and only whole-buffer depth and
    /// stencil copies.
    Extension,
}

/// Arguments of a framebuffer blit.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BlitFramebuffer {
    pub src_x0: GLint,
    pub src_y0: GLint,
    pub src_x1: GLint,
    pub src_y1: GLint,
    pub dst_x0: GLint,
    pub dst_y0: GLint,
    pub dst_x1: GLint,
    pub dst_y1: GLint,
    pub mask: GLbitfield,
    pub filter: GLenum,
    #[serde(default)]
    pub entry_point: BlitEntryPoint,
}

/// Outcome of an accepted blit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BlitDecision {
    /// The mask is empty. Nothing is copied, and no error is raised.
    Skip,
    Perform(ClippedBlit),
}

const ALL_BUFFER_BITS: GLbitfield =
    gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT | gl::STENCIL_BUFFER_BIT;

impl BlitFramebuffer {
    /// Copy of the same region `[x0, y0, x1, y1]` in both framebuffers.
    pub fn new(region: [GLint; 4], mask: GLbitfield, filter: GLenum) -> Self {
        Self::scaled(region, region, mask, filter)
    }

    pub fn scaled(src: [GLint; 4], dst: [GLint; 4], mask: GLbitfield, filter: GLenum) -> Self {
        let [src_x0, src_y0, src_x1, src_y1] = src;
        let [dst_x0, dst_y0, dst_x1, dst_y1] = dst;
        Self {
            src_x0,
            src_y0,
            src_x1,
            src_y1,
            dst_x0,
            dst_y0,
            dst_x1,
            dst_y1,
            mask,
            filter,
            entry_point: BlitEntryPoint::Core,
        }
    }

    #[inline]
    pub fn entry_point(mut self, entry_point: BlitEntryPoint) -> Self {
        self.entry_point = entry_point;
        self
    }

    #[inline]
    pub fn source(&self) -> [GLint; 4] {
        [self.src_x0, self.src_y0, self.src_x1, self.src_y1]
    }

    #[inline]
    pub fn dest(&self) -> [GLint; 4] {
        [self.dst_x0, self.dst_y0, self.dst_x1, self.dst_y1]
    }

    #[inline]
    fn is_extension(&self) -> bool {
        self.entry_point == BlitEntryPoint::Extension
    }

    #[inline]
    fn is_scaled(&self) -> bool {
        // Widened so extreme corners cannot overflow
        let width = |a: GLint, b: GLint| b as i64 - a as i64;
        width(self.src_x0, self.src_x1) != width(self.dst_x0, self.dst_x1)
            || width(self.src_y0, self.src_y1) != width(self.dst_y0, self.dst_y1)
    }

    #[inline]
    fn same_bounds(&self) -> bool {
        self.source() == self.dest()
    }
}

impl BlitDecision {
    #[inline]
    pub fn is_skip(&self) -> bool {
        matches!(self, BlitDecision::Skip)
    }

    #[inline]
    pub fn clipped(&self) -> Option<&ClippedBlit> {
        match self {
            BlitDecision::Skip => None,
            BlitDecision::Perform(clipped) => Some(clipped),
        }
    }
}

/// Checks a framebuffer blit against the currently bound read and draw framebuffers.
///
/// Ordering is important. The first failed check decides the error.
pub fn check_blit_framebuffer<C: ValidationContext>(
    ctx: &C,
    blit: &BlitFramebuffer,
) -> Result<BlitDecision, ValidationError> {
    let extension = blit.is_extension();

    match blit.filter {
        gl::NEAREST => {}
        gl::LINEAR if !extension => {}
        gl::LINEAR => {
            return Err(ValidationError::invalid_enum(
                "linear filtering is not available through the extension blit",
            ))
        }
        _ => return Err(ValidationError::invalid_enum("`filter` is not a blit filter")),
    }

    if blit.mask & !ALL_BUFFER_BITS != 0 {
        return Err(ValidationError::invalid_value(
            "`mask` contains bits other than color, depth and stencil",
        ));
    }

    if blit.mask == 0 {
        return Ok(BlitDecision::Skip);
    }

    if extension && blit.is_scaled() {
        warn!("scaling and flipping are not supported by the extension blit");
        return Err(ValidationError::invalid_operation(
            "the extension blit cannot scale or flip",
        ));
    }

    if blit.mask & !gl::COLOR_BUFFER_BIT != 0 && blit.filter != gl::NEAREST {
        return Err(ValidationError::invalid_operation(
            "depth and stencil blits must use nearest filtering",
        ));
    }

    if ctx.read_framebuffer_handle() == ctx.draw_framebuffer_handle() {
        if extension {
            warn!("blits with the same source and destination framebuffer are not supported");
        }
        return Err(ValidationError::invalid_operation(
            "the read and draw framebuffers are the same",
        ));
    }

    let (read, draw) = match (ctx.read_framebuffer(), ctx.draw_framebuffer()) {
        (Some(read), Some(draw)) if read.is_complete() && draw.is_complete() => (read, draw),
        _ => {
            return Err(ValidationError::invalid_framebuffer_operation(
                "the read and draw framebuffers must be complete",
            ))
        }
    };

    if draw.samples() != 0 {
        return Err(ValidationError::invalid_operation(
            "the draw framebuffer is multisampled",
        ));
    }

    let clipped = clip_blit_rectangles(
        blit.source(),
        blit.dest(),
        read.read_dimensions(),
        draw.draw_dimensions(),
    )
    .ok_or(ValidationError::invalid_operation(
        "the blit region cannot be clipped against the framebuffers",
    ))?;

    if blit.mask & gl::COLOR_BUFFER_BIT != 0 {
        check_color_blit(ctx, blit, read, draw, &clipped)?;
    }

    if blit.mask & gl::DEPTH_BUFFER_BIT != 0 {
        check_depth_stencil_blit(
            blit,
            read.depth_attachment(),
            draw.depth_attachment(),
            &clipped,
        )?;
    }

    if blit.mask & gl::STENCIL_BUFFER_BIT != 0 {
        if extension && clipped.partial_copy {
            return Err(partial_depth_stencil());
        }
        check_depth_stencil_blit(
            blit,
            read.stencil_attachment(),
            draw.stencil_attachment(),
            &clipped,
        )?;
    }

    Ok(BlitDecision::Perform(clipped))
}

/// Validates a framebuffer blit, recording the error of a rejected call in `errors`.
///
/// Returns `true` only when the blit should be performed. An empty mask returns `false` without
/// recording anything.
pub fn validate_blit_framebuffer_parameters(
    ctx: &impl ValidationContext,
    errors: &mut impl ErrorSink,
    blit: &BlitFramebuffer,
) -> bool {
    matches!(
        report("blit framebuffer", errors, check_blit_framebuffer(ctx, blit)),
        Some(BlitDecision::Perform(_))
    )
}

fn check_color_blit<C: ValidationContext>(
    ctx: &C,
    blit: &BlitFramebuffer,
    read: &C::Framebuffer,
    draw: &C::Framebuffer,
    clipped: &ClippedBlit,
) -> Result<(), ValidationError> {
    let (source, _) = match (read.read_color_attachment(), draw.first_color_attachment()) {
        (Some(source), Some(first)) => (source, first),
        _ => return Ok(()),
    };

    let draw_buffers = ctx.max_draw_buffers();
    for dest in enabled_color_attachments(draw, draw_buffers) {
        check_color_compatibility(ctx, blit, &source, &dest)?;
    }

    if ctx.is_integer_format(source.format) && blit.filter == gl::LINEAR {
        return Err(ValidationError::invalid_operation(
            "integer color buffers cannot be blitted with linear filtering",
        ));
    }

    if blit.is_extension() {
        if !is_blittable_kind(source.kind) {
            return Err(ValidationError::invalid_operation(
                "the read color buffer must be a 2D texture or a renderbuffer",
            ));
        }

        for dest in enabled_color_attachments(draw, draw_buffers) {
            if !is_blittable_kind(dest.kind) {
                return Err(ValidationError::invalid_operation(
                    "draw color buffers must be 2D textures or renderbuffers",
                ));
            }

            if dest.format != source.format {
                return Err(ValidationError::invalid_operation(
                    "draw color buffers must match the format of the read color buffer",
                ));
            }
        }

        if clipped.partial_copy && read.samples() != 0 {
            return Err(ValidationError::invalid_operation(
                "multisampled color blits must cover the whole buffer",
            ));
        }
    }

    Ok(())
}

fn check_color_compatibility(
    ctx: &impl ValidationContext,
    blit: &BlitFramebuffer,
    source: &Attachment,
    dest: &Attachment,
) -> Result<(), ValidationError> {
    let (src, dst) = (source.format, dest.format);

    if ctx.is_normalized_fixed_point_format(src) && !ctx.is_normalized_fixed_point_format(dst) {
        return Err(ValidationError::invalid_operation(
            "normalized color buffers can only be blitted into normalized color buffers",
        ));
    }

    if ctx.is_unsigned_integer_format(src) && !ctx.is_unsigned_integer_format(dst) {
        return Err(ValidationError::invalid_operation(
            "unsigned integer color buffers can only be blitted into unsigned integer color buffers",
        ));
    }

    if ctx.is_signed_integer_format(src) && !ctx.is_signed_integer_format(dst) {
        return Err(ValidationError::invalid_operation(
            "signed integer color buffers can only be blitted into signed integer color buffers",
        ));
    }

    if source.samples > 0 && (src != dst || !blit.same_bounds()) {
        return Err(ValidationError::invalid_operation(
            "resolving a multisampled color buffer requires matching formats and regions",
        ));
    }

    Ok(())
}

fn check_depth_stencil_blit(
    blit: &BlitFramebuffer,
    source: Option<Attachment>,
    dest: Option<Attachment>,
    clipped: &ClippedBlit,
) -> Result<(), ValidationError> {
    let (source, dest) = match (source, dest) {
        (Some(source), Some(dest)) => (source, dest),
        _ => return Ok(()),
    };

    if source.format != dest.format {
        return Err(ValidationError::invalid_operation(
            "depth and stencil buffers must have matching formats",
        ));
    }

    if source.samples > 0 && !blit.same_bounds() {
        return Err(ValidationError::invalid_operation(
            "resolving a multisampled depth or stencil buffer requires matching regions",
        ));
    }

    if blit.is_extension() {
        if clipped.partial_copy {
            return Err(partial_depth_stencil());
        }

        if source.samples != 0 || dest.samples != 0 {
            return Err(ValidationError::invalid_operation(
                "the extension blit cannot copy multisampled depth or stencil buffers",
            ));
        }
    }

    Ok(())
}

fn partial_depth_stencil() -> ValidationError {
    warn!("only whole-buffer depth and stencil blits are supported");
    ValidationError::invalid_operation("depth and stencil blits must cover the whole buffer")
}

/// Color attachments draws are routed to, among the first `draw_buffers` attachment points.
fn enabled_color_attachments(
    framebuffer: &impl FramebufferView,
    draw_buffers: usize,
) -> impl Iterator<Item = Attachment> + '_ {
    (0..draw_buffers)
        .filter(move |i| framebuffer.is_enabled_color_attachment(*i))
        .filter_map(move |i| framebuffer.color_attachment(i))
}

#[inline]
fn is_blittable_kind(kind: AttachmentKind) -> bool {
    matches!(kind, AttachmentKind::Texture2D | AttachmentKind::Renderbuffer)
}
