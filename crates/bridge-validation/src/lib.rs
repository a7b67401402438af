//! Parameter validation for the source API entry points.
//!
//! Every validator comes in two flavors. `check_*` functions return a `Result` and are what the
//! tests exercise. `validate_*` functions hand the error of a rejected call to an
//! [`ErrorSink`](error::ErrorSink) and return `false`, so an entry point can bail out
//! immediately.
//!
//! Checks run in a fixed order: unknown enums first, then out of range values, then state
//! dependent operations. The first failed check decides which error is raised.

pub mod blit;
pub mod clip;
pub mod context;
pub mod error;
pub mod renderbuffer;
pub mod snapshot;
pub mod texture;
pub mod vertex_attrib;


pub mod prelude {
    pub use crate::blit::{
        check_blit_framebuffer, validate_blit_framebuffer_parameters, BlitDecision,
        BlitEntryPoint, BlitFramebuffer,
    };
    pub use crate::clip::{clip_blit_rectangles, ClippedBlit, Rectangle};
    pub use crate::context::{Attachment, AttachmentKind, FramebufferView, ValidationContext};
    pub use crate::error::{ErrorSink, LatchedError, ValidationError};
    pub use crate::renderbuffer::{
        check_renderbuffer_storage, validate_renderbuffer_storage_parameters,
        RenderbufferEntryPoint, RenderbufferStorage,
    };
    pub use crate::snapshot::{ContextSnapshot, FramebufferSnapshot};
    pub use crate::texture::{
        check_sampler_object_parameter, check_tex_param, validate_sampler_object_parameter,
        validate_sampler_parameter, validate_tex_param_parameters, TexParamSupport,
    };
    pub use crate::vertex_attrib::{
        check_get_vertex_attrib, validate_get_vertex_attrib_parameters,
    };
}
