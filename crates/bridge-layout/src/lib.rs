//! Placement of interface block members in backend constant buffers.
//!
//! A [`BlockLayoutEncoder`](encoder::BlockLayoutEncoder) walks the fields of a block in
//! declaration order and asks a [`BlockLayoutRule`](encoder::BlockLayoutRule) where each one
//! goes. [`Std140Rule`](std140::Std140Rule) implements the standard uniform block layout,
//! [`HlslRule`](hlsl::HlslRule) the backend's own constant buffer packing.

pub mod block;
pub mod encoder;
pub mod hlsl;
pub mod std140;
pub mod types;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::block::{BlockLayout, InterfaceBlock};
    pub use crate::encoder::{
        BlockLayoutEncoder, BlockLayoutKind, BlockLayoutRule, ComponentCursor, Strides,
        BYTES_PER_COMPONENT, COMPONENTS_PER_REGISTER,
    };
    pub use crate::hlsl::HlslRule;
    pub use crate::std140::Std140Rule;
    pub use crate::types::{BlockMemberInfo, FieldType, InterfaceBlockField, VariableType};
}
