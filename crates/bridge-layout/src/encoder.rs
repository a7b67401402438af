use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use crate::{
    hlsl::HlslRule,
    std140::Std140Rule,
    types::{BlockMemberInfo, FieldType, InterfaceBlockField, VariableType},
};

pub const BYTES_PER_COMPONENT: usize = 4;
pub const COMPONENTS_PER_REGISTER: usize = 4;

/// Encoding position within a block, counted in 4-byte components. The cursor can only move
/// forward.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentCursor(usize);

/// Strides of a member, in components.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Strides {
    pub array: usize,
    pub matrix: usize,
}

/// Layout rules selectable from a block description.
#[enum_dispatch]
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BlockLayoutKind {
    Std140(Std140Rule),
    Hlsl(HlslRule),
}

/// The four points at which packing rules differ. Traversal of the fields and bookkeeping of the
/// output is shared by every rule and lives in [`BlockLayoutEncoder`].
#[enum_dispatch(BlockLayoutKind)]
pub trait BlockLayoutRule {
    /// Called before the members of a structure (or of one structure array element) are encoded.
    fn enter_aggregate_type(&self, cursor: &mut ComponentCursor);

    /// Called after the members of a structure (or of one structure array element) are encoded.
    fn exit_aggregate_type(&self, cursor: &mut ComponentCursor);

    /// Aligns the cursor for a member of the given type and returns its strides. The offset
    /// recorded for the member is the cursor position after this call.
    fn block_layout_info(
        &self,
        cursor: &mut ComponentCursor,
        ty: VariableType,
        array_size: u32,
        row_major: bool,
    ) -> Strides;

    /// Moves the cursor past a member previously passed to `block_layout_info`.
    fn advance_offset(
        &self,
        cursor: &mut ComponentCursor,
        ty: VariableType,
        array_size: u32,
        row_major: bool,
        strides: Strides,
    );
}

/// Computes the placement of interface block members for a layout rule.
///
/// Records are appended to the output vector in field order, one per basic-typed member.
/// Structures have no record of their own. Their members are recorded once per array element.
pub struct BlockLayoutEncoder<'a, R: BlockLayoutRule> {
    rule: R,
    cursor: ComponentCursor,
    block_info_out: &'a mut Vec<BlockMemberInfo>,
}

impl ComponentCursor {
    #[inline(always)]
    pub fn components(&self) -> usize {
        self.0
    }

    #[inline(always)]
    pub fn bytes(&self) -> usize {
        self.0 * BYTES_PER_COMPONENT
    }

    /// Components already used in the current register.
    #[inline(always)]
    pub fn register_offset(&self) -> usize {
        self.0 % COMPONENTS_PER_REGISTER
    }

    #[inline(always)]
    pub fn is_register_aligned(&self) -> bool {
        self.register_offset() == 0
    }

    /// Rounds up to the start of the next register, unless already at one.
    #[inline(always)]
    pub fn next_register(&mut self) {
        self.align(COMPONENTS_PER_REGISTER);
    }

    /// Rounds up to a multiple of `alignment` components.
    #[inline]
    pub fn align(&mut self, alignment: usize) {
        if alignment > 1 {
            self.0 = self.0.div_ceil(alignment) * alignment;
        }
    }

    #[inline(always)]
    pub fn advance(&mut self, components: usize) {
        self.0 += components;
    }
}

impl<'a, R: BlockLayoutRule> BlockLayoutEncoder<'a, R> {
    pub fn new(rule: R, block_info_out: &'a mut Vec<BlockMemberInfo>) -> Self {
        Self {
            rule,
            cursor: ComponentCursor::default(),
            block_info_out,
        }
    }

    #[inline(always)]
    pub fn rule(&self) -> &R {
        &self.rule
    }

    #[inline(always)]
    pub fn cursor(&self) -> ComponentCursor {
        self.cursor
    }

    /// Size of the block in bytes. Only meaningful once every field has been encoded.
    #[inline(always)]
    pub fn block_size(&self) -> usize {
        self.cursor.bytes()
    }

    pub fn encode_interface_block_fields(&mut self, fields: &[InterfaceBlockField]) {
        for field in fields {
            self.encode_interface_block_field(field);
        }
    }

    pub fn encode_interface_block_field(&mut self, field: &InterfaceBlockField) {
        match &field.ty {
            FieldType::Basic(ty) => {
                self.encode_type(*ty, field.array_size, field.row_major);
            }
            FieldType::Struct(members) => self.encode_struct(members, field.array_size),
        }
    }

    /// Places a single basic-typed member and returns its record.
    pub fn encode_type(
        &mut self,
        ty: VariableType,
        array_size: u32,
        row_major: bool,
    ) -> BlockMemberInfo {
        let strides = self
            .rule
            .block_layout_info(&mut self.cursor, ty, array_size, row_major);

        let info = BlockMemberInfo {
            offset: self.cursor.bytes(),
            array_stride: strides.array * BYTES_PER_COMPONENT,
            matrix_stride: strides.matrix * BYTES_PER_COMPONENT,
            is_row_major: row_major,
        };

        self.block_info_out.push(info);

        self.rule
            .advance_offset(&mut self.cursor, ty, array_size, row_major, strides);

        info
    }

    fn encode_struct(&mut self, members: &[InterfaceBlockField], array_size: u32) {
        for _ in 0..array_size.max(1) {
            self.rule.enter_aggregate_type(&mut self.cursor);
            self.encode_interface_block_fields(members);
            self.rule.exit_aggregate_type(&mut self.cursor);
        }
    }
}

impl Default for BlockLayoutKind {
    #[inline]
    fn default() -> Self {
        Std140Rule.into()
    }
}
