use serde::{Deserialize, Serialize};

use crate::{
    encoder::{BlockLayoutRule, ComponentCursor, Strides, COMPONENTS_PER_REGISTER},
    types::VariableType,
};

/// Constant buffer packing of the backend shading language.
///
/// Denser than std140: a member only moves to the next register when it would otherwise straddle
/// one, and the last register of an array, matrix or structure is not padded. The unpacked
/// variant gives every member a register of its own.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HlslRule {
    packed: bool,
}

impl HlslRule {
    #[inline(always)]
    pub const fn packed() -> Self {
        Self { packed: true }
    }

    #[inline(always)]
    pub const fn unpacked() -> Self {
        Self { packed: false }
    }

    #[inline(always)]
    pub fn is_packed(&self) -> bool {
        self.packed
    }
}

impl Default for HlslRule {
    fn default() -> Self {
        Self::packed()
    }
}

impl BlockLayoutRule for HlslRule {
    #[inline]
    fn enter_aggregate_type(&self, cursor: &mut ComponentCursor) {
        cursor.next_register();
    }

    #[inline]
    fn exit_aggregate_type(&self, _cursor: &mut ComponentCursor) {}

    fn block_layout_info(
        &self,
        cursor: &mut ComponentCursor,
        ty: VariableType,
        array_size: u32,
        row_major: bool,
    ) -> Strides {
        let mut strides = Strides::default();

        if !self.packed || ty.is_matrix() || array_size > 0 {
            cursor.next_register();
        }

        if ty.is_matrix() {
            strides.matrix = COMPONENTS_PER_REGISTER;
            if array_size > 0 {
                strides.array = COMPONENTS_PER_REGISTER * ty.matrix_register_count(row_major);
            }
        } else if array_size > 0 {
            strides.array = COMPONENTS_PER_REGISTER;
        } else if self.packed
            && ty.component_count() + cursor.register_offset() > COMPONENTS_PER_REGISTER
        {
            cursor.next_register();
        }

        strides
    }

    fn advance_offset(
        &self,
        cursor: &mut ComponentCursor,
        ty: VariableType,
        array_size: u32,
        row_major: bool,
        strides: Strides,
    ) {
        if array_size > 0 {
            cursor.advance(strides.array * (array_size as usize - 1));
        }

        if ty.is_matrix() {
            let registers = ty.matrix_register_count(row_major);
            cursor.advance(COMPONENTS_PER_REGISTER * (registers - 1));
            cursor.advance(ty.matrix_component_count(row_major));
        } else if self.packed {
            cursor.advance(ty.component_count());
        } else {
            cursor.advance(COMPONENTS_PER_REGISTER);
        }
    }
}
