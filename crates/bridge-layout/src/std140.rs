use serde::{Deserialize, Serialize};

use crate::{
    encoder::{BlockLayoutRule, ComponentCursor, Strides, COMPONENTS_PER_REGISTER},
    types::VariableType,
};

/// The standard uniform block layout ("std140").
///
/// Every array element and every matrix column (or row) takes a full register. Structures start
/// and end on a register boundary. Single scalars and two component vectors pack tightly, three
/// and four component vectors start on a register.
#[derive(Debug, Default, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Std140Rule;

impl BlockLayoutRule for Std140Rule {
    #[inline]
    fn enter_aggregate_type(&self, cursor: &mut ComponentCursor) {
        cursor.next_register();
    }

    #[inline]
    fn exit_aggregate_type(&self, cursor: &mut ComponentCursor) {
        cursor.next_register();
    }

    fn block_layout_info(
        &self,
        cursor: &mut ComponentCursor,
        ty: VariableType,
        array_size: u32,
        row_major: bool,
    ) -> Strides {
        let mut strides = Strides::default();

        let base_alignment = if ty.is_matrix() {
            strides.matrix = COMPONENTS_PER_REGISTER;
            if array_size > 0 {
                strides.array = COMPONENTS_PER_REGISTER * ty.matrix_register_count(row_major);
            }
            COMPONENTS_PER_REGISTER
        } else if array_size > 0 {
            strides.array = COMPONENTS_PER_REGISTER;
            COMPONENTS_PER_REGISTER
        } else {
            match ty.component_count() {
                3 => COMPONENTS_PER_REGISTER,
                count => count,
            }
        };

        cursor.align(base_alignment);
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
            cursor.advance(strides.array * array_size as usize);
        } else if ty.is_matrix() {
            cursor.advance(COMPONENTS_PER_REGISTER * ty.matrix_register_count(row_major));
        } else {
            cursor.advance(ty.component_count());
        }
    }
}
