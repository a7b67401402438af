use bridge_gl::gl::{self, GLenum};
use serde::{Deserialize, Serialize};

/// Type of a basic (non structure) member of an interface block.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariableType {
    Float,
    Vec2,
    Vec3,
    Vec4,
    Int,
    IVec2,
    IVec3,
    IVec4,
    UInt,
    UVec2,
    UVec3,
    UVec4,
    Bool,
    BVec2,
    BVec3,
    BVec4,
    Mat2,
    Mat3,
    Mat4,
    Mat2x3,
    Mat2x4,
    Mat3x2,
    Mat3x4,
    Mat4x2,
    Mat4x3,
}

/// Describes a member of an interface block.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct InterfaceBlockField {
    /// Name of the field.
    pub name: String,
    /// Type of data stored in the field.
    pub ty: FieldType,
    /// Number of array elements. `0` means the field is not an array.
    #[serde(default)]
    pub array_size: u32,
    /// Only meaningful for matrices.
    #[serde(default)]
    pub row_major: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum FieldType {
    Basic(VariableType),
    Struct(Vec<InterfaceBlockField>),
}

/// Placement of a single block member.
#[derive(Debug, Default, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BlockMemberInfo {
    /// Byte offset from the start of the block.
    pub offset: usize,
    /// Bytes between consecutive array elements. `0` when not an array.
    pub array_stride: usize,
    /// Bytes between consecutive matrix columns (or rows when row major). `0` when not a
    /// matrix.
    pub matrix_stride: usize,
    pub is_row_major: bool,
}

impl VariableType {
    /// Number of columns. Vectors and scalars have a single column.
    pub fn columns(self) -> usize {
        match self {
            VariableType::Mat2 | VariableType::Mat2x3 | VariableType::Mat2x4 => 2,
            VariableType::Mat3 | VariableType::Mat3x2 | VariableType::Mat3x4 => 3,
            VariableType::Mat4 | VariableType::Mat4x2 | VariableType::Mat4x3 => 4,
            _ => 1,
        }
    }

    /// Number of rows. For vectors this is the number of components.
    pub fn rows(self) -> usize {
        match self {
            VariableType::Float | VariableType::Int | VariableType::UInt | VariableType::Bool => 1,
            VariableType::Vec2
            | VariableType::IVec2
            | VariableType::UVec2
            | VariableType::BVec2
            | VariableType::Mat2
            | VariableType::Mat3x2
            | VariableType::Mat4x2 => 2,
            VariableType::Vec3
            | VariableType::IVec3
            | VariableType::UVec3
            | VariableType::BVec3
            | VariableType::Mat3
            | VariableType::Mat2x3
            | VariableType::Mat4x3 => 3,
            VariableType::Vec4
            | VariableType::IVec4
            | VariableType::UVec4
            | VariableType::BVec4
            | VariableType::Mat4
            | VariableType::Mat2x4
            | VariableType::Mat3x4 => 4,
        }
    }

    #[inline(always)]
    pub fn component_count(self) -> usize {
        self.rows() * self.columns()
    }

    #[inline(always)]
    pub fn is_matrix(self) -> bool {
        self.columns() > 1
    }

    /// Registers a matrix occupies: one per column, or one per row when row major.
    #[inline(always)]
    pub fn matrix_register_count(self, row_major: bool) -> usize {
        if row_major {
            self.rows()
        } else {
            self.columns()
        }
    }

    /// Components used in each of the registers returned by `matrix_register_count`.
    #[inline(always)]
    pub fn matrix_component_count(self, row_major: bool) -> usize {
        if row_major {
            self.columns()
        } else {
            self.rows()
        }
    }

    pub fn from_gl(ty: GLenum) -> Option<Self> {
        Some(match ty {
            gl::FLOAT => VariableType::Float,
            gl::FLOAT_VEC2 => VariableType::Vec2,
            gl::FLOAT_VEC3 => VariableType::Vec3,
            gl::FLOAT_VEC4 => VariableType::Vec4,
            gl::INT => VariableType::Int,
            gl::INT_VEC2 => VariableType::IVec2,
            gl::INT_VEC3 => VariableType::IVec3,
            gl::INT_VEC4 => VariableType::IVec4,
            gl::UNSIGNED_INT => VariableType::UInt,
            gl::UNSIGNED_INT_VEC2 => VariableType::UVec2,
            gl::UNSIGNED_INT_VEC3 => VariableType::UVec3,
            gl::UNSIGNED_INT_VEC4 => VariableType::UVec4,
            gl::BOOL => VariableType::Bool,
            gl::BOOL_VEC2 => VariableType::BVec2,
            gl::BOOL_VEC3 => VariableType::BVec3,
            gl::BOOL_VEC4 => VariableType::BVec4,
            gl::FLOAT_MAT2 => VariableType::Mat2,
            gl::FLOAT_MAT3 => VariableType::Mat3,
            gl::FLOAT_MAT4 => VariableType::Mat4,
            gl::FLOAT_MAT2X3 => VariableType::Mat2x3,
            gl::FLOAT_MAT2X4 => VariableType::Mat2x4,
            gl::FLOAT_MAT3X2 => VariableType::Mat3x2,
            gl::FLOAT_MAT3X4 => VariableType::Mat3x4,
            gl::FLOAT_MAT4X2 => VariableType::Mat4x2,
            gl::FLOAT_MAT4X3 => VariableType::Mat4x3,
            _ => return None,
        })
    }

    pub fn to_gl(self) -> GLenum {
        match self {
            VariableType::Float => gl::FLOAT,
            VariableType::Vec2 => gl::FLOAT_VEC2,
            VariableType::Vec3 => gl::FLOAT_VEC3,
            VariableType::Vec4 => gl::FLOAT_VEC4,
            VariableType::Int => gl::INT,
            VariableType::IVec2 => gl::INT_VEC2,
            VariableType::IVec3 => gl::INT_VEC3,
            VariableType::IVec4 => gl::INT_VEC4,
            VariableType::UInt => gl::UNSIGNED_INT,
            VariableType::UVec2 => gl::UNSIGNED_INT_VEC2,
            VariableType::UVec3 => gl::UNSIGNED_INT_VEC3,
            VariableType::UVec4 => gl::UNSIGNED_INT_VEC4,
            VariableType::Bool => gl::BOOL,
            VariableType::BVec2 => gl::BOOL_VEC2,
            VariableType::BVec3 => gl::BOOL_VEC3,
            VariableType::BVec4 => gl::BOOL_VEC4,
            VariableType::Mat2 => gl::FLOAT_MAT2,
            VariableType::Mat3 => gl::FLOAT_MAT3,
            VariableType::Mat4 => gl::FLOAT_MAT4,
            VariableType::Mat2x3 => gl::FLOAT_MAT2X3,
            VariableType::Mat2x4 => gl::FLOAT_MAT2X4,
            VariableType::Mat3x2 => gl::FLOAT_MAT3X2,
            VariableType::Mat3x4 => gl::FLOAT_MAT3X4,
            VariableType::Mat4x2 => gl::FLOAT_MAT4X2,
            VariableType::Mat4x3 => gl::FLOAT_MAT4X3,
        }
    }
}

impl InterfaceBlockField {
    pub fn new(name: impl Into<String>, ty: VariableType) -> Self {
        Self {
            name: name.into(),
            ty: FieldType::Basic(ty),
            array_size: 0,
            row_major: false,
        }
    }

    pub fn structure(name: impl Into<String>, fields: Vec<InterfaceBlockField>) -> Self {
        Self {
            name: name.into(),
            ty: FieldType::Struct(fields),
            array_size: 0,
            row_major: false,
        }
    }

    #[inline]
    pub fn array(mut self, array_size: u32) -> Self {
        self.array_size = array_size;
        self
    }

    #[inline]
    pub fn row_major(mut self) -> Self {
        self.row_major = true;
        self
    }

    #[inline(always)]
    pub fn is_array(&self) -> bool {
        self.array_size > 0
    }

    #[inline(always)]
    pub fn is_struct(&self) -> bool {
        matches!(self.ty, FieldType::Struct(_))
    }
}
