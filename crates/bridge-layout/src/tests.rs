use crate::prelude::*;

fn offsets(layout: &BlockLayout) -> Vec<usize> {
    layout.members.iter().map(|m| m.offset).collect()
}

#[test]
fn std140_scalars_and_vectors() {
    let block = InterfaceBlock::new(
        "Block",
        vec![
            InterfaceBlockField::new("a", VariableType::Float),
            InterfaceBlockField::new("b", VariableType::Vec3),
            InterfaceBlockField::new("c", VariableType::Vec2),
            InterfaceBlockField::new("d", VariableType::Float),
            InterfaceBlockField::new("e", VariableType::Mat4),
            InterfaceBlockField::new("f", VariableType::Float).array(3),
            InterfaceBlockField::new("g", VariableType::Vec3),
        ],
    );

    let layout = block.encode();
    assert_eq!(offsets(&layout), vec![0, 16, 32, 40, 48, 112, 160]);
    assert_eq!(layout.size, 172);

    // Matrix
    assert_eq!(layout.members[4].matrix_stride, 16);
    assert_eq!(layout.members[4].array_stride, 0);

    // Arrays of scalars are padded to a full register per element
    assert_eq!(layout.members[5].array_stride, 16);
    assert_eq!(layout.members[5].matrix_stride, 0);

    for member in &layout.members[..4] {
        assert_eq!(member.array_stride, 0);
        assert_eq!(member.matrix_stride, 0);
    }
}

#[test]
fn std140_float_fills_vec3_register() {
    let layout = InterfaceBlock::new(
        "Block",
        vec![
            InterfaceBlockField::new("v", VariableType::Vec3),
            InterfaceBlockField::new("s", VariableType::Float),
        ],
    )
    .encode();

    assert_eq!(offsets(&layout), vec![0, 12]);
    assert_eq!(layout.size, 16);
}

#[test]
fn std140_matrix_arrays() {
    let layout = InterfaceBlock::new(
        "Block",
        vec![
            InterfaceBlockField::new("col", VariableType::Mat2x3).array(2),
            InterfaceBlockField::new("row", VariableType::Mat2x3)
                .array(2)
                .row_major(),
            InterfaceBlockField::new("single", VariableType::Mat3x2).row_major(),
        ],
    )
    .encode();

    // Column major: one register per column
    assert_eq!(layout.members[0].offset, 0);
    assert_eq!(layout.members[0].array_stride, 32);
    assert_eq!(layout.members[0].matrix_stride, 16);
    assert!(!layout.members[0].is_row_major);

    // Row major: one register per row
    assert_eq!(layout.members[1].offset, 64);
    assert_eq!(layout.members[1].array_stride, 48);
    assert_eq!(layout.members[1].matrix_stride, 16);
    assert!(layout.members[1].is_row_major);

    assert_eq!(layout.members[2].offset, 160);
    assert_eq!(layout.members[2].array_stride, 0);
    assert!(layout.members[2].is_row_major);
    assert_eq!(layout.size, 160 + 2 * 16);
}

#[test]
fn std140_structure() {
    let layout = InterfaceBlock::new(
        "Block",
        vec![
            InterfaceBlockField::new("a", VariableType::Float),
            InterfaceBlockField::structure(
                "s",
                vec![
                    InterfaceBlockField::new("x", VariableType::Vec2),
                    InterfaceBlockField::new("y", VariableType::Float),
                ],
            ),
            InterfaceBlockField::new("b", VariableType::Float),
        ],
    )
    .encode();

    // Structures start on a register and have no record of their own
    assert_eq!(offsets(&layout), vec![0, 16, 24, 32]);
    assert_eq!(layout.size, 36);
}

#[test]
fn std140_structure_array() {
    let layout = InterfaceBlock::new(
        "Block",
        vec![
            InterfaceBlockField::structure(
                "s",
                vec![InterfaceBlockField::new("v", VariableType::Float)],
            )
            .array(3),
            InterfaceBlockField::new("t", VariableType::Float),
        ],
    )
    .encode();

    // Every element gets records for its members
    assert_eq!(offsets(&layout), vec![0, 16, 32, 48]);
    assert!(layout.members.iter().all(|m| m.array_stride == 0));
    assert_eq!(layout.size, 52);
}

#[test]
fn std140_register_alignment() {
    let fields = vec![
        InterfaceBlockField::new("a", VariableType::Bool),
        InterfaceBlockField::new("b", VariableType::Mat3),
        InterfaceBlockField::new("c", VariableType::UInt),
        InterfaceBlockField::new("d", VariableType::IVec2).array(5),
        InterfaceBlockField::new("e", VariableType::BVec3),
        InterfaceBlockField::structure(
            "f",
            vec![InterfaceBlockField::new("x", VariableType::Vec3)],
        ),
        InterfaceBlockField::new("g", VariableType::Float),
        InterfaceBlockField::new("h", VariableType::Mat4x2).array(2),
    ];
    let layout = InterfaceBlock::new("Block", fields.clone()).encode();

    // The structure holds a single member, so there is one record per field
    assert_eq!(layout.members.len(), fields.len());

    assert_eq!(layout.members[1].offset % 16, 0);
    assert_eq!(layout.members[3].offset % 16, 0);
    // Structure start and the member following it
    assert_eq!(layout.members[5].offset, 176);
    assert_eq!(layout.members[6].offset, 192);
    assert_eq!(layout.members[7].offset % 16, 0);

    assert_eq!(layout.size, 336);
}

fn consumed_bytes(field: &InterfaceBlockField, info: &BlockMemberInfo) -> usize {
    let ty = match &field.ty {
        FieldType::Basic(ty) => *ty,
        FieldType::Struct(_) => unreachable!("only flat fields are measured"),
    };

    if field.is_array() {
        info.array_stride * field.array_size as usize
    } else if ty.is_matrix() {
        info.matrix_stride * ty.matrix_register_count(field.row_major)
    } else {
        ty.component_count() * BYTES_PER_COMPONENT
    }
}

#[test]
fn std140_members_do_not_overlap() {
    let fields = vec![
        InterfaceBlockField::new("a", VariableType::Float),
        InterfaceBlockField::new("b", VariableType::Vec3),
        InterfaceBlockField::new("c", VariableType::Float),
        InterfaceBlockField::new("d", VariableType::Vec2),
        InterfaceBlockField::new("e", VariableType::Mat3).row_major(),
        InterfaceBlockField::new("f", VariableType::Float).array(2),
        InterfaceBlockField::new("g", VariableType::Mat2x4).array(2),
        InterfaceBlockField::new("h", VariableType::IVec3),
        InterfaceBlockField::new("i", VariableType::UVec4),
        InterfaceBlockField::new("j", VariableType::Bool),
        InterfaceBlockField::new("k", VariableType::Mat4x3).row_major(),
        InterfaceBlockField::new("l", VariableType::BVec2),
    ];
    let layout = InterfaceBlock::new("Block", fields.clone()).encode();
    assert_eq!(layout.members.len(), fields.len());

    for i in 0..fields.len() - 1 {
        let end = layout.members[i].offset + consumed_bytes(&fields[i], &layout.members[i]);
        assert!(
            layout.members[i + 1].offset >= end,
            "`{}` overlaps `{}`",
            fields[i + 1].name,
            fields[i].name
        );
    }

    let last = fields.len() - 1;
    let end = layout.members[last].offset + consumed_bytes(&fields[last], &layout.members[last]);
    assert!(layout.size >= end);
    assert_eq!(layout.size % BYTES_PER_COMPONENT, 0);
}

#[test]
fn block_size_after_trailing_structure() {
    let layout = InterfaceBlock::new(
        "Block",
        vec![InterfaceBlockField::structure(
            "s",
            vec![InterfaceBlockField::new("x", VariableType::Float)],
        )],
    )
    .encode();

    assert_eq!(layout.size, 16);
}

#[test]
fn encoder_appends_to_existing_output() {
    let previous = BlockMemberInfo {
        offset: 1234,
        array_stride: 0,
        matrix_stride: 0,
        is_row_major: false,
    };
    let mut out = vec![previous];

    let mut encoder = BlockLayoutEncoder::new(Std140Rule, &mut out);
    let info = encoder.encode_type(VariableType::Vec4, 0, false);
    encoder.encode_interface_block_field(&InterfaceBlockField::new("b", VariableType::Float));
    assert_eq!(encoder.block_size(), 20);
    assert_eq!(info.offset, 0);

    assert_eq!(out.len(), 3);
    assert_eq!(out[0], previous);
    assert_eq!(out[1], info);
    assert_eq!(out[2].offset, 16);
}

#[test]
fn empty_block() {
    let layout = InterfaceBlock::new("Empty", Vec::default()).encode();
    assert!(layout.members.is_empty());
    assert_eq!(layout.size, 0);
}

#[test]
fn hlsl_packing() {
    let layout = InterfaceBlock::new(
        "Block",
        vec![
            InterfaceBlockField::new("a", VariableType::Float),
            InterfaceBlockField::new("b", VariableType::Vec3),
            InterfaceBlockField::new("c", VariableType::Vec2),
            InterfaceBlockField::new("d", VariableType::Float),
        ],
    )
    .with_layout(BlockLayoutKind::Hlsl(HlslRule::packed()))
    .encode();

    // `b` fits in the remainder of the first register
    assert_eq!(offsets(&layout), vec![0, 4, 16, 24]);
    assert_eq!(layout.size, 28);
}

#[test]
fn hlsl_does_not_pad_last_register() {
    let layout = InterfaceBlock::new(
        "Block",
        vec![
            InterfaceBlockField::new("a", VariableType::Float),
            InterfaceBlockField::new("f", VariableType::Float).array(3),
            InterfaceBlockField::new("z", VariableType::Float),
            InterfaceBlockField::new("m", VariableType::Mat3),
            InterfaceBlockField::new("w", VariableType::Float),
        ],
    )
    .encode_with(HlslRule::packed());

    assert_eq!(offsets(&layout), vec![0, 16, 52, 64, 108]);
    assert_eq!(layout.members[1].array_stride, 16);
    assert_eq!(layout.members[3].matrix_stride, 16);
    assert_eq!(layout.size, 112);
}

#[test]
fn hlsl_unpacked() {
    let layout = InterfaceBlock::new(
        "Block",
        vec![
            InterfaceBlockField::new("a", VariableType::Float),
            InterfaceBlockField::new("b", VariableType::Float),
        ],
    )
    .with_layout(HlslRule::unpacked().into())
    .encode();

    assert_eq!(offsets(&layout), vec![0, 16]);
    assert_eq!(layout.size, 32);
}

#[test]
fn hlsl_structure_is_not_padded_at_end() {
    let layout = InterfaceBlock::new(
        "Block",
        vec![
            InterfaceBlockField::structure(
                "s",
                vec![InterfaceBlockField::new("x", VariableType::Float)],
            )
            .array(2),
            InterfaceBlockField::new("y", VariableType::Float),
        ],
    )
    .encode_with(HlslRule::packed());

    // Second element starts at 16 and uses one component
    assert_eq!(offsets(&layout), vec![0, 16, 20]);
    assert_eq!(layout.size, 24);
}

/// A rule with no alignment at all, to make sure traversal does not assume std140.
struct TightRule;

impl BlockLayoutRule for TightRule {
    fn enter_aggregate_type(&self, _: &mut ComponentCursor) {}

    fn exit_aggregate_type(&self, _: &mut ComponentCursor) {}

    fn block_layout_info(
        &self,
        _: &mut ComponentCursor,
        ty: VariableType,
        array_size: u32,
        row_major: bool,
    ) -> Strides {
        Strides {
            array: if array_size > 0 {
                ty.component_count()
            } else {
                0
            },
            matrix: if ty.is_matrix() {
                ty.matrix_component_count(row_major)
            } else {
                0
            },
        }
    }

    fn advance_offset(
        &self,
        cursor: &mut ComponentCursor,
        ty: VariableType,
        array_size: u32,
        _: bool,
        _: Strides,
    ) {
        cursor.advance(ty.component_count() * (array_size.max(1) as usize));
    }
}

#[test]
fn custom_rule() {
    let layout = InterfaceBlock::new(
        "Block",
        vec![
            InterfaceBlockField::new("a", VariableType::Float),
            InterfaceBlockField::new("b", VariableType::Vec3).array(2),
            InterfaceBlockField::new("c", VariableType::Mat2x3),
        ],
    )
    .encode_with(TightRule);

    assert_eq!(offsets(&layout), vec![0, 4, 28]);
    assert_eq!(layout.members[1].array_stride, 12);
    assert_eq!(layout.members[2].matrix_stride, 12);
    assert_eq!(layout.size, 52);
}

#[test]
fn cursor_only_moves_forward() {
    let mut cursor = ComponentCursor::default();
    cursor.next_register();
    assert_eq!(cursor.components(), 0);

    cursor.advance(1);
    cursor.align(2);
    assert_eq!(cursor.components(), 2);
    cursor.align(1);
    assert_eq!(cursor.components(), 2);
    cursor.next_register();
    assert_eq!(cursor.components(), 4);
    assert!(cursor.is_register_aligned());
    assert_eq!(cursor.bytes(), 16);
}

#[test]
fn variable_types() {
    assert_eq!(VariableType::Mat2x4.columns(), 2);
    assert_eq!(VariableType::Mat2x4.rows(), 4);
    assert_eq!(VariableType::Mat2x4.component_count(), 8);
    assert_eq!(VariableType::Mat2x4.matrix_register_count(false), 2);
    assert_eq!(VariableType::Mat2x4.matrix_register_count(true), 4);
    assert!(!VariableType::Vec4.is_matrix());
    assert_eq!(
        VariableType::from_gl(VariableType::UVec3.to_gl()),
        Some(VariableType::UVec3)
    );
    assert_eq!(VariableType::from_gl(0), None);
}

#[test]
fn block_from_ron() {
    let block = ron::from_str::<InterfaceBlock>(
        r#"(
            name: "Camera",
            fields: [
                (name: "view", ty: Basic(Mat4)),
                (name: "position", ty: Basic(Vec3)),
                (
                    name: "lights",
                    ty: Struct([(name: "color", ty: Basic(Vec4))]),
                    array_size: 2,
                ),
            ],
        )"#,
    )
    .unwrap();

    assert_eq!(block.layout, BlockLayoutKind::Std140(Std140Rule));

    let layout = block.encode();
    assert_eq!(offsets(&layout), vec![0, 64, 80, 96]);
    assert_eq!(layout.members[0].matrix_stride, 16);
    assert_eq!(layout.size, 112);
}

#[test]
fn block_layout_from_ron() {
    let block = ron::from_str::<InterfaceBlock>(
        r#"(
            name: "Params",
            layout: Hlsl((packed: false)),
            fields: [
                (name: "a", ty: Basic(Float)),
                (name: "b", ty: Basic(Float)),
            ],
        )"#,
    )
    .unwrap();

    assert_eq!(block.layout, BlockLayoutKind::Hlsl(HlslRule::unpacked()));
    assert_eq!(offsets(&block.encode()), vec![0, 16]);
    assert_eq!(BlockLayoutKind::default(), Std140Rule.into());
}
