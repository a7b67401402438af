use bridge_log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    encoder::{BlockLayoutEncoder, BlockLayoutKind, BlockLayoutRule},
    types::{BlockMemberInfo, InterfaceBlockField},
};

/// Describes an interface block declared by a shader.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct InterfaceBlock {
    pub name: String,
    #[serde(default)]
    pub layout: BlockLayoutKind,
    pub fields: Vec<InterfaceBlockField>,
}

/// Result of encoding a whole block.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlockLayout {
    pub members: Vec<BlockMemberInfo>,
    /// Total size of the block in bytes.
    pub size: usize,
}

impl InterfaceBlock {
    pub fn new(name: impl Into<String>, fields: Vec<InterfaceBlockField>) -> Self {
        Self {
            name: name.into(),
            layout: BlockLayoutKind::default(),
            fields,
        }
    }

    #[inline]
    pub fn with_layout(mut self, layout: BlockLayoutKind) -> Self {
        self.layout = layout;
        self
    }

    /// Encodes the block with the layout it was declared with.
    #[inline]
    pub fn encode(&self) -> BlockLayout {
        self.encode_with(self.layout)
    }

    pub fn encode_with(&self, rule: impl BlockLayoutRule) -> BlockLayout {
        let mut members = Vec::with_capacity(self.fields.len());
        let mut encoder = BlockLayoutEncoder::new(rule, &mut members);
        encoder.encode_interface_block_fields(&self.fields);
        let size = encoder.block_size();

        debug!(
            "interface block `{}` encoded with {} members in {} bytes",
            self.name,
            members.len(),
            size
        );

        BlockLayout { members, size }
    }
}
