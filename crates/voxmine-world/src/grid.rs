use voxmine_blocks::BlockType;

use crate::{CHUNK_SIZE, CHUNK_VOLUME};

/// Dense `CHUNK_SIZE`^3 block storage, x fastest then z then y.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    blocks: Box<[BlockType]>,
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::new_air()
    }
}

impl VoxelGrid {
    pub fn new_air() -> Self {
        Self {
            blocks: vec![BlockType::Air; CHUNK_VOLUME].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn idx(x: usize, y: usize, z: usize) -> usize {
        (y * CHUNK_SIZE + z) * CHUNK_SIZE + x
    }

    #[inline]
    pub fn in_bounds(x: i32, y: i32, z: i32) -> bool {
        let s = CHUNK_SIZE as i32;
        (0..s).contains(&x) && (0..s).contains(&y) && (0..s).contains(&z)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> BlockType {
        self.blocks[Self::idx(x, y, z)]
    }

    /// Signed lookup; `None` outside the grid.
    #[inline]
    pub fn get_checked(&self, x: i32, y: i32, z: i32) -> Option<BlockType> {
        if Self::in_bounds(x, y, z) {
            Some(self.get(x as usize, y as usize, z as usize))
        } else {
            None
        }
    }

    /// Writes a cell and returns what was there before.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, block: BlockType) -> BlockType {
        let i = Self::idx(x, y, z);
        std::mem::replace(&mut self.blocks[i], block)
    }

    #[inline]
    pub fn as_slice(&self) -> &[BlockType] {
        &self.blocks
    }

    pub fn count_non_air(&self) -> usize {
        self.blocks.iter().filter(|b| !b.is_air()).count()
    }

    #[inline]
    pub fn is_all_air(&self) -> bool {
        self.blocks.iter().all(|b| b.is_air())
    }
}
