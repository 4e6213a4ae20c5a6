use std::collections::HashMap;

use voxmine_blocks::BlockType;
use voxmine_geom::IVec3;
use voxmine_world::ChunkCoord;

use crate::Chunk;

/// Read-only access to resident chunks. Anything not resident reads as air.
pub trait ChunkLookup {
    fn try_get_chunk(&self, coord: ChunkCoord) -> Option<&Chunk>;

    fn block_at(&self, b: IVec3) -> BlockType {
        match self.try_get_chunk(ChunkCoord::from_block(b)) {
            Some(chunk) => {
                let (x, y, z) = ChunkCoord::local_of(b);
                chunk.get_local(x, y, z)
            }
            None => BlockType::Air,
        }
    }
}

/// Mutable access used by edits and vegetation.
///
/// Writes only mark chunks dirty; `rebuild_dirty` is the sweep that re-meshes
/// every marked chunk once.
pub trait ChunkLookupMut: ChunkLookup {
    fn try_get_chunk_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk>;

    /// Returns the previous block, or `None` when the owning chunk is not resident.
    fn set_block(&mut self, b: IVec3, block: BlockType) -> Option<BlockType> {
        let chunk = self.try_get_chunk_mut(ChunkCoord::from_block(b))?;
        let (x, y, z) = ChunkCoord::local_of(b);
        Some(chunk.set_local(x, y, z, block))
    }

    /// Writes `block` only if the cell currently holds something `replaceable`
    /// accepts. Returns whether the write happened.
    fn set_block_if(
        &mut self,
        b: IVec3,
        block: BlockType,
        replaceable: fn(BlockType) -> bool,
    ) -> bool {
        let Some(chunk) = self.try_get_chunk_mut(ChunkCoord::from_block(b)) else {
            return false;
        };
        let (x, y, z) = ChunkCoord::local_of(b);
        if !replaceable(chunk.get_local(x, y, z)) {
            return false;
        }
        chunk.set_local(x, y, z, block);
        true
    }

    /// Rebuilds every dirty chunk; returns how many were rebuilt.
    fn rebuild_dirty(&mut self) -> usize;
}

impl<S: std::hash::BuildHasher> ChunkLookup for HashMap<ChunkCoord, Chunk, S> {
    fn try_get_chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.get(&coord)
    }
}
