use voxmine_blocks::BlockType;
use voxmine_geom::IVec3;
use voxmine_world::{ChunkCoord, TerrainGenerator, VoxelGrid};

use crate::mesh::ChunkMesh;

/// One resident chunk: its voxels, dirty state and last built mesh.
#[derive(Clone, Debug)]
pub struct Chunk {
    coord: ChunkCoord,
    grid: VoxelGrid,
    solid_count: usize,
    needs_rebuild: bool,
    mesh: ChunkMesh,
    mesh_revision: u64,
}

impl Chunk {
    pub fn new(coord: ChunkCoord, grid: VoxelGrid) -> Self {
        let solid_count = grid.count_non_air();
        Self {
            coord,
            grid,
            solid_count,
            needs_rebuild: solid_count > 0,
            mesh: ChunkMesh::default(),
            mesh_revision: 0,
        }
    }

    pub fn generate(coord: ChunkCoord, generator: &TerrainGenerator) -> Self {
        Self::new(coord, generator.generate(coord))
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    #[inline]
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// True iff every cell is air.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.solid_count == 0
    }

    #[inline]
    pub fn solid_count(&self) -> usize {
        self.solid_count
    }

    #[inline]
    pub fn needs_rebuild(&self) -> bool {
        self.needs_rebuild
    }

    #[inline]
    pub fn mark_dirty(&mut self) {
        self.needs_rebuild = true;
    }

    #[inline]
    pub fn get_local(&self, x: usize, y: usize, z: usize) -> BlockType {
        self.grid.get(x, y, z)
    }

    /// Signed local lookup; `None` outside this chunk.
    #[inline]
    pub fn get_local_checked(&self, x: i32, y: i32, z: i32) -> Option<BlockType> {
        self.grid.get_checked(x, y, z)
    }

    #[inline]
    pub fn contains_world(&self, b: IVec3) -> bool {
        ChunkCoord::from_block(b) == self.coord
    }

    #[inline]
    pub fn get_world(&self, b: IVec3) -> Option<BlockType> {
        if !self.contains_world(b) {
            return None;
        }
        let (x, y, z) = ChunkCoord::local_of(b);
        Some(self.grid.get(x, y, z))
    }

    /// Writes a local cell and returns the previous block. A real change marks
    /// the chunk dirty.
    pub fn set_local(&mut self, x: usize, y: usize, z: usize, block: BlockType) -> BlockType {
        let prev = self.grid.set(x, y, z, block);
        if prev != block {
            match (prev.is_air(), block.is_air()) {
                (true, false) => self.solid_count += 1,
                (false, true) => self.solid_count -= 1,
                _ => {}
            }
            self.needs_rebuild = true;
        }
        prev
    }

    pub fn set_world(&mut self, b: IVec3, block: BlockType) -> Option<BlockType> {
        if !self.contains_world(b) {
            return None;
        }
        let (x, y, z) = ChunkCoord::local_of(b);
        Some(self.set_local(x, y, z, block))
    }

    #[inline]
    pub fn mesh(&self) -> &ChunkMesh {
        &self.mesh
    }

    /// Incremented every time a mesh is installed.
    #[inline]
    pub fn mesh_revision(&self) -> u64 {
        self.mesh_revision
    }

    /// Replaces the geometry and clears the dirty flag.
    pub fn install_mesh(&mut self, mesh: ChunkMesh) {
        self.mesh = mesh;
        self.mesh_revision += 1;
        self.needs_rebuild = false;
    }
}
