use voxmine_geom::Vec3;

/// Finished chunk geometry handed to a renderer. Positions are world-space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChunkMesh {
    pub origin: Vec3,
    /// xyz per vertex.
    pub positions: Vec<f32>,
    /// uv per vertex.
    pub uvs: Vec<f32>,
    /// One light scalar per vertex.
    pub lights: Vec<f32>,
    pub indices: Vec<u32>,
}

impl ChunkMesh {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn vertex(&self, i: usize) -> Vec3 {
        Vec3::new(
            self.positions[i * 3],
            self.positions[i * 3 + 1],
            self.positions[i * 3 + 2],
        )
    }
}
