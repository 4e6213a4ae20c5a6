use voxmine_chunk::ChunkMesh;
use voxmine_geom::Vec3;

/// Reusable scratch for one mesh build. Owned by the caller and cleared
/// between chunks so allocations carry over.
#[derive(Default, Clone, Debug)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub uv: Vec<f32>,
    pub light: Vec<f32>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    /// Clears all arrays but retains capacity for reuse across chunks.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.uv.clear();
        self.light.clear();
        self.idx.clear();
    }

    /// Pre-reserve capacity for approximately `n_quads` quads worth of data.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        // 4 vertices per quad
        self.pos.reserve(n_quads * 4 * 3);
        self.uv.reserve(n_quads * 4 * 2);
        self.light.reserve(n_quads * 4);
        self.idx.reserve(n_quads * 6);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.idx.len() / 6
    }

    /// Appends a quad given counter-clockwise corners and matching UVs.
    pub fn add_quad(&mut self, corners: [Vec3; 4], uvs: [(f32, f32); 4], light: f32) {
        let base = self.vertex_count() as u32;
        for (p, (u, v)) in corners.into_iter().zip(uvs) {
            self.pos.extend_from_slice(&[p.x, p.y, p.z]);
            self.uv.extend_from_slice(&[u, v]);
            self.light.push(light);
        }
        self.idx
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    /// Copies the scratch into an exact-size mesh.
    pub fn to_mesh(&self, origin: Vec3) -> ChunkMesh {
        ChunkMesh {
            origin,
            positions: self.pos.clone(),
            uvs: self.uv.clone(),
            lights: self.light.clone(),
            indices: self.idx.clone(),
        }
    }
}
