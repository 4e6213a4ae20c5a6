use voxmine_blocks::{BlockCatalog, BlockType, FaceLighting};
use voxmine_chunk::{Chunk, ChunkLookup, ChunkMesh};
use voxmine_geom::Vec3;
use voxmine_world::CHUNK_SIZE;

use crate::emit::{FACE_ORDER, face_corners};
use crate::mesh_build::MeshBuild;

/// Inputs shared by every chunk build.
#[derive(Clone, Copy, Debug)]
pub struct MeshContext<'a> {
    pub catalog: &'a BlockCatalog,
    pub lighting: &'a FaceLighting,
    /// When set, faces on the chunk border are culled against resident
    /// neighbors instead of always being emitted.
    pub cull_chunk_borders: bool,
}

impl<'a> MeshContext<'a> {
    pub fn new(catalog: &'a BlockCatalog, lighting: &'a FaceLighting) -> Self {
        Self {
            catalog,
            lighting,
            cull_chunk_borders: false,
        }
    }
}

/// Extracts every visible face of `chunk`. Returns `None` for an empty chunk.
///
/// A face is visible when the cell beyond it is air. Cells beyond the chunk
/// border count as air unless border culling is on and `neighbors` has them.
pub fn mesh_chunk(
    chunk: &Chunk,
    ctx: &MeshContext<'_>,
    neighbors: Option<&dyn ChunkLookup>,
    scratch: &mut MeshBuild,
) -> Option<ChunkMesh> {
    if chunk.is_empty() {
        return None;
    }
    scratch.clear_keep_capacity();
    scratch.reserve_quads(chunk.solid_count());
    let origin = chunk.coord().origin();
    let origin_f = Vec3::from(origin);
    let border_lookup = if ctx.cull_chunk_borders { neighbors } else { None };

    for y in 0..CHUNK_SIZE {
        for z in 0..CHUNK_SIZE {
            for x in 0..CHUNK_SIZE {
                let block = chunk.get_local(x, y, z);
                if block.is_air() {
                    continue;
                }
                let at = origin_f + Vec3::new(x as f32, y as f32, z as f32);
                for face in FACE_ORDER {
                    let (dx, dy, dz) = face.delta();
                    let (nx, ny, nz) = (x as i32 + dx, y as i32 + dy, z as i32 + dz);
                    let beyond = match chunk.get_local_checked(nx, ny, nz) {
                        Some(b) => b,
                        None => match border_lookup {
                            Some(lookup) => lookup.block_at(origin.offset(nx, ny, nz)),
                            None => BlockType::Air,
                        },
                    };
                    if !beyond.is_air() {
                        continue;
                    }
                    scratch.add_quad(
                        face_corners(face, at),
                        ctx.catalog.uvs(block, face),
                        ctx.lighting.get(face),
                    );
                }
            }
        }
    }

    log::trace!(
        target: "mesh",
        "chunk ({},{},{}) -> {} quads",
        origin.x,
        origin.y,
        origin.z,
        scratch.quad_count()
    );
    Some(scratch.to_mesh(origin_f))
}

/// Rebuilds `chunk` in place without consulting neighbors. No-op on an empty
/// chunk; returns whether a mesh was installed.
pub fn build_mesh(chunk: &mut Chunk, ctx: &MeshContext<'_>, scratch: &mut MeshBuild) -> bool {
    match mesh_chunk(chunk, ctx, None, scratch) {
        Some(mesh) => {
            chunk.install_mesh(mesh);
            true
        }
        None => false,
    }
}
