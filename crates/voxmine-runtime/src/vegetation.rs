use voxmine_blocks::BlockType;
use voxmine_chunk::{Chunk, ChunkLookup, ChunkLookupMut};
use voxmine_geom::IVec3;
use voxmine_world::{CHUNK_SIZE_I32, ChunkCoord};

use crate::index::WorldIndex;

impl WorldIndex {
    /// Plants trees on every resident surface-layer chunk that has not had them
    /// yet. Returns how many chunks were processed.
    pub(crate) fn vegetation_pass(&mut self) -> usize {
        let layer = self.config.surface_layer;
        let mut pending: Vec<ChunkCoord> = self
            .chunks
            .keys()
            .filter(|c| c.cy == layer && !self.vegetated.contains(*c))
            .copied()
            .collect();
        pending.sort_unstable();
        for coord in &pending {
            self.vegetated.insert(*coord);
            let planted = self.plant_chunk(*coord);
            if planted > 0 {
                log::trace!(
                    target: "worldgen",
                    "trees ({},{}) planted={}",
                    coord.cx,
                    coord.cz,
                    planted
                );
            }
        }
        pending.len()
    }

    fn plant_chunk(&mut self, coord: ChunkCoord) -> usize {
        let radius = self.trees.leaf_radius();
        let mut planted = 0;
        for site in self.trees.sites(coord) {
            let Some(ground) = self.highest_grass(site.wx, site.wz) else {
                continue;
            };
            for (pos, block) in site.blocks(ground + 1, radius) {
                self.place_vegetation(pos, block);
            }
            planted += 1;
        }
        planted
    }

    // Scans the resident column top-down for the first grass cell.
    fn highest_grass(&self, wx: i32, wz: i32) -> Option<i32> {
        let top = (self.config.max_chunk_y + 1) * CHUNK_SIZE_I32 - 1;
        let bottom = self.config.min_chunk_y * CHUNK_SIZE_I32;
        (bottom..=top)
            .rev()
            .find(|&wy| self.block_at(IVec3::new(wx, wy, wz)) == BlockType::Grass)
    }

    // Trees only grow into air or existing leaves, checked against the real
    // cell after an unloaded target chunk has been generated.
    fn place_vegetation(&mut self, pos: IVec3, block: BlockType) {
        self.set_block_if(pos, block, |current| {
            current.is_air() || current == BlockType::OakLeaves
        });
    }

    /// Generates and inserts `coord` if it lies inside the load area and the
    /// cap has room.
    pub(crate) fn materialize(&mut self, coord: ChunkCoord) -> bool {
        if coord.horizontal_distance(self.observer) > self.config.render_distance
            || !self.config.contains_layer(coord.cy)
            || self.chunks.len() >= self.config.max_resident_chunks
        {
            return false;
        }
        let chunk = Chunk::generate(coord, &self.generator);
        self.insert_chunk(chunk);
        true
    }
}
