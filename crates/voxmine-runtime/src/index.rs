use hashbrown::{HashMap, HashSet};
use voxmine_blocks::{BlockCatalog, BlockType, Face, FaceLighting};
use voxmine_chunk::{Chunk, ChunkLookup, ChunkLookupMut, ChunkMesh};
use voxmine_geom::{IVec3, Vec3};
use voxmine_mesh_cpu::{MeshBuild, MeshContext, mesh_chunk};
use voxmine_world::{ChunkCoord, TerrainGenerator, TreePlanner};

use crate::config::StreamConfig;

/// Where a chunk coordinate stands between ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkStatus {
    Unloaded,
    /// Generated all-air and discarded; it will not be generated again.
    Empty,
    /// Resident with stale geometry.
    Dirty,
    Resident,
}

/// What one `update` did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateStats {
    pub generated: usize,
    pub discarded_empty: usize,
    pub skipped_by_cap: usize,
    pub evicted: usize,
    pub rebuilt: usize,
    pub vegetated: usize,
    pub resident: usize,
}

// Read view over the resident map, so meshing can borrow it while the
// scratch buffer is borrowed mutably.
pub(crate) struct Resident<'a>(pub(crate) &'a HashMap<ChunkCoord, Chunk>);

impl ChunkLookup for Resident<'_> {
    fn try_get_chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.0.get(&coord)
    }
}

/// Owns every resident chunk and keeps the set centered on an observer.
pub struct WorldIndex {
    pub(crate) chunks: HashMap<ChunkCoord, Chunk>,
    pub(crate) known_empty: HashSet<ChunkCoord>,
    pub(crate) vegetated: HashSet<ChunkCoord>,
    pub(crate) generator: TerrainGenerator,
    pub(crate) trees: TreePlanner,
    catalog: BlockCatalog,
    lighting: FaceLighting,
    pub(crate) config: StreamConfig,
    scratch: MeshBuild,
    pub(crate) observer: ChunkCoord,
    tick: u64,
}

impl WorldIndex {
    pub fn new(generator: TerrainGenerator, config: StreamConfig) -> Self {
        let trees = TreePlanner::new(generator.seed(), generator.params());
        Self {
            chunks: HashMap::new(),
            known_empty: HashSet::new(),
            vegetated: HashSet::new(),
            generator,
            trees,
            catalog: BlockCatalog::default(),
            lighting: FaceLighting::standard(),
            config: config.validated(),
            scratch: MeshBuild::default(),
            observer: ChunkCoord::default(),
            tick: 0,
        }
    }

    pub fn with_catalog(mut self, catalog: BlockCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_lighting(mut self, lighting: FaceLighting) -> Self {
        self.lighting = lighting;
        self
    }

    #[inline]
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    #[inline]
    pub fn catalog(&self) -> &BlockCatalog {
        &self.catalog
    }

    #[inline]
    pub fn lighting(&self) -> &FaceLighting {
        &self.lighting
    }

    #[inline]
    pub fn generator(&self) -> &TerrainGenerator {
        &self.generator
    }

    #[inline]
    pub fn render_distance(&self) -> i32 {
        self.config.render_distance
    }

    /// Takes effect on the next `update`; clamped to at least 1.
    pub fn set_render_distance(&mut self, render_distance: i32) {
        self.config.render_distance = render_distance.max(1);
    }

    /// Chunk the observer stood in at the last `update`.
    #[inline]
    pub fn observer_chunk(&self) -> ChunkCoord {
        self.observer
    }

    #[inline]
    pub fn resident_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn resident_coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.chunks.keys().copied()
    }

    pub fn chunk_status(&self, coord: ChunkCoord) -> ChunkStatus {
        match self.chunks.get(&coord) {
            Some(c) if c.needs_rebuild() => ChunkStatus::Dirty,
            Some(_) => ChunkStatus::Resident,
            None if self.known_empty.contains(&coord) => ChunkStatus::Empty,
            None => ChunkStatus::Unloaded,
        }
    }

    /// Latest geometry of every resident chunk that has any.
    pub fn meshes(&self) -> impl Iterator<Item = (ChunkCoord, &ChunkMesh)> + '_ {
        self.chunks
            .iter()
            .filter(|(_, c)| !c.mesh().is_empty())
            .map(|(k, c)| (*k, c.mesh()))
    }

    /// True when `coord` may stay resident around `center`.
    #[inline]
    pub fn within_retention(&self, coord: ChunkCoord, center: ChunkCoord) -> bool {
        coord.horizontal_distance(center) <= self.config.render_distance + 1
            && self.config.contains_layer(coord.cy)
    }

    /// Drops every resident chunk and marker.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.known_empty.clear();
        self.vegetated.clear();
    }

    /// One streaming tick around `observer_pos`.
    pub fn update(&mut self, observer_pos: Vec3) -> UpdateStats {
        self.tick += 1;
        let center = ChunkCoord::from_world(observer_pos);
        self.observer = center;
        let mut stats = UpdateStats {
            vegetated: self.vegetation_pass(),
            ..UpdateStats::default()
        };

        let missing = self.missing_coords(center);
        for (i, coord) in missing.iter().enumerate() {
            if self.chunks.len() >= self.config.max_resident_chunks {
                stats.skipped_by_cap = missing.len() - i;
                log::debug!(
                    target: "stream",
                    "[tick {}] resident cap {} reached, {} chunks deferred",
                    self.tick,
                    self.config.max_resident_chunks,
                    stats.skipped_by_cap
                );
                break;
            }
            let chunk = Chunk::generate(*coord, &self.generator);
            if chunk.is_empty() {
                self.known_empty.insert(*coord);
                stats.discarded_empty += 1;
                continue;
            }
            self.insert_chunk(chunk);
            stats.generated += 1;
        }

        stats.evicted = self.evict_outside(center);
        stats.rebuilt = self.rebuild_dirty();
        stats.resident = self.chunks.len();
        log::debug!(
            target: "stream",
            "[tick {}] center=({},{},{}) gen={} empty={} capped={} evicted={} rebuilt={} trees={} resident={}",
            self.tick,
            center.cx,
            center.cy,
            center.cz,
            stats.generated,
            stats.discarded_empty,
            stats.skipped_by_cap,
            stats.evicted,
            stats.rebuilt,
            stats.vegetated,
            stats.resident
        );
        stats
    }

    // Coordinates in the load area that are neither resident nor known empty,
    // nearest to the observer first.
    fn missing_coords(&self, center: ChunkCoord) -> Vec<ChunkCoord> {
        let rd = self.config.render_distance;
        let mut out = Vec::new();
        for dx in -rd..=rd {
            for dz in -rd..=rd {
                for cy in self.config.min_chunk_y..=self.config.max_chunk_y {
                    let coord = ChunkCoord::new(center.cx + dx, cy, center.cz + dz);
                    if !self.chunks.contains_key(&coord) && !self.known_empty.contains(&coord) {
                        out.push(coord);
                    }
                }
            }
        }
        out.sort_by_key(|c| {
            (
                c.horizontal_distance(center),
                (c.cy - center.cy).abs(),
                c.distance_sq(center),
                *c,
            )
        });
        out
    }

    /// Inserts a freshly generated chunk and marks its resident neighbors dirty.
    pub(crate) fn insert_chunk(&mut self, chunk: Chunk) {
        let coord = chunk.coord();
        for n in coord.neighbors() {
            if let Some(neighbor) = self.chunks.get_mut(&n) {
                neighbor.mark_dirty();
            }
        }
        log::trace!(target: "stream", "load ({},{},{})", coord.cx, coord.cy, coord.cz);
        self.known_empty.remove(&coord);
        self.chunks.insert(coord, chunk);
    }

    fn dirty_border_neighbors(&mut self, b: IVec3) {
        if !self.config.cull_chunk_borders {
            return;
        }
        let coord = ChunkCoord::from_block(b);
        for face in Face::ALL {
            let n = ChunkCoord::from_block(b + face.normal_i());
            if n != coord {
                if let Some(neighbor) = self.chunks.get_mut(&n) {
                    neighbor.mark_dirty();
                }
            }
        }
    }

    fn evict_outside(&mut self, center: ChunkCoord) -> usize {
        let before = self.chunks.len();
        let rd = self.config.render_distance;
        let (min_y, max_y) = (self.config.min_chunk_y, self.config.max_chunk_y);
        let keep = |c: &ChunkCoord| {
            c.horizontal_distance(center) <= rd + 1 && (min_y..=max_y).contains(&c.cy)
        };
        self.chunks.retain(|coord, _| keep(coord));
        self.known_empty.retain(|coord| keep(coord));
        let chunks = &self.chunks;
        self.vegetated.retain(|coord| chunks.contains_key(coord));
        before - self.chunks.len()
    }
}

impl ChunkLookup for WorldIndex {
    fn try_get_chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }
}

impl ChunkLookupMut for WorldIndex {
    fn try_get_chunk_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
        self.chunks.get_mut(&coord)
    }

    /// With border culling on, boundary edits also dirty the neighbor across
    /// the face.
    fn set_block(&mut self, b: IVec3, block: BlockType) -> Option<BlockType> {
        let coord = ChunkCoord::from_block(b);
        let (x, y, z) = ChunkCoord::local_of(b);
        let prev = self.chunks.get_mut(&coord)?.set_local(x, y, z, block);
        if prev != block {
            self.dirty_border_neighbors(b);
        }
        Some(prev)
    }

    /// A non-air write into an unloaded chunk inside the load area generates
    /// that chunk first; the replaceability check then runs against its real
    /// contents.
    fn set_block_if(
        &mut self,
        b: IVec3,
        block: BlockType,
        replaceable: fn(BlockType) -> bool,
    ) -> bool {
        let coord = ChunkCoord::from_block(b);
        if !self.chunks.contains_key(&coord) && (block.is_air() || !self.materialize(coord)) {
            return false;
        }
        let (x, y, z) = ChunkCoord::local_of(b);
        let Some(chunk) = self.chunks.get_mut(&coord) else {
            return false;
        };
        let current = chunk.get_local(x, y, z);
        if !replaceable(current) {
            return false;
        }
        chunk.set_local(x, y, z, block);
        if current != block {
            self.dirty_border_neighbors(b);
        }
        true
    }

    /// Re-meshes every dirty chunk exactly once. A chunk emptied by edits gets
    /// an empty mesh so stale geometry is not drawn.
    fn rebuild_dirty(&mut self) -> usize {
        let mut dirty: Vec<ChunkCoord> = self
            .chunks
            .iter()
            .filter(|(_, c)| c.needs_rebuild())
            .map(|(k, _)| *k)
            .collect();
        dirty.sort_unstable();
        let ctx = MeshContext {
            catalog: &self.catalog,
            lighting: &self.lighting,
            cull_chunk_borders: self.config.cull_chunk_borders,
        };
        for coord in &dirty {
            let mesh = match self.chunks.get(coord) {
                Some(chunk) => {
                    mesh_chunk(chunk, &ctx, Some(&Resident(&self.chunks)), &mut self.scratch)
                        .unwrap_or_default()
                }
                None => continue,
            };
            if let Some(chunk) = self.chunks.get_mut(coord) {
                chunk.install_mesh(mesh);
            }
        }
        if !dirty.is_empty() {
            log::trace!(target: "mesh", "rebuilt {} chunks", dirty.len());
        }
        dirty.len()
    }
}
