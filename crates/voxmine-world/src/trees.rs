//! Per-chunk tree placement. Planning is pure: it only decides where trees go and
//! what cells they want; applying the writes is up to the owner of the chunks.

use voxmine_blocks::BlockType;
use voxmine_geom::IVec3;

use crate::worldgen::WorldGenParams;
use crate::{CHUNK_SIZE_I32, ChunkCoord};

fn hash2_tree(ix: i32, iz: i32, seed: u32) -> u32 {
    let mut h = (ix as u32).wrapping_mul(0x85eb_ca6b)
        ^ (iz as u32).wrapping_mul(0xc2b2_ae35)
        ^ seed.wrapping_mul(0x27d4_eb2d);
    h ^= h >> 16;
    h = h.wrapping_mul(0x7feb_352d);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846c_a68b);
    h ^= h >> 16;
    h
}

/// Seed for a chunk column's random stream; independent of generation order.
pub fn chunk_stream_seed(world_seed: i32, coord: ChunkCoord) -> u64 {
    let lo = hash2_tree(coord.cx, coord.cz, world_seed as u32);
    let hi = hash2_tree(coord.cz, coord.cx, (world_seed as u32) ^ 0x9E37_79B9);
    (u64::from(hi) << 32) | u64::from(lo)
}

/// A column chosen to grow a tree, before the ground height is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeSite {
    pub wx: i32,
    pub wz: i32,
    pub trunk_height: i32,
}

impl TreeSite {
    /// Cells the tree wants when its lowest log sits at `base_y`, logs first.
    pub fn blocks(&self, base_y: i32, leaf_radius: i32) -> Vec<(IVec3, BlockType)> {
        let r = leaf_radius;
        let side = (2 * r + 1) as usize;
        let mut out = Vec::with_capacity(self.trunk_height as usize + side * side * side);
        for dy in 0..self.trunk_height {
            out.push((IVec3::new(self.wx, base_y + dy, self.wz), BlockType::OakLog));
        }
        let center_y = base_y + self.trunk_height - 2;
        for dx in -r..=r {
            for dy in -r..=r {
                for dz in -r..=r {
                    if r > 0 && dx.abs() == r && dy.abs() == r && dz.abs() == r {
                        continue;
                    }
                    out.push((
                        IVec3::new(self.wx + dx, center_y + dy, self.wz + dz),
                        BlockType::OakLeaves,
                    ));
                }
            }
        }
        out
    }
}

#[derive(Clone, Debug)]
pub struct TreePlanner {
    seed: i32,
    enable: bool,
    spacing: i32,
    probability: f32,
    trunk_min: i32,
    trunk_max: i32,
    leaf_radius: i32,
}

impl TreePlanner {
    pub fn new(seed: i32, params: &WorldGenParams) -> Self {
        Self {
            seed,
            enable: params.trees_enable,
            spacing: params.tree_spacing.max(1),
            probability: params.tree_probability,
            trunk_min: params.trunk_min,
            trunk_max: params.trunk_max.max(params.trunk_min),
            leaf_radius: params.leaf_radius,
        }
    }

    #[inline]
    pub fn leaf_radius(&self) -> i32 {
        self.leaf_radius
    }

    /// Tree sites for the chunk column at `coord`, in local x-major order.
    /// Only columns on the spacing lattice draw from the stream.
    pub fn sites(&self, coord: ChunkCoord) -> Vec<TreeSite> {
        if !self.enable || self.probability <= 0.0 {
            return Vec::new();
        }
        let mut rng = fastrand::Rng::with_seed(chunk_stream_seed(self.seed, coord));
        let origin = coord.origin();
        let mut out = Vec::new();
        for lx in 0..CHUNK_SIZE_I32 {
            for lz in 0..CHUNK_SIZE_I32 {
                let wx = origin.x + lx;
                let wz = origin.z + lz;
                if wx.rem_euclid(self.spacing) != 0 || wz.rem_euclid(self.spacing) != 0 {
                    continue;
                }
                if rng.f32() >= self.probability {
                    continue;
                }
                let trunk_height = rng.i32(self.trunk_min..=self.trunk_max);
                out.push(TreeSite {
                    wx,
                    wz,
                    trunk_height,
                });
            }
        }
        out
    }
}
