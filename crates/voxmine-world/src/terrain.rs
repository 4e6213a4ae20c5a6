use fastnoise_lite::{FastNoiseLite, NoiseType};
use voxmine_blocks::BlockType;

use crate::worldgen::WorldGenParams;
use crate::{CHUNK_SIZE, ChunkCoord, VoxelGrid};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WorldGenMode {
    Normal,
    /// Every column has the same height.
    Flat { height: i32 },
}

/// Seeded height-field generator. Holds no state beyond the seed and params,
/// so the same coordinate always yields the same grid.
pub struct TerrainGenerator {
    seed: i32,
    mode: WorldGenMode,
    params: WorldGenParams,
    height_noise: FastNoiseLite,
}

impl TerrainGenerator {
    pub fn new(seed: i32, params: WorldGenParams) -> Self {
        let mode = if params.flat {
            WorldGenMode::Flat {
                height: params.flat_height,
            }
        } else {
            WorldGenMode::Normal
        };
        let mut height_noise = FastNoiseLite::with_seed(seed);
        height_noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        height_noise.set_frequency(Some(params.height_frequency));
        Self {
            seed,
            mode,
            params,
            height_noise,
        }
    }

    pub fn flat(seed: i32, height: i32) -> Self {
        let params = WorldGenParams {
            flat: true,
            flat_height: height,
            ..WorldGenParams::default()
        };
        Self::new(seed, params)
    }

    #[inline]
    pub fn seed(&self) -> i32 {
        self.seed
    }

    #[inline]
    pub fn mode(&self) -> WorldGenMode {
        self.mode
    }

    #[inline]
    pub fn params(&self) -> &WorldGenParams {
        &self.params
    }

    /// Terrain height of a world column; the top solid block sits at `height - 1`.
    pub fn column_height(&self, wx: i32, wz: i32) -> i32 {
        match self.mode {
            WorldGenMode::Flat { height } => height,
            WorldGenMode::Normal => {
                let n = self.height_noise.get_noise_2d(wx as f32, wz as f32);
                self.params.base_height + (n * self.params.amplitude).floor() as i32
            }
        }
    }

    /// Layering rule for a cell at `wy` in a column of the given height.
    #[inline]
    pub fn layer_block(wy: i32, height: i32) -> BlockType {
        if wy < height - 3 {
            BlockType::Stone
        } else if wy < height - 1 {
            BlockType::Dirt
        } else if wy == height - 1 {
            BlockType::Grass
        } else {
            BlockType::Air
        }
    }

    pub fn block_at(&self, wx: i32, wy: i32, wz: i32) -> BlockType {
        Self::layer_block(wy, self.column_height(wx, wz))
    }

    pub fn generate(&self, coord: ChunkCoord) -> VoxelGrid {
        let mut grid = VoxelGrid::new_air();
        let base = coord.origin();
        for z in 0..CHUNK_SIZE {
            for x in 0..CHUNK_SIZE {
                let wx = base.x + x as i32;
                let wz = base.z + z as i32;
                let height = self.column_height(wx, wz);
                // Whole chunk above this column's surface.
                if base.y >= height {
                    continue;
                }
                for y in 0..CHUNK_SIZE {
                    let block = Self::layer_block(base.y + y as i32, height);
                    if block.is_air() {
                        break;
                    }
                    grid.set(x, y, z, block);
                }
            }
        }
        grid
    }
}
