//! Chunk addressing, voxel grids, terrain and vegetation generation.
#![forbid(unsafe_code)]

mod chunk_coord;
mod grid;
pub mod terrain;
pub mod trees;
pub mod worldgen;

pub use chunk_coord::ChunkCoord;
pub use grid::VoxelGrid;
pub use terrain::{TerrainGenerator, WorldGenMode};
pub use trees::{TreePlanner, TreeSite};
pub use worldgen::{WorldGenConfig, WorldGenParams, load_params_from_path};

/// Edge length of a cubic chunk, in blocks.
pub const CHUNK_SIZE: usize = 16;
pub const CHUNK_SIZE_I32: i32 = CHUNK_SIZE as i32;
pub const CHUNK_VOLUME: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;

/// Seed used when the host does not choose one.
pub const DEFAULT_SEED: i32 = 123_456;
