//! Resident chunk data and the lookup seams other crates query through.
#![forbid(unsafe_code)]

mod chunk;
mod lookup;
mod mesh;

pub use chunk::Chunk;
pub use lookup::{ChunkLookup, ChunkLookupMut};
pub use mesh::ChunkMesh;
