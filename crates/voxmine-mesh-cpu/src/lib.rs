//! CPU meshing: visible-face extraction for chunks.
#![forbid(unsafe_code)]

mod build;
mod emit;
mod mesh_build;

pub use build::{MeshContext, build_mesh, mesh_chunk};
pub use emit::{FACE_ORDER, face_corners};
pub use mesh_build::MeshBuild;
