//! Block types, faces, atlas catalog and face lighting.
#![forbid(unsafe_code)]

pub mod catalog;
pub mod lighting;
pub mod types;

pub use catalog::{AtlasCell, BlockCatalog, BlockDef};
pub use lighting::{FaceLighting, LightingConfig, LightingScheme};
pub use types::{BlockType, Face, UnknownBlock};
