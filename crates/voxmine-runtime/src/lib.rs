//! Resident chunk index: streaming around an observer, vegetation and the dirty sweep.
#![forbid(unsafe_code)]

mod config;
mod index;
mod vegetation;

pub use config::StreamConfig;
pub use index::{ChunkStatus, UpdateStats, WorldIndex};
