use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use voxmine_blocks::{BlockCatalog, FaceLighting, LightingConfig};
use voxmine_runtime::StreamConfig;
use voxmine_world::worldgen::Mode;
use voxmine_world::{DEFAULT_SEED, WorldGenConfig, WorldGenParams};

/// Contents of `voxmine.toml`. Every table is optional.
#[derive(Clone, Debug, Deserialize)]
pub struct HostConfig {
    #[serde(default = "default_seed")]
    pub seed: i32,
    #[serde(default)]
    pub stream: StreamConfig,
    #[serde(flatten)]
    pub worldgen: WorldGenConfig,
    #[serde(default)]
    pub lighting: LightingConfig,
    /// Block catalog override, relative to the config file.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default)]
    pub session: SessionConfig,
}
fn default_seed() -> i32 {
    DEFAULT_SEED
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            stream: StreamConfig::default(),
            worldgen: WorldGenConfig::default(),
            lighting: LightingConfig::default(),
            catalog: None,
            session: SessionConfig::default(),
        }
    }
}

/// Scripted walk driven by the host.
#[derive(Clone, Debug, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_ticks")]
    pub ticks: u32,
    /// Blocks per tick along +X.
    #[serde(default = "default_walk_speed")]
    pub walk_speed: f32,
    /// Ticks between mine/place attempts; 0 disables edits.
    #[serde(default = "default_edit_every")]
    pub edit_every: u32,
}
fn default_ticks() -> u32 {
    64
}
fn default_walk_speed() -> f32 {
    0.5
}
fn default_edit_every() -> u32 {
    8
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ticks: default_ticks(),
            walk_speed: default_walk_speed(),
            edit_every: default_edit_every(),
        }
    }
}

impl HostConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }

    /// Reads `path`, resolving a relative catalog path against its directory.
    pub fn from_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        let mut cfg = Self::from_toml_str(&s)?;
        if let (Some(catalog), Some(dir)) = (cfg.catalog.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }
        Ok(cfg)
    }

    pub fn set_flat(&mut self, flat: bool) {
        if flat {
            self.worldgen.terrain.mode = Mode::Flat;
        }
    }

    pub fn worldgen_params(&self) -> WorldGenParams {
        WorldGenParams::from_config(&self.worldgen)
    }

    pub fn face_lighting(&self) -> FaceLighting {
        FaceLighting::from_config(&self.lighting)
    }

    pub fn block_catalog(&self) -> Result<BlockCatalog, Box<dyn Error>> {
        match &self.catalog {
            Some(path) => BlockCatalog::from_path(path),
            None => Ok(BlockCatalog::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = HostConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.seed, DEFAULT_SEED);
        assert_eq!(cfg.stream, StreamConfig::default());
        assert_eq!(cfg.worldgen_params(), WorldGenParams::default());
        assert_eq!(cfg.face_lighting(), FaceLighting::standard());
        assert_eq!(cfg.session.ticks, 64);
        assert!(cfg.catalog.is_none());
    }

    #[test]
    fn tables_override_their_sections() {
        let cfg = HostConfig::from_toml_str(
            r#"
seed = 7

[stream]
render_distance = 2
max_resident_chunks = 50

[terrain]
mode = "flat"
flat_height = 20

[trees]
enable = false

[lighting]
scheme = "dramatic"

[session]
ticks = 3
"#,
        )
        .unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.stream.render_distance, 2);
        assert_eq!(cfg.stream.max_resident_chunks, 50);
        assert_eq!(cfg.stream.max_chunk_y, 11);
        let params = cfg.worldgen_params();
        assert!(params.flat);
        assert_eq!(params.flat_height, 20);
        assert!(!params.trees_enable);
        assert_eq!(cfg.face_lighting(), FaceLighting::dramatic());
        assert_eq!(cfg.session.ticks, 3);
        assert_eq!(cfg.session.edit_every, 8);
    }

    #[test]
    fn flat_flag_switches_mode() {
        let mut cfg = HostConfig::default();
        cfg.set_flat(false);
        assert!(!cfg.worldgen_params().flat);
        cfg.set_flat(true);
        assert!(cfg.worldgen_params().flat);
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(HostConfig::from_toml_str("seed = \"abc\"").is_err());
        assert!(HostConfig::from_toml_str("[terrain]\nmode = \"hilly\"").is_err());
    }
}
