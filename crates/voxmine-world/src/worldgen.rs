use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct WorldGenConfig {
    #[serde(default)]
    pub terrain: Terrain,
    #[serde(default)]
    pub trees: Trees,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Normal,
    Flat,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Terrain {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_frequency")]
    pub frequency: f32,
    #[serde(default = "default_base_height")]
    pub base_height: i32,
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
    #[serde(default = "default_flat_height")]
    pub flat_height: i32,
}
fn default_frequency() -> f32 {
    0.01
}
fn default_base_height() -> i32 {
    32
}
fn default_amplitude() -> f32 {
    10.0
}
fn default_flat_height() -> i32 {
    32
}
impl Default for Terrain {
    fn default() -> Self {
        Self {
            mode: Mode::Normal,
            frequency: default_frequency(),
            base_height: default_base_height(),
            amplitude: default_amplitude(),
            flat_height: default_flat_height(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Trees {
    #[serde(default = "default_trees_enable")]
    pub enable: bool,
    #[serde(default = "default_spacing")]
    pub spacing: i32,
    #[serde(default = "default_probability")]
    pub probability: f32,
    #[serde(default = "default_trunk_min")]
    pub trunk_min: i32,
    #[serde(default = "default_trunk_max")]
    pub trunk_max: i32,
    #[serde(default = "default_leaf_radius")]
    pub leaf_radius: i32,
}
fn default_trees_enable() -> bool {
    true
}
fn default_spacing() -> i32 {
    4
}
fn default_probability() -> f32 {
    0.10
}
fn default_trunk_min() -> i32 {
    4
}
fn default_trunk_max() -> i32 {
    5
}
fn default_leaf_radius() -> i32 {
    2
}
impl Default for Trees {
    fn default() -> Self {
        Self {
            enable: default_trees_enable(),
            spacing: default_spacing(),
            probability: default_probability(),
            trunk_min: default_trunk_min(),
            trunk_max: default_trunk_max(),
            leaf_radius: default_leaf_radius(),
        }
    }
}

/// Flattened, validated view of [`WorldGenConfig`] used by the generators.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldGenParams {
    pub flat: bool,
    pub flat_height: i32,
    pub height_frequency: f32,
    pub base_height: i32,
    pub amplitude: f32,
    pub trees_enable: bool,
    pub tree_spacing: i32,
    pub tree_probability: f32,
    pub trunk_min: i32,
    pub trunk_max: i32,
    pub leaf_radius: i32,
}

impl Default for WorldGenParams {
    fn default() -> Self {
        Self::from_config(&WorldGenConfig::default())
    }
}

impl WorldGenParams {
    pub fn from_config(cfg: &WorldGenConfig) -> Self {
        let trunk_min = cfg.trees.trunk_min.max(1);
        Self {
            flat: cfg.terrain.mode == Mode::Flat,
            flat_height: cfg.terrain.flat_height,
            height_frequency: cfg.terrain.frequency,
            base_height: cfg.terrain.base_height,
            amplitude: cfg.terrain.amplitude,
            trees_enable: cfg.trees.enable,
            tree_spacing: cfg.trees.spacing.max(1),
            tree_probability: cfg.trees.probability.clamp(0.0, 1.0),
            trunk_min,
            trunk_max: cfg.trees.trunk_max.max(trunk_min),
            leaf_radius: cfg.trees.leaf_radius.max(0),
        }
    }
}

pub fn load_params_from_path(path: &Path) -> Result<WorldGenParams, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: WorldGenConfig = toml::from_str(&s)?;
    Ok(WorldGenParams::from_config(&cfg))
}
