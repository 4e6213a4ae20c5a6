use serde::Deserialize;

use crate::types::Face;

/// Static per-face light scalar applied to every vertex of a face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceLighting {
    pub top: f32,
    pub bottom: f32,
    pub front: f32,
    pub back: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for FaceLighting {
    fn default() -> Self {
        Self::standard()
    }
}

impl FaceLighting {
    pub const fn standard() -> Self {
        Self {
            top: 1.0,
            bottom: 0.4,
            front: 0.8,
            back: 0.8,
            left: 0.6,
            right: 0.6,
        }
    }

    /// Higher contrast between faces; the sun sits toward front/left.
    pub const fn dramatic() -> Self {
        Self {
            top: 1.0,
            bottom: 0.3,
            front: 0.85,
            back: 0.65,
            left: 0.75,
            right: 0.55,
        }
    }

    #[inline]
    pub fn get(&self, face: Face) -> f32 {
        match face {
            Face::Top => self.top,
            Face::Bottom => self.bottom,
            Face::Front => self.front,
            Face::Back => self.back,
            Face::Left => self.left,
            Face::Right => self.right,
        }
    }

    pub fn from_config(cfg: &LightingConfig) -> Self {
        let base = match cfg.scheme {
            LightingScheme::Standard => Self::standard(),
            LightingScheme::Dramatic => Self::dramatic(),
        };
        let pick = |v: Option<f32>, d: f32| v.map(|x| x.clamp(0.0, 1.0)).unwrap_or(d);
        Self {
            top: pick(cfg.top, base.top),
            bottom: pick(cfg.bottom, base.bottom),
            front: pick(cfg.front, base.front),
            back: pick(cfg.back, base.back),
            left: pick(cfg.left, base.left),
            right: pick(cfg.right, base.right),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LightingScheme {
    #[default]
    Standard,
    Dramatic,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct LightingConfig {
    #[serde(default)]
    pub scheme: LightingScheme,
    pub top: Option<f32>,
    pub bottom: Option<f32>,
    pub front: Option<f32>,
    pub back: Option<f32>,
    pub left: Option<f32>,
    pub right: Option<f32>,
}
