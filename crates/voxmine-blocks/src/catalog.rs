use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::types::{BlockType, Face};

/// Number of cells along each edge of the block texture atlas.
pub const ATLAS_CELLS: f32 = 16.0;

/// Cell coordinate inside the 16x16 texture atlas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AtlasCell {
    pub x: u8,
    pub y: u8,
}

impl AtlasCell {
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Quad UVs in emission order: top-right, top-left, bottom-left, bottom-right.
    #[inline]
    pub fn uvs(self) -> [(f32, f32); 4] {
        let x = self.x as f32;
        let y = self.y as f32;
        [
            ((x + 1.0) / ATLAS_CELLS, (y + 1.0) / ATLAS_CELLS),
            (x / ATLAS_CELLS, (y + 1.0) / ATLAS_CELLS),
            (x / ATLAS_CELLS, y / ATLAS_CELLS),
            ((x + 1.0) / ATLAS_CELLS, y / ATLAS_CELLS),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockDef {
    /// Atlas cell per face, indexed by `Face::index()`. `None` means untextured.
    pub faces: Option<[AtlasCell; 6]>,
    pub solid: bool,
    pub opaque: bool,
}

impl BlockDef {
    pub const EMPTY: BlockDef = BlockDef {
        faces: None,
        solid: false,
        opaque: false,
    };

    const fn uniform(cell: AtlasCell) -> Self {
        Self {
            faces: Some([cell; 6]),
            solid: true,
            opaque: true,
        }
    }

    const fn column(top: AtlasCell, bottom: AtlasCell, side: AtlasCell) -> Self {
        Self {
            faces: Some([top, bottom, side, side, side, side]),
            solid: true,
            opaque: true,
        }
    }
}

/// Per-block surface attributes: atlas cell per face, solidity, opacity.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockCatalog {
    defs: [BlockDef; BlockType::COUNT],
}

impl Default for BlockCatalog {
    fn default() -> Self {
        let mut defs = [BlockDef::EMPTY; BlockType::COUNT];
        defs[BlockType::Stone.index()] = BlockDef::uniform(AtlasCell::new(1, 15));
        defs[BlockType::Dirt.index()] = BlockDef::uniform(AtlasCell::new(2, 15));
        defs[BlockType::Grass.index()] = BlockDef::column(
            AtlasCell::new(7, 13),
            AtlasCell::new(2, 15),
            AtlasCell::new(3, 15),
        );
        defs[BlockType::OakLog.index()] = BlockDef::column(
            AtlasCell::new(5, 14),
            AtlasCell::new(5, 14),
            AtlasCell::new(4, 14),
        );
        defs[BlockType::OakLeaves.index()] = BlockDef {
            opaque: false,
            ..BlockDef::uniform(AtlasCell::new(4, 12))
        };
        defs[BlockType::Sand.index()] = BlockDef::uniform(AtlasCell::new(2, 14));
        defs[BlockType::Bedrock.index()] = BlockDef::uniform(AtlasCell::new(1, 14));
        Self { defs }
    }
}

impl BlockCatalog {
    #[inline]
    pub fn def(&self, block: BlockType) -> &BlockDef {
        &self.defs[block.index()]
    }

    #[inline]
    pub fn cell(&self, block: BlockType, face: Face) -> Option<AtlasCell> {
        self.def(block).faces.map(|f| f[face.index()])
    }

    /// UVs for one face of a block; untextured blocks map to four zero UVs.
    #[inline]
    pub fn uvs(&self, block: BlockType, face: Face) -> [(f32, f32); 4] {
        match self.cell(block, face) {
            Some(cell) => cell.uvs(),
            None => [(0.0, 0.0); 4],
        }
    }

    #[inline]
    pub fn is_solid(&self, block: BlockType) -> bool {
        self.def(block).solid
    }

    #[inline]
    pub fn is_opaque(&self, block: BlockType) -> bool {
        self.def(block).opaque
    }

    /// Builds the default catalog with the entries in `toml_str` layered on top.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: CatalogConfig = toml::from_str(toml_str)?;
        let mut catalog = BlockCatalog::default();
        let mut entries: Vec<(String, BlockEntry)> = cfg.blocks.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, entry) in entries {
            let block: BlockType = key.parse()?;
            if block.is_air() {
                return Err("the air entry cannot be overridden".into());
            }
            catalog.apply(block, entry);
        }
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    fn apply(&mut self, block: BlockType, entry: BlockEntry) {
        let def = &mut self.defs[block.index()];
        let mut faces = def.faces.unwrap_or([AtlasCell::default(); 6]);
        let cell = |c: [u8; 2]| AtlasCell::new(c[0], c[1]);
        if let Some(all) = entry.all {
            faces = [cell(all); 6];
        }
        if let Some(sides) = entry.sides {
            for face in Face::ALL.into_iter().filter(|f| f.is_side()) {
                faces[face.index()] = cell(sides);
            }
        }
        let singles = [
            (Face::Top, entry.top),
            (Face::Bottom, entry.bottom),
            (Face::Front, entry.front),
            (Face::Back, entry.back),
            (Face::Left, entry.left),
            (Face::Right, entry.right),
        ];
        for (face, c) in singles {
            if let Some(c) = c {
                faces[face.index()] = cell(c);
            }
        }
        def.faces = Some(faces);
        if let Some(solid) = entry.solid {
            def.solid = solid;
        }
        if let Some(opaque) = entry.opaque {
            def.opaque = opaque;
        }
    }
}

// --- Config ---

#[derive(Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub blocks: HashMap<String, BlockEntry>,
}

// Detailed: grass = { top = [7, 13], bottom = [2, 15], sides = [3, 15] }
#[derive(Deserialize, Default)]
pub struct BlockEntry {
    pub all: Option<[u8; 2]>,
    pub sides: Option<[u8; 2]>,
    pub top: Option<[u8; 2]>,
    pub bottom: Option<[u8; 2]>,
    pub front: Option<[u8; 2]>,
    pub back: Option<[u8; 2]>,
    pub left: Option<[u8; 2]>,
    pub right: Option<[u8; 2]>,
    pub solid: Option<bool>,
    pub opaque: Option<bool>,
}
