use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use voxmine_geom::{IVec3, Vec3};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BlockType {
    #[default]
    Air = 0,
    Stone = 1,
    Dirt = 2,
    Grass = 3,
    OakLog = 4,
    OakLeaves = 5,
    Sand = 6,
    Bedrock = 7,
}

impl BlockType {
    pub const COUNT: usize = 8;
    pub const ALL: [BlockType; Self::COUNT] = [
        BlockType::Air,
        BlockType::Stone,
        BlockType::Dirt,
        BlockType::Grass,
        BlockType::OakLog,
        BlockType::OakLeaves,
        BlockType::Sand,
        BlockType::Bedrock,
    ];

    #[inline]
    pub fn is_air(self) -> bool {
        self == BlockType::Air
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            BlockType::Air => "air",
            BlockType::Stone => "stone",
            BlockType::Dirt => "dirt",
            BlockType::Grass => "grass",
            BlockType::OakLog => "oak_log",
            BlockType::OakLeaves => "oak_leaves",
            BlockType::Sand => "sand",
            BlockType::Bedrock => "bedrock",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownBlock(pub String);

impl fmt::Display for UnknownBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown block type '{}'", self.0)
    }
}

impl Error for UnknownBlock {}

impl FromStr for BlockType {
    type Err = UnknownBlock;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        BlockType::ALL
            .into_iter()
            .find(|b| b.name() == key)
            .ok_or_else(|| UnknownBlock(s.to_string()))
    }
}

/// One of the six axis-aligned faces of a voxel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    Top = 0,
    Bottom = 1,
    Front = 2,
    Back = 3,
    Left = 4,
    Right = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index `[0..6)` back into a `Face` value.
    /// Falls back to `Top` for out-of-range indices.
    #[inline]
    pub fn from_index(i: usize) -> Face {
        match i {
            0 => Face::Top,
            1 => Face::Bottom,
            2 => Face::Front,
            3 => Face::Back,
            4 => Face::Left,
            5 => Face::Right,
            _ => Face::Top,
        }
    }

    /// Integer grid delta when stepping out through this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::Top => (0, 1, 0),
            Face::Bottom => (0, -1, 0),
            Face::Front => (0, 0, 1),
            Face::Back => (0, 0, -1),
            Face::Left => (-1, 0, 0),
            Face::Right => (1, 0, 0),
        }
    }

    #[inline]
    pub fn normal_i(self) -> IVec3 {
        self.delta().into()
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        Vec3::from(self.normal_i())
    }

    /// Face whose outward normal is the given unit axis vector.
    pub fn from_normal(n: IVec3) -> Option<Face> {
        Face::ALL.into_iter().find(|f| f.normal_i() == n)
    }

    #[inline]
    pub fn opposite(self) -> Face {
        match self {
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
        }
    }

    #[inline]
    pub fn is_side(self) -> bool {
        !matches!(self, Face::Top | Face::Bottom)
    }
}
