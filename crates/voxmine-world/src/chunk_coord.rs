use voxmine_geom::{IVec3, Vec3};

use crate::{CHUNK_SIZE, CHUNK_SIZE_I32};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32, cz: i32) -> Self {
        Self { cx, cy, cz }
    }

    /// Chunk containing a world-space point: `floor(p / CHUNK_SIZE)` per axis.
    #[inline]
    pub fn from_world(p: Vec3) -> Self {
        let s = CHUNK_SIZE as f32;
        Self {
            cx: (p.x / s).floor() as i32,
            cy: (p.y / s).floor() as i32,
            cz: (p.z / s).floor() as i32,
        }
    }

    /// Chunk containing an integer block coordinate.
    #[inline]
    pub fn from_block(b: IVec3) -> Self {
        Self {
            cx: b.x.div_euclid(CHUNK_SIZE_I32),
            cy: b.y.div_euclid(CHUNK_SIZE_I32),
            cz: b.z.div_euclid(CHUNK_SIZE_I32),
        }
    }

    /// Local `(x, y, z)` index of a world block inside the chunk that contains it.
    #[inline]
    pub fn local_of(b: IVec3) -> (usize, usize, usize) {
        (
            b.x.rem_euclid(CHUNK_SIZE_I32) as usize,
            b.y.rem_euclid(CHUNK_SIZE_I32) as usize,
            b.z.rem_euclid(CHUNK_SIZE_I32) as usize,
        )
    }

    /// World block coordinate of local cell `(0, 0, 0)`.
    #[inline]
    pub fn origin(self) -> IVec3 {
        IVec3::new(
            self.cx * CHUNK_SIZE_I32,
            self.cy * CHUNK_SIZE_I32,
            self.cz * CHUNK_SIZE_I32,
        )
    }

    #[inline]
    pub fn origin_f(self) -> Vec3 {
        Vec3::from(self.origin())
    }

    #[inline]
    pub fn with_y(self, cy: i32) -> Self {
        Self { cy, ..self }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            cx: self.cx + dx,
            cy: self.cy + dy,
            cz: self.cz + dz,
        }
    }

    /// Larger of the x and z distances to `other`.
    #[inline]
    pub fn horizontal_distance(self, other: ChunkCoord) -> i32 {
        (self.cx - other.cx).abs().max((self.cz - other.cz).abs())
    }

    /// The six face-adjacent coordinates.
    #[inline]
    pub fn neighbors(self) -> [ChunkCoord; 6] {
        [
            self.offset(1, 0, 0),
            self.offset(-1, 0, 0),
            self.offset(0, 1, 0),
            self.offset(0, -1, 0),
            self.offset(0, 0, 1),
            self.offset(0, 0, -1),
        ]
    }

    #[inline]
    pub fn distance_sq(self, other: ChunkCoord) -> i64 {
        let dx = i64::from(self.cx - other.cx);
        let dy = i64::from(self.cy - other.cy);
        let dz = i64::from(self.cz - other.cz);
        dx * dx + dy * dy + dz * dz
    }
}

impl From<(i32, i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<ChunkCoord> for (i32, i32, i32) {
    fn from(value: ChunkCoord) -> Self {
        (value.cx, value.cy, value.cz)
    }
}
