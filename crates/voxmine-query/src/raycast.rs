use voxmine_blocks::{BlockType, Face};
use voxmine_chunk::ChunkLookup;
use voxmine_geom::{IVec3, Vec3};

pub const DEFAULT_STEP: f32 = 0.1;
pub const DEFAULT_REACH: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub block: IVec3,
    pub point: Vec3,
    /// Outward unit normal of the face the ray entered through.
    pub normal: IVec3,
    pub distance: f32,
    pub block_type: BlockType,
    pub face: Face,
}

// Axis with the largest |offset| from the block center; ties go X, then Y, then Z.
fn dominant_axis_normal(point: Vec3, block: IVec3) -> IVec3 {
    let offset = point - (Vec3::from(block) + Vec3::splat(0.5));
    let mut best = None::<(usize, f32)>;
    for axis in 0..3 {
        let v = offset.axis(axis);
        if best.is_none_or(|(_, b)| v.abs() > b.abs()) {
            best = Some((axis, v));
        }
    }
    let (axis, v) = best.unwrap_or((1, 1.0));
    let s = if v < 0.0 { -1 } else { 1 };
    match axis {
        0 => IVec3::new(s, 0, 0),
        1 => IVec3::new(0, s, 0),
        _ => IVec3::new(0, 0, s),
    }
}

// Normal of the face crossed going from `prev` into `block`. A step that cut
// across an edge crossed several faces; the one crossed last along the ray is
// the face of `block` it entered through.
fn entry_normal(prev: Option<IVec3>, block: IVec3, origin: Vec3, dir: Vec3, point: Vec3) -> IVec3 {
    let Some(prev) = prev else {
        return dominant_axis_normal(point, block);
    };
    let d = prev - block;
    let sign = [d.x.signum(), d.y.signum(), d.z.signum()];
    let mut best = None::<(usize, f32)>;
    for axis in 0..3 {
        let dir_a = dir.axis(axis);
        if sign[axis] == 0 || dir_a == 0.0 {
            continue;
        }
        let base = [block.x, block.y, block.z][axis];
        let plane = (if sign[axis] > 0 { base + 1 } else { base }) as f32;
        let t = (plane - origin.axis(axis)) / dir_a;
        if best.is_none_or(|(_, bt)| t > bt) {
            best = Some((axis, t));
        }
    }
    match best {
        Some((0, _)) => IVec3::new(sign[0], 0, 0),
        Some((1, _)) => IVec3::new(0, sign[1], 0),
        Some(_) => IVec3::new(0, 0, sign[2]),
        None => dominant_axis_normal(point, block),
    }
}

/// Marches from `origin` along `dir` in fixed `step`s up to `max_dist`,
/// sampling each new block once, and returns the first non-air one.
pub fn march_first_hit<F>(
    origin: Vec3,
    dir: Vec3,
    max_dist: f32,
    step: f32,
    mut sample: F,
) -> Option<RayHit>
where
    F: FnMut(IVec3) -> BlockType,
{
    let len = dir.length();
    if !(len > 1e-6) || !(step > 0.0) || !(max_dist >= 0.0) {
        return None;
    }
    let d = dir / len;
    let steps = (max_dist / step).floor() as u32;
    let mut prev: Option<IVec3> = None;
    for i in 0..=steps {
        let t = i as f32 * step;
        let p = origin + d * t;
        let b = p.floor();
        if prev == Some(b) {
            continue;
        }
        let block_type = sample(b);
        if !block_type.is_air() {
            let normal = entry_normal(prev, b, origin, d, p);
            return Some(RayHit {
                block: b,
                point: p,
                normal,
                distance: t,
                block_type,
                face: Face::from_normal(normal).unwrap_or(Face::Top),
            });
        }
        prev = Some(b);
    }
    None
}

/// Raycasts and point lookups against resident chunks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpatialQuery {
    pub step: f32,
    pub max_reach: f32,
}

impl Default for SpatialQuery {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            max_reach: DEFAULT_REACH,
        }
    }
}

impl SpatialQuery {
    pub fn raycast<W: ChunkLookup + ?Sized>(
        &self,
        world: &W,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<RayHit> {
        march_first_hit(origin, direction, max_distance, self.step, |b| {
            world.block_at(b)
        })
    }

    /// Raycast limited to the configured reach.
    pub fn raycast_reach<W: ChunkLookup + ?Sized>(
        &self,
        world: &W,
        origin: Vec3,
        direction: Vec3,
    ) -> Option<RayHit> {
        self.raycast(world, origin, direction, self.max_reach)
    }

    #[inline]
    pub fn block_at<W: ChunkLookup + ?Sized>(&self, world: &W, b: IVec3) -> BlockType {
        world.block_at(b)
    }
}
