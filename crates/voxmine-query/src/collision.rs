use voxmine_blocks::BlockCatalog;
use voxmine_chunk::ChunkLookup;
use voxmine_geom::{Aabb, IVec3, Vec3};

pub const DEFAULT_ACTOR_SIZE: Vec3 = Vec3 {
    x: 0.8,
    y: 1.8,
    z: 0.8,
};

/// Axis-aligned box of a moving actor, centered on its position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorBounds {
    pub center: Vec3,
    pub size: Vec3,
}

impl ActorBounds {
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    pub fn player(center: Vec3) -> Self {
        Self::new(center, DEFAULT_ACTOR_SIZE)
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.center, self.size)
    }

    #[inline]
    pub fn at(&self, center: Vec3) -> Self {
        Self::new(center, self.size)
    }
}

/// Resolves actor movement against solid voxels, one axis at a time.
#[derive(Clone, Copy, Debug)]
pub struct CollisionResolver<'a> {
    catalog: &'a BlockCatalog,
    pub size: Vec3,
    pub ground_epsilon: f32,
    pub spawn_attempts: u32,
    pub spawn_fallback_lift: f32,
}

impl<'a> CollisionResolver<'a> {
    pub fn new(catalog: &'a BlockCatalog) -> Self {
        Self {
            catalog,
            size: DEFAULT_ACTOR_SIZE,
            ground_epsilon: 0.01,
            spawn_attempts: 50,
            spawn_fallback_lift: 50.0,
        }
    }

    pub fn with_size(mut self, size: Vec3) -> Self {
        self.size = size;
        self
    }

    /// True if the actor box centered at `center` overlaps any solid voxel.
    /// Touching faces do not count.
    pub fn collides<W: ChunkLookup + ?Sized>(&self, world: &W, center: Vec3) -> bool {
        let bounds = Aabb::from_center_size(center, self.size);
        let lo = bounds.min.floor();
        let hi = IVec3::new(
            bounds.max.x.ceil() as i32,
            bounds.max.y.ceil() as i32,
            bounds.max.z.ceil() as i32,
        );
        for y in lo.y..=hi.y {
            for z in lo.z..=hi.z {
                for x in lo.x..=hi.x {
                    let b = IVec3::new(x, y, z);
                    if self.catalog.is_solid(world.block_at(b))
                        && bounds.intersects(&Aabb::unit_block(b))
                    {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Moves from `current` toward `desired` along X, then Y, then Z, keeping
    /// each axis only if the box stays clear.
    pub fn resolve<W: ChunkLookup + ?Sized>(&self, world: &W, current: Vec3, desired: Vec3) -> Vec3 {
        let mut pos = current;
        for axis in 0..3 {
            let candidate = pos.with_axis(axis, desired.axis(axis));
            if !self.collides(world, candidate) {
                pos = candidate;
            }
        }
        pos
    }

    pub fn is_on_ground<W: ChunkLookup + ?Sized>(&self, world: &W, center: Vec3) -> bool {
        self.collides(world, center - Vec3::new(0.0, self.ground_epsilon, 0.0))
    }

    /// First clear position stepping up one block at a time from `preferred`.
    pub fn find_safe_spawn<W: ChunkLookup + ?Sized>(&self, world: &W, preferred: Vec3) -> Vec3 {
        for i in 0..self.spawn_attempts {
            let candidate = preferred + Vec3::new(0.0, i as f32, 0.0);
            if !self.collides(world, candidate) {
                return candidate;
            }
        }
        log::warn!(
            target: "edit",
            "no clear spawn above ({:.1},{:.1},{:.1}), lifting {}",
            preferred.x,
            preferred.y,
            preferred.z,
            self.spawn_fallback_lift
        );
        preferred + Vec3::new(0.0, self.spawn_fallback_lift, 0.0)
    }
}
