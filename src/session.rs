use voxmine_blocks::BlockType;
use voxmine_geom::Vec3;
use voxmine_query::{
    ActorBounds, CollisionResolver, DEFAULT_ACTOR_SIZE, SpatialQuery, mine_block, place_against,
};
use voxmine_runtime::{UpdateStats, WorldIndex};

use crate::config::SessionConfig;

const GRAVITY: f32 = 0.08;
const TERMINAL_FALL: f32 = 1.0;
const JUMP_SPEED: f32 = 0.42;
const EYE_HEIGHT: f32 = 0.7;

/// Running totals for a scripted session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionSummary {
    pub ticks: u32,
    pub generated: usize,
    pub evicted: usize,
    pub rebuilt: usize,
    pub vegetated: usize,
    pub mined: u32,
    pub placed: u32,
    pub resident: usize,
    pub position: Vec3,
}

impl SessionSummary {
    fn absorb(&mut self, stats: &UpdateStats) {
        self.ticks += 1;
        self.generated += stats.generated;
        self.evicted += stats.evicted;
        self.rebuilt += stats.rebuilt;
        self.vegetated += stats.vegetated;
        self.resident = stats.resident;
    }
}

/// Headless stand-in for the gameplay layer: walks an actor along +X,
/// streams chunks around it, and periodically mines and re-places the block
/// it is looking at.
pub struct Session {
    world: WorldIndex,
    query: SpatialQuery,
    cfg: SessionConfig,
    position: Vec3,
    // Positive while falling, negative while rising.
    fall: f32,
    held: Option<BlockType>,
    summary: SessionSummary,
}

impl Session {
    /// Loads the area around the spawn column and drops the actor onto the
    /// first clear spot above the surface.
    pub fn new(mut world: WorldIndex, cfg: SessionConfig) -> Self {
        let surface = world.generator().column_height(0, 0);
        let preferred = Vec3::new(0.5, surface as f32 + DEFAULT_ACTOR_SIZE.y * 0.5, 0.5);
        let first = world.update(preferred);
        let position = CollisionResolver::new(world.catalog()).find_safe_spawn(&world, preferred);
        log::info!(
            target: "session",
            "spawn at ({:.1},{:.1},{:.1}), {} chunks resident",
            position.x,
            position.y,
            position.z,
            first.resident
        );
        let mut summary = SessionSummary::default();
        summary.absorb(&first);
        summary.position = position;
        Self {
            world,
            query: SpatialQuery::default(),
            cfg,
            position,
            fall: 0.0,
            held: None,
            summary,
        }
    }

    #[inline]
    pub fn world(&self) -> &WorldIndex {
        &self.world
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Runs every configured tick and returns the totals.
    pub fn run(&mut self) -> SessionSummary {
        for _ in 0..self.cfg.ticks {
            self.tick();
        }
        self.summary
    }

    pub fn tick(&mut self) -> UpdateStats {
        let stats = self.world.update(self.position);
        self.summary.absorb(&stats);
        self.step_actor();
        let n = self.summary.ticks;
        if self.cfg.edit_every > 0 && n % self.cfg.edit_every == 0 {
            self.edit();
        }
        self.summary.position = self.position;
        log::debug!(
            target: "session",
            "[tick {}] pos=({:.2},{:.2},{:.2}) resident={} rebuilt={}",
            n,
            self.position.x,
            self.position.y,
            self.position.z,
            stats.resident,
            stats.rebuilt
        );
        stats
    }

    fn step_actor(&mut self) {
        let resolver = CollisionResolver::new(self.world.catalog());
        let grounded = resolver.is_on_ground(&self.world, self.position);
        if grounded && self.fall > 0.0 {
            self.fall = 0.0;
        } else if !grounded {
            self.fall = (self.fall + GRAVITY).min(TERMINAL_FALL);
        }
        let desired = self.position + Vec3::new(self.cfg.walk_speed, -self.fall, 0.0);
        let next = resolver.resolve(&self.world, self.position, desired);
        if grounded && next.x == self.position.x && self.cfg.walk_speed != 0.0 {
            // Blocked while walking: hop.
            self.fall = -JUMP_SPEED;
        }
        if !grounded && next.y == self.position.y && self.fall < 0.0 {
            // Bumped a ceiling.
            self.fall = 0.0;
        }
        self.position = next;
    }

    // Alternates mining the targeted block and placing it back on the face
    // that was hit.
    fn edit(&mut self) {
        let eye = self.position + Vec3::new(0.0, EYE_HEIGHT, 0.0);
        let look = Vec3::new(1.0, -1.0, 0.0);
        let Some(hit) = self.query.raycast_reach(&self.world, eye, look) else {
            return;
        };
        match self.held.take() {
            None => {
                if mine_block(&mut self.world, hit.block) {
                    self.summary.mined += 1;
                    self.held = Some(hit.block_type);
                }
            }
            Some(block) => {
                let actor = ActorBounds::player(self.position);
                if place_against(&mut self.world, &hit, block, Some(&actor)).is_some() {
                    self.summary.placed += 1;
                } else {
                    self.held = Some(block);
                }
            }
        }
    }
}
