//! Spatial queries against resident chunks: raycasts, block edits, collision.
#![forbid(unsafe_code)]

mod collision;
mod edit;
mod raycast;

pub use collision::{ActorBounds, CollisionResolver, DEFAULT_ACTOR_SIZE};
pub use edit::{mine_block, place_against, place_block, placement_target};
pub use raycast::{DEFAULT_REACH, DEFAULT_STEP, RayHit, SpatialQuery, march_first_hit};
