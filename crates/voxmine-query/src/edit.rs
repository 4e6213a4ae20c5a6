use voxmine_blocks::BlockType;
use voxmine_chunk::ChunkLookupMut;
use voxmine_geom::{Aabb, IVec3};

use crate::collision::ActorBounds;
use crate::raycast::RayHit;

/// Removes the block at `b`. Fails on air or when the owning chunk is not
/// resident. Dirty chunks are re-meshed before returning.
pub fn mine_block<W: ChunkLookupMut + ?Sized>(world: &mut W, b: IVec3) -> bool {
    if world.block_at(b).is_air() {
        return false;
    }
    let Some(prev) = world.set_block(b, BlockType::Air) else {
        return false;
    };
    let rebuilt = world.rebuild_dirty();
    log::debug!(
        target: "edit",
        "mined {} at ({},{},{}) rebuilt={}",
        prev,
        b.x,
        b.y,
        b.z,
        rebuilt
    );
    true
}

/// Writes `block` into the air cell at `b`. Fails without changes when the
/// cell holds anything else or its chunk cannot be loaded.
pub fn place_block<W: ChunkLookupMut + ?Sized>(world: &mut W, b: IVec3, block: BlockType) -> bool {
    if block.is_air() || !world.set_block_if(b, block, BlockType::is_air) {
        return false;
    }
    let rebuilt = world.rebuild_dirty();
    log::debug!(
        target: "edit",
        "placed {} at ({},{},{}) rebuilt={}",
        block,
        b.x,
        b.y,
        b.z,
        rebuilt
    );
    true
}

/// Cell adjacent to the hit block across the face the ray entered through.
#[inline]
pub fn placement_target(hit: &RayHit) -> IVec3 {
    hit.block + hit.normal
}

/// Places `block` against the face of `hit`, refusing cells the actor occupies.
/// Returns the written cell.
pub fn place_against<W: ChunkLookupMut + ?Sized>(
    world: &mut W,
    hit: &RayHit,
    block: BlockType,
    actor: Option<&ActorBounds>,
) -> Option<IVec3> {
    let target = placement_target(hit);
    if let Some(actor) = actor {
        if actor.aabb().intersects(&Aabb::unit_block(target)) {
            log::debug!(
                target: "edit",
                "refused placement at ({},{},{}): occupied by actor",
                target.x,
                target.y,
                target.z
            );
            return None;
        }
    }
    place_block(world, target, block).then_some(target)
}
