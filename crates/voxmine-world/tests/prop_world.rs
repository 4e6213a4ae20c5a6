use proptest::prelude::*;
use voxmine_blocks::BlockType;
use voxmine_geom::{IVec3, Vec3};
use voxmine_world::{
    CHUNK_SIZE, ChunkCoord, DEFAULT_SEED, TerrainGenerator, TreePlanner, VoxelGrid,
    WorldGenConfig, WorldGenParams,
};

fn world_f32() -> impl Strategy<Value = f32> {
    -100_000.0f32..100_000.0
}

fn small_i32() -> impl Strategy<Value = i32> {
    -1_000_000i32..=1_000_000
}

proptest! {
    // floor(p / size) survives a trip through the chunk origin
    #[test]
    fn chunk_from_world_is_stable(x in world_f32(), y in world_f32(), z in world_f32()) {
        let c = ChunkCoord::from_world(Vec3::new(x, y, z));
        prop_assert_eq!(ChunkCoord::from_world(c.origin_f()), c);
    }

    // Block and float paths agree on which chunk owns a cell
    #[test]
    fn block_and_world_mapping_agree(x in small_i32(), y in small_i32(), z in small_i32()) {
        let b = IVec3::new(x, y, z);
        let c = ChunkCoord::from_block(b);
        prop_assert_eq!(ChunkCoord::from_world(Vec3::from(b) + Vec3::splat(0.5)), c);
        let (lx, ly, lz) = ChunkCoord::local_of(b);
        prop_assert!(lx < CHUNK_SIZE && ly < CHUNK_SIZE && lz < CHUNK_SIZE);
        prop_assert_eq!(c.origin() + IVec3::new(lx as i32, ly as i32, lz as i32), b);
    }

    // idx maps each local cell to a unique in-range slot
    #[test]
    fn grid_idx_in_range(x in 0usize..CHUNK_SIZE, y in 0usize..CHUNK_SIZE, z in 0usize..CHUNK_SIZE) {
        let i = VoxelGrid::idx(x, y, z);
        prop_assert!(i < CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE);
        let mut g = VoxelGrid::new_air();
        prop_assert_eq!(g.set(x, y, z, BlockType::Sand), BlockType::Air);
        prop_assert_eq!(g.as_slice()[i], BlockType::Sand);
        prop_assert_eq!(g.count_non_air(), 1);
    }

    // Same coordinate and seed produce the same grid
    #[test]
    fn generation_is_deterministic(cx in -64i32..64, cy in -1i32..4, cz in -64i32..64, seed in any::<i32>()) {
        let a = TerrainGenerator::new(seed, WorldGenParams::default());
        let b = TerrainGenerator::new(seed, WorldGenParams::default());
        let c = ChunkCoord::new(cx, cy, cz);
        prop_assert_eq!(a.generate(c), b.generate(c));
    }

    // Tree sites land on the lattice inside the chunk and repeat exactly
    #[test]
    fn tree_sites_are_deterministic(cx in -64i32..64, cz in -64i32..64) {
        let planner = TreePlanner::new(DEFAULT_SEED, &WorldGenParams::default());
        let coord = ChunkCoord::new(cx, 0, cz);
        let sites = planner.sites(coord);
        prop_assert_eq!(&sites, &planner.sites(coord));
        for s in sites {
            prop_assert_eq!(ChunkCoord::from_block(IVec3::new(s.wx, 0, s.wz)), coord);
            prop_assert_eq!(s.wx.rem_euclid(4), 0);
            prop_assert_eq!(s.wz.rem_euclid(4), 0);
            prop_assert!((4..=5).contains(&s.trunk_height));
        }
    }
}

#[test]
fn columns_follow_layering_rule() {
    let generator = TerrainGenerator::new(DEFAULT_SEED, WorldGenParams::default());
    for (wx, wz) in [(0, 0), (5, -7), (-33, 18), (100, 100)] {
        let h = generator.column_height(wx, wz);
        assert!((22..=42).contains(&h), "height {h} out of range");
        assert_eq!(generator.block_at(wx, h - 1, wz), BlockType::Grass);
        assert_eq!(generator.block_at(wx, h - 2, wz), BlockType::Dirt);
        assert_eq!(generator.block_at(wx, h - 3, wz), BlockType::Dirt);
        assert_eq!(generator.block_at(wx, h - 4, wz), BlockType::Stone);
        assert_eq!(generator.block_at(wx, h, wz), BlockType::Air);
    }
}

#[test]
fn generated_grid_matches_point_queries_across_borders() {
    let generator = TerrainGenerator::new(DEFAULT_SEED, WorldGenParams::default());
    for coord in [ChunkCoord::new(0, 1, 0), ChunkCoord::new(-1, 1, 0), ChunkCoord::new(0, 2, -1)] {
        let grid = generator.generate(coord);
        let o = coord.origin();
        for (x, y, z) in [(0, 0, 0), (15, 15, 15), (15, 3, 0), (0, 9, 15), (7, 7, 7)] {
            let expect = generator.block_at(o.x + x as i32, o.y + y as i32, o.z + z as i32);
            assert_eq!(grid.get(x, y, z), expect);
        }
    }
}

#[test]
fn sky_chunks_are_empty_and_deep_chunks_full() {
    let generator = TerrainGenerator::new(DEFAULT_SEED, WorldGenParams::default());
    assert!(generator.generate(ChunkCoord::new(0, 5, 0)).is_all_air());
    let deep = generator.generate(ChunkCoord::new(3, 0, -2));
    assert_eq!(deep.count_non_air(), CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE);
    assert!(deep.as_slice().iter().all(|b| *b == BlockType::Stone));
}

#[test]
fn flat_world_has_uniform_surface() {
    let generator = TerrainGenerator::flat(7, 32);
    let grid = generator.generate(ChunkCoord::new(4, 1, -9));
    for z in 0..CHUNK_SIZE {
        for x in 0..CHUNK_SIZE {
            assert_eq!(grid.get(x, 15, z), BlockType::Grass);
            assert_eq!(grid.get(x, 14, z), BlockType::Dirt);
            assert_eq!(grid.get(x, 12, z), BlockType::Stone);
        }
    }
}

#[test]
fn config_defaults_and_overrides() {
    let cfg: WorldGenConfig = toml::from_str(
        r#"
        [terrain]
        mode = "flat"
        flat_height = 20

        [trees]
        probability = 3.0
        trunk_min = 6
        trunk_max = 2
        "#,
    )
    .unwrap();
    let p = WorldGenParams::from_config(&cfg);
    assert!(p.flat);
    assert_eq!(p.flat_height, 20);
    assert_eq!(p.height_frequency, 0.01);
    assert_eq!(p.tree_probability, 1.0);
    assert_eq!(p.trunk_min, 6);
    assert_eq!(p.trunk_max, 6);
    let generator = TerrainGenerator::new(1, p);
    assert_eq!(generator.column_height(-500, 77), 20);
}

#[test]
fn disabled_trees_plan_nothing() {
    let params = WorldGenParams {
        trees_enable: false,
        ..WorldGenParams::default()
    };
    let planner = TreePlanner::new(DEFAULT_SEED, &params);
    for cx in -4..4 {
        assert!(planner.sites(ChunkCoord::new(cx, 0, cx)).is_empty());
    }
}

#[test]
fn certain_trees_fill_the_lattice() {
    let params = WorldGenParams {
        tree_probability: 1.0,
        ..WorldGenParams::default()
    };
    let planner = TreePlanner::new(DEFAULT_SEED, &params);
    assert_eq!(planner.sites(ChunkCoord::new(0, 0, 0)).len(), 16);
    assert_eq!(planner.sites(ChunkCoord::new(-1, 0, -3)).len(), 16);
}
