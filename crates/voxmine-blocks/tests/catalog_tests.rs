use proptest::prelude::*;
use voxmine_blocks::{
    AtlasCell, BlockCatalog, BlockType, Face, FaceLighting, LightingConfig, LightingScheme,
};
use voxmine_geom::IVec3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-6
}

#[test]
fn grass_faces_use_distinct_cells() {
    let cat = BlockCatalog::default();
    assert_eq!(cat.cell(BlockType::Grass, Face::Top), Some(AtlasCell::new(7, 13)));
    assert_eq!(cat.cell(BlockType::Grass, Face::Bottom), Some(AtlasCell::new(2, 15)));
    for face in [Face::Front, Face::Back, Face::Left, Face::Right] {
        assert_eq!(cat.cell(BlockType::Grass, face), Some(AtlasCell::new(3, 15)));
    }
}

#[test]
fn uv_transform_matches_atlas_tiling() {
    let uvs = AtlasCell::new(2, 15).uvs();
    assert!(approx_eq(uvs[0].0, 3.0 / 16.0) && approx_eq(uvs[0].1, 1.0));
    assert!(approx_eq(uvs[1].0, 2.0 / 16.0) && approx_eq(uvs[1].1, 1.0));
    assert!(approx_eq(uvs[2].0, 2.0 / 16.0) && approx_eq(uvs[2].1, 15.0 / 16.0));
    assert!(approx_eq(uvs[3].0, 3.0 / 16.0) && approx_eq(uvs[3].1, 15.0 / 16.0));
}

#[test]
fn air_is_untextured_and_passable() {
    let cat = BlockCatalog::default();
    assert_eq!(cat.uvs(BlockType::Air, Face::Top), [(0.0, 0.0); 4]);
    assert!(!cat.is_solid(BlockType::Air));
    for b in BlockType::ALL.into_iter().filter(|b| !b.is_air()) {
        assert!(cat.is_solid(b), "{b} should be solid");
    }
    assert!(!cat.is_opaque(BlockType::OakLeaves));
    assert!(cat.is_opaque(BlockType::Stone));
}

#[test]
fn toml_override_layers_on_defaults() {
    let cat = BlockCatalog::from_toml_str(
        r#"
        [blocks.sand]
        all = [0, 0]
        top = [9, 9]

        [blocks.oak_leaves]
        solid = false
        "#,
    )
    .unwrap();
    assert_eq!(cat.cell(BlockType::Sand, Face::Top), Some(AtlasCell::new(9, 9)));
    assert_eq!(cat.cell(BlockType::Sand, Face::Left), Some(AtlasCell::new(0, 0)));
    assert!(!cat.is_solid(BlockType::OakLeaves));
    assert_eq!(cat.cell(BlockType::Stone, Face::Top), Some(AtlasCell::new(1, 15)));
}

#[test]
fn toml_rejects_unknown_and_air_entries() {
    assert!(BlockCatalog::from_toml_str("[blocks.obsidian]\nall = [1, 1]\n").is_err());
    assert!(BlockCatalog::from_toml_str("[blocks.air]\nsolid = true\n").is_err());
    assert!(BlockCatalog::from_toml_str("").is_ok());
}

#[test]
fn block_names_parse_back() {
    for b in BlockType::ALL {
        assert_eq!(b.name().parse::<BlockType>(), Ok(b));
    }
    assert_eq!("OAK_LOG".parse::<BlockType>(), Ok(BlockType::OakLog));
    assert!("lava".parse::<BlockType>().is_err());
}

#[test]
fn face_normals_are_consistent() {
    for face in Face::ALL {
        assert_eq!(Face::from_normal(face.normal_i()), Some(face));
        assert_eq!(face.opposite().normal_i(), IVec3::ZERO - face.normal_i());
        assert_eq!(Face::from_index(face.index()), face);
    }
    assert_eq!(Face::from_normal(IVec3::new(0, 1, 0)), Some(Face::Top));
    assert_eq!(Face::from_normal(IVec3::new(0, 0, 1)), Some(Face::Front));
    assert_eq!(Face::from_normal(IVec3::new(-1, 0, 0)), Some(Face::Left));
    assert_eq!(Face::from_normal(IVec3::new(1, 1, 0)), None);
}

#[test]
fn lighting_presets_and_overrides() {
    let std = FaceLighting::standard();
    assert_eq!(std.get(Face::Top), 1.0);
    assert_eq!(std.get(Face::Bottom), 0.4);
    assert!(std.get(Face::Bottom) < std.get(Face::Left));
    let cfg: LightingConfig = toml::from_str("scheme = \"dramatic\"\nbottom = 2.0\n").unwrap();
    assert_eq!(cfg.scheme, LightingScheme::Dramatic);
    let lit = FaceLighting::from_config(&cfg);
    assert_eq!(lit.bottom, 1.0);
    assert_eq!(lit.right, FaceLighting::dramatic().right);
}

proptest! {
    // Every atlas cell yields UVs inside [0,1] spanning exactly one cell
    #[test]
    fn atlas_uvs_stay_in_unit_square(x in 0u8..16, y in 0u8..16) {
        let uvs = AtlasCell::new(x, y).uvs();
        for (u, v) in uvs {
            prop_assert!((0.0..=1.0).contains(&u));
            prop_assert!((0.0..=1.0).contains(&v));
        }
        prop_assert!(approx_eq(uvs[0].0 - uvs[1].0, 1.0 / 16.0));
        prop_assert!(approx_eq(uvs[1].1 - uvs[2].1, 1.0 / 16.0));
    }
}
