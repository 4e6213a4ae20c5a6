use voxmine_blocks::Face;
use voxmine_geom::Vec3;

/// Order faces are tested in for each voxel.
pub const FACE_ORDER: [Face; 6] = [
    Face::Left,
    Face::Right,
    Face::Bottom,
    Face::Top,
    Face::Back,
    Face::Front,
];

// Unit-cube corner offsets per face, counter-clockwise seen from outside.
// Corner order lines up with `AtlasCell::uvs`: top-right, top-left, bottom-left, bottom-right.
const TOP: [[f32; 3]; 4] = [[1.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0]];
const BOTTOM: [[f32; 3]; 4] = [[1.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
const FRONT: [[f32; 3]; 4] = [[1.0, 1.0, 1.0], [0.0, 1.0, 1.0], [0.0, 0.0, 1.0], [1.0, 0.0, 1.0]];
const BACK: [[f32; 3]; 4] = [[0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 0.0]];
const LEFT: [[f32; 3]; 4] = [[0.0, 1.0, 1.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
const RIGHT: [[f32; 3]; 4] = [[1.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0], [1.0, 0.0, 0.0]];

/// World-space corners of `face` on the voxel whose minimum corner is `at`.
#[inline]
pub fn face_corners(face: Face, at: Vec3) -> [Vec3; 4] {
    let table = match face {
        Face::Top => TOP,
        Face::Bottom => BOTTOM,
        Face::Front => FRONT,
        Face::Back => BACK,
        Face::Left => LEFT,
        Face::Right => RIGHT,
    };
    table.map(|[x, y, z]| at + Vec3::new(x, y, z))
}
