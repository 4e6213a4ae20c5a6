use voxmine_geom::{Aabb, IVec3, Vec3};

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-6
}

fn vapprox(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

#[test]
fn floor_handles_negative_coordinates() {
    assert_eq!(Vec3::new(-0.1, 0.0, 15.99).floor(), IVec3::new(-1, 0, 15));
    assert_eq!(Vec3::new(-16.0, -16.5, 16.0).floor(), IVec3::new(-16, -17, 16));
}

#[test]
fn normalized_zero_is_zero() {
    assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    assert!(vapprox(Vec3::new(0.0, -3.0, 0.0).normalized(), Vec3::DOWN));
}

#[test]
fn axis_accessors_round_trip() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v.axis(0), 1.0);
    assert_eq!(v.axis(1), 2.0);
    assert_eq!(v.axis(2), 3.0);
    assert_eq!(v.with_axis(1, 9.0), Vec3::new(1.0, 9.0, 3.0));
}

#[test]
fn center_size_box() {
    let b = Aabb::from_center_size(Vec3::new(0.5, 0.9, 0.5), Vec3::new(0.8, 1.8, 0.8));
    assert!(vapprox(b.min, Vec3::new(0.1, 0.0, 0.1)));
    assert!(vapprox(b.max, Vec3::new(0.9, 1.8, 0.9)));
    assert!(vapprox(b.center(), Vec3::new(0.5, 0.9, 0.5)));
    assert!(vapprox(b.size(), Vec3::new(0.8, 1.8, 0.8)));
}

#[test]
fn touching_boxes_do_not_intersect() {
    let floor = Aabb::unit_block(IVec3::new(0, 0, 0));
    let above = Aabb::new(Vec3::new(0.1, 1.0, 0.1), Vec3::new(0.9, 2.8, 0.9));
    assert!(!floor.intersects(&above));
    let sunk = above.translated(Vec3::new(0.0, -0.01, 0.0));
    assert!(floor.intersects(&sunk));
    assert!(sunk.intersects(&floor));
}

#[test]
fn contains_point_is_inclusive() {
    let b = Aabb::unit_block(IVec3::new(2, 3, 4));
    assert!(b.contains_point(Vec3::new(2.0, 3.0, 4.0)));
    assert!(b.contains_point(Vec3::new(3.0, 4.0, 5.0)));
    assert!(!b.contains_point(Vec3::new(3.01, 3.5, 4.5)));
}
