//! End-to-end checks of the Euclidean kernel through its public API.

use geokernel::{
    dominant, least_dominant, least_dominant_of, Axis, Direction, KernelError, Plane, Point,
    PointOP3, Vector,
};

fn init_logging() {
    let _ = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Trace)
        .init();
}

#[test]
fn test_plane_through_unit_points() {
    let pln = Plane::from_three_points(
        &Point::from_coords(1.0, 0.0, 0.0),
        &Point::from_coords(0.0, 1.0, 0.0),
        &Point::from_coords(0.0, 0.0, 1.0),
    );
    let foot = pln.closest_point_to_origin().unwrap();
    let third = 1.0 / 3.0;
    assert_eq!(foot, Point::from_coords(third, third, third));

    let op = pln.closest_point_projective().unwrap();
    assert_eq!(op, PointOP3::new(-1.0, -1.0, -1.0, -third));
}

#[test]
fn test_foot_lies_on_plane_and_is_perpendicular() {
    let p1 = Point::from_coords(2.0, 0.5, -1.0);
    let p2 = Point::from_coords(-1.0, 3.0, 2.0);
    let p3 = Point::from_coords(4.0, 1.0, 0.0);
    let pln = Plane::from_three_points(&p1, &p2, &p3);
    let foot = pln.closest_point_to_origin().unwrap();

    let on_plane = pln.normal().dot(&foot.to_vector()) + pln.offset();
    assert!(on_plane.abs() < 1e-10);

    // foot - origin is parallel to the normal
    let c = foot.to_vector().cross(pln.normal());
    assert!(c.norm() < 1e-10);
}

#[test]
fn test_reversed_point_order_gives_same_plane() {
    let p1 = Point::from_coords(1.0, 2.0, 3.0);
    let p2 = Point::from_coords(-2.0, 0.0, 1.0);
    let p3 = Point::from_coords(0.0, 5.0, -1.0);
    let a = Plane::from_three_points(&p1, &p2, &p3);
    let b = Plane::from_three_points(&p1, &p3, &p2);
    assert_eq!(*b.normal(), -*a.normal());
    assert!(a.is_projectively_equal(&b));
}

#[test]
fn test_reversed_point_order_at_large_coordinates() {
    let p1 = Point::from_coords(1e70, 0.0, 0.0);
    let p2 = Point::from_coords(0.0, 1e70, 0.0);
    let p3 = Point::from_coords(0.0, 0.0, 1e70);
    let a = Plane::from_three_points(&p1, &p2, &p3);
    let b = Plane::from_three_points(&p3, &p2, &p1);
    assert_eq!(*b.normal(), -*a.normal());
    assert!(a.is_projectively_equal(&b));
    assert!(b.is_projectively_equal(&a));

    let shifted = Plane::new(*a.normal(), 2.0 * a.offset());
    assert!(!a.is_projectively_equal(&shifted));
}

#[test]
fn test_tiny_planes_keep_their_identity() {
    let a = Plane::new(Vector::from_coords(1e-170, 1e-170, 0.0), 0.0);
    let b = Plane::new(Vector::from_coords(1e-170, 2e-170, 0.0), 0.0);
    let c = Plane::new(Vector::from_coords(-7e-170, -7e-170, 0.0), 0.0);
    assert!(!a.is_projectively_equal(&b));
    assert!(a.is_projectively_equal(&c));
}

#[test]
fn test_plane_projective_equality() {
    let a = Plane::new(Vector::from_coords(0.0, 0.0, 1.0), 0.0);
    let b = Plane::new(Vector::from_coords(0.0, 0.0, -2.0), 0.0);
    let c = Plane::new(Vector::from_coords(0.0, 0.0, 1.0), 1.0);
    assert!(a.is_projectively_equal(&b));
    assert!(!a.is_projectively_equal(&c));
}

#[test]
fn test_degenerate_plane_fails_on_use() {
    init_logging();
    let p = Point::from_coords(1.0, 2.0, 3.0);
    let pln = Plane::from_three_points(&p, &p, &Point::from_coords(0.0, 0.0, 0.0));
    match pln.closest_point_to_origin() {
        Err(KernelError::DivisionByZero(op)) => {
            assert_eq!(op, "Plane::closest_point_to_origin")
        }
        other => panic!("expected division error, got {:?}", other),
    }
}

#[test]
fn test_normalize_vs_direction_on_zero() {
    init_logging();
    let zero = Vector::from_coords(0.0, 0.0, 0.0);
    assert!(zero.normalize().is_err());
    assert_eq!(*Direction::new(zero).unit(), zero);
}

#[test]
fn test_cross_basis() {
    let k = Vector::from_coords(1.0, 0.0, 0.0).cross(&Vector::from_coords(0.0, 1.0, 0.0));
    assert_eq!(k, Vector::from_coords(0.0, 0.0, 1.0));
}

#[test]
fn test_direction_end_point_on_unit_sphere() {
    let d = Direction::from_coords(-2.0, 3.0, 6.0);
    let p = d.end_point();
    assert!((p.distance(&Point::ORIGIN) - 1.0).abs() < 1e-12);
    assert!((p.x() + 2.0 / 7.0).abs() < 1e-12);
}

#[test]
fn test_direction_add_renormalizes() {
    // (e1 + e2) resolves to (h, h, 0) before e3 is added
    let d = Direction::e1() + Direction::e2() + Direction::e3();
    let h = std::f64::consts::FRAC_1_SQRT_2;
    let [x, y, z] = <[f64; 3]>::from(&d);
    assert!((x - 0.5).abs() < 1e-12);
    assert!((y - 0.5).abs() < 1e-12);
    assert!((z - h).abs() < 1e-12);
}

#[test]
fn test_dominance_ties_and_zero() {
    assert_eq!(dominant(1.0, 1.0, 0.0), Axis::PosX);
    assert_eq!(dominant(0.0, 0.0, 0.0), Axis::NegX);
    assert_eq!(least_dominant(1.0, 1.0, 0.0), Axis::PosZ);
    assert_eq!(least_dominant(0.0, 0.0, 0.0), Axis::PosX);
}

#[test]
fn test_least_dominant_of_plane_normal() {
    let pln = Plane::new(Vector::from_coords(0.2, -0.9, 0.4), 1.0);
    let axis = least_dominant_of(pln.normal());
    assert_eq!(axis, Axis::PosX);
    assert_eq!(Vector::from(axis), Vector::E1);
}
