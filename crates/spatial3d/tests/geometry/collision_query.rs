use spatial3d::bounding_volume::Aabb;
use spatial3d::math::{Point, Real, Similarity, Vector};
use spatial3d::pipeline::{CollisionQuery, CollisionRegistry, INVALID_ID};
use spatial3d::query::{CollisionPair, QueryError};
use spatial3d::shape::{Ball, Line, Shape, TriMesh, Triangle};
use std::sync::Arc;

fn cube(half_extent: Real) -> Arc<TriMesh> {
    let aabb = Aabb::from_half_extents(Point::origin(), Vector::repeat(half_extent));
    Arc::new(TriMesh::from_aabb(&aabb).unwrap())
}

fn at(x: Real) -> Similarity<Real> {
    Similarity::new(Vector::new(x, 0.0, 0.0), Vector::zeros(), 1.0)
}

/// Three unit cubes along the x axis, at x = 0, 5 and 10.
fn registry() -> CollisionRegistry {
    let mut registry = CollisionRegistry::default();
    registry.update(3, cube(0.5), at(10.0));
    registry.update(1, cube(0.5), at(0.0));
    registry.update(2, cube(0.5), at(5.0));
    registry.rebuild();
    registry
}

fn pairs(b: &[u32]) -> Vec<CollisionPair> {
    b.iter().map(|b| CollisionPair::new(INVALID_ID, *b)).collect()
}

#[test]
fn line_query_selects_nearest_collider() {
    let registry = registry();
    let mut query = CollisionQuery::new(&registry);

    let ray = Line::ray(Point::new(-10.0, 0.1, 0.2), Vector::x());
    assert!(query.query(&Shape::from(ray)));
    assert_eq!(query.id(), 1);
    // Enters through the -x face, exits through the +x face.
    assert_eq!(query.pairs(), &pairs(&[8, 11])[..]);
    assert_eq!(query.fraction_before(), None);
    assert_eq!(query.fraction_contact(), None);

    let ray = Line::ray(Point::new(2.5, 0.1, 0.2), Vector::x());
    assert!(query.query(&Shape::from(ray)));
    assert_eq!(query.id(), 2);

    let ray = Line::ray(Point::new(20.0, 0.1, 0.2), -Vector::x());
    assert!(query.query(&Shape::from(ray)));
    assert_eq!(query.id(), 3);
    // Enters through the +x face.
    assert_eq!(query.pairs(), &pairs(&[8, 11])[..]);
    let (_, pos) = query.collider();
    assert_eq!(*pos, at(10.0));

    let segment = Line::segment(Point::new(1.0, 0.0, 0.0), Point::new(4.0, 0.0, 0.0));
    assert!(!query.query(&Shape::from(segment)));
    assert!(query.result().is_none());
}

#[test]
fn ray_query_on_collider_behind_its_origin() {
    // A single wall on the negative side of the collider origin.
    let wall = TriMesh::from_triangles(vec![Triangle::new(
        Point::new(-0.5, -1.0, -1.0),
        Point::new(-0.5, 1.0, -1.0),
        Point::new(-0.5, 0.0, 1.0),
    )])
    .unwrap();
    let scaled = Similarity::new(Vector::new(-20.0, 3.0, 0.0), Vector::zeros(), 0.5);

    let mut registry = CollisionRegistry::default();
    registry.update(1, Arc::new(wall.clone()), Similarity::identity());
    registry.update(2, Arc::new(wall), scaled);
    registry.rebuild();
    let mut query = CollisionQuery::new(&registry);

    let ray = Line::ray(Point::new(-10.0, 0.0, 0.0), Vector::x());
    assert!(query.query(&Shape::from(ray)));
    assert_eq!(query.id(), 1);
    assert_eq!(query.pairs(), &pairs(&[0])[..]);

    // The scaled wall lies at x = -20.25.
    let ray = Line::ray(Point::new(-100.0, 3.0, 0.0), Vector::x());
    assert!(query.query(&Shape::from(ray)));
    assert_eq!(query.id(), 2);
    assert_eq!(query.pairs(), &pairs(&[0])[..]);
}

#[test]
fn shape_query_reports_intersecting_triangles() {
    let registry = registry();
    let mut query = CollisionQuery::try_new(&registry).unwrap();

    let ball = Ball::new(Point::new(5.5, 0.0, 0.0), 0.2);
    assert!(query.query(&Shape::from(ball)));
    assert_eq!(query.id(), 2);
    assert_eq!(query.pairs(), &pairs(&[10, 11])[..]);

    // Fully inside a cube, no triangle is touched.
    let ball = Ball::new(Point::new(5.0, 0.0, 0.0), 0.2);
    assert!(!query.query(&Shape::from(ball)));
}

#[test]
fn collider_query() {
    let registry = registry();
    let mut query = CollisionQuery::new(&registry);

    let small = cube(0.25);
    assert!(query.query_collider(&*small, &at(5.5)));
    assert_eq!(query.id(), 2);
    assert!(!query.pairs().is_empty());
    // The sides of the small cube cross the +x face of the registered one.
    assert!(query
        .pairs()
        .iter()
        .all(|p| p.a < 8 && (p.b == 10 || p.b == 11)));

    assert!(!query.query_collider(&*small, &at(2.5)));
}

#[test]
fn dirty_registry() {
    let mut registry = registry();
    registry.update(4, cube(1.0), at(-10.0));
    assert_eq!(
        CollisionQuery::try_new(&registry).err(),
        Some(QueryError::DirtyIndex)
    );
}

#[test]
#[should_panic]
fn dirty_registry_panics() {
    let mut registry = registry();
    let _ = registry.remove(1);
    let _ = CollisionQuery::new(&registry);
}

#[test]
#[should_panic]
fn accessor_without_collision() {
    let registry = registry();
    let mut query = CollisionQuery::new(&registry);
    assert!(!query.query(&Shape::from(Point::new(100.0, 0.0, 0.0))));
    let _ = query.id();
}
