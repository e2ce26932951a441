use spatial3d::bounding_volume::Aabb;
use spatial3d::math::{Point, Real, Similarity, Vector};
use spatial3d::pipeline::{CollisionQuery, CollisionRegistry};
use spatial3d::shape::TriMesh;
use std::sync::Arc;

fn unit_cube() -> Arc<TriMesh> {
    let aabb = Aabb::from_half_extents(Point::origin(), Vector::repeat(0.5));
    Arc::new(TriMesh::from_aabb(&aabb).unwrap())
}

fn at(x: Real, y: Real) -> Similarity<Real> {
    Similarity::new(Vector::new(x, y, 0.0), Vector::zeros(), 1.0)
}

/// The unit cube moves from x = 0 to x = 10: it touches a unit cube at x = 4 at 30% of its motion
/// and a unit cube at x = 7 at 60%.
fn swept_hit(near_id: u32, far_id: u32, near_first: bool) -> (u32, Real, Real) {
    let mut registry = CollisionRegistry::default();
    if near_first {
        registry.update(near_id, unit_cube(), at(4.0, 0.0));
        registry.update(far_id, unit_cube(), at(7.0, 0.0));
    } else {
        registry.update(far_id, unit_cube(), at(7.0, 0.0));
        registry.update(near_id, unit_cube(), at(4.0, 0.0));
    }
    registry.rebuild();

    let mut query = CollisionQuery::new(&registry);
    let moving = unit_cube();
    assert!(query.query_swept(&*moving, &at(0.0, 0.0), &at(10.0, 0.0)));
    assert!(!query.pairs().is_empty());

    (
        query.id(),
        query.fraction_before().unwrap(),
        query.fraction_contact().unwrap(),
    )
}

#[test]
fn swept_query_selects_earliest_contact() {
    for (near_id, far_id) in [(1, 2), (2, 1), (10, 3)] {
        for near_first in [true, false] {
            let (id, before, contact) = swept_hit(near_id, far_id, near_first);
            assert_eq!(id, near_id);
            assert!(before <= contact);
            assert!((contact - 0.3).abs() < 2.0e-3, "contact: {}", contact);
            assert!(contact - before < 2.0e-3);
        }
    }
}

#[test]
fn swept_query_misses() {
    let mut registry = CollisionRegistry::default();
    registry.update(1, unit_cube(), at(4.0, 0.0));
    registry.rebuild();

    let mut query = CollisionQuery::new(&registry);
    let moving = unit_cube();
    assert!(!query.query_swept(&*moving, &at(0.0, 0.0), &at(0.0, 10.0)));
    assert!(query.result().is_none());
}

#[test]
fn swept_query_starting_in_contact() {
    let mut registry = CollisionRegistry::default();
    registry.update(1, unit_cube(), at(0.5, 0.0));
    registry.rebuild();

    let mut query = CollisionQuery::new(&registry);
    let moving = unit_cube();
    assert!(query.query_swept(&*moving, &at(0.0, 0.0), &at(0.0, 10.0)));
    assert_eq!(query.fraction_before(), Some(0.0));
    assert_eq!(query.fraction_contact(), Some(0.0));
}
