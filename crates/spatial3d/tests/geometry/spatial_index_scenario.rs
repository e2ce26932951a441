use spatial3d::bounding_volume::Aabb;
use spatial3d::math::{Point, Real};
use spatial3d::partitioning::{SpatialIndex, SpatialQuery};
use spatial3d::shape::Ball;

fn aabb(min: Real, max: Real) -> Aabb {
    Aabb::new(Point::new(min, min, min), Point::new(max, max, max))
}

#[test]
fn three_boxes() {
    let mut index = SpatialIndex::default();
    index.update(1, aabb(0.0, 1.0));
    index.update(2, aabb(5.0, 6.0));
    index.update(3, aabb(0.5, 1.5));
    index.rebuild();

    let mut query = SpatialQuery::new(&index);
    assert!(query.intersection_aabb(aabb(0.0, 1.0)));
    assert_eq!(query.result(), &[1, 3]);

    assert!(!query.intersection_aabb(aabb(10.0, 11.0)));
    assert!(query.result().is_empty());
}

#[test]
fn update_replaces_previous_shape() {
    let mut index = SpatialIndex::default();
    index.update(7, Ball::new(Point::new(0.0, 0.0, 0.0), 1.0));
    index.update(7, Ball::new(Point::new(20.0, 0.0, 0.0), 1.0));
    index.rebuild();

    let mut query = SpatialQuery::new(&index);
    assert!(!query.intersection_point(Point::new(0.0, 0.0, 0.0)));
    assert!(query.intersection_point(Point::new(20.0, 0.0, 0.0)));
    assert_eq!(query.result(), &[7]);
}

#[test]
fn rebuilt_empty_index() {
    let mut index = SpatialIndex::default();
    index.update(1, aabb(0.0, 1.0));
    index.clear();
    index.rebuild();

    let mut query = SpatialQuery::new(&index);
    assert!(!query.intersection_aabb(aabb(-1.0e6, 1.0e6)));
    assert!(query.result().is_empty());
}

#[test]
#[should_panic]
fn query_on_dirty_index() {
    let mut index = SpatialIndex::default();
    index.update(1, aabb(0.0, 1.0));
    let _ = SpatialQuery::new(&index);
}
