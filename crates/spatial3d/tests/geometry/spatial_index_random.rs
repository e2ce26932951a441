use spatial3d::bounding_volume::{Aabb, BoundingVolume};
use spatial3d::math::{Point, Real, UnitVector, Vector};
use spatial3d::partitioning::{SpatialIndex, SpatialQuery};
use spatial3d::shape::{Ball, Line, Plane, Shape, Triangle};
use spatial3d::utils::is_strictly_sorted;

fn random_point(rng: &mut oorandom::Rand32, scale: Real) -> Point<Real> {
    Point::new(
        rng.rand_float() as Real * scale,
        rng.rand_float() as Real * scale,
        rng.rand_float() as Real * scale,
    )
}

fn random_dir(rng: &mut oorandom::Rand32) -> UnitVector<Real> {
    let v = random_point(rng, 2.0).coords - Vector::repeat(1.0);
    UnitVector::new_normalize(v + Vector::repeat(1.0e-3))
}

fn random_bounded_shape(rng: &mut oorandom::Rand32) -> Shape {
    let c = random_point(rng, 100.0);

    match rng.rand_range(0..5) {
        0 => Ball::new(c, rng.rand_float() as Real * 5.0).into(),
        1 => Aabb::new(c, c + random_point(rng, 8.0).coords).into(),
        2 => Triangle::new(
            c,
            c + random_point(rng, 8.0).coords,
            c - random_point(rng, 8.0).coords,
        )
        .into(),
        3 => Line::segment(c, c + random_dir(rng).into_inner() * 6.0).into(),
        _ => Shape::from(c),
    }
}

fn random_query_shape(rng: &mut oorandom::Rand32) -> Shape {
    let c = random_point(rng, 100.0);

    match rng.rand_range(0..6) {
        0 => Line::ray(c, random_dir(rng).into_inner()).into(),
        1 => Line::line(c, random_dir(rng).into_inner()).into(),
        2 => Plane::new(c, random_dir(rng)).into(),
        3 => Ball::new(c, rng.rand_float() as Real * 20.0).into(),
        _ => random_bounded_shape(rng),
    }
}

fn brute_force(index: &SpatialIndex, shape: &Shape) -> Vec<u32> {
    let mut ids: Vec<_> = index
        .iter()
        .filter(|(_, item)| item.intersects(shape))
        .map(|(id, _)| id)
        .collect();
    ids.sort_unstable();
    ids
}

fn check_against_brute_force(index: &SpatialIndex, rng: &mut oorandom::Rand32) {
    let union = index
        .iter()
        .fold(Aabb::new_invalid(), |acc, (_, shape)| acc.merged(&shape.aabb()));
    assert_eq!(index.root_aabb(), Some(union));
    index.bvh().assert_is_depth_first();

    let mut query = SpatialQuery::new(index);

    for _ in 0..200 {
        let shape = random_query_shape(rng);
        let expected = brute_force(index, &shape);

        assert_eq!(query.intersection(&shape), !expected.is_empty());
        assert!(is_strictly_sorted(query.result()));
        assert_eq!(query.result(), &expected[..], "query: {:?}", shape);
    }
}

#[test]
fn spatial_query_matches_brute_force() {
    let mut rng = oorandom::Rand32::new(42);
    let mut index = SpatialIndex::default();

    for id in 1..=500 {
        index.update(id, random_bounded_shape(&mut rng));
    }
    index.rebuild();
    check_against_brute_force(&index, &mut rng);

    // Holes in the arena, replacements and new identifiers.
    for id in (1..=500).step_by(3) {
        let _ = index.remove(id);
    }
    for id in (2..=500).step_by(5) {
        index.update(id, random_bounded_shape(&mut rng));
    }
    for id in 1000..1100 {
        index.update(id, random_bounded_shape(&mut rng));
    }
    index.rebuild();
    check_against_brute_force(&index, &mut rng);
}
