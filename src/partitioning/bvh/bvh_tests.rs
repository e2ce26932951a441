use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real, Vector};
use crate::partitioning::{Bvh, TraversalAction, LEAF_SIZE_THRESHOLD};

fn make_test_aabb(i: usize) -> Aabb {
    Aabb::from_half_extents(Vector::repeat(i as Real).into(), Vector::repeat(1.0))
}

fn random_aabbs(rng: &mut oorandom::Rand32, len: usize) -> Vec<Aabb> {
    (0..len)
        .map(|_| {
            let center = Point::new(
                rng.rand_float() as Real * 100.0,
                rng.rand_float() as Real * 100.0,
                rng.rand_float() as Real * 100.0,
            );
            let half_extents = Vector::new(
                rng.rand_float() as Real * 5.0,
                rng.rand_float() as Real * 5.0,
                rng.rand_float() as Real * 5.0,
            );
            Aabb::from_half_extents(center, half_extents)
        })
        .collect()
}

#[test]
fn bvh_build() {
    for len in 0..=200 {
        let leaves: Vec<_> = (0..len).map(make_test_aabb).collect();
        let bvh = Bvh::from_leaves(&leaves);

        bvh.assert_well_formed(|i| leaves[i as usize]);
        bvh.assert_is_depth_first();
        assert_eq!(bvh.leaf_item_count(), len);
        assert_eq!(bvh.is_empty(), len == 0);

        if len > 0 {
            let expected = leaves.iter().fold(Aabb::new_invalid(), |a, b| a.merged(b));
            assert_eq!(bvh.root_aabb(), Some(expected));
        }

        if len >= LEAF_SIZE_THRESHOLD {
            assert!(!bvh.nodes()[0].is_leaf());
        } else if len > 0 {
            assert_eq!(bvh.nodes().len(), 1);
            assert_eq!(bvh.depth(), 1);
        }
    }
}

#[test]
fn bvh_build_random() {
    let mut rng = oorandom::Rand32::new(42);

    for len in [1, 9, 10, 11, 57, 300, 1000] {
        let leaves = random_aabbs(&mut rng, len);
        let bvh = Bvh::from_leaves(&leaves);
        bvh.assert_well_formed(|i| leaves[i as usize]);
        bvh.assert_is_depth_first();

        let mut items = bvh.leaf_items().to_vec();
        items.sort_unstable();
        assert_eq!(items, (0..len as u32).collect::<Vec<_>>());
    }
}

#[test]
fn bvh_build_degenerate() {
    // Identical boxes can’t be separated by the heuristic.
    let leaves = vec![Aabb::from_point(Point::new(1.0, 2.0, 3.0)); 100];
    let bvh = Bvh::from_leaves(&leaves);
    bvh.assert_well_formed(|i| leaves[i as usize]);
    assert!(bvh.depth() <= 2);
}

#[test]
fn bvh_rebuild_discards_previous_content() {
    let leaves: Vec<_> = (0..50).map(make_test_aabb).collect();
    let mut bvh = Bvh::from_leaves(&leaves);
    bvh.rebuild([(7, make_test_aabb(3))]);
    assert_eq!(bvh.leaf_items(), &[7]);
    assert_eq!(bvh.root_aabb(), Some(make_test_aabb(3)));
    bvh.rebuild(core::iter::empty());
    assert!(bvh.is_empty());
    assert_eq!(bvh.root_aabb(), None);
}

#[test]
fn bvh_leaves_intersecting_aabb() {
    let mut rng = oorandom::Rand32::new(7);
    let leaves = random_aabbs(&mut rng, 500);
    let bvh = Bvh::from_leaves(&leaves);

    for query in random_aabbs(&mut rng, 50) {
        let mut found: Vec<_> = bvh
            .leaves_intersecting_aabb(query)
            .filter(|i| leaves[*i as usize].intersects(&query))
            .collect();
        found.sort_unstable();

        let expected: Vec<_> = (0..leaves.len() as u32)
            .filter(|i| leaves[*i as usize].intersects(&query))
            .collect();
        assert_eq!(found, expected);
    }
}

#[test]
fn bvh_traverse_early_exit() {
    let leaves: Vec<_> = (0..100).map(make_test_aabb).collect();
    let bvh = Bvh::from_leaves(&leaves);

    let mut visited_leaves = 0;
    bvh.traverse(|node| {
        if node.is_leaf() {
            visited_leaves += 1;
            TraversalAction::EarlyExit
        } else {
            TraversalAction::Continue
        }
    });
    assert_eq!(visited_leaves, 1);

    let mut visited_nodes = 0;
    bvh.traverse(|_| {
        visited_nodes += 1;
        TraversalAction::Continue
    });
    assert_eq!(visited_nodes, bvh.nodes().len());

    let mut pruned = 0;
    bvh.traverse(|_| {
        pruned += 1;
        TraversalAction::Prune
    });
    assert_eq!(pruned, 1);
}

#[test]
fn bvh_leaf_pairs() {
    let mut rng = oorandom::Rand32::new(1234);
    let leaves1 = random_aabbs(&mut rng, 200);
    let leaves2 = random_aabbs(&mut rng, 150);
    let bvh1 = Bvh::from_leaves(&leaves1);
    let bvh2 = Bvh::from_leaves(&leaves2);

    let mut found: Vec<_> = bvh1
        .leaf_pairs(&bvh2, |n1, n2| n1.intersects_aabb(&n2.aabb()))
        .filter(|(i, j)| leaves1[*i as usize].intersects(&leaves2[*j as usize]))
        .collect();
    found.sort_unstable();

    let mut expected = vec![];
    for i in 0..leaves1.len() as u32 {
        for j in 0..leaves2.len() as u32 {
            if leaves1[i as usize].intersects(&leaves2[j as usize]) {
                expected.push((i, j));
            }
        }
    }

    assert_eq!(found, expected);
    assert_eq!(bvh1.leaf_pairs(&Bvh::new(), |_, _| true).count(), 0);
}
