use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Real, Similarity, DEFAULT_EPSILON, INTERSECTION_EPSILON};
use crate::motion::{InterpolatedRigidMotion, RigidMotion};
use crate::partitioning::TraversalAction;
use crate::query::details::intersection_test_triangle_triangle;
use crate::query::ray::{cast_line_triangle, clip_line_aabb};
use crate::query::{
    self, CollisionDispatcher, CollisionPair, ContinuousCollision, ContinuousCollisionParams,
    LineHit,
};
use crate::shape::{Collider, Line, Shape};

/// Parameters of the sampling-based continuous collision detection of the
/// [`DefaultCollisionDispatcher`].
///
/// The motion is sampled with a step small enough for the moving collider not to tunnel through
/// a thin obstacle, then the first sampled contact is refined by bisection.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContinuousCollisionConfig {
    /// Number of bisection steps refining the first sampled contact.
    pub bisection_steps: u32,
    /// Upper bound on the number of samples along the motion.
    pub max_samples: u32,
    /// Upper bound on the motion fraction between two samples.
    pub sample_fraction: Real,
}

impl Default for ContinuousCollisionConfig {
    fn default() -> Self {
        Self {
            bisection_steps: 6,
            max_samples: 1024,
            sample_fraction: 0.2,
        }
    }
}

/// A collision dispatcher computing exact triangle-level queries.
///
/// The acceleration structure of each collider ([`Collider::triangles_bvh`]) is used to cull the
/// triangles when it exists. Colliders without one get all their triangles tested.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DefaultCollisionDispatcher {
    /// Parameters of the continuous collision detection.
    pub ccd: ContinuousCollisionConfig,
}

impl DefaultCollisionDispatcher {
    /// Creates a dispatcher with the given continuous collision detection parameters.
    pub fn new(ccd: ContinuousCollisionConfig) -> Self {
        Self { ccd }
    }

    fn shape_triangles(
        &self,
        shape: &Shape,
        collider: &dyn Collider,
        pos: &Similarity<Real>,
        first_only: bool,
    ) -> Vec<u32> {
        // Unbounded shapes have boxes clamped to `HALF_MAX`: move the shape, not its box.
        let local_aabb = shape
            .transformed(&pos.inverse())
            .aabb()
            .loosened(INTERSECTION_EPSILON / pos.scaling().abs());
        let mut result = vec![];

        visit_triangles(collider, &local_aabb, |i| {
            let tri = collider.triangle(i).transformed(pos);

            if query::intersection_test(shape, &Shape::Triangle(tri)) {
                result.push(i);
                !first_only
            } else {
                true
            }
        });

        result.sort_unstable();
        result
    }

    fn collider_pairs(
        &self,
        collider1: &dyn Collider,
        pos1: &Similarity<Real>,
        collider2: &dyn Collider,
        pos2: &Similarity<Real>,
        first_only: bool,
    ) -> Vec<CollisionPair> {
        // Maps the local-space of the second collider to the local-space of the first.
        let pos12 = pos1.inverse() * pos2;
        let pos21 = pos12.inverse();
        let margin1 = INTERSECTION_EPSILON / pos1.scaling().abs();
        let margin2 = INTERSECTION_EPSILON / pos2.scaling().abs();
        let mut pairs = vec![];

        let test_pair = |pairs: &mut Vec<CollisionPair>, i: u32, j: u32| {
            let tri1 = collider1.triangle(i).transformed(pos1);
            let tri2 = collider2.triangle(j).transformed(pos2);

            if intersection_test_triangle_triangle(&tri1, &tri2) {
                pairs.push(CollisionPair::new(i, j));
                !first_only
            } else {
                true
            }
        };

        match (collider1.triangles_bvh(), collider2.triangles_bvh()) {
            (Some(bvh1), Some(bvh2)) => {
                let node_pairs = bvh1.leaf_pairs(bvh2, |node1, node2| {
                    node1
                        .aabb()
                        .loosened(margin1)
                        .intersects(&node2.aabb().transform_by(&pos12))
                });

                for (i, j) in node_pairs {
                    if !test_pair(&mut pairs, i, j) {
                        break;
                    }
                }
            }
            _ => {
                let aabb2 = collider2.local_aabb().transform_by(&pos12).loosened(margin1);

                visit_triangles(collider1, &aabb2, |i| {
                    let tri_aabb1 = collider1
                        .triangle(i)
                        .local_aabb()
                        .transform_by(&pos21)
                        .loosened(margin2);
                    let mut keep_going = true;

                    visit_triangles(collider2, &tri_aabb1, |j| {
                        keep_going = test_pair(&mut pairs, i, j);
                        keep_going
                    });

                    keep_going
                });
            }
        }

        pairs.sort_unstable();
        pairs
    }

    fn intersect_at(&self, params: &ContinuousCollisionParams, motion: &impl RigidMotion, t: Real) -> bool {
        !self
            .collider_pairs(
                params.moving,
                &motion.position_at_time(t),
                params.target,
                params.target_pos,
                true,
            )
            .is_empty()
    }

    fn contact_at(
        &self,
        params: &ContinuousCollisionParams,
        motion: &impl RigidMotion,
        fraction_before: Real,
        fraction_contact: Real,
    ) -> ContinuousCollision {
        let pairs = self.contact_pairs(
            params.moving,
            &motion.position_at_time(fraction_contact),
            params.target,
            params.target_pos,
        );

        ContinuousCollision {
            fraction_before,
            fraction_contact,
            pairs,
        }
    }

    /// The number of samples needed so that no point of the moving collider travels more than
    /// its smallest extent between two samples.
    fn num_samples(&self, params: &ContinuousCollisionParams) -> u32 {
        let local_aabb = params.moving.local_aabb();
        let scale = params.start.scaling().abs().min(params.end.scaling().abs());
        let min_size = local_aabb
            .extents()
            .iter()
            .copied()
            .filter(|e| *e > DEFAULT_EPSILON)
            .fold(Real::MAX, Real::min)
            * scale;
        let max_dist = local_aabb
            .vertices()
            .iter()
            .map(|pt| {
                na::distance(
                    &params.start.transform_point(pt),
                    &params.end.transform_point(pt),
                )
            })
            .fold(0.0, Real::max);

        let step = if max_dist > min_size {
            min_size / max_dist
        } else {
            1.0
        };
        let step = step.min(self.ccd.sample_fraction);
        let max_samples = self.ccd.max_samples.max(1);
        let num_samples = (1.0 / step).ceil() as u32;

        if num_samples > max_samples {
            log::warn!(
                "Continuous collision detection needs {} samples, clamped to {}: fast motions may tunnel through thin colliders.",
                num_samples,
                max_samples
            );
            max_samples
        } else {
            num_samples.max(1)
        }
    }
}

/// Calls `f` on the index of every triangle of `collider` that may intersect `local_aabb`,
/// until `f` returns `false`.
fn visit_triangles(collider: &dyn Collider, local_aabb: &Aabb, mut f: impl FnMut(u32) -> bool) {
    match collider.triangles_bvh() {
        Some(bvh) => {
            for i in bvh.leaves_intersecting_aabb(*local_aabb) {
                if !f(i) {
                    return;
                }
            }
        }
        None => {
            for (i, tri) in collider.triangles().iter().enumerate() {
                if tri.local_aabb().intersects(local_aabb) && !f(i as u32) {
                    return;
                }
            }
        }
    }
}

impl CollisionDispatcher for DefaultCollisionDispatcher {
    fn intersection_test(
        &self,
        shape: &Shape,
        collider: &dyn Collider,
        pos: &Similarity<Real>,
    ) -> bool {
        !self.shape_triangles(shape, collider, pos, true).is_empty()
    }

    fn intersecting_triangles(
        &self,
        shape: &Shape,
        collider: &dyn Collider,
        pos: &Similarity<Real>,
    ) -> Vec<u32> {
        self.shape_triangles(shape, collider, pos, false)
    }

    fn cast_line(
        &self,
        line: &Line,
        collider: &dyn Collider,
        pos: &Similarity<Real>,
    ) -> Option<LineHit> {
        let local_line = line.transformed(&pos.inverse());
        let mut best: Option<(Real, u32)> = None;

        let cast_triangle = |best: &mut Option<(Real, u32)>, i: u32| {
            if let Some(t) = cast_line_triangle(&local_line, &collider.triangle(i)) {
                if best.map_or(true, |(best_t, _)| t < best_t) {
                    *best = Some((t, i));
                }
            }
        };

        match collider.triangles_bvh() {
            Some(bvh) => bvh.traverse(|node| match clip_line_aabb(&local_line, &node.aabb()) {
                Some((tmin, _)) if best.map_or(true, |(best_t, _)| tmin <= best_t) => {
                    for i in bvh.leaf_payloads(node) {
                        cast_triangle(&mut best, *i);
                    }
                    TraversalAction::Continue
                }
                _ => TraversalAction::Prune,
            }),
            None => {
                for i in 0..collider.num_triangles() as u32 {
                    cast_triangle(&mut best, i);
                }
            }
        }

        // The local line parameters are the world ones divided by the scale.
        best.map(|(t, triangle)| LineHit {
            toi: t * pos.scaling(),
            point: pos.transform_point(&local_line.point_at(t)),
            triangle,
        })
    }

    fn contact_pairs(
        &self,
        collider1: &dyn Collider,
        pos1: &Similarity<Real>,
        collider2: &dyn Collider,
        pos2: &Similarity<Real>,
    ) -> Vec<CollisionPair> {
        self.collider_pairs(collider1, pos1, collider2, pos2, false)
    }

    fn continuous_collision(
        &self,
        params: &ContinuousCollisionParams,
    ) -> Option<ContinuousCollision> {
        if params.moving.num_triangles() == 0 || params.target.num_triangles() == 0 {
            return None;
        }

        let motion = InterpolatedRigidMotion::new(*params.start, *params.end);

        if self.intersect_at(params, &motion, 0.0) {
            return Some(self.contact_at(params, &motion, 0.0, 0.0));
        }

        if motion.is_stationary() {
            return None;
        }

        let num_samples = self.num_samples(params);
        let mut free = 0.0;

        for k in 1..=num_samples {
            let t = (k as Real / num_samples as Real).min(1.0);

            if self.intersect_at(params, &motion, t) {
                let mut hit = t;

                for _ in 0..self.ccd.bisection_steps {
                    let mid = (free + hit) * 0.5;

                    if self.intersect_at(params, &motion, mid) {
                        hit = mid;
                    } else {
                        free = mid;
                    }
                }

                return Some(self.contact_at(params, &motion, free, hit));
            }

            free = t;
        }

        None
    }
}
