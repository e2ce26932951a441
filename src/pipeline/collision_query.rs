use crate::bounding_volume::details::ball_aabb;
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real, Similarity};
use crate::partitioning::SpatialQuery;
use crate::pipeline::{CollisionRegistry, RigidItem};
use crate::query::{
    CollisionDispatcher, CollisionPair, ContinuousCollisionParams, DefaultCollisionDispatcher,
    QueryError,
};
use crate::shape::{Collider, Line, Shape};
use alloc::sync::Arc;

/// Identifier that is never registered: it marks the query side of the pairs of a shape query.
pub const INVALID_ID: u32 = u32::MAX;

/// The collision found by the last successful [`CollisionQuery`].
#[derive(Clone, Debug)]
pub struct CollisionHit {
    /// The identifier of the collider hit.
    pub id: u32,
    /// The collider hit and its transform.
    pub item: RigidItem,
    /// The last fraction of the motion without contact, for swept queries only.
    pub fraction_before: Option<Real>,
    /// The first fraction of the motion with a contact, for swept queries only.
    pub fraction_contact: Option<Real>,
    /// The intersecting triangles. Never empty.
    pub pairs: Vec<CollisionPair>,
}

/// A reusable query finding the collider of a [`CollisionRegistry`] hit by a shape, a collider,
/// or a moving collider.
///
/// Each query keeps at most one collision, readable through [`CollisionQuery::result`] or the
/// other accessors until the next query. The candidates come from the spatial index of the
/// registry, then the exact tests are delegated to a [`CollisionDispatcher`].
pub struct CollisionQuery<'a, D = DefaultCollisionDispatcher> {
    registry: &'a CollisionRegistry,
    spatial: SpatialQuery<'a>,
    dispatcher: D,
    hit: Option<CollisionHit>,
}

impl<'a> CollisionQuery<'a> {
    /// Creates a query on the given registry, using the [`DefaultCollisionDispatcher`].
    ///
    /// # Panics
    /// Panics if the registry is dirty.
    pub fn new(registry: &'a CollisionRegistry) -> Self {
        Self::with_dispatcher(registry, DefaultCollisionDispatcher::default())
    }

    /// Creates a query on the given registry, or fails if the registry is dirty.
    pub fn try_new(registry: &'a CollisionRegistry) -> Result<Self, QueryError> {
        Ok(Self {
            registry,
            spatial: SpatialQuery::try_new(registry.spatial_index())?,
            dispatcher: DefaultCollisionDispatcher::default(),
            hit: None,
        })
    }
}

impl<'a, D: CollisionDispatcher> CollisionQuery<'a, D> {
    /// Creates a query on the given registry, using a custom dispatcher for the exact tests.
    ///
    /// # Panics
    /// Panics if the registry is dirty.
    pub fn with_dispatcher(registry: &'a CollisionRegistry, dispatcher: D) -> Self {
        Self {
            registry,
            spatial: SpatialQuery::new(registry.spatial_index()),
            dispatcher,
            hit: None,
        }
    }

    /// The dispatcher computing the exact tests of this query.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// The registered collider with the identifier `id`, as found by the broad-phase.
    fn candidate(&self, id: u32) -> Option<&'a RigidItem> {
        let item = self.registry.get(id);
        debug_assert!(item.is_some(), "Broad-phase returned an unknown collider {id}.");
        item
    }

    /// Finds a collider intersecting `shape`.
    ///
    /// If `shape` is a line, segment or ray, the collider hit first along its direction is
    /// selected. Otherwise the first intersecting collider found is selected. On success, the
    /// pairs contain `(INVALID_ID, i)` for every triangle `i` of that collider intersecting
    /// `shape`.
    ///
    /// # Panics
    /// Panics if `shape` is a line, segment or ray with a non-normalized direction.
    pub fn query(&mut self, shape: &Shape) -> bool {
        self.hit = None;
        let _ = self.spatial.intersection_aabb(shape.aabb());

        let found = match shape {
            Shape::Line(line) if !line.is_point() => self.nearest_line_hit(line),
            _ => self.spatial.result().iter().copied().find(|id| {
                self.candidate(*id).is_some_and(|item| {
                    self.dispatcher
                        .intersection_test(shape, &*item.collider, &item.transform)
                })
            }),
        };

        let Some(id) = found else {
            return false;
        };
        let Some(item) = self.candidate(id) else {
            return false;
        };

        let pairs: Vec<_> = self
            .dispatcher
            .intersecting_triangles(shape, &*item.collider, &item.transform)
            .into_iter()
            .map(|b| CollisionPair::new(INVALID_ID, b))
            .collect();

        if pairs.is_empty() {
            return false;
        }

        self.hit = Some(CollisionHit {
            id,
            item: item.clone(),
            fraction_before: None,
            fraction_contact: None,
            pairs,
        });
        true
    }

    fn nearest_line_hit(&self, line: &Line) -> Option<u32> {
        assert!(
            line.is_normalized(),
            "The direction of a query line must be normalized."
        );

        let mut best: Option<(Real, u32)> = None;

        for id in self.spatial.result() {
            let Some(item) = self.candidate(*id) else {
                continue;
            };

            if let Some(hit) = self
                .dispatcher
                .cast_line(line, &*item.collider, &item.transform)
            {
                let dist = (hit.point - line.origin).dot(&line.dir);

                if best.map_or(true, |(best_dist, _)| dist < best_dist) {
                    best = Some((dist, *id));
                }
            }
        }

        best.map(|(_, id)| id)
    }

    /// Finds a collider intersecting `collider` placed at `pos`.
    ///
    /// The first intersecting collider found is selected. On success, the pairs contain `(a, b)`
    /// for every triangle `a` of `collider` intersecting the triangle `b` of the selected collider.
    pub fn query_collider(&mut self, collider: &dyn Collider, pos: &Similarity<Real>) -> bool {
        self.hit = None;
        let _ = self
            .spatial
            .intersection_aabb(collider.local_aabb().transform_by(pos));

        for id in self.spatial.result() {
            let Some(item) = self.candidate(*id) else {
                continue;
            };

            let pairs =
                self.dispatcher
                    .contact_pairs(collider, pos, &*item.collider, &item.transform);

            if !pairs.is_empty() {
                self.hit = Some(CollisionHit {
                    id: *id,
                    item: item.clone(),
                    fraction_before: None,
                    fraction_contact: None,
                    pairs,
                });
                return true;
            }
        }

        false
    }

    /// Finds the first collider hit by `collider` moving from `start` to `end`.
    ///
    /// The motion interpolates linearly the translation and the scale, and spherically the
    /// rotation. Every candidate is tested and the one with the smallest contact fraction is
    /// selected; ties are resolved in favor of the smallest identifier. On success, the pairs
    /// contain `(a, b)` for every triangle `a` of the moving collider intersecting the triangle
    /// `b` of the selected collider at the contact fraction.
    pub fn query_swept(
        &mut self,
        collider: &dyn Collider,
        start: &Similarity<Real>,
        end: &Similarity<Real>,
    ) -> bool {
        self.hit = None;
        let _ = self
            .spatial
            .intersection_aabb(swept_aabb(&collider.local_aabb(), start, end));

        let mut best = None;

        for id in self.spatial.result() {
            let Some(item) = self.candidate(*id) else {
                continue;
            };

            let params = ContinuousCollisionParams {
                moving: collider,
                start,
                end,
                target: &*item.collider,
                target_pos: &item.transform,
            };

            if let Some(ccd) = self.dispatcher.continuous_collision(&params) {
                log::trace!(
                    "Swept collider hits {} at fraction {}.",
                    id,
                    ccd.fraction_contact
                );

                let closer = best
                    .as_ref()
                    .and_then(|hit: &CollisionHit| hit.fraction_contact)
                    .map_or(true, |best_contact| ccd.fraction_contact < best_contact);

                if closer {
                    best = Some(CollisionHit {
                        id: *id,
                        item: item.clone(),
                        fraction_before: Some(ccd.fraction_before),
                        fraction_contact: Some(ccd.fraction_contact),
                        pairs: ccd.pairs,
                    });
                }
            }
        }

        self.hit = best;
        self.hit.is_some()
    }

    /// The collision found by the last query, if any.
    pub fn result(&self) -> Option<&CollisionHit> {
        self.hit.as_ref()
    }

    fn hit(&self) -> &CollisionHit {
        match &self.hit {
            Some(hit) => hit,
            None => panic!("The last collision query didn’t find any collision."),
        }
    }

    /// The identifier of the collider hit.
    ///
    /// # Panics
    /// Panics if the last query didn’t find any collision.
    pub fn id(&self) -> u32 {
        self.hit().id
    }

    /// The last fraction of the motion without contact. `None` for static queries.
    ///
    /// # Panics
    /// Panics if the last query didn’t find any collision.
    pub fn fraction_before(&self) -> Option<Real> {
        self.hit().fraction_before
    }

    /// The first fraction of the motion with a contact. `None` for static queries.
    ///
    /// # Panics
    /// Panics if the last query didn’t find any collision.
    pub fn fraction_contact(&self) -> Option<Real> {
        self.hit().fraction_contact
    }

    /// The pairs of intersecting triangles.
    ///
    /// # Panics
    /// Panics if the last query didn’t find any collision.
    pub fn pairs(&self) -> &[CollisionPair] {
        &self.hit().pairs
    }

    /// The collider hit and its transform.
    ///
    /// # Panics
    /// Panics if the last query didn’t find any collision.
    pub fn collider(&self) -> (&Arc<dyn Collider>, &Similarity<Real>) {
        let item = &self.hit().item;
        (&item.collider, &item.transform)
    }
}

/// An AABB containing the collider with the local AABB `local_aabb` along its whole motion from
/// `start` to `end`.
fn swept_aabb(local_aabb: &Aabb, start: &Similarity<Real>, end: &Similarity<Real>) -> Aabb {
    if start.isometry.rotation == end.isometry.rotation {
        // Without rotation, every point moves along a straight segment.
        local_aabb
            .transform_by(start)
            .merged(&local_aabb.transform_by(end))
    } else {
        let radius = local_aabb
            .vertices()
            .iter()
            .map(|pt| pt.coords.norm())
            .fold(0.0, Real::max);
        let center = |pos: &Similarity<Real>| Point::from(pos.isometry.translation.vector);

        ball_aabb(&center(start), radius * start.scaling())
            .merged(&ball_aabb(&center(end), radius * end.scaling()))
    }
}
