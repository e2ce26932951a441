use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::partitioning::Bvh;
use crate::shape::{Collider, Triangle};

use ordered_float::OrderedFloat;

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshError {
    /// A triangle mesh must contain at least one triangle.
    #[error("A triangle mesh must contain at least one triangle.")]
    EmptyTriangles,
    /// A triangle references a vertex that doesn’t exist.
    #[error("the triangle {0} references a vertex out of bounds.")]
    InvalidIndex(u32),
    /// A triangle has NaN or infinite coordinates.
    #[error("the triangle {0} has non-finite coordinates.")]
    NonFiniteTriangle(u32),
    /// A triangle has its three vertices aligned.
    #[error("the triangle {0} is degenerate.")]
    DegenerateTriangle(u32),
}

/// A triangle mesh collider.
///
/// The triangles are stored in the order they were given, and indexed by a [`Bvh`] whose leaf
/// items are triangle indices.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriMesh {
    triangles: Vec<Triangle>,
    bvh: Bvh,
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    pub fn new(vertices: Vec<Point<Real>>, indices: Vec<[u32; 3]>) -> Result<Self, TriMeshError> {
        let triangles = indices
            .iter()
            .enumerate()
            .map(|(i, idx)| {
                let vtx = |k: u32| {
                    vertices
                        .get(k as usize)
                        .copied()
                        .ok_or(TriMeshError::InvalidIndex(i as u32))
                };
                Ok(Triangle::new(vtx(idx[0])?, vtx(idx[1])?, vtx(idx[2])?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_triangles(triangles)
    }

    /// Creates a new triangle mesh from a set of triangles.
    ///
    /// Fails if the set is empty, or if any triangle is degenerate or not finite.
    pub fn from_triangles(triangles: Vec<Triangle>) -> Result<Self, TriMeshError> {
        if triangles.is_empty() {
            return Err(TriMeshError::EmptyTriangles);
        }

        for (i, tri) in triangles.iter().enumerate() {
            if tri.validate().is_err() {
                return Err(TriMeshError::NonFiniteTriangle(i as u32));
            }

            if tri.is_degenerate() {
                return Err(TriMeshError::DegenerateTriangle(i as u32));
            }
        }

        let bvh = Bvh::from_iter(
            triangles
                .iter()
                .enumerate()
                .map(|(i, tri)| (i as u32, tri.local_aabb())),
        );

        Ok(Self { triangles, bvh })
    }

    /// Creates a new triangle mesh after dropping the degenerate and the duplicate triangles.
    ///
    /// Two triangles are duplicates if they have the same vertices, in any order. The vertices
    /// of each remaining triangle are reordered (so their orientation may change) and the
    /// triangles are sorted: the resulting triangle indices don’t match the input order.
    pub fn from_triangles_cleaned(triangles: Vec<Triangle>) -> Result<Self, TriMeshError> {
        let key = |p: &Point<Real>| [OrderedFloat(p.x), OrderedFloat(p.y), OrderedFloat(p.z)];

        let mut cleaned: Vec<Triangle> = triangles
            .into_iter()
            .filter(|tri| !tri.is_degenerate())
            .map(|tri| {
                let mut vtx = tri.vertices();
                vtx.sort_by_key(key);
                Triangle::from(vtx)
            })
            .collect();

        let tri_key = |tri: &Triangle| [key(&tri.a), key(&tri.b), key(&tri.c)];
        cleaned.sort_by_key(tri_key);
        cleaned.dedup_by_key(|tri| tri_key(tri));

        Self::from_triangles(cleaned)
    }

    /// The closed triangle mesh of the boundary of an AABB, with outward-facing triangles.
    pub fn from_aabb(aabb: &Aabb) -> Result<Self, TriMeshError> {
        const FACES: [[u32; 3]; 12] = [
            [0, 2, 1],
            [0, 3, 2],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [3, 6, 2],
            [3, 7, 6],
            [0, 4, 7],
            [0, 7, 3],
            [1, 2, 6],
            [1, 6, 5],
        ];

        Self::new(aabb.vertices().to_vec(), FACES.to_vec())
    }

    /// The triangles of this mesh.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Get the `i`-th triangle of this mesh.
    pub fn triangle(&self, i: u32) -> Triangle {
        self.triangles[i as usize]
    }

    /// The number of triangles forming this mesh.
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// The AABB bounding this mesh, in its local space.
    pub fn local_aabb(&self) -> Aabb {
        self.bvh.root_aabb().unwrap_or_else(Aabb::new_invalid)
    }

    /// The acceleration structure used by this triangle-mesh.
    pub fn bvh(&self) -> &Bvh {
        &self.bvh
    }
}

impl Collider for TriMesh {
    fn local_aabb(&self) -> Aabb {
        TriMesh::local_aabb(self)
    }

    fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    fn triangles_bvh(&self) -> Option<&Bvh> {
        Some(&self.bvh)
    }
}
