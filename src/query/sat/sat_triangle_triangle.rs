use super::{normalized_axis, project_points_on_axis, separation};
use crate::math::{Real, UnitVector, Vector};
use crate::shape::Triangle;
use arrayvec::ArrayVec;

/// Searches for an axis separating two triangles by more than `margin`.
///
/// The candidate axes are both normals, the nine cross products of an edge of each triangle, and
/// the in-plane normals of every edge (needed for coplanar triangles). The search is complete
/// for non-degenerate triangles. For degenerate triangles, a `None` result may be a false
/// positive.
pub fn triangle_triangle_find_separating_axis(
    tri1: &Triangle,
    tri2: &Triangle,
    margin: Real,
) -> Option<UnitVector<Real>> {
    let n1 = tri1.scaled_normal();
    let n2 = tri2.scaled_normal();
    let edges1 = tri1.edges_scaled_directions();
    let edges2 = tri2.edges_scaled_directions();

    let mut axes = ArrayVec::<Vector<Real>, 23>::new();
    axes.push(n1);
    axes.push(n2);

    for e1 in &edges1 {
        for e2 in &edges2 {
            axes.push(e1.cross(e2));
        }
    }

    for e in edges1.iter().chain(edges2.iter()) {
        axes.push(n1.cross(e));
        axes.push(n2.cross(e));
    }

    let vtx1 = tri1.vertices();
    let vtx2 = tri2.vertices();

    axes.into_iter().filter_map(normalized_axis).find(|axis| {
        let proj1 = project_points_on_axis(&vtx1, axis);
        let proj2 = project_points_on_axis(&vtx2, axis);
        separation(proj1, proj2) > margin
    })
}

#[cfg(test)]
mod test {
    use super::triangle_triangle_find_separating_axis;
    use crate::math::{Point, Real};
    use crate::shape::Triangle;

    fn tri(z: Real) -> Triangle {
        Triangle::new(
            Point::new(0.0, 0.0, z),
            Point::new(1.0, 0.0, z),
            Point::new(0.0, 1.0, z),
        )
    }

    #[test]
    fn stacked_triangles() {
        assert!(triangle_triangle_find_separating_axis(&tri(0.0), &tri(1.0), 0.0).is_some());
        assert!(triangle_triangle_find_separating_axis(&tri(0.0), &tri(1.0), 2.0).is_none());
        assert!(triangle_triangle_find_separating_axis(&tri(0.0), &tri(0.0), 0.0).is_none());
    }

    #[test]
    fn coplanar_disjoint_triangles() {
        let t1 = tri(0.0);
        let t2 = Triangle::new(
            Point::new(1.0, 1.0, 0.0),
            Point::new(2.0, 1.0, 0.0),
            Point::new(1.0, 2.0, 0.0),
        );
        assert!(triangle_triangle_find_separating_axis(&t1, &t2, 0.0).is_some());
    }

    #[test]
    fn crossing_triangles() {
        let t1 = tri(0.0);
        let t2 = Triangle::new(
            Point::new(0.2, 0.2, -1.0),
            Point::new(0.2, 0.2, 1.0),
            Point::new(0.3, -1.0, 0.0),
        );
        assert!(triangle_triangle_find_separating_axis(&t1, &t2, 0.0).is_none());
    }
}
