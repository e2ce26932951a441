use super::{normalized_axis, project_points_on_axis, separation};
use crate::bounding_volume::Aabb;
use crate::math::{Real, UnitVector, Vector};
use crate::shape::Triangle;
use arrayvec::ArrayVec;

/// Searches for an axis separating an AABB and a triangle by more than `margin`.
///
/// Tests the 13 axes of the classic box-triangle overlap test: the three box axes, the triangle
/// normal, and the nine cross products between a box axis and a triangle edge.
pub fn aabb_triangle_find_separating_axis(
    aabb: &Aabb,
    tri: &Triangle,
    margin: Real,
) -> Option<UnitVector<Real>> {
    let box_axes = [Vector::x(), Vector::y(), Vector::z()];
    let edges = tri.edges_scaled_directions();

    let mut axes = ArrayVec::<Vector<Real>, 13>::new();
    axes.extend(box_axes);
    axes.push(tri.scaled_normal());

    for axis in &box_axes {
        for edge in &edges {
            axes.push(axis.cross(edge));
        }
    }

    let vtx = tri.vertices();

    axes.into_iter().filter_map(normalized_axis).find(|axis| {
        let proj1 = aabb.project_on_axis(axis);
        let proj2 = project_points_on_axis(&vtx, axis);
        separation(proj1, proj2) > margin
    })
}
