use crate::bounding_volume::Aabb;
use crate::math::{Real, DIM};
use crate::shape::Line;

/// Computes the range of parameters of the part of a line inside of an AABB.
///
/// The result is clipped to the line bounds. Returns `None` if the line doesn’t cross the AABB.
pub fn clip_line_aabb(line: &Line, aabb: &Aabb) -> Option<(Real, Real)> {
    let mut tmin = line.min;
    let mut tmax = line.max;

    for i in 0..DIM {
        if line.dir[i] == 0.0 {
            if line.origin[i] < aabb.mins[i] || line.origin[i] > aabb.maxs[i] {
                return None;
            }
        } else {
            let denom = 1.0 / line.dir[i];
            let mut inter_with_near_halfspace = (aabb.mins[i] - line.origin[i]) * denom;
            let mut inter_with_far_halfspace = (aabb.maxs[i] - line.origin[i]) * denom;

            if inter_with_near_halfspace > inter_with_far_halfspace {
                core::mem::swap(
                    &mut inter_with_near_halfspace,
                    &mut inter_with_far_halfspace,
                )
            }

            tmin = tmin.max(inter_with_near_halfspace);
            tmax = tmax.min(inter_with_far_halfspace);

            if tmin > tmax {
                return None;
            }
        }
    }

    Some((tmin, tmax))
}

/// Computes the first parameter at which a line enters an AABB.
///
/// Returns the lower bound of the line if it starts inside of the AABB.
#[inline]
pub fn cast_line_aabb(line: &Line, aabb: &Aabb) -> Option<Real> {
    clip_line_aabb(line, aabb).map(|(tmin, _)| tmin)
}
