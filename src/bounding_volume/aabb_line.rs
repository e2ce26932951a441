use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, DIM};
use crate::shape::Line;

use super::aabb_utils::clamp_to_half_max;

impl Line {
    /// Computes the AABB of this line.
    ///
    /// Infinite ends are clamped to [`HALF_MAX`](crate::bounding_volume::details::HALF_MAX)
    /// along every axis where the direction is non-zero.
    pub fn local_aabb(&self) -> Aabb {
        let mut mins = Point::origin();
        let mut maxs = Point::origin();

        for i in 0..DIM {
            let o = self.origin[i];
            let d = self.dir[i];

            if d == 0.0 {
                mins[i] = o;
                maxs[i] = o;
            } else {
                let e1 = clamp_to_half_max(endpoint(o, d, self.min));
                let e2 = clamp_to_half_max(endpoint(o, d, self.max));
                mins[i] = e1.min(e2);
                maxs[i] = e1.max(e2);
            }
        }

        Aabb { mins, maxs }
    }
}

#[inline]
fn endpoint(o: Real, d: Real, t: Real) -> Real {
    if t.is_infinite() {
        if (t > 0.0) == (d > 0.0) {
            Real::INFINITY
        } else {
            Real::NEG_INFINITY
        }
    } else {
        o + d * t
    }
}

#[cfg(test)]
mod test {
    use crate::bounding_volume::details::HALF_MAX;
    use crate::math::{Point, Vector};
    use crate::shape::Line;

    #[test]
    fn segment_aabb() {
        let s = Line::segment(Point::new(1.0, -2.0, 0.0), Point::new(-1.0, 3.0, 0.0));
        let aabb = s.local_aabb();
        assert_relative_eq!(aabb.mins, Point::new(-1.0, -2.0, 0.0), epsilon = 1.0e-6);
        assert_relative_eq!(aabb.maxs, Point::new(1.0, 3.0, 0.0), epsilon = 1.0e-6);
    }

    #[test]
    fn ray_aabb_is_clamped() {
        let r = Line::ray(Point::new(1.0, 2.0, 3.0), Vector::x());
        let aabb = r.local_aabb();
        assert_eq!(aabb.mins, Point::new(1.0, 2.0, 3.0));
        assert_eq!(aabb.maxs, Point::new(HALF_MAX, 2.0, 3.0));
    }
}
