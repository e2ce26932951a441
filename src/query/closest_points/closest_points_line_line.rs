use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::shape::Line;

/// Computes the parameters of the closest points between two lines, segments or rays.
///
/// The returned `(s, t)` are such that `l1.point_at(s)` and `l2.point_at(t)` are the closest
/// points. Both are within the bounds of their respective line. If the lines are parallel, one
/// of the (infinitely many) solutions is returned.
pub fn closest_points_line_line_parameters(l1: &Line, l2: &Line) -> (Real, Real) {
    let d1 = l1.dir;
    let d2 = l2.dir;
    let r = l1.origin - l2.origin;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);
    let eps = DEFAULT_EPSILON;

    if a <= eps && e <= eps {
        return (l1.clamp_parameter(0.0), l2.clamp_parameter(0.0));
    }

    if a <= eps {
        let s = l1.clamp_parameter(0.0);
        let p1 = l1.point_at(s);
        return (s, l2.clamp_parameter(d2.dot(&(p1 - l2.origin)) / e));
    }

    let c = d1.dot(&r);

    if e <= eps {
        let t = l2.clamp_parameter(0.0);
        let p2 = l2.point_at(t);
        return (l1.clamp_parameter(d1.dot(&(p2 - l1.origin)) / a), t);
    }

    let b = d1.dot(&d2);
    let denom = a * e - b * b;

    let mut s = if denom > eps * a * e {
        l1.clamp_parameter((b * f - c * e) / denom)
    } else {
        // Parallel lines: pick any point of the first line.
        l1.clamp_parameter(0.0)
    };

    let mut t = (b * s + f) / e;

    if t < l2.min {
        t = l2.min;
        s = l1.clamp_parameter((b * t - c) / a);
    } else if t > l2.max {
        t = l2.max;
        s = l1.clamp_parameter((b * t - c) / a);
    }

    (s, t)
}

/// Computes the closest points between two lines, segments or rays.
#[inline]
pub fn closest_points_line_line(l1: &Line, l2: &Line) -> (Point<Real>, Point<Real>) {
    let (s, t) = closest_points_line_line_parameters(l1, l2);
    (l1.point_at(s), l2.point_at(t))
}

#[cfg(test)]
mod test {
    use super::closest_points_line_line;
    use crate::math::{Point, Vector};
    use crate::shape::Line;

    #[test]
    fn skew_lines() {
        let l1 = Line::line(Point::origin(), Vector::x());
        let l2 = Line::line(Point::new(3.0, 0.0, 2.0), Vector::y());
        let (p1, p2) = closest_points_line_line(&l1, &l2);
        assert_relative_eq!(p1, Point::new(3.0, 0.0, 0.0));
        assert_relative_eq!(p2, Point::new(3.0, 0.0, 2.0));
    }

    #[test]
    fn clamped_segments() {
        let s1 = Line::segment(Point::origin(), Point::new(1.0, 0.0, 0.0));
        let s2 = Line::segment(Point::new(3.0, -1.0, 1.0), Point::new(3.0, 1.0, 1.0));
        let (p1, p2) = closest_points_line_line(&s1, &s2);
        assert_relative_eq!(p1, Point::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p2, Point::new(3.0, 0.0, 1.0));
    }

    #[test]
    fn ray_pointing_away() {
        let r = Line::ray(Point::origin(), -Vector::x());
        let s = Line::segment(Point::new(2.0, -1.0, 0.0), Point::new(2.0, 1.0, 0.0));
        let (p1, p2) = closest_points_line_line(&r, &s);
        assert_relative_eq!(p1, Point::origin());
        assert_relative_eq!(p2, Point::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn parallel_segments() {
        let s1 = Line::segment(Point::origin(), Point::new(2.0, 0.0, 0.0));
        let s2 = Line::segment(Point::new(1.0, 1.0, 0.0), Point::new(3.0, 1.0, 0.0));
        let (p1, p2) = closest_points_line_line(&s1, &s2);
        assert_relative_eq!(na::distance(&p1, &p2), 1.0);
    }

    #[test]
    fn point_against_segment() {
        let p = Line::point(Point::new(1.0, 5.0, 0.0));
        let s = Line::segment(Point::origin(), Point::new(2.0, 0.0, 0.0));
        let (p1, p2) = closest_points_line_line(&p, &s);
        assert_relative_eq!(p1, Point::new(1.0, 5.0, 0.0));
        assert_relative_eq!(p2, Point::new(1.0, 0.0, 0.0));
    }
}
