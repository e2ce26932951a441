use crate::math::{Real, DEFAULT_EPSILON};
use crate::shape::{Line, Triangle};

/// Computes the parameter at which a line crosses a triangle.
///
/// Uses the Möller–Trumbore algorithm. Returns `None` if the line is parallel to the plane of the
/// triangle, if it passes outside of the triangle, or if the crossing happens outside of the
/// line bounds. Lines lying in the plane of the triangle are never reported.
pub fn cast_line_triangle(line: &Line, tri: &Triangle) -> Option<Real> {
    let e1 = tri.b - tri.a;
    let e2 = tri.c - tri.a;
    let p = line.dir.cross(&e2);
    let det = e1.dot(&p);

    if det.abs() <= DEFAULT_EPSILON * e1.norm() * e2.norm() * line.dir.norm() {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = line.origin - tri.a;
    let u = s.dot(&p) * inv_det;

    if u < 0.0 || u > 1.0 {
        return None;
    }

    let q = s.cross(&e1);
    let v = line.dir.dot(&q) * inv_det;

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = e2.dot(&q) * inv_det;

    if t < line.min || t > line.max {
        None
    } else {
        Some(t)
    }
}

#[cfg(test)]
mod test {
    use super::cast_line_triangle;
    use crate::math::{Point, Vector};
    use crate::shape::{Line, Triangle};

    fn tri() -> Triangle {
        Triangle::new(
            Point::new(0.0, 0.0, 1.0),
            Point::new(2.0, 0.0, 1.0),
            Point::new(0.0, 2.0, 1.0),
        )
    }

    #[test]
    fn ray_hits_triangle() {
        let ray = Line::ray(Point::new(0.5, 0.5, -1.0), Vector::z());
        assert_relative_eq!(cast_line_triangle(&ray, &tri()).unwrap(), 2.0);

        let backward = Line::ray(Point::new(0.5, 0.5, 3.0), Vector::z());
        assert_eq!(cast_line_triangle(&backward, &tri()), None);

        let line = Line::line(Point::new(0.5, 0.5, 3.0), Vector::z());
        assert_relative_eq!(cast_line_triangle(&line, &tri()).unwrap(), -2.0);
    }

    #[test]
    fn ray_misses_triangle() {
        let ray = Line::ray(Point::new(1.5, 1.5, -1.0), Vector::z());
        assert_eq!(cast_line_triangle(&ray, &tri()), None);

        let parallel = Line::ray(Point::new(0.5, 0.5, 1.0), Vector::x());
        assert_eq!(cast_line_triangle(&parallel, &tri()), None);

        let short = Line::segment(Point::new(0.5, 0.5, -1.0), Point::new(0.5, 0.5, 0.5));
        assert_eq!(cast_line_triangle(&short, &tri()), None);
    }
}
