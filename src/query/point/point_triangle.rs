use crate::math::{Point, Real};
use crate::query::point::project_point_line;
use crate::shape::Triangle;

/// Projects a point on a solid triangle.
///
/// Degenerate triangles are handled as the union of their edges.
pub fn project_point_triangle(tri: &Triangle, pt: &Point<Real>) -> Point<Real> {
    if tri.is_degenerate() {
        return tri
            .edges()
            .iter()
            .map(|edge| project_point_line(edge, pt).1)
            .min_by_key(|proj| ordered_float::OrderedFloat(na::distance_squared(proj, pt)))
            .unwrap_or(tri.a);
    }

    let a = tri.a;
    let b = tri.b;
    let c = tri.c;

    let ab = b - a;
    let ac = c - a;
    let ap = pt - a;

    let ab_ap = ab.dot(&ap);
    let ac_ap = ac.dot(&ap);

    if ab_ap <= 0.0 && ac_ap <= 0.0 {
        return a;
    }

    let bp = pt - b;
    let ab_bp = ab.dot(&bp);
    let ac_bp = ac.dot(&bp);

    if ab_bp >= 0.0 && ac_bp <= ab_bp {
        return b;
    }

    let vc = ab_ap * ac_bp - ab_bp * ac_ap;
    if vc <= 0.0 && ab_ap >= 0.0 && ab_bp <= 0.0 {
        let v = ab_ap / (ab_ap - ab_bp);
        return a + ab * v;
    }

    let cp = pt - c;
    let ab_cp = ab.dot(&cp);
    let ac_cp = ac.dot(&cp);

    if ac_cp >= 0.0 && ab_cp <= ac_cp {
        return c;
    }

    let vb = ab_cp * ac_ap - ab_ap * ac_cp;
    if vb <= 0.0 && ac_ap >= 0.0 && ac_cp <= 0.0 {
        let w = ac_ap / (ac_ap - ac_cp);
        return a + ac * w;
    }

    let va = ab_bp * ac_cp - ab_cp * ac_bp;
    if va <= 0.0 && ac_bp - ab_bp >= 0.0 && ab_cp - ac_cp >= 0.0 {
        let w = (ac_bp - ab_bp) / ((ac_bp - ab_bp) + (ab_cp - ac_cp));
        return b + (c - b) * w;
    }

    // Inside the face region.
    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    a + ab * v + ac * w
}

/// The distance between a point and a solid triangle.
#[inline]
pub fn distance_point_triangle(tri: &Triangle, pt: &Point<Real>) -> Real {
    na::distance(pt, &project_point_triangle(tri, pt))
}
