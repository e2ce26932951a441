use crate::bounding_volume::Aabb;
use crate::shape::Plane;

use super::aabb_utils::unbounded_aabb;

impl Plane {
    /// Computes the AABB of this plane.
    ///
    /// Except for planes orthogonal to a coordinate axis, a plane is not bounded along any axis,
    /// so this is the AABB covering the whole space.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let mut aabb = unbounded_aabb();
        for i in 0..3 {
            let n = self.normal[i];
            if n.abs() == 1.0 {
                aabb.mins[i] = self.point[i];
                aabb.maxs[i] = self.point[i];
            }
        }
        aabb
    }
}
