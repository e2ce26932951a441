use crate::math::{Real, Rotation, Similarity, Translation, DEFAULT_EPSILON};

/// A continuous rigid motion.
///
/// This is a function, assumed to be continuous, that, given a parameter `t` returns a direct
/// similarity (rotation, translation and uniform scale).
pub trait RigidMotion {
    /// Get a position at the time `t`.
    fn position_at_time(&self, t: Real) -> Similarity<Real>;
}

impl RigidMotion for Similarity<Real> {
    fn position_at_time(&self, _: Real) -> Similarity<Real> {
        *self
    }
}

/// Interpolation between two similarities using LERP for the translation and the scale, and
/// SLERP for the rotation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InterpolatedRigidMotion {
    /// The transformation at `t = 0.0`.
    pub start: Similarity<Real>,
    /// The transformation at `t = 1.0`.
    pub end: Similarity<Real>,
}

impl InterpolatedRigidMotion {
    /// Initialize a lerp-slerp motion with the given start and end transformations.
    ///
    /// The `start` is the transformation at the time `t = 0.0` and `end` is the transformation at
    /// the time `t = 1.0`.
    pub fn new(start: Similarity<Real>, end: Similarity<Real>) -> Self {
        InterpolatedRigidMotion { start, end }
    }

    /// Does this motion leave the transformation unchanged?
    pub fn is_stationary(&self) -> bool {
        self.start == self.end
    }
}

impl RigidMotion for InterpolatedRigidMotion {
    fn position_at_time(&self, t: Real) -> Similarity<Real> {
        interpolate_similarity(&self.start, &self.end, t)
    }
}

/// Interpolates between two similarities.
///
/// The translation and scale are interpolated linearly. The rotation is interpolated with
/// SLERP, falling back to a normalized LERP when both rotations are (nearly) opposite.
pub fn interpolate_similarity(
    start: &Similarity<Real>,
    end: &Similarity<Real>,
    t: Real,
) -> Similarity<Real> {
    let translation = start
        .isometry
        .translation
        .vector
        .lerp(&end.isometry.translation.vector, t);
    let rotation = start
        .isometry
        .rotation
        .try_slerp(&end.isometry.rotation, t, DEFAULT_EPSILON)
        .unwrap_or_else(|| nlerp(&start.isometry.rotation, &end.isometry.rotation, t));
    let scaling = start.scaling() + (end.scaling() - start.scaling()) * t;

    Similarity::from_parts(Translation::from(translation), rotation, scaling)
}

fn nlerp(start: &Rotation<Real>, end: &Rotation<Real>, t: Real) -> Rotation<Real> {
    // Taking the shortest path, `end` and `-end` represent the same rotation.
    let end = if start.coords.dot(&end.coords) < 0.0 {
        -end.into_inner()
    } else {
        end.into_inner()
    };
    let q = start.into_inner().lerp(&end, t);
    Rotation::try_new(q, DEFAULT_EPSILON).unwrap_or(*start)
}

#[cfg(test)]
mod test {
    use super::{InterpolatedRigidMotion, RigidMotion};
    use crate::math::{Point, Real, Similarity, Vector};

    #[test]
    fn interpolate_translation_and_scale() {
        let start = Similarity::new(Vector::new(0.0, 0.0, 0.0), Vector::zeros(), 1.0);
        let end = Similarity::new(Vector::new(10.0, 0.0, 0.0), Vector::zeros(), 3.0);
        let motion = InterpolatedRigidMotion::new(start, end);

        let mid = motion.position_at_time(0.5);
        assert_relative_eq!(mid.scaling(), 2.0);
        assert_relative_eq!(
            mid.transform_point(&Point::new(1.0, 0.0, 0.0)),
            Point::new(7.0, 0.0, 0.0),
            epsilon = 1.0e-5
        );
        assert_relative_eq!(motion.position_at_time(0.0), start, epsilon = 1.0e-6);
    }

    #[test]
    fn interpolate_rotation() {
        let angle = core::f64::consts::FRAC_PI_2 as Real;
        let start = Similarity::identity();
        let end = Similarity::new(Vector::zeros(), Vector::z() * angle, 1.0);
        let mid = InterpolatedRigidMotion::new(start, end).position_at_time(0.5);
        assert_relative_eq!(mid.isometry.rotation.angle(), angle / 2.0, epsilon = 1.0e-5);
    }
}
