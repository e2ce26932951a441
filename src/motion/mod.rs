//! Rigid motions used by continuous collision detection.

pub use self::rigid_motion::{interpolate_similarity, InterpolatedRigidMotion, RigidMotion};

mod rigid_motion;
