//! Sequential axis rotation used to pose boxes before projection.

use claw_types::{Point3, Pose};

use crate::vector::Vec3;

/// Rotate `p` by `pose`: Y-Z plane by `rx`, then X-Z plane by `ry`, then X-Y
/// plane by `rz`. The order is fixed; swapping it changes the resulting pose.
pub fn rotate(p: &Point3, pose: &Pose) -> Point3 {
    let (mut x, mut y, mut z) = (p.x, p.y, p.z);
    if pose.rx != 0.0 {
        let (s, c) = pose.rx.to_radians().sin_cos();
        (y, z) = (y * c - z * s, y * s + z * c);
    }
    if pose.ry != 0.0 {
        let (s, c) = pose.ry.to_radians().sin_cos();
        (x, z) = (x * c + z * s, -x * s + z * c);
    }
    if pose.rz != 0.0 {
        let (s, c) = pose.rz.to_radians().sin_cos();
        (x, y) = (x * c - y * s, x * s + y * c);
    }
    Point3::new(x, y, z)
}

pub fn rotate_vec(v: &Vec3, pose: &Pose) -> Vec3 {
    rotate(&Point3::from(*v), pose).into()
}
