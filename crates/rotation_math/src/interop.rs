//! Conversions to and from [`nalgebra`] types.

use crate::{quaternion::Quaternion, vector::Vector3};

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(vector: Vector3) -> Self {
        nalgebra::Vector3::new(vector.x(), vector.y(), vector.z())
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(vector: nalgebra::Vector3<f64>) -> Self {
        Vector3::new(vector.x, vector.y, vector.z)
    }
}

impl From<Quaternion> for nalgebra::Quaternion<f64> {
    fn from(quaternion: Quaternion) -> Self {
        let [s, x, y, z] = quaternion.components();
        nalgebra::Quaternion::new(s, x, y, z)
    }
}

impl From<nalgebra::Quaternion<f64>> for Quaternion {
    fn from(quaternion: nalgebra::Quaternion<f64>) -> Self {
        Quaternion::new(quaternion.w, quaternion.i, quaternion.j, quaternion.k)
    }
}
