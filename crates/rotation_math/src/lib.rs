//! Immutable vector and quaternion algebra for 3D rotations.

#[macro_use]
mod macros;

pub mod interop;
pub mod quaternion;
pub mod vector;

pub use quaternion::Quaternion;
pub use vector::{VECTOR3_EQUALITY_TOLERANCE, Vector3};
