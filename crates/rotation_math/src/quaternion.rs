//! Quaternions.

use crate::vector::Vector3;
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// A quaternion `s + x i + y j + z k`.
///
/// Unlike [`Vector3`], equality is exact: two quaternions are equal only if
/// all four components have identical bit patterns, so `0.0` and `-0.0`
/// differ. Every NaN is treated as the same value, which keeps the relation
/// reflexive and lets the type implement [`Eq`] and [`Hash`].
///
/// No invariant is enforced. A quaternion only represents a rotation once the
/// caller has normalized it.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, Zeroable, Pod)]
pub struct Quaternion {
    s: f64,
    x: f64,
    y: f64,
    z: f64,
}

impl Quaternion {
    #[inline]
    pub const fn new(s: f64, x: f64, y: f64, z: f64) -> Self {
        Self { s, x, y, z }
    }

    #[inline]
    pub const fn from_parts(s: f64, vector: &Vector3) -> Self {
        Self::new(s, vector.x(), vector.y(), vector.z())
    }

    #[inline]
    pub const fn from_scalar(s: f64) -> Self {
        Self::new(s, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn from_vector(vector: &Vector3) -> Self {
        Self::from_parts(0.0, vector)
    }

    /// The multiplicative identity `1 + 0i + 0j + 0k`.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_scalar(1.0)
    }

    /// Creates the rotation quaternion for a rotation by `angle` radians
    /// about the axis with the given components.
    ///
    /// The axis is used as given. Pass a unit axis to obtain a unit
    /// quaternion.
    #[inline]
    pub fn from_axis_angle_components(angle: f64, x: f64, y: f64, z: f64) -> Self {
        let cos_half_angle = (angle / 2.0).cos();
        let sin_half_angle = (angle / 2.0).sin();
        Self::new(
            cos_half_angle,
            x * sin_half_angle,
            y * sin_half_angle,
            z * sin_half_angle,
        )
    }

    /// Creates the rotation quaternion for a rotation by `angle` radians
    /// about the given axis. See [`Self::from_axis_angle_components`].
    #[inline]
    pub fn from_axis_angle(angle: f64, axis: &Vector3) -> Self {
        Self::from_axis_angle_components(angle, axis.x(), axis.y(), axis.z())
    }

    #[inline]
    pub const fn scalar(&self) -> f64 {
        self.s
    }

    /// The vector part as a [`Vector3`].
    #[inline]
    pub const fn axis(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub const fn components(&self) -> [f64; 4] {
        [self.s, self.x, self.y, self.z]
    }

    #[inline]
    pub const fn scalar_part(&self) -> Self {
        Self::from_scalar(self.s)
    }

    #[inline]
    pub const fn vector_part(&self) -> Self {
        Self::new(0.0, self.x, self.y, self.z)
    }

    /// The rotation angle `2 acos(s)` in radians.
    ///
    /// Only meaningful for unit quaternions. The result is NaN if `s` lies
    /// outside `[-1, 1]`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.s.acos() * 2.0
    }

    #[inline]
    pub fn scaled(&self, scalar: f64) -> Self {
        Self::new(
            scalar * self.s,
            scalar * self.x,
            scalar * self.y,
            scalar * self.z,
        )
    }

    /// Computes the Hamilton product `self * other`. The product is not
    /// commutative.
    #[inline]
    pub fn times(&self, other: &Self) -> Self {
        let (s, x, y, z) = (self.s, self.x, self.y, self.z);
        let (s2, x2, y2, z2) = (other.s, other.x, other.y, other.z);
        Self::new(
            s * s2 - x * x2 - y * y2 - z * z2,
            s * x2 + s2 * x + y * z2 - y2 * z,
            s * y2 + s2 * y + z * x2 - z2 * x,
            s * z2 + s2 * z + x * y2 - x2 * y,
        )
    }

    /// Computes the conjugate, which has the vector part negated.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.s, -self.x, -self.y, -self.z)
    }

    #[inline]
    pub fn plus(&self, other: &Self) -> Self {
        Self::new(
            self.s + other.s,
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }

    #[inline]
    pub fn minus(&self, other: &Self) -> Self {
        Self::new(
            self.s - other.s,
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
        )
    }

    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.s * self.s + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Computes the norm (the Euclidean length of the four components).
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Computes the multiplicative inverse.
    ///
    /// A zero quaternion yields non-finite components.
    #[inline]
    pub fn inverse(&self) -> Self {
        let norm = self.norm();
        self.conjugate().scaled(1.0 / (norm * norm))
    }

    /// Computes the normalized version of the quaternion.
    ///
    /// A zero quaternion yields NaN components.
    #[inline]
    pub fn normalized(&self) -> Self {
        self.scaled(1.0 / self.norm())
    }

    /// Rotates the given vector with the sandwich product `q v q⁻¹`.
    #[inline]
    pub fn rotate_vector(&self, vector: &Vector3) -> Vector3 {
        self.times(&Self::from_vector(vector))
            .times(&self.inverse())
            .axis()
    }
}

/// Bit pattern used for exact comparison and hashing, with all NaNs mapped to
/// the same pattern.
fn comparison_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        self.components()
            .iter()
            .zip(other.components().iter())
            .all(|(&a, &b)| comparison_bits(a) == comparison_bits(b))
    }
}

impl Eq for Quaternion {}

impl Hash for Quaternion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for component in self.components() {
            comparison_bits(component).hash(state);
        }
    }
}

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| {
    a.plus(b)
});

impl_binop!(Sub, sub, Quaternion, Quaternion, Quaternion, |a, b| {
    a.minus(b)
});

impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    a.times(b)
});

impl_binop!(Mul, mul, Quaternion, f64, Quaternion, |a, b| { a.scaled(*b) });

impl_binop!(Mul, mul, f64, Quaternion, Quaternion, |a, b| { b.scaled(*a) });

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |val| {
    Quaternion::new(-val.s, -val.x, -val.y, -val.z)
});

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    a.components()
        .iter()
        .zip(b.components().iter())
        .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    a.components()
        .iter()
        .zip(b.components().iter())
        .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
});

impl fmt::Display for Quaternion {
    /// Writes the quaternion as a sum like `1.0 + 2.5i - 0.35j`.
    ///
    /// Terms equal to zero (including `-0.0`) are left out, so the zero
    /// quaternion is written as an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut has_terms = false;

        if self.s != 0.0 {
            write!(f, "{:?}", self.s)?;
            has_terms = true;
        }

        for (value, unit) in [(self.x, 'i'), (self.y, 'j'), (self.z, 'k')] {
            if value == 0.0 {
                continue;
            }
            if !has_terms {
                write!(f, "{value:?}{unit}")?;
            } else if value > 0.0 {
                write!(f, " + {value:?}{unit}")?;
            } else {
                write!(f, " - {:?}{unit}", -value)?;
            }
            has_terms = true;
        }

        Ok(())
    }
}
