//! Vectors.

use bytemuck::{Pod, Zeroable};
use std::fmt;

/// Two vectors compare equal when every component differs by less than this.
pub const VECTOR3_EQUALITY_TOLERANCE: f64 = 0.001;

/// A 3-dimensional vector.
///
/// Equality is tolerance-based: two vectors are equal if each pair of
/// components differs by less than [`VECTOR3_EQUALITY_TOLERANCE`]. The
/// relation is not transitive close to the threshold, so the type implements
/// neither [`Eq`] nor [`Hash`](std::hash::Hash).
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, Zeroable, Pod)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Multiplies every component by the given scalar.
    #[inline]
    pub fn scaled(&self, scalar: f64) -> Self {
        Self::new(scalar * self.x, scalar * self.y, scalar * self.z)
    }

    /// Computes the component-wise sum with another vector.
    #[inline]
    pub fn plus(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Computes the component-wise difference with another vector.
    #[inline]
    pub fn minus(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Computes the Euclidean length of the vector.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < VECTOR3_EQUALITY_TOLERANCE
            && (self.y - other.y).abs() < VECTOR3_EQUALITY_TOLERANCE
            && (self.z - other.z).abs() < VECTOR3_EQUALITY_TOLERANCE
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| { a.plus(b) });

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| { a.minus(b) });

impl_binop!(Mul, mul, Vector3, f64, Vector3, |a, b| { a.scaled(*b) });

impl_binop!(Mul, mul, f64, Vector3, Vector3, |a, b| { b.scaled(*a) });

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

impl_abs_diff_eq!(Vector3, |a, b, epsilon| {
    approx::AbsDiffEq::abs_diff_eq(&a.x, &b.x, epsilon)
        && approx::AbsDiffEq::abs_diff_eq(&a.y, &b.y, epsilon)
        && approx::AbsDiffEq::abs_diff_eq(&a.z, &b.z, epsilon)
});

impl_relative_eq!(Vector3, |a, b, epsilon, max_relative| {
    approx::RelativeEq::relative_eq(&a.x, &b.x, epsilon, max_relative)
        && approx::RelativeEq::relative_eq(&a.y, &b.y, epsilon, max_relative)
        && approx::RelativeEq::relative_eq(&a.z, &b.z, epsilon, max_relative)
});

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::{AbsDiffEq, assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-3;

    fn v1() -> Vector3 {
        Vector3::new(1.0, 1.0, 1.0)
    }

    fn v2() -> Vector3 {
        Vector3::new(134.1, 2.5, 9.8)
    }

    fn v3() -> Vector3 {
        Vector3::new(2.1, -0.35, 0.0)
    }

    fn assert_components(v: Vector3, x: f64, y: f64, z: f64) {
        assert_eq!(v.x().to_bits(), x.to_bits(), "x of {v}");
        assert_eq!(v.y().to_bits(), y.to_bits(), "y of {v}");
        assert_eq!(v.z().to_bits(), z.to_bits(), "z of {v}");
    }

    #[test]
    fn scaling_vector3_works() {
        assert_components(v1().scaled(0.0), 0.0, 0.0, 0.0);
        assert_components(v2().scaled(25.1), 3365.91, 62.75, 245.98000000000002);
        assert_components(
            v3().scaled(-1.3),
            -2.7300000000000004,
            0.45499999999999996,
            -0.0,
        );
        assert_components(v2().scaled(0.01), 1.341, 0.025, 0.098);
    }

    #[test]
    fn adding_vector3s_works() {
        assert_eq!(v1().plus(&v2()), Vector3::new(135.1, 3.5, 10.8));
        assert_eq!(v2().plus(&v3()), Vector3::new(136.2, 2.15, 9.8));
        assert_eq!(v3().plus(&v1()), Vector3::new(3.1, 0.65, 1.0));
    }

    #[test]
    fn subtracting_vector3s_works() {
        assert_eq!(v1().minus(&v2()), Vector3::new(-133.1, -1.5, -8.8));
        assert_eq!(v2().minus(&v3()), Vector3::new(132.0, 2.85, 9.8));
        assert_eq!(v3().minus(&v1()), Vector3::new(1.1, -1.35, -1.0));
    }

    #[test]
    fn computing_vector3_length_works() {
        assert_eq!(v1().length(), 1.7320508075688772);
        assert_eq!(v2().length(), 134.48085365582716);
        assert_eq!(v3().length(), 2.1289668856043766);
        assert_abs_diff_eq!(v3().length(), 2.1290, epsilon = EPSILON);
    }

    #[test]
    fn length_of_zero_vector3_is_zero() {
        assert_eq!(Vector3::zeros().length(), 0.0);
    }

    #[test]
    fn length_of_vector3_with_nan_is_nan() {
        assert!(Vector3::new(f64::NAN, 1.0, 0.0).length().is_nan());
    }

    #[test]
    fn vector3_equality_tolerates_small_differences() {
        assert_eq!(Vector3::new(1.0, 1.0, 1.0), Vector3::new(1.0004, 1.0, 1.0));
        assert_eq!(Vector3::new(1.0, 1.0, 1.0), Vector3::new(1.0, 0.9995, 1.0009));
    }

    #[test]
    fn vector3_equality_rejects_differences_at_tolerance() {
        assert_ne!(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 0.002));
        assert_ne!(Vector3::new(1.0, 1.0, 1.0), Vector3::new(1.0, 1.0011, 1.0));
    }

    #[test]
    fn vector3_equality_is_not_transitive() {
        let a = Vector3::new(0.0, 0.0, 0.0);
        let b = Vector3::new(0.0007, 0.0, 0.0);
        let c = Vector3::new(0.0014, 0.0, 0.0);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn vector3_with_nan_is_never_equal() {
        let v = Vector3::new(f64::NAN, 0.0, 0.0);
        assert_ne!(v, v);
    }

    #[test]
    fn vector3_operators_match_named_methods() {
        let a = v2();
        let b = v3();
        assert_components(&a + &b, 136.2, 2.15, 9.8);
        assert_eq!(a - b, a.minus(&b));
        assert_eq!(&a * 2.0, a.scaled(2.0));
        assert_eq!(2.0 * a, a.scaled(2.0));
        assert_components(-&b, -2.1, 0.35, -0.0);
    }

    #[test]
    fn formatting_vector3_works() {
        assert_eq!(v1().to_string(), "(1.0, 1.0, 1.0)");
        assert_eq!(v3().to_string(), "(2.1, -0.35, 0.0)");
        assert_eq!(Vector3::new(-0.0, 1.5, 250.0).to_string(), "(-0.0, 1.5, 250.0)");
    }

    #[test]
    fn vector3_relative_comparison_scales_with_magnitude() {
        assert_relative_eq!(
            Vector3::new(1e6, -2e6, 3.0),
            Vector3::new(1e6 + 0.5, -2e6, 3.0),
            max_relative = 1e-6
        );
        assert!(!approx::relative_eq!(
            Vector3::new(1.0, -2.0, 3.0),
            Vector3::new(1.5, -2.0, 3.0),
            max_relative = 1e-6
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn vector3_deserializes_from_named_fields() {
        let v: Vector3 = ron::from_str("(x: 2.1, y: -0.35, z: 0.0)").unwrap();
        assert_components(v, 2.1, -0.35, 0.0);
    }

    #[test]
    fn vector3_default_is_zero() {
        assert_components(Vector3::default(), 0.0, 0.0, 0.0);
    }

    proptest! {
        #[test]
        fn scaling_scales_length_by_absolute_factor(
            x in -1e3..1e3,
            y in -1e3..1e3,
            z in -1e3..1e3,
            k in -1e2_f64..1e2,
        ) {
            let v = Vector3::new(x, y, z);
            let expected = k.abs() * v.length();
            prop_assert!(v.scaled(k).length().abs_diff_eq(&expected, 1e-9 * (1.0 + expected)));
        }

        #[test]
        fn length_is_never_negative(x in -1e6..1e6, y in -1e6..1e6, z in -1e6..1e6) {
            prop_assert!(Vector3::new(x, y, z).length() >= 0.0);
        }
    }
}
