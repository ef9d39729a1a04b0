use crate::scalar::{Float, Scalar};
use crate::GeometryError;

use euclid::Vector2D;

/// Vector algebra not provided by euclid.
///
/// Dot and cross products are euclid's own `dot` and `cross`.
pub trait VectorExt<S>: Sized {
    /// Euclidean norm, computed with `hypot` so that large components do not
    /// overflow.
    fn magnitude(&self) -> S;

    /// The vector divided by its magnitude.
    ///
    /// A zero vector yields `(NaN, NaN)`. Check the magnitude first or use
    /// [`VectorExt::try_unit_form`] when a defined result is required.
    fn unit_form(&self) -> Self;

    /// Same as [`VectorExt::unit_form`] but reports zero vectors.
    fn try_unit_form(&self) -> Result<Self, GeometryError>;

    /// Dot product divided by the product of both magnitudes, that is the
    /// cosine of the angle between the two vectors.
    ///
    /// NaN if either vector has zero magnitude.
    fn normalized_dot(&self, other: Self) -> S;

    /// Right-hand (counter-clockwise) perpendicular: `(-dy, dx)`.
    fn ccw_perpendicular(&self) -> Self;

    /// Left-hand (clockwise) perpendicular: `(dy, -dx)`.
    fn cw_perpendicular(&self) -> Self;
}

impl<S: Scalar, U> VectorExt<S> for Vector2D<S, U> {
    #[inline]
    fn magnitude(&self) -> S {
        Float::hypot(self.x, self.y)
    }

    #[inline]
    fn unit_form(&self) -> Self {
        let m = self.magnitude();
        Vector2D::new(self.x / m, self.y / m)
    }

    fn try_unit_form(&self) -> Result<Self, GeometryError> {
        if self.magnitude() == S::ZERO {
            geom_log!("unit_form: zero vector");
            return Err(GeometryError::ZeroVector);
        }

        Ok(self.unit_form())
    }

    #[inline]
    fn normalized_dot(&self, other: Self) -> S {
        self.dot(other) / (self.magnitude() * other.magnitude())
    }

    #[inline]
    fn ccw_perpendicular(&self) -> Self {
        Vector2D::new(-self.y, self.x)
    }

    #[inline]
    fn cw_perpendicular(&self) -> Self {
        Vector2D::new(self.y, -self.x)
    }
}

#[cfg(test)]
use crate::vector;
#[cfg(test)]
use euclid::approxeq::ApproxEq;

#[test]
fn magnitude() {
    assert_eq!(vector(3.0f64, 4.0).magnitude(), 5.0);
    assert_eq!(vector(0.0f64, 0.0).magnitude(), 0.0);

    // A naive sqrt(x² + y²) overflows here.
    let big = vector(1e200f64, 1e200);
    assert!(big.magnitude().is_finite());
    assert!((big.magnitude() / 1e200).approx_eq(&core::f64::consts::SQRT_2));
}

#[test]
fn unit_form() {
    let v = vector(3.0f64, -4.0);
    let u = v.unit_form();
    assert!(u.approx_eq(&vector(0.6, -0.8)));
    assert!(u.magnitude().approx_eq(&1.0));
    assert!(v.dot(u) > 0.0);

    let zero = vector(0.0f64, 0.0).unit_form();
    assert!(zero.x.is_nan() && zero.y.is_nan());

    assert_eq!(
        vector(0.0f32, 0.0).try_unit_form(),
        Err(GeometryError::ZeroVector)
    );
    assert_eq!(vector(0.0f32, 2.0).try_unit_form(), Ok(vector(0.0, 1.0)));
}

#[test]
fn normalized_dot() {
    let a = vector(2.0f64, 0.0);
    assert!(a.normalized_dot(vector(0.0, 5.0)).approx_eq(&0.0));
    assert!(a.normalized_dot(vector(7.0, 0.0)).approx_eq(&1.0));
    assert!(a.normalized_dot(vector(-1.0, 0.0)).approx_eq(&-1.0));
    assert!(a
        .normalized_dot(vector(1.0, 1.0))
        .approx_eq(&core::f64::consts::FRAC_1_SQRT_2));

    assert!(a.normalized_dot(vector(0.0, 0.0)).is_nan());
}

#[test]
fn perpendiculars() {
    let v = vector(1.0f32, 2.0);
    assert_eq!(v.ccw_perpendicular(), vector(-2.0, 1.0));
    assert_eq!(v.cw_perpendicular(), vector(2.0, -1.0));
    assert_eq!(v.ccw_perpendicular(), -v.cw_perpendicular());
    assert_eq!(v.dot(v.ccw_perpendicular()), 0.0);

    // Counter-clockwise in a y-up frame: the cross product is positive.
    assert!(v.cross(v.ccw_perpendicular()) > 0.0);
    assert!(v.cross(v.cw_perpendicular()) < 0.0);
}

#[cfg(test)]
mod properties {
    use super::VectorExt;
    use crate::vector;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn dot_is_symmetric(
            x1 in -1.0e3f64..1.0e3, y1 in -1.0e3f64..1.0e3,
            x2 in -1.0e3f64..1.0e3, y2 in -1.0e3f64..1.0e3,
        ) {
            let (a, b) = (vector(x1, y1), vector(x2, y2));
            prop_assert_eq!(a.dot(b), b.dot(a));
        }

        #[test]
        fn unit_form_has_unit_length(x in -1.0e6f64..1.0e6, y in -1.0e6f64..1.0e6) {
            let v = vector(x, y);
            prop_assume!(v.magnitude() > 1e-9);
            let u = v.unit_form();
            prop_assert!((u.magnitude() - 1.0).abs() < 1e-12);
            prop_assert!(v.dot(u) > 0.0);
        }
    }
}
