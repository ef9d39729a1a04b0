//! Independent x/y scale factors.

use crate::scalar::Scalar;
use crate::{Rect, Size, Vector};

use core::ops::{Mul, Neg};

/// A pair of scale factors, one per axis.
///
/// Unlike `euclid::Scale` (a single factor converting between units), each
/// axis scales independently and either factor may be zero.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Scale<S> {
    pub sx: S,
    pub sy: S,
}

impl<S: Scalar> Scale<S> {
    #[inline]
    pub fn new(sx: S, sy: S) -> Self {
        Scale { sx, sy }
    }

    /// The same factor on both axes.
    #[inline]
    pub fn uniform(factor: S) -> Self {
        Scale {
            sx: factor,
            sy: factor,
        }
    }

    /// 1:1.
    #[inline]
    pub fn identity() -> Self {
        Scale::uniform(S::ONE)
    }

    /// Component-wise reciprocal.
    ///
    /// A zero factor (of either sign) inverts to positive infinity: scaling by
    /// zero is undone by scaling to infinity, the same degeneracy a singular
    /// affine transform has.
    pub fn inverted(&self) -> Self {
        let invert = |v: S| {
            if v == S::ZERO {
                S::infinity()
            } else {
                S::ONE / v
            }
        };

        Scale {
            sx: invert(self.sx),
            sy: invert(self.sy),
        }
    }

    /// Arithmetic negation of both factors.
    #[inline]
    pub fn negated(&self) -> Self {
        Scale {
            sx: -self.sx,
            sy: -self.sy,
        }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.sx == S::ONE && self.sy == S::ONE
    }

    #[inline]
    pub fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
        Vector::new(v.x * self.sx, v.y * self.sy)
    }

    #[inline]
    pub fn transform_size(&self, size: Size<S>) -> Size<S> {
        Size::new(size.width * self.sx, size.height * self.sy)
    }

    /// Scales the size of the rectangle, keeping its origin in place.
    #[inline]
    pub fn transform_rect(&self, rect: &Rect<S>) -> Rect<S> {
        Rect::new(rect.origin, self.transform_size(rect.size))
    }

    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        Vector::new(self.sx, self.sy)
    }
}

impl<S: Scalar> Default for Scale<S> {
    fn default() -> Self {
        Scale::identity()
    }
}

/// Unary minus inverts the scale rather than negating it.
///
/// This mirrors reading `-scale` as "the opposite scaling". Whether it should
/// be arithmetic negation instead is an open question; use
/// [`Scale::negated`] or [`Scale::inverted`] to be explicit.
impl<S: Scalar> Neg for Scale<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.inverted()
    }
}

impl<S: Scalar> Mul<S> for Scale<S> {
    type Output = Self;
    #[inline]
    fn mul(self, factor: S) -> Self {
        Scale::new(self.sx * factor, self.sy * factor)
    }
}

impl<S> From<Vector<S>> for Scale<S> {
    #[inline]
    fn from(v: Vector<S>) -> Self {
        Scale { sx: v.x, sy: v.y }
    }
}

#[cfg(test)]
use crate::{point, size, vector};

#[test]
fn inversion() {
    assert_eq!(Scale::new(2.0f32, 0.5).inverted(), Scale::new(0.5, 2.0));
    assert_eq!(Scale::new(-4.0f32, 1.0).inverted(), Scale::new(-0.25, 1.0));

    let zero = Scale::new(0.0f64, -0.0).inverted();
    assert_eq!(zero.sx, f64::INFINITY);
    assert_eq!(zero.sy, f64::INFINITY);
}

#[test]
fn negation_operator_inverts() {
    let s = Scale::new(2.0f64, 4.0);
    assert_eq!(-s, s.inverted());
    assert_eq!(-s, Scale::new(0.5, 0.25));
    assert_eq!(s.negated(), Scale::new(-2.0, -4.0));
}

#[test]
fn application() {
    let s = Scale::new(2.0f32, 3.0);
    assert_eq!(s.transform_vector(vector(1.0, 1.0)), vector(2.0, 3.0));
    assert_eq!(s.transform_size(size(4.0, 5.0)), size(8.0, 15.0));
    assert_eq!(
        s.transform_rect(&Rect::new(point(1.0, 1.0), size(1.0, 2.0))),
        Rect::new(point(1.0, 1.0), size(2.0, 6.0))
    );
    assert_eq!(s * 2.0, Scale::new(4.0, 6.0));
    assert!(Scale::<f32>::default().is_identity());
    assert_eq!(Scale::from(vector(1.0f32, 2.0)).to_vector(), vector(1.0, 2.0));
}
