#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! A small 2D affine geometry kernel on top of euclid.
//!
//! # Overview.
//!
//! This crate implements the maths to work with:
//!
//! - angles and their canonical forms ([`Angle`], [`Quadrant`]),
//! - vectors ([`VectorExt`] on top of euclid's vectors),
//! - line segments and infinite lines ([`LineSegment`], [`Line`]),
//! - independent x/y scale factors ([`Scale`]),
//! - 2D affine transforms ([`AffineTransform`]).
//!
//! Points, vectors, sizes and rectangles are plain euclid values. Every type in
//! this crate is a `Copy` value and every operation is a pure function of its
//! arguments.
//!
//! # Degenerate input
//!
//! Most operations follow IEEE-754 propagation: dividing by a zero length or a
//! zero determinant produces NaN or infinity rather than an error. Callers that
//! need a defined answer either check their operands first (non-zero magnitude,
//! non-zero segment length, non-zero determinant) or use the `try_*` variants
//! which report a [`GeometryError`].
//!
//! The only operations with a built-in "no result" answer are the ones where
//! the absence of a result is geometric rather than numeric, for example
//! [`LineSegment::center_with_radius`] when the segment is longer than the
//! circle's diameter.
//!
//! # Operator conventions
//!
//! Named methods are the primary API. Operators are layered on top:
//!
//! - `transform + vector`, `transform + angle` apply a relative translation or
//!   rotation and return a new transform (`-` applies the opposite one),
//! - `transform * factor`, `transform * scale` apply a relative scale (`/` the
//!   inverse one),
//! - `point * transform`, `size * transform`, `rect * transform` apply the
//!   transform to the value on the left.
//!
//! # Example
//!
//! ```
//! use planar_geom::error::GeometryError;
//! use planar_geom::line::LineSegment;
//! use planar_geom::point;
//! use planar_geom::vector::VectorExt;
//!
//! let a = LineSegment::new(point(0.0, 0.0), point(4.0, 4.0));
//! let b = LineSegment::new(point(0.0, 4.0), point(4.0, 0.0));
//! assert_eq!(a.crossing_point(&b), Some(point(2.0, 2.0)));
//! assert_eq!(a.to_vector().magnitude(), a.length());
//!
//! // Same supporting line: no single intersection point.
//! assert_eq!(a.flip().try_crossing_point(&a), Err(GeometryError::ParallelLines));
//! ```

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

#[macro_use]
mod macros;
pub mod angle;
pub mod error;
pub mod line;
pub mod scale;
pub mod transform;
pub mod vector;

#[doc(inline)]
pub use crate::angle::{Angle, Quadrant};
#[doc(inline)]
pub use crate::error::GeometryError;
#[doc(inline)]
pub use crate::line::{Line, LineSegment};
#[doc(inline)]
pub use crate::scale::Scale;
#[doc(inline)]
pub use crate::transform::AffineTransform;
#[doc(inline)]
pub use crate::vector::VectorExt;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use euclid::Trig;
    pub(crate) use num_traits::cast::cast;
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + Trig
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const HALF: Self;
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const ONE_EIGHTY: Self;

        /// Lossy conversion used to carry values in error reports.
        fn to_f64_lossy(self) -> f64 {
            cast::<Self, f64>(self).unwrap_or(f64::NAN)
        }
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const ONE_EIGHTY: Self = 180.0;
    }

    impl Scalar for f64 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const ONE_EIGHTY: Self = 180.0;
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Alias for `euclid::default::Size2D`.
pub use euclid::default::Size2D as Size;

/// Alias for `euclid::default::Rect`.
pub use euclid::default::Rect;

/// Alias for `euclid::default::Box2D`
pub use euclid::default::Box2D;

/// Alias for `euclid::default::Transform2D`
pub type Transform<S> = euclid::default::Transform2D<S>;

/// Alias for `euclid::default::Rotation2D`
pub type Rotation<S> = euclid::default::Rotation2D<S>;

/// Alias for `euclid::default::Translation2D`
pub type Translation<S> = euclid::Translation2D<S, euclid::UnknownUnit, euclid::UnknownUnit>;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}

/// Shorthand for `Size::new(x, y)`.
#[inline]
pub fn size<S>(w: S, h: S) -> Size<S> {
    Size::new(w, h)
}

pub mod traits {
    pub use crate::vector::VectorExt;

    use crate::{AffineTransform, Point, Rotation, Scalar, Transform, Translation, Vector};

    /// Anything that maps points and vectors of the plane.
    pub trait Transformation<S> {
        fn transform_point(&self, p: Point<S>) -> Point<S>;
        fn transform_vector(&self, v: Vector<S>) -> Vector<S>;
    }

    impl<S: Scalar> Transformation<S> for AffineTransform<S> {
        fn transform_point(&self, p: Point<S>) -> Point<S> {
            self.transform_point(p)
        }

        fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
            self.transform_vector(v)
        }
    }

    impl<S: Scalar> Transformation<S> for Transform<S> {
        fn transform_point(&self, p: Point<S>) -> Point<S> {
            self.transform_point(p)
        }

        fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
            self.transform_vector(v)
        }
    }

    impl<S: Scalar> Transformation<S> for Rotation<S> {
        fn transform_point(&self, p: Point<S>) -> Point<S> {
            self.transform_point(p)
        }

        fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
            self.transform_vector(v)
        }
    }

    impl<S: Scalar> Transformation<S> for Translation<S> {
        fn transform_point(&self, p: Point<S>) -> Point<S> {
            self.transform_point(p)
        }

        fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
            v
        }
    }

    // Automatically implement Transformation for all &Transformation.
    impl<'l, S: Scalar, T: Transformation<S>> Transformation<S> for &'l T {
        #[inline]
        fn transform_point(&self, p: Point<S>) -> Point<S> {
            (*self).transform_point(p)
        }

        #[inline]
        fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
            (*self).transform_vector(v)
        }
    }
}
