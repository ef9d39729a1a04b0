//! 2D affine transforms.
//!
//! An [`AffineTransform`] stores the six coefficients of the matrix
//!
//! ```text
//! [x' y' 1] = [x y 1] · | a  b  0 |
//!                       | c  d  0 |
//!                       | tx ty 1 |
//! ```
//!
//! that is `x' = a·x + c·y + tx` and `y' = b·x + d·y + ty`. This is the same
//! row-vector layout as `euclid::Transform2D` (`m11 = a`, `m12 = b`,
//! `m21 = c`, `m22 = d`, `m31 = tx`, `m32 = ty`).
//!
//! Scale, rotation and translation are views recomputed from the coefficients
//! on every access. Composition always multiplies matrices.

use crate::scalar::{Float, Scalar};
use crate::{point, Angle, Box2D, Point, Rect, Scale, Size, Transform, Vector};

use core::fmt;
use core::ops::{Add, Div, Mul, Sub};

/// A 2D affine transform: a linear map followed by a translation.
///
/// Equality is exact and coefficient-wise.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct AffineTransform<S> {
    pub a: S,
    pub b: S,
    pub c: S,
    pub d: S,
    pub tx: S,
    pub ty: S,
}

impl<S: Scalar> AffineTransform<S> {
    #[inline]
    pub fn new(a: S, b: S, c: S, d: S, tx: S, ty: S) -> Self {
        AffineTransform { a, b, c, d, tx, ty }
    }

    #[inline]
    pub fn identity() -> Self {
        AffineTransform::new(S::ONE, S::ZERO, S::ZERO, S::ONE, S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn translation(x: S, y: S) -> Self {
        AffineTransform::new(S::ONE, S::ZERO, S::ZERO, S::ONE, x, y)
    }

    #[inline]
    pub fn translation_by_vector(v: Vector<S>) -> Self {
        AffineTransform::translation(v.x, v.y)
    }

    #[inline]
    pub fn scale(sx: S, sy: S) -> Self {
        AffineTransform::new(sx, S::ZERO, S::ZERO, sy, S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn from_scale(scale: Scale<S>) -> Self {
        AffineTransform::scale(scale.sx, scale.sy)
    }

    #[inline]
    pub fn uniform_scale(factor: S) -> Self {
        AffineTransform::scale(factor, factor)
    }

    /// Counter-clockwise rotation in a y-up frame.
    #[inline]
    pub fn rotation(angle: Angle<S>) -> Self {
        let (sin, cos) = angle.sin_cos();
        AffineTransform::new(cos, sin, -sin, cos, S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn rotation_radians(radians: S) -> Self {
        AffineTransform::rotation(Angle::radians(radians))
    }

    #[inline]
    pub fn rotation_degrees(degrees: S) -> Self {
        AffineTransform::rotation(Angle::degrees(degrees))
    }

    #[inline]
    pub fn rotation_pi_count(count: S) -> Self {
        AffineTransform::rotation(Angle::pi_count(count))
    }

    /// Mirrors the x axis (`x' = -x`).
    #[inline]
    pub fn flip_x() -> Self {
        AffineTransform::scale(-S::ONE, S::ONE)
    }

    /// Mirrors the y axis (`y' = -y`).
    #[inline]
    pub fn flip_y() -> Self {
        AffineTransform::scale(S::ONE, -S::ONE)
    }

    /// Builds a transform from its decomposed parts.
    ///
    /// All six coefficients are computed, whatever the parameters:
    /// `a = sx·cos`, `b = sy·sin`, `c = -sx·sin`, `d = sy·cos`. The result
    /// equals `rotation(angle).then(&scale(sx, sy)).then(&translation(..))`
    /// and decomposes back into the same parts when the scale is uniform.
    pub fn from_parts(scale: Scale<S>, rotation: Angle<S>, translation: Vector<S>) -> Self {
        let (sin, cos) = rotation.sin_cos();
        AffineTransform {
            a: scale.sx * cos,
            b: scale.sy * sin,
            c: -scale.sx * sin,
            d: scale.sy * cos,
            tx: translation.x,
            ty: translation.y,
        }
    }

    #[inline]
    pub fn translation_vector(&self) -> Vector<S> {
        Vector::new(self.tx, self.ty)
    }

    /// Horizontal scale, `sqrt(a² + c²)`.
    #[inline]
    pub fn sx(&self) -> S {
        Float::hypot(self.a, self.c)
    }

    /// Vertical scale, `sqrt(b² + d²)`.
    #[inline]
    pub fn sy(&self) -> S {
        Float::hypot(self.b, self.d)
    }

    #[inline]
    pub fn scale_factors(&self) -> Scale<S> {
        Scale::new(self.sx(), self.sy())
    }

    /// Rotation, `atan2(b, a)`.
    ///
    /// Together with [`AffineTransform::scale_factors`] this assumes the
    /// transform carries no shear. A sheared transform (or a non-uniform scale
    /// applied after a rotation) does not decompose back into the parts it was
    /// built from.
    #[inline]
    pub fn rotation_angle(&self) -> Angle<S> {
        Angle::radians(Float::atan2(self.b, self.a))
    }

    #[inline]
    pub fn radians(&self) -> S {
        self.rotation_angle().radians
    }

    #[inline]
    pub fn degrees(&self) -> S {
        self.rotation_angle().to_degrees()
    }

    #[inline]
    pub fn pi_count(&self) -> S {
        self.rotation_angle().to_pi_count()
    }

    #[inline]
    pub fn determinant(&self) -> S {
        self.a * self.d - self.b * self.c
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == AffineTransform::identity()
    }

    /// Same scale and rotation, new translation.
    ///
    /// Like the other rebuilders this goes through the decomposed views, so
    /// any shear is dropped.
    pub fn with_translation(&self, translation: Vector<S>) -> Self {
        AffineTransform::from_parts(self.scale_factors(), self.rotation_angle(), translation)
    }

    /// Same rotation and translation, new scale.
    pub fn with_scale(&self, scale: Scale<S>) -> Self {
        AffineTransform::from_parts(scale, self.rotation_angle(), self.translation_vector())
    }

    /// Same scale and translation, new rotation.
    pub fn with_rotation(&self, rotation: Angle<S>) -> Self {
        AffineTransform::from_parts(self.scale_factors(), rotation, self.translation_vector())
    }

    /// Returns the transform that applies `self` and then `other`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        AffineTransform {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            tx: self.tx * other.a + self.ty * other.c + other.tx,
            ty: self.tx * other.b + self.ty * other.d + other.ty,
        }
    }

    /// Translates in this transform's own frame: the translation is applied
    /// before `self`.
    #[must_use]
    #[inline]
    pub fn translated_by(&self, v: Vector<S>) -> Self {
        AffineTransform::translation_by_vector(v).then(self)
    }

    /// Scales in this transform's own frame.
    #[must_use]
    #[inline]
    pub fn scaled_by(&self, scale: Scale<S>) -> Self {
        AffineTransform::from_scale(scale).then(self)
    }

    #[must_use]
    #[inline]
    pub fn uniformly_scaled_by(&self, factor: S) -> Self {
        AffineTransform::uniform_scale(factor).then(self)
    }

    /// Rotates in this transform's own frame.
    #[must_use]
    #[inline]
    pub fn rotated_by(&self, angle: Angle<S>) -> Self {
        AffineTransform::rotation(angle).then(self)
    }

    /// Returns the inverse transform, or `None` if the determinant is exactly
    /// zero.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == S::ZERO {
            geom_log!("singular transform {:?}", self);
            return None;
        }

        let inv_det = S::ONE / det;
        Some(AffineTransform {
            a: self.d * inv_det,
            b: -self.b * inv_det,
            c: -self.c * inv_det,
            d: self.a * inv_det,
            tx: (self.c * self.ty - self.d * self.tx) * inv_det,
            ty: (self.b * self.tx - self.a * self.ty) * inv_det,
        })
    }

    #[inline]
    pub fn transform_point(&self, p: Point<S>) -> Point<S> {
        point(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Applies the linear part only.
    #[inline]
    pub fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
        Vector::new(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }

    /// Applies the linear part only, like a vector.
    #[inline]
    pub fn transform_size(&self, size: Size<S>) -> Size<S> {
        Size::new(
            self.a * size.width + self.c * size.height,
            self.b * size.width + self.d * size.height,
        )
    }

    /// Returns the smallest rectangle containing the transformed rectangle.
    ///
    /// Without rotation or shear only two opposite corners need mapping;
    /// otherwise all four are.
    pub fn transform_rect(&self, rect: &Rect<S>) -> Rect<S> {
        let min = rect.min();
        let max = rect.max();

        if self.b == S::ZERO && self.c == S::ZERO {
            return Box2D::from_points(&[self.transform_point(min), self.transform_point(max)])
                .to_rect();
        }

        Box2D::from_points(&[
            self.transform_point(min),
            self.transform_point(max),
            self.transform_point(point(min.x, max.y)),
            self.transform_point(point(max.x, min.y)),
        ])
        .to_rect()
    }

    #[inline]
    pub fn to_f32(&self) -> AffineTransform<f32> {
        let f = |v: S| v.to_f32().unwrap_or(f32::NAN);
        AffineTransform::new(f(self.a), f(self.b), f(self.c), f(self.d), f(self.tx), f(self.ty))
    }

    #[inline]
    pub fn to_f64(&self) -> AffineTransform<f64> {
        let f = |v: S| v.to_f64().unwrap_or(f64::NAN);
        AffineTransform::new(f(self.a), f(self.b), f(self.c), f(self.d), f(self.tx), f(self.ty))
    }
}

impl<S: Scalar> Default for AffineTransform<S> {
    fn default() -> Self {
        AffineTransform::identity()
    }
}

impl<S: Scalar> Add<Vector<S>> for AffineTransform<S> {
    type Output = Self;
    #[inline]
    fn add(self, v: Vector<S>) -> Self {
        self.translated_by(v)
    }
}

impl<S: Scalar> Sub<Vector<S>> for AffineTransform<S> {
    type Output = Self;
    #[inline]
    fn sub(self, v: Vector<S>) -> Self {
        self.translated_by(-v)
    }
}

impl<S: Scalar> Add<Angle<S>> for AffineTransform<S> {
    type Output = Self;
    #[inline]
    fn add(self, angle: Angle<S>) -> Self {
        self.rotated_by(angle)
    }
}

impl<S: Scalar> Sub<Angle<S>> for AffineTransform<S> {
    type Output = Self;
    #[inline]
    fn sub(self, angle: Angle<S>) -> Self {
        self.rotated_by(-angle)
    }
}

impl<S: Scalar> Mul<S> for AffineTransform<S> {
    type Output = Self;
    #[inline]
    fn mul(self, factor: S) -> Self {
        self.uniformly_scaled_by(factor)
    }
}

impl<S: Scalar> Div<S> for AffineTransform<S> {
    type Output = Self;
    #[inline]
    fn div(self, factor: S) -> Self {
        self.uniformly_scaled_by(S::ONE / factor)
    }
}

impl<S: Scalar> Mul<Scale<S>> for AffineTransform<S> {
    type Output = Self;
    #[inline]
    fn mul(self, scale: Scale<S>) -> Self {
        self.scaled_by(scale)
    }
}

impl<S: Scalar> Div<Scale<S>> for AffineTransform<S> {
    type Output = Self;
    #[inline]
    fn div(self, scale: Scale<S>) -> Self {
        self.scaled_by(scale.inverted())
    }
}

/// `p * t` is `t.transform_point(p)`.
impl<S: Scalar> Mul<AffineTransform<S>> for Point<S> {
    type Output = Point<S>;
    #[inline]
    fn mul(self, transform: AffineTransform<S>) -> Point<S> {
        transform.transform_point(self)
    }
}

impl<S: Scalar> Mul<AffineTransform<S>> for Size<S> {
    type Output = Size<S>;
    #[inline]
    fn mul(self, transform: AffineTransform<S>) -> Size<S> {
        transform.transform_size(self)
    }
}

impl<S: Scalar> Mul<AffineTransform<S>> for Rect<S> {
    type Output = Rect<S>;
    #[inline]
    fn mul(self, transform: AffineTransform<S>) -> Rect<S> {
        transform.transform_rect(&self)
    }
}

impl<S: Scalar> fmt::Display for AffineTransform<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Translation: ({}, {}), Scale: ({}, {}), Rotation: {} rad]",
            self.tx,
            self.ty,
            self.sx(),
            self.sy(),
            self.radians()
        )
    }
}

impl<S: Copy> From<Transform<S>> for AffineTransform<S> {
    #[inline]
    fn from(t: Transform<S>) -> Self {
        AffineTransform {
            a: t.m11,
            b: t.m12,
            c: t.m21,
            d: t.m22,
            tx: t.m31,
            ty: t.m32,
        }
    }
}

impl<S: Copy> From<AffineTransform<S>> for Transform<S> {
    #[inline]
    fn from(t: AffineTransform<S>) -> Self {
        Transform::new(t.a, t.b, t.c, t.d, t.tx, t.ty)
    }
}

#[cfg(test)]
use crate::{size, vector};
#[cfg(test)]
use euclid::approxeq::ApproxEq;

#[cfg(test)]
fn fuzzy_eq_transform(t1: &AffineTransform<f64>, t2: &AffineTransform<f64>) -> bool {
    let eps = 1e-9;
    (t1.a - t2.a).abs() <= eps
        && (t1.b - t2.b).abs() <= eps
        && (t1.c - t2.c).abs() <= eps
        && (t1.d - t2.d).abs() <= eps
        && (t1.tx - t2.tx).abs() <= eps
        && (t1.ty - t2.ty).abs() <= eps
}

#[test]
fn translation_round_trip_is_exact() {
    let v = vector(3.5f64, -2.25);
    let p = point(1.5, -7.25);
    let t = AffineTransform::translation_by_vector(v);

    let moved = t.transform_point(p);
    assert_eq!(moved, point(5.0, -9.5));
    assert_eq!(AffineTransform::translation_by_vector(-v).transform_point(moved), p);
    assert_eq!(t.inverse().unwrap().transform_point(moved), p);
    assert_eq!(t.transform_vector(vector(1.0, 1.0)), vector(1.0, 1.0));
}

#[test]
fn elementary_transforms() {
    let r = AffineTransform::rotation_degrees(90.0f64);
    assert!(r.transform_point(point(1.0, 0.0)).approx_eq(&point(0.0, 1.0)));
    assert!(r.transform_point(point(0.0, 1.0)).approx_eq(&point(-1.0, 0.0)));

    let same = [
        AffineTransform::rotation(Angle::frac_pi_2()),
        AffineTransform::rotation_radians(core::f64::consts::FRAC_PI_2),
        AffineTransform::rotation_pi_count(0.5),
    ];
    for t in &same {
        assert!(fuzzy_eq_transform(t, &r));
    }

    let s = AffineTransform::scale(2.0f64, 3.0);
    assert_eq!(s, AffineTransform::from_scale(Scale::new(2.0, 3.0)));
    assert_eq!(s.transform_point(point(1.0, 1.0)), point(2.0, 3.0));
    assert_eq!(
        AffineTransform::uniform_scale(4.0f64),
        AffineTransform::scale(4.0, 4.0)
    );

    assert_eq!(
        AffineTransform::<f64>::flip_x().transform_point(point(1.0, 2.0)),
        point(-1.0, 2.0)
    );
    assert_eq!(
        AffineTransform::<f64>::flip_y().transform_point(point(1.0, 2.0)),
        point(1.0, -2.0)
    );

    assert!(AffineTransform::<f32>::identity().is_identity());
    assert!(AffineTransform::<f32>::default().is_identity());
    assert!(!AffineTransform::translation(0.0f32, 1.0).is_identity());
}

#[test]
fn decomposition() {
    let theta = Angle::degrees(30.0f64);

    // Uniform scale: every part comes back.
    let t = AffineTransform::rotation(theta)
        .then(&AffineTransform::uniform_scale(2.5))
        .then(&AffineTransform::translation(7.0, -3.0));
    assert!(t.radians().approx_eq(&theta.radians));
    assert!(t.degrees().approx_eq(&30.0));
    assert!(t.pi_count().approx_eq(&(1.0 / 6.0)));
    assert!(t.sx().approx_eq(&2.5));
    assert!(t.sy().approx_eq(&2.5));
    assert_eq!(t.translation_vector(), vector(7.0, -3.0));

    // Non-uniform scale: the scale factors are still exact views.
    let t = AffineTransform::rotation(theta).then(&AffineTransform::scale(2.0, 3.0));
    assert!(t.sx().approx_eq(&2.0));
    assert!(t.sy().approx_eq(&3.0));
    assert!(fuzzy_eq_transform(
        &t,
        &AffineTransform::from_parts(Scale::new(2.0, 3.0), theta, vector(0.0, 0.0))
    ));
}

#[test]
fn from_parts_computes_every_coefficient() {
    // Zero rotation with a non-default vertical scale still writes b and c.
    let t = AffineTransform::from_parts(Scale::new(1.0f64, 3.0), Angle::zero(), vector(1.0, 2.0));
    assert_eq!(t, AffineTransform::new(1.0, 0.0, -0.0, 3.0, 1.0, 2.0));

    let t = AffineTransform::from_parts(Scale::new(2.0f64, 2.0), Angle::degrees(45.0), vector(0.0, 0.0));
    let h = f64::sqrt(2.0);
    assert!(t.a.approx_eq(&h));
    assert!(t.b.approx_eq(&h));
    assert!(t.c.approx_eq(&-h));
    assert!(t.d.approx_eq(&h));
}

#[test]
fn rebuilders() {
    let t = AffineTransform::from_parts(Scale::uniform(2.0f64), Angle::degrees(60.0), vector(1.0, 1.0));

    let moved = t.with_translation(vector(-4.0, 5.0));
    assert_eq!(moved.translation_vector(), vector(-4.0, 5.0));
    assert!(moved.degrees().approx_eq(&60.0));
    assert!(moved.sx().approx_eq(&2.0));

    let scaled = t.with_scale(Scale::uniform(0.5));
    assert!(scaled.sx().approx_eq(&0.5));
    assert!(scaled.degrees().approx_eq(&60.0));
    assert_eq!(scaled.translation_vector(), vector(1.0, 1.0));

    let rotated = t.with_rotation(Angle::degrees(-20.0));
    assert!(rotated.degrees().approx_eq(&-20.0));
    assert!(rotated.sy().approx_eq(&2.0));
}

#[test]
fn composition_order() {
    let translate = AffineTransform::translation(1.0f64, 0.0);
    let rotate = AffineTransform::rotation_degrees(90.0);
    let origin = point(0.0, 0.0);

    // Translate, then rotate around the origin.
    assert!(translate
        .then(&rotate)
        .transform_point(origin)
        .approx_eq(&point(0.0, 1.0)));
    // Rotate (no effect on the origin), then translate.
    assert!(rotate
        .then(&translate)
        .transform_point(origin)
        .approx_eq(&point(1.0, 0.0)));

    let p = point(2.0, -3.0);
    let t = translate.then(&rotate);
    assert!(t
        .transform_point(p)
        .approx_eq(&rotate.transform_point(translate.transform_point(p))));

    // Matches euclid's own composition.
    let a = AffineTransform::from_parts(Scale::new(2.0, 0.5), Angle::degrees(10.0), vector(3.0, 4.0));
    let b = AffineTransform::from_parts(Scale::new(-1.0, 3.0), Angle::degrees(-70.0), vector(-2.0, 1.0));
    let expected: AffineTransform<f64> = Transform::from(a).then(&Transform::from(b)).into();
    assert!(fuzzy_eq_transform(&a.then(&b), &expected));
}

#[test]
fn relative_transforms_use_the_local_frame() {
    let rotate = AffineTransform::rotation_degrees(90.0f64);

    // The translation happens before the rotation.
    let t = rotate.translated_by(vector(1.0, 0.0));
    assert!(t.translation_vector().approx_eq(&vector(0.0, 1.0)));
    assert!(t.transform_point(point(0.0, 0.0)).approx_eq(&point(0.0, 1.0)));

    let t = AffineTransform::translation(5.0f64, 5.0).scaled_by(Scale::new(2.0, 3.0));
    assert_eq!(t.transform_point(point(1.0, 1.0)), point(7.0, 8.0));
    assert_eq!(
        AffineTransform::translation(5.0f64, 5.0).uniformly_scaled_by(2.0),
        AffineTransform::new(2.0, 0.0, 0.0, 2.0, 5.0, 5.0)
    );

    let t = AffineTransform::translation(5.0f64, 0.0).rotated_by(Angle::degrees(90.0));
    assert!(t.transform_point(point(1.0, 0.0)).approx_eq(&point(5.0, 1.0)));
}

#[test]
fn operators() {
    let t = AffineTransform::from_parts(Scale::new(2.0f64, 2.0), Angle::degrees(30.0), vector(1.0, -1.0));
    let v = vector(3.0, 4.0);
    let angle = Angle::degrees(15.0);

    assert_eq!(t + v, t.translated_by(v));
    assert_eq!(t - v, t.translated_by(-v));
    assert_eq!(t + angle, t.rotated_by(angle));
    assert_eq!(t - angle, t.rotated_by(-angle));
    assert_eq!(t * 3.0, t.uniformly_scaled_by(3.0));
    assert_eq!(t / 4.0, t.uniformly_scaled_by(0.25));
    assert_eq!(t * Scale::new(2.0, 4.0), t.scaled_by(Scale::new(2.0, 4.0)));
    assert_eq!(t / Scale::new(2.0, 4.0), t.scaled_by(Scale::new(0.5, 0.25)));

    assert!((t + angle - angle).degrees().approx_eq(&30.0));

    let p = point(1.0, 2.0);
    assert_eq!(p * t, t.transform_point(p));
    let s = size(1.0, 2.0);
    assert_eq!(s * t, t.transform_size(s));
    let r = Rect::new(p, s);
    assert_eq!(r * t, t.transform_rect(&r));
}

#[test]
fn sizes_ignore_translation() {
    let t = AffineTransform::translation(10.0f64, 10.0).then(&AffineTransform::scale(2.0, 3.0));
    assert_eq!(t.transform_size(size(1.0, 1.0)), size(2.0, 3.0));
}

#[test]
fn rect_bounding_box() {
    let r = Rect::new(point(0.0f64, 0.0), size(2.0, 1.0));

    let t = AffineTransform::rotation_degrees(90.0);
    let bounds = t.transform_rect(&r);
    assert!(bounds.origin.approx_eq(&point(-1.0, 0.0)));
    assert!(bounds.size.width.approx_eq(&1.0));
    assert!(bounds.size.height.approx_eq(&2.0));

    let t = AffineTransform::rotation_degrees(45.0);
    let bounds = t.transform_rect(&Rect::new(point(0.0, 0.0), size(1.0, 1.0)));
    let h = f64::sqrt(2.0);
    assert!(bounds.origin.approx_eq(&point(-h / 2.0, 0.0)));
    assert!(bounds.size.width.approx_eq(&h));
    assert!(bounds.size.height.approx_eq(&h));

    // Scale and translation only: still a standardized rectangle.
    let t = AffineTransform::scale(-1.0, 2.0).then(&AffineTransform::translation(0.0, 1.0));
    let bounds = t.transform_rect(&Rect::new(point(1.0, 0.0), size(2.0, 1.0)));
    assert_eq!(bounds, Rect::new(point(-3.0, 1.0), size(2.0, 2.0)));
}

#[test]
fn inverse() {
    let t = AffineTransform::from_parts(Scale::new(2.0f64, 0.5), Angle::degrees(33.0), vector(-4.0, 9.0));
    let inv = t.inverse().unwrap();
    assert!(fuzzy_eq_transform(&t.then(&inv), &AffineTransform::identity()));
    assert!(fuzzy_eq_transform(&inv.then(&t), &AffineTransform::identity()));

    let p = point(12.0, -0.5);
    assert!(inv.transform_point(t.transform_point(p)).approx_eq(&p));

    assert_eq!(AffineTransform::scale(0.0f64, 1.0).inverse(), None);
    assert_eq!(AffineTransform::new(1.0f64, 2.0, 2.0, 4.0, 0.0, 0.0).inverse(), None);
    assert_eq!(AffineTransform::scale(2.0f64, 3.0).determinant(), 6.0);
}

#[test]
fn equality_is_exact() {
    let t = AffineTransform::rotation_radians(0.1f64);
    assert_eq!(t, AffineTransform::rotation_radians(0.1));
    assert_ne!(t, AffineTransform::rotation_radians(0.1 + 1e-12));
    assert_ne!(
        AffineTransform::translation(1.0f64, 0.0),
        AffineTransform::translation(1.0, 1e-300)
    );
}

#[test]
fn euclid_conversions() {
    let t = AffineTransform::from_parts(Scale::new(2.0f64, 3.0), Angle::degrees(20.0), vector(1.0, 2.0));
    let e: Transform<f64> = t.into();
    assert_eq!((e.m11, e.m12, e.m21, e.m22, e.m31, e.m32), (t.a, t.b, t.c, t.d, t.tx, t.ty));
    assert_eq!(AffineTransform::from(e), t);

    let p = point(-1.5, 4.0);
    assert!(e.transform_point(p).approx_eq(&t.transform_point(p)));
}

#[test]
fn display() {
    let t = AffineTransform::translation(1.0f64, 2.0);
    assert_eq!(
        std::format!("{}", t),
        "[Translation: (1, 2), Scale: (1, 1), Rotation: 0 rad]"
    );
}

#[cfg(test)]
mod properties {
    use super::AffineTransform;
    use crate::{point, vector, Angle, Scale};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn inverse_undoes_the_transform(
            sx in 0.1f64..10.0, sy in 0.1f64..10.0,
            degrees in -720.0f64..720.0,
            tx in -100.0f64..100.0, ty in -100.0f64..100.0,
            x in -100.0f64..100.0, y in -100.0f64..100.0,
        ) {
            let t = AffineTransform::from_parts(Scale::new(sx, sy), Angle::degrees(degrees), vector(tx, ty));
            let inv = t.inverse().unwrap();
            let p = point(x, y);
            let back = inv.transform_point(t.transform_point(p));
            prop_assert!((back.x - p.x).abs() < 1e-6);
            prop_assert!((back.y - p.y).abs() < 1e-6);
        }

        #[test]
        fn scale_factors_survive_rotation(
            sx in 0.1f64..10.0, sy in 0.1f64..10.0,
            degrees in -720.0f64..720.0,
        ) {
            let t = AffineTransform::rotation_degrees(degrees).then(&AffineTransform::scale(sx, sy));
            prop_assert!((t.sx() - sx).abs() < 1e-9);
            prop_assert!((t.sy() - sy).abs() < 1e-9);
        }

        #[test]
        fn rotation_survives_uniform_scale(
            factor in 0.1f64..10.0,
            radians in -3.14159f64..3.14159,
        ) {
            let t = AffineTransform::rotation_radians(radians)
                .then(&AffineTransform::uniform_scale(factor));
            prop_assert!((t.radians() - radians).abs() < 1e-9);
            prop_assert!((t.rotation_angle().standardized().radians - radians).abs() < 1e-9);
        }
    }
}
