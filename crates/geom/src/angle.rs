//! Angles and their canonical forms.
//!
//! An [`Angle`] stores radians and never wraps them on its own. Wrapped forms
//! are explicit queries: [`Angle::positive`] in `[0, 2π)` and
//! [`Angle::standardized`] in `(-π, π]`.

use crate::scalar::{Float, Scalar};

use core::fmt;
use core::ops::{Add, Neg, Sub};

/// Classification of a standardized angle.
///
/// The four `Axis*` variants are exact boundaries: an angle equal to one of the
/// axis constants is reported as that axis, never as one of the adjacent
/// quadrants.
///
/// See also <http://mathforum.org/library/drmath/view/65647.html>.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Quadrant {
    I,
    II,
    III,
    IV,
    /// Exactly π/2.
    AxisIAndII,
    /// Exactly π.
    AxisIIAndIII,
    /// Exactly -π/2.
    AxisIIIAndIV,
    /// Exactly zero.
    AxisIVAndI,
    /// NaN or infinite angles.
    Undefined,
}

/// An angle, stored in radians.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Angle<S> {
    pub radians: S,
}

impl<S: Scalar> Angle<S> {
    #[inline]
    pub fn radians(radians: S) -> Self {
        Angle { radians }
    }

    #[inline]
    pub fn degrees(degrees: S) -> Self {
        Angle {
            radians: degrees * S::PI() / S::ONE_EIGHTY,
        }
    }

    /// An angle of `count` half-turns, for example `0.25` for 45°.
    #[inline]
    pub fn pi_count(count: S) -> Self {
        Angle {
            radians: count * S::PI(),
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Angle { radians: S::ZERO }
    }

    /// 30°
    #[inline]
    pub fn frac_pi_6() -> Self {
        Angle::radians(S::FRAC_PI_6())
    }

    /// 45°
    #[inline]
    pub fn frac_pi_4() -> Self {
        Angle::radians(S::FRAC_PI_4())
    }

    /// 60°
    #[inline]
    pub fn frac_pi_3() -> Self {
        Angle::radians(S::FRAC_PI_3())
    }

    /// 90°
    #[inline]
    pub fn frac_pi_2() -> Self {
        Angle::radians(S::FRAC_PI_2())
    }

    /// 120°
    #[inline]
    pub fn frac_2_pi_3() -> Self {
        Angle::radians(S::FRAC_PI_3() * S::TWO)
    }

    /// 135°
    #[inline]
    pub fn frac_3_pi_4() -> Self {
        Angle::radians(S::PI() - S::FRAC_PI_4())
    }

    /// 150°
    #[inline]
    pub fn frac_5_pi_6() -> Self {
        Angle::radians(S::PI() - S::FRAC_PI_6())
    }

    /// 180°
    #[inline]
    pub fn pi() -> Self {
        Angle::radians(S::PI())
    }

    /// 360°
    #[inline]
    pub fn two_pi() -> Self {
        Angle::radians(S::TAU())
    }

    #[inline]
    pub fn get(self) -> S {
        self.radians
    }

    #[inline]
    pub fn to_degrees(self) -> S {
        self.radians * S::ONE_EIGHTY / S::PI()
    }

    /// The angle expressed as a number of half-turns.
    #[inline]
    pub fn to_pi_count(self) -> S {
        self.radians / S::PI()
    }

    /// Returns the equivalent angle in `[0, 2π)`.
    pub fn positive(self) -> Self {
        let tau = S::TAU();
        let r = self.radians;
        if r >= S::ZERO && r < tau {
            return self;
        }

        // `%` keeps the sign of the dividend.
        let mut r = r % tau;
        if r < S::ZERO {
            r += tau;
        }
        // A tiny negative remainder can round up to exactly 2π.
        if r >= tau {
            r = S::ZERO;
        }

        Angle::radians(r)
    }

    /// Returns the equivalent angle in `(-π, π]`.
    pub fn standardized(self) -> Self {
        let pi = S::PI();
        if self.radians > -pi && self.radians <= pi {
            return self;
        }

        let r = self.positive().radians;
        if r <= pi {
            Angle::radians(r)
        } else {
            Angle::radians(r - S::TAU())
        }
    }

    /// Classifies the standardized angle.
    ///
    /// Equality with an axis constant takes priority over quadrant ranges.
    pub fn quadrant(self) -> Quadrant {
        let r = self.standardized().radians;
        let half_pi = S::FRAC_PI_2();
        let pi = S::PI();

        if r == half_pi {
            Quadrant::AxisIAndII
        } else if r == pi || r == -pi {
            Quadrant::AxisIIAndIII
        } else if r == -half_pi {
            Quadrant::AxisIIIAndIV
        } else if r == S::ZERO {
            Quadrant::AxisIVAndI
        } else if r > S::ZERO && r < half_pi {
            Quadrant::I
        } else if r > half_pi && r < pi {
            Quadrant::II
        } else if r > -pi && r < -half_pi {
            Quadrant::III
        } else if r > -half_pi && r < S::ZERO {
            Quadrant::IV
        } else {
            Quadrant::Undefined
        }
    }

    #[inline]
    pub fn is_sign_negative(self) -> bool {
        Float::is_sign_negative(self.radians)
    }

    #[inline]
    pub fn sin(self) -> S {
        Float::sin(self.radians)
    }

    #[inline]
    pub fn cos(self) -> S {
        Float::cos(self.radians)
    }

    #[inline]
    pub fn tan(self) -> S {
        Float::tan(self.radians)
    }

    #[inline]
    pub fn sin_cos(self) -> (S, S) {
        Float::sin_cos(self.radians)
    }

    /// Cosecant. Infinite when the sine is zero.
    #[inline]
    pub fn csc(self) -> S {
        S::ONE / self.sin()
    }

    /// Secant. Infinite when the cosine is zero.
    #[inline]
    pub fn sec(self) -> S {
        S::ONE / self.cos()
    }

    /// Cotangent. Infinite when the tangent is zero.
    #[inline]
    pub fn cot(self) -> S {
        S::ONE / self.tan()
    }

    /// Negates the stored radians (no wrapping).
    #[inline]
    pub fn negated(self) -> Self {
        Angle::radians(-self.radians)
    }

    #[inline]
    pub fn to_f32(self) -> Angle<f32> {
        Angle::radians(self.radians.to_f32().unwrap_or(f32::NAN))
    }

    #[inline]
    pub fn to_f64(self) -> Angle<f64> {
        Angle::radians(self.radians.to_f64().unwrap_or(f64::NAN))
    }
}

impl<S: Scalar> Neg for Angle<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.negated()
    }
}

impl<S: Scalar> Add for Angle<S> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Angle::radians(self.radians + other.radians)
    }
}

impl<S: Scalar> Sub for Angle<S> {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Angle::radians(self.radians - other.radians)
    }
}

impl<S: Scalar> fmt::Display for Angle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°, {}π, {} rads",
            self.to_degrees(),
            self.to_pi_count(),
            self.radians
        )
    }
}

impl<S> From<euclid::Angle<S>> for Angle<S> {
    #[inline]
    fn from(angle: euclid::Angle<S>) -> Self {
        Angle {
            radians: angle.radians,
        }
    }
}

impl<S> From<Angle<S>> for euclid::Angle<S> {
    #[inline]
    fn from(angle: Angle<S>) -> Self {
        euclid::Angle {
            radians: angle.radians,
        }
    }
}

#[cfg(test)]
use euclid::approxeq::ApproxEq;

#[test]
fn conversions() {
    assert!(Angle::degrees(180.0f64).radians.approx_eq(&core::f64::consts::PI));
    assert!(Angle::pi_count(0.25f64).to_degrees().approx_eq(&45.0));
    assert!(Angle::degrees(90.0f64).to_pi_count().approx_eq(&0.5));
    assert_eq!(Angle::radians(1.25f64).radians, 1.25);
    assert!(Angle::degrees(-37.5f64).to_degrees().approx_eq(&-37.5));

    let e: euclid::Angle<f32> = Angle::radians(2.0f32).into();
    assert_eq!(e.radians, 2.0);
    assert_eq!(Angle::from(e), Angle::radians(2.0));
}

#[test]
fn named_angles() {
    assert!(Angle::<f64>::frac_pi_6().to_degrees().approx_eq(&30.0));
    assert!(Angle::<f64>::frac_pi_4().to_degrees().approx_eq(&45.0));
    assert!(Angle::<f64>::frac_pi_3().to_degrees().approx_eq(&60.0));
    assert!(Angle::<f64>::frac_pi_2().to_degrees().approx_eq(&90.0));
    assert!(Angle::<f64>::frac_2_pi_3().to_degrees().approx_eq(&120.0));
    assert!(Angle::<f64>::frac_3_pi_4().to_degrees().approx_eq(&135.0));
    assert!(Angle::<f64>::frac_5_pi_6().to_degrees().approx_eq(&150.0));
    assert!(Angle::<f64>::pi().to_degrees().approx_eq(&180.0));
    assert!(Angle::<f64>::two_pi().to_degrees().approx_eq(&360.0));
}

#[test]
fn positive() {
    use core::f64::consts::{PI, TAU};

    assert_eq!(Angle::radians(0.0f64).positive().radians, 0.0);
    assert_eq!(Angle::radians(1.0f64).positive().radians, 1.0);
    assert_eq!(Angle::radians(TAU).positive().radians, 0.0);
    assert_eq!(Angle::radians(-PI).positive().radians, PI);
    assert!(Angle::radians(-1.0f64).positive().radians.approx_eq(&(TAU - 1.0)));
    assert!(Angle::radians(3.0 * TAU + 0.5).positive().radians.approx_eq(&0.5));
    assert!(Angle::radians(-3.0 * TAU - 0.5).positive().radians.approx_eq(&(TAU - 0.5)));

    // Would round up to 2π without the fold back to zero.
    let tiny = Angle::radians(-1e-20f64).positive().radians;
    assert!(tiny >= 0.0 && tiny < TAU);

    assert!(Angle::radians(f64::NAN).positive().radians.is_nan());
    assert!(Angle::radians(f64::INFINITY).positive().radians.is_nan());
}

#[test]
fn standardized() {
    use core::f64::consts::PI;

    assert_eq!(Angle::radians(PI).standardized().radians, PI);
    assert_eq!(Angle::radians(-PI).standardized().radians, PI);
    assert!(Angle::degrees(270.0f64).standardized().to_degrees().approx_eq(&-90.0));
    assert!(Angle::degrees(-270.0f64).standardized().to_degrees().approx_eq(&90.0));
    assert!(Angle::degrees(540.0f64).standardized().to_degrees().approx_eq(&180.0));
    assert!(Angle::degrees(-45.0f64).standardized().to_degrees().approx_eq(&-45.0));
}

#[test]
fn stored_radians_are_not_wrapped() {
    let a = Angle::degrees(720.0f64);
    assert!(a.to_degrees().approx_eq(&720.0));
    assert!(a.positive().radians.approx_eq(&0.0));
    assert!((a + Angle::degrees(90.0)).to_degrees().approx_eq(&810.0));
}

#[test]
fn quadrants() {
    use core::f64::consts::{FRAC_PI_2, PI};

    assert_eq!(Angle::degrees(45.0f64).quadrant(), Quadrant::I);
    assert_eq!(Angle::degrees(135.0f64).quadrant(), Quadrant::II);
    assert_eq!(Angle::degrees(225.0f64).quadrant(), Quadrant::III);
    assert_eq!(Angle::degrees(-135.0f64).quadrant(), Quadrant::III);
    assert_eq!(Angle::degrees(-45.0f64).quadrant(), Quadrant::IV);
    assert_eq!(Angle::degrees(315.0f64).quadrant(), Quadrant::IV);

    assert_eq!(Angle::radians(0.0f64).quadrant(), Quadrant::AxisIVAndI);
    assert_eq!(Angle::radians(FRAC_PI_2).quadrant(), Quadrant::AxisIAndII);
    assert_eq!(Angle::radians(PI).quadrant(), Quadrant::AxisIIAndIII);
    assert_eq!(Angle::radians(-PI).quadrant(), Quadrant::AxisIIAndIII);
    assert_eq!(Angle::radians(-FRAC_PI_2).quadrant(), Quadrant::AxisIIIAndIV);
    assert_eq!(Angle::radians(-FRAC_PI_2 + 1e-9).quadrant(), Quadrant::IV);
    assert_eq!(Angle::radians(FRAC_PI_2 + 1e-9).quadrant(), Quadrant::II);

    assert_eq!(Angle::radians(f64::NAN).quadrant(), Quadrant::Undefined);
    assert_eq!(Angle::radians(f64::INFINITY).quadrant(), Quadrant::Undefined);
}

#[test]
fn trigonometry() {
    let a = Angle::degrees(30.0f64);
    assert!(a.sin().approx_eq(&0.5));
    assert!(a.csc().approx_eq(&2.0));
    assert!(Angle::degrees(60.0f64).sec().approx_eq(&2.0));
    assert!(Angle::degrees(45.0f64).tan().approx_eq(&1.0));
    assert!(Angle::degrees(45.0f64).cot().approx_eq(&1.0));

    // Reciprocals are not guarded.
    assert_eq!(Angle::radians(0.0f64).csc(), f64::INFINITY);
    assert_eq!(Angle::radians(-0.0f64).csc(), f64::NEG_INFINITY);
    assert_eq!(Angle::radians(0.0f64).cot(), f64::INFINITY);
}

#[test]
fn negation() {
    let a = Angle::degrees(300.0f64);
    assert_eq!((-a).radians, -a.radians);
    assert_eq!(a.negated(), -a);
    assert!(a.is_sign_negative() != (-a).is_sign_negative());
}

#[test]
fn display() {
    let s = std::format!("{}", Angle::radians(0.0f64));
    assert_eq!(s, "0°, 0π, 0 rads");
}

#[cfg(test)]
mod properties {
    use super::Angle;
    use core::f64::consts::{PI, TAU};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn positive_is_in_range_and_congruent(r in -1.0e6f64..1.0e6) {
            let p = Angle::radians(r).positive().radians;
            prop_assert!(p >= 0.0 && p < TAU);

            let k = ((r - p) / TAU).round();
            prop_assert!((r - p - k * TAU).abs() < 1e-6);
        }

        #[test]
        fn standardized_is_in_range(r in -1.0e6f64..1.0e6) {
            let s = Angle::radians(r).standardized().radians;
            prop_assert!(s > -PI && s <= PI);
        }

        #[test]
        fn degrees_round_trip(d in -1.0e6f64..1.0e6) {
            let back = Angle::degrees(d).to_degrees();
            prop_assert!((back - d).abs() <= 1e-9 * d.abs().max(1.0));
        }

        #[test]
        fn radians_round_trip(r in -1.0e6f64..1.0e6) {
            prop_assert_eq!(Angle::radians(r).radians, r);
        }
    }
}
