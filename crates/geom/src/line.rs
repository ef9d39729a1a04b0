use crate::scalar::Scalar;
use crate::traits::Transformation;
use crate::vector::VectorExt;
use crate::{point, Box2D, GeometryError, Point, Vector};

use arrayvec::ArrayVec;
use core::ops::Mul;

/// A linear segment going from `from` to `to`.
///
/// The segment may be degenerate (`from == to`). Its length is then zero and
/// every direction-dependent query (slope, projection, perpendiculars)
/// produces NaN or infinity instead of failing.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    #[inline]
    pub fn new(from: Point<S>, to: Point<S>) -> Self {
        LineSegment { from, to }
    }

    /// The segment starting at `point` and spanning `vector`.
    #[inline]
    pub fn from_point_and_vector(point: Point<S>, vector: Vector<S>) -> Self {
        LineSegment {
            from: point,
            to: point + vector,
        }
    }

    /// Sample the segment at t.
    ///
    /// `t` is not clamped: values outside of `[0, 1]` extrapolate along the
    /// supporting line.
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.from + self.to_vector() * t
    }

    #[inline]
    pub fn dx(&self) -> S {
        self.to.x - self.from.x
    }

    #[inline]
    pub fn dy(&self) -> S {
        self.to.y - self.from.y
    }

    /// `dy / dx`. Infinite for vertical segments, NaN for degenerate ones.
    #[inline]
    pub fn slope(&self) -> S {
        self.dy() / self.dx()
    }

    /// Returns an inverted version of this segment where the beginning and the end
    /// points are swapped.
    #[inline]
    pub fn flip(&self) -> Self {
        LineSegment {
            from: self.to,
            to: self.from,
        }
    }

    /// Return the smallest rectangle containing this segment.
    #[inline]
    pub fn bounding_box(&self) -> Box2D<S> {
        Box2D {
            min: point(
                S::min(self.from.x, self.to.x),
                S::min(self.from.y, self.to.y),
            ),
            max: point(
                S::max(self.from.x, self.to.x),
                S::max(self.from.y, self.to.y),
            ),
        }
    }

    /// Returns the vector between this segment's `from` and `to` points.
    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        self.to - self.from
    }

    /// Returns the line containing this segment.
    #[inline]
    pub fn to_line(&self) -> Line<S> {
        Line {
            point: self.from,
            vector: self.to - self.from,
        }
    }

    /// Computes the length of this segment.
    #[inline]
    pub fn length(&self) -> S {
        self.to_vector().magnitude()
    }

    /// Computes the squared length of this segment.
    #[inline]
    pub fn square_length(&self) -> S {
        self.to_vector().square_length()
    }

    #[inline]
    pub fn mid_point(&self) -> Point<S> {
        self.sample(S::HALF)
    }

    #[inline]
    pub fn translate(&self, by: Vector<S>) -> Self {
        LineSegment {
            from: self.from + by,
            to: self.to + by,
        }
    }

    /// Applies the transform to this segment and returns the results.
    #[inline]
    pub fn transformed<T: Transformation<S>>(&self, transform: &T) -> Self {
        LineSegment {
            from: transform.transform_point(self.from),
            to: transform.transform_point(self.to),
        }
    }

    /// Orthogonal projection of `p` on the line supporting this segment.
    ///
    /// The result is not clamped to the segment. A degenerate segment divides
    /// by zero and yields NaN coordinates.
    #[inline]
    pub fn project_point_on_line(&self, p: Point<S>) -> Point<S> {
        self.to_line().project_point(p)
    }

    /// Same as [`LineSegment::project_point_on_line`] but reports degenerate
    /// segments.
    pub fn try_project_point_on_line(&self, p: Point<S>) -> Result<Point<S>, GeometryError> {
        if self.from == self.to {
            geom_log!("projection on a degenerate segment at {:?}", self.from);
            return Err(GeometryError::DegenerateSegment);
        }

        Ok(self.project_point_on_line(p))
    }

    /// Distance between `p` and its projection on the supporting line.
    #[inline]
    pub fn line_distance_to_point(&self, p: Point<S>) -> S {
        (self.project_point_on_line(p) - p).magnitude()
    }

    /// Reflects `p` across the line supporting this segment.
    #[inline]
    pub fn mirror_point(&self, p: Point<S>) -> Point<S> {
        let foot = self.project_point_on_line(p);
        foot + (foot - p)
    }

    /// Projects `p` on the perpendicular bisector of this segment.
    ///
    /// This moves `p` parallel to the segment until it reaches the line that
    /// crosses the segment's midpoint at a right angle: the offset from the
    /// supporting line is kept and re-applied from the midpoint.
    #[inline]
    pub fn project_point_on_perpendicular(&self, p: Point<S>) -> Point<S> {
        let foot = self.project_point_on_line(p);
        self.mid_point() + (p - foot)
    }

    /// Reflects `p` across the perpendicular bisector of this segment.
    ///
    /// The point on the bisector is the midpoint of `p` and its mirror image,
    /// so this also holds for points lying on the supporting line.
    #[inline]
    pub fn mirror_point_across_perpendicular(&self, p: Point<S>) -> Point<S> {
        let foot = self.project_point_on_perpendicular(p);
        foot + (foot - p)
    }

    /// The line crossing this segment's midpoint at a right angle, oriented
    /// counter-clockwise from the segment.
    #[inline]
    pub fn perpendicular_bisector(&self) -> Line<S> {
        Line {
            point: self.mid_point(),
            vector: self.to_vector().ccw_perpendicular(),
        }
    }

    /// Returns the point at distance `extent` from the midpoint, along the
    /// perpendicular bisector.
    ///
    /// Positive extents go to the counter-clockwise side of the segment.
    #[inline]
    pub fn perpendicular_point(&self, extent: S) -> Point<S> {
        self.mid_point() + self.to_vector().ccw_perpendicular().unit_form() * extent
    }

    /// Computes the closest point on this segment to `p`.
    #[inline]
    pub fn closest_point(&self, p: Point<S>) -> Point<S> {
        let v1 = self.to - self.from;
        let v2 = p - self.from;
        let t = S::min(S::max(v2.dot(v1) / v1.dot(v1), S::ZERO), S::ONE);

        self.from + v1 * t
    }

    /// Computes the distance between this segment and a point.
    #[inline]
    pub fn distance_to_point(&self, p: Point<S>) -> S {
        self.square_distance_to_point(p).sqrt()
    }

    /// Computes the squared distance between this segment and a point.
    ///
    /// Can be useful to save a square root and a division when comparing against
    /// a distance that can be squared.
    #[inline]
    pub fn square_distance_to_point(&self, p: Point<S>) -> S {
        (self.closest_point(p) - p).square_length()
    }

    /// Signed area of the parallelogram spanned by this segment and
    /// `p - from`.
    ///
    /// Positive when `p` is on the counter-clockwise side of the directed
    /// segment, negative on the clockwise side, zero on the supporting line.
    #[inline]
    pub fn half_plane_test(&self, p: Point<S>) -> S {
        let (dx, dy) = (self.dx(), self.dy());
        let (tx, ty) = (p.x - self.from.x, p.y - self.from.y);

        dx * ty - tx * dy
    }

    /// Returns true if the two segments cross.
    ///
    /// Conventions:
    ///
    /// - Segments sharing an end point always cross, whatever their
    ///   directions (collinear continuations included).
    /// - Otherwise each segment's end points must lie on opposite sides of the
    ///   other segment. A half-plane value of exactly zero counts as the
    ///   positive side, so a point lying on the other segment's supporting line
    ///   is on the same side as the positive points. As a consequence
    ///   collinear segments never cross, and whether a T-junction crosses
    ///   depends on which side the stem goes.
    pub fn crosses(&self, other: &Self) -> bool {
        if self.from == other.from
            || self.from == other.to
            || self.to == other.from
            || self.to == other.to
        {
            return true;
        }

        let hp1 = self.half_plane_test(other.from) < S::ZERO;
        let hp2 = self.half_plane_test(other.to) < S::ZERO;
        if hp1 == hp2 {
            return false;
        }

        let hp3 = other.half_plane_test(self.from) < S::ZERO;
        let hp4 = other.half_plane_test(self.to) < S::ZERO;

        hp3 != hp4
    }

    /// Intersection of the two supporting lines, if the segments cross.
    ///
    /// Returns `None` when [`LineSegment::crosses`] is false. Segments that
    /// cross because they share an end point while being parallel have no
    /// single intersection point: the result is then non-finite. Use
    /// [`LineSegment::try_crossing_point`] to have that reported.
    pub fn crossing_point(&self, other: &Self) -> Option<Point<S>> {
        if !self.crosses(other) {
            return None;
        }

        Some(intersect_lines(self.from, self.to, other.from, other.to))
    }

    /// Same as [`LineSegment::crossing_point`], with both failure cases
    /// reported.
    pub fn try_crossing_point(&self, other: &Self) -> Result<Point<S>, GeometryError> {
        if !self.crosses(other) {
            return Err(GeometryError::NotCrossing);
        }

        finite_intersection(intersect_lines(self.from, self.to, other.from, other.to))
    }

    /// Center of the circle of the given radius going through both end points.
    ///
    /// The flag only orders the end points: `true` keeps `from → to`, `false`
    /// swaps them, which mirrors the center across the segment. The name
    /// assumes y pointing down (screen coordinates), where the `true` center
    /// lies on the clockwise side of the directed segment. In a y-up frame
    /// that is the counter-clockwise side.
    ///
    /// Returns `None` when the segment is longer than the diameter. A
    /// degenerate segment yields NaN coordinates.
    pub fn center_with_radius(&self, radius: S, clockwise: bool) -> Option<Point<S>> {
        let v = self.to_vector();
        let length = v.magnitude();
        if length > radius * S::TWO {
            return None;
        }

        let half = length * S::HALF;
        let mut square_offset = radius * radius - half * half;
        // Rounding can push the diameter case slightly below zero.
        if square_offset < S::ZERO {
            square_offset = S::ZERO;
        }
        let offset = v.ccw_perpendicular() * (square_offset.sqrt() / length);

        // Both orientations share the midpoint so that the diameter case
        // yields a single center.
        let mid = self.mid_point();
        Some(if clockwise { mid + offset } else { mid - offset })
    }

    /// Same as [`LineSegment::center_with_radius`] but reports why there is no
    /// center.
    pub fn try_center_with_radius(
        &self,
        radius: S,
        clockwise: bool,
    ) -> Result<Point<S>, GeometryError> {
        if self.from == self.to {
            geom_log!("circle through a degenerate segment at {:?}", self.from);
            return Err(GeometryError::DegenerateSegment);
        }

        self.center_with_radius(radius, clockwise).ok_or_else(|| {
            let length = self.length();
            let diameter = radius * S::TWO;
            geom_log!("no circle of diameter {} through a segment of length {}", diameter, length);
            GeometryError::RadiusTooSmall {
                length: length.to_f64_lossy(),
                diameter: diameter.to_f64_lossy(),
            }
        })
    }

    /// All centers of circles of the given radius going through both end points.
    ///
    /// Empty when the segment is longer than the diameter or degenerate, one
    /// center when the segment is exactly a diameter, two otherwise (clockwise
    /// one first).
    pub fn circle_centers(&self, radius: S) -> ArrayVec<Point<S>, 2> {
        let mut centers = ArrayVec::new();
        if self.from == self.to {
            return centers;
        }

        if let Some(cw) = self.center_with_radius(radius, true) {
            centers.push(cw);
            if let Some(ccw) = self.center_with_radius(radius, false) {
                if ccw != cw {
                    centers.push(ccw);
                }
            }
        }

        centers
    }

    #[inline]
    pub fn to_f32(&self) -> LineSegment<f32> {
        LineSegment {
            from: self.from.to_f32(),
            to: self.to.to_f32(),
        }
    }

    #[inline]
    pub fn to_f64(&self) -> LineSegment<f64> {
        LineSegment {
            from: self.from.to_f64(),
            to: self.to.to_f64(),
        }
    }
}

/// Scales the segment's vector, keeping `from` in place.
impl<S: Scalar> Mul<S> for LineSegment<S> {
    type Output = Self;
    #[inline]
    fn mul(self, factor: S) -> Self {
        LineSegment::from_point_and_vector(self.from, self.to_vector() * factor)
    }
}

/// An infinite line defined by a point and a vector.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Line<S> {
    pub point: Point<S>,
    pub vector: Vector<S>,
}

impl<S: Scalar> Line<S> {
    /// Intersection point of two lines.
    ///
    /// Parallel lines have a zero determinant and the result is non-finite
    /// (infinite for distinct lines, NaN for coincident ones).
    pub fn intersection(&self, other: &Self) -> Point<S> {
        intersect_lines(
            self.point,
            self.point + self.vector,
            other.point,
            other.point + other.vector,
        )
    }

    /// Same as [`Line::intersection`] but reports parallel lines.
    pub fn try_intersection(&self, other: &Self) -> Result<Point<S>, GeometryError> {
        finite_intersection(self.intersection(other))
    }

    /// Orthogonal projection of `p` on this line.
    pub fn project_point(&self, p: Point<S>) -> Point<S> {
        let v = self.vector;
        let t = (p - self.point).dot(v) / v.square_length();

        self.point + v * t
    }
}

// Intersection of the lines through (p1, p2) and (p3, p4), by Cramer's rule.
fn intersect_lines<S: Scalar>(p1: Point<S>, p2: Point<S>, p3: Point<S>, p4: Point<S>) -> Point<S> {
    let a = p1.x * p2.y - p1.y * p2.x;
    let b = p3.x * p4.y - p3.y * p4.x;

    let tx = a * (p3.x - p4.x) - b * (p1.x - p2.x);
    let ty = a * (p3.y - p4.y) - b * (p1.y - p2.y);
    let d = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);

    point(tx / d, ty / d)
}

// A zero determinant always leaves a non-finite coordinate.
fn finite_intersection<S: Scalar>(p: Point<S>) -> Result<Point<S>, GeometryError> {
    if !p.x.is_finite() || !p.y.is_finite() {
        geom_log!("no single intersection point: {:?}", p);
        return Err(GeometryError::ParallelLines);
    }

    Ok(p)
}

#[cfg(test)]
use crate::{vector, AffineTransform, Angle};
#[cfg(test)]
use euclid::approxeq::ApproxEq;

#[cfg(test)]
fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment<f64> {
    LineSegment::new(point(x1, y1), point(x2, y2))
}

#[cfg(test)]
fn fuzzy_eq_point(a: Point<f32>, b: Point<f32>, epsilon: f32) -> bool {
    f32::abs(a.x - b.x) <= epsilon && f32::abs(a.y - b.y) <= epsilon
}

#[test]
fn attributes() {
    let s = segment(1.0, 1.0, 4.0, 5.0);
    assert!(s.length().approx_eq(&5.0));
    assert_eq!(s.square_length(), 25.0);
    assert_eq!(s.to_vector(), vector(3.0, 4.0));
    assert_eq!(s.mid_point(), point(2.5, 3.0));
    assert_eq!(s.dx(), 3.0);
    assert_eq!(s.dy(), 4.0);
    assert!(s.slope().approx_eq(&(4.0 / 3.0)));

    assert_eq!(segment(1.0, 0.0, 1.0, 3.0).slope(), f64::INFINITY);
    assert_eq!(segment(1.0, 3.0, 1.0, 0.0).slope(), f64::NEG_INFINITY);

    let degenerate = segment(2.0, 2.0, 2.0, 2.0);
    assert_eq!(degenerate.length(), 0.0);
    assert!(degenerate.slope().is_nan());

    assert_eq!(
        LineSegment::from_point_and_vector(point(1.0, 1.0), vector(3.0, 4.0)),
        s
    );
    assert_eq!(s * 2.0, segment(1.0, 1.0, 7.0, 9.0));
}

#[test]
fn sample_extrapolates() {
    let s = segment(0.0, 0.0, 2.0, 4.0);
    assert_eq!(s.sample(0.0), s.from);
    assert_eq!(s.sample(1.0), s.to);
    assert_eq!(s.sample(0.25), point(0.5, 1.0));
    assert_eq!(s.sample(2.0), point(4.0, 8.0));
    assert_eq!(s.sample(-1.0), point(-2.0, -4.0));
}

#[test]
fn bounding_box() {
    let cases = [
        (segment(-2.0, 3.0, 4.0, 1.0), point(-2.0, 1.0), point(4.0, 3.0)),
        (segment(4.0, 1.0, -2.0, 3.0), point(-2.0, 1.0), point(4.0, 3.0)),
        (segment(0.5, -1.0, 0.5, 6.0), point(0.5, -1.0), point(0.5, 6.0)),
    ];
    for &(s, min, max) in &cases {
        assert_eq!(s.bounding_box(), Box2D { min, max });
        assert_eq!(s.bounding_box(), s.flip().bounding_box());
    }
}

#[test]
fn projection() {
    let s = segment(0.0, 0.0, 4.0, 0.0);
    assert_eq!(s.project_point_on_line(point(2.0, 3.0)), point(2.0, 0.0));
    // Not clamped to the segment.
    assert_eq!(s.project_point_on_line(point(-3.0, 1.0)), point(-3.0, 0.0));
    assert_eq!(s.line_distance_to_point(point(-3.0, 1.0)), 1.0);

    let diagonal = segment(0.0, 0.0, 2.0, 2.0);
    assert!(diagonal
        .project_point_on_line(point(0.0, 2.0))
        .approx_eq(&point(1.0, 1.0)));

    let degenerate = segment(1.0, 1.0, 1.0, 1.0);
    let p = degenerate.project_point_on_line(point(3.0, 4.0));
    assert!(p.x.is_nan() && p.y.is_nan());
    assert_eq!(
        degenerate.try_project_point_on_line(point(3.0, 4.0)),
        Err(GeometryError::DegenerateSegment)
    );
    assert_eq!(
        s.try_project_point_on_line(point(1.0, 1.0)),
        Ok(point(1.0, 0.0))
    );
}

#[test]
fn mirroring() {
    let s = segment(0.0, 0.0, 4.0, 0.0);
    assert_eq!(s.mirror_point(point(2.0, 3.0)), point(2.0, -3.0));
    assert_eq!(s.mirror_point(point(2.0, 0.0)), point(2.0, 0.0));

    assert_eq!(s.project_point_on_perpendicular(point(1.0, 3.0)), point(2.0, 3.0));
    assert_eq!(s.mirror_point_across_perpendicular(point(1.0, 3.0)), point(3.0, 3.0));
    // Points on the supporting line mirror onto the other half of it.
    assert_eq!(s.mirror_point_across_perpendicular(point(0.0, 0.0)), point(4.0, 0.0));

    let diagonal = segment(0.0, 0.0, 2.0, 2.0);
    assert!(diagonal
        .mirror_point(point(2.0, 0.0))
        .approx_eq(&point(0.0, 2.0)));
    assert!(diagonal
        .mirror_point_across_perpendicular(point(0.0, 0.0))
        .approx_eq(&point(2.0, 2.0)));

    // Projecting on the perpendicular is projecting on the bisector line.
    let s = segment(-1.0, 2.0, 3.0, 5.0);
    let p = point(7.0, -2.0);
    assert!(s
        .project_point_on_perpendicular(p)
        .approx_eq(&s.perpendicular_bisector().project_point(p)));
}

#[test]
fn perpendicular_point() {
    let s = segment(0.0, 0.0, 4.0, 0.0);
    assert!(s.perpendicular_point(2.0).approx_eq(&point(2.0, 2.0)));
    assert!(s.perpendicular_point(-1.0).approx_eq(&point(2.0, -1.0)));
    assert!(s.flip().perpendicular_point(2.0).approx_eq(&point(2.0, -2.0)));
}

#[test]
fn closest_point() {
    let s = segment(0.0, 0.0, 4.0, 0.0);
    assert_eq!(s.closest_point(point(-3.0, 1.0)), point(0.0, 0.0));
    assert_eq!(s.closest_point(point(2.0, 1.0)), point(2.0, 0.0));
    assert_eq!(s.distance_to_point(point(7.0, 4.0)), 5.0);
}

#[test]
fn half_plane() {
    let s = segment(0.0, 0.0, 2.0, 0.0);
    assert!(s.half_plane_test(point(1.0, 1.0)) > 0.0);
    assert!(s.half_plane_test(point(1.0, -1.0)) < 0.0);
    assert_eq!(s.half_plane_test(point(5.0, 0.0)), 0.0);
    assert!(s.flip().half_plane_test(point(1.0, 1.0)) < 0.0);
}

#[test]
fn crossing_diagonals() {
    let a = segment(0.0, 0.0, 4.0, 4.0);
    let b = segment(0.0, 4.0, 4.0, 0.0);
    assert!(a.crosses(&b));
    assert!(b.crosses(&a));
    assert_eq!(a.crossing_point(&b), Some(point(2.0, 2.0)));
    assert_eq!(a.try_crossing_point(&b), Ok(point(2.0, 2.0)));
}

#[test]
fn parallel_segments_do_not_cross() {
    let a = segment(0.0, 0.0, 1.0, 0.0);
    let b = segment(0.0, 1.0, 1.0, 1.0);
    assert!(!a.crosses(&b));
    assert_eq!(a.crossing_point(&b), None);
    assert_eq!(a.try_crossing_point(&b), Err(GeometryError::NotCrossing));
}

#[test]
fn disjoint_segments_do_not_cross() {
    // The supporting lines intersect, the segments do not.
    let a = segment(0.0, 0.0, 1.0, 1.0);
    let b = segment(3.0, 0.0, 2.0, 1.0);
    assert!(!a.crosses(&b));
    assert_eq!(a.crossing_point(&b), None);
}

#[test]
fn shared_end_points_cross() {
    let a = segment(0.0, 0.0, 1.0, 1.0);
    let b = segment(1.0, 1.0, 2.0, 2.0);
    assert!(a.crosses(&b));
    assert!(b.crosses(&a));

    // Collinear continuation: no single intersection point.
    let p = a.crossing_point(&b).unwrap();
    assert!(!p.x.is_finite() || !p.y.is_finite());
    assert_eq!(a.try_crossing_point(&b), Err(GeometryError::ParallelLines));

    // Non-parallel segments sharing an end point meet at that point.
    let c = segment(1.0, 1.0, 2.0, 0.0);
    assert!(a.crosses(&c));
    assert!(a.crossing_point(&c).unwrap().approx_eq(&point(1.0, 1.0)));
}

#[test]
fn on_line_end_points_count_as_positive() {
    // Collinear and overlapping, without shared end points: every half-plane
    // value is zero, so both end points are on the same side.
    let a = segment(0.0, 0.0, 4.0, 0.0);
    let b = segment(1.0, 0.0, 3.0, 0.0);
    assert!(!a.crosses(&b));

    // T-junction with the stem on the positive side of `a`: the foot counts
    // as positive too, so no crossing.
    let stem_up = segment(2.0, 0.0, 2.0, 1.0);
    assert!(!a.crosses(&stem_up));

    // Stem on the negative side: the foot (zero) and the tip (negative)
    // disagree, and so do `a`'s end points relative to the stem.
    let stem_down = segment(2.0, 0.0, 2.0, -1.0);
    assert!(a.crosses(&stem_down));
    assert_eq!(a.crossing_point(&stem_down), Some(point(2.0, 0.0)));
}

#[test]
fn crossing_rotated() {
    use core::f32::consts::PI;
    let epsilon = 0.0001;
    let count: u32 = 100;

    for i in 0..count {
        for j in 0..count {
            if i % (count / 2) == j % (count / 2) {
                // avoid the colinear case.
                continue;
            }

            let angle1 = i as f32 / (count as f32) * 2.0 * PI;
            let angle2 = j as f32 / (count as f32) * 2.0 * PI;

            let l1 = LineSegment {
                from: point(10.0 * angle1.cos(), 10.0 * angle1.sin()),
                to: point(-10.0 * angle1.cos(), -10.0 * angle1.sin()),
            };

            let l2 = LineSegment {
                from: point(10.0 * angle2.cos(), 10.0 * angle2.sin()),
                to: point(-10.0 * angle2.cos(), -10.0 * angle2.sin()),
            };

            assert!(l1.crosses(&l2));
            assert!(fuzzy_eq_point(
                l1.crossing_point(&l2).unwrap(),
                point(0.0, 0.0),
                epsilon
            ));
        }
    }
}

#[test]
fn circle_through_diameter() {
    let s = segment(0.0, 0.0, 2.0, 0.0);
    assert_eq!(s.center_with_radius(1.0, true), Some(point(1.0, 0.0)));
    assert_eq!(s.center_with_radius(1.0, false), Some(point(1.0, 0.0)));
    assert_eq!(s.circle_centers(1.0).as_slice(), &[point(1.0, 0.0)]);
}

#[test]
fn diameter_has_a_single_center() {
    // Coordinates that are not exact in binary.
    let segments = [
        segment(0.03, 0.7, -0.11, 0.2),
        segment(0.1, 0.2, 0.7, -0.3),
        segment(-1.3, 2.9, 4.1, 0.7),
    ];
    for s in &segments {
        let r = s.length() / 2.0;
        let cw = s.center_with_radius(r, true).unwrap();
        let ccw = s.center_with_radius(r, false).unwrap();
        assert_eq!(cw, ccw);
        assert_eq!(s.circle_centers(r).as_slice(), &[s.mid_point()]);
    }
}

#[test]
fn circle_orientation() {
    let s = segment(0.0, 0.0, 2.0, 0.0);
    let r = f64::sqrt(2.0);

    let cw = s.center_with_radius(r, true).unwrap();
    let ccw = s.center_with_radius(r, false).unwrap();
    assert!(cw.approx_eq(&point(1.0, 1.0)));
    assert!(ccw.approx_eq(&point(1.0, -1.0)));

    for c in &[cw, ccw] {
        assert!((s.from - *c).magnitude().approx_eq(&r));
        assert!((s.to - *c).magnitude().approx_eq(&r));
    }

    assert_eq!(s.circle_centers(r).as_slice(), &[cw, ccw]);
}

#[test]
fn circle_infeasible() {
    let s = segment(0.0, 0.0, 10.0, 0.0);
    assert_eq!(s.center_with_radius(1.0, true), None);
    assert_eq!(s.center_with_radius(1.0, false), None);
    assert!(s.circle_centers(1.0).is_empty());
    assert_eq!(
        s.try_center_with_radius(1.0, true),
        Err(GeometryError::RadiusTooSmall {
            length: 10.0,
            diameter: 2.0
        })
    );

    let degenerate = segment(1.0, 1.0, 1.0, 1.0);
    assert_eq!(
        degenerate.try_center_with_radius(1.0, true),
        Err(GeometryError::DegenerateSegment)
    );
    assert!(degenerate.circle_centers(1.0).is_empty());
}

#[test]
fn transformed() {
    let s = segment(1.0, 0.0, 2.0, 0.0);
    let t = AffineTransform::rotation(Angle::frac_pi_2()).then(&AffineTransform::translation(1.0, 1.0));
    let r = s.transformed(&t);
    assert!(r.from.approx_eq(&point(1.0, 2.0)));
    assert!(r.to.approx_eq(&point(1.0, 3.0)));
    assert_eq!(s.translate(vector(1.0, 1.0)), segment(2.0, 1.0, 3.0, 1.0));
}

#[test]
fn line_intersection() {
    let a = segment(0.0, 0.0, 4.0, 4.0).to_line();
    let b = segment(0.0, 4.0, 4.0, 0.0).to_line();
    assert_eq!(a.intersection(&b), point(2.0, 2.0));
    assert_eq!(a.try_intersection(&b), Ok(point(2.0, 2.0)));

    // The lines meet even where the segments do not.
    let c = segment(3.0, 0.0, 2.0, 1.0);
    assert!(!segment(0.0, 0.0, 1.0, 1.0).crosses(&c));
    assert!(a.intersection(&c.to_line()).approx_eq(&point(1.5, 1.5)));
}

#[test]
fn parallel_lines_propagate() {
    let a = segment(0.0, 1.0, 1.0, 1.0).to_line();
    let b = segment(0.0, 4.0, -2.0, 4.0).to_line();

    let p = a.intersection(&b);
    assert!(!p.x.is_finite() || !p.y.is_finite());
    assert_eq!(a.try_intersection(&b), Err(GeometryError::ParallelLines));

    let coincident = a.intersection(&a);
    assert!(coincident.x.is_nan() && coincident.y.is_nan());
    assert_eq!(a.try_intersection(&a), Err(GeometryError::ParallelLines));
}

#[test]
fn perpendicular_bisectors_meet_at_the_circumcenter() {
    // (6, 2), (1, 7) and (-3, 5) are on the circle of radius 5 around (1, 2).
    let ab = segment(6.0, 2.0, 1.0, 7.0);
    let bc = segment(1.0, 7.0, -3.0, 5.0);
    let center = ab
        .perpendicular_bisector()
        .try_intersection(&bc.perpendicular_bisector())
        .unwrap();
    assert!(center.approx_eq(&point(1.0, 2.0)));
}

#[cfg(test)]
mod properties {
    use super::LineSegment;
    use crate::point;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn diameter_yields_one_center(
            x1 in -1.0e3f64..1.0e3, y1 in -1.0e3f64..1.0e3,
            x2 in -1.0e3f64..1.0e3, y2 in -1.0e3f64..1.0e3,
        ) {
            let s = LineSegment::new(point(x1, y1), point(x2, y2));
            prop_assume!(s.length() > 1e-6);
            let centers = s.circle_centers(s.length() / 2.0);
            prop_assert_eq!(centers.len(), 1);
            prop_assert_eq!(centers[0], s.mid_point());
        }
    }
}
