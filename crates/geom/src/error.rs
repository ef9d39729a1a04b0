use thiserror::Error;

/// Reasons a checked geometric operation could not produce a defined result.
///
/// The unchecked counterparts of these operations let IEEE-754 propagation
/// speak instead (NaN or infinity); see the crate documentation.
#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// A vector of zero magnitude has no direction.
    #[error("zero-length vector cannot be normalized")]
    ZeroVector,
    /// Both end points of the segment are equal.
    #[error("segment has zero length")]
    DegenerateSegment,
    /// The two segments do not cross each other.
    #[error("segments do not cross")]
    NotCrossing,
    /// The supporting lines are parallel, so there is no single intersection point.
    #[error("lines are parallel")]
    ParallelLines,
    /// No circle of the requested radius goes through both end points.
    #[error("segment of length {length} does not fit in a circle of diameter {diameter}")]
    RadiusTooSmall { length: f64, diameter: f64 },
}

#[test]
fn error_messages() {
    use std::string::ToString;

    assert_eq!(
        GeometryError::ParallelLines.to_string(),
        "lines are parallel"
    );
    assert_eq!(
        GeometryError::RadiusTooSmall {
            length: 10.0,
            diameter: 2.0
        }
        .to_string(),
        "segment of length 10 does not fit in a circle of diameter 2"
    );
}
