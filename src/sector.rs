use std::fmt;

/// The direction of travel around the wheel. In this codebase's convention,
/// clockwise travel advances angles: the clockwise distance from `start` to
/// `end` is `normalize(end - start)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    Counterclockwise,
}

impl Rotation {
    /// The sign of a 10° step taken along this rotation.
    #[inline]
    pub fn step_sign(&self) -> f64 {
        match self {
            Rotation::Clockwise => 1.0,
            Rotation::Counterclockwise => -1.0,
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation::Clockwise => write!(f, "clockwise"),
            Rotation::Counterclockwise => write!(f, "counterclockwise"),
        }
    }
}

/// The turn direction of three ordered points on the unit circle,
/// classified by the sign of their 2D cross product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    Counterclockwise,
    Collinear,
}

/// The smaller of the two arcs between two angles on the wheel.
///
/// `start`, `end` and `span` are raw degree values; `Display` renders them
/// rounded to whole degrees (half away from zero), which is the
/// deterministic formatting the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub direction: Rotation,
    pub start: f64,
    pub end: f64,
    pub span: f64,
}

impl fmt::Display for Sector {
    /// ```
    /// use luckysector::sector::{Rotation, Sector};
    ///
    /// let sector = Sector {
    ///     direction: Rotation::Clockwise,
    ///     start: 180.0,
    ///     end: 337.5,
    ///     span: 157.5,
    /// };
    /// assert_eq!(sector.to_string(), "clockwise from 180° to 338° with angle 158°");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from {}° to {}° with angle {}°",
            self.direction,
            self.start.round(),
            self.end.round(),
            self.span.round()
        )
    }
}

/// The two sectors the dashboard shows side by side: one over the stored
/// odds ordering, one over the reversed ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorPair {
    pub sector1: Sector,
    pub sector2: Sector,
}
