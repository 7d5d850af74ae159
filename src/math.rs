use crate::sector::{Orientation, Rotation, Sector};

/// Brings any degree value into [0, 360).
///
/// ```
/// assert_eq!(luckysector::math::normalize_angle(45.0), 45.0);
/// assert_eq!(luckysector::math::normalize_angle(360.0), 0.0);
/// assert_eq!(luckysector::math::normalize_angle(-10.0), 350.0);
/// assert_eq!(luckysector::math::normalize_angle(730.0), 10.0);
/// assert_eq!(luckysector::math::normalize_angle(-370.0), 350.0);
/// ```
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    (angle % 360.0 + 360.0) % 360.0
}

/// Scales a decimal odds value into the integer domain of the angle table.
///
/// `f64::round` rounds halves away from zero, so positive half values like
/// 1.25 always scale upward.
///
/// ```
/// assert_eq!(luckysector::math::scale_odds(2.5), 25);
/// assert_eq!(luckysector::math::scale_odds(3.2), 32);
/// assert_eq!(luckysector::math::scale_odds(1.25), 13);
/// ```
#[inline]
pub fn scale_odds(odds: f64) -> i64 {
    (odds * 10.0).round() as i64
}

/// Classifies the turn direction of the points at angles `a`, `b`, `c` on
/// the unit circle.
///
/// A NaN cross product satisfies neither comparison and falls through to
/// `Collinear`, so non-finite inputs still classify deterministically.
///
/// ```
/// use luckysector::sector::Orientation;
///
/// assert_eq!(luckysector::math::orientation(45.0, 135.0, 225.0), Orientation::Counterclockwise);
/// assert_eq!(luckysector::math::orientation(225.0, 135.0, 45.0), Orientation::Clockwise);
/// assert_eq!(luckysector::math::orientation(45.0, 0.0, 0.0), Orientation::Collinear);
/// ```
#[inline]
pub fn orientation(a: f64, b: f64, c: f64) -> Orientation {
    let (x_a, y_a) = (a.to_radians().cos(), a.to_radians().sin());
    let (x_b, y_b) = (b.to_radians().cos(), b.to_radians().sin());
    let (x_c, y_c) = (c.to_radians().cos(), c.to_radians().sin());

    let cross = (x_b - x_a) * (y_c - y_a) - (x_c - x_a) * (y_b - y_a);

    if cross > 0.0 {
        Orientation::Counterclockwise
    } else if cross < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Rotates all three angles by `normalize(a - c)` degrees. Applied only to
/// counterclockwise triples; the caller keeps clockwise and collinear
/// triples unchanged.
///
/// ```
/// let (a, b, c) = luckysector::math::shift_angles(45.0, 135.0, 225.0);
/// assert_eq!((a, b, c), (225.0, 315.0, 45.0));
/// ```
#[inline]
pub fn shift_angles(a: f64, b: f64, c: f64) -> (f64, f64, f64) {
    let shift = normalize_angle(a - c);
    (
        normalize_angle(a + shift),
        normalize_angle(b + shift),
        normalize_angle(c + shift),
    )
}

/// The midpoints of the two directional arcs between a pair of angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Midpoints {
    pub clockwise: f64,
    pub counterclockwise: f64,
}

/// Computes the midpoint of both directional arcs between `a` and `b`.
///
/// The same construction covers the first midpoint (between the A and B
/// angles) and the final midpoint (between the chosen midpoint and C).
///
/// ```
/// let mids = luckysector::math::midpoint_angles(135.0, 180.0);
/// assert_eq!(mids.clockwise, 337.5);
/// assert_eq!(mids.counterclockwise, 157.5);
/// ```
#[inline]
pub fn midpoint_angles(a: f64, b: f64) -> Midpoints {
    let a = normalize_angle(a);
    let b = normalize_angle(b);

    let mut clockwise_difference = a - b;
    if clockwise_difference < 0.0 {
        clockwise_difference += 360.0;
    }

    let mut counterclockwise_difference = b - a;
    if counterclockwise_difference < 0.0 {
        counterclockwise_difference += 360.0;
    }

    Midpoints {
        clockwise: (b + clockwise_difference / 2.0) % 360.0,
        counterclockwise: (a + counterclockwise_difference / 2.0) % 360.0,
    }
}

/// Picks the smaller of the two arcs between `start` and `end`.
///
/// Equal distances (both arcs 180°) resolve to clockwise.
///
/// ```
/// use luckysector::sector::Rotation;
///
/// let sector = luckysector::math::smallest_sector(0.0, 180.0);
/// assert_eq!(sector.direction, Rotation::Clockwise);
/// assert_eq!(sector.span, 180.0);
///
/// let sector = luckysector::math::smallest_sector(180.0, 45.0);
/// assert_eq!(sector.direction, Rotation::Counterclockwise);
/// assert_eq!(sector.span, 135.0);
/// ```
#[inline]
pub fn smallest_sector(start: f64, end: f64) -> Sector {
    let start = normalize_angle(start);
    let end = normalize_angle(end);

    let mut clockwise_distance = end - start;
    if clockwise_distance < 0.0 {
        clockwise_distance += 360.0;
    }

    let mut counterclockwise_distance = start - end;
    if counterclockwise_distance < 0.0 {
        counterclockwise_distance += 360.0;
    }

    if clockwise_distance <= counterclockwise_distance {
        Sector {
            direction: Rotation::Clockwise,
            start,
            end,
            span: clockwise_distance,
        }
    } else {
        Sector {
            direction: Rotation::Counterclockwise,
            start: end,
            end: start,
            span: counterclockwise_distance,
        }
    }
}

/// Rounds an angle up to the next multiple of 10°.
///
/// ```
/// assert_eq!(luckysector::math::round_up_to_next_tens(337.5), 340.0);
/// assert_eq!(luckysector::math::round_up_to_next_tens(340.0), 340.0);
/// assert_eq!(luckysector::math::round_up_to_next_tens(0.1), 10.0);
/// ```
#[inline]
pub fn round_up_to_next_tens(angle: f64) -> f64 {
    (angle / 10.0).ceil() * 10.0
}
