use crate::math::{midpoint_angles, orientation, scale_odds, shift_angles, smallest_sector};
use crate::sector::{Orientation, Sector, SectorPair};
use crate::tables::input_to_angle;

/// The three base angles for an odds triple, in input order.
#[inline]
pub(crate) fn base_angles(home_odds: f64, draw_odds: f64, away_odds: f64) -> (f64, f64, f64) {
    (
        input_to_angle(scale_odds(home_odds)),
        input_to_angle(scale_odds(draw_odds)),
        input_to_angle(scale_odds(away_odds)),
    )
}

/// Runs the wheel pipeline up to the chosen home/draw midpoint, returning
/// the (possibly shifted) away angle and that midpoint.
#[inline]
pub(crate) fn chosen_midpoint(home_odds: f64, draw_odds: f64, away_odds: f64) -> (f64, f64) {
    let (a, b, c) = base_angles(home_odds, draw_odds, away_odds);

    // the shift only applies to counterclockwise triples, and the midpoint
    // choice below keys off the orientation of the *unshifted* angles
    let orient = orientation(a, b, c);
    let (a, b, c) = match orient {
        Orientation::Counterclockwise => shift_angles(a, b, c),
        _ => (a, b, c),
    };

    let midpoints = midpoint_angles(a, b);
    let chosen = match orient {
        Orientation::Counterclockwise => midpoints.counterclockwise,
        _ => midpoints.clockwise,
    };

    (c, chosen)
}

/// Computes the lucky sector for an odds triple: the smaller arc between
/// the away angle and the home/draw midpoint.
///
/// Total over finite inputs; degenerate triples (all three odds in the same
/// table bucket) produce a zero-span clockwise sector, not an error.
///
/// ```
/// let sector = luckysector::calculator::compute_single_sector(2.5, 3.2, 2.8);
/// assert_eq!(sector.to_string(), "clockwise from 180° to 338° with angle 158°");
/// ```
pub fn compute_single_sector(home_odds: f64, draw_odds: f64, away_odds: f64) -> Sector {
    let (c, chosen) = chosen_midpoint(home_odds, draw_odds, away_odds);
    smallest_sector(c, chosen)
}

/// Computes the two sectors the dashboard shows: `sector1` over the stored
/// `(home, draw, away)` ordering and `sector2` over the reversed
/// `(away, draw, home)` ordering.
///
/// ```
/// let pair = luckysector::calculator::compute_sector_pair(0.1, 1.9, 1.8);
/// assert_eq!(pair.sector1, luckysector::calculator::compute_single_sector(0.1, 1.9, 1.8));
/// assert_eq!(pair.sector2, luckysector::calculator::compute_single_sector(1.8, 1.9, 0.1));
/// ```
pub fn compute_sector_pair(home_odds: f64, draw_odds: f64, away_odds: f64) -> SectorPair {
    SectorPair {
        sector1: compute_single_sector(home_odds, draw_odds, away_odds),
        sector2: compute_single_sector(away_odds, draw_odds, home_odds),
    }
}
