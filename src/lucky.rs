use std::fmt;

use comfy_table::Table;
use itertools::Itertools;

use crate::calculator::chosen_midpoint;
use crate::math::{midpoint_angles, normalize_angle, round_up_to_next_tens, smallest_sector};
use crate::sector::{Rotation, Sector};
use crate::tables::lucky_value;

/// The step indices walked out from the seed angle: 12 angles spaced 10° apart.
const LUCKY_INDICES: std::ops::RangeInclusive<i64> = -5..=6;

/// The lucky numbers derived from an odds triple.
///
/// The final midpoint (home/draw midpoint refined against the away angle)
/// is rounded up to the next 10° and walked 12 steps along the sector's
/// rotation; each visited angle maps to a lucky value through the fixed
/// table. Purely cosmetic enrichment of a prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct LuckyNumbers {
    /// The sector the single-sector computation reports for the same odds.
    pub sector: Sector,

    /// The 12 generated angles, normalized into [0, 360).
    pub angles: Vec<f64>,

    /// The lucky value for each generated angle, in the same order.
    /// `None` for angles the table does not cover.
    pub values: Vec<Option<u8>>,
}

/// Generates the lucky numbers for an odds triple.
///
/// ```
/// let lucky = luckysector::lucky::lucky_numbers(0.1, 1.9, 1.8);
/// assert_eq!(lucky.angles[0], 30.0);
/// assert_eq!(lucky.values[0], Some(35));
/// ```
pub fn lucky_numbers(home_odds: f64, draw_odds: f64, away_odds: f64) -> LuckyNumbers {
    let (c, chosen) = chosen_midpoint(home_odds, draw_odds, away_odds);
    let sector = smallest_sector(c, chosen);

    let final_midpoints = midpoint_angles(chosen, c);
    let final_midpoint = match sector.direction {
        Rotation::Clockwise => final_midpoints.clockwise,
        Rotation::Counterclockwise => final_midpoints.counterclockwise,
    };

    let seed = round_up_to_next_tens(final_midpoint);
    let step = sector.direction.step_sign() * 10.0;

    let angles: Vec<f64> = LUCKY_INDICES
        .map(|index| normalize_angle(seed + step * index as f64))
        .collect();
    let values = angles.iter().map(|&angle| lucky_value(angle)).collect();

    LuckyNumbers {
        sector,
        angles,
        values,
    }
}

impl LuckyNumbers {
    /// Returns a table visualization of the generated angles and values
    pub fn table(&self) -> String {
        let mut table = Table::new();

        table.set_header(vec!["#", "Angle", "Lucky Value"]);

        for (index, (angle, value)) in self.angles.iter().zip(self.values.iter()).enumerate() {
            table.add_row(vec![
                (index + 1).to_string(),
                format!("{angle}°"),
                match value {
                    Some(value) => value.to_string(),
                    None => "".to_string(),
                },
            ]);
        }

        table.to_string()
    }
}

impl fmt::Display for LuckyNumbers {
    /// Joins the mapped lucky values, skipping unmapped angles.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.values.iter().flatten().join(", "))
    }
}
