use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculator::{compute_sector_pair, compute_single_sector};
use crate::lucky::{lucky_numbers, LuckyNumbers};
use crate::prediction::Prediction;
use crate::sector::{Sector, SectorPair};

/// A match row as the dashboard stores it: teams, league, kickoff time,
/// and the three decimal odds.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MatchData {
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    pub match_date: Option<String>,
    pub home_odds: f64,
    pub draw_odds: f64,
    pub away_odds: f64,
}

impl MatchData {
    pub fn from_json(json: &str) -> Result<MatchData, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the kickoff time, if present and parseable as RFC 3339.
    pub fn match_date_utc(&self) -> Option<DateTime<Utc>> {
        self.match_date
            .as_ref()
            .and_then(|date| DateTime::parse_from_rfc3339(date).ok())
            .map(|date| date.with_timezone(&Utc))
    }

    /// The lucky sector over the stored odds ordering.
    pub fn lucky_sector(&self) -> Sector {
        compute_single_sector(self.home_odds, self.draw_odds, self.away_odds)
    }

    /// Both display sectors: stored ordering and reversed ordering.
    pub fn sector_pair(&self) -> SectorPair {
        compute_sector_pair(self.home_odds, self.draw_odds, self.away_odds)
    }

    /// The cosmetic lucky numbers for this match.
    pub fn lucky_numbers(&self) -> LuckyNumbers {
        lucky_numbers(self.home_odds, self.draw_odds, self.away_odds)
    }

    /// The implied-probability outcome prediction for this match.
    pub fn prediction(&self) -> Prediction {
        Prediction::from_odds(self.home_odds, self.draw_odds, self.away_odds)
    }
}
