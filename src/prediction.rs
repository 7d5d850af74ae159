use std::fmt;

use serde::{Deserialize, Serialize};

/// The outcome a prediction backs, named the way the dashboard stores it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    HomeWin,
    Draw,
    AwayWin,
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::HomeWin => write!(f, "home win"),
            MatchResult::Draw => write!(f, "draw"),
            MatchResult::AwayWin => write!(f, "away win"),
        }
    }
}

/// An outcome prediction derived from implied probabilities.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub result: MatchResult,
    /// The winning outcome's implied probability, rounded to a whole percent.
    pub confidence: u8,
}

impl Prediction {
    /// Picks the outcome with the highest implied probability (`1/odds`).
    ///
    /// The home side wins only if strictly more probable than both others,
    /// then the away side; anything else falls through to a draw. That
    /// ordering makes draws the tie winner, matching the dashboard.
    ///
    /// ```
    /// use luckysector::prediction::{MatchResult, Prediction};
    ///
    /// let prediction = Prediction::from_odds(1.5, 4.0, 6.0);
    /// assert_eq!(prediction.result, MatchResult::HomeWin);
    /// assert_eq!(prediction.confidence, 67);
    /// ```
    pub fn from_odds(home_odds: f64, draw_odds: f64, away_odds: f64) -> Prediction {
        let home_prob = (1.0 / home_odds) * 100.0;
        let draw_prob = (1.0 / draw_odds) * 100.0;
        let away_prob = (1.0 / away_odds) * 100.0;

        let (result, confidence) = if home_prob > draw_prob && home_prob > away_prob {
            (MatchResult::HomeWin, home_prob)
        } else if away_prob > home_prob && away_prob > draw_prob {
            (MatchResult::AwayWin, away_prob)
        } else {
            (MatchResult::Draw, draw_prob)
        };

        Prediction {
            result,
            confidence: confidence.round() as u8,
        }
    }
}
