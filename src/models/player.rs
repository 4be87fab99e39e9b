//! Player, Rating, Tiebreaks and the PlayerRef used on boards.

use crate::models::game::Game;
use serde::{Deserialize, Serialize};

/// Numeric player identifier (the start rank in the source file).
pub type PlayerId = u32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub national: Option<u32>,
    pub international: Option<u32>,
}

/// Tiebreak values carried through from the source; never computed here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tiebreaks {
    pub buchholz: f64,
    pub buchholz_cut1: f64,
    pub sonneborn_berger: f64,
}

/// A registered participant with their game history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: Option<PlayerId>,
    pub start_rank: Option<u32>,
    pub final_rank: Option<u32>,
    pub name: String,
    pub title: Option<String>,
    pub club: String,
    pub federation: String,
    pub rating: Rating,
    pub points: f64,
    pub tiebreaks: Tiebreaks,
    /// Ascending by round.
    pub games: Vec<Game>,
}

/// Id and name of one side of a board. `id` is None for a bye.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRef {
    pub id: Option<PlayerId>,
    pub name: String,
}

impl PlayerRef {
    pub fn bye(label: &str) -> Self {
        Self {
            id: None,
            name: label.to_string(),
        }
    }
}
