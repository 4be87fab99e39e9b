//! TournamentModel, its info/round structures, and conversion errors.

use crate::models::game::GameResult;
use crate::models::player::{Player, PlayerId, PlayerRef};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level section of the raw record set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    General,
    Players,
    Pairings,
}

impl Section {
    /// Key of the section in the record reader's output.
    pub fn key(&self) -> &'static str {
        match self {
            Section::General => "general",
            Section::Players => "players",
            Section::Pairings => "pairings_players",
        }
    }
}

/// Errors that abort a conversion. Field-level problems never end up here.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConvertError {
    /// A required top-level section is absent.
    MissingSection(Section),
    /// The input could not be decoded as a record set at all.
    InvalidJson(String),
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::MissingSection(section) => {
                write!(f, "Record set is missing the '{}' section", section.key())
            }
            ConvertError::InvalidJson(msg) => write!(f, "Record set is not valid JSON: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentDates {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// General tournament information. Every field may be empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentInfo {
    pub name: String,
    pub location: String,
    pub organizer: String,
    pub arbiter: String,
    pub dates: TournamentDates,
    /// "<base> + <increment>", None when either part is missing.
    pub time_control: Option<String>,
    pub total_rounds: Option<u32>,
    pub player_count: Option<u32>,
}

/// One game within a round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// 1-based, contiguous within the round.
    pub board: u32,
    pub white: PlayerRef,
    pub black: PlayerRef,
    /// From White's perspective.
    pub result: GameResult,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundPairing {
    pub round: u32,
    pub pairings: Vec<Board>,
}

/// The normalized tournament: what display code consumes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentModel {
    pub tournament_info: TournamentInfo,
    /// Source order, not ranked.
    pub player_list: Vec<Player>,
    /// Ascending by round.
    pub round_pairings: Vec<RoundPairing>,
}

impl TournamentModel {
    pub fn round(&self, round: u32) -> Option<&RoundPairing> {
        self.round_pairings.iter().find(|r| r.round == round)
    }

    /// The requested round if it is positive and present, otherwise the latest round.
    pub fn select_round(&self, requested: Option<u32>) -> Option<&RoundPairing> {
        requested
            .filter(|&r| r > 0)
            .and_then(|r| self.round(r))
            .or_else(|| self.round_pairings.last())
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.player_list.iter().find(|p| p.id == Some(id))
    }
}
