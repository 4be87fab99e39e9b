//! Color, GameResult and the per-player Game history entry.

use serde::{Deserialize, Serialize};

/// Side a player had in a game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Strict decoding of a perspective color code.
    /// `None` for codes the reader is not known to emit.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "4000-1" => Some(Color::White),
            "4000-2" => Some(Color::Black),
            _ => None,
        }
    }
}

/// Outcome code as stored on one side's pairing record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "4002-3" => Some(Outcome::Win),
            "4002-2" => Some(Outcome::Draw),
            "4002-1" => Some(Outcome::Loss),
            _ => None,
        }
    }
}

/// Game result in standard notation, always White first.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum GameResult {
    #[serde(rename = "1-0")]
    WhiteWins,
    #[serde(rename = "0-1")]
    BlackWins,
    #[serde(rename = "1/2-1/2")]
    Draw,
    /// Not played, forfeited or not yet entered.
    #[default]
    #[serde(rename = "-")]
    Unplayed,
}

impl GameResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Unplayed => "-",
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in a player's game history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub round: u32,
    /// None for byes and unresolved opponents.
    pub opponent_id: Option<u32>,
    pub opponent_name: String,
    pub result: GameResult,
    pub color: Color,
}
