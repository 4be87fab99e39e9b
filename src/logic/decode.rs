//! Color and result decoding, shared by game histories and round boards.

use crate::models::{Color, GameResult, Outcome};

/// Decode a perspective color code. Only the white code maps to white; anything else is black.
pub fn decode_color(code: &str) -> Color {
    Color::from_code(code).unwrap_or(Color::Black)
}

/// Decode a result code as seen from `perspective`, into White-first notation.
///
/// A win for the white side is "1-0", a win for the black side is "0-1".
/// Unknown or missing codes give [`GameResult::Unplayed`].
pub fn decode_result(code: &str, perspective: Color) -> GameResult {
    match (Outcome::from_code(code), perspective) {
        (Some(Outcome::Win), Color::White) | (Some(Outcome::Loss), Color::Black) => {
            GameResult::WhiteWins
        }
        (Some(Outcome::Win), Color::Black) | (Some(Outcome::Loss), Color::White) => {
            GameResult::BlackWins
        }
        (Some(Outcome::Draw), _) => GameResult::Draw,
        (None, _) => GameResult::Unplayed,
    }
}
