//! Data structures: raw records in, normalized tournament model out.

mod diagnostics;
mod game;
mod player;
mod raw;
mod tournament;

pub use diagnostics::{Diagnostics, Warning};
pub use game::{Color, Game, GameResult, Outcome};
pub use player::{Player, PlayerId, PlayerRef, Rating, Tiebreaks};
pub use raw::{codes, RawRecord, RawRecordSet, RawValue};
pub use tournament::{
    Board, ConvertError, RoundPairing, Section, TournamentDates, TournamentInfo, TournamentModel,
};
