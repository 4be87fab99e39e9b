//! Chess pairing display: normalizes records exported by a pairing program into a tournament model.

pub mod logic;
pub mod models;

pub use logic::{
    convert, decode_color, decode_result, pairing_sheet_csv, parse_date, parse_decimal, parse_uint,
    Conversion, Normalizer, NormalizerConfig, Parsed, DEFAULT_BYE_LABEL,
};
pub use models::{
    codes, Board, Color, ConvertError, Game, GameResult, Player, PlayerId, PlayerRef, RawRecord,
    RawRecordSet, RawValue, Rating, RoundPairing, Section, Tiebreaks, TournamentDates,
    TournamentInfo, TournamentModel, Warning,
};
