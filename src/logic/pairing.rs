//! Typed view of one raw pairing record, decoded once per conversion.

use crate::logic::decode::{decode_color, decode_result};
use crate::logic::field::{parse_uint, Parsed};
use crate::models::{codes, Color, Diagnostics, GameResult, Outcome, RawRecord, RawValue, Section};

/// One side's record of one round.
#[derive(Clone, Debug, PartialEq)]
pub struct PairingRecord {
    pub owner: String,
    pub round: u32,
    pub color: Color,
    pub opponent: Option<String>,
    /// Decoded from this record's own perspective.
    pub result: GameResult,
}

impl PairingRecord {
    /// Decode a raw pairing record. Records without an owner key or a positive round are skipped.
    pub fn decode(record: &RawRecord, diagnostics: &mut Diagnostics) -> Option<Self> {
        let Some(owner) = record.text(codes::OWNER_KEY) else {
            diagnostics.field(Section::Pairings, codes::OWNER_KEY, "");
            return None;
        };
        let round = match parse_uint(record.get(codes::ROUND)) {
            Parsed::Value(round) if round > 0 => round,
            Parsed::Value(round) => {
                diagnostics.field(Section::Pairings, codes::ROUND, round.to_string());
                return None;
            }
            Parsed::Absent => {
                diagnostics.field(Section::Pairings, codes::ROUND, "");
                return None;
            }
            Parsed::Malformed(raw) => {
                diagnostics.field(Section::Pairings, codes::ROUND, raw);
                return None;
            }
        };

        let color_code = code_text(record, codes::COLOR, diagnostics);
        if !color_code.is_empty() && Color::from_code(&color_code).is_none() {
            diagnostics.field(Section::Pairings, codes::COLOR, color_code.as_str());
        }
        let color = decode_color(&color_code);

        let result_code = code_text(record, codes::RESULT, diagnostics);
        if !result_code.is_empty() && Outcome::from_code(&result_code).is_none() {
            diagnostics.field(Section::Pairings, codes::RESULT, result_code.as_str());
        }

        Some(Self {
            owner,
            round,
            color,
            opponent: record.text(codes::OPPONENT_KEY),
            result: decode_result(&result_code, color),
        })
    }

    pub fn opponent_key(&self) -> &str {
        self.opponent.as_deref().unwrap_or("")
    }
}

/// Text of an enumerated code field. Values that are neither text nor number are reported
/// and read as blank.
fn code_text(record: &RawRecord, code: &str, diagnostics: &mut Diagnostics) -> String {
    match record.get(code) {
        Some(RawValue::Other(v)) if !v.is_null() => {
            diagnostics.field(Section::Pairings, code, v.to_string());
            String::new()
        }
        _ => record.text(code).unwrap_or_default(),
    }
}
