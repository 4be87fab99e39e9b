//! Raw record set as produced by the record reader: keyed, untyped field maps.

use crate::models::tournament::{ConvertError, Section};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field codes used by the record reader.
pub mod codes {
    pub const TOURNAMENT_NAME: &str = "65";
    pub const LOCATION: &str = "66";
    pub const ARBITER: &str = "67";
    pub const BASE_TIME: &str = "72";
    pub const INCREMENT: &str = "73";
    pub const ORGANIZER: &str = "88";
    pub const START_DATE: &str = "89";
    pub const END_DATE: &str = "91";
    pub const ROUND_COUNT: &str = "1";
    pub const PLAYER_COUNT: &str = "4";

    pub const NAME: &str = "2000";
    pub const CLUB: &str = "2001";
    pub const TITLE: &str = "2002";
    pub const NATIONAL_RATING: &str = "2003";
    pub const INTERNATIONAL_RATING: &str = "2004";
    pub const FEDERATION: &str = "2006";
    pub const PLAYER_KEY: &str = "2020";
    pub const PLAYER_ID: &str = "2021";
    pub const FINAL_RANK: &str = "2022";
    pub const POINTS: &str = "2025";
    pub const BUCHHOLZ: &str = "2030";
    pub const BUCHHOLZ_CUT_1: &str = "2031";
    pub const SONNEBORN_BERGER: &str = "2032";

    pub const OWNER_KEY: &str = "player";
    pub const ROUND: &str = "round";
    pub const COLOR: &str = "4000";
    pub const OPPONENT_KEY: &str = "4001";
    pub const RESULT: &str = "4002";
}

/// A single field value: the reader emits strings and numbers; anything else is kept as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawValue {
    /// Textual form used for keys and enumerated codes. Integral numbers print without a fraction.
    pub fn as_text(&self) -> Option<String> {
        match self {
            RawValue::Text(s) => Some(s.clone()),
            RawValue::Number(n) if n.is_finite() && n.fract() == 0.0 => {
                Some(format!("{}", *n as i64))
            }
            RawValue::Number(n) => Some(n.to_string()),
            RawValue::Other(_) => None,
        }
    }
}

/// One keyed record (general info, player or pairing).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(pub BTreeMap<String, RawValue>);

impl RawRecord {
    pub fn get(&self, code: &str) -> Option<&RawValue> {
        self.0.get(code)
    }

    /// Trimmed text of a field; `None` if missing, not textual, or blank.
    pub fn text(&self, code: &str) -> Option<String> {
        let s = self.get(code)?.as_text()?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Builder used by tests and callers assembling records by hand.
    pub fn with(mut self, code: &str, value: impl Into<RawValue>) -> Self {
        self.0.insert(code.to_string(), value.into());
        self
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<u32> for RawValue {
    fn from(n: u32) -> Self {
        RawValue::Number(f64::from(n))
    }
}

/// The three sections handed over by the record reader. Each may be absent in malformed input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecordSet {
    #[serde(default)]
    pub general: Option<RawRecord>,
    #[serde(default)]
    pub players: Option<Vec<RawRecord>>,
    #[serde(default)]
    pub pairings_players: Option<Vec<RawRecord>>,
}

impl RawRecordSet {
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        serde_json::from_str(json).map_err(|e| ConvertError::InvalidJson(e.to_string()))
    }

    /// Borrow all three sections, failing on the first one that is missing.
    pub fn sections(&self) -> Result<(&RawRecord, &[RawRecord], &[RawRecord]), ConvertError> {
        let general = self
            .general
            .as_ref()
            .ok_or(ConvertError::MissingSection(Section::General))?;
        let players = self
            .players
            .as_deref()
            .ok_or(ConvertError::MissingSection(Section::Players))?;
        let pairings = self
            .pairings_players
            .as_deref()
            .ok_or(ConvertError::MissingSection(Section::Pairings))?;
        Ok((general, players, pairings))
    }
}
