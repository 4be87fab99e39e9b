//! Recoverable problems found during a conversion.

use crate::models::tournament::Section;
use serde::Serialize;

/// A problem that was recovered locally. The model is still usable.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A field was present but could not be decoded; a default was used instead.
    FieldDecode {
        section: Section,
        field: String,
        value: String,
    },
    /// An opponent key matched no player record.
    UnresolvedReference {
        round: u32,
        player_key: String,
        opponent_key: String,
    },
    /// A white-perspective record naming a side that cannot be resolved. No board is emitted.
    DroppedBoard {
        round: u32,
        player_key: String,
        opponent_key: String,
    },
    /// A black-perspective record whose white-perspective counterpart is missing.
    /// The game does not appear on any board.
    UnpairedBlackRecord {
        round: u32,
        player_key: String,
        opponent_key: String,
    },
    /// A second white-perspective record for a game that already has a board.
    DuplicatePairing {
        round: u32,
        player_key: String,
        opponent_key: String,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::FieldDecode { section, field, value } => write!(
                f,
                "could not decode field {} in {} section (value {:?})",
                field,
                section.key(),
                value
            ),
            Warning::UnresolvedReference { round, player_key, opponent_key } => write!(
                f,
                "round {}: opponent '{}' of player '{}' matches no player record",
                round, opponent_key, player_key
            ),
            Warning::DroppedBoard { round, player_key, opponent_key } => write!(
                f,
                "round {}: game of player '{}' vs '{}' cannot be resolved, board dropped",
                round, player_key, opponent_key
            ),
            Warning::UnpairedBlackRecord { round, player_key, opponent_key } => write!(
                f,
                "round {}: black record of player '{}' vs '{}' has no white counterpart, \
                 game not seated",
                round, player_key, opponent_key
            ),
            Warning::DuplicatePairing { round, player_key, opponent_key } => write!(
                f,
                "round {}: duplicate white record of player '{}' vs '{}' dropped",
                round, player_key, opponent_key
            ),
        }
    }
}

/// Warnings collected during one conversion, in the order they were found.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning and log it.
    pub fn push(&mut self, warning: Warning) {
        match &warning {
            // Unresolved opponents in a game history are the ordinary bye case.
            Warning::UnresolvedReference { .. } => log::debug!("{}", warning),
            _ => log::warn!("{}", warning),
        }
        self.warnings.push(warning);
    }

    pub fn field(&mut self, section: Section, field: &str, value: impl Into<String>) {
        self.push(Warning::FieldDecode {
            section,
            field: field.to_string(),
            value: value.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
