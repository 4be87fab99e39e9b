//! Entry point: one raw record set in, one tournament model out.

use crate::logic::general_info::transform_general_info;
use crate::logic::lookup::PlayerIndex;
use crate::logic::pairing::PairingRecord;
use crate::logic::player_list::transform_player_list;
use crate::logic::round_pairings::transform_round_pairings;
use crate::models::{ConvertError, Diagnostics, RawRecordSet, TournamentModel, Warning};
use serde::Serialize;

/// Default name shown for a missing opponent.
pub const DEFAULT_BYE_LABEL: &str = "bye";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Opponent name used for byes and unresolved opponents.
    pub bye_label: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            bye_label: DEFAULT_BYE_LABEL.to_string(),
        }
    }
}

/// A finished conversion: the model and every warning raised while building it.
#[derive(Clone, Debug, Serialize)]
pub struct Conversion {
    pub model: TournamentModel,
    pub warnings: Vec<Warning>,
}

/// Stateless converter. Lookup tables are built per call and dropped afterwards,
/// so concurrent calls never share anything.
#[derive(Clone, Debug, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, raw: &RawRecordSet) -> Result<TournamentModel, ConvertError> {
        self.convert_with_report(raw).map(|c| c.model)
    }

    /// Convert and keep the warnings. Fails only if a top-level section is missing.
    pub fn convert_with_report(&self, raw: &RawRecordSet) -> Result<Conversion, ConvertError> {
        let (general, players, raw_pairings) = raw.sections()?;
        let bye_label = self.config.bye_label.as_str();
        let mut diagnostics = Diagnostics::default();

        let index = PlayerIndex::build(players);
        let pairings: Vec<PairingRecord> = raw_pairings
            .iter()
            .filter_map(|record| PairingRecord::decode(record, &mut diagnostics))
            .collect();

        let tournament_info = transform_general_info(general, &mut diagnostics);
        let player_list =
            transform_player_list(players, &pairings, &index, bye_label, &mut diagnostics);
        let round_pairings =
            transform_round_pairings(&pairings, &index, bye_label, &mut diagnostics);

        let warnings = diagnostics.into_warnings();
        log::info!(
            "Converted '{}': {} players, {} rounds, {} warning(s)",
            tournament_info.name,
            player_list.len(),
            round_pairings.len(),
            warnings.len()
        );

        Ok(Conversion {
            model: TournamentModel {
                tournament_info,
                player_list,
                round_pairings,
            },
            warnings,
        })
    }
}

/// Convert with the default configuration.
pub fn convert(raw: &RawRecordSet) -> Result<TournamentModel, ConvertError> {
    Normalizer::default().convert(raw)
}
