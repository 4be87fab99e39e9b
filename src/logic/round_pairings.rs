//! Round-pairing reconstruction: one board per game, grouped by round.
//!
//! Every ordinary game arrives as two records, one per side. Only white-perspective
//! records seat a board, so each game is visited once. A black-perspective record
//! without a white counterpart (one-sided bye or forfeit) therefore never gets a
//! board; such records are reported as [`Warning::UnpairedBlackRecord`].

use crate::logic::lookup::{PlayerIndex, Resolution};
use crate::logic::pairing::PairingRecord;
use crate::models::{Board, Color, Diagnostics, PlayerRef, RoundPairing, Warning};
use std::collections::{BTreeMap, HashSet};

/// Rebuild per-round boards, ascending by round, boards numbered 1..N in seating order.
pub fn transform_round_pairings(
    pairings: &[PairingRecord],
    index: &PlayerIndex,
    bye_label: &str,
    diagnostics: &mut Diagnostics,
) -> Vec<RoundPairing> {
    report_unpaired_black_records(pairings, diagnostics);

    let mut rounds: BTreeMap<u32, Vec<Board>> = BTreeMap::new();
    let mut seated: HashSet<(u32, &str, &str)> = HashSet::new();

    for pairing in pairings.iter().filter(|p| p.color == Color::White) {
        let white = seat(index.resolve(Some(pairing.owner.as_str())), bye_label);
        let black = seat(index.resolve(pairing.opponent.as_deref()), bye_label);
        let (Some(white), Some(black)) = (white, black) else {
            diagnostics.push(Warning::DroppedBoard {
                round: pairing.round,
                player_key: pairing.owner.clone(),
                opponent_key: pairing.opponent_key().to_string(),
            });
            continue;
        };

        if !seated.insert(game_key(pairing)) {
            diagnostics.push(Warning::DuplicatePairing {
                round: pairing.round,
                player_key: pairing.owner.clone(),
                opponent_key: pairing.opponent_key().to_string(),
            });
            continue;
        }

        let boards = rounds.entry(pairing.round).or_default();
        boards.push(Board {
            board: boards.len() as u32 + 1,
            white,
            black,
            result: pairing.result,
        });
    }

    rounds
        .into_iter()
        .map(|(round, pairings)| RoundPairing { round, pairings })
        .collect()
}

/// Board side for a resolved key; `None` when there is nothing to seat.
fn seat(resolution: Resolution, bye_label: &str) -> Option<PlayerRef> {
    match resolution {
        Resolution::Player(player) => Some(player),
        Resolution::Placeholder => Some(PlayerRef::bye(bye_label)),
        Resolution::NoKey | Resolution::Unknown(_) => None,
    }
}

/// Round plus the unordered pair of keys, so both seatings of one game collide.
fn game_key(pairing: &PairingRecord) -> (u32, &str, &str) {
    let (a, b) = (pairing.owner.as_str(), pairing.opponent_key());
    if a <= b {
        (pairing.round, a, b)
    } else {
        (pairing.round, b, a)
    }
}

fn report_unpaired_black_records(pairings: &[PairingRecord], diagnostics: &mut Diagnostics) {
    let white_sides: HashSet<(u32, &str, &str)> = pairings
        .iter()
        .filter(|p| p.color == Color::White)
        .map(|p| (p.round, p.owner.as_str(), p.opponent_key()))
        .collect();

    for pairing in pairings.iter().filter(|p| p.color == Color::Black) {
        let counterpart = (pairing.round, pairing.opponent_key(), pairing.owner.as_str());
        if !white_sides.contains(&counterpart) {
            diagnostics.push(Warning::UnpairedBlackRecord {
                round: pairing.round,
                player_key: pairing.owner.clone(),
                opponent_key: pairing.opponent_key().to_string(),
            });
        }
    }
}
