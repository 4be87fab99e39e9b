//! Player-list derivation, including each player's game history.

use crate::logic::field::{parse_decimal, parse_uint};
use crate::logic::lookup::{PlayerIndex, Resolution};
use crate::logic::pairing::PairingRecord;
use crate::models::{
    codes, Diagnostics, Game, Player, RawRecord, Rating, Section, Tiebreaks, Warning,
};
use std::collections::HashMap;

/// Build the player list in source order. Records with a blank name are dropped.
pub fn transform_player_list(
    players: &[RawRecord],
    pairings: &[PairingRecord],
    index: &PlayerIndex,
    bye_label: &str,
    diagnostics: &mut Diagnostics,
) -> Vec<Player> {
    let mut by_owner: HashMap<&str, Vec<&PairingRecord>> = HashMap::new();
    for pairing in pairings {
        by_owner.entry(pairing.owner.as_str()).or_default().push(pairing);
    }

    players
        .iter()
        .filter_map(|record| {
            let name = record.text(codes::NAME)?;
            let owned = record
                .text(codes::PLAYER_KEY)
                .and_then(|key| by_owner.get(key.as_str()))
                .map(Vec::as_slice)
                .unwrap_or_default();
            let games = player_games(owned, index, bye_label, diagnostics);
            Some(transform_player(record, name, games, diagnostics))
        })
        .collect()
}

fn transform_player(
    record: &RawRecord,
    name: String,
    games: Vec<Game>,
    diagnostics: &mut Diagnostics,
) -> Player {
    let mut uint =
        |code: &str| parse_uint(record.get(code)).report(diagnostics, Section::Players, code);
    let id = uint(codes::PLAYER_ID);
    let final_rank = uint(codes::FINAL_RANK);
    // A rating of 0 means unrated.
    let national = uint(codes::NATIONAL_RATING).filter(|&r| r > 0);
    let international = uint(codes::INTERNATIONAL_RATING).filter(|&r| r > 0);

    let mut decimal = |code: &str| {
        parse_decimal(record.get(code))
            .report(diagnostics, Section::Players, code)
            .unwrap_or(0.0)
    };

    Player {
        id,
        start_rank: id,
        final_rank,
        name,
        title: record.text(codes::TITLE),
        club: record.text(codes::CLUB).unwrap_or_default(),
        federation: record.text(codes::FEDERATION).unwrap_or_default(),
        rating: Rating {
            national,
            international,
        },
        points: decimal(codes::POINTS),
        tiebreaks: Tiebreaks {
            buchholz: decimal(codes::BUCHHOLZ),
            buchholz_cut1: decimal(codes::BUCHHOLZ_CUT_1),
            sonneborn_berger: decimal(codes::SONNEBORN_BERGER),
        },
        games,
    }
}

/// One player's games, ascending by round. Unknown opponents become byes.
fn player_games(
    owned: &[&PairingRecord],
    index: &PlayerIndex,
    bye_label: &str,
    diagnostics: &mut Diagnostics,
) -> Vec<Game> {
    let mut games: Vec<Game> = owned
        .iter()
        .map(|pairing| {
            let (opponent_id, opponent_name) = match index.resolve(pairing.opponent.as_deref()) {
                Resolution::Player(opponent) => (opponent.id, opponent.name),
                Resolution::Placeholder | Resolution::NoKey => (None, bye_label.to_string()),
                Resolution::Unknown(key) => {
                    diagnostics.push(Warning::UnresolvedReference {
                        round: pairing.round,
                        player_key: pairing.owner.clone(),
                        opponent_key: key,
                    });
                    (None, bye_label.to_string())
                }
            };
            Game {
                round: pairing.round,
                opponent_id,
                opponent_name,
                result: pairing.result,
                color: pairing.color,
            }
        })
        .collect();
    games.sort_by_key(|g| g.round);
    games
}
