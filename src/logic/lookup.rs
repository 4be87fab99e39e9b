//! Per-conversion lookup tables from player key to player.

use crate::logic::field::parse_uint;
use crate::models::{codes, PlayerRef, RawRecord};
use std::collections::{HashMap, HashSet};

/// How a player key from a pairing record resolved.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// A named participant.
    Player(PlayerRef),
    /// A record exists for the key but has a blank name (bye / withdrawn slot).
    Placeholder,
    /// The pairing record carries no key at all.
    NoKey,
    /// The key matches no player record.
    Unknown(String),
}

/// Lookup tables built from the player section. Lives for one conversion only.
pub struct PlayerIndex {
    /// Named participants: key -> id and display name.
    by_start_key: HashMap<String, PlayerRef>,
    /// Every key in the player section, placeholders included.
    known_keys: HashSet<String>,
}

impl PlayerIndex {
    /// Later records win when a key repeats.
    pub fn build(players: &[RawRecord]) -> Self {
        let mut by_start_key = HashMap::new();
        let mut known_keys = HashSet::new();
        for record in players {
            let Some(key) = record.text(codes::PLAYER_KEY) else {
                continue;
            };
            match record.text(codes::NAME) {
                Some(name) => {
                    let id = parse_uint(record.get(codes::PLAYER_ID)).value();
                    by_start_key.insert(key.clone(), PlayerRef { id, name });
                }
                None => {
                    by_start_key.remove(&key);
                }
            }
            known_keys.insert(key);
        }
        Self {
            by_start_key,
            known_keys,
        }
    }

    pub fn resolve(&self, key: Option<&str>) -> Resolution {
        let Some(key) = key.map(str::trim).filter(|k| !k.is_empty()) else {
            return Resolution::NoKey;
        };
        if let Some(player) = self.by_start_key.get(key) {
            Resolution::Player(player.clone())
        } else if self.known_keys.contains(key) {
            Resolution::Placeholder
        } else {
            Resolution::Unknown(key.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players() -> Vec<RawRecord> {
        vec![
            RawRecord::default()
                .with(codes::PLAYER_KEY, "a")
                .with(codes::PLAYER_ID, "1")
                .with(codes::NAME, "Alpha, Anna"),
            RawRecord::default()
                .with(codes::PLAYER_KEY, "z")
                .with(codes::PLAYER_ID, "99")
                .with(codes::NAME, "  "),
        ]
    }

    #[test]
    fn resolves_named_players_placeholders_and_unknown_keys() {
        let players = players();
        let index = PlayerIndex::build(&players);
        assert_eq!(
            index.resolve(Some("a")),
            Resolution::Player(PlayerRef {
                id: Some(1),
                name: "Alpha, Anna".to_string()
            })
        );
        assert_eq!(index.resolve(Some("z")), Resolution::Placeholder);
        assert_eq!(index.resolve(Some("q")), Resolution::Unknown("q".to_string()));
        assert_eq!(index.resolve(Some(" ")), Resolution::NoKey);
        assert_eq!(index.resolve(None), Resolution::NoKey);
    }

    #[test]
    fn later_record_wins_for_repeated_key() {
        let mut players = players();
        players.push(
            RawRecord::default()
                .with(codes::PLAYER_KEY, "a")
                .with(codes::NAME, ""),
        );
        let index = PlayerIndex::build(&players);
        assert_eq!(index.resolve(Some("a")), Resolution::Placeholder);
    }
}
