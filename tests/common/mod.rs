//! Shared fixture: a small four-player event with a bye placeholder.

use chess_pairing_display::RawRecordSet;
use serde_json::{json, Value};

pub fn pairing(player: &str, round: u32, color: &str, opponent: &str, result: &str) -> Value {
    json!({
        "player": player,
        "round": round,
        "4000": color,
        "4001": opponent,
        "4002": result,
    })
}

pub fn fixture() -> Value {
    json!({
        "general": {
            "65": "Open 2024",
            "66": "Kiel",
            "67": "Arbiter A",
            "88": "Club K",
            "89": "2024-05-17",
            "91": "19.05.2024",
            "72": "90",
            "73": "30",
            "1": 9,
            "4": "20"
        },
        "players": [
            {
                "2020": "a", "2021": "1", "2022": "2", "2000": "Alpha, Anna", "2002": "FM",
                "2001": "SK A", "2006": "GER", "2003": "2100", "2004": "2150",
                "2025": "2,5", "2030": "4.5", "2031": "3", "2032": "4.25"
            },
            {
                "2020": "b", "2021": "2", "2022": "1", "2000": "Beta, Bert", "2002": "",
                "2001": "SK B", "2006": "GER", "2003": "0", "2004": "1900",
                "2025": 3, "2030": "5", "2031": "4", "2032": "6"
            },
            {
                "2020": "c", "2021": "3", "2022": "3", "2000": "Gamma, Carl", "2002": "",
                "2001": "", "2006": "DEN", "2003": "1800", "2004": "",
                "2025": "1,5", "2030": "5", "2031": "3,5", "2032": "2"
            },
            {
                "2020": "d", "2021": 4, "2022": "4", "2000": "Delta, Dora",
                "2001": "SK D", "2006": "GER", "2003": "1600",
                "2025": "1", "2030": "4", "2031": "2", "2032": "1"
            },
            { "2020": "z", "2021": "5", "2000": "  " }
        ],
        "pairings_players": [
            pairing("a", 3, "4000-1", "b", "4002-3"),
            pairing("d", 3, "4000-1", "c", "4002-1"),
            pairing("b", 3, "4000-2", "a", "4002-1"),
            pairing("c", 3, "4000-2", "d", "4002-3"),
            pairing("a", 2, "4000-2", "c", "4002-1"),
            pairing("c", 2, "4000-1", "a", "4002-3"),
            pairing("b", 2, "4000-1", "z", "4002-3"),
            pairing("d", 2, "4000-1", "q", "4002-3"),
            pairing("a", 1, "4000-1", "b", "4002-3"),
            pairing("b", 1, "4000-2", "a", "4002-1"),
            pairing("c", 1, "4000-1", "d", "4002-2"),
            pairing("d", 1, "4000-2", "c", "4002-2")
        ]
    })
}

pub fn raw(value: Value) -> RawRecordSet {
    serde_json::from_value(value).unwrap()
}

/// Fixture with its pairing section replaced.
pub fn with_pairings(pairings: Vec<Value>) -> RawRecordSet {
    let mut value = fixture();
    value["pairings_players"] = Value::Array(pairings);
    raw(value)
}
