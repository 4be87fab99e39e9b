//! Pairing-sheet export as CSV.

use crate::models::RoundPairing;

/// One row per board: `board,white,black,result`.
pub fn pairing_sheet_csv(round: &RoundPairing) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["board", "white", "black", "result"])?;
    for board in &round.pairings {
        writer.write_record([
            board.board.to_string().as_str(),
            board.white.name.as_str(),
            board.black.name.as_str(),
            board.result.as_str(),
        ])?;
    }
    writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))
}
