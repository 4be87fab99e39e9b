//! General-info projection: the tournament header.

use crate::logic::field::{parse_date, parse_uint};
use crate::models::{codes, Diagnostics, RawRecord, Section, TournamentDates, TournamentInfo};

/// Project the general record onto [`TournamentInfo`]. Missing fields stay empty.
pub fn transform_general_info(
    general: &RawRecord,
    diagnostics: &mut Diagnostics,
) -> TournamentInfo {
    let text = |code: &str| general.text(code).unwrap_or_default();

    let start = parse_date(general.get(codes::START_DATE)).report(
        diagnostics,
        Section::General,
        codes::START_DATE,
    );
    let end = parse_date(general.get(codes::END_DATE)).report(
        diagnostics,
        Section::General,
        codes::END_DATE,
    );

    let time_control = match (general.text(codes::BASE_TIME), general.text(codes::INCREMENT)) {
        (Some(base), Some(increment)) => Some(format!("{} + {}", base, increment)),
        _ => None,
    };

    TournamentInfo {
        name: text(codes::TOURNAMENT_NAME),
        location: text(codes::LOCATION),
        organizer: text(codes::ORGANIZER),
        arbiter: text(codes::ARBITER),
        dates: TournamentDates { start, end },
        time_control,
        total_rounds: parse_uint(general.get(codes::ROUND_COUNT)).report(
            diagnostics,
            Section::General,
            codes::ROUND_COUNT,
        ),
        player_count: parse_uint(general.get(codes::PLAYER_COUNT)).report(
            diagnostics,
            Section::General,
            codes::PLAYER_COUNT,
        ),
    }
}
