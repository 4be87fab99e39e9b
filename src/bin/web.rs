//! Single binary web server: converts record sets and serves the current tournament.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), BYE_LABEL (e.g. spielfrei).

use actix_web::{
    get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chess_pairing_display::{
    pairing_sheet_csv, ConvertError, Normalizer, NormalizerConfig, RawRecordSet, TournamentModel,
    Warning, DEFAULT_BYE_LABEL,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// The tournament currently on display, with the freshness token it was built from.
struct CurrentTournament {
    last_modified: String,
    model: TournamentModel,
}

struct AppState {
    normalizer: Normalizer,
    current: RwLock<Option<CurrentTournament>>,
}

type State = Data<AppState>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTournamentBody {
    /// Changes whenever the source file changes (e.g. its last-modified marker).
    last_modified: String,
    records: RawRecordSet,
}

#[derive(Serialize)]
struct UpdateResponse {
    updated: bool,
    warnings: Vec<Warning>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    detail: String,
}

/// Path segment: round number; 0 selects the latest round.
#[derive(Deserialize)]
struct RoundPath {
    round: u32,
}

fn unprocessable(err: ConvertError) -> HttpResponse {
    log::warn!("Rejected record set: {}", err);
    HttpResponse::UnprocessableEntity().json(ErrorResponse {
        error: "file could not be processed",
        detail: err.to_string(),
    })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "chess-pairing-display",
    })
}

/// Convert a record set without touching the current tournament.
#[post("/api/convert")]
async fn api_convert(state: State, body: Json<RawRecordSet>) -> HttpResponse {
    match state.normalizer.convert_with_report(&body) {
        Ok(conversion) => HttpResponse::Ok().json(conversion),
        Err(e) => unprocessable(e),
    }
}

/// What a tournament update did.
#[derive(Debug)]
enum UpdateOutcome {
    /// Token matches the stored tournament; nothing was converted.
    Unchanged,
    Replaced(Vec<Warning>),
}

#[derive(Debug)]
enum UpdateError {
    Convert(ConvertError),
    Lock,
}

impl AppState {
    fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            current: RwLock::new(None),
        }
    }

    /// Replace the current tournament unless the freshness token is unchanged.
    /// A failed conversion leaves the stored tournament in place.
    fn update(
        &self,
        last_modified: String,
        records: &RawRecordSet,
    ) -> Result<UpdateOutcome, UpdateError> {
        let unchanged = self
            .current
            .read()
            .map_err(|_| UpdateError::Lock)?
            .as_ref()
            .is_some_and(|c| c.last_modified == last_modified);
        if unchanged {
            return Ok(UpdateOutcome::Unchanged);
        }

        let conversion = self
            .normalizer
            .convert_with_report(records)
            .map_err(UpdateError::Convert)?;
        let mut g = self.current.write().map_err(|_| UpdateError::Lock)?;
        log::info!("Current tournament replaced (lastModified {})", last_modified);
        // Last writer wins.
        *g = Some(CurrentTournament {
            last_modified,
            model: conversion.model,
        });
        Ok(UpdateOutcome::Replaced(conversion.warnings))
    }
}

/// Replace the current tournament unless the freshness token is unchanged.
#[put("/api/tournament")]
async fn api_update_tournament(state: State, body: Json<UpdateTournamentBody>) -> HttpResponse {
    let body = body.into_inner();
    match state.update(body.last_modified, &body.records) {
        Ok(UpdateOutcome::Unchanged) => HttpResponse::Ok().json(UpdateResponse {
            updated: false,
            warnings: Vec::new(),
        }),
        Ok(UpdateOutcome::Replaced(warnings)) => HttpResponse::Ok().json(UpdateResponse {
            updated: true,
            warnings,
        }),
        Err(UpdateError::Convert(e)) => unprocessable(e),
        Err(UpdateError::Lock) => HttpResponse::InternalServerError().body("lock error"),
    }
}

/// Get the current tournament (404 if none has been loaded).
#[get("/api/tournament")]
async fn api_get_tournament(state: State) -> HttpResponse {
    let g = match state.current.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.as_ref() {
        Some(current) => HttpResponse::Ok().json(&current.model),
        None => HttpResponse::NotFound().body("No tournament loaded"),
    }
}

#[get("/api/tournament/rounds/{round}")]
async fn api_get_round(state: State, path: Path<RoundPath>) -> HttpResponse {
    let g = match state.current.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let round = g
        .as_ref()
        .and_then(|c| c.model.select_round(Some(path.round)));
    match round {
        Some(round) => HttpResponse::Ok().json(round),
        None => HttpResponse::NotFound().body("Round not found"),
    }
}

/// Pairing sheet of one round as CSV.
#[get("/api/tournament/rounds/{round}/pairings.csv")]
async fn api_get_pairing_sheet(state: State, path: Path<RoundPath>) -> HttpResponse {
    let g = match state.current.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let Some(round) = g
        .as_ref()
        .and_then(|c| c.model.select_round(Some(path.round)))
    else {
        return HttpResponse::NotFound().body("Round not found");
    };
    match pairing_sheet_csv(round) {
        Ok(csv) => HttpResponse::Ok().content_type("text/csv; charset=utf-8").body(csv),
        Err(e) => {
            log::error!("CSV export of round {} failed: {}", round.round, e);
            HttpResponse::InternalServerError().body("export error")
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bye_label = std::env::var("BYE_LABEL").unwrap_or_else(|_| DEFAULT_BYE_LABEL.to_string());
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(AppState::new(Normalizer::new(NormalizerConfig { bye_label })));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(actix_web::web::JsonConfig::default().limit(16 * 1024 * 1024))
            .service(api_health)
            .service(api_convert)
            .service(api_update_tournament)
            .service(api_get_tournament)
            .service(api_get_pairing_sheet)
            .service(api_get_round)
    })
    .bind(bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};

    fn records(name: &str) -> Value {
        json!({
            "general": { "65": name, "1": 1 },
            "players": [
                { "2020": "a", "2021": "1", "2000": "Alpha, Anna" },
                { "2020": "b", "2021": "2", "2000": "Beta, Bert" }
            ],
            "pairings_players": [
                { "player": "a", "round": 1, "4000": "4000-1", "4001": "b", "4002": "4002-2" },
                { "player": "b", "round": 1, "4000": "4000-2", "4001": "a", "4002": "4002-2" }
            ]
        })
    }

    fn raw(value: Value) -> RawRecordSet {
        serde_json::from_value(value).unwrap()
    }

    fn current_name(state: &AppState) -> Option<String> {
        let g = state.current.read().unwrap();
        g.as_ref().map(|c| c.model.tournament_info.name.clone())
    }

    #[::core::prelude::v1::test]
    fn unchanged_token_skips_conversion() {
        let state = AppState::new(Normalizer::default());
        let first = state.update("v1".to_string(), &raw(records("Open")));
        assert!(matches!(first, Ok(UpdateOutcome::Replaced(_))));

        // Same token: not even a broken record set is looked at.
        let broken = raw(json!({ "general": {} }));
        let second = state.update("v1".to_string(), &broken);
        assert!(matches!(second, Ok(UpdateOutcome::Unchanged)));
        assert_eq!(current_name(&state).as_deref(), Some("Open"));
    }

    #[::core::prelude::v1::test]
    fn new_token_replaces_current_tournament() {
        let state = AppState::new(Normalizer::default());
        state.update("v1".to_string(), &raw(records("Open"))).unwrap();
        let outcome = state.update("v2".to_string(), &raw(records("Open, round 2")));
        assert!(matches!(outcome, Ok(UpdateOutcome::Replaced(_))));
        assert_eq!(current_name(&state).as_deref(), Some("Open, round 2"));
    }

    #[::core::prelude::v1::test]
    fn structural_error_keeps_current_tournament() {
        let state = AppState::new(Normalizer::default());
        state.update("v1".to_string(), &raw(records("Open"))).unwrap();
        let mut missing = records("Broken");
        missing.as_object_mut().unwrap().remove("pairings_players");
        let outcome = state.update("v2".to_string(), &raw(missing));
        assert!(matches!(
            outcome,
            Err(UpdateError::Convert(ConvertError::MissingSection(_)))
        ));
        assert_eq!(current_name(&state).as_deref(), Some("Open"));
    }

    #[actix_web::test]
    async fn update_endpoint_reports_gate_and_rejects_structural_errors() {
        let state = Data::new(AppState::new(Normalizer::default()));
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(api_update_tournament)
                .service(api_get_tournament),
        )
        .await;

        let body = json!({ "lastModified": "v1", "records": records("Open") });
        let req = test::TestRequest::put().uri("/api/tournament").set_json(&body).to_request();
        let resp: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp["updated"], true);

        let req = test::TestRequest::put().uri("/api/tournament").set_json(&body).to_request();
        let resp: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp["updated"], false);

        let mut missing = records("Broken");
        missing.as_object_mut().unwrap().remove("general");
        let body = json!({ "lastModified": "v2", "records": missing });
        let req = test::TestRequest::put().uri("/api/tournament").set_json(&body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let req = test::TestRequest::get().uri("/api/tournament").to_request();
        let model: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(model["tournamentInfo"]["name"], "Open");
    }
}
