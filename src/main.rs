use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Json,
};
use parking_lot::RwLock;
use serde_json::json;
use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use car_price_predictor::{
    config::Config,
    encode,
    model::Predictor,
    page::{self, Outcome},
    session::SessionState,
    stats,
    types::{PredictionOut, RawInput},
};

// ---------- Server state ----------

#[derive(Clone)]
struct AppState {
    predictor: Arc<Predictor>,
    session: Arc<RwLock<SessionState>>,
}

// ---------- Encode-and-predict cycle ----------

fn run_prediction(predictor: &Predictor, input: &RawInput) -> Result<i64, String> {
    let row = encode::encode(input, predictor.schema());

    // Debug signal so we can confirm the one-hot flags land where expected
    if std::env::var("LOG_FEATURES").ok().as_deref() == Some("1") {
        let nz = row.iter().filter(|x| **x != 0.0).count();
        let mut sample = vec![];
        for (name, v) in predictor.schema().columns.iter().zip(row.iter()).take(6) {
            sample.push(format!("{}={:.3}", name, v));
        }
        tracing::info!(
            "encoded model={} in_dim={} nonzero={} sample=[{}]",
            input.car_model,
            row.len(),
            nz,
            sample.join(", ")
        );
    }

    match predictor.predict(&[row]) {
        Ok(out) => Ok(out[0] as i64),
        Err(e) => {
            tracing::warn!("prediction failed: {}", e);
            Err(e.to_string())
        }
    }
}

// ---------- Handlers ----------

async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.read();
    Html(page::render(&session, &Outcome::None))
}

async fn autofill(
    State(state): State<AppState>,
    Form(payload): Form<RawInput>,
) -> Html<String> {
    let input = payload.clamped();
    let mut session = state.session.write();
    session.absorb(&input);
    let averages = stats::averages_for(&session.car_model);
    session.apply_autofill(averages);
    Html(page::render(&session, &Outcome::None))
}

async fn predict_form(
    State(state): State<AppState>,
    Form(payload): Form<RawInput>,
) -> Html<String> {
    let input = payload.clamped();
    {
        let mut session = state.session.write();
        session.absorb(&input);
    }
    let outcome = match run_prediction(&state.predictor, &input) {
        Ok(price) => Outcome::Price(price),
        Err(msg) => Outcome::Error(msg),
    };
    let session = state.session.read();
    Html(page::render(&session, &outcome))
}

async fn api_predict(
    State(state): State<AppState>,
    Json(payload): Json<RawInput>,
) -> Result<Json<PredictionOut>, (StatusCode, Json<serde_json::Value>)> {
    let input = payload.clamped();
    let price = run_prediction(&state.predictor, &input)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": e }))))?;

    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);
    Ok(Json(PredictionOut {
        t: now_ms,
        car_model: input.car_model,
        year: input.year,
        price,
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = Config::from_env();
    let predictor = Predictor::load(&cfg.model_path, &cfg.schema_path)?;

    // Warmup on an all-zeros row so shape problems surface before serving
    let _ = predictor.predict(&[vec![0.0; predictor.in_dim()]])?;
    tracing::info!(
        "loaded model from {}; schema v{} with {} columns ({:?})",
        cfg.model_path,
        predictor.schema().version,
        predictor.in_dim(),
        predictor.schema().encoding
    );

    let state = AppState {
        predictor: Arc::new(predictor),
        session: Arc::new(RwLock::new(SessionState::default())),
    };

    let app = axum::Router::new()
        .route("/", get(index))
        .route("/autofill", post(autofill))
        .route("/predict", post(predict_form))
        .route("/api/predict", post(api_predict))
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], cfg.port));
    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
