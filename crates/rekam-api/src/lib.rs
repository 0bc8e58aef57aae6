//! JSON REST API for the Rekam record service.
//!
//! Exposes an axum [`Router`] backed by any
//! [`RecordStore`](rekam_core::store::RecordStore), plus the [`ServerConfig`]
//! the `server` binary deserialises at startup. CORS is applied here as a
//! boundary layer: the API is consumed by a browser client on a different
//! origin.

pub mod classify;
pub mod error;
pub mod health;
pub mod history;
pub mod submit;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  http::{Method, header},
  routing::{delete, get, post},
};
use chrono::FixedOffset;
use rekam_core::store::RecordStore;
use serde::Deserialize;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `REKAM_`-prefixed environment variables.
///
/// Every field has a default so the server runs unconfigured; the bind
/// target itself is never hardcoded.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  /// UTC offset used when formatting submission timestamps, e.g. `"+07:00"`.
  pub utc_offset: String,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "0.0.0.0".to_string(),
      port:       8080,
      store_path: PathBuf::from("rekam_history.db"),
      utc_offset: "+07:00".to_string(),
    }
  }
}

impl ServerConfig {
  /// Parse [`utc_offset`](Self::utc_offset) into a [`FixedOffset`].
  ///
  /// An unparsable value is a startup error, never a per-request one.
  pub fn timestamp_offset(&self) -> Result<FixedOffset, chrono::ParseError> {
    self.utc_offset.parse()
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: RecordStore> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
  /// Parsed once at startup from [`ServerConfig::utc_offset`].
  pub offset: FixedOffset,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the record service.
///
/// Unsupported methods on a known route answer 405 via axum's method
/// routing; the CORS layer answers preflight OPTIONS itself.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: RecordStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
    .allow_headers([header::CONTENT_TYPE]);

  Router::new()
    .route("/api/health", get(health::handler))
    .route("/api/classify", get(classify::handler))
    .route("/api/submit", post(submit::handler::<S>))
    .route(
      "/api/history",
      get(history::list::<S>).delete(history::delete_all::<S>),
    )
    .route("/api/history/{id}", delete(history::delete_one::<S>))
    .layer(cors)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use rekam_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  async fn make_state() -> AppState<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let config = ServerConfig::default();
    let offset = config.timestamp_offset().unwrap();

    AppState {
      store: Arc::new(store),
      config: Arc::new(config),
      offset,
    }
  }

  async fn oneshot_raw(
    state:   AppState<SqliteStore>,
    method:  &str,
    uri:     &str,
    headers: Vec<(header::HeaderName, &str)>,
    body:    &str,
  ) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    for (k, v) in headers {
      builder = builder.header(k, v);
    }
    let req = builder.body(Body::from(body.to_string())).unwrap();
    router(state).oneshot(req).await.unwrap()
  }

  async fn oneshot_json(
    state:  AppState<SqliteStore>,
    method: &str,
    uri:    &str,
    body:   &Value,
  ) -> axum::response::Response {
    oneshot_raw(
      state,
      method,
      uri,
      vec![(header::CONTENT_TYPE, "application/json")],
      &body.to_string(),
    )
    .await
  }

  async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  // ── Health ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn health_returns_static_liveness_payload() {
    let state = make_state().await;
    let resp = oneshot_raw(state, "GET", "/api/health", vec![], "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "ok");
  }

  // ── Classify ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn classify_returns_the_category_label() {
    let state = make_state().await;
    let resp =
      oneshot_raw(state, "GET", "/api/classify?total=7&max_score=10", vec![], "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["category"], "Disarankan Konsultasi");
  }

  #[tokio::test]
  async fn classify_out_of_range_returns_error_category() {
    let state = make_state().await;
    let resp =
      oneshot_raw(state, "GET", "/api/classify?total=11&max_score=10", vec![], "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["category"], "Error");
  }

  #[tokio::test]
  async fn classify_missing_params_returns_400() {
    let state = make_state().await;
    let resp = oneshot_raw(state, "GET", "/api/classify?total=7", vec![], "").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  // ── Submit ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn submit_returns_201_with_id_and_timestamp() {
    let state = make_state().await;
    let resp = oneshot_json(
      state,
      "POST",
      "/api/submit",
      &json!({ "score": 5, "max_score": 10, "category": "Baik" }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body["id"].as_i64().unwrap() > 0);
    // DD/MM/YYYY, HH:MM:SS
    let ts = body["timestamp"].as_str().unwrap();
    assert_eq!(ts.len(), 20, "timestamp: {ts}");
    assert_eq!(&ts[10..12], ", ");
  }

  #[tokio::test]
  async fn submit_then_history_round_trips_the_record() {
    let state = make_state().await;

    let resp = oneshot_json(
      state.clone(),
      "POST",
      "/api/submit",
      &json!({
        "score":     5,
        "max_score": 10,
        "category":  "Baik",
        "name":      "Ani",
        "note":      "cukup istirahat"
      }),
    )
    .await;
    let id = body_json(resp).await["id"].as_i64().unwrap();

    let resp = oneshot_raw(state, "GET", "/api/history", vec![], "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let data = body_json(resp).await["data"].clone();
    assert_eq!(data.as_array().unwrap().len(), 1);
    assert_eq!(data[0]["id"], id);
    assert_eq!(data[0]["score"], 5);
    assert_eq!(data[0]["max_score"], 10);
    assert_eq!(data[0]["category"], "Baik");
    assert_eq!(data[0]["name"], "Ani");
    assert_eq!(data[0]["note"], "cukup istirahat");
  }

  #[tokio::test]
  async fn submit_without_optional_fields_stores_empty_strings() {
    let state = make_state().await;

    oneshot_json(
      state.clone(),
      "POST",
      "/api/submit",
      &json!({ "score": 5, "max_score": 10, "category": "Baik" }),
    )
    .await;

    let resp = oneshot_raw(state, "GET", "/api/history", vec![], "").await;
    let data = body_json(resp).await["data"].clone();
    assert_eq!(data[0]["name"], "");
    assert_eq!(data[0]["note"], "");
  }

  #[tokio::test]
  async fn submit_malformed_body_returns_400() {
    let state = make_state().await;
    let resp = oneshot_raw(
      state,
      "POST",
      "/api/submit",
      vec![(header::CONTENT_TYPE, "application/json")],
      "this is not json",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["error"].is_string());
  }

  #[tokio::test]
  async fn submit_missing_required_field_returns_400_and_stores_nothing() {
    let state = make_state().await;

    // No category.
    let resp = oneshot_json(
      state.clone(),
      "POST",
      "/api/submit",
      &json!({ "score": 5, "max_score": 10 }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = oneshot_raw(state, "GET", "/api/history", vec![], "").await;
    let data = body_json(resp).await["data"].clone();
    assert!(data.as_array().unwrap().is_empty());
  }

  // ── History ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn history_on_empty_store_returns_empty_data() {
    let state = make_state().await;
    let resp = oneshot_raw(state, "GET", "/api/history", vec![], "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"], json!([]));
  }

  #[tokio::test]
  async fn history_lists_most_recent_first() {
    let state = make_state().await;

    for score in [3, 14, 25] {
      oneshot_json(
        state.clone(),
        "POST",
        "/api/submit",
        &json!({ "score": score, "max_score": 30, "category": "Baik" }),
      )
      .await;
    }

    let resp = oneshot_raw(state, "GET", "/api/history", vec![], "").await;
    let data = body_json(resp).await["data"].clone();
    let scores: Vec<i64> = data
      .as_array()
      .unwrap()
      .iter()
      .map(|r| r["score"].as_i64().unwrap())
      .collect();
    assert_eq!(scores, vec![25, 14, 3]);
  }

  // ── Delete one ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_one_removes_only_that_record() {
    let state = make_state().await;

    let mut ids = vec![];
    for score in [3, 14, 25] {
      let resp = oneshot_json(
        state.clone(),
        "POST",
        "/api/submit",
        &json!({ "score": score, "max_score": 30, "category": "Baik" }),
      )
      .await;
      ids.push(body_json(resp).await["id"].as_i64().unwrap());
    }

    let resp = oneshot_raw(
      state.clone(),
      "DELETE",
      &format!("/api/history/{}", ids[1]),
      vec![],
      "",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["deleted_id"], ids[1]);

    let resp = oneshot_raw(state, "GET", "/api/history", vec![], "").await;
    let remaining: Vec<i64> = body_json(resp).await["data"]
      .as_array()
      .unwrap()
      .iter()
      .map(|r| r["id"].as_i64().unwrap())
      .collect();
    assert_eq!(remaining, vec![ids[2], ids[0]]);
  }

  #[tokio::test]
  async fn delete_one_missing_returns_404_and_preserves_rows() {
    let state = make_state().await;

    oneshot_json(
      state.clone(),
      "POST",
      "/api/submit",
      &json!({ "score": 5, "max_score": 10, "category": "Baik" }),
    )
    .await;

    let resp = oneshot_raw(state.clone(), "DELETE", "/api/history/9999", vec![], "").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert!(body["error"].is_string());

    let resp = oneshot_raw(state, "GET", "/api/history", vec![], "").await;
    assert_eq!(body_json(resp).await["data"].as_array().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn delete_one_non_integer_id_returns_400() {
    let state = make_state().await;
    let resp = oneshot_raw(state, "DELETE", "/api/history/abc", vec![], "").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  // ── Delete all ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_all_empties_history() {
    let state = make_state().await;

    for score in [3, 14] {
      oneshot_json(
        state.clone(),
        "POST",
        "/api/submit",
        &json!({ "score": score, "max_score": 30, "category": "Baik" }),
      )
      .await;
    }

    let resp = oneshot_raw(state.clone(), "DELETE", "/api/history", vec![], "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "All history deleted");

    let resp = oneshot_raw(state, "GET", "/api/history", vec![], "").await;
    assert_eq!(body_json(resp).await["data"], json!([]));
  }

  // ── Method routing ──────────────────────────────────────────────────────────

  #[tokio::test]
  async fn unsupported_method_returns_405() {
    let state = make_state().await;
    let resp = oneshot_raw(state, "GET", "/api/submit", vec![], "").await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
  }

  // ── CORS ────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn preflight_allows_any_origin() {
    let state = make_state().await;
    let resp = oneshot_raw(
      state,
      "OPTIONS",
      "/api/submit",
      vec![
        (header::ORIGIN, "http://example.com"),
        (header::ACCESS_CONTROL_REQUEST_METHOD, "POST"),
        (header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"),
      ],
      "",
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
      resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .unwrap(),
      "*"
    );
    let methods = resp
      .headers()
      .get(header::ACCESS_CONTROL_ALLOW_METHODS)
      .unwrap()
      .to_str()
      .unwrap();
    assert!(methods.contains("POST"), "allowed methods: {methods}");
    assert!(methods.contains("DELETE"), "allowed methods: {methods}");
  }

  #[tokio::test]
  async fn simple_responses_carry_the_cors_header() {
    let state = make_state().await;
    let resp = oneshot_raw(
      state,
      "GET",
      "/api/history",
      vec![(header::ORIGIN, "http://example.com")],
      "",
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
      resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .unwrap(),
      "*"
    );
  }
}
