//! Handler for `POST /api/submit`.

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use rekam_core::{record::NewRecord, store::RecordStore, timestamp};
use serde::Deserialize;
use serde_json::json;

use crate::{AppState, error::ApiError};

/// JSON body accepted by `POST /api/submit`.
///
/// `score`, `max_score` and `category` are required; a body missing any of
/// them is rejected as a validation error before any store access.
#[derive(Debug, Deserialize)]
pub struct SubmitBody {
  pub name:      Option<String>,
  pub score:     i64,
  pub max_score: i64,
  pub category:  String,
  pub note:      Option<String>,
}

/// `POST /api/submit` — returns 201 + `{success, id, timestamp}`.
///
/// The submission timestamp is captured here, in the configured offset, and
/// echoed back so the client sees exactly what was stored.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  body: Result<Json<SubmitBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Json(body) = body.map_err(|e| ApiError::Validation(e.body_text()))?;

  let timestamp = timestamp::submission_now(state.offset);
  let record = NewRecord {
    timestamp: timestamp.clone(),
    name:      body.name.unwrap_or_default(),
    score:     body.score,
    max_score: body.max_score,
    category:  body.category,
    note:      body.note.unwrap_or_default(),
  };

  let id = state.store.insert(record).await.map_err(ApiError::storage)?;
  tracing::info!(id, "stored submission");

  Ok((
    StatusCode::CREATED,
    Json(json!({
      "success":   true,
      "id":        id,
      "timestamp": timestamp,
    })),
  ))
}
