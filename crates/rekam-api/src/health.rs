//! Handler for `GET /api/health` — static liveness payload, no store access.

use axum::Json;
use serde_json::{Value, json};

pub async fn handler() -> Json<Value> {
  Json(json!({ "status": "ok", "message": "Rekam record service is running" }))
}
