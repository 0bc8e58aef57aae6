//! Handler for `GET /api/classify` — the pure classifier over HTTP.

use axum::{Json, extract::Query};
use rekam_core::classify::classify;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
pub struct ClassifyParams {
  pub total:     i64,
  pub max_score: i64,
}

/// `GET /api/classify?total=<n>&max_score=<n>`
///
/// An out-of-range total classifies to the `Error` category rather than
/// failing the request; missing or non-integer parameters are rejected by
/// the extractor with a 400.
pub async fn handler(Query(params): Query<ClassifyParams>) -> Json<Value> {
  let category = classify(params.total, params.max_score);
  Json(json!({ "category": category }))
}
