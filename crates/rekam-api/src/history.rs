//! Handlers for `/api/history` — list, delete-all, and delete-one.
//!
//! | Method   | Path                 | Notes |
//! |----------|----------------------|-------|
//! | `GET`    | `/api/history`       | All records, most recent first |
//! | `DELETE` | `/api/history`       | Unconditional truncate |
//! | `DELETE` | `/api/history/{id}`  | 404 if no row matches |

use axum::{
  Json,
  extract::{Path, State},
};
use rekam_core::store::RecordStore;
use serde_json::{Value, json};

use crate::{AppState, error::ApiError};

/// `GET /api/history`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Value>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let records = state.store.list_all().await.map_err(ApiError::storage)?;
  Ok(Json(json!({ "data": records })))
}

/// `DELETE /api/history`
pub async fn delete_all<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Value>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  state.store.delete_all().await.map_err(ApiError::storage)?;
  tracing::info!("deleted all history");
  Ok(Json(json!({ "success": true, "message": "All history deleted" })))
}

/// `DELETE /api/history/{id}`
pub async fn delete_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let deleted = state
    .store
    .delete_by_id(id)
    .await
    .map_err(ApiError::storage)?;

  if !deleted {
    return Err(ApiError::NotFound(format!("record {id} not found")));
  }

  tracing::info!(id, "deleted record");
  Ok(Json(json!({ "success": true, "deleted_id": id })))
}
