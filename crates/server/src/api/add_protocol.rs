use axum::{Json, extract::State};
use protocompare_core::{ProtocolStep, ReferenceProtocol};
use protocompare_shared::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::utils::AppState;

#[derive(Deserialize, ToSchema)]
pub struct AddProtocol {
  /// Display name used in ranked search results
  pub name: String,
  pub steps: Vec<ProtocolStep>,
}

#[derive(Serialize, ToSchema)]
pub struct AddProtocolResult {
  pub id: Uuid,
}

/// Store a protocol in the reference corpus
///
/// Step embeddings are computed once at insert time; searches only read them.
#[utoipa::path(
  post,
  path = "/api/v0/add_protocol",
  request_body = AddProtocol,
  responses(
    (status = 200, description = "Protocol stored", body = AddProtocolResult),
    (status = 400, description = "Name or steps invalid")
  )
)]
#[axum::debug_handler]
pub async fn add_protocol(
  State(state): State<AppState>,
  Json(payload): Json<AddProtocol>,
) -> Result<Json<AddProtocolResult>, AppError> {
  if payload.name.trim().is_empty() {
    return Err(AppError::bad_request(anyhow::anyhow!(
      "Protocol name cannot be empty"
    )));
  }

  let stored =
    ReferenceProtocol::create(&state.ai, payload.name, payload.steps, &state.db).await?;

  Ok(Json(AddProtocolResult { id: stored.id }))
}
