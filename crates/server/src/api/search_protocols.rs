use axum::{Json, extract::State};
use protocompare_core::{ProtocolSearchHit, ProtocolStep, ReferenceProtocol};
use protocompare_shared::AppError;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::utils::AppState;

const fn default_limit() -> usize {
  5
}

#[derive(Deserialize, ToSchema)]
pub struct SearchProtocols {
  /// Steps of the query protocol, in procedure order
  pub steps: Vec<ProtocolStep>,
  /// Maximum hits to return
  #[serde(default = "default_limit")]
  pub limit: usize,
}

/// Rank the reference corpus against a query protocol
///
/// Candidates that fail to load or compare are skipped, not fatal.
#[utoipa::path(
  post,
  path = "/api/v0/search_protocols",
  request_body = SearchProtocols,
  responses(
    (status = 200, description = "Hits by descending score", body = Vec<ProtocolSearchHit>),
    (status = 400, description = "Query protocol is empty or exceeds the step limit")
  )
)]
#[axum::debug_handler]
pub async fn search_protocols(
  State(state): State<AppState>,
  Json(payload): Json<SearchProtocols>,
) -> Result<Json<Vec<ProtocolSearchHit>>, AppError> {
  let hits =
    ReferenceProtocol::search(&state.ai, &payload.steps, payload.limit, &state.db).await?;

  Ok(Json(hits))
}
