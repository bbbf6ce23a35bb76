use axum::{Json, extract::State};
use protocompare_align::{ComparisonResult, compare};
use protocompare_core::{ProtocolStep, embed_protocol};
use protocompare_shared::AppError;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::utils::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CompareProtocols {
  /// Steps of the first protocol, in procedure order
  pub protocol_a: Vec<ProtocolStep>,
  /// Steps of the second protocol, in procedure order
  pub protocol_b: Vec<ProtocolStep>,
}

/// Compare two protocols step by step
///
/// Embeds both step sequences with the shared model, aligns them one-to-one
/// and returns the score, the alignment and the full similarity matrix.
#[utoipa::path(
  post,
  path = "/api/v0/compare_protocols",
  request_body = CompareProtocols,
  responses(
    (status = 200, description = "Score, step alignment and similarity matrix", body = ComparisonResult),
    (status = 400, description = "A protocol is empty or exceeds the step limit")
  )
)]
#[axum::debug_handler]
pub async fn compare_protocols(
  State(state): State<AppState>,
  Json(payload): Json<CompareProtocols>,
) -> Result<Json<ComparisonResult>, AppError> {
  let a = embed_protocol(&state.ai, &payload.protocol_a).await?;
  let b = embed_protocol(&state.ai, &payload.protocol_b).await?;

  let result = compare(&a, &b)?;

  Ok(Json(result))
}
