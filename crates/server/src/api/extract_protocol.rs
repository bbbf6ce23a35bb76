use axum::{Json, extract::State};
use protocompare_core::{ProtocolStep, StructuredStep};
use protocompare_shared::AppError;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::utils::AppState;

#[derive(Deserialize, ToSchema)]
pub struct ExtractProtocol {
  /// Free-form protocol text, e.g. the methods section of a paper
  pub text: String,
}

/// Extract ordered structured steps from free-form protocol text
#[utoipa::path(
  post,
  path = "/api/v0/extract_protocol",
  request_body = ExtractProtocol,
  responses(
    (status = 200, description = "Structured steps in procedure order", body = Vec<StructuredStep>),
    (status = 400, description = "Protocol text cannot be empty")
  )
)]
#[axum::debug_handler]
pub async fn extract_protocol(
  State(state): State<AppState>,
  Json(payload): Json<ExtractProtocol>,
) -> Result<Json<Vec<StructuredStep>>, AppError> {
  if payload.text.trim().is_empty() {
    return Err(AppError::bad_request(anyhow::anyhow!(
      "Protocol text cannot be empty"
    )));
  }

  let steps = protocompare_core::extract_protocol(&state.ai, &payload.text).await?;

  Ok(Json(steps))
}

#[derive(Deserialize, ToSchema)]
pub struct FormatProcedure {
  pub steps: Vec<ProtocolStep>,
}

/// Render structured steps as a human-readable procedure
#[utoipa::path(
  post,
  path = "/api/v0/format_procedure",
  request_body = FormatProcedure,
  responses(
    (status = 200, description = "Formatted procedure text", body = String),
    (status = 400, description = "Steps cannot be empty")
  )
)]
#[axum::debug_handler]
pub async fn format_procedure(
  State(state): State<AppState>,
  Json(payload): Json<FormatProcedure>,
) -> Result<String, AppError> {
  if payload.steps.is_empty() {
    return Err(AppError::bad_request(anyhow::anyhow!(
      "Steps cannot be empty"
    )));
  }

  protocompare_core::format_procedure(&state.ai, &payload.steps).await
}
