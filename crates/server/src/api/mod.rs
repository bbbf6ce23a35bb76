use axum::{
  Json, Router,
  routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::utils::AppState;

mod add_protocol;
mod compare_protocols;
mod extract_protocol;
mod search_protocols;

pub use add_protocol::{AddProtocol, AddProtocolResult};
pub use compare_protocols::CompareProtocols;
pub use extract_protocol::{ExtractProtocol, FormatProcedure};
pub use search_protocols::SearchProtocols;

#[derive(OpenApi)]
#[openapi(
  info(
    title = "Protocompare API",
    version = "0.0.1",
    description = "In silico comparison of scientific protocols via step-level embedding alignment"
  ),
  paths(
    extract_protocol::extract_protocol,
    extract_protocol::format_procedure,
    compare_protocols::compare_protocols,
    add_protocol::add_protocol,
    search_protocols::search_protocols
  ),
  components(schemas(
    AddProtocol,
    AddProtocolResult,
    CompareProtocols,
    ExtractProtocol,
    FormatProcedure,
    SearchProtocols,
    protocompare_core::ProtocolStep,
    protocompare_core::StructuredStep,
    protocompare_core::ProtocolSearchHit,
    protocompare_align::AlignedPair,
    protocompare_align::ComparisonResult,
    protocompare_align::SimilarityMatrix,
  ))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
  Json(ApiDoc::openapi())
}

pub fn app() -> Router<AppState> {
  Router::new()
    .route(
      "/api/v0/extract_protocol",
      post(extract_protocol::extract_protocol),
    )
    .route(
      "/api/v0/format_procedure",
      post(extract_protocol::format_procedure),
    )
    .route(
      "/api/v0/compare_protocols",
      post(compare_protocols::compare_protocols),
    )
    .route("/api/v0/add_protocol", post(add_protocol::add_protocol))
    .route(
      "/api/v0/search_protocols",
      post(search_protocols::search_protocols),
    )
    .route("/openapi.json", get(openapi_json))
    .merge(Scalar::with_url("/openapi/", ApiDoc::openapi()))
}
