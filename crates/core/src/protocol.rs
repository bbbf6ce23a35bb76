use protocompare_ai::AiClient;
use protocompare_align::ProtocolEmbedding;
use protocompare_shared::AppError;

use crate::ProtocolStep;

/// Maximum accepted step count per protocol.
///
/// The assignment solver is cubic in the larger step count; the cap keeps a
/// malformed or adversarial upload from blowing up a comparison or a corpus
/// scan.
pub const MAX_PROTOCOL_STEPS: usize = 256;

/// Format each step once and embed the batch into an ordered protocol
/// embedding.
pub async fn embed_protocol(
  ai: &AiClient,
  steps: &[ProtocolStep],
) -> Result<ProtocolEmbedding, AppError> {
  if steps.is_empty() {
    return Err(AppError::bad_request(anyhow::anyhow!(
      "protocol has no steps"
    )));
  }
  if steps.len() > MAX_PROTOCOL_STEPS {
    return Err(AppError::bad_request(anyhow::anyhow!(
      "protocol has {} steps, limit is {MAX_PROTOCOL_STEPS}",
      steps.len()
    )));
  }

  let texts: Vec<String> = steps.iter().map(ProtocolStep::to_semantic_text).collect();
  let vectors = ai.embed_batch(&texts).await?;

  Ok(ProtocolEmbedding::new(vectors)?)
}
