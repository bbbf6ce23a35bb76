use anyhow::anyhow;
use async_openai::types::embeddings::CreateEmbeddingRequestArgs;
use protocompare_shared::AppError;

use crate::AiClient;
use crate::process::{EMBEDDING_DIM, process_embedding};

impl AiClient {
  /// Embed a single text.
  pub async fn embed(&self, input: &str) -> Result<Vec<f32>, AppError> {
    let request = CreateEmbeddingRequestArgs::default()
      .model(&self.embedding_model)
      .input(input)
      .dimensions(EMBEDDING_DIM as u32)
      .build()?;

    let embedding = self
      .client
      .embeddings()
      .create(request)
      .await
      .map(|r| r.data.into_iter())?
      .map(|e| e.embedding)
      .next_back()
      .ok_or_else(|| anyhow!("empty embedding"))?;

    process_embedding(embedding)
  }

  /// Embed multiple texts in a single API call.
  ///
  /// Returns one vector per input, in the same order. The corresponding step
  /// order is what the alignment engine relies on.
  pub async fn embed_batch(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, AppError> {
    if inputs.is_empty() {
      return Ok(vec![]);
    }

    let request = CreateEmbeddingRequestArgs::default()
      .model(&self.embedding_model)
      .input(inputs.to_vec())
      .dimensions(EMBEDDING_DIM as u32)
      .build()?;

    let response = self.client.embeddings().create(request).await?;

    // Sort by index to ensure ordering matches input
    let mut data = response.data;
    data.sort_by_key(|e| e.index);

    if data.len() != inputs.len() {
      return Err(
        anyhow!(
          "embedding count mismatch: expected {}, got {}",
          inputs.len(),
          data.len()
        )
        .into(),
      );
    }

    tracing::debug!(count = inputs.len(), "embedded step batch");

    data
      .into_iter()
      .map(|e| process_embedding(e.embedding))
      .collect()
  }
}
