use protocompare_ai::{
  AiClient, ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
  ChatCompletionRequestUserMessage,
};
use protocompare_shared::AppError;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::StructuredStep;

const EXTRACTION_SYSTEM_PROMPT: &str = "\
You are a scientific protocol information extractor. Given free-form protocol \
text, extract every procedural step into a structured record.

For each step fill in:
1. step_number: sequential position of the step, starting at 1.
2. step_type: kind of operation, e.g. filtration, centrifugation, heating.
3. input: materials or substances used in the step.
4. output: result or product obtained from the step.
5. action: the core operation performed, e.g. heat, filter, mix.
6. parameters: key-value pairs for step-specific settings such as \
temperature, duration, or speed.

Rules:
1. Preserve the order in which the steps appear in the text.
2. Do not invent steps that are not described.
3. Leave a field empty when the text does not specify it.";

/// Structured output of the extraction LLM call.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ExtractedProtocol {
  /// Steps in procedure order
  pub steps: Vec<StructuredStep>,
}

/// Turn free-form protocol text into ordered structured step records.
///
/// The records are sorted by `step_number` before being returned, so the
/// sequence fed to the embedding layer is always in procedure order even if
/// the model numbered out of order.
pub async fn extract_protocol(
  ai: &AiClient,
  text: &str,
) -> Result<Vec<StructuredStep>, AppError> {
  let system = ChatCompletionRequestSystemMessage::from(EXTRACTION_SYSTEM_PROMPT);
  let user = ChatCompletionRequestUserMessage::from(text.to_owned());

  let extracted = ai
    .generate_object::<ExtractedProtocol>(
      vec![
        ChatCompletionRequestMessage::System(system),
        ChatCompletionRequestMessage::User(user),
      ],
      "protocol_extraction".to_owned(),
      Some("Ordered structured steps extracted from protocol text".to_owned()),
    )
    .await?;

  let mut steps = extracted.steps;
  steps.sort_by_key(|step| step.step_number);

  tracing::debug!(count = steps.len(), "extracted protocol steps");

  Ok(steps)
}
