use protocompare_ai::{
  AiClient, ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
  ChatCompletionRequestUserMessage,
};
use protocompare_shared::AppError;

use crate::ProtocolStep;

const FORMATTING_SYSTEM_PROMPT: &str = "\
You are a scientific protocol procedure formatter. Given protocol steps as \
JSON, render them as a clear, human-readable procedure.

Keep the step order, use concise language, and return only the formatted \
procedure text without additional explanations or comments.";

/// Render structured steps back into readable procedure prose.
pub async fn format_procedure(
  ai: &AiClient,
  steps: &[ProtocolStep],
) -> Result<String, AppError> {
  let listing = serde_json::to_string_pretty(steps)?;

  let system = ChatCompletionRequestSystemMessage::from(FORMATTING_SYSTEM_PROMPT);
  let user = ChatCompletionRequestUserMessage::from(listing);

  let text = ai
    .generate_text(vec![
      ChatCompletionRequestMessage::System(system),
      ChatCompletionRequestMessage::User(user),
    ])
    .await?;

  Ok(text.trim().to_owned())
}
