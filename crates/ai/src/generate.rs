use anyhow::anyhow;
use async_openai::types::chat::{
  ChatCompletionRequestMessage, CreateChatCompletionRequestArgs, ResponseFormat,
  ResponseFormatJsonSchema,
};
use protocompare_shared::AppError;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use crate::AiClient;

impl AiClient {
  /// Generate a structured object constrained by the JSON schema of `T`.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use schemars::JsonSchema;
  /// use serde::Deserialize;
  ///
  /// #[derive(Deserialize, JsonSchema)]
  /// struct ExtractedProtocol {
  ///     steps: Vec<StructuredStep>,
  /// }
  ///
  /// let result = ai
  ///     .generate_object::<ExtractedProtocol>(messages, "protocol_extraction".to_owned(), None)
  ///     .await?;
  /// ```
  pub async fn generate_object<T>(
    &self,
    messages: Vec<ChatCompletionRequestMessage>,
    schema_name: String,
    schema_description: Option<String>,
  ) -> Result<T, AppError>
  where
    T: DeserializeOwned + JsonSchema,
  {
    // Generate JSON schema from type
    let schema = schemars::schema_for!(T);
    let schema = serde_json::to_value(&schema)?;

    let request = CreateChatCompletionRequestArgs::default()
      .model(&self.chat_model)
      .messages(messages)
      .response_format(ResponseFormat::JsonSchema {
        json_schema: ResponseFormatJsonSchema {
          description: schema_description,
          name: schema_name,
          schema: Some(schema),
          strict: Some(true),
        },
      })
      .build()?;

    let response = self
      .client
      .chat()
      .create(request)
      .await
      .map(|r| r.choices.into_iter())?
      .find_map(|c| c.message.content)
      .ok_or_else(|| anyhow!("empty message content"))?;

    let result: T = serde_json::from_str(&response)?;

    Ok(result)
  }

  /// Generate free-form text.
  pub async fn generate_text(
    &self,
    messages: Vec<ChatCompletionRequestMessage>,
  ) -> Result<String, AppError> {
    let request = CreateChatCompletionRequestArgs::default()
      .model(&self.chat_model)
      .messages(messages)
      .build()?;

    self
      .client
      .chat()
      .create(request)
      .await
      .map(|r| r.choices.into_iter())?
      .filter_map(|c| c.message.content)
      .next_back()
      .ok_or(anyhow!("empty message content").into())
  }
}
