use async_openai::{Client, config::OpenAIConfig};
use protocompare_shared::APP_ENV;

/// Handle to the OpenAI-compatible chat and embedding endpoints.
///
/// Constructed once at startup and shared read-only across concurrent calls;
/// nothing here mutates per request, so cloning is cheap and comparisons
/// against the same model stay reproducible.
#[derive(Clone)]
pub struct AiClient {
  pub(crate) client: Client<OpenAIConfig>,
  pub(crate) chat_model: String,
  pub(crate) embedding_model: String,
}

impl AiClient {
  #[must_use]
  pub fn from_env() -> Self {
    let config = OpenAIConfig::new()
      .with_api_key(&APP_ENV.openai_api_key)
      .with_api_base(&APP_ENV.openai_base_url);

    Self {
      client: Client::with_config(config),
      chat_model: APP_ENV.openai_chat_model.clone(),
      embedding_model: APP_ENV.openai_embedding_model.clone(),
    }
  }
}
