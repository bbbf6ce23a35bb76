// Re-export async_openai types for consumers
pub use async_openai::types::chat::{
  ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
  ChatCompletionRequestUserMessage,
};

mod client;
pub use client::AiClient;

mod embed;

mod generate;

mod process;
pub use process::EMBEDDING_DIM;
