//! The text-completion seam.
//!
//! Callers depend on [`TextCompleter`] only: a prompt pair in, text or an
//! error out. [`BedrockCompleter`] is the production implementation over the
//! Converse API.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::info;

use crate::error::BedrockError;

/// One completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
}

#[async_trait]
pub trait TextCompleter: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, BedrockError>;
}

/// Completion via a Bedrock inference profile.
pub struct BedrockCompleter {
    client: Client,
    model_id: String,
}

impl BedrockCompleter {
    pub fn new(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }
}

#[async_trait]
impl TextCompleter for BedrockCompleter {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, BedrockError> {
        let inference = InferenceConfiguration::builder()
            .max_tokens(i32::try_from(request.max_tokens).unwrap_or(i32::MAX))
            .temperature(request.temperature)
            .build();

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(request.user_prompt.clone()))
            .build()
            .map_err(|e| BedrockError::Invocation(e.to_string()))?;

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(request.system_prompt.clone()))
            .messages(message)
            .inference_config(inference)
            .send()
            .await
            .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(text) = block {
                    Some(text.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() {
            return Err(BedrockError::EmptyCompletion);
        }

        info!(
            model_id = %self.model_id,
            text_len = text.len(),
            "completion received"
        );

        Ok(Completion { text })
    }
}
