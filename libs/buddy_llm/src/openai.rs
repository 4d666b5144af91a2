use anyhow::{Context, Result};
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;

use crate::{CompletionConfig, CompletionService};

pub struct OpenAiService {
    client: Client<OpenAIConfig>,
}

impl OpenAiService {
    pub fn new(api_key: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        let client = Client::with_config(config);
        Self { client }
    }
}

#[async_trait]
impl CompletionService for OpenAiService {
    async fn complete(&self, prompt: &str, config: &CompletionConfig) -> Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(config.model.as_str())
            .messages([ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessage {
                    content: prompt.to_string().into(),
                    name: None,
                },
            )])
            .temperature(config.temperature)
            .build()
            .context("Failed to build chat completion request")?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .context("Chat completion request failed")?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .context("No content in completion response")?;

        Ok(content.trim().to_string())
    }
}
