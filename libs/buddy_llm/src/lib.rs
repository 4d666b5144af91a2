use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::timeout;

pub mod openai;

pub use openai::OpenAiService;

#[derive(Debug, Clone)]
pub enum CompletionProvider {
    OpenAi,
}

/// Parameters for a single completion request.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            temperature: 0.9,
            timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait]
pub trait CompletionService {
    async fn complete(&self, prompt: &str, config: &CompletionConfig) -> Result<String>;
}

pub struct CompletionClient {
    service: Box<dyn CompletionService + Send + Sync>,
    config: CompletionConfig,
}

impl CompletionClient {
    pub fn new(
        provider: CompletionProvider,
        api_key: String,
        config: Option<CompletionConfig>,
    ) -> Self {
        let service: Box<dyn CompletionService + Send + Sync> = match provider {
            CompletionProvider::OpenAi => Box::new(openai::OpenAiService::new(api_key)),
        };

        Self {
            service,
            config: config.unwrap_or_default(),
        }
    }

    /// Wrap an arbitrary service implementation, bypassing provider selection.
    pub fn with_service(
        service: Box<dyn CompletionService + Send + Sync>,
        config: CompletionConfig,
    ) -> Self {
        Self { service, config }
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Issues exactly one request, bounded by the configured timeout.
    /// No retries: a failed or timed-out attempt is the caller's problem.
    pub async fn request_completion(&self, prompt: &str) -> Result<String> {
        tracing::debug!(model = %self.config.model, "sending completion request");

        match timeout(self.config.timeout, self.service.complete(prompt, &self.config)).await {
            Ok(result) => result,
            Err(_) => Err(anyhow::anyhow!(
                "Completion request timed out after {:?}",
                self.config.timeout
            )),
        }
    }
}
