pub mod core;
pub mod model;
pub mod parse;
pub mod prompts;
pub mod services;
pub mod ui;

use buddy_llm::{CompletionClient, CompletionProvider};

use crate::core::config::{self, Settings};
use crate::core::session::ChatSession;

pub use crate::core::error::AppError;

pub type Result<T> = std::result::Result<T, AppError>;

pub async fn run() -> Result<()> {
    let settings = Settings::from_env()?;
    let api_key = config::api_key_from_env()?;

    let client = CompletionClient::new(
        CompletionProvider::OpenAi,
        api_key,
        Some(settings.completion_config()),
    );

    tracing::info!(model = %settings.model, "starting chat session");

    let mut session = ChatSession::new();
    ui::run_chat(&mut session, &client).await
}
