use buddy_llm::CompletionClient;
use rand::Rng;

use crate::core::error::GenerationError;
use crate::model::activity::{EmojiMatch, MiniGame, Quiz};
use crate::parse::extract_object;
use crate::prompts::joke_prompt::JokePrompt;
use crate::prompts::mini_game_prompt::MiniGamePrompt;
use crate::prompts::quiz_prompt::QuizPrompt;

pub const FALLBACK_JOKE: &str =
    "Why did the banana go to the doctor? Because it wasn't peeling well! 🍌";

pub struct ActivityService;

impl ActivityService {
    /// One completion attempt; the raw trimmed text is the joke. Any failure
    /// lands on the hardcoded fallback joke.
    pub async fn generate_joke(client: &CompletionClient) -> String {
        let prompt = JokePrompt::get_prompt();
        match client.request_completion(&prompt).await {
            Ok(joke) if !joke.is_empty() => joke,
            Ok(_) => {
                tracing::warn!("joke completion came back empty, using the fallback joke");
                FALLBACK_JOKE.to_string()
            }
            Err(e) => {
                let err = GenerationError::RemoteCall(format!("{e:#}"));
                tracing::warn!(%err, "joke generation failed, using the fallback joke");
                FALLBACK_JOKE.to_string()
            }
        }
    }

    /// One completion attempt, extractor salvage, typed validation. Every
    /// failure path lands on the literal default quiz.
    pub async fn generate_quiz(client: &CompletionClient) -> Quiz {
        let prompt = QuizPrompt::get_prompt();
        let raw = match client.request_completion(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                let err = GenerationError::RemoteCall(format!("{e:#}"));
                tracing::warn!(%err, "quiz generation failed, serving the default quiz");
                return Quiz::fallback();
            }
        };

        let fields = extract_object(&raw, Quiz::fallback_fields());
        match Quiz::from_extracted(fields) {
            Ok(quiz) => quiz,
            Err(err) => {
                tracing::warn!(%err, "quiz payload rejected, serving the default quiz");
                Quiz::fallback()
            }
        }
    }

    pub async fn generate_mini_game(client: &CompletionClient) -> MiniGame {
        let prompt = MiniGamePrompt::get_prompt();
        let raw = match client.request_completion(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                let err = GenerationError::RemoteCall(format!("{e:#}"));
                tracing::warn!(%err, "mini-game generation failed, serving the default game");
                return MiniGame::fallback();
            }
        };

        Self::normalize_mini_game(&raw, &mut rand::thread_rng())
    }

    /// Extractor salvage plus per-game normalization, split from the remote
    /// call so tests can drive it with a seeded rng.
    pub fn normalize_mini_game<R: Rng>(raw: &str, rng: &mut R) -> MiniGame {
        let fields = extract_object(raw, EmojiMatch::fallback_fields());
        match MiniGame::from_extracted(fields, rng) {
            Ok(game) => game,
            Err(err) => {
                tracing::warn!(%err, "mini-game payload rejected, serving the default game");
                MiniGame::fallback()
            }
        }
    }
}
