pub mod joke_prompt;
pub mod mini_game_prompt;
pub mod quiz_prompt;
