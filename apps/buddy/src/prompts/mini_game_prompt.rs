pub struct MiniGamePrompt;

impl MiniGamePrompt {
    pub fn get_prompt() -> String {
        r#"You are a friendly chatbot for kids. Generate a fun mini-game for children. The game can be:
1. "guess_number" - child guesses a number in a range.
2. "emoji_match" - child must match a sequence of emojis.
Return ONLY valid JSON with keys:
- type: "mini_game"
- activity_type: "mini_game"
- game: "guess_number" or "emoji_match"
- instructions: short instruction
- range: [min,max] if game is guess_number
- sequence: list of emojis in correct order if emoji_match
- options: list of emoji options if emoji_match"#
            .to_string()
    }
}
