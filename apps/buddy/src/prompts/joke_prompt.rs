pub struct JokePrompt;

impl JokePrompt {
    pub fn get_prompt() -> String {
        "Tell me a short, child-friendly joke. Return only the joke text.".to_string()
    }
}
