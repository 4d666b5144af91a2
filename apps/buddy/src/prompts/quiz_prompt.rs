pub struct QuizPrompt;

impl QuizPrompt {
    pub fn get_prompt() -> String {
        r#"You are a friendly chatbot for kids. Generate a child-friendly quiz question. Focus on educational topics like math, colors, animals, shapes, or spelling.
Return ONLY valid JSON with keys:
- type: "quiz"
- activity_type: "quiz"
- question: text
- options: list of 3-4 answer choices
- correct_option: correct answer"#
            .to_string()
    }
}
