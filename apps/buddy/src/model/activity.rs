use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::core::error::GenerationError;
use crate::model::emoji;

pub const CORRECT_SOUND: &str = "https://www.soundjay.com/buttons/sounds/button-3.mp3";
pub const WRONG_SOUND: &str = "https://www.soundjay.com/buttons/sounds/button-10.mp3";

/// The pair of cue URLs every activity carries. Backfilled from the fixed
/// defaults whenever the remote payload omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundCues {
    pub correct: String,
    pub wrong: String,
}

impl Default for SoundCues {
    fn default() -> Self {
        Self {
            correct: CORRECT_SOUND.to_string(),
            wrong: WRONG_SOUND.to_string(),
        }
    }
}

impl SoundCues {
    fn from_raw(correct: Option<String>, wrong: Option<String>) -> Self {
        Self {
            correct: correct
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| CORRECT_SOUND.to_string()),
            wrong: wrong
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| WRONG_SOUND.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Activity {
    Quiz(Quiz),
    MiniGame(MiniGame),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub question: String,
    pub options: Vec<String>,
    pub correct_option: String,
    pub sounds: SoundCues,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "game", rename_all = "snake_case")]
pub enum MiniGame {
    GuessNumber(GuessNumber),
    EmojiMatch(EmojiMatch),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessNumber {
    pub instructions: String,
    pub min: i64,
    pub max: i64,
    /// Fixed when the game is generated; answer checking compares against it.
    pub target: i64,
    pub sounds: SoundCues,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmojiMatch {
    pub instructions: String,
    pub sequence: Vec<String>,
    pub options: Vec<String>,
    pub sounds: SoundCues,
}

/// Field-by-field image of the JSON the quiz prompt asks the model for.
/// Everything is optional here; validation decides what survives.
#[derive(Debug, Default, Deserialize)]
struct RawQuizPayload {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    options: Option<Vec<String>>,
    #[serde(default)]
    correct_option: Option<String>,
    #[serde(default)]
    sound_correct: Option<String>,
    #[serde(default)]
    sound_wrong: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawMiniGamePayload {
    #[serde(default)]
    game: Option<String>,
    #[serde(default)]
    instructions: Option<String>,
    #[serde(default)]
    range: Option<Vec<i64>>,
    #[serde(default)]
    sequence: Option<Vec<String>>,
    #[serde(default)]
    options: Option<Vec<String>>,
    #[serde(default)]
    sound_correct: Option<String>,
    #[serde(default)]
    sound_wrong: Option<String>,
}

impl Quiz {
    /// The hardcoded quiz served whenever generation or validation fails.
    pub fn fallback() -> Self {
        Self {
            question: "What color is the sky on a sunny day?".to_string(),
            options: ["Blue", "Green", "Red", "Yellow"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            correct_option: "Blue".to_string(),
            sounds: SoundCues::default(),
        }
    }

    /// The fallback in the wire shape the prompt asks for, fed to the
    /// extractor as its last resort.
    pub fn fallback_fields() -> Map<String, Value> {
        let fallback = Self::fallback();
        match json!({
            "type": "quiz",
            "activity_type": "quiz",
            "question": fallback.question,
            "options": fallback.options,
            "correct_option": fallback.correct_option,
            "sound_correct": CORRECT_SOUND,
            "sound_wrong": WRONG_SOUND,
        }) {
            Value::Object(fields) => fields,
            _ => Map::new(),
        }
    }

    /// Decodes an extracted object into a quiz, rejecting payloads that
    /// break the contract: a non-empty question, at least two options, and
    /// a `correct_option` that is one of them.
    pub fn from_extracted(fields: Map<String, Value>) -> Result<Self, GenerationError> {
        let raw: RawQuizPayload = serde_json::from_value(Value::Object(fields))
            .map_err(|e| GenerationError::MalformedPayload(e.to_string()))?;

        let question = raw.question.unwrap_or_default();
        let options = raw.options.unwrap_or_default();
        let correct_option = raw.correct_option.unwrap_or_default();

        if question.trim().is_empty() {
            return Err(GenerationError::MalformedPayload(
                "quiz question is empty".to_string(),
            ));
        }
        if options.len() < 2 {
            return Err(GenerationError::MalformedPayload(format!(
                "quiz needs at least 2 options, got {}",
                options.len()
            )));
        }
        if !options.contains(&correct_option) {
            return Err(GenerationError::MalformedPayload(format!(
                "correct_option {:?} is not one of the options",
                correct_option
            )));
        }

        Ok(Self {
            question,
            options,
            correct_option,
            sounds: SoundCues::from_raw(raw.sound_correct, raw.sound_wrong),
        })
    }
}

impl MiniGame {
    /// The hardcoded emoji-match served whenever generation fails.
    pub fn fallback() -> Self {
        Self::EmojiMatch(EmojiMatch::fallback())
    }

    /// Decodes an extracted object by its `game` tag and normalizes the
    /// result so every required field is populated. An unknown or missing
    /// tag yields the fallback game.
    pub fn from_extracted<R: Rng>(
        fields: Map<String, Value>,
        rng: &mut R,
    ) -> Result<Self, GenerationError> {
        let raw: RawMiniGamePayload = serde_json::from_value(Value::Object(fields))
            .map_err(|e| GenerationError::MalformedPayload(e.to_string()))?;

        match raw.game.as_deref() {
            Some("guess_number") => Ok(Self::GuessNumber(GuessNumber::from_raw(raw, rng))),
            Some("emoji_match") => Ok(Self::EmojiMatch(EmojiMatch::from_raw(raw, rng))),
            other => {
                tracing::debug!(game = ?other, "unrecognized game tag, using fallback");
                Ok(Self::fallback())
            }
        }
    }
}

impl GuessNumber {
    fn from_raw<R: Rng>(raw: RawMiniGamePayload, rng: &mut R) -> Self {
        let (min, max) = match raw.range.as_deref() {
            Some(&[min, max]) if min < max => (min, max),
            _ => (1, 10),
        };

        Self {
            instructions: raw
                .instructions
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "Guess the correct number!".to_string()),
            min,
            max,
            target: rng.gen_range(min..=max),
            sounds: SoundCues::from_raw(raw.sound_correct, raw.sound_wrong),
        }
    }
}

impl EmojiMatch {
    pub fn fallback() -> Self {
        Self {
            instructions: "Match the emoji sequence!".to_string(),
            sequence: ["🐶", "🐱", "🐭"].iter().map(|s| s.to_string()).collect(),
            options: ["🐶", "🐱", "🐭", "🐹"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            sounds: SoundCues::default(),
        }
    }

    /// The fallback in the wire shape the prompt asks for.
    pub fn fallback_fields() -> Map<String, Value> {
        let fallback = Self::fallback();
        match json!({
            "type": "mini_game",
            "activity_type": "mini_game",
            "game": "emoji_match",
            "instructions": fallback.instructions,
            "sequence": fallback.sequence,
            "options": fallback.options,
            "sound_correct": CORRECT_SOUND,
            "sound_wrong": WRONG_SOUND,
        }) {
            Value::Object(fields) => fields,
            _ => Map::new(),
        }
    }

    fn from_raw<R: Rng>(raw: RawMiniGamePayload, rng: &mut R) -> Self {
        let sequence = match raw.sequence {
            Some(sequence) if !sequence.is_empty() => sequence,
            _ => emoji::random_sequence(rng),
        };
        let options = match raw.options {
            Some(options) if !options.is_empty() => emoji::cover_sequence(options, &sequence),
            _ => emoji::fill_options(&sequence, rng),
        };

        Self {
            instructions: raw
                .instructions
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "Match the emoji sequence!".to_string()),
            sequence,
            options,
            sounds: SoundCues::from_raw(raw.sound_correct, raw.sound_wrong),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn object(raw: &str) -> Map<String, Value> {
        match serde_json::from_str(raw).unwrap() {
            Value::Object(fields) => fields,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn quiz_decodes_and_backfills_sounds() {
        let fields = object(
            r#"{"type":"quiz","question":"2+2?","options":["3","4"],"correct_option":"4"}"#,
        );
        let quiz = Quiz::from_extracted(fields).unwrap();
        assert_eq!(quiz.question, "2+2?");
        assert_eq!(quiz.options, vec!["3", "4"]);
        assert_eq!(quiz.correct_option, "4");
        assert_eq!(quiz.sounds.correct, CORRECT_SOUND);
        assert_eq!(quiz.sounds.wrong, WRONG_SOUND);
    }

    #[test]
    fn quiz_keeps_supplied_sounds() {
        let fields = object(
            r#"{"question":"Q?","options":["a","b"],"correct_option":"a",
                "sound_correct":"https://example.com/yay.mp3",
                "sound_wrong":"https://example.com/aww.mp3"}"#,
        );
        let quiz = Quiz::from_extracted(fields).unwrap();
        assert_eq!(quiz.sounds.correct, "https://example.com/yay.mp3");
        assert_eq!(quiz.sounds.wrong, "https://example.com/aww.mp3");
    }

    #[test]
    fn quiz_rejects_correct_option_outside_options() {
        let fields = object(
            r#"{"question":"Q?","options":["a","b"],"correct_option":"c"}"#,
        );
        assert!(Quiz::from_extracted(fields).is_err());
    }

    #[test]
    fn quiz_rejects_empty_question_and_short_options() {
        let fields = object(r#"{"question":"  ","options":["a","b"],"correct_option":"a"}"#);
        assert!(Quiz::from_extracted(fields).is_err());

        let fields = object(r#"{"question":"Q?","options":["a"],"correct_option":"a"}"#);
        assert!(Quiz::from_extracted(fields).is_err());
    }

    #[test]
    fn quiz_rejects_wrongly_typed_fields() {
        let fields = object(r#"{"question":"Q?","options":"a,b","correct_option":"a"}"#);
        assert!(Quiz::from_extracted(fields).is_err());
    }

    #[test]
    fn quiz_fallback_fields_round_trip_to_fallback() {
        let quiz = Quiz::from_extracted(Quiz::fallback_fields()).unwrap();
        assert_eq!(quiz, Quiz::fallback());
    }

    #[test]
    fn guess_number_defaults_range_and_instructions() {
        let mut rng = StdRng::seed_from_u64(42);
        let fields = object(r#"{"game":"guess_number"}"#);
        let game = MiniGame::from_extracted(fields, &mut rng).unwrap();
        match game {
            MiniGame::GuessNumber(guess) => {
                assert_eq!((guess.min, guess.max), (1, 10));
                assert_eq!(guess.instructions, "Guess the correct number!");
                assert!((guess.min..=guess.max).contains(&guess.target));
            }
            other => panic!("expected guess_number, got {other:?}"),
        }
    }

    #[test]
    fn guess_number_rejects_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let fields = object(r#"{"game":"guess_number","range":[9,3]}"#);
        match MiniGame::from_extracted(fields, &mut rng).unwrap() {
            MiniGame::GuessNumber(guess) => assert_eq!((guess.min, guess.max), (1, 10)),
            other => panic!("expected guess_number, got {other:?}"),
        }
    }

    #[test]
    fn guess_number_target_stays_in_supplied_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let fields = object(r#"{"game":"guess_number","range":[5,50]}"#);
            match MiniGame::from_extracted(fields, &mut rng).unwrap() {
                MiniGame::GuessNumber(guess) => assert!((5..=50).contains(&guess.target)),
                other => panic!("expected guess_number, got {other:?}"),
            }
        }
    }

    #[test]
    fn emoji_match_synthesizes_missing_sequence_and_options() {
        let mut rng = StdRng::seed_from_u64(42);
        let fields = object(r#"{"game":"emoji_match","sequence":[],"options":[]}"#);
        match MiniGame::from_extracted(fields, &mut rng).unwrap() {
            MiniGame::EmojiMatch(game) => {
                assert_eq!(game.sequence.len(), emoji::SEQUENCE_LEN);
                assert_eq!(game.options.len(), emoji::OPTIONS_LEN);
                for e in &game.sequence {
                    assert!(game.options.contains(e));
                }
            }
            other => panic!("expected emoji_match, got {other:?}"),
        }
    }

    #[test]
    fn emoji_match_dedups_supplied_options_into_superset() {
        let mut rng = StdRng::seed_from_u64(42);
        let fields = object(
            r#"{"game":"emoji_match","sequence":["🐶","🐱"],"options":["🐶","🐶","🦖"]}"#,
        );
        match MiniGame::from_extracted(fields, &mut rng).unwrap() {
            MiniGame::EmojiMatch(game) => {
                assert_eq!(game.options, vec!["🐶", "🦖", "🐱"]);
            }
            other => panic!("expected emoji_match, got {other:?}"),
        }
    }

    #[test]
    fn unknown_game_tag_falls_back() {
        let mut rng = StdRng::seed_from_u64(42);
        let fields = object(r#"{"game":"tic_tac_toe","instructions":"play!"}"#);
        assert_eq!(
            MiniGame::from_extracted(fields, &mut rng).unwrap(),
            MiniGame::fallback()
        );
    }

    #[test]
    fn mini_game_fallback_fields_round_trip_to_fallback() {
        let mut rng = StdRng::seed_from_u64(42);
        let game = MiniGame::from_extracted(EmojiMatch::fallback_fields(), &mut rng).unwrap();
        assert_eq!(game, MiniGame::fallback());
    }

    #[test]
    fn activity_serializes_with_kind_tag() {
        let activity = Activity::Quiz(Quiz::fallback());
        let value = serde_json::to_value(&activity).unwrap();
        assert_eq!(value["kind"], "quiz");

        let activity = Activity::MiniGame(MiniGame::fallback());
        let value = serde_json::to_value(&activity).unwrap();
        assert_eq!(value["kind"], "mini_game");
        assert_eq!(value["game"], "emoji_match");
    }
}
