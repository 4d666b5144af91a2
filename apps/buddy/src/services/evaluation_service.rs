use crate::model::activity::{EmojiMatch, GuessNumber, Quiz};

/// Outcome of checking a submission: whether it was right, which cue URL to
/// play, and what to reveal on a miss (the target number, the sequence).
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub correct: bool,
    pub sound: String,
    pub reveal: Option<String>,
}

pub struct EvaluationService;

impl EvaluationService {
    pub fn check_quiz(quiz: &Quiz, answer: &str) -> Verdict {
        let correct = answer == quiz.correct_option;
        Verdict {
            correct,
            sound: if correct {
                quiz.sounds.correct.clone()
            } else {
                quiz.sounds.wrong.clone()
            },
            reveal: None,
        }
    }

    /// The target was fixed when the game was generated; a miss reveals it.
    pub fn check_guess(game: &GuessNumber, guess: i64) -> Verdict {
        let correct = guess == game.target;
        Verdict {
            correct,
            sound: if correct {
                game.sounds.correct.clone()
            } else {
                game.sounds.wrong.clone()
            },
            reveal: (!correct).then(|| game.target.to_string()),
        }
    }

    /// Order matters: the submission must match the sequence element-wise.
    pub fn check_emoji(game: &EmojiMatch, submission: &[String]) -> Verdict {
        let correct = submission == game.sequence.as_slice();
        Verdict {
            correct,
            sound: if correct {
                game.sounds.correct.clone()
            } else {
                game.sounds.wrong.clone()
            },
            reveal: (!correct).then(|| game.sequence.join(" ")),
        }
    }
}
