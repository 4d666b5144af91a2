use buddy_llm::CompletionClient;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use uuid::Uuid;

use crate::core::session::ChatSession;
use crate::model::activity::{Activity, EmojiMatch, GuessNumber, MiniGame, Quiz};
use crate::services::activity_service::ActivityService;
use crate::services::evaluation_service::EvaluationService;

pub const BOT_NAME: &str = "BuddyBot";

const ACTIONS: [&str; 6] = [
    "Say Hello 👋",
    "Tell a Joke 😂",
    "Dynamic Mini Game 🎮",
    "Dynamic Quiz 📝",
    "Play it again 🔁",
    "Leave 👋",
];

pub async fn run_chat(session: &mut ChatSession, client: &CompletionClient) -> crate::Result<()> {
    bot_says(session, &format!("Hi! I'm {BOT_NAME}. Let's play! 😃"));

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Choose an action")
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                user_says(session, ACTIONS[0]);
                bot_says(session, &format!("Hello! You chose: {} 😃", ACTIONS[0]));
            }
            1 => {
                user_says(session, ACTIONS[1]);
                let joke = ActivityService::generate_joke(client).await;
                bot_says(session, &joke);
            }
            2 => {
                user_says(session, ACTIONS[2]);
                let game = ActivityService::generate_mini_game(client).await;
                session.set_activity(Activity::MiniGame(game));
                bot_says(session, "Here's your mini-game! 🎉");
                render_current(session.current_activity())?;
            }
            3 => {
                user_says(session, ACTIONS[3]);
                let quiz = ActivityService::generate_quiz(client).await;
                session.set_activity(Activity::Quiz(quiz));
                bot_says(session, "Here's your quiz! 📝");
                render_current(session.current_activity())?;
            }
            4 => {
                user_says(session, ACTIONS[4]);
                render_current(session.current_activity())?;
            }
            _ => {
                bot_says(session, "Bye! Come back soon! 👋");
                break;
            }
        }
    }

    Ok(())
}

fn bot_says(session: &mut ChatSession, content: &str) {
    session.push_bot(content);
    println!("{} {}", format!("{BOT_NAME}:").yellow().bold(), content);
}

fn user_says(session: &mut ChatSession, content: &str) {
    session.push_user(content);
    println!("{} {}", "You:".blue().bold(), content);
}

/// An empty slot is the only user-visible error surface.
fn render_current(activity: Option<&Activity>) -> Result<(), dialoguer::Error> {
    match activity {
        None => {
            println!("{}", "⚠️  Failed to load activity.".red());
            Ok(())
        }
        Some(Activity::Quiz(quiz)) => play_quiz(quiz),
        Some(Activity::MiniGame(MiniGame::GuessNumber(game))) => play_guess_number(game),
        Some(Activity::MiniGame(MiniGame::EmojiMatch(game))) => play_emoji_match(game),
    }
}

fn play_quiz(quiz: &Quiz) -> Result<(), dialoguer::Error> {
    println!("{}", "📝 Quiz Time!".bold());

    let selection = Select::new()
        .with_prompt(quiz.question.as_str())
        .items(&quiz.options)
        .default(0)
        .interact()?;

    let verdict = EvaluationService::check_quiz(quiz, &quiz.options[selection]);
    if verdict.correct {
        println!("{}", "🎉 Correct! 🎊".green().bold());
    } else {
        println!("{}", "❌ Try again!".red());
    }
    play_sound(&verdict.sound);
    Ok(())
}

fn play_guess_number(game: &GuessNumber) -> Result<(), dialoguer::Error> {
    println!("{}", "🎮 Mini Game!".bold());
    println!("{}", game.instructions);

    let (min, max) = (game.min, game.max);
    let guess: i64 = Input::new()
        .with_prompt(format!("Pick a number between {}-{}", min, max))
        .validate_with(move |input: &i64| -> Result<(), String> {
            if (min..=max).contains(input) {
                Ok(())
            } else {
                Err(format!("pick a number between {} and {}", min, max))
            }
        })
        .interact_text()?;

    let verdict = EvaluationService::check_guess(game, guess);
    if verdict.correct {
        println!("{}", "🎉 Correct! 🎊".green().bold());
    } else if let Some(target) = &verdict.reveal {
        println!("{}", format!("❌ Nope! It was {}", target).yellow());
    }
    play_sound(&verdict.sound);
    Ok(())
}

fn play_emoji_match(game: &EmojiMatch) -> Result<(), dialoguer::Error> {
    println!("{}", "🎮 Mini Game!".bold());
    println!("{}", game.instructions);
    println!("Match the sequence of emojis shown below:");
    println!("{}", game.sequence.join(" "));

    let mut submission = Vec::with_capacity(game.sequence.len());
    for position in 1..=game.sequence.len() {
        let selection = Select::new()
            .with_prompt(format!("Position {}", position))
            .items(&game.options)
            .default(0)
            .interact()?;
        submission.push(game.options[selection].clone());
    }

    let verdict = EvaluationService::check_emoji(game, &submission);
    if verdict.correct {
        println!("{}", "🎉 Perfect match! 🎊".green().bold());
    } else if let Some(sequence) = &verdict.reveal {
        println!(
            "{}",
            format!("❌ Try again! Correct sequence: {}", sequence).yellow()
        );
    }
    play_sound(&verdict.sound);
    Ok(())
}

/// Pass-through only: the cue URL is printed with a fresh cache-busting id,
/// never fetched or decoded.
fn play_sound(url: &str) {
    println!("{}", format!("🔊 {}?{}", url, Uuid::new_v4()).dimmed());
}
