//! Player-facing text.

use guess_core::model::{GuessOutcome, GuessRange, MenuChoice, SessionStats};

const RULE_WIDTH: usize = 50;

pub const MENU_PROMPT: &str = "Enter your choice (1-4): ";
pub const INVALID_CHOICE: &str = "Invalid choice! Please enter 1, 2, 3, or 4.";
pub const INVALID_INPUT: &str = "Invalid input! Please enter a valid number.";
pub const CONTINUE_PROMPT: &str = "Would you like to play another session? (y/n): ";
pub const ACKNOWLEDGE_PROMPT: &str = "Press Enter to continue...";
pub const STATS_RESET: &str = "Statistics have been reset!";
pub const GOODBYE: &str = "Thanks for playing! Goodbye!";
pub const ROUND_START: &str = "A new number has been chosen. Good luck!";

pub const TOO_LOW: &str = "📈 Too low! Try a higher number.";
pub const TOO_HIGH: &str = "📉 Too high! Try a lower number.";
pub const NEW_BEST: &str = "🏆 New best score!";

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn boxed_title(title: &str) -> Vec<String> {
    let centered = format!("{title:^width$}", width = RULE_WIDTH);
    vec![rule(), centered.trim_end().to_string(), rule()]
}

fn attempts_noun(attempts: u32) -> &'static str {
    if attempts == 1 { "attempt" } else { "attempts" }
}

#[must_use]
pub fn welcome(range: GuessRange) -> Vec<String> {
    let mut lines = boxed_title("WELCOME TO THE NUMBER GUESSING GAME");
    lines.push(format!(
        "I'm thinking of a number between {} and {}.",
        range.min(),
        range.max()
    ));
    lines.push("Can you guess what it is?".to_string());
    lines
}

#[must_use]
pub fn menu() -> Vec<String> {
    let mut lines = vec![String::new()];
    lines.extend(boxed_title("NUMBER GUESSING GAME MENU"));
    lines.extend(
        MenuChoice::ALL
            .iter()
            .map(|choice| format!("{}. {}", choice.key(), choice.label())),
    );
    lines
}

#[must_use]
pub fn guess_prompt(range: GuessRange) -> String {
    format!("Enter your guess (between {range}): ")
}

#[must_use]
pub fn out_of_range(range: GuessRange) -> String {
    format!(
        "Please enter a number between {} and {}.",
        range.min(),
        range.max()
    )
}

/// The single feedback line for one guess.
#[must_use]
pub fn feedback(outcome: GuessOutcome) -> String {
    match outcome {
        GuessOutcome::TooLow => TOO_LOW.to_string(),
        GuessOutcome::TooHigh => TOO_HIGH.to_string(),
        GuessOutcome::Correct { attempts, new_best } => {
            let mut line = format!(
                "🎉 Congratulations! You guessed the number in {attempts} {}!",
                attempts_noun(attempts)
            );
            if new_best {
                line.push(' ');
                line.push_str(NEW_BEST);
            }
            line
        }
    }
}

#[must_use]
pub fn statistics(stats: SessionStats) -> Vec<String> {
    let mut lines = vec![String::new()];
    lines.extend(boxed_title("GAME STATISTICS"));
    lines.push(format!("Games played: {}", stats.games_played));
    lines.push(format!("Best score: {}", stats.best_score_label()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_states_the_range() {
        let lines = welcome(GuessRange::standard());
        assert_eq!(lines[0], "=".repeat(50));
        assert!(lines[1].contains("WELCOME TO THE NUMBER GUESSING GAME"));
        assert!(lines.contains(&"I'm thinking of a number between 1 and 100.".to_string()));
    }

    #[test]
    fn menu_lists_four_options() {
        let lines = menu();
        assert!(lines.contains(&"1. Play Game".to_string()));
        assert!(lines.contains(&"2. View Statistics".to_string()));
        assert!(lines.contains(&"3. Reset Statistics".to_string()));
        assert!(lines.contains(&"4. Exit".to_string()));
    }

    #[test]
    fn feedback_is_one_line_per_outcome() {
        assert_eq!(feedback(GuessOutcome::TooLow), TOO_LOW);
        assert_eq!(feedback(GuessOutcome::TooHigh), TOO_HIGH);
        assert_eq!(
            feedback(GuessOutcome::Correct {
                attempts: 3,
                new_best: false
            }),
            "🎉 Congratulations! You guessed the number in 3 attempts!"
        );
        let best = feedback(GuessOutcome::Correct {
            attempts: 1,
            new_best: true,
        });
        assert_eq!(
            best,
            "🎉 Congratulations! You guessed the number in 1 attempt! 🏆 New best score!"
        );
        assert!(!best.contains('\n'));
    }

    #[test]
    fn statistics_show_unset_best() {
        let lines = statistics(SessionStats::default());
        assert!(lines.contains(&"Games played: 0".to_string()));
        assert!(lines.contains(&"Best score: not set yet".to_string()));
    }

    #[test]
    fn prompts_include_range() {
        let range = GuessRange::standard();
        assert_eq!(guess_prompt(range), "Enter your guess (between 1-100): ");
        assert_eq!(out_of_range(range), "Please enter a number between 1 and 100.");
        assert_eq!(ACKNOWLEDGE_PROMPT, "Press Enter to continue...");
    }
}
