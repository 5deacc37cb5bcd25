use std::cmp::Ordering;
use std::fmt;

use crate::model::range::{GuessRange, RangeError};
use crate::model::round::{GuessOutcome, RoundError};

//
// ─── STATS ─────────────────────────────────────────────────────────────────────
//

/// Read-only snapshot of the session statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    pub games_played: u32,
    pub best_score: Option<u32>,
}

impl SessionStats {
    /// Best score formatted for display, e.g. `3 attempts` or `not set yet`.
    #[must_use]
    pub fn best_score_label(&self) -> String {
        match self.best_score {
            Some(1) => "1 attempt".to_string(),
            Some(best) => format!("{best} attempts"),
            None => "not set yet".to_string(),
        }
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "games played: {}, best score: {}",
            self.games_played,
            self.best_score_label()
        )
    }
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// Mutable state of one play session.
///
/// Created once per process. The only ways to change it are
/// [`reset_round`](Self::reset_round), [`submit_guess`](Self::submit_guess) and
/// [`reset_statistics`](Self::reset_statistics); each of them applies its
/// changes as a whole or not at all.
///
/// `submit_guess` is the round's third mutation path: counting the attempt,
/// updating the best score and counting the round happen in that one call, so
/// the statistics can never be left half-updated by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    range: GuessRange,
    target: Option<u32>,
    attempts: u32,
    round_open: bool,
    best_score: Option<u32>,
    games_played: u32,
}

impl SessionState {
    #[must_use]
    pub fn new(range: GuessRange) -> Self {
        Self {
            range,
            target: None,
            attempts: 0,
            round_open: false,
            best_score: None,
            games_played: 0,
        }
    }

    #[must_use]
    pub fn range(&self) -> GuessRange {
        self.range
    }

    #[must_use]
    pub fn min_number(&self) -> u32 {
        self.range.min()
    }

    #[must_use]
    pub fn max_number(&self) -> u32 {
        self.range.max()
    }

    /// Target of the current or most recent round; `None` before the first round.
    #[must_use]
    pub fn target_number(&self) -> Option<u32> {
        self.target
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// True between `reset_round` and the winning guess.
    #[must_use]
    pub fn is_round_in_progress(&self) -> bool {
        self.round_open
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            games_played: self.games_played,
            best_score: self.best_score,
        }
    }

    /// Starts a new round with the given hidden target and zero attempts.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::OutOfRange` if `target` is outside the session range.
    pub fn reset_round(&mut self, target: u32) -> Result<(), RangeError> {
        if !self.range.contains(target) {
            return Err(RangeError::OutOfRange {
                target,
                min: self.range.min(),
                max: self.range.max(),
            });
        }
        self.target = Some(target);
        self.attempts = 0;
        self.round_open = true;
        Ok(())
    }

    /// Counts one validated guess and classifies it.
    ///
    /// A correct guess closes the round, updates the best score when it was
    /// beaten (or unset) and counts the round as played.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::NotStarted` before the first `reset_round`, and
    /// `RoundError::AlreadyWon` once the current round has been won.
    pub fn submit_guess(&mut self, guess: u32) -> Result<GuessOutcome, RoundError> {
        let Some(target) = self.target else {
            return Err(RoundError::NotStarted);
        };
        if !self.round_open {
            return Err(RoundError::AlreadyWon);
        }

        self.attempts = self.attempts.saturating_add(1);

        let outcome = match guess.cmp(&target) {
            Ordering::Less => GuessOutcome::TooLow,
            Ordering::Greater => GuessOutcome::TooHigh,
            Ordering::Equal => {
                let new_best = self.best_score.is_none_or(|best| self.attempts < best);
                if new_best {
                    self.best_score = Some(self.attempts);
                }
                self.games_played = self.games_played.saturating_add(1);
                self.round_open = false;
                GuessOutcome::Correct {
                    attempts: self.attempts,
                    new_best,
                }
            }
        };
        Ok(outcome)
    }

    /// Forgets the best score and the number of rounds played.
    pub fn reset_statistics(&mut self) {
        self.best_score = None;
        self.games_played = 0;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(GuessRange::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut SessionState, target: u32, guesses: &[u32]) -> Vec<GuessOutcome> {
        state.reset_round(target).unwrap();
        guesses
            .iter()
            .map(|guess| state.submit_guess(*guess).unwrap())
            .collect()
    }

    /// Wins a round in exactly `attempts` guesses.
    fn win_in(state: &mut SessionState, attempts: u32) -> GuessOutcome {
        state.reset_round(50).unwrap();
        for _ in 1..attempts {
            assert_eq!(state.submit_guess(1).unwrap(), GuessOutcome::TooLow);
        }
        state.submit_guess(50).unwrap()
    }

    #[test]
    fn new_session_has_no_statistics() {
        let state = SessionState::default();
        assert_eq!(state.min_number(), 1);
        assert_eq!(state.max_number(), 100);
        assert_eq!(state.target_number(), None);
        assert_eq!(state.attempts(), 0);
        assert_eq!(state.best_score(), None);
        assert_eq!(state.games_played(), 0);
        assert!(!state.is_round_in_progress());
    }

    #[test]
    fn reset_round_rejects_target_outside_range() {
        let mut state = SessionState::default();
        assert_eq!(
            state.reset_round(0),
            Err(RangeError::OutOfRange {
                target: 0,
                min: 1,
                max: 100
            })
        );
        assert_eq!(state.target_number(), None);
        assert!(!state.is_round_in_progress());
    }

    #[test]
    fn reset_round_zeroes_attempts() {
        let mut state = SessionState::default();
        state.reset_round(40).unwrap();
        state.submit_guess(10).unwrap();
        state.submit_guess(20).unwrap();
        assert_eq!(state.attempts(), 2);

        state.reset_round(60).unwrap();
        assert_eq!(state.attempts(), 0);
        assert_eq!(state.target_number(), Some(60));
    }

    #[test]
    fn guesses_are_classified_against_target() {
        let mut state = SessionState::default();
        let outcomes = play(&mut state, 50, &[10, 90, 50]);
        assert_eq!(
            outcomes,
            vec![
                GuessOutcome::TooLow,
                GuessOutcome::TooHigh,
                GuessOutcome::Correct {
                    attempts: 3,
                    new_best: true
                },
            ]
        );
        assert_eq!(state.attempts(), 3);
        assert_eq!(state.games_played(), 1);
        assert_eq!(state.best_score(), Some(3));
    }

    #[test]
    fn submit_before_round_is_rejected() {
        let mut state = SessionState::default();
        assert_eq!(state.submit_guess(5), Err(RoundError::NotStarted));
        assert_eq!(state.attempts(), 0);
    }

    #[test]
    fn submit_after_win_is_rejected_without_mutation() {
        let mut state = SessionState::default();
        play(&mut state, 7, &[7]);
        let before = state.clone();
        assert_eq!(state.submit_guess(7), Err(RoundError::AlreadyWon));
        assert_eq!(state, before);
    }

    #[test]
    fn best_score_improves_on_fewer_attempts() {
        let mut state = SessionState::default();
        assert_eq!(
            win_in(&mut state, 5),
            GuessOutcome::Correct {
                attempts: 5,
                new_best: true
            }
        );
        assert_eq!(state.best_score(), Some(5));
        assert_eq!(
            win_in(&mut state, 3),
            GuessOutcome::Correct {
                attempts: 3,
                new_best: true
            }
        );
        assert_eq!(state.best_score(), Some(3));
        assert_eq!(state.games_played(), 2);
    }

    #[test]
    fn best_score_is_kept_on_worse_or_equal_rounds() {
        let mut state = SessionState::default();
        win_in(&mut state, 3);
        assert_eq!(
            win_in(&mut state, 7),
            GuessOutcome::Correct {
                attempts: 7,
                new_best: false
            }
        );
        assert_eq!(
            win_in(&mut state, 3),
            GuessOutcome::Correct {
                attempts: 3,
                new_best: false
            }
        );
        assert_eq!(state.best_score(), Some(3));
        assert_eq!(state.games_played(), 3);
    }

    #[test]
    fn best_score_never_increases_between_resets() {
        let mut state = SessionState::default();
        let mut previous: Option<u32> = None;
        for attempts in [6, 9, 4, 4, 12, 2, 8] {
            win_in(&mut state, attempts);
            let best = state.best_score().unwrap();
            if let Some(previous) = previous {
                assert!(best <= previous);
            }
            previous = Some(best);
        }
        assert_eq!(state.best_score(), Some(2));
    }

    #[test]
    fn reset_statistics_clears_best_and_games() {
        let mut state = SessionState::default();
        win_in(&mut state, 4);
        win_in(&mut state, 2);
        state.reset_statistics();
        assert_eq!(state.best_score(), None);
        assert_eq!(state.games_played(), 0);

        state.reset_statistics();
        assert_eq!(state.stats(), SessionStats::default());
    }

    #[test]
    fn stats_labels_best_score() {
        let mut stats = SessionStats::default();
        assert_eq!(stats.best_score_label(), "not set yet");
        stats.best_score = Some(1);
        assert_eq!(stats.best_score_label(), "1 attempt");
        stats.best_score = Some(6);
        stats.games_played = 2;
        assert_eq!(stats.best_score_label(), "6 attempts");
        assert_eq!(stats.to_string(), "games played: 2, best score: 6 attempts");
    }
}
