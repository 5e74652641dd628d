//! Key handling for the terminal frontend
//!
//! Translates key presses into coordinator intents. Holds only what the
//! screen needs on top of the game itself: the text being typed and the last
//! feedback line.

use crossterm::event::KeyCode;
use fishbowl::{GameCoordinator, Phase};
use fishbowl::game::TransitionReason;

/// Seconds added or removed per arrow press on the settings screen
const DURATION_STEP: i32 = 5;
const MIN_DURATION: i32 = 5;
const MAX_DURATION: i32 = 300;

pub struct Frontend {
    pub game: GameCoordinator,
    /// Word being typed on the word input screen
    pub input: String,
    /// Result of the last word submission
    pub feedback: String,
    pub should_quit: bool,
}

impl Frontend {
    pub fn new(game: GameCoordinator) -> Self {
        Self {
            game,
            input: String::new(),
            feedback: String::new(),
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Called once a second by the main loop
    pub fn tick(&mut self) {
        self.game.tick();
    }

    pub fn on_key(&mut self, code: KeyCode) {
        if code == KeyCode::Esc {
            self.quit();
            return;
        }

        match self.game.phase() {
            Phase::Setup => {
                if code == KeyCode::Enter {
                    self.game.open_setup();
                }
            }
            Phase::SetupView => self.on_settings_key(code),
            Phase::WordInput => self.on_word_input_key(code),
            Phase::GameOverview => {
                if code == KeyCode::Enter {
                    self.game.begin_round();
                }
            }
            Phase::Playing => match code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.game.word_guessed();
                }
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    self.game.skip_current_word();
                }
                _ => {}
            },
            Phase::RoundTransition => {
                if code == KeyCode::Enter {
                    let exhausted = self.game.snapshot().transition_reason
                        == Some(TransitionReason::WordsExhausted);
                    self.game.advance_team_or_round(exhausted);
                }
            }
            Phase::GameOver => {
                if let KeyCode::Char('r') | KeyCode::Char('R') = code {
                    self.game.reset_game();
                    self.input.clear();
                    self.feedback.clear();
                }
            }
        }
    }

    fn on_settings_key(&mut self, code: KeyCode) {
        let duration = self.game.snapshot().turn_duration;
        match code {
            KeyCode::Left | KeyCode::Down => {
                self.game
                    .set_turn_duration((duration - DURATION_STEP).max(MIN_DURATION));
            }
            KeyCode::Right | KeyCode::Up => {
                self.game
                    .set_turn_duration((duration + DURATION_STEP).min(MAX_DURATION));
            }
            KeyCode::Enter => {
                self.game.open_word_input();
            }
            _ => {}
        }
    }

    fn on_word_input_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                self.input.push(c);
                self.feedback.clear();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                let result = self.game.add_word(&self.input);
                self.feedback = result.message().to_string();
                if result.is_success() {
                    self.input.clear();
                }
            }
            KeyCode::Tab => {
                if self.game.start_game().phase == Phase::WordInput {
                    self.feedback = "Add at least one word".to_string();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frontend() -> Frontend {
        Frontend::new(GameCoordinator::default())
    }

    fn type_word(ui: &mut Frontend, word: &str) {
        for c in word.chars() {
            ui.on_key(KeyCode::Char(c));
        }
        ui.on_key(KeyCode::Enter);
    }

    #[test]
    fn test_walk_to_playing() {
        let mut ui = frontend();
        ui.on_key(KeyCode::Enter);
        assert_eq!(ui.game.phase(), Phase::SetupView);

        ui.on_key(KeyCode::Left);
        assert_eq!(ui.game.snapshot().turn_duration, 55);

        ui.on_key(KeyCode::Enter);
        assert_eq!(ui.game.phase(), Phase::WordInput);

        type_word(&mut ui, "Pizza");
        assert_eq!(ui.feedback, "Added!");
        assert!(ui.input.is_empty());

        type_word(&mut ui, "pizza");
        assert_eq!(ui.feedback, "Already in the bowl");

        ui.on_key(KeyCode::Tab);
        assert_eq!(ui.game.phase(), Phase::GameOverview);

        ui.on_key(KeyCode::Enter);
        assert_eq!(ui.game.phase(), Phase::Playing);
    }

    #[test]
    fn test_tab_without_words() {
        let mut ui = frontend();
        ui.on_key(KeyCode::Enter);
        ui.on_key(KeyCode::Enter);
        ui.on_key(KeyCode::Tab);
        assert_eq!(ui.game.phase(), Phase::WordInput);
        assert_eq!(ui.feedback, "Add at least one word");
    }

    #[test]
    fn test_duration_clamped() {
        let mut ui = frontend();
        ui.on_key(KeyCode::Enter);
        for _ in 0..100 {
            ui.on_key(KeyCode::Left);
        }
        assert_eq!(ui.game.snapshot().turn_duration, MIN_DURATION);
    }

    #[test]
    fn test_esc_quits() {
        let mut ui = frontend();
        ui.on_key(KeyCode::Esc);
        assert!(ui.should_quit);
    }
}
