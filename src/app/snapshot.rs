//! Read-only view of the game handed to the presentation layer

use super::phase::Phase;
use crate::game::{Round, Team, TransitionReason};

/// Everything a screen needs to draw the current state
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub round: Round,
    /// Team currently acting
    pub team: Team,
    pub transition_reason: Option<TransitionReason>,
    pub current_word: Option<String>,
    pub time_remaining: i32,
    pub turn_duration: i32,
    pub scores: [u32; 2],
    pub can_skip: bool,
    /// Words left in the current round
    pub words_remaining: usize,
    /// Words in the catalog
    pub word_count: usize,
}

impl GameSnapshot {
    pub fn score(&self, team: Team) -> u32 {
        match team {
            Team::One => self.scores[0],
            Team::Two => self.scores[1],
        }
    }
}
