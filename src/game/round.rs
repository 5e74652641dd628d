//! Round and team progression

use super::{Round, Team, TransitionReason, WordId};
use std::collections::HashSet;
use tracing::info;

/// Which round is being played, which team is acting, and which words are
/// already gone this round.
#[derive(Debug, Clone)]
pub struct RoundState {
    round: Round,
    team: Team,
    used_in_round: HashSet<WordId>,
    transition_reason: Option<TransitionReason>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            round: Round::Describe,
            team: Team::One,
            used_in_round: HashSet::new(),
            transition_reason: None,
        }
    }
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the next round. Stays put once the final round is reached.
    pub fn advance_round(&mut self) {
        if let Some(next) = self.round.next() {
            info!(from = ?self.round, to = ?next, "round advanced");
            self.round = next;
        }
        self.used_in_round.clear();
        self.transition_reason = Some(TransitionReason::WordsExhausted);
    }

    /// Hand the turn to the other team
    pub fn switch_team(&mut self) {
        self.team = self.team.other();
        self.transition_reason = Some(TransitionReason::TimerExpired);
    }

    pub fn mark_word_used_in_round(&mut self, id: WordId) {
        self.used_in_round.insert(id);
    }

    pub fn can_advance_round(&self, words_used: usize, total: usize) -> bool {
        !self.is_final_round() && words_used >= total
    }

    pub fn reset_to_first_round(&mut self) {
        *self = Self::default();
    }

    pub fn is_final_round(&self) -> bool {
        self.round == Round::OneWord
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn used_ids(&self) -> &HashSet<WordId> {
        &self.used_in_round
    }

    pub fn transition_reason(&self) -> Option<TransitionReason> {
        self.transition_reason
    }

    pub fn set_transition_reason(&mut self, reason: TransitionReason) {
        self.transition_reason = Some(reason);
    }
}
