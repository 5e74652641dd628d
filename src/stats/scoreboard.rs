//! Team scores

use crate::game::Team;

#[derive(Debug, Clone)]
pub struct ScoreBoard {
    scores: [u32; 2],
    /// Cumulative score after each completed turn, seeded with 0
    histories: [Vec<u32>; 2],
    turn_counts: [u32; 2],
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self {
            scores: [0; 2],
            histories: [vec![0], vec![0]],
            turn_counts: [0; 2],
        }
    }
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Award one point to a team
    pub fn increment_score(&mut self, team: Team) {
        self.scores[team.index()] += 1;
        self.turn_counts[team.index()] += 1;
    }

    /// Append a score to the team's per-turn history
    pub fn record_turn_score(&mut self, team: Team, score: u32) {
        self.histories[team.index()].push(score);
    }

    /// Team with the strictly higher score, `None` on a tie
    pub fn winner(&self) -> Option<Team> {
        match self.scores[0].cmp(&self.scores[1]) {
            std::cmp::Ordering::Greater => Some(Team::One),
            std::cmp::Ordering::Less => Some(Team::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn reset_scores(&mut self) {
        *self = Self::default();
    }

    pub fn score(&self, team: Team) -> u32 {
        self.scores[team.index()]
    }

    pub fn history(&self, team: Team) -> &[u32] {
        &self.histories[team.index()]
    }

    pub fn turn_count(&self, team: Team) -> u32 {
        self.turn_counts[team.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let board = ScoreBoard::new();
        assert_eq!(board.score(Team::One), 0);
        assert_eq!(board.score(Team::Two), 0);
        assert_eq!(board.history(Team::One), &[0]);
        assert_eq!(board.history(Team::Two), &[0]);
    }

    #[test]
    fn test_increment_score() {
        let mut board = ScoreBoard::new();
        board.increment_score(Team::One);
        board.increment_score(Team::One);
        board.increment_score(Team::Two);
        assert_eq!(board.score(Team::One), 2);
        assert_eq!(board.score(Team::Two), 1);
        assert_eq!(board.turn_count(Team::One), 2);
        assert_eq!(board.turn_count(Team::Two), 1);
    }

    #[test]
    fn test_record_turn_score_appends() {
        let mut board = ScoreBoard::new();
        board.record_turn_score(Team::Two, 3);
        board.record_turn_score(Team::Two, 5);
        assert_eq!(board.history(Team::Two), &[0, 3, 5]);
        assert_eq!(board.history(Team::One), &[0]);
    }

    #[test]
    fn test_winner() {
        let mut board = ScoreBoard::new();
        assert_eq!(board.winner(), None);

        board.increment_score(Team::Two);
        assert_eq!(board.winner(), Some(Team::Two));

        board.increment_score(Team::One);
        assert_eq!(board.winner(), None);

        board.increment_score(Team::One);
        assert_eq!(board.winner(), Some(Team::One));
    }

    #[test]
    fn test_reset_scores() {
        let mut board = ScoreBoard::new();
        board.increment_score(Team::One);
        board.record_turn_score(Team::One, 1);
        board.reset_scores();
        assert_eq!(board.score(Team::One), 0);
        assert_eq!(board.turn_count(Team::One), 0);
        assert_eq!(board.history(Team::One), &[0]);
    }
}
