//! Per-word and per-round play analytics
//!
//! Word-level data (skips, seconds on screen) arrives as [`PoolEvent`]s.
//! Round-level data (correct guesses, seconds played) is recorded by the
//! coordinator at turn boundaries.

use crate::game::{PoolEvent, Round, Team, Word, WordId, ROUND_COUNT};
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

/// Correct guesses and play time for one team in one round
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TeamRoundStat {
    pub time_seconds: f64,
    pub correct: u32,
}

impl TeamRoundStat {
    /// Guesses per minute, `None` when no time has been recorded
    pub fn words_per_minute(&self) -> Option<f64> {
        words_per_minute(self.correct, self.time_seconds)
    }
}

/// Both teams' numbers for one round
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoundStat {
    teams: [TeamRoundStat; 2],
}

impl RoundStat {
    pub fn team(&self, team: Team) -> &TeamRoundStat {
        &self.teams[team.index()]
    }

    fn team_mut(&mut self, team: Team) -> &mut TeamRoundStat {
        &mut self.teams[team.index()]
    }

    pub fn total_correct(&self) -> u32 {
        self.teams.iter().map(|t| t.correct).sum()
    }
}

/// How a single word played out over the game
#[derive(Debug, Clone, PartialEq)]
pub struct WordStatistic {
    pub word: String,
    pub skips: u32,
    /// Total time spread over the three rounds
    pub average_time: f64,
    pub total_time: f64,
}

/// Words-per-minute for both teams. `None` means no time was recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WordsPerMinute {
    pub team_one: Option<f64>,
    pub team_two: Option<f64>,
}

impl WordsPerMinute {
    pub fn get(&self, team: Team) -> Option<f64> {
        match team {
            Team::One => self.team_one,
            Team::Two => self.team_two,
        }
    }
}

fn words_per_minute(correct: u32, time_seconds: f64) -> Option<f64> {
    if time_seconds > 0.0 {
        Some(correct as f64 / (time_seconds / 60.0))
    } else {
        None
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnalyticsRecorder {
    skip_counts: HashMap<WordId, u32>,
    time_spent: HashMap<WordId, f64>,
    round_stats: BTreeMap<Round, RoundStat>,
    round_starts: HashMap<(Team, Round), Instant>,
    /// Set once the current turn's time has been added
    recorded_this_turn: bool,
}

impl AnalyticsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event reported by the word pool
    pub fn record(&mut self, event: &PoolEvent) {
        match event {
            PoolEvent::TimeSpent { id, seconds } => self.record_time_spent(*id, *seconds),
            PoolEvent::Skipped { id } => self.record_skip(*id),
        }
    }

    pub fn record_skip(&mut self, id: WordId) {
        *self.skip_counts.entry(id).or_insert(0) += 1;
    }

    pub fn record_time_spent(&mut self, id: WordId, seconds: f64) {
        *self.time_spent.entry(id).or_insert(0.0) += seconds;
    }

    /// Create empty stats for a round. Existing stats are kept.
    pub fn initialize_round_stats(&mut self, round: Round) {
        self.round_stats.entry(round).or_default();
    }

    pub fn record_correct_guess(&mut self, team: Team, round: Round) {
        self.round_stats
            .entry(round)
            .or_default()
            .team_mut(team)
            .correct += 1;
    }

    /// Note when a team starts playing a round, unless already noted.
    /// Begins a new turn as far as time recording is concerned.
    pub fn record_round_start_time(&mut self, team: Team, round: Round, now: Instant) {
        self.round_starts.entry((team, round)).or_insert(now);
        self.recorded_this_turn = false;
    }

    /// Add the time since the team's round start to its stats.
    ///
    /// Only the first call per turn counts. The start is moved up to `now`.
    pub fn record_time_for_current_round(&mut self, team: Team, round: Round, now: Instant) {
        if self.recorded_this_turn {
            return;
        }
        if let Some(start) = self.round_starts.insert((team, round), now) {
            let elapsed = now.saturating_duration_since(start).as_secs_f64();
            self.round_stats
                .entry(round)
                .or_default()
                .team_mut(team)
                .time_seconds += elapsed;
        }
        self.recorded_this_turn = true;
    }

    /// Every word that was ever on screen, slowest first
    pub fn word_statistics(&self, catalog: &[Word]) -> Vec<WordStatistic> {
        let mut stats: Vec<WordStatistic> = catalog
            .iter()
            .filter_map(|word| {
                let total_time = self.time_spent(word.id);
                let skips = self.skip_count(word.id);
                if total_time <= 0.0 && skips == 0 {
                    return None;
                }
                Some(WordStatistic {
                    word: word.text.clone(),
                    skips,
                    average_time: total_time / ROUND_COUNT as f64,
                    total_time,
                })
            })
            .collect();
        stats.sort_by(|a, b| b.average_time.total_cmp(&a.average_time));
        stats
    }

    /// Words-per-minute for every round that has started
    pub fn words_per_minute(&self) -> Vec<(Round, WordsPerMinute)> {
        self.round_stats
            .iter()
            .map(|(round, stat)| {
                (
                    *round,
                    WordsPerMinute {
                        team_one: stat.team(Team::One).words_per_minute(),
                        team_two: stat.team(Team::Two).words_per_minute(),
                    },
                )
            })
            .collect()
    }

    /// Words-per-minute over the whole game
    pub fn overall_words_per_minute(&self) -> WordsPerMinute {
        let totals = |team: Team| {
            self.round_stats
                .values()
                .fold((0u32, 0.0f64), |(correct, time), stat| {
                    let t = stat.team(team);
                    (correct + t.correct, time + t.time_seconds)
                })
        };
        let (c1, t1) = totals(Team::One);
        let (c2, t2) = totals(Team::Two);
        WordsPerMinute {
            team_one: words_per_minute(c1, t1),
            team_two: words_per_minute(c2, t2),
        }
    }

    pub fn round_stat(&self, round: Round) -> Option<&RoundStat> {
        self.round_stats.get(&round)
    }

    pub fn skip_count(&self, id: WordId) -> u32 {
        self.skip_counts.get(&id).copied().unwrap_or(0)
    }

    pub fn time_spent(&self, id: WordId) -> f64 {
        self.time_spent.get(&id).copied().unwrap_or(0.0)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
