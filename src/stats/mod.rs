//! Scores and play analytics
//!
//! This module provides:
//! - Cumulative and per-turn scores for both teams
//! - Per-word skip counts and time on screen
//! - Per-round correct guesses and play time, with words-per-minute reports

pub mod analytics;
pub mod scoreboard;

pub use analytics::{AnalyticsRecorder, RoundStat, TeamRoundStat, WordStatistic, WordsPerMinute};
pub use scoreboard::ScoreBoard;
