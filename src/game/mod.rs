//! Game logic: rounds, teams, the word pool, turn timing

pub mod clock;
pub mod pool;
pub mod round;
pub mod timer;
pub mod validation;

pub use clock::{Clock, SystemClock};
pub use pool::{PoolEvent, WordPool};
pub use round::RoundState;
pub use timer::{TimerSignal, TurnTimer};
pub use validation::AddWordResult;

/// Number of rounds in a game. Fixed: Describe, Act Out, One Word.
pub const ROUND_COUNT: usize = 3;

/// Stable identifier of a word in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(pub u32);

/// A word in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub id: WordId,
    pub text: String,
    /// Set once the word has been guessed in any round
    pub used: bool,
}

/// The three gameplay modes, played in order over the same catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Round {
    Describe,
    ActOut,
    OneWord,
}

impl Round {
    /// All rounds in play order
    pub fn all() -> &'static [Round] {
        &[Round::Describe, Round::ActOut, Round::OneWord]
    }

    /// The round that follows this one, if any.
    pub fn next(self) -> Option<Round> {
        match self {
            Round::Describe => Some(Round::ActOut),
            Round::ActOut => Some(Round::OneWord),
            Round::OneWord => None,
        }
    }

    /// Zero-based position in play order
    pub fn index(self) -> usize {
        match self {
            Round::Describe => 0,
            Round::ActOut => 1,
            Round::OneWord => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Round::Describe => "Describe",
            Round::ActOut => "Act Out",
            Round::OneWord => "One Word",
        }
    }

    pub fn instructions(&self) -> &'static str {
        match self {
            Round::Describe => "Use any words except the word itself",
            Round::ActOut => "No talking, act it out",
            Round::OneWord => "Say exactly one word",
        }
    }
}

/// One of the two competing teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub fn other(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }

    /// Team number as shown to players (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            Team::One => 1,
            Team::Two => 2,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Team::One => 0,
            Team::Two => 1,
        }
    }
}

/// Why the last turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionReason {
    /// The countdown ran out; the other team plays next
    TimerExpired,
    /// The round's words ran out; the next round starts
    WordsExhausted,
}
