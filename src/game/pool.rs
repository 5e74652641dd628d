//! Word catalog and the live pool of words left in the current round
//!
//! The pool never talks to analytics directly. Skips and guesses return
//! [`PoolEvent`]s that the coordinator forwards.

use super::clock::elapsed_secs;
use super::validation::{validate_new_word, AddWordResult, MAX_WORD_LENGTH};
use super::{Word, WordId};
use rand::Rng;
use std::collections::HashSet;
use std::time::Instant;
use tracing::debug;

/// Something the pool observed that analytics cares about
#[derive(Debug, Clone, PartialEq)]
pub enum PoolEvent {
    /// A word was on screen for this many seconds (at least 1)
    TimeSpent { id: WordId, seconds: f64 },
    /// A word was skipped
    Skipped { id: WordId },
}

/// Owns every word in the game and the subset still unguessed this round.
#[derive(Debug, Clone)]
pub struct WordPool {
    catalog: Vec<Word>,
    /// Unguessed words for this round, in draw order. Skipped words go to the back.
    unused: Vec<WordId>,
    current: Option<WordId>,
    word_started: Option<Instant>,
    next_id: u32,
    max_word_length: usize,
}

impl Default for WordPool {
    fn default() -> Self {
        Self {
            catalog: Vec::new(),
            unused: Vec::new(),
            current: None,
            word_started: None,
            next_id: 0,
            max_word_length: MAX_WORD_LENGTH,
        }
    }
}

impl WordPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool with a custom word length limit
    pub fn with_max_word_length(max_word_length: usize) -> Self {
        Self {
            max_word_length,
            ..Self::default()
        }
    }

    /// Validate and add a word to the catalog. Only `Success` changes anything.
    pub fn add_word(&mut self, text: &str) -> AddWordResult {
        let text = text.trim();
        let result = validate_new_word(text, self.max_word_length, &self.catalog);
        if result.is_success() {
            let id = WordId(self.next_id);
            self.next_id += 1;
            self.catalog.push(Word {
                id,
                text: text.to_string(),
                used: false,
            });
            debug!(word = text, id = id.0, "word added");
        }
        result
    }

    /// Rebuild the unused subset for a turn.
    ///
    /// An empty `used_ids` means a fresh round and the whole catalog is back
    /// in play. Otherwise the same round continues with another team.
    pub fn setup_for_round(&mut self, used_ids: &HashSet<WordId>) {
        self.unused = self
            .catalog
            .iter()
            .map(|w| w.id)
            .filter(|id| !used_ids.contains(id))
            .collect();
        self.current = None;
        self.word_started = None;
    }

    /// Draw a random word from the unused subset and make it current.
    pub fn next_word<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> Option<&Word> {
        if self.unused.is_empty() {
            self.current = None;
            self.word_started = None;
            return None;
        }
        let id = self.unused[rng.random_range(0..self.unused.len())];
        self.select(id, now)
    }

    /// Defer the current word to later in the round and draw another.
    ///
    /// Does nothing without a current word or with one word left.
    pub fn skip_current_word<R: Rng + ?Sized>(
        &mut self,
        now: Instant,
        rng: &mut R,
    ) -> Vec<PoolEvent> {
        let Some(id) = self.current else {
            return Vec::new();
        };
        if !self.can_skip() {
            return Vec::new();
        }

        let mut events = vec![self.time_spent(id, now)];

        if let Some(pos) = self.unused.iter().position(|u| *u == id) {
            self.unused.remove(pos);
        }
        self.unused.push(id);
        events.push(PoolEvent::Skipped { id });
        debug!(id = id.0, "word skipped");

        // The skipped word sits at the back; draw from everything before it
        let next = self.unused[rng.random_range(0..self.unused.len() - 1)];
        self.select(next, now);
        events
    }

    /// Retire the current word for the rest of the round.
    pub fn mark_current_word_guessed(&mut self, now: Instant) -> Vec<PoolEvent> {
        let Some(id) = self.current.take() else {
            return Vec::new();
        };

        let event = self.time_spent(id, now);
        if let Some(word) = self.catalog.iter_mut().find(|w| w.id == id) {
            word.used = true;
        }
        self.unused.retain(|u| *u != id);
        self.word_started = None;
        debug!(id = id.0, remaining = self.unused.len(), "word guessed");
        vec![event]
    }

    /// Drop every word. Used when the game is reset.
    pub fn clear(&mut self) {
        self.catalog.clear();
        self.unused.clear();
        self.current = None;
        self.word_started = None;
    }

    /// Check if any words are left this round
    pub fn has_unused_words(&self) -> bool {
        !self.unused.is_empty()
    }

    /// Skipping needs somewhere else to go
    pub fn can_skip(&self) -> bool {
        self.unused.len() > 1
    }

    pub fn unused_count(&self) -> usize {
        self.unused.len()
    }

    pub fn unused_ids(&self) -> &[WordId] {
        &self.unused
    }

    pub fn current_word(&self) -> Option<&Word> {
        self.current.and_then(|id| self.word(id))
    }

    pub fn word(&self, id: WordId) -> Option<&Word> {
        self.catalog.iter().find(|w| w.id == id)
    }

    pub fn catalog(&self) -> &[Word] {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    fn select(&mut self, id: WordId, now: Instant) -> Option<&Word> {
        self.current = Some(id);
        self.word_started = Some(now);
        debug!(id = id.0, "word selected");
        self.word(id)
    }

    fn time_spent(&self, id: WordId, now: Instant) -> PoolEvent {
        let seconds = self
            .word_started
            .map(|start| elapsed_secs(start, now))
            .unwrap_or(1.0);
        PoolEvent::TimeSpent { id, seconds }
    }
}
