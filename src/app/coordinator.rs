//! Top-level game coordinator
//!
//! Callers issue intents (add a word, start, guess, skip, advance, reset) and
//! drive the countdown with [`GameCoordinator::tick`]. Every intent runs to
//! completion and returns the resulting [`GameSnapshot`].
//!
//! Phase flow:
//! - Setup → SetupView → WordInput → GameOverview
//! - GameOverview → Playing ⇄ RoundTransition → GameOver
//! - any phase → Setup via reset

use super::phase::{Phase, PhaseObserver};
use super::snapshot::GameSnapshot;
use crate::config::GameConfig;
use crate::game::{
    AddWordResult, Clock, Round, RoundState, SystemClock, Team, TimerSignal, TransitionReason,
    TurnTimer, WordPool,
};
use crate::stats::{AnalyticsRecorder, ScoreBoard, WordStatistic, WordsPerMinute};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

pub struct GameCoordinator {
    phase: Phase,
    pool: WordPool,
    rounds: RoundState,
    timer: TurnTimer,
    scores: ScoreBoard,
    analytics: AnalyticsRecorder,
    clock: Box<dyn Clock>,
    rng: StdRng,
    observer: Option<Box<dyn PhaseObserver>>,
}

impl Default for GameCoordinator {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GameCoordinator {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase: Phase::Setup,
            pool: WordPool::with_max_word_length(config.max_word_length),
            rounds: RoundState::new(),
            timer: TurnTimer::new(config.turn_duration_secs),
            scores: ScoreBoard::new(),
            analytics: AnalyticsRecorder::new(),
            clock: Box::new(SystemClock),
            rng: StdRng::from_os_rng(),
            observer: None,
        }
    }

    /// Use a different time source (for testing)
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Use a specific RNG for word draws (for testing/seeding)
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Register the phase change hook
    pub fn with_observer(mut self, observer: impl PhaseObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    // ----- Setup intents -----

    /// Setup → SetupView
    pub fn open_setup(&mut self) -> GameSnapshot {
        if self.phase == Phase::Setup {
            self.set_phase(Phase::SetupView);
        }
        self.snapshot()
    }

    /// SetupView → WordInput
    pub fn open_word_input(&mut self) -> GameSnapshot {
        if self.phase == Phase::SetupView {
            self.set_phase(Phase::WordInput);
        }
        self.snapshot()
    }

    /// Change the turn length while the game is being set up
    pub fn set_turn_duration(&mut self, secs: i32) -> GameSnapshot {
        if self.phase.is_setup() {
            self.timer.update_duration(secs);
        }
        self.snapshot()
    }

    /// Add a word to the catalog. Closed once the game has started.
    pub fn add_word(&mut self, text: &str) -> AddWordResult {
        if !self.phase.is_setup() {
            return AddWordResult::GameInProgress;
        }
        self.pool.add_word(text)
    }

    /// Clear scores, rounds, timer and analytics and show the overview.
    pub fn start_game(&mut self) -> GameSnapshot {
        if !self.phase.is_setup() || self.pool.is_empty() {
            return self.snapshot();
        }
        self.scores.reset_scores();
        self.rounds.reset_to_first_round();
        self.timer.reset();
        self.analytics.reset();
        info!(words = self.pool.len(), "game started");
        self.set_phase(Phase::GameOverview);
        self.snapshot()
    }

    // ----- Play intents -----

    /// GameOverview → Playing: first turn of the first round
    pub fn begin_round(&mut self) -> GameSnapshot {
        if self.phase != Phase::GameOverview {
            return self.snapshot();
        }
        self.timer.reset();
        self.setup_round();
        self.begin_turn();
        self.snapshot()
    }

    /// The acting team got the current word.
    pub fn word_guessed(&mut self) -> GameSnapshot {
        if self.phase != Phase::Playing {
            return self.snapshot();
        }
        let Some(id) = self.pool.current_word().map(|w| w.id) else {
            return self.snapshot();
        };
        let (team, round) = (self.rounds.team(), self.rounds.round());
        let now = self.clock.now();

        self.analytics.record_correct_guess(team, round);
        self.scores.increment_score(team);
        self.rounds.mark_word_used_in_round(id);
        for event in self.pool.mark_current_word_guessed(now) {
            self.analytics.record(&event);
        }

        if self.pool.has_unused_words() {
            self.pool.next_word(now, &mut self.rng);
        } else {
            self.finish_exhausted_round(false);
        }
        self.snapshot()
    }

    /// Defer the current word. Needs at least two words left.
    pub fn skip_current_word(&mut self) -> GameSnapshot {
        if self.phase == Phase::Playing {
            let now = self.clock.now();
            for event in self.pool.skip_current_word(now, &mut self.rng) {
                self.analytics.record(&event);
            }
        }
        self.snapshot()
    }

    /// One second of the countdown. The host calls this on a fixed schedule.
    pub fn tick(&mut self) -> GameSnapshot {
        if self.phase == Phase::Playing && self.timer.tick() == Some(TimerSignal::Expired) {
            self.on_timer_expired();
        }
        self.snapshot()
    }

    /// Leave the transition screen.
    ///
    /// Moves to the next round when the words ran out (or the round is
    /// otherwise complete), else lets the team that was switched in play.
    pub fn advance_team_or_round(&mut self, words_exhausted: bool) -> GameSnapshot {
        if self.phase != Phase::RoundTransition {
            return self.snapshot();
        }
        let round_complete = words_exhausted
            || self
                .rounds
                .can_advance_round(self.rounds.used_ids().len(), self.pool.len());

        if round_complete {
            if self.rounds.is_final_round() {
                self.set_phase(Phase::GameOver);
                return self.snapshot();
            }
            let now = self.clock.now();
            self.analytics
                .record_time_for_current_round(self.rounds.team(), self.rounds.round(), now);
            self.rounds.advance_round();
        }
        self.setup_round();
        self.begin_turn();
        self.snapshot()
    }

    /// Back to an empty Setup. The catalog is cleared too.
    pub fn reset_game(&mut self) -> GameSnapshot {
        self.pool.clear();
        self.rounds.reset_to_first_round();
        self.scores.reset_scores();
        self.timer.reset();
        self.analytics.reset();
        info!("game reset");
        self.set_phase(Phase::Setup);
        self.snapshot()
    }

    // ----- Queries -----

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            round: self.rounds.round(),
            team: self.rounds.team(),
            transition_reason: self.rounds.transition_reason(),
            current_word: self.pool.current_word().map(|w| w.text.clone()),
            time_remaining: self.timer.remaining(),
            turn_duration: self.timer.duration(),
            scores: [self.scores.score(Team::One), self.scores.score(Team::Two)],
            can_skip: self.pool.can_skip(),
            words_remaining: self.pool.unused_count(),
            word_count: self.pool.len(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Team> {
        self.scores.winner()
    }

    pub fn score_history(&self, team: Team) -> &[u32] {
        self.scores.history(team)
    }

    pub fn word_statistics(&self) -> Vec<WordStatistic> {
        self.analytics.word_statistics(self.pool.catalog())
    }

    pub fn words_per_minute(&self) -> Vec<(Round, WordsPerMinute)> {
        self.analytics.words_per_minute()
    }

    pub fn overall_words_per_minute(&self) -> WordsPerMinute {
        self.analytics.overall_words_per_minute()
    }

    pub fn analytics(&self) -> &AnalyticsRecorder {
        &self.analytics
    }

    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    // ----- Internals -----

    /// Point the pool at this turn's words and stamp the team's start.
    fn setup_round(&mut self) {
        let (team, round) = (self.rounds.team(), self.rounds.round());
        let new_round = self.rounds.used_ids().is_empty();
        self.pool.setup_for_round(self.rounds.used_ids());
        if new_round {
            self.analytics.initialize_round_stats(round);
        }
        self.analytics
            .record_round_start_time(team, round, self.clock.now());
        debug!(?round, team = team.number(), words = self.pool.unused_count(), "round set up");
    }

    /// Draw the first word and start the countdown
    fn begin_turn(&mut self) {
        let now = self.clock.now();
        if self.pool.next_word(now, &mut self.rng).is_none() {
            self.finish_exhausted_round(false);
            return;
        }
        self.set_phase(Phase::Playing);
        if self.timer.start() == Some(TimerSignal::Expired) {
            self.on_timer_expired();
        }
    }

    fn on_timer_expired(&mut self) {
        let (team, round) = (self.rounds.team(), self.rounds.round());
        self.analytics
            .record_time_for_current_round(team, round, self.clock.now());
        self.scores.record_turn_score(team, self.scores.score(team));
        debug!(team = team.number(), "turn over");

        if self.pool.has_unused_words() {
            self.rounds.switch_team();
            self.timer.reset();
            self.set_phase(Phase::RoundTransition);
        } else {
            self.finish_exhausted_round(true);
        }
    }

    /// The round's words are gone: game over after the final round,
    /// otherwise wait on the transition screen.
    fn finish_exhausted_round(&mut self, turn_score_recorded: bool) {
        let (team, round) = (self.rounds.team(), self.rounds.round());
        self.timer.stop();
        self.analytics
            .record_time_for_current_round(team, round, self.clock.now());

        if self.rounds.is_final_round() {
            if !turn_score_recorded {
                self.scores.record_turn_score(team, self.scores.score(team));
            }
            info!(
                team_one = self.scores.score(Team::One),
                team_two = self.scores.score(Team::Two),
                "game over"
            );
            self.set_phase(Phase::GameOver);
        } else {
            self.rounds
                .set_transition_reason(TransitionReason::WordsExhausted);
            self.set_phase(Phase::RoundTransition);
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase == phase {
            return;
        }
        info!(from = ?self.phase, to = ?phase, "phase changed");
        self.phase = phase;
        if let Some(observer) = self.observer.as_mut() {
            observer.on_phase_changed(phase);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::clock::ManualClock;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    fn coordinator(words: &[&str], duration: i32) -> (GameCoordinator, ManualClock) {
        let clock = ManualClock::new();
        let mut game = GameCoordinator::default()
            .with_clock(clock.clone())
            .with_rng(StdRng::seed_from_u64(42));
        for w in words {
            assert_eq!(game.add_word(w), AddWordResult::Success);
        }
        game.set_turn_duration(duration);
        (game, clock)
    }

    fn started(words: &[&str], duration: i32) -> (GameCoordinator, ManualClock) {
        let (mut game, clock) = coordinator(words, duration);
        game.start_game();
        game.begin_round();
        (game, clock)
    }

    /// One second passes and the host ticks
    fn tick(game: &mut GameCoordinator, clock: &ManualClock) -> GameSnapshot {
        clock.advance_secs(1);
        game.tick()
    }

    fn current_id(game: &GameCoordinator) -> crate::game::WordId {
        game.pool().current_word().unwrap().id
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Phase>>>);

    impl PhaseObserver for Recorder {
        fn on_phase_changed(&mut self, phase: Phase) {
            self.0.borrow_mut().push(phase);
        }
    }

    #[test]
    fn test_setup_flow() {
        let (mut game, _) = coordinator(&[], 60);
        assert_eq!(game.phase(), Phase::Setup);
        assert_eq!(game.open_setup().phase, Phase::SetupView);
        assert_eq!(game.set_turn_duration(45).turn_duration, 45);
        assert_eq!(game.open_word_input().phase, Phase::WordInput);
        assert_eq!(game.add_word("Pizza"), AddWordResult::Success);
        let snap = game.start_game();
        assert_eq!(snap.phase, Phase::GameOverview);
        assert_eq!(snap.time_remaining, 45);
        assert_eq!(snap.word_count, 1);
    }

    #[test]
    fn test_blank_word_rejected() {
        let (mut game, _) = coordinator(&["A"], 60);
        assert_eq!(game.add_word("   "), AddWordResult::Empty);
        assert_eq!(game.snapshot().word_count, 1);
    }

    #[test]
    fn test_start_game_needs_words() {
        let (mut game, _) = coordinator(&[], 60);
        assert_eq!(game.start_game().phase, Phase::Setup);
    }

    #[test]
    fn test_catalog_closed_after_start() {
        let (mut game, _) = started(&["A"], 60);
        assert_eq!(game.add_word("B"), AddWordResult::GameInProgress);
        assert_eq!(game.snapshot().word_count, 1);
    }

    #[test]
    fn test_intents_guarded_by_phase() {
        let (mut game, _) = coordinator(&["A", "B"], 60);
        assert_eq!(game.word_guessed().phase, Phase::Setup);
        assert_eq!(game.skip_current_word().phase, Phase::Setup);
        assert_eq!(game.begin_round().phase, Phase::Setup);
        assert_eq!(game.advance_team_or_round(true).phase, Phase::Setup);
        assert_eq!(game.snapshot().scores, [0, 0]);
    }

    #[test]
    fn test_begin_round() {
        let (game, _) = started(&["A", "B", "C"], 60);
        let snap = game.snapshot();
        assert_eq!(snap.phase, Phase::Playing);
        assert_eq!(snap.round, Round::Describe);
        assert_eq!(snap.team, Team::One);
        assert_eq!(snap.words_remaining, 3);
        assert!(snap.current_word.is_some());
        assert!(snap.can_skip);
        assert!(game.pool().unused_ids().contains(&current_id(&game)));
    }

    #[test]
    fn test_words_exhausted_then_next_round_same_team() {
        let (mut game, clock) = started(&["A", "B", "C"], 60);
        for _ in 0..3 {
            clock.advance_secs(2);
            game.word_guessed();
        }

        let snap = game.snapshot();
        assert_eq!(snap.phase, Phase::RoundTransition);
        assert_eq!(snap.transition_reason, Some(TransitionReason::WordsExhausted));
        assert_eq!(snap.score(Team::One), 3);
        assert!(!game.timer.is_running());

        let snap = game.advance_team_or_round(true);
        assert_eq!(snap.phase, Phase::Playing);
        assert_eq!(snap.round, Round::ActOut);
        assert_eq!(snap.team, Team::One);
        assert_eq!(snap.words_remaining, 3);
        // Timer carries over from where the round ended
        assert_eq!(snap.time_remaining, 60);
        assert!(game.timer.is_running());
    }

    #[test]
    fn test_timer_expiry_switches_team() {
        let (mut game, clock) = started(&["A", "B"], 5);
        for _ in 0..4 {
            assert_eq!(tick(&mut game, &clock).phase, Phase::Playing);
        }
        let snap = tick(&mut game, &clock);

        assert_eq!(snap.phase, Phase::RoundTransition);
        assert_eq!(snap.transition_reason, Some(TransitionReason::TimerExpired));
        assert_eq!(snap.team, Team::Two);
        assert_eq!(snap.time_remaining, 5);
        assert_eq!(game.score_history(Team::One), &[0, 0]);

        let stat = game.analytics().round_stat(Round::Describe).unwrap();
        assert_eq!(stat.team(Team::One).time_seconds, 5.0);
    }

    #[test]
    fn test_team_switch_keeps_round_progress() {
        let (mut game, clock) = started(&["A", "B", "C"], 3);
        let guessed = current_id(&game);
        game.word_guessed();
        for _ in 0..3 {
            tick(&mut game, &clock);
        }
        assert_eq!(game.phase(), Phase::RoundTransition);

        let snap = game.advance_team_or_round(false);
        assert_eq!(snap.phase, Phase::Playing);
        assert_eq!(snap.round, Round::Describe);
        assert_eq!(snap.team, Team::Two);
        assert_eq!(snap.words_remaining, 2);
        assert!(!game.pool().unused_ids().contains(&guessed));
    }

    #[test]
    fn test_skip_single_word_is_noop() {
        let (mut game, _) = started(&["Only"], 60);
        let before = current_id(&game);
        let snap = game.skip_current_word();
        assert!(!snap.can_skip);
        assert_eq!(snap.current_word.as_deref(), Some("Only"));
        assert_eq!(current_id(&game), before);
        assert_eq!(game.analytics().skip_count(before), 0);
    }

    #[test]
    fn test_skip_counts_and_keeps_pool_size() {
        let (mut game, clock) = started(&["A", "B", "C"], 60);
        let skipped = current_id(&game);
        clock.advance_secs(3);
        let snap = game.skip_current_word();

        assert_eq!(snap.words_remaining, 3);
        assert_eq!(game.analytics().skip_count(skipped), 1);
        assert_eq!(game.analytics().time_spent(skipped), 3.0);
        assert_ne!(current_id(&game), skipped);
        assert!(game.pool().unused_ids().contains(&current_id(&game)));
    }

    #[test]
    fn test_final_round_exhaustion_ends_game() {
        let (mut game, _) = started(&["A", "B"], 60);
        for round in Round::all() {
            assert_eq!(game.snapshot().round, *round);
            game.word_guessed();
            game.word_guessed();
            if *round != Round::OneWord {
                assert_eq!(game.phase(), Phase::RoundTransition);
                game.advance_team_or_round(true);
            }
        }

        let snap = game.snapshot();
        assert_eq!(snap.phase, Phase::GameOver);
        assert!(snap.time_remaining > 0);
        assert_eq!(snap.score(Team::One), 6);
        assert_eq!(game.winner(), Some(Team::One));
        assert_eq!(game.score_history(Team::One), &[0, 6]);

        // Terminal until reset
        assert_eq!(game.advance_team_or_round(true).phase, Phase::GameOver);
        assert_eq!(game.begin_round().phase, Phase::GameOver);
    }

    #[test]
    fn test_round_correct_counts_match_retired_words() {
        let words = ["A", "B", "C", "D", "E"];
        let (mut game, clock) = started(&words, 2);

        // Team one gets one, then time runs out
        game.word_guessed();
        tick(&mut game, &clock);
        tick(&mut game, &clock);
        assert_eq!(game.snapshot().team, Team::Two);
        game.advance_team_or_round(false);

        // Team two gets two, then time runs out
        game.word_guessed();
        game.word_guessed();
        tick(&mut game, &clock);
        tick(&mut game, &clock);
        game.advance_team_or_round(false);

        // Team one clears the rest
        assert_eq!(game.snapshot().team, Team::One);
        game.word_guessed();
        game.word_guessed();
        assert_eq!(game.phase(), Phase::RoundTransition);

        let stat = game.analytics().round_stat(Round::Describe).unwrap();
        assert_eq!(stat.team(Team::One).correct, 3);
        assert_eq!(stat.team(Team::Two).correct, 2);
        assert_eq!(stat.total_correct() as usize, words.len());
        assert_eq!(game.snapshot().scores, [3, 2]);
    }

    #[test]
    fn test_round_time_not_double_counted() {
        let (mut game, clock) = started(&["A", "B"], 60);
        clock.advance_secs(10);
        game.word_guessed();
        game.word_guessed();
        clock.advance_secs(30);
        // Advancing records round time again; the guard keeps the first value
        game.advance_team_or_round(true);

        let stat = game.analytics().round_stat(Round::Describe).unwrap();
        assert_eq!(stat.team(Team::One).time_seconds, 10.0);
    }

    #[test]
    fn test_zero_duration_expires_immediately() {
        let (mut game, _) = coordinator(&["A", "B"], 0);
        game.start_game();
        let snap = game.begin_round();
        assert_eq!(snap.phase, Phase::RoundTransition);
        assert_eq!(snap.transition_reason, Some(TransitionReason::TimerExpired));
        assert_eq!(snap.team, Team::Two);
    }

    #[test]
    fn test_ticks_ignored_outside_play() {
        let (mut game, clock) = started(&["A"], 5);
        game.word_guessed();
        assert_eq!(game.phase(), Phase::RoundTransition);
        let before = game.snapshot().time_remaining;
        for _ in 0..10 {
            tick(&mut game, &clock);
        }
        assert_eq!(game.snapshot().time_remaining, before);
        assert_eq!(game.phase(), Phase::RoundTransition);
    }

    #[test]
    fn test_word_statistics_through_play() {
        let (mut game, clock) = started(&["A", "B"], 60);
        clock.advance_secs(6);
        game.word_guessed();

        let stats = game.word_statistics();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].total_time, 6.0);
        assert_eq!(stats[0].average_time, 2.0);
    }

    #[test]
    fn test_words_per_minute_undefined_without_time() {
        let (mut game, clock) = started(&["A", "B"], 60);
        clock.advance_secs(30);
        game.word_guessed();
        game.word_guessed();

        let wpm = game.words_per_minute();
        assert_eq!(wpm[0].0, Round::Describe);
        assert_eq!(wpm[0].1.get(Team::One), Some(4.0));
        assert_eq!(wpm[0].1.get(Team::Two), None);
        assert_eq!(game.overall_words_per_minute().get(Team::One), Some(4.0));
    }

    #[test]
    fn test_reset_game() {
        let (mut game, _) = started(&["A", "B"], 60);
        game.word_guessed();
        let snap = game.reset_game();
        assert_eq!(snap.phase, Phase::Setup);
        assert_eq!(snap.word_count, 0);
        assert_eq!(snap.scores, [0, 0]);
        assert_eq!(snap.round, Round::Describe);
        assert!(snap.current_word.is_none());
        assert!(game.word_statistics().is_empty());
        assert_eq!(game.add_word("A"), AddWordResult::Success);
    }

    #[test]
    fn test_observer_sees_each_change_once() {
        let recorder = Recorder::default();
        let phases = recorder.0.clone();
        let (game, _) = coordinator(&["A"], 60);
        let mut game = game.with_observer(recorder);

        game.open_setup();
        game.open_word_input();
        game.open_word_input();
        game.start_game();
        game.begin_round();
        game.word_guessed();

        assert_eq!(
            *phases.borrow(),
            vec![
                Phase::SetupView,
                Phase::WordInput,
                Phase::GameOverview,
                Phase::Playing,
                Phase::RoundTransition,
            ]
        );
    }

    #[test]
    fn test_current_word_always_unused() {
        let (mut game, clock) = started(&["A", "B", "C", "D"], 4);
        let mut seen = HashSet::new();
        for step in 0..40 {
            match game.phase() {
                Phase::Playing => {
                    assert!(game.pool().unused_ids().contains(&current_id(&game)));
                    seen.insert(current_id(&game));
                    match step % 3 {
                        0 => {
                            game.skip_current_word();
                        }
                        1 => {
                            game.word_guessed();
                        }
                        _ => {
                            tick(&mut game, &clock);
                        }
                    }
                }
                Phase::RoundTransition => {
                    let exhausted =
                        game.snapshot().transition_reason == Some(TransitionReason::WordsExhausted);
                    game.advance_team_or_round(exhausted);
                }
                _ => break,
            }
        }
        assert!(!seen.is_empty());
    }
}
