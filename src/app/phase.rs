//! Game phases and the hook for reacting to phase changes

/// Where the game is. Setup is initial; GameOver only leaves via reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    SetupView,
    WordInput,
    GameOverview,
    Playing,
    RoundTransition,
    GameOver,
}

impl Phase {
    /// Phases in which the catalog and turn length can still change
    pub fn is_setup(&self) -> bool {
        matches!(self, Phase::Setup | Phase::SetupView | Phase::WordInput)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Setup => "Setup",
            Phase::SetupView => "Settings",
            Phase::WordInput => "Add Words",
            Phase::GameOverview => "Overview",
            Phase::Playing => "Playing",
            Phase::RoundTransition => "Next Up",
            Phase::GameOver => "Game Over",
        }
    }
}

/// Notified after every phase change. Audio cues and screen orientation
/// live behind this.
pub trait PhaseObserver {
    fn on_phase_changed(&mut self, phase: Phase);
}
