//! Phase change cues for the terminal frontend

use fishbowl::{Phase, PhaseObserver};
use std::io::{stdout, Write};
use tracing::debug;

/// Rings the terminal bell when a turn starts or ends
pub struct BellCues;

impl PhaseObserver for BellCues {
    fn on_phase_changed(&mut self, phase: Phase) {
        debug!(?phase, "phase cue");
        if matches!(phase, Phase::Playing | Phase::RoundTransition | Phase::GameOver) {
            let mut out = stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }
}
