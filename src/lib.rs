//! fishbowl - turn-based engine for a three-round party word game
//!
//! Two teams take turns getting their teammates to guess words from a shared
//! bowl: first by describing, then by acting, then with a single word.

pub mod app;
pub mod config;
pub mod game;
pub mod stats;

pub use app::{GameCoordinator, GameSnapshot, Phase, PhaseObserver};
pub use config::{ConfigError, GameConfig};
