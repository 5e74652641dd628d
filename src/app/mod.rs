//! Game coordination: phase state machine and presentation snapshots

pub mod coordinator;
pub mod phase;
pub mod snapshot;

pub use coordinator::GameCoordinator;
pub use phase::{Phase, PhaseObserver};
pub use snapshot::GameSnapshot;
