//! Box Dash - a tiny target-collection game
//!
//! Core modules:
//! - `sim`: Deterministic game core (movement, target set, collisions, session state)
//! - `stage`: Geometry-provider/presentation seam plus an in-memory backend
//! - `tuning`: Data-driven gameplay tuning

pub mod sim;
pub mod stage;
pub mod tuning;

pub use stage::{ElementRef, Stage};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Distance moved per directional command, in surface units
    pub const MOVE_STEP: f32 = 20.0;
    /// Number of targets placed at setup
    pub const TARGET_COUNT: usize = 10;
    /// Collision poll cadence in milliseconds
    pub const POLL_INTERVAL_MS: u64 = 100;

    /// Rendered player size (square), in surface units
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Rendered target size (square), in surface units
    pub const TARGET_SIZE: f32 = 40.0;
}
