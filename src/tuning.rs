//! Data-driven gameplay tuning
//!
//! Defaults mirror the built-in constants; a JSON file can override any
//! subset of them.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Gameplay knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Distance per directional command, in surface units.
    pub move_step: f32,
    /// Targets placed at setup.
    pub target_count: usize,
    /// Collision poll cadence in milliseconds.
    pub poll_interval_ms: u64,
    /// Rendered player size (square), in surface units.
    pub player_size: f32,
    /// Rendered target size (square), in surface units.
    pub target_size: f32,
    /// Fixed placement seed; omit for a time-derived one.
    pub seed: Option<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_step: consts::MOVE_STEP,
            target_count: consts::TARGET_COUNT,
            poll_interval_ms: consts::POLL_INTERVAL_MS,
            player_size: consts::PLAYER_SIZE,
            target_size: consts::TARGET_SIZE,
            seed: None,
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load tuning from a JSON file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
