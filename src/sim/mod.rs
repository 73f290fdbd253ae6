//! Deterministic game core
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable scan order (target insertion order)
//! - No rendering or platform dependencies beyond the `Stage` seam

pub mod bounds;
pub mod collision;
pub mod player;
pub mod session;
pub mod targets;

pub use bounds::{BoundingBox, SurfaceBounds};
pub use collision::boxes_overlap;
pub use player::{Direction, Player};
pub use session::{GameSession, PollOutcome, SessionPhase};
pub use targets::TargetSet;
