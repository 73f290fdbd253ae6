//! Game session state and transitions
//!
//! One [`GameSession`] owns everything the update loop touches: score,
//! player, target set, surface bounds, RNG. Components receive it by
//! reference; there is no ambient state.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::SurfaceBounds;
use super::collision::boxes_overlap;
use super::player::{Direction, Player};
use super::targets::TargetSet;
use crate::stage::{ElementRef, Stage};
use crate::tuning::Tuning;

/// Session lifecycle phase.
///
/// `Uninitialized -> Ready` on setup, then a self-loop on every movement and
/// collision. No terminal state: the session runs until externally stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    /// Bounds measured, targets placed, player positioned, score rendered.
    Ready,
}

/// Result of one collision poll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollOutcome {
    /// Collision events applied during this poll. Each one incremented the
    /// score and reset the player.
    pub hits: u32,
}

/// A complete game session.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Placement seed, kept for reproducibility.
    pub seed: u64,
    rng: Pcg32,
    tuning: Tuning,
    phase: SessionPhase,
    score: u64,
    surface: SurfaceBounds,
    player: Option<Player>,
    targets: TargetSet,
    score_element: Option<ElementRef>,
}

impl GameSession {
    /// Create an uninitialized session with the given placement seed.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: SessionPhase::Uninitialized,
            score: 0,
            surface: SurfaceBounds::new(0.0, 0.0),
            player: None,
            targets: TargetSet::new(),
            score_element: None,
        }
    }

    /// Measure the surface, place targets, position the player, and render
    /// the initial score. Transitions the session to [`SessionPhase::Ready`].
    pub fn setup<S: Stage>(&mut self, stage: &mut S) {
        self.surface = stage.measure_surface();
        self.score_element = Some(stage.create_score());

        let player_element = stage.create_player();
        self.player = Some(Player::new(player_element));

        self.targets
            .generate(&mut self.rng, self.surface, stage, self.tuning.target_count);
        self.targets.refresh_bounding_boxes(stage);

        self.sync_player(stage);
        stage.render_score_text(self.score);

        self.phase = SessionPhase::Ready;
        log::info!(
            "session ready: {} targets over {:.0}x{:.0} (seed {})",
            self.targets.len(),
            self.surface.width,
            self.surface.height,
            self.seed
        );
    }

    /// Apply one directional movement command and push the new position to
    /// the stage. Ignored before setup.
    pub fn handle_move<S: Stage>(&mut self, stage: &mut S, direction: Direction) {
        if self.phase != SessionPhase::Ready {
            return;
        }
        let step = self.tuning.move_step;
        if let Some(player) = &mut self.player {
            player.step(direction, step);
        }
        self.sync_player(stage);
    }

    /// One collision poll: test the player box against every target box in
    /// scan order, applying a collision event for each match.
    ///
    /// Every hit resets the player and re-measures its box before the scan
    /// continues, so later targets are tested against the post-reset box.
    /// Multiple simultaneous overlaps therefore each score independently in
    /// the same poll. No-op until both player geometry and the target
    /// sequence exist.
    pub fn poll<S: Stage>(&mut self, stage: &mut S) -> PollOutcome {
        if self.phase != SessionPhase::Ready {
            return PollOutcome::default();
        }

        let mut outcome = PollOutcome::default();
        for i in 0..self.targets.boxes().len() {
            let Some(player_box) = self.player.as_ref().and_then(|p| p.bounding_box()) else {
                break;
            };
            let target_box = self.targets.boxes()[i];
            if boxes_overlap(&player_box, &target_box) {
                self.collision_event(stage);
                outcome.hits += 1;
            }
        }
        outcome
    }

    /// Re-read target geometry from the stage. Call after anything that may
    /// have moved rendered targets behind the simulation's back.
    pub fn refresh_targets<S: Stage>(&mut self, stage: &S) {
        self.targets.refresh_bounding_boxes(stage);
    }

    /// Score +1, then score re-render.
    pub fn increment_score<S: Stage>(&mut self, stage: &mut S) {
        self.score += 1;
        stage.render_score_text(self.score);
    }

    /// Player back to the origin, geometry refreshed, position re-rendered.
    pub fn reset_player<S: Stage>(&mut self, stage: &mut S) {
        if let Some(player) = &mut self.player {
            player.reset();
        }
        self.sync_player(stage);
    }

    /// One collision event: score increment followed by player reset. The
    /// two always happen together, in that order.
    pub fn collision_event<S: Stage>(&mut self, stage: &mut S) {
        self.increment_score(stage);
        self.reset_player(stage);
        log::debug!("collision: score {}", self.score);
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn surface(&self) -> SurfaceBounds {
        self.surface
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn score_element(&self) -> Option<ElementRef> {
        self.score_element
    }

    /// Push the player's logical position to the stage, then re-measure its
    /// box. Write-then-measure keeps the cached box in step with whatever
    /// the stage actually rendered.
    fn sync_player<S: Stage>(&mut self, stage: &mut S) {
        if let Some(player) = &mut self.player {
            stage.set_element_position(player.element(), player.pos.x, player.pos.y);
            player.refresh_bounding_box(stage);
        }
    }
}
