//! Player movement and derived geometry

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::BoundingBox;
use crate::stage::{ElementRef, Stage};

/// Discrete movement command, mapped from arrow keys by the front-end.
///
/// Anything else the front-end receives is dropped before it gets here, so
/// the controller itself has no error cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The player marker.
///
/// Owns the logical coordinates exclusively; they change only through
/// [`step`](Player::step) and [`reset`](Player::reset). Coordinates are
/// unconstrained: they may go negative or run past the surface edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Logical top-left anchor in surface coordinates.
    pub pos: Vec2,
    /// Box from the last stage measurement; `None` until the first refresh.
    bounding_box: Option<BoundingBox>,
    element: ElementRef,
}

impl Player {
    pub fn new(element: ElementRef) -> Self {
        Self {
            pos: Vec2::ZERO,
            bounding_box: None,
            element,
        }
    }

    /// Shift the anchor by `step` units along one axis. Right/Down increase,
    /// Left/Up decrease. No clamping.
    pub fn step(&mut self, direction: Direction, step: f32) {
        match direction {
            Direction::Right => self.pos.x += step,
            Direction::Left => self.pos.x -= step,
            Direction::Down => self.pos.y += step,
            Direction::Up => self.pos.y -= step,
        }
    }

    /// Put the player back at the origin.
    pub fn reset(&mut self) {
        self.pos = Vec2::ZERO;
    }

    /// Re-measure the player's rendered box and cache it.
    ///
    /// The only refresh path for player geometry: callers must invoke this
    /// after every coordinate change before the box is used for collision.
    pub fn refresh_bounding_box<S: Stage>(&mut self, stage: &S) -> Option<BoundingBox> {
        self.bounding_box = stage.measure(self.element);
        self.bounding_box
    }

    /// Cached box from the last refresh.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounding_box
    }

    pub fn element(&self) -> ElementRef {
        self.element
    }
}
