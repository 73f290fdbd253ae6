//! In-memory stage backend
//!
//! Backs the test suite and the terminal front-end. Elements are plain
//! records of origin and size; `measure` derives boxes from them, so a
//! position write followed by a measurement round-trips exactly.

use super::{ElementRef, Stage};
use crate::consts::{PLAYER_SIZE, TARGET_SIZE};
use crate::sim::{BoundingBox, SurfaceBounds};

#[derive(Debug, Clone, Copy)]
struct Element {
    x: f32,
    y: f32,
    size: f32,
}

/// Headless stage holding element geometry in memory.
#[derive(Debug, Clone)]
pub struct MemoryStage {
    surface: SurfaceBounds,
    elements: Vec<Element>,
    player_size: f32,
    target_size: f32,
    score_text: Option<u64>,
}

impl MemoryStage {
    pub fn new(surface: SurfaceBounds) -> Self {
        Self::with_element_sizes(surface, PLAYER_SIZE, TARGET_SIZE)
    }

    pub fn with_element_sizes(surface: SurfaceBounds, player_size: f32, target_size: f32) -> Self {
        Self {
            surface,
            elements: Vec::new(),
            player_size,
            target_size,
            score_text: None,
        }
    }

    fn push(&mut self, element: Element) -> ElementRef {
        let id = self.elements.len() as u32;
        self.elements.push(element);
        ElementRef(id)
    }

    /// Last score handed to `render_score_text`, if any.
    pub fn score_text(&self) -> Option<u64> {
        self.score_text
    }

    /// Top-left origin of an element, for drawing and tests.
    pub fn element_origin(&self, element: ElementRef) -> Option<(f32, f32)> {
        self.elements
            .get(element.0 as usize)
            .map(|e| (e.x, e.y))
    }

    /// Move a rendered element directly, bypassing the simulation. Models a
    /// layout change the simulation has not observed yet; a subsequent
    /// `refresh` picks it up.
    pub fn move_element(&mut self, element: ElementRef, x: f32, y: f32) {
        if let Some(e) = self.elements.get_mut(element.0 as usize) {
            e.x = x;
            e.y = y;
        }
    }
}

impl Stage for MemoryStage {
    fn measure_surface(&self) -> SurfaceBounds {
        self.surface
    }

    fn measure(&self, element: ElementRef) -> Option<BoundingBox> {
        self.elements
            .get(element.0 as usize)
            .map(|e| BoundingBox::from_origin_size(e.x, e.y, e.size))
    }

    fn create_score(&mut self) -> ElementRef {
        self.push(Element {
            x: 0.0,
            y: 0.0,
            size: 0.0,
        })
    }

    fn create_player(&mut self) -> ElementRef {
        let size = self.player_size;
        self.push(Element {
            x: 0.0,
            y: 0.0,
            size,
        })
    }

    fn create_target(&mut self, x: f32, y: f32) -> ElementRef {
        let size = self.target_size;
        self.push(Element { x, y, size })
    }

    fn render_score_text(&mut self, score: u64) {
        self.score_text = Some(score);
    }

    fn set_element_position(&mut self, element: ElementRef, x: f32, y: f32) {
        if let Some(e) = self.elements.get_mut(element.0 as usize) {
            e.x = x;
            e.y = y;
        }
    }
}
