//! Geometry-provider / presentation seam
//!
//! The simulation reads rendered geometry from, and writes positions and
//! score text to, a [`Stage`]. The stage is an external collaborator: the
//! core never assumes anything about how elements are drawn, only that
//! `measure` reflects live rendered geometry.

mod memory;

pub use memory::MemoryStage;

use serde::{Deserialize, Serialize};

use crate::sim::{BoundingBox, SurfaceBounds};

/// Opaque handle to a stage-owned element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementRef(pub(crate) u32);

/// Combined geometry provider and presentation layer.
///
/// Rendering calls are fire-and-forget from the simulation's perspective;
/// a stage that cannot draw (headless) just records what it was told.
pub trait Stage {
    /// Surface dimensions, measured from the rendering container.
    fn measure_surface(&self) -> SurfaceBounds;

    /// Bounding box of a previously created element, or `None` if the
    /// element is unknown to this stage.
    fn measure(&self, element: ElementRef) -> Option<BoundingBox>;

    fn create_score(&mut self) -> ElementRef;
    fn create_player(&mut self) -> ElementRef;
    fn create_target(&mut self, x: f32, y: f32) -> ElementRef;

    fn render_score_text(&mut self, score: u64);
    fn set_element_position(&mut self, element: ElementRef, x: f32, y: f32);
}
