//! Target set management
//!
//! Owns the authoritative, ordered bounding-box sequence the collision scan
//! consumes. Targets have no identity beyond their position in the sequence.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::{BoundingBox, SurfaceBounds};
use crate::stage::{ElementRef, Stage};

/// The ordered set of collectible targets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetSet {
    elements: Vec<ElementRef>,
    boxes: Vec<BoundingBox>,
}

impl TargetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `count` targets uniformly at random over the surface and hand
    /// them to the stage for rendering. Fully replaces any prior targets.
    ///
    /// Each coordinate is an independently sampled integer in `[0, width)`
    /// / `[0, height)`, like the classic `floor(random() * size)` placement.
    pub fn generate<S: Stage>(
        &mut self,
        rng: &mut Pcg32,
        surface: SurfaceBounds,
        stage: &mut S,
        count: usize,
    ) {
        self.elements.clear();
        self.boxes.clear();

        let max_x = (surface.width as u32).max(1);
        let max_y = (surface.height as u32).max(1);
        for _ in 0..count {
            let x = rng.random_range(0..max_x) as f32;
            let y = rng.random_range(0..max_y) as f32;
            self.elements.push(stage.create_target(x, y));
        }
    }

    /// Re-read every rendered target's geometry and replace the box sequence
    /// wholesale. Must run once after [`generate`](TargetSet::generate); may
    /// run again whenever target geometry could have changed.
    pub fn refresh_bounding_boxes<S: Stage>(&mut self, stage: &S) {
        self.boxes = self
            .elements
            .iter()
            .filter_map(|&el| stage.measure(el))
            .collect();
    }

    /// Box sequence in scan order.
    pub fn boxes(&self) -> &[BoundingBox] {
        &self.boxes
    }

    /// Element handles in scan order.
    pub fn elements(&self) -> &[ElementRef] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TARGET_COUNT;
    use crate::stage::MemoryStage;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn generate_on(seed: u64, surface: SurfaceBounds) -> (TargetSet, MemoryStage) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut stage = MemoryStage::new(surface);
        let mut set = TargetSet::new();
        set.generate(&mut rng, surface, &mut stage, TARGET_COUNT);
        set.refresh_bounding_boxes(&stage);
        (set, stage)
    }

    #[test]
    fn test_generate_replaces_prior_targets() {
        let surface = SurfaceBounds::new(400.0, 400.0);
        let mut rng = Pcg32::seed_from_u64(7);
        let mut stage = MemoryStage::new(surface);
        let mut set = TargetSet::new();

        set.generate(&mut rng, surface, &mut stage, 4);
        set.refresh_bounding_boxes(&stage);
        assert_eq!(set.len(), 4);

        set.generate(&mut rng, surface, &mut stage, TARGET_COUNT);
        set.refresh_bounding_boxes(&stage);
        assert_eq!(set.len(), TARGET_COUNT);
        assert_eq!(set.boxes().len(), TARGET_COUNT);
    }

    #[test]
    fn test_refresh_is_idempotent_without_render_change() {
        let (mut set, stage) = generate_on(42, SurfaceBounds::new(640.0, 480.0));
        let first: Vec<_> = set.boxes().to_vec();
        set.refresh_bounding_boxes(&stage);
        assert_eq!(set.boxes(), first.as_slice());
    }

    #[test]
    fn test_refresh_observes_moved_element() {
        let (mut set, mut stage) = generate_on(42, SurfaceBounds::new(640.0, 480.0));
        let el = set.elements()[0];
        stage.move_element(el, 5.0, 6.0);
        set.refresh_bounding_boxes(&stage);
        assert_eq!(set.boxes()[0].left, 5.0);
        assert_eq!(set.boxes()[0].top, 6.0);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let surface = SurfaceBounds::new(800.0, 600.0);
        let (a, _) = generate_on(1234, surface);
        let (b, _) = generate_on(1234, surface);
        assert_eq!(a.boxes(), b.boxes());
    }

    proptest! {
        // Exactly `count` targets, every origin inside [0,width) x [0,height).
        #[test]
        fn prop_generate_within_bounds(seed in any::<u64>(), w in 1.0f32..800.0, h in 1.0f32..600.0) {
            let (set, _) = generate_on(seed, SurfaceBounds::new(w, h));
            prop_assert_eq!(set.len(), TARGET_COUNT);
            for b in set.boxes() {
                prop_assert!(b.left >= 0.0 && b.left < w);
                prop_assert!(b.top >= 0.0 && b.top < h);
            }
        }
    }
}
