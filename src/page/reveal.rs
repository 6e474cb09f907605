//! One-shot reveal of page elements as they scroll into view.
//!
//! Elements must be registered with [`RevealController::observe`]; nothing is
//! discovered automatically. Once revealed an element is never observed
//! again and never hidden.

use crate::config::model::RevealConfig;
use crate::page::layout::{Bounds, ElementId};
use std::collections::{BTreeSet, HashMap};

/// Visible document range in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub top: f64,
    pub height: f64,
}

pub struct RevealController {
    threshold: f64,
    bottom_margin_px: f64,
    observed: BTreeSet<ElementId>,
    /// Revealed elements and the frame time of their reveal.
    revealed: HashMap<ElementId, f64>,
}

impl RevealController {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold,
            bottom_margin_px: config.bottom_margin_px,
            observed: BTreeSet::new(),
            revealed: HashMap::new(),
        }
    }

    /// Start observing `id` unless it is already visible.
    pub fn observe(&mut self, id: ElementId) {
        if !self.revealed.contains_key(&id) {
            self.observed.insert(id);
        }
    }

    pub fn unobserve(&mut self, id: &ElementId) {
        self.observed.remove(id);
    }

    /// Drop cards from earlier renders; they are no longer on the page.
    pub fn forget_cards_before(&mut self, generation: u64) {
        let stale = |id: &ElementId| matches!(id, ElementId::Card { generation: g, .. } if *g < generation);
        self.observed.retain(|id| !stale(id));
        self.revealed.retain(|id, _| !stale(id));
    }

    #[cfg(test)]
    pub fn is_observed(&self, id: &ElementId) -> bool {
        self.observed.contains(id)
    }

    pub fn is_visible(&self, id: &ElementId) -> bool {
        self.revealed.contains_key(id)
    }

    /// Frame time at which `id` was revealed.
    pub fn revealed_at(&self, id: &ElementId) -> Option<f64> {
        self.revealed.get(id).copied()
    }

    /// Whether an element with `bounds` counts as intersecting `viewport`.
    pub fn intersects(&self, viewport: Viewport, bounds: Bounds) -> bool {
        let root_top = viewport.top;
        let root_bottom = viewport.top + (viewport.height - self.bottom_margin_px).max(0.0);

        if bounds.height <= 0.0 {
            return bounds.top >= root_top && bounds.top <= root_bottom;
        }

        let overlap = (bounds.bottom().min(root_bottom) - bounds.top.max(root_top)).max(0.0);
        overlap > 0.0 && overlap / bounds.height >= self.threshold
    }

    /// Reveal every observed element that intersects the viewport. `bounds`
    /// resolves an element to its current geometry; unresolvable elements
    /// are skipped. Returns the newly revealed ids.
    pub fn check<F>(&mut self, viewport: Viewport, bounds: F, now_ms: f64) -> Vec<ElementId>
    where
        F: Fn(&ElementId) -> Option<Bounds>,
    {
        let hits: Vec<ElementId> = self
            .observed
            .iter()
            .filter(|id| bounds(*id).is_some_and(|b| self.intersects(viewport, b)))
            .cloned()
            .collect();

        for id in &hits {
            self.unobserve(id);
            self.revealed.insert(id.clone(), now_ms);
        }
        hits
    }
}
