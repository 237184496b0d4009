//! Scroll-triggered reveal of landing page sections.
//!
//! Each observed element starts with the `reveal` class and gains
//! `revealed` the first time at least [`THRESHOLD`] of its height falls
//! inside the viewport shrunk by [`BOTTOM_MARGIN_PX`] at the bottom. After
//! that the element is no longer checked.

use std::collections::BTreeMap;

pub const BOTTOM_MARGIN_PX: f64 = 100.0;
pub const THRESHOLD: f64 = 0.01;

pub const REVEAL_CLASS: &str = "reveal";
pub const REVEALED_CLASS: &str = "reveal revealed";

/// Reveal targets on the landing page, `true` for hero elements.
pub const LANDING_TARGETS: &[(&str, bool)] = &[
    ("hero-title", true),
    ("hero-tagline", true),
    ("hero-cta", true),
    ("about", false),
    ("schedule", false),
    ("register", false),
];

/// Vertical extent of an element relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Whether enough of the element sits inside `[0, viewport_height - margin]`.
    pub fn intersects(&self, viewport_height: f64) -> bool {
        let root_bottom = (viewport_height - BOTTOM_MARGIN_PX).max(0.0);
        if self.height <= 0.0 {
            return self.top >= 0.0 && self.top <= root_bottom;
        }
        let overlap = (self.top + self.height).min(root_bottom) - self.top.max(0.0);
        overlap > 0.0 && overlap / self.height >= THRESHOLD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Observing,
    Revealed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealObserver {
    targets: BTreeMap<String, State>,
}

impl RevealObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_targets(targets: &[(&str, bool)]) -> Self {
        let mut observer = Self::new();
        for (id, hero) in targets {
            observer.observe(id, *hero);
        }
        observer
    }

    /// Start observing `id`. Hero elements are revealed straight away.
    pub fn observe(&mut self, id: &str, hero: bool) {
        let state = if hero { State::Revealed } else { State::Observing };
        self.targets.insert(id.to_string(), state);
    }

    /// Check one element against the viewport. Missing geometry reveals it.
    ///
    /// Returns true when this call revealed the element.
    pub fn check(&mut self, id: &str, extent: Option<Extent>, viewport_height: f64) -> bool {
        let Some(state) = self.targets.get_mut(id) else {
            return false;
        };
        if *state == State::Revealed {
            return false;
        }
        let reveal = match extent {
            Some(extent) => extent.intersects(viewport_height),
            None => true,
        };
        if reveal {
            *state = State::Revealed;
            tracing::trace!(id, "revealed");
        }
        reveal
    }

    pub fn reveal_all(&mut self) {
        for state in self.targets.values_mut() {
            *state = State::Revealed;
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.targets.get(id) == Some(&State::Revealed)
    }

    /// Ids still waiting to be revealed.
    pub fn pending(&self) -> Vec<&str> {
        self.targets
            .iter()
            .filter(|(_, s)| **s == State::Observing)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    pub fn class_for(&self, id: &str) -> &'static str {
        if self.is_revealed(id) {
            REVEALED_CLASS
        } else {
            REVEAL_CLASS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_revealed_immediately() {
        let observer = RevealObserver::with_targets(LANDING_TARGETS);
        assert!(observer.is_revealed("hero-title"));
        assert!(!observer.is_revealed("about"));
        assert_eq!(observer.class_for("about"), "reveal");
        assert_eq!(observer.class_for("hero-cta"), "reveal revealed");
    }

    #[test]
    fn test_bottom_margin_shrinks_viewport() {
        // 800px viewport, effective bottom at 700px.
        assert!(!Extent::new(750.0, 200.0).intersects(800.0));
        assert!(Extent::new(650.0, 200.0).intersects(800.0));
    }

    #[test]
    fn test_one_percent_threshold() {
        // 1000px tall element with 5px inside: 0.5%, not enough.
        assert!(!Extent::new(695.0, 1000.0).intersects(800.0));
        // 20px inside: 2%.
        assert!(Extent::new(680.0, 1000.0).intersects(800.0));
    }

    #[test]
    fn test_above_viewport_does_not_intersect() {
        assert!(!Extent::new(-500.0, 200.0).intersects(800.0));
    }

    #[test]
    fn test_check_reveals_once() {
        let mut observer = RevealObserver::with_targets(LANDING_TARGETS);
        assert!(!observer.check("about", Some(Extent::new(900.0, 300.0)), 800.0));
        assert!(observer.check("about", Some(Extent::new(300.0, 300.0)), 800.0));
        assert!(!observer.check("about", Some(Extent::new(300.0, 300.0)), 800.0));
        // Scrolling away does not hide it again.
        assert!(!observer.check("about", Some(Extent::new(2000.0, 300.0)), 800.0));
        assert!(observer.is_revealed("about"));
    }

    #[test]
    fn test_missing_geometry_reveals() {
        let mut observer = RevealObserver::with_targets(LANDING_TARGETS);
        assert!(observer.check("schedule", None, 800.0));
        assert!(observer.is_revealed("schedule"));
    }

    #[test]
    fn test_reveal_all_empties_pending() {
        let mut observer = RevealObserver::with_targets(LANDING_TARGETS);
        assert_eq!(observer.pending(), vec!["about", "register", "schedule"]);
        observer.reveal_all();
        assert!(observer.pending().is_empty());
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut observer = RevealObserver::new();
        assert!(!observer.check("nope", None, 800.0));
    }
}
