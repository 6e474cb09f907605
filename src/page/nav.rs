//! Navigation bar state: scrolled styling, the compact menu, and the link
//! matching the section under the scroll position.

use crate::config::model::NavConfig;
use crate::page::layout::Bounds;

/// A section's id and pixel extent, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub bounds: Bounds,
}

/// Last section (in document order) whose lead-adjusted range contains
/// `scroll_y`.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, lead_px: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        let top = section.bounds.top - lead_px;
        if scroll_y >= top && scroll_y < top + section.bounds.height {
            current = Some(section.id.as_str());
        }
    }
    current
}

#[derive(Debug)]
pub struct NavController {
    scrolled_threshold_px: f64,
    section_lead_px: f64,
    scrolled: bool,
    menu_open: bool,
    active: Option<String>,
}

impl NavController {
    pub fn new(config: &NavConfig) -> Self {
        Self {
            scrolled_threshold_px: config.scrolled_threshold_px,
            section_lead_px: config.section_lead_px,
            scrolled: false,
            menu_open: false,
            active: None,
        }
    }

    /// Re-evaluate scroll-dependent state. Runs on every scroll event.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) {
        self.scrolled = scroll_y > self.scrolled_threshold_px;
        self.active = active_section(sections, scroll_y, self.section_lead_px).map(String::from);
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_link_active(&self, section_id: &str) -> bool {
        self.active_section() == Some(section_id)
    }

    /// Flip the menu. Toggle control, link panel, overlay and scroll lock
    /// all follow the same flag.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A nav link was followed: close the menu if it was open.
    pub fn link_clicked(&mut self) {
        if self.menu_open {
            self.toggle_menu();
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_active(&self) -> bool {
        self.menu_open
    }

    pub fn panel_open(&self) -> bool {
        self.menu_open
    }

    pub fn overlay_visible(&self) -> bool {
        self.menu_open
    }

    pub fn scroll_locked(&self) -> bool {
        self.menu_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        [("home", 0.0, 400.0), ("about", 400.0, 600.0), ("projects", 1000.0, 1500.0)]
            .into_iter()
            .map(|(id, top, height)| SectionBounds {
                id: id.into(),
                bounds: Bounds { top, height },
            })
            .collect()
    }

    #[test]
    fn test_active_section_uses_lead() {
        let s = sections();
        assert_eq!(active_section(&s, 0.0, 150.0), Some("home"));
        // 260 is past 400 - 150, so "about" has started.
        assert_eq!(active_section(&s, 260.0, 150.0), Some("about"));
        assert_eq!(active_section(&s, 849.0, 150.0), Some("about"));
        assert_eq!(active_section(&s, 850.0, 150.0), Some("projects"));
        assert_eq!(active_section(&s, 2400.0, 150.0), None);
    }

    #[test]
    fn test_overlapping_ranges_pick_last() {
        let s = vec![
            SectionBounds { id: "a".into(), bounds: Bounds { top: 0.0, height: 1000.0 } },
            SectionBounds { id: "b".into(), bounds: Bounds { top: 200.0, height: 100.0 } },
        ];
        assert_eq!(active_section(&s, 100.0, 150.0), Some("b"));
        assert_eq!(active_section(&s, 500.0, 150.0), Some("a"));
    }

    #[test]
    fn test_scrolled_threshold() {
        let mut nav = NavController::new(&NavConfig::default());
        nav.on_scroll(50.0, &sections());
        assert!(!nav.is_scrolled());
        nav.on_scroll(51.0, &sections());
        assert!(nav.is_scrolled());
        nav.on_scroll(0.0, &sections());
        assert!(!nav.is_scrolled());
        assert!(nav.is_link_active("home"));
        assert!(!nav.is_link_active("about"));
    }

    #[test]
    fn test_menu_effects_stay_in_sync() {
        let mut nav = NavController::new(&NavConfig::default());
        assert!(!nav.is_menu_open());
        nav.toggle_menu();
        assert!(nav.toggle_active() && nav.panel_open() && nav.overlay_visible() && nav.scroll_locked());
        nav.link_clicked();
        assert!(!(nav.toggle_active() || nav.panel_open() || nav.overlay_visible() || nav.scroll_locked()));
        // Following a link with the menu closed leaves it closed.
        nav.link_clicked();
        assert!(!nav.is_menu_open());
    }
}
