//! Page wiring: owns every page component and reacts to named page events.
//!
//! Startup is two-phase. [`PageController::new`] sets up navigation and
//! scroll reveal immediately; project data arrives later as
//! [`PageEvent::DataLoaded`] or [`PageEvent::DataFailed`]. Filter and sort
//! controls only respond once data has loaded.

use crate::config::model::{AppConfig, SectionKind};
use crate::page::counter::{CounterAnimator, CounterDisplay, FrameClock};
use crate::page::layout::{ElementId, PageLayout, RowSpan};
use crate::page::nav::{NavController, SectionBounds};
use crate::page::reveal::{RevealController, Viewport};
use crate::projects::project::Project;
use crate::projects::render::{GridContent, ProjectRenderer};
use crate::projects::store::{Filter, ProjectStore, SortKey};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    DataLoaded(Vec<Project>),
    DataFailed(String),
    FilterChanged(Filter),
    SortChanged(SortKey),
}

/// How far along a card's staggered reveal is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    /// Intersected, waiting out its delay tier.
    Pending,
    Shown,
}

pub struct PageController {
    config: AppConfig,
    store: ProjectStore,
    renderer: ProjectRenderer,
    nav: NavController,
    reveal: RevealController,
    counter: CounterDisplay,
    grid: GridContent,
    generation: u64,
    controls_enabled: bool,
    layout: PageLayout,
    width: u16,
    viewport_rows: usize,
    scroll_rows: usize,
    now_ms: f64,
}

impl PageController {
    pub fn new(config: AppConfig, width: u16, viewport_rows: usize) -> Self {
        let grid = GridContent::Pending;
        let layout = PageLayout::compute(&config, width, viewport_rows, &grid, 0);
        let mut page = Self {
            store: ProjectStore::new(),
            renderer: ProjectRenderer::new(config.ui.locale),
            nav: NavController::new(&config.nav),
            reveal: RevealController::new(&config.reveal),
            counter: CounterDisplay::new(),
            grid,
            generation: 0,
            controls_enabled: false,
            layout,
            width,
            viewport_rows,
            scroll_rows: 0,
            now_ms: 0.0,
            config,
        };

        let headings: Vec<ElementId> = page.layout.heading_ids().collect();
        for id in headings {
            page.reveal.observe(id);
        }
        page.check_reveal();
        page
    }

    /// Apply one page event. Returns whether anything visible changed.
    pub fn dispatch(&mut self, event: PageEvent, clock: &dyn FrameClock) -> bool {
        self.now_ms = clock.now_ms();
        match event {
            PageEvent::DataLoaded(projects) => {
                info!(count = projects.len(), "project data loaded");
                let count = projects.len() as i64;
                self.store.load(projects);
                if self.layout.has_kind(SectionKind::Hero) {
                    self.counter.animate(CounterAnimator::start(
                        0,
                        count,
                        self.config.counter.duration_ms,
                        clock,
                    ));
                }
                self.render_current();
                self.controls_enabled = true;
                true
            }
            PageEvent::DataFailed(reason) => {
                warn!(%reason, "could not load project data, showing fallback");
                self.store.fail();
                self.controls_enabled = false;
                if self.has_grid() {
                    let fallback = self.renderer.render_fallback(&self.config.fallback);
                    self.install_grid(fallback);
                }
                true
            }
            PageEvent::FilterChanged(filter) => {
                if !self.controls_enabled {
                    return false;
                }
                debug!(%filter, "filter changed");
                self.store.set_filter(filter);
                self.render_current();
                true
            }
            PageEvent::SortChanged(key) => {
                if !self.controls_enabled {
                    return false;
                }
                debug!(sort = key.as_str(), "sort changed");
                self.store.set_sort(key);
                self.render_current();
                true
            }
        }
    }

    fn has_grid(&self) -> bool {
        self.layout.grid.is_some()
    }

    /// Re-derive the visible list and render it into the grid.
    fn render_current(&mut self) {
        if !self.has_grid() {
            return;
        }
        let content = self.renderer.render(&self.store.derive());
        self.install_grid(content);
    }

    /// Replace the grid and register the fresh cards for reveal.
    fn install_grid(&mut self, content: GridContent) {
        self.generation += 1;
        self.grid = content;
        self.reveal.forget_cards_before(self.generation);
        self.relayout();
        for index in 0..self.grid.cards().len() {
            self.reveal.observe(ElementId::Card {
                generation: self.generation,
                index,
            });
        }
        self.check_reveal();
    }

    fn relayout(&mut self) {
        self.layout = PageLayout::compute(
            &self.config,
            self.width,
            self.viewport_rows,
            &self.grid,
            self.generation,
        );
        self.scroll_rows = self.scroll_rows.min(self.layout.max_scroll(self.viewport_rows));
    }

    fn row_height(&self) -> f64 {
        self.config.ui.row_height_px
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_rows as f64 * self.row_height()
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            top: self.scroll_y(),
            height: self.viewport_rows as f64 * self.row_height(),
        }
    }

    fn section_bounds(&self) -> Vec<SectionBounds> {
        let row_height = self.row_height();
        self.layout
            .sections
            .iter()
            .map(|s| SectionBounds {
                id: s.id.clone(),
                bounds: s.span.to_bounds(row_height),
            })
            .collect()
    }

    fn check_reveal(&mut self) {
        let viewport = self.viewport();
        let row_height = self.row_height();
        let layout = &self.layout;
        self.reveal.check(
            viewport,
            |id| layout.element_span(id).map(|span| span.to_bounds(row_height)),
            self.now_ms,
        );
    }

    /// Everything a scroll event recomputes.
    fn on_scroll(&mut self) {
        let sections = self.section_bounds();
        self.nav.on_scroll(self.scroll_y(), &sections);
        self.check_reveal();
    }

    /// Scroll by `delta` rows. Ignored while the menu locks scrolling.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        if self.nav.scroll_locked() {
            return false;
        }
        let max = self.layout.max_scroll(self.viewport_rows) as isize;
        let target = (self.scroll_rows as isize + delta).clamp(0, max.max(0)) as usize;
        self.scroll_to(target)
    }

    pub fn scroll_to_top(&mut self) -> bool {
        !self.nav.scroll_locked() && self.scroll_to(0)
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        !self.nav.scroll_locked() && self.scroll_to(self.layout.max_scroll(self.viewport_rows))
    }

    /// Scroll the least distance that brings `span` fully on screen.
    pub fn scroll_into_view(&mut self, span: RowSpan) -> bool {
        if self.nav.scroll_locked() {
            return false;
        }
        let bottom = span.top + span.height;
        if span.top < self.scroll_rows {
            self.scroll_to(span.top)
        } else if bottom > self.scroll_rows + self.viewport_rows {
            self.scroll_to(bottom.saturating_sub(self.viewport_rows))
        } else {
            false
        }
    }

    fn scroll_to(&mut self, row: usize) -> bool {
        let row = row.min(self.layout.max_scroll(self.viewport_rows));
        if row == self.scroll_rows {
            return false;
        }
        self.scroll_rows = row;
        self.on_scroll();
        true
    }

    /// Follow the nav link for section `index`: close the menu, then jump.
    pub fn follow_link(&mut self, index: usize) -> bool {
        let Some(top) = self.layout.sections.get(index).map(|s| s.span.top) else {
            return false;
        };
        self.nav.link_clicked();
        self.scroll_to(top);
        true
    }

    pub fn toggle_menu(&mut self) {
        self.nav.toggle_menu();
    }

    pub fn on_resize(&mut self, width: u16, viewport_rows: usize) {
        self.width = width;
        self.viewport_rows = viewport_rows;
        self.relayout();
        self.on_scroll();
    }

    /// Advance animations to `now_ms`. Returns whether more frames are wanted.
    pub fn on_frame(&mut self, now_ms: f64) -> bool {
        self.now_ms = now_ms;
        let counting = self.counter.on_frame(now_ms);
        let fading = (0..self.grid.cards().len())
            .any(|index| self.card_phase(index) == RevealPhase::Pending);
        counting || fading
    }

    pub fn card_phase(&self, index: usize) -> RevealPhase {
        let id = ElementId::Card {
            generation: self.generation,
            index,
        };
        let Some(revealed_at) = self.reveal.revealed_at(&id) else {
            return RevealPhase::Hidden;
        };
        let tier = self
            .grid
            .cards()
            .get(index)
            .and_then(|c| c.delay_tier)
            .unwrap_or(0);
        if self.now_ms >= revealed_at + tier as f64 * self.config.reveal.delay_step_ms {
            RevealPhase::Shown
        } else {
            RevealPhase::Pending
        }
    }

    pub fn is_heading_visible(&self, section_id: &str) -> bool {
        self.reveal
            .is_visible(&ElementId::Heading(section_id.to_string()))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn nav(&self) -> &NavController {
        &self.nav
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn grid(&self) -> &GridContent {
        &self.grid
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn counter_text(&self) -> &str {
        self.counter.text()
    }

    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    pub fn scroll_rows(&self) -> usize {
        self.scroll_rows
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
