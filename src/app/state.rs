use crate::config::AppConfig;
use crate::page::controller::{PageController, PageEvent};
use crate::page::counter::SystemClock;
use crate::projects::render::GridContent;
use crate::projects::store::Filter;
use crate::ui::layout;

pub struct AppState {
    pub page: PageController,
    pub clock: SystemClock,
    /// Terminal size in columns and rows.
    pub size: (u16, u16),
    /// Card picked with Tab; its repository opens on Enter.
    pub selected_card: Option<usize>,
    pub should_quit: bool,
    pub dirty: bool,
    /// Frames are still needed for a counter or a card fade-in.
    pub animating: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig, size: (u16, u16)) -> Self {
        let (width, rows) = layout::body_size(size.0, size.1);
        Self {
            page: PageController::new(config, width, rows),
            clock: SystemClock::new(),
            size,
            selected_card: None,
            should_quit: false,
            dirty: true,
            animating: true,
            status_message: None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        self.page.config()
    }

    /// Narrow terminals collapse the nav links behind the menu toggle.
    pub fn is_compact(&self) -> bool {
        self.size.0 < self.config().ui.compact_width
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        let (body_width, rows) = layout::body_size(width, height);
        self.page.on_resize(body_width, rows);
        if !self.is_compact() && self.page.nav().is_menu_open() {
            self.page.toggle_menu();
        }
        self.dirty = true;
    }

    pub fn dispatch(&mut self, event: PageEvent) {
        let grid_replaced = matches!(
            event,
            PageEvent::DataLoaded(_)
                | PageEvent::DataFailed(_)
                | PageEvent::FilterChanged(_)
                | PageEvent::SortChanged(_)
        );
        if self.page.dispatch(event, &self.clock) {
            if grid_replaced {
                self.selected_card = None;
            }
            self.animating = true;
            self.dirty = true;
        }
    }

    /// Filter `step` positions away from the current one in `ui.filters`.
    pub fn adjacent_filter(&self, step: isize) -> Option<Filter> {
        let filters = &self.config().ui.filters;
        if filters.is_empty() {
            return None;
        }
        let current = self.page.store().current_filter().to_string();
        let len = filters.len() as isize;
        let next = match filters.iter().position(|f| *f == current) {
            Some(i) => (i as isize + step).rem_euclid(len),
            None => 0,
        };
        Some(Filter::from_selector(&filters[next as usize]))
    }

    pub fn select_card(&mut self, step: isize) {
        let count = self.page.grid().cards().len();
        if count == 0 {
            self.selected_card = None;
            return;
        }
        let next = match self.selected_card {
            Some(i) => (i as isize + step).rem_euclid(count as isize) as usize,
            None if step < 0 => count - 1,
            None => 0,
        };
        self.selected_card = Some(next);
        if let Some(grid) = self.page.layout().grid {
            let (span, _) = grid.card_cell(next);
            self.page.scroll_into_view(span);
        }
        self.animating = true;
        self.dirty = true;
    }

    pub fn selected_link(&self) -> Option<String> {
        let index = self.selected_card?;
        let card = self.page.grid().cards().get(index)?;
        (!card.link.href.is_empty()).then(|| card.link.href.clone())
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let store = self.page.store();
        let locale = self.config().ui.locale;
        match self.page.grid() {
            GridContent::Pending => locale.loading_message().to_string(),
            GridContent::Fallback(_) => locale.unavailable_message().to_string(),
            _ => locale.status_summary(
                store.len(),
                &locale.filter_label(&store.current_filter().to_string()),
                locale.sort_label(store.current_sort()),
            ),
        }
    }
}
