use crate::app::state::AppState;
use crate::ui::layout::{self, compute_layout};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// What a click in the nav area landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    Link(usize),
    Toggle,
    /// Dimmed body behind an open menu panel.
    Overlay,
}

fn labels(state: &AppState) -> Vec<&str> {
    state
        .page
        .layout()
        .sections
        .iter()
        .map(|s| s.label.as_str())
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let nav = state.page.nav();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if nav.is_scrolled() {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .style(Theme::nav_bar(nav.is_scrolled()));
    frame.render_widget(block, area);

    let brand = &state.config().profile.name;
    let inner = Rect::new(area.x + 1, area.y + 1, area.width.saturating_sub(2), 1);
    if area.height < 3 || inner.width == 0 {
        return;
    }
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", brand), Theme::heading())),
        inner,
    );

    if state.is_compact() {
        let toggle = layout::menu_toggle_rect(area);
        let style = if nav.toggle_active() {
            Theme::nav_link(true)
        } else {
            Theme::title()
        };
        let glyph = if nav.toggle_active() { " ✕ " } else { " ☰ " };
        frame.render_widget(Paragraph::new(Span::styled(glyph, style)), toggle);
        return;
    }

    let sections = &state.page.layout().sections;
    let rects = layout::nav_link_rects(area, brand, &labels(state));
    for (section, rect) in sections.iter().zip(rects) {
        if rect.width == 0 {
            break;
        }
        let style = Theme::nav_link(nav.is_link_active(&section.id));
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {} ", section.label), style)),
            rect,
        );
    }
}

/// Map a mouse click at terminal cell (`col`, `row`) onto nav targets.
pub fn hit_test(state: &AppState, col: u16, row: u16) -> Option<NavHit> {
    let area = Rect::new(0, 0, state.size.0, state.size.1);
    let app_layout = compute_layout(area);
    let nav = state.page.nav();

    if state.is_compact() {
        if layout::contains(layout::menu_toggle_rect(app_layout.navbar), col, row) {
            return Some(NavHit::Toggle);
        }
        if nav.panel_open() {
            let links = state.page.layout().sections.len();
            let panel = layout::menu_panel_rect(app_layout.body, links);
            if layout::contains(panel, col, row) {
                let index = row.checked_sub(panel.y + 1)? as usize;
                return (index < links).then_some(NavHit::Link(index));
            }
            if layout::contains(app_layout.body, col, row) {
                return Some(NavHit::Overlay);
            }
        }
        return None;
    }

    let brand = &state.config().profile.name;
    layout::nav_link_rects(app_layout.navbar, brand, &labels(state))
        .into_iter()
        .position(|rect| layout::contains(rect, col, row))
        .map(NavHit::Link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_hit_test_wide_links() {
        let state = AppState::new(AppConfig::default(), (120, 30));
        // " Portfólio" brand, links start at column 1 + 1 + 9 + 3.
        assert_eq!(hit_test(&state, 14, 1), Some(NavHit::Link(0)));
        assert_eq!(hit_test(&state, 14, 10), None);
    }

    #[test]
    fn test_hit_test_compact_menu() {
        let mut state = AppState::new(AppConfig::default(), (60, 30));
        assert_eq!(hit_test(&state, 57, 1), Some(NavHit::Toggle));
        assert_eq!(hit_test(&state, 5, 10), None);

        state.page.toggle_menu();
        // Panel spans columns 32..60 from row 3; first link on row 4.
        assert_eq!(hit_test(&state, 40, 4), Some(NavHit::Link(0)));
        assert_eq!(hit_test(&state, 40, 7), Some(NavHit::Link(3)));
        assert_eq!(hit_test(&state, 5, 10), Some(NavHit::Overlay));
    }
}
