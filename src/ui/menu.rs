use crate::app::state::AppState;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Compact-mode menu: dims the body and slides the link panel in on the right.
pub fn render(frame: &mut Frame, body: Rect, state: &AppState) {
    let nav = state.page.nav();
    if !state.is_compact() {
        return;
    }

    if nav.overlay_visible() {
        frame.buffer_mut().set_style(body, Theme::overlay());
    }
    if !nav.panel_open() {
        return;
    }

    let sections = &state.page.layout().sections;
    let panel = layout::menu_panel_rect(body, sections.len());
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .title(" Menu ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let lines: Vec<Line> = sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Theme::key_hint()),
                Span::styled(
                    format!(" {}", section.label),
                    Theme::nav_link(nav.is_link_active(&section.id)),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
