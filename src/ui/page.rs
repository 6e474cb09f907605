//! Scrollable page body.
//!
//! Each element is drawn into a scratch buffer of its own size and the rows
//! that fall inside the viewport are copied onto the frame, so blocks cut by
//! the viewport edge keep their shape.

use crate::app::state::AppState;
use crate::config::model::SectionKind;
use crate::page::controller::RevealPhase;
use crate::page::layout::{
    truncate, wrap_text, GridLayout, SectionBlock, CARD_GAP_COLS, PAGE_MARGIN,
};
use crate::projects::render::{Card, GridContent};
use crate::projects::store::{Filter, SortKey};
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Margin;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

struct Canvas<'a> {
    buf: &'a mut Buffer,
    body: Rect,
    scroll: usize,
}

impl Canvas<'_> {
    fn visible(&self, top: usize, height: usize) -> bool {
        top + height > self.scroll && top < self.scroll + self.body.height as usize
    }

    /// Draw `widget` at page row `top`, column `x` (relative to the body).
    fn draw<W: Widget>(&mut self, top: usize, x: u16, width: u16, height: u16, widget: W) {
        self.draw_styled(top, x, width, height, widget, Style::default());
    }

    fn draw_styled<W: Widget>(
        &mut self,
        top: usize,
        x: u16,
        width: u16,
        height: u16,
        widget: W,
        patch: Style,
    ) {
        let width = width.min(self.body.width.saturating_sub(x));
        if width == 0 || height == 0 || !self.visible(top, height as usize) {
            return;
        }
        let mut scratch = Buffer::empty(Rect::new(0, 0, width, height));
        scratch.set_style(scratch.area, Style::default().bg(Theme::BG_DARK));
        widget.render(scratch.area, &mut scratch);
        scratch.set_style(scratch.area, patch);

        let bottom = self.scroll + self.body.height as usize;
        for r in 0..height {
            let abs = top + r as usize;
            if abs < self.scroll || abs >= bottom {
                continue;
            }
            let y = self.body.y + (abs - self.scroll) as u16;
            for c in 0..width {
                if let (Some(src), Some(dst)) = (
                    scratch.cell((c, r)),
                    self.buf.cell_mut((self.body.x + x + c, y)),
                ) {
                    *dst = src.clone();
                }
            }
        }
    }
}

pub fn render(frame: &mut Frame, body: Rect, state: &AppState) {
    frame
        .buffer_mut()
        .set_style(body, Style::default().bg(Theme::BG_DARK));

    let page = &state.page;
    let layout = page.layout();
    let mut canvas = Canvas {
        buf: frame.buffer_mut(),
        body,
        scroll: page.scroll_rows(),
    };
    let content_width = body.width.saturating_sub(PAGE_MARGIN * 2).max(1);

    for section in &layout.sections {
        if !canvas.visible(section.span.top, section.span.height) {
            continue;
        }
        match section.kind {
            SectionKind::Hero => render_hero(&mut canvas, section, state, content_width),
            SectionKind::About | SectionKind::Contact => {
                render_heading(&mut canvas, section, state, content_width);
                render_lines(&mut canvas, section, content_width);
            }
            SectionKind::Projects => {
                render_heading(&mut canvas, section, state, content_width);
                if let Some(grid) = layout.grid.filter(|g| g.controls_row == section.span.top + 2) {
                    render_controls(&mut canvas, &grid, state, content_width);
                    render_grid(&mut canvas, &grid, state, content_width);
                }
            }
        }
    }
}

fn render_hero(canvas: &mut Canvas, section: &SectionBlock, state: &AppState, width: u16) {
    let top = section.span.top + section.heading_row;
    if state.page.is_heading_visible(&section.id) {
        let name = Paragraph::new(Span::styled(
            state.config().profile.name.clone(),
            Theme::heading(),
        ))
        .alignment(Alignment::Center);
        canvas.draw(top, PAGE_MARGIN, width, 1, name);
    }

    let tagline: Vec<Line> = section
        .lines
        .iter()
        .map(|l| Line::styled(l.clone(), Theme::body_text()))
        .collect();
    let tagline_rows = tagline.len() as u16;
    canvas.draw(
        top + 1,
        PAGE_MARGIN,
        width,
        tagline_rows,
        Paragraph::new(tagline).alignment(Alignment::Center),
    );

    let count = state.page.counter_text();
    if !count.is_empty() {
        let caption = Line::from(vec![
            Span::styled(
                count.to_string(),
                Style::default()
                    .fg(Theme::ACCENT_AMBER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", state.config().ui.locale.projects_caption()),
                Theme::body_text(),
            ),
        ]);
        canvas.draw(
            top + 1 + tagline_rows as usize + 1,
            PAGE_MARGIN,
            width,
            1,
            Paragraph::new(caption).alignment(Alignment::Center),
        );
    }
}

fn render_heading(canvas: &mut Canvas, section: &SectionBlock, state: &AppState, width: u16) {
    if !state.page.is_heading_visible(&section.id) {
        return;
    }
    let heading = Paragraph::new(Line::from(vec![
        Span::styled("── ", Theme::border()),
        Span::styled(section.label.clone(), Theme::heading()),
        Span::styled(" ──", Theme::border()),
    ]));
    canvas.draw(
        section.span.top + section.heading_row,
        PAGE_MARGIN,
        width,
        1,
        heading,
    );
}

fn render_lines(canvas: &mut Canvas, section: &SectionBlock, width: u16) {
    let lines: Vec<Line> = section
        .lines
        .iter()
        .map(|l| Line::styled(l.clone(), Theme::body_text()))
        .collect();
    let rows = lines.len() as u16;
    canvas.draw(
        section.span.top + 2,
        PAGE_MARGIN,
        width,
        rows,
        Paragraph::new(lines),
    );
}

fn render_controls(canvas: &mut Canvas, grid: &GridLayout, state: &AppState, width: u16) {
    let page = &state.page;
    let locale = state.config().ui.locale;
    let enabled = page.controls_enabled();
    let current = page.store().current_filter();
    let sort = page.store().current_sort();

    let mut spans = vec![Span::styled("f ", Theme::muted())];
    for selector in &state.config().ui.filters {
        let selected = Filter::from_selector(selector) == *current;
        spans.push(Span::styled(
            format!(" {} ", locale.filter_label(selector)),
            Theme::button(selected, enabled),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("  s ", Theme::muted()));
    for key in SortKey::ALL {
        spans.push(Span::styled(
            format!(" {} ", locale.sort_label(key)),
            Theme::button(key == sort, enabled),
        ));
        spans.push(Span::raw(" "));
    }

    canvas.draw(
        grid.controls_row,
        PAGE_MARGIN,
        width,
        1,
        Paragraph::new(Line::from(spans)),
    );
}

fn render_grid(canvas: &mut Canvas, grid: &GridLayout, state: &AppState, width: u16) {
    let page = &state.page;
    let locale = state.config().ui.locale;
    match page.grid() {
        GridContent::Pending => {
            let text = Paragraph::new(Span::styled(locale.loading_message(), Theme::muted()))
                .alignment(Alignment::Center);
            canvas.draw(grid.top, PAGE_MARGIN, width, 1, text);
        }
        GridContent::Empty { message } => {
            let text = Paragraph::new(vec![
                Line::raw(""),
                Line::styled(*message, Theme::muted()),
            ])
            .alignment(Alignment::Center);
            canvas.draw(grid.top, PAGE_MARGIN, width, 3, text);
        }
        content @ (GridContent::Cards(_) | GridContent::Fallback(_)) => {
            for (index, card) in content.cards().iter().enumerate() {
                let phase = page.card_phase(index);
                if phase == RevealPhase::Hidden {
                    continue;
                }
                let (span, col) = grid.card_cell(index);
                let x = PAGE_MARGIN + col as u16 * (grid.card_width + CARD_GAP_COLS);
                let view = CardView {
                    card,
                    selected: state.selected_card == Some(index),
                };
                canvas.draw_styled(
                    span.top,
                    x,
                    grid.card_width,
                    span.height as u16,
                    view,
                    Theme::card_phase(phase),
                );
            }
        }
    }
}

struct CardView<'a> {
    card: &'a Card,
    selected: bool,
}

impl Widget for CardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = self.card;
        let inner_width = area.width.saturating_sub(4) as usize;
        let block = Block::default()
            .title(format!(" {} ", truncate(&card.title, inner_width)))
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(if self.selected {
                Theme::border_focused()
            } else {
                Theme::border()
            })
            .style(Style::default().bg(Theme::BG_SURFACE));
        let inner = block.inner(area);
        block.render(area, buf);
        let inner = inner.inner(Margin::new(1, 0));
        let text_width = inner.width as usize;

        let mut header = vec![Span::styled(
            card.category.clone(),
            Theme::category(card.category_style),
        )];
        if let Some(stars) = card.stars {
            header.push(Span::styled(
                format!("  ★ {}", stars),
                Style::default().fg(Theme::ACCENT_AMBER),
            ));
        }

        let mut lines = vec![Line::from(header)];
        let mut description = wrap_text(&card.description, text_width);
        if description.len() > 2 {
            description.truncate(2);
            description[1] = truncate(&format!("{} …", description[1]), text_width);
        }
        lines.extend(
            description
                .into_iter()
                .map(|l| Line::styled(l, Theme::body_text())),
        );
        while lines.len() < 3 {
            lines.push(Line::raw(""));
        }
        lines.push(Line::styled(
            truncate(&card.technologies.join(" · "), text_width),
            Theme::muted(),
        ));
        lines.push(match card.date_label {
            Some(ref label) => Line::styled(label.clone(), Theme::muted()),
            None => Line::raw(""),
        });
        lines.push(Line::styled(
            format!("↗ {}", card.link.label),
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .add_modifier(Modifier::UNDERLINED),
        ));
        Paragraph::new(lines).render(inner, buf);
    }
}
