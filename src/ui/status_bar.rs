use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const HINTS: [(&str, &str); 6] = [
    ("↑↓", "scroll"),
    ("1-9", "jump"),
    ("f", "filter"),
    ("s", "sort"),
    ("Tab", "select"),
    ("q", "quit"),
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = vec![Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    )];

    let mut hints: Vec<Span> = Vec::new();
    if state.is_compact() {
        hints.push(Span::styled(" m", Theme::key_hint()));
        hints.push(Span::styled(" menu ", Theme::status_bar()));
    }
    for (key, label) in HINTS {
        hints.push(Span::styled(format!(" {}", key), Theme::key_hint()));
        hints.push(Span::styled(format!(" {} ", label), Theme::status_bar()));
    }

    // Pad to right-align the key hints, dropping them when they do not fit.
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let hint_width: usize = hints.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hint_width);
    if used + hint_width <= area.width as usize {
        parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
        parts.extend(hints);
    } else {
        parts.push(Span::styled(
            " ".repeat((area.width as usize).saturating_sub(used)),
            Theme::status_bar(),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
