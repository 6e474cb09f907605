use crate::page::controller::RevealPhase;
use crate::projects::render::CategoryStyle;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(18, 20, 26);
    pub const BG_SURFACE: Color = Color::Rgb(28, 31, 40);
    pub const BG_ELEVATED: Color = Color::Rgb(38, 42, 54);
    pub const BORDER_DIM: Color = Color::Rgb(70, 76, 92);
    pub const TEXT_PRIMARY: Color = Color::Rgb(226, 230, 238);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 166, 180);
    pub const TEXT_MUTED: Color = Color::Rgb(100, 106, 120);
    pub const ACCENT_TEAL: Color = Color::Rgb(64, 196, 188);
    pub const ACCENT_GREEN: Color = Color::Rgb(120, 200, 110);
    pub const ACCENT_AMBER: Color = Color::Rgb(236, 178, 72);
    pub const ACCENT_VIOLET: Color = Color::Rgb(168, 130, 240);

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn body_text() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_bar(scrolled: bool) -> Style {
        if scrolled {
            Style::default().bg(Self::BG_ELEVATED)
        } else {
            Style::default().bg(Self::BG_DARK)
        }
    }

    pub fn nav_link(active: bool) -> Style {
        if active {
            Style::default()
                .fg(Self::BG_DARK)
                .bg(Self::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Self::TEXT_SECONDARY)
        }
    }

    pub fn button(selected: bool, enabled: bool) -> Style {
        match (selected, enabled) {
            (_, false) => Style::default().fg(Self::TEXT_MUTED),
            (true, true) => Style::default()
                .fg(Self::BG_DARK)
                .bg(Self::ACCENT_AMBER)
                .add_modifier(Modifier::BOLD),
            (false, true) => Style::default().fg(Self::TEXT_PRIMARY),
        }
    }

    pub fn category(style: Option<CategoryStyle>) -> Style {
        let color = match style {
            Some(CategoryStyle::Backend) => Self::ACCENT_VIOLET,
            Some(CategoryStyle::Automation) => Self::ACCENT_AMBER,
            Some(CategoryStyle::Web) => Self::ACCENT_GREEN,
            None => Self::TEXT_SECONDARY,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Cards waiting out their stagger delay are drawn dimmed.
    pub fn card_phase(phase: RevealPhase) -> Style {
        match phase {
            RevealPhase::Pending => Style::default().add_modifier(Modifier::DIM),
            _ => Style::default(),
        }
    }

    pub fn overlay() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::DIM)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }
}
