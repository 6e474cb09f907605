use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Nav bar height, borders included.
pub const NAV_ROWS: u16 = 3;
pub const STATUS_ROWS: u16 = 1;
const MENU_PANEL_WIDTH: u16 = 28;
const LINK_GAP: u16 = 1;

pub struct AppLayout {
    pub navbar: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_ROWS),
            Constraint::Min(1),
            Constraint::Length(STATUS_ROWS),
        ])
        .split(area);

    AppLayout {
        navbar: chunks[0],
        body: chunks[1],
        status_bar: chunks[2],
    }
}

/// Width and row count of the scrollable body for a terminal size.
pub fn body_size(width: u16, height: u16) -> (u16, usize) {
    let rows = height.saturating_sub(NAV_ROWS + STATUS_ROWS).max(1);
    (width, rows as usize)
}

/// Text row inside the nav bar's border.
fn nav_inner(navbar: Rect) -> Rect {
    Rect::new(
        navbar.x + 1,
        navbar.y + 1,
        navbar.width.saturating_sub(2),
        navbar.height.saturating_sub(2).min(1),
    )
}

/// Click targets of the inline nav links, after the brand.
pub fn nav_link_rects(navbar: Rect, brand: &str, labels: &[&str]) -> Vec<Rect> {
    let inner = nav_inner(navbar);
    let right = inner.x + inner.width;
    let mut x = inner.x + 1 + brand.width() as u16 + 3;
    let mut rects = Vec::with_capacity(labels.len());
    for label in labels {
        let w = label.width() as u16 + 2;
        let clipped = w.min(right.saturating_sub(x));
        rects.push(Rect::new(x.min(right), inner.y, clipped, inner.height));
        x = x.saturating_add(w + LINK_GAP);
    }
    rects
}

/// The `☰` toggle at the right end of a compact nav bar.
pub fn menu_toggle_rect(navbar: Rect) -> Rect {
    let inner = nav_inner(navbar);
    let w = 3.min(inner.width);
    Rect::new(inner.x + inner.width - w, inner.y, w, inner.height)
}

/// Slide-in panel on the right of the body; one row per link.
pub fn menu_panel_rect(body: Rect, links: usize) -> Rect {
    let width = MENU_PANEL_WIDTH.min(body.width);
    let height = (links as u16 + 2).min(body.height);
    Rect::new(body.x + body.width - width, body.y, width, height)
}

pub fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_nav_and_status() {
        let l = compute_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(l.navbar.height, NAV_ROWS);
        assert_eq!(l.status_bar.y, 29);
        assert_eq!(l.body.height as usize, body_size(100, 30).1);
    }

    #[test]
    fn test_nav_links_are_laid_left_to_right() {
        let navbar = Rect::new(0, 0, 100, 3);
        let rects = nav_link_rects(navbar, "Name", &["Início", "Sobre"]);
        assert_eq!(rects[0], Rect::new(9, 1, 8, 1));
        assert_eq!(rects[1].x, 18);
        assert!(contains(rects[1], 20, 1));
        assert!(!contains(rects[1], 20, 0));
    }

    #[test]
    fn test_menu_geometry() {
        let navbar = Rect::new(0, 0, 60, 3);
        assert_eq!(menu_toggle_rect(navbar), Rect::new(56, 1, 3, 1));
        let panel = menu_panel_rect(Rect::new(0, 3, 60, 20), 4);
        assert_eq!(panel, Rect::new(32, 3, 28, 6));
    }
}
