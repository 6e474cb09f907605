//! Document geometry for the scrollable page.
//!
//! The page is laid out in terminal rows; everything that compares against
//! scroll offsets (nav thresholds, reveal margins) works in pixels, one row
//! being `ui.row_height_px`.

use crate::config::model::{AppConfig, SectionKind};
use crate::projects::render::GridContent;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Rows taken by a card, borders included.
pub const CARD_ROWS: usize = 8;
pub const CARD_GAP_ROWS: usize = 1;
pub const CARD_GAP_COLS: u16 = 2;
/// Left/right page margin in columns.
pub const PAGE_MARGIN: u16 = 2;
const EMPTY_ROWS: usize = 3;

/// Something on the page that can be revealed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    Heading(String),
    Card { generation: u64, index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub top: usize,
    pub height: usize,
}

impl RowSpan {
    pub fn to_bounds(self, row_height_px: f64) -> Bounds {
        Bounds {
            top: self.top as f64 * row_height_px,
            height: self.height as f64 * row_height_px,
        }
    }
}

/// Vertical extent in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone)]
pub struct SectionBlock {
    pub id: String,
    pub label: String,
    pub kind: SectionKind,
    pub span: RowSpan,
    /// Row (relative to the section) of the revealable heading.
    pub heading_row: usize,
    /// Pre-wrapped body text.
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Absolute row of the filter/sort control bar.
    pub controls_row: usize,
    /// Absolute row where cards start.
    pub top: usize,
    pub columns: usize,
    pub card_width: u16,
    pub rows: usize,
}

impl GridLayout {
    /// Absolute row span and column index of card `index`.
    pub fn card_cell(&self, index: usize) -> (RowSpan, usize) {
        let row = index / self.columns;
        let col = index % self.columns;
        (
            RowSpan {
                top: self.top + row * (CARD_ROWS + CARD_GAP_ROWS),
                height: CARD_ROWS,
            },
            col,
        )
    }
}

#[derive(Debug, Clone)]
pub struct PageLayout {
    pub sections: Vec<SectionBlock>,
    pub grid: Option<GridLayout>,
    pub generation: u64,
    pub card_count: usize,
    pub total_rows: usize,
}

impl PageLayout {
    /// Lay out every configured section. The hero is at least one viewport
    /// tall.
    pub fn compute(
        config: &AppConfig,
        width: u16,
        viewport_rows: usize,
        grid: &GridContent,
        generation: u64,
    ) -> Self {
        let content_width = width.saturating_sub(PAGE_MARGIN * 2).max(1) as usize;
        let mut sections = Vec::with_capacity(config.sections.len());
        let mut grid_layout = None;
        let mut row = 0usize;

        for section in &config.sections {
            let top = row;
            let mut lines = Vec::new();
            let heading_row;
            let height;

            match section.kind {
                SectionKind::Hero => {
                    // blank, name, tagline..., blank, counter, blank
                    heading_row = 1;
                    lines = wrap_text(&config.profile.tagline, content_width);
                    height = (1 + 1 + lines.len() + 1 + 1 + 1).max(viewport_rows);
                }
                SectionKind::About => {
                    heading_row = 0;
                    for paragraph in &config.profile.about {
                        if !lines.is_empty() {
                            lines.push(String::new());
                        }
                        lines.extend(wrap_text(paragraph, content_width));
                    }
                    height = 2 + lines.len() + 1;
                }
                SectionKind::Contact => {
                    heading_row = 0;
                    for contact in &config.profile.contacts {
                        lines.extend(wrap_text(
                            &format!("{}: {}", contact.label, contact.url),
                            content_width,
                        ));
                    }
                    height = 2 + lines.len() + 1;
                }
                SectionKind::Projects => {
                    heading_row = 0;
                    let columns = grid_columns(content_width as u16, config.ui.card_min_width);
                    let grid_rows = grid_rows(grid, columns);
                    let card_width = card_width(content_width as u16, columns);
                    // The first projects section hosts the grid; later ones are inert.
                    if grid_layout.is_none() {
                        grid_layout = Some(GridLayout {
                            controls_row: top + 2,
                            top: top + 4,
                            columns,
                            card_width,
                            rows: grid_rows,
                        });
                    }
                    height = 2 + 1 + 1 + grid_rows + 1;
                }
            }

            sections.push(SectionBlock {
                id: section.id.clone(),
                label: section.label.clone(),
                kind: section.kind,
                span: RowSpan { top, height },
                heading_row,
                lines,
            });
            row += height;
        }

        Self {
            sections,
            grid: grid_layout,
            generation,
            card_count: grid.cards().len(),
            total_rows: row,
        }
    }

    pub fn section(&self, id: &str) -> Option<&SectionBlock> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn has_kind(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|s| s.kind == kind)
    }

    /// Row span of a revealable element, or `None` if it is not on the page
    /// (unknown heading, stale card generation).
    pub fn element_span(&self, id: &ElementId) -> Option<RowSpan> {
        match id {
            ElementId::Heading(section) => self.section(section).map(|s| RowSpan {
                top: s.span.top + s.heading_row,
                height: 1,
            }),
            ElementId::Card { generation, index } => {
                if *generation != self.generation || *index >= self.card_count {
                    return None;
                }
                self.grid.map(|g| g.card_cell(*index).0)
            }
        }
    }

    pub fn heading_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.sections.iter().map(|s| ElementId::Heading(s.id.clone()))
    }

    /// Largest useful scroll offset for a viewport of `viewport_rows`.
    pub fn max_scroll(&self, viewport_rows: usize) -> usize {
        self.total_rows.saturating_sub(viewport_rows)
    }
}

pub fn grid_columns(content_width: u16, card_min_width: u16) -> usize {
    let min = card_min_width.max(1);
    let span = content_width.saturating_add(CARD_GAP_COLS);
    ((span / min.saturating_add(CARD_GAP_COLS)) as usize).max(1)
}

pub fn card_width(content_width: u16, columns: usize) -> u16 {
    let gaps = CARD_GAP_COLS * (columns as u16).saturating_sub(1);
    (content_width.saturating_sub(gaps) / columns.max(1) as u16).max(1)
}

fn grid_rows(grid: &GridContent, columns: usize) -> usize {
    match grid {
        GridContent::Pending => 1,
        GridContent::Empty { .. } => EMPTY_ROWS,
        GridContent::Fallback(_) => CARD_ROWS,
        GridContent::Cards(cards) => {
            let rows = cards.len().div_ceil(columns.max(1));
            rows * CARD_ROWS + rows.saturating_sub(1) * CARD_GAP_ROWS
        }
    }
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_w = 0usize;

    for word in text.split_whitespace() {
        let w = word.width();
        if current_w > 0 && current_w + 1 + w > width {
            lines.push(std::mem::take(&mut current));
            current_w = 0;
        }
        if current_w > 0 {
            current.push(' ');
            current_w += 1;
        }
        if w <= width {
            current.push_str(word);
            current_w += w;
            continue;
        }
        for ch in word.chars() {
            let cw = ch.width().unwrap_or(0);
            if current_w + cw > width && current_w > 0 {
                lines.push(std::mem::take(&mut current));
                current_w = 0;
            }
            current.push(ch);
            current_w += cw;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Truncate to `width` display columns, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let cw = ch.width().unwrap_or(0);
        if used + cw + 1 > width {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::AppConfig;
    use crate::projects::render::{Locale, ProjectRenderer};
    use crate::projects::project::Project;

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("a bb ccc", 4), vec!["a bb", "ccc"]);
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_text("ação rápida", 5), vec!["ação", "rápid", "a"]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title", 6), "a lon…");
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(30, 36), 1);
        assert_eq!(grid_columns(74, 36), 2);
        assert_eq!(grid_columns(116, 36), 3);
        assert_eq!(card_width(74, 2), 36);
    }

    #[test]
    fn test_grid_columns_with_huge_min_width() {
        assert_eq!(grid_columns(116, u16::MAX), 1);
        assert_eq!(grid_columns(u16::MAX, 65534), 1);
        assert_eq!(grid_columns(u16::MAX, 36), 1724);
    }

    #[test]
    fn test_sections_stack_in_order() {
        let config = AppConfig::default();
        let layout = PageLayout::compute(&config, 100, 24, &GridContent::Pending, 0);
        assert_eq!(layout.sections.len(), config.sections.len());
        let mut expected_top = 0;
        for s in &layout.sections {
            assert_eq!(s.span.top, expected_top);
            expected_top += s.span.height;
        }
        assert_eq!(layout.total_rows, expected_top);
        assert_eq!(layout.sections[0].span.height, 24);
    }

    #[test]
    fn test_card_spans_follow_generation() {
        let config = AppConfig::default();
        let projects: Vec<Project> = (0..5)
            .map(|i| Project {
                title: format!("p{}", i),
                ..Default::default()
            })
            .collect();
        let grid = ProjectRenderer::new(Locale::EnUs).render(&projects);
        let layout = PageLayout::compute(&config, 80, 24, &grid, 3);
        let g = layout.grid.unwrap();
        assert_eq!(g.columns, 2);

        let first = layout
            .element_span(&ElementId::Card { generation: 3, index: 0 })
            .unwrap();
        let third = layout
            .element_span(&ElementId::Card { generation: 3, index: 2 })
            .unwrap();
        assert_eq!(third.top, first.top + CARD_ROWS + CARD_GAP_ROWS);
        assert!(layout
            .element_span(&ElementId::Card { generation: 2, index: 0 })
            .is_none());
        assert!(layout
            .element_span(&ElementId::Card { generation: 3, index: 5 })
            .is_none());
    }
}
