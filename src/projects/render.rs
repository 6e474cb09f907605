//! Turns an ordered project list into card view models.
//!
//! The UI draws whatever [`GridContent`] holds; nothing here knows about
//! terminal geometry.

use crate::config::model::FallbackConfig;
use crate::projects::project::{parse_date, Project};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Number of distinct stagger tiers; index 3 and beyond share the last one.
pub const MAX_DELAY_TIER: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    pub fn empty_message(&self) -> &'static str {
        match self {
            Locale::PtBr => "Nenhum projeto encontrado nesta categoria.",
            Locale::EnUs => "No projects found in this category.",
        }
    }

    pub fn loading_message(&self) -> &'static str {
        match self {
            Locale::PtBr => "Carregando projetos…",
            Locale::EnUs => "Loading projects…",
        }
    }

    pub fn unavailable_message(&self) -> &'static str {
        match self {
            Locale::PtBr => "Dados dos projetos indisponíveis",
            Locale::EnUs => "Project data unavailable",
        }
    }

    /// Status bar summary of the loaded list and the active controls.
    pub fn status_summary(&self, count: usize, filter: &str, sort: &str) -> String {
        match self {
            Locale::PtBr => format!("{} projetos | filtro: {} | ordem: {}", count, filter, sort),
            Locale::EnUs => format!("{} projects | filter: {} | sort: {}", count, filter, sort),
        }
    }

    pub fn updated_caption(&self) -> &'static str {
        match self {
            Locale::PtBr => "Atualizado em",
            Locale::EnUs => "Updated",
        }
    }

    pub fn repo_label(&self) -> &'static str {
        match self {
            Locale::PtBr => "Ver repositório",
            Locale::EnUs => "View repository",
        }
    }

    pub fn filter_label(&self, selector: &str) -> String {
        match (self, selector) {
            (Locale::PtBr, "all") => "Todos".to_string(),
            (Locale::EnUs, "all") => "All".to_string(),
            _ => selector.to_string(),
        }
    }

    pub fn sort_label(&self, key: crate::projects::store::SortKey) -> &'static str {
        use crate::projects::store::SortKey;
        match (self, key) {
            (Locale::PtBr, SortKey::Recent) => "Recentes",
            (Locale::PtBr, SortKey::Stars) => "Estrelas",
            (Locale::EnUs, SortKey::Recent) => "Recent",
            (Locale::EnUs, SortKey::Stars) => "Stars",
        }
    }

    pub fn projects_caption(&self) -> &'static str {
        match self {
            Locale::PtBr => "projetos publicados",
            Locale::EnUs => "published projects",
        }
    }

    /// Abbreviated month plus year, as a browser prints
    /// `{ month: 'short', year: 'numeric' }`.
    pub fn month_year(&self, date: &DateTime<Utc>) -> String {
        const PT: [&str; 12] = [
            "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.",
            "nov.", "dez.",
        ];
        const EN: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        let month = date.month0() as usize;
        match self {
            Locale::PtBr => format!("{} de {}", PT[month], date.year()),
            Locale::EnUs => format!("{} {}", EN[month], date.year()),
        }
    }
}

/// Extra styling keyed by known category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryStyle {
    Backend,
    Automation,
    Web,
}

impl CategoryStyle {
    pub fn for_category(category: &str) -> Option<Self> {
        match category {
            "Back-end" => Some(CategoryStyle::Backend),
            "Automação" => Some(CategoryStyle::Automation),
            "Web" => Some(CategoryStyle::Web),
            _ => None,
        }
    }
}

/// Outbound repository link. Always opened in a fresh context with no
/// opener handle and no referrer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLink {
    pub href: String,
    pub label: &'static str,
    pub new_context: bool,
    pub noopener: bool,
    pub noreferrer: bool,
}

impl RepoLink {
    fn new(href: &str, locale: Locale) -> Self {
        Self {
            href: href.to_string(),
            label: locale.repo_label(),
            new_context: true,
            noopener: true,
            noreferrer: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub category: String,
    pub category_style: Option<CategoryStyle>,
    /// `None` for the fallback card, which has no stagger class.
    pub delay_tier: Option<u8>,
    pub stars: Option<u32>,
    pub date_label: Option<String>,
    pub link: RepoLink,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridContent {
    /// Nothing rendered yet (data still loading).
    Pending,
    Cards(Vec<Card>),
    Empty { message: &'static str },
    Fallback(Card),
}

impl GridContent {
    pub fn cards(&self) -> &[Card] {
        match self {
            GridContent::Cards(cards) => cards,
            GridContent::Fallback(card) => std::slice::from_ref(card),
            GridContent::Pending | GridContent::Empty { .. } => &[],
        }
    }
}

pub fn delay_tier(index: usize) -> u8 {
    (index + 1).min(MAX_DELAY_TIER as usize) as u8
}

/// Formatted date label, or `None` when the string does not parse.
pub fn format_date(raw: &str, locale: Locale) -> Option<String> {
    parse_date(raw).map(|d| locale.month_year(&d))
}

pub struct ProjectRenderer {
    locale: Locale,
}

impl ProjectRenderer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn render(&self, projects: &[Project]) -> GridContent {
        if projects.is_empty() {
            return GridContent::Empty {
                message: self.locale.empty_message(),
            };
        }

        let cards = projects
            .iter()
            .enumerate()
            .map(|(index, project)| self.card(project, index))
            .collect();
        GridContent::Cards(cards)
    }

    pub fn render_fallback(&self, fallback: &FallbackConfig) -> GridContent {
        GridContent::Fallback(Card {
            title: fallback.title.clone(),
            description: fallback.description.clone(),
            category: fallback.category.clone(),
            category_style: CategoryStyle::for_category(&fallback.category),
            delay_tier: None,
            stars: None,
            date_label: None,
            link: RepoLink::new(&fallback.repo_url, self.locale),
            technologies: fallback.technologies.clone(),
        })
    }

    fn card(&self, project: &Project, index: usize) -> Card {
        let date_label = project
            .updated_at
            .as_deref()
            .and_then(|raw| format_date(raw, self.locale))
            .map(|label| format!("{} {}", self.locale.updated_caption(), label));

        Card {
            title: project.title.clone(),
            description: project.short_description.clone(),
            category: project.category.clone(),
            category_style: CategoryStyle::for_category(&project.category),
            delay_tier: Some(delay_tier(index)),
            stars: (project.stars > 0).then_some(project.stars),
            date_label,
            link: RepoLink::new(&project.repo_url, self.locale),
            technologies: project.technologies.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, stars: u32, updated_at: Option<&str>) -> Project {
        Project {
            title: title.into(),
            short_description: format!("{} description", title),
            category: "Web".into(),
            technologies: vec!["Rust".into()],
            repo_url: format!("https://example.com/{}", title),
            stars,
            updated_at: updated_at.map(String::from),
        }
    }

    #[test]
    fn test_empty_list_renders_placeholder() {
        let renderer = ProjectRenderer::new(Locale::PtBr);
        assert_eq!(
            renderer.render(&[]),
            GridContent::Empty {
                message: "Nenhum projeto encontrado nesta categoria."
            }
        );
    }

    #[test]
    fn test_cards_keep_order_and_cap_delay_tiers() {
        let renderer = ProjectRenderer::new(Locale::EnUs);
        let list: Vec<_> = (0..6).map(|i| project(&format!("p{}", i), 0, None)).collect();
        let content = renderer.render(&list);
        let cards = content.cards();
        assert_eq!(cards.len(), 6);
        let tiers: Vec<_> = cards.iter().map(|c| c.delay_tier.unwrap()).collect();
        assert_eq!(tiers, vec![1, 2, 3, 4, 4, 4]);
        assert_eq!(cards[5].title, "p5");
    }

    #[test]
    fn test_star_badge_only_when_positive() {
        let renderer = ProjectRenderer::new(Locale::EnUs);
        let content = renderer.render(&[project("none", 0, None), project("some", 5, None)]);
        let cards = content.cards();
        assert_eq!(cards[0].stars, None);
        assert_eq!(cards[1].stars, Some(5));
    }

    #[test]
    fn test_date_label_formatting() {
        let content = ProjectRenderer::new(Locale::PtBr).render(&[
            project("dated", 0, Some("2024-01-15")),
            project("undated", 0, None),
            project("broken", 0, Some("soon")),
        ]);
        let cards = content.cards();
        assert_eq!(cards[0].date_label.as_deref(), Some("Atualizado em jan. de 2024"));
        assert_eq!(cards[1].date_label, None);
        assert_eq!(cards[2].date_label, None);

        assert_eq!(format_date("2023-09-30", Locale::EnUs).as_deref(), Some("Sep 2023"));
    }

    #[test]
    fn test_category_style_lookup() {
        assert_eq!(CategoryStyle::for_category("Back-end"), Some(CategoryStyle::Backend));
        assert_eq!(CategoryStyle::for_category("Automação"), Some(CategoryStyle::Automation));
        assert_eq!(CategoryStyle::for_category("Web"), Some(CategoryStyle::Web));
        assert_eq!(CategoryStyle::for_category("Games"), None);

        let mut odd = project("odd", 0, None);
        odd.category = "Games".into();
        let content = ProjectRenderer::new(Locale::EnUs).render(&[odd]);
        assert_eq!(content.cards()[0].category, "Games");
        assert_eq!(content.cards()[0].category_style, None);
    }

    #[test]
    fn test_links_open_without_opener() {
        let content = ProjectRenderer::new(Locale::EnUs).render(&[project("x", 0, None)]);
        let link = &content.cards()[0].link;
        assert_eq!(link.href, "https://example.com/x");
        assert!(link.new_context && link.noopener && link.noreferrer);
    }

    #[test]
    fn test_empty_technologies_render_no_tags() {
        let mut p = project("bare", 0, None);
        p.technologies.clear();
        let content = ProjectRenderer::new(Locale::EnUs).render(&[p]);
        assert!(content.cards()[0].technologies.is_empty());
    }

    #[test]
    fn test_fallback_card_is_static() {
        let renderer = ProjectRenderer::new(Locale::PtBr);
        let content = renderer.render_fallback(&FallbackConfig::default());
        let cards = content.cards();
        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.title, "Projeto JARVIS");
        assert_eq!(card.category, "Automação");
        assert_eq!(card.category_style, Some(CategoryStyle::Automation));
        assert_eq!(card.technologies, vec!["C#", ".NET", "Home Assistant"]);
        assert_eq!(card.delay_tier, None);
        assert_eq!(card.stars, None);
        assert_eq!(card.date_label, None);
    }
}
