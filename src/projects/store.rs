//! Project list plus the visitor's current filter/sort selection.
//!
//! Derivation is always filter-then-sort and never touches the display, so
//! the visible list can be tested without a terminal.

use crate::projects::project::Project;
use std::fmt;

/// Category selector. `"all"` is the catch-all selector value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn from_selector(selector: &str) -> Self {
        if selector == "all" {
            Filter::All
        } else {
            Filter::Category(selector.to_string())
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => project.category == *c,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Category(c) => f.write_str(c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Recent,
    Stars,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Recent, SortKey::Stars];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Recent => "recent",
            SortKey::Stars => "stars",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortKey::Recent => SortKey::Stars,
            SortKey::Stars => SortKey::Recent,
        }
    }
}

/// Items matching `filter`, in input order.
pub fn filter(projects: &[Project], filter: &Filter) -> Vec<Project> {
    projects.iter().filter(|p| filter.matches(p)).cloned().collect()
}

/// Descending by the chosen key. `sort_by` is stable, so ties keep their
/// relative input order.
pub fn sort(mut projects: Vec<Project>, key: SortKey) -> Vec<Project> {
    match key {
        SortKey::Recent => projects.sort_by(|a, b| b.recency_key().cmp(&a.recency_key())),
        SortKey::Stars => projects.sort_by(|a, b| b.stars.cmp(&a.stars)),
    }
    projects
}

#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    current_filter: Filter,
    current_sort: SortKey,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with freshly fetched data.
    pub fn load(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    /// Data source failure: nothing to show.
    pub fn fail(&mut self) {
        self.projects.clear();
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn current_filter(&self) -> &Filter {
        &self.current_filter
    }

    pub fn current_sort(&self) -> SortKey {
        self.current_sort
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.current_filter = filter;
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.current_sort = key;
    }

    /// The visible list for the current selection.
    pub fn derive(&self) -> Vec<Project> {
        sort(filter(&self.projects, &self.current_filter), self.current_sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, category: &str, stars: u32, updated_at: Option<&str>) -> Project {
        Project {
            title: title.into(),
            category: category.into(),
            stars,
            updated_at: updated_at.map(String::from),
            ..Default::default()
        }
    }

    fn titles(list: &[Project]) -> Vec<&str> {
        list.iter().map(|p| p.title.as_str()).collect()
    }

    fn sample() -> Vec<Project> {
        vec![
            project("api", "Back-end", 4, Some("2023-05-01")),
            project("site", "Web", 9, Some("2024-02-01")),
            project("bot", "Automação", 0, None),
            project("blog", "Web", 4, Some("garbage")),
            project("queue", "Back-end", 9, Some("2022-01-01")),
        ]
    }

    #[test]
    fn test_filter_all_keeps_order() {
        let list = sample();
        assert_eq!(titles(&filter(&list, &Filter::All)), vec!["api", "site", "bot", "blog", "queue"]);
    }

    #[test]
    fn test_filter_by_category() {
        let list = sample();
        let web = filter(&list, &Filter::from_selector("Web"));
        assert_eq!(titles(&web), vec!["site", "blog"]);
        assert!(filter(&list, &Filter::from_selector("Mobile")).is_empty());
    }

    #[test]
    fn test_filter_then_sort_is_a_permutation() {
        let list = sample();
        for selector in ["all", "Web", "Back-end", "Automação", "Nope"] {
            let f = Filter::from_selector(selector);
            for key in SortKey::ALL {
                let derived = sort(filter(&list, &f), key);
                let expected: Vec<&Project> = list.iter().filter(|p| f.matches(p)).collect();
                assert_eq!(derived.len(), expected.len());
                for p in expected {
                    assert_eq!(derived.iter().filter(|d| *d == p).count(), 1);
                }
            }
        }
    }

    #[test]
    fn test_sort_recent_descending_with_missing_dates_last() {
        let sorted = sort(sample(), SortKey::Recent);
        // "bot" (missing) and "blog" (unparseable) tie at epoch zero and keep input order.
        assert_eq!(titles(&sorted), vec!["site", "api", "queue", "bot", "blog"]);
    }

    #[test]
    fn test_sort_stars_descending_and_stable() {
        let sorted = sort(sample(), SortKey::Stars);
        assert_eq!(titles(&sorted), vec!["site", "queue", "api", "blog", "bot"]);
    }

    #[test]
    fn test_web_scenario() {
        let list = vec![
            project("A", "Web", 3, Some("2024-01-01")),
            project("B", "Web", 10, Some("2023-01-01")),
        ];
        let web = filter(&list, &Filter::from_selector("Web"));
        assert_eq!(titles(&sort(web.clone(), SortKey::Stars)), vec!["B", "A"]);
        assert_eq!(titles(&sort(web, SortKey::Recent)), vec!["A", "B"]);
    }

    #[test]
    fn test_store_selection_changes_rederive() {
        let mut store = ProjectStore::new();
        store.load(sample());
        assert_eq!(store.current_filter(), &Filter::All);
        assert_eq!(store.current_sort(), SortKey::Recent);

        store.set_filter(Filter::from_selector("Back-end"));
        assert_eq!(titles(&store.derive()), vec!["api", "queue"]);

        // Sort change keeps the filter.
        store.set_sort(SortKey::Stars);
        assert_eq!(titles(&store.derive()), vec!["queue", "api"]);

        // Filter change keeps the sort.
        store.set_filter(Filter::All);
        assert_eq!(titles(&store.derive())[..2], ["site", "queue"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut store = ProjectStore::new();
        let p = project("twin", "Web", 1, None);
        store.load(vec![p.clone(), p]);
        assert_eq!(store.derive().len(), 2);
    }

    #[test]
    fn test_fail_empties_list() {
        let mut store = ProjectStore::new();
        store.load(sample());
        store.fail();
        assert!(store.derive().is_empty());
    }

    #[test]
    fn test_sort_key_toggles() {
        assert_eq!(SortKey::Recent.toggled(), SortKey::Stars);
        assert_eq!(SortKey::Stars.toggled(), SortKey::Recent);
    }
}
