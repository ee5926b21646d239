//! In-memory filter selections and the visible-website projection.
//!
//! Filter state is ephemeral — it lives for the session and is never
//! persisted. The projection intersects category membership, tag membership
//! (every selected tag must be present), and a lowercase substring match over
//! name, description, and URL.

use crate::catalog::types::Website;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    category_id: Option<i64>,
    tag_ids: Vec<i64>,
    search: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category_id(&self) -> Option<i64> {
        self.category_id
    }

    pub fn tag_ids(&self) -> &[i64] {
        &self.tag_ids
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the category selection.
    pub fn set_category(&mut self, id: Option<i64>) {
        self.category_id = id;
    }

    /// Replace the tag selection wholesale.
    pub fn set_tags(&mut self, ids: Vec<i64>) {
        self.tag_ids = ids;
    }

    /// Toggle a tag id: add it if absent, remove it if present. The order of
    /// the remaining selections is preserved.
    pub fn toggle_tag(&mut self, id: i64) {
        match self.tag_ids.iter().position(|&t| t == id) {
            Some(index) => {
                self.tag_ids.remove(index);
            }
            None => self.tag_ids.push(id),
        }
    }

    /// Set the search text, normalized to lowercase on write.
    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_lowercase();
    }

    /// Restore the default (empty) state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True if the website passes every active selection.
    pub fn matches(&self, website: &Website) -> bool {
        if let Some(id) = self.category_id {
            if !website.category_ids.contains(&id) {
                return false;
            }
        }

        if !self.tag_ids.iter().all(|id| website.tag_ids.contains(id)) {
            return false;
        }

        if !self.search.is_empty() {
            let hit = website.name.to_lowercase().contains(&self.search)
                || website.description.to_lowercase().contains(&self.search)
                || website.url.to_lowercase().contains(&self.search);
            if !hit {
                return false;
            }
        }

        true
    }

    /// The visible projection: every website that matches, in input order.
    pub fn apply<'a>(&self, websites: &'a [Website]) -> Vec<&'a Website> {
        websites.iter().filter(|w| self.matches(w)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(name: &str, url: &str, category_ids: Vec<i64>, tag_ids: Vec<i64>) -> Website {
        Website {
            id: 0,
            name: name.into(),
            url: url.into(),
            icon: Vec::new(),
            icon_mime_type: String::new(),
            description: String::new(),
            api_keys: Vec::new(),
            category_ids,
            tag_ids,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut filter = FilterState::new();

        filter.toggle_tag(3);
        assert_eq!(filter.tag_ids(), &[3]);

        filter.toggle_tag(3);
        assert!(filter.tag_ids().is_empty());
    }

    #[test]
    fn toggle_preserves_order_of_other_selections() {
        let mut filter = FilterState::new();
        filter.set_tags(vec![1, 2, 3, 4]);

        filter.toggle_tag(2);
        assert_eq!(filter.tag_ids(), &[1, 3, 4]);

        filter.toggle_tag(2);
        assert_eq!(filter.tag_ids(), &[1, 3, 4, 2]);
    }

    #[test]
    fn search_is_lowercased_on_write() {
        let mut filter = FilterState::new();
        filter.set_search("ChatGPT");
        assert_eq!(filter.search(), "chatgpt");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut filter = FilterState::new();
        filter.set_category(Some(2));
        filter.set_tags(vec![1, 5]);
        filter.set_search("claude");

        filter.reset();

        assert_eq!(filter, FilterState::default());
    }

    #[test]
    fn category_filter_requires_membership() {
        let mut filter = FilterState::new();
        filter.set_category(Some(2));

        assert!(filter.matches(&site("a", "https://a.dev", vec![1, 2], vec![])));
        assert!(!filter.matches(&site("b", "https://b.dev", vec![1], vec![])));
    }

    #[test]
    fn tag_filter_requires_every_selected_tag() {
        let mut filter = FilterState::new();
        filter.set_tags(vec![1, 4]);

        assert!(filter.matches(&site("a", "https://a.dev", vec![], vec![1, 4, 7])));
        assert!(!filter.matches(&site("b", "https://b.dev", vec![], vec![1])));
    }

    #[test]
    fn search_matches_name_description_or_url() {
        let mut filter = FilterState::new();
        filter.set_search("CLAUDE");

        let mut by_url = site("assistant", "https://claude.ai", vec![], vec![]);
        assert!(filter.matches(&by_url));

        by_url.url = "https://example.com".into();
        assert!(!filter.matches(&by_url));
    }

    #[test]
    fn apply_keeps_input_order() {
        let sites = vec![
            site("one", "https://one.dev", vec![1], vec![]),
            site("two", "https://two.dev", vec![2], vec![]),
            site("three", "https://three.dev", vec![1], vec![]),
        ];
        let mut filter = FilterState::new();
        filter.set_category(Some(1));

        let visible = filter.apply(&sites);
        let names: Vec<&str> = visible.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["one", "three"]);
    }
}
