//! Category filter plus fixed-size pagination over the card grid.

use crate::constants::{ALL_FILTER, PAGE_SIZE};
use crate::nav::NavState;

/// Anything the grid can filter by category.
pub trait Categorized {
    fn category(&self) -> Option<&str>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Filter for a tab's `data-filter` value; blank or `all` means no filter.
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.is_empty() || tag == ALL_FILTER {
            Filter::All
        } else {
            Filter::Category(tag.to_string())
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(want) => category == Some(want.as_str()),
        }
    }
}

/// Pick the tab that starts active: the first one that is not `all`.
///
/// Returns `None` when every tab is `all` (or there are none), in which
/// case the grid starts unfiltered and tab classes are left untouched.
pub fn initial_tab<'a, I>(tags: I) -> Option<(usize, Filter)>
where
    I: IntoIterator<Item = &'a str>,
{
    tags.into_iter()
        .enumerate()
        .find(|(_, tag)| tag.trim() != ALL_FILTER)
        .map(|(i, tag)| (i, Filter::parse(tag)))
}

/// Filter and page state over a fixed card set.
///
/// `page` is 1-based and stays within `1..=total_pages()` after every
/// mutation.
#[derive(Clone, Debug)]
pub struct FilterPager<T> {
    cards: Vec<T>,
    filter: Filter,
    page: usize,
}

impl<T: Categorized> FilterPager<T> {
    pub fn new(cards: Vec<T>, filter: Filter) -> Self {
        FilterPager {
            cards,
            filter,
            page: 1,
        }
    }

    pub fn cards(&self) -> &[T] {
        &self.cards
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.page = 1;
    }

    /// Replace the card set, keeping the page clamped.
    pub fn set_cards(&mut self, cards: Vec<T>) {
        self.cards = cards;
        self.clamp();
    }

    /// Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        self.step(1)
    }

    pub fn prev_page(&mut self) -> bool {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> bool {
        let before = self.page;
        self.page = self.page.saturating_add_signed(delta);
        self.clamp();
        self.page != before
    }

    fn clamp(&mut self) {
        self.page = self.page.clamp(1, self.total_pages());
    }

    pub fn filtered(&self) -> impl Iterator<Item = &T> {
        self.cards
            .iter()
            .filter(|c| self.filter.matches(c.category()))
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().count()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_len().div_ceil(PAGE_SIZE).max(1)
    }

    pub fn visible_page(&self) -> Vec<&T> {
        self.filtered()
            .skip((self.page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    pub fn nav(&self) -> NavState {
        NavState {
            has_prev: self.page > 1,
            has_next: self.page < self.total_pages(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tile(&'static str, &'static str);

    impl Categorized for Tile {
        fn category(&self) -> Option<&str> {
            Some(self.1)
        }
    }

    fn tiles() -> Vec<Tile> {
        vec![
            Tile("a", "web"),
            Tile("b", "design"),
            Tile("c", "web"),
            Tile("d", "web"),
            Tile("e", "3d"),
            Tile("f", "web"),
            Tile("g", "design"),
        ]
    }

    fn names(p: &FilterPager<Tile>) -> Vec<&'static str> {
        p.visible_page().into_iter().map(|t| t.0).collect()
    }

    #[test]
    fn pages_through_a_category() {
        let mut p = FilterPager::new(tiles(), Filter::parse("web"));
        assert_eq!(p.total_pages(), 2);
        assert_eq!(names(&p), vec!["a", "c", "d"]);
        assert_eq!(p.nav(), NavState { has_prev: false, has_next: true });

        assert!(p.next_page());
        assert_eq!(names(&p), vec!["f"]);
        assert_eq!(p.nav(), NavState { has_prev: true, has_next: false });

        assert!(!p.next_page());
        assert_eq!(p.current_page(), 2);
    }

    #[test]
    fn prev_on_first_page_is_a_noop() {
        let mut p = FilterPager::new(tiles(), Filter::All);
        assert!(!p.prev_page());
        assert_eq!(p.current_page(), 1);
        assert_eq!(names(&p), vec!["a", "b", "c"]);
    }

    #[test]
    fn set_filter_resets_page() {
        let mut p = FilterPager::new(tiles(), Filter::All);
        p.next_page();
        p.next_page();
        assert_eq!(p.current_page(), 3);
        p.set_filter(Filter::parse("design"));
        assert_eq!(p.current_page(), 1);
        assert_eq!(names(&p), vec!["b", "g"]);
    }

    #[test]
    fn empty_category_disables_both_controls() {
        let p = FilterPager::new(tiles(), Filter::parse("game"));
        assert!(p.visible_page().is_empty());
        assert_eq!(p.total_pages(), 1);
        assert_eq!(p.nav(), NavState::DISABLED);
    }

    #[test]
    fn shrinking_the_card_set_clamps_the_page() {
        let mut p = FilterPager::new(tiles(), Filter::All);
        p.next_page();
        p.next_page();
        p.set_cards(tiles().into_iter().take(4).collect());
        assert_eq!(p.current_page(), 2);
        assert_eq!(names(&p), vec!["d"]);
    }

    #[test]
    fn initial_tab_skips_all() {
        assert_eq!(
            initial_tab(["all", "web", "design"]),
            Some((1, Filter::Category("web".into())))
        );
        assert_eq!(initial_tab(["all"]), None);
        assert_eq!(
            initial_tab([" all ", "design"]),
            Some((1, Filter::Category("design".into())))
        );
        assert_eq!(initial_tab(std::iter::empty::<&str>()), None);
    }

    #[test]
    fn blank_tag_means_all() {
        assert_eq!(Filter::parse(""), Filter::All);
        assert_eq!(Filter::parse("all"), Filter::All);
        assert!(Filter::All.matches(None));
        assert!(!Filter::parse("web").matches(None));
    }
}
