//! End-to-end scenarios over the core controllers with in-memory markup.

use std::collections::HashMap;

use showcase_core::modal::testing::RecordingView;
use showcase_core::{
    Card, CardElement, CardPart, Categorized, Filter, FilterPager, MediaKind, ModalController,
    ModalKey, NavState, Opened, Result, ShowcaseConfig,
};

#[derive(Default)]
struct Markup {
    attrs: HashMap<&'static str, &'static str>,
    title: Option<&'static str>,
    image: Option<&'static str>,
}

impl Markup {
    fn new(title: &'static str) -> Self {
        Markup {
            title: Some(title),
            ..Default::default()
        }
    }

    fn attr(mut self, name: &'static str, value: &'static str) -> Self {
        self.attrs.insert(name, value);
        self
    }
}

impl CardElement for Markup {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attrs.get(name).map(|v| v.to_string())
    }

    fn text(&self, part: CardPart) -> Result<Option<String>> {
        Ok(match part {
            CardPart::Title => self.title.map(str::to_string),
            _ => None,
        })
    }

    fn tag_texts(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn primary_image(&self) -> Result<Option<String>> {
        Ok(self.image.map(str::to_string))
    }
}

impl Categorized for Markup {
    fn category(&self) -> Option<&str> {
        self.attrs.get("data-category").copied()
    }
}

#[test]
fn scenario_a_gallery_steps_onto_a_video() {
    let card = Markup::new("Reel").attr("data-gallery", "a.jpg,b.mp4,c.jpg");
    let mut view = RecordingView::default();
    let mut modal = ModalController::new(ShowcaseConfig::default());

    assert_eq!(modal.open(&mut view, &card), Opened::Full);
    assert_eq!(modal.navigate(&mut view, 1), Ok(true));

    let current = modal.gallery().current().unwrap();
    assert_eq!(current.url, "b.mp4");
    assert_eq!(current.kind, MediaKind::Video);
    assert_eq!(view.media.as_ref(), Some(current));
    assert_eq!(view.nav, NavState { has_prev: true, has_next: true });
}

#[test]
fn scenario_b_single_image_disables_navigation() {
    let mut card = Markup::new("Poster");
    card.image = Some("https://site.test/img/poster.jpg");
    let mut view = RecordingView::default();
    let mut modal = ModalController::new(ShowcaseConfig::default());

    modal.open(&mut view, &card);
    assert_eq!(modal.gallery().len(), 1);
    assert_eq!(view.nav, NavState::DISABLED);
    assert_eq!(view.media.as_ref().map(|m| m.kind), Some(MediaKind::Image));
}

#[test]
fn scenario_c_empty_category_is_an_empty_page() {
    let cards = vec![
        Markup::new("One").attr("data-category", "web"),
        Markup::new("Two").attr("data-category", "design"),
    ];
    let mut pager = FilterPager::new(cards, Filter::All);
    pager.set_filter(Filter::parse("game"));

    assert!(pager.visible_page().is_empty());
    assert_eq!(pager.nav(), NavState::DISABLED);
    assert!(!pager.next_page());
    assert!(!pager.prev_page());
}

#[test]
fn scenario_d_labelled_and_bare_links() {
    let card = Markup::new("Docs site").attr("data-links", "Docs: https://x.test, https://y.test");
    let parsed = Card::read(&card, "View Link").unwrap();
    assert_eq!(parsed.links.len(), 2);
    assert_eq!(parsed.links[0].label, "Docs");
    assert_eq!(parsed.links[0].href, "https://x.test");
    assert_eq!(parsed.links[1].label, "View Link");
    assert_eq!(parsed.links[1].href, "https://y.test");
}

#[test]
fn scenario_e_tab_on_last_wraps_to_first() {
    let card = Markup::new("Trap").attr("data-gallery", "a.jpg,b.jpg");
    let mut view = RecordingView {
        ring: vec!["close", "repo-link", "prev", "next"],
        ..Default::default()
    };
    let mut modal = ModalController::new(ShowcaseConfig::default());
    modal.open(&mut view, &card);
    view.focused = Some("next");

    let suppressed = modal
        .handle_key(&mut view, ModalKey::from_key("Tab", false))
        .unwrap();
    assert!(suppressed);
    assert_eq!(view.focused, Some("close"));
}
