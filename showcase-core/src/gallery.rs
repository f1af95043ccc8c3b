use crate::card::Card;
use crate::media::MediaItem;
use crate::nav::NavState;

/// Ordered media for the card currently shown in the modal.
///
/// Built fresh on every open and cleared on close. `index` always points
/// at a valid item unless the gallery is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gallery {
    items: Vec<MediaItem>,
    index: usize,
}

impl Gallery {
    pub fn from_card(card: &Card) -> Self {
        let mut gallery = Gallery::default();
        gallery.build_from_card(card);
        gallery
    }

    /// Use the card's declared gallery, else its primary image plus video.
    pub fn build_from_card(&mut self, card: &Card) {
        let urls: Vec<&str> = if !card.gallery.is_empty() {
            card.gallery.iter().map(String::as_str).collect()
        } else {
            card.primary_image
                .iter()
                .chain(card.video.iter())
                .map(String::as_str)
                .collect()
        };
        self.items = urls.into_iter().map(MediaItem::new).collect();
        self.index = 0;
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.index = 0;
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> Option<&MediaItem> {
        self.items.get(self.index)
    }

    /// Move by `delta`, clamped to the ends. Returns whether the index moved.
    pub fn advance(&mut self, delta: isize) -> bool {
        let Some(last) = self.items.len().checked_sub(1) else {
            return false;
        };
        let before = self.index;
        self.index = self.index.saturating_add_signed(delta).min(last);
        self.index != before
    }

    pub fn nav(&self) -> NavState {
        if self.items.len() <= 1 {
            return NavState::DISABLED;
        }
        NavState {
            has_prev: self.index > 0,
            has_next: self.index + 1 < self.items.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;

    fn card_with_gallery(urls: &[&str]) -> Card {
        Card {
            gallery: urls.iter().map(|s| s.to_string()).collect(),
            primary_image: Some("cover.jpg".into()),
            ..Card::default()
        }
    }

    #[test]
    fn declared_gallery_wins() {
        let g = Gallery::from_card(&card_with_gallery(&["a.jpg", "b.mp4", "c.jpg"]));
        assert_eq!(g.len(), 3);
        assert_eq!(g.current().map(|m| m.url.as_str()), Some("a.jpg"));
        assert_eq!(g.items()[1].kind, MediaKind::Video);
    }

    #[test]
    fn falls_back_to_image_and_video() {
        let card = Card {
            primary_image: Some("cover.jpg".into()),
            video: Some("reel.mp4".into()),
            ..Card::default()
        };
        let g = Gallery::from_card(&card);
        let urls: Vec<_> = g.items().iter().map(|m| m.url.as_str()).collect();
        assert_eq!(urls, vec!["cover.jpg", "reel.mp4"]);
    }

    #[test]
    fn no_media_means_empty_and_inert() {
        let mut g = Gallery::from_card(&Card::default());
        assert!(g.is_empty());
        assert!(g.current().is_none());
        assert!(!g.advance(1));
        assert!(!g.advance(-1));
        assert_eq!(g.nav(), NavState::DISABLED);
    }

    #[test]
    fn advance_clamps_at_both_ends() {
        let mut g = Gallery::from_card(&card_with_gallery(&["a.jpg", "b.jpg", "c.jpg"]));
        assert!(!g.advance(-1));
        assert!(g.advance(5));
        assert_eq!(g.index(), 2);
        assert_eq!(g.nav(), NavState { has_prev: true, has_next: false });
        assert!(!g.advance(1));
        assert!(g.advance(-1));
        assert_eq!(g.nav(), NavState { has_prev: true, has_next: true });
    }

    #[test]
    fn rebuild_resets_index() {
        let mut g = Gallery::from_card(&card_with_gallery(&["a.jpg", "b.jpg"]));
        g.advance(1);
        g.build_from_card(&card_with_gallery(&["x.jpg", "y.jpg"]));
        assert_eq!(g.index(), 0);
        assert_eq!(g.current().map(|m| m.url.as_str()), Some("x.jpg"));
    }
}
