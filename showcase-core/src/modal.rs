//! Modal detail viewer: open/close state machine, gallery navigation and the
//! keyboard contract, rendered through a [`ModalView`].

use crate::card::{Card, CardElement, Link};
use crate::config::ShowcaseConfig;
use crate::constants::FALLBACK_IMAGE_ALT;
use crate::error::{Result, ShowcaseError};
use crate::focus::{FocusScope, trap_target};
use crate::gallery::Gallery;
use crate::media::MediaItem;
use crate::nav::NavState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaField {
    Date,
    Time,
    Venue,
}

/// Render surface for the modal region.
///
/// Content setters may fail on broken markup. Visibility, scroll lock,
/// focus and video release cannot, so the modal can always be closed.
pub trait ModalView: FocusScope {
    fn set_title(&mut self, title: &str) -> Result<()>;
    fn set_overview(&mut self, text: &str) -> Result<()>;
    fn set_technologies(&mut self, names: &[String]) -> Result<()>;
    /// `None` hides the row.
    fn set_meta(&mut self, field: MetaField, value: Option<&str>) -> Result<()>;
    fn set_category_badge(&mut self, label: Option<&str>) -> Result<()>;
    fn set_status_badge(&mut self, text: Option<&str>) -> Result<()>;
    /// An empty slice hides the links section.
    fn set_links(&mut self, links: &[Link]) -> Result<()>;
    /// `None` clears the media region.
    fn show_media(&mut self, item: Option<&MediaItem>, alt: &str) -> Result<()>;
    fn set_gallery_nav(&mut self, nav: NavState);
    fn set_visible(&mut self, visible: bool);
    fn lock_scroll(&mut self, locked: bool);
    fn focus_close(&mut self);
    /// Pause and detach any video so it stops loading and playing.
    fn release_video(&mut self);
}

/// Keys the modal reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKey {
    Escape,
    Prev,
    Next,
    Tab { backwards: bool },
    Other,
}

impl ModalKey {
    /// Map a `KeyboardEvent.key` value plus the Shift state.
    pub fn from_key(key: &str, shift: bool) -> Self {
        match key {
            "Escape" | "Esc" => ModalKey::Escape,
            "ArrowLeft" => ModalKey::Prev,
            "ArrowRight" => ModalKey::Next,
            "Tab" => ModalKey::Tab { backwards: shift },
            _ => ModalKey::Other,
        }
    }
}

/// How an `open` went.
#[derive(Debug, PartialEq, Eq)]
pub enum Opened {
    Full,
    /// Markup lookup failed; only title and overview were shown.
    Degraded(ShowcaseError),
}

#[derive(Debug, Default)]
pub struct ModalController {
    state: ModalState,
    gallery: Gallery,
    title: String,
    last_card: Option<Card>,
    config: ShowcaseConfig,
}

impl ModalController {
    pub fn new(config: ShowcaseConfig) -> Self {
        ModalController {
            config,
            ..Default::default()
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    /// The last card that opened without degradation.
    pub fn last_card(&self) -> Option<&Card> {
        self.last_card.as_ref()
    }

    pub fn last_card_json(&self) -> Option<String> {
        self.last_card
            .as_ref()
            .and_then(|c| serde_json::to_string(c).ok())
    }

    /// Read the card, fill every region and show the modal.
    ///
    /// Never leaves the modal unopened: on a lookup failure the modal still
    /// opens with title and overview only and the error is returned.
    pub fn open<V: ModalView>(&mut self, view: &mut V, el: &impl CardElement) -> Opened {
        let outcome = match self.render_card(view, el) {
            Ok(card) => {
                self.last_card = Some(card);
                Opened::Full
            }
            Err(err) => {
                self.render_fallback(view, el);
                Opened::Degraded(err)
            }
        };
        view.set_visible(true);
        view.lock_scroll(true);
        view.focus_close();
        self.state = ModalState::Open;
        outcome
    }

    fn render_card<V: ModalView>(&mut self, view: &mut V, el: &impl CardElement) -> Result<Card> {
        let card = Card::read(el, &self.config.default_link_label)?;
        self.title = card.title.clone();
        self.gallery.build_from_card(&card);

        view.set_title(&card.title)?;
        view.set_overview(&card.overview)?;
        view.set_technologies(&card.technologies)?;
        view.set_meta(MetaField::Date, card.display_date())?;
        view.set_meta(MetaField::Time, card.meta.time.as_deref())?;
        view.set_meta(MetaField::Venue, card.meta.venue.as_deref())?;
        let label = card
            .category
            .as_deref()
            .and_then(|c| self.config.category_label(c));
        view.set_category_badge(label)?;
        view.set_status_badge(card.status.as_deref())?;
        view.set_links(&card.links)?;
        self.render_media(view)?;
        Ok(card)
    }

    // Best effort: a second failure here is dropped so the modal still opens.
    fn render_fallback<V: ModalView>(&mut self, view: &mut V, el: &impl CardElement) {
        let card = Card::fallback(el);
        self.title = card.title.clone();
        self.gallery.clear();
        let _ = view.set_title(&card.title);
        let _ = view.set_overview(&card.overview);
        let _ = view.set_technologies(&[]);
        let _ = view.set_links(&[]);
        view.release_video();
        let _ = view.show_media(None, FALLBACK_IMAGE_ALT);
        view.set_gallery_nav(NavState::DISABLED);
    }

    fn render_media<V: ModalView>(&self, view: &mut V) -> Result<()> {
        let alt = if self.title.is_empty() {
            FALLBACK_IMAGE_ALT
        } else {
            self.title.as_str()
        };
        view.set_gallery_nav(self.gallery.nav());
        view.show_media(self.gallery.current(), alt)
    }

    pub fn close<V: ModalView>(&mut self, view: &mut V) {
        if !self.is_open() {
            return;
        }
        view.set_visible(false);
        view.lock_scroll(false);
        view.release_video();
        self.gallery.clear();
        self.state = ModalState::Closed;
    }

    /// Step through the gallery. Ignored while closed or at a boundary.
    pub fn navigate<V: ModalView>(&mut self, view: &mut V, delta: isize) -> Result<bool> {
        if !self.is_open() || !self.gallery.advance(delta) {
            return Ok(false);
        }
        self.render_media(view)?;
        Ok(true)
    }

    /// Apply a key press. `Ok(true)` means the default action must be
    /// suppressed.
    pub fn handle_key<V: ModalView>(&mut self, view: &mut V, key: ModalKey) -> Result<bool> {
        if !self.is_open() {
            return Ok(false);
        }
        match key {
            ModalKey::Escape => {
                self.close(view);
                Ok(false)
            }
            ModalKey::Prev => self.navigate(view, -1).map(|_| true),
            ModalKey::Next => self.navigate(view, 1).map(|_| true),
            ModalKey::Tab { backwards } => {
                let focusables = view.focusables();
                let active = view.active_within();
                match trap_target(&focusables, active.as_ref(), backwards) {
                    Some(i) => {
                        view.focus(&focusables[i]);
                        Ok(true)
                    }
                    None => Ok(false),
                }
            }
            ModalKey::Other => Ok(false),
        }
    }
}

/// A recording [`ModalView`] for tests, here and in `tests/`.
#[cfg(any(test, feature = "testing"))]
pub mod testing {
    use super::*;

    #[derive(Debug, Default)]
    pub struct RecordingView {
        pub title: String,
        pub overview: String,
        pub technologies: Vec<String>,
        pub date: Option<String>,
        pub time: Option<String>,
        pub venue: Option<String>,
        pub category_badge: Option<String>,
        pub status_badge: Option<String>,
        pub links: Vec<Link>,
        pub media: Option<MediaItem>,
        pub alt: String,
        pub nav: NavState,
        pub visible: bool,
        pub scroll_locked: bool,
        pub video_released: usize,
        /// Focus ring inside the modal content.
        pub ring: Vec<&'static str>,
        /// Currently focused element; `None` when outside the modal.
        pub focused: Option<&'static str>,
        /// Make `set_links` fail, simulating a missing links container.
        pub broken_links: bool,
        /// Make `show_media` fail for videos.
        pub broken_video: bool,
    }

    impl FocusScope for RecordingView {
        type Target = &'static str;

        fn focusables(&self) -> Vec<&'static str> {
            self.ring.clone()
        }

        fn active_within(&self) -> Option<&'static str> {
            self.focused.filter(|f| self.ring.contains(f))
        }

        fn focus(&mut self, target: &&'static str) {
            self.focused = Some(*target);
        }
    }

    impl ModalView for RecordingView {
        fn set_title(&mut self, title: &str) -> Result<()> {
            self.title = title.to_string();
            Ok(())
        }

        fn set_overview(&mut self, text: &str) -> Result<()> {
            self.overview = text.to_string();
            Ok(())
        }

        fn set_technologies(&mut self, names: &[String]) -> Result<()> {
            self.technologies = names.to_vec();
            Ok(())
        }

        fn set_meta(&mut self, field: MetaField, value: Option<&str>) -> Result<()> {
            let value = value.map(str::to_string);
            match field {
                MetaField::Date => self.date = value,
                MetaField::Time => self.time = value,
                MetaField::Venue => self.venue = value,
            }
            Ok(())
        }

        fn set_category_badge(&mut self, label: Option<&str>) -> Result<()> {
            self.category_badge = label.map(str::to_string);
            Ok(())
        }

        fn set_status_badge(&mut self, text: Option<&str>) -> Result<()> {
            self.status_badge = text.map(str::to_string);
            Ok(())
        }

        fn set_links(&mut self, links: &[Link]) -> Result<()> {
            if self.broken_links && !links.is_empty() {
                return Err(ShowcaseError::MissingElement(".modal-links".into()));
            }
            self.links = links.to_vec();
            Ok(())
        }

        fn show_media(&mut self, item: Option<&MediaItem>, alt: &str) -> Result<()> {
            if self.broken_video && item.is_some_and(MediaItem::is_video) {
                return Err(ShowcaseError::MissingElement(".modal-video video".into()));
            }
            self.media = item.cloned();
            self.alt = alt.to_string();
            Ok(())
        }

        fn set_gallery_nav(&mut self, nav: NavState) {
            self.nav = nav;
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }

        fn lock_scroll(&mut self, locked: bool) {
            self.scroll_locked = locked;
        }

        fn focus_close(&mut self) {
            self.focused = Some("close");
        }

        fn release_video(&mut self) {
            self.video_released += 1;
        }
    }
}
