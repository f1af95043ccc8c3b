use showcase_core::{FocusScope, Link, MediaItem, MetaField, ModalView, NavState, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, HtmlVideoElement, Node};

use crate::constants::*;
use crate::utils::{dom_error, select_html, set_disabled, set_shown};

/// One metadata row: the row itself and the element holding its value.
struct MetaRow {
    row: Option<HtmlElement>,
    value: Option<Element>,
}

impl MetaRow {
    fn lookup(root: &Element, field: &str) -> std::result::Result<Self, JsValue> {
        let row_sel = format!(".meta-item[data-field=\"{}\"]", field);
        Ok(MetaRow {
            row: select_html(root, &row_sel)?,
            value: root.query_selector(&format!("{} .meta-value", row_sel))?,
        })
    }
}

/// The modal region in the live document.
///
/// Every sub-region is optional; markup without one simply skips it.
pub struct DomModal {
    document: Document,
    root: Element,
    pub backdrop: Option<Element>,
    pub close_btn: Option<HtmlElement>,
    pub prev_btn: Option<HtmlElement>,
    pub next_btn: Option<HtmlElement>,
    content: Option<Element>,
    image: Option<HtmlImageElement>,
    video_wrap: Option<Element>,
    video: Option<HtmlVideoElement>,
    title: Option<Element>,
    description: Option<Element>,
    date: MetaRow,
    time: MetaRow,
    venue: MetaRow,
    type_badge: Option<HtmlElement>,
    status_badge: Option<HtmlElement>,
    techs: Option<Element>,
    links: Option<Element>,
    links_section: Option<HtmlElement>,
}

impl DomModal {
    pub fn from_document(document: &Document) -> std::result::Result<Option<Self>, JsValue> {
        let Some(root) = document.get_element_by_id(MODAL_ID) else {
            return Ok(None);
        };
        let links = root.query_selector(MODAL_LINKS_SELECTOR)?;
        let links_section = match &links {
            Some(l) => l
                .closest(MODAL_SECTION_SELECTOR)?
                .and_then(|s| s.dyn_into::<HtmlElement>().ok()),
            None => None,
        };
        Ok(Some(DomModal {
            document: document.clone(),
            backdrop: root.query_selector(MODAL_BACKDROP_SELECTOR)?,
            close_btn: select_html(&root, MODAL_CLOSE_SELECTOR)?,
            prev_btn: select_html(&root, MODAL_PREV_SELECTOR)?,
            next_btn: select_html(&root, MODAL_NEXT_SELECTOR)?,
            content: root.query_selector(MODAL_CONTENT_SELECTOR)?,
            image: root
                .query_selector(MODAL_IMAGE_SELECTOR)?
                .and_then(|e| e.dyn_into().ok()),
            video_wrap: root.query_selector(MODAL_VIDEO_WRAP_SELECTOR)?,
            video: root
                .query_selector(MODAL_VIDEO_SELECTOR)?
                .and_then(|e| e.dyn_into().ok()),
            title: root.query_selector(MODAL_TITLE_SELECTOR)?,
            description: root.query_selector(MODAL_DESCRIPTION_SELECTOR)?,
            date: MetaRow::lookup(&root, "date")?,
            time: MetaRow::lookup(&root, "time")?,
            venue: MetaRow::lookup(&root, "venue")?,
            type_badge: select_html(&root, MODAL_TYPE_BADGE_SELECTOR)?,
            status_badge: select_html(&root, MODAL_STATUS_BADGE_SELECTOR)?,
            techs: root.query_selector(MODAL_TECHS_SELECTOR)?,
            links,
            links_section,
            root,
        }))
    }

    fn set_badge(badge: Option<&HtmlElement>, text: Option<&str>) {
        if let Some(badge) = badge {
            badge.set_text_content(Some(text.unwrap_or("")));
            set_shown(badge, text.is_some());
        }
    }

    fn link_element(&self, link: &Link) -> Result<Element> {
        let a = self
            .document
            .create_element("a")
            .map_err(|e| dom_error("create link", e))?;
        for (name, value) in [
            ("href", link.href.as_str()),
            ("target", "_blank"),
            ("rel", "noopener"),
        ] {
            a.set_attribute(name, value)
                .map_err(|e| dom_error("link attribute", e))?;
        }
        let icon = self
            .document
            .create_element("i")
            .map_err(|e| dom_error("create link icon", e))?;
        icon.set_class_name(LINK_ICON_CLASS);
        a.append_child(&icon)
            .map_err(|e| dom_error("append link icon", e))?;
        let label = self.document.create_text_node(&format!(" {}", link.label));
        a.append_child(&label)
            .map_err(|e| dom_error("append link label", e))?;
        Ok(a)
    }

    fn show_video_wrap(&self, shown: bool) -> Result<()> {
        if let Some(wrap) = &self.video_wrap {
            let classes = wrap.class_list();
            let res = if shown {
                classes.remove_1(HIDDEN_CLASS)
            } else {
                classes.add_1(HIDDEN_CLASS)
            };
            res.map_err(|e| dom_error("toggle video region", e))?;
        }
        Ok(())
    }
}

impl FocusScope for DomModal {
    type Target = HtmlElement;

    fn focusables(&self) -> Vec<HtmlElement> {
        let Some(content) = &self.content else {
            return Vec::new();
        };
        let Ok(nodes) = content.query_selector_all(FOCUSABLE_SELECTOR) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
            .filter(|el| !el.has_attribute("disabled") && el.offset_parent().is_some())
            .collect()
    }

    fn active_within(&self) -> Option<HtmlElement> {
        let content = self.content.as_ref()?;
        let active = self.document.active_element()?;
        let node: &Node = &active;
        if !content.contains(Some(node)) {
            return None;
        }
        active.dyn_into::<HtmlElement>().ok()
    }

    fn focus(&mut self, target: &HtmlElement) {
        let _ = target.focus();
    }
}

impl ModalView for DomModal {
    fn set_title(&mut self, title: &str) -> Result<()> {
        if let Some(el) = &self.title {
            el.set_text_content(Some(title));
        }
        Ok(())
    }

    fn set_overview(&mut self, text: &str) -> Result<()> {
        if let Some(el) = &self.description {
            el.set_text_content(Some(text));
        }
        Ok(())
    }

    fn set_technologies(&mut self, names: &[String]) -> Result<()> {
        let Some(techs) = &self.techs else {
            return Ok(());
        };
        techs.set_inner_html("");
        for name in names {
            let chip = self
                .document
                .create_element("span")
                .map_err(|e| dom_error("create tag", e))?;
            chip.set_class_name("tag");
            chip.set_text_content(Some(name));
            techs
                .append_child(&chip)
                .map_err(|e| dom_error("append tag", e))?;
        }
        Ok(())
    }

    fn set_meta(&mut self, field: MetaField, value: Option<&str>) -> Result<()> {
        let row = match field {
            MetaField::Date => &self.date,
            MetaField::Time => &self.time,
            MetaField::Venue => &self.venue,
        };
        if let Some(el) = &row.value {
            el.set_text_content(Some(value.unwrap_or("")));
        }
        if let Some(el) = &row.row {
            set_shown(el, value.is_some());
        }
        Ok(())
    }

    fn set_category_badge(&mut self, label: Option<&str>) -> Result<()> {
        Self::set_badge(self.type_badge.as_ref(), label);
        Ok(())
    }

    fn set_status_badge(&mut self, text: Option<&str>) -> Result<()> {
        Self::set_badge(self.status_badge.as_ref(), text);
        Ok(())
    }

    fn set_links(&mut self, links: &[Link]) -> Result<()> {
        let Some(container) = &self.links else {
            return Ok(());
        };
        container.set_inner_html("");
        for link in links {
            let a = self.link_element(link)?;
            container
                .append_child(&a)
                .map_err(|e| dom_error("append link", e))?;
        }
        if let Some(section) = &self.links_section {
            set_shown(section, !links.is_empty());
        }
        Ok(())
    }

    fn show_media(&mut self, item: Option<&MediaItem>, alt: &str) -> Result<()> {
        match item {
            Some(media) if media.is_video() => {
                self.show_video_wrap(true)?;
                if let Some(img) = &self.image {
                    set_shown(img, false);
                }
                if let Some(video) = &self.video {
                    video.set_src(&media.url);
                    video.load();
                }
            }
            Some(media) => {
                self.release_video();
                self.show_video_wrap(false)?;
                if let Some(img) = &self.image {
                    set_shown(img, true);
                    img.set_src(&media.url);
                    img.set_alt(alt);
                }
            }
            None => {
                self.release_video();
                self.show_video_wrap(false)?;
                if let Some(img) = &self.image {
                    set_shown(img, false);
                }
            }
        }
        Ok(())
    }

    fn set_gallery_nav(&mut self, nav: NavState) {
        if let Some(btn) = &self.prev_btn {
            set_disabled(btn, !nav.has_prev);
        }
        if let Some(btn) = &self.next_btn {
            set_disabled(btn, !nav.has_next);
        }
    }

    fn set_visible(&mut self, visible: bool) {
        let classes = self.root.class_list();
        let _ = if visible {
            classes.add_1(SHOW_CLASS)
        } else {
            classes.remove_1(SHOW_CLASS)
        };
        let _ = self
            .root
            .set_attribute("aria-hidden", if visible { "false" } else { "true" });
    }

    fn lock_scroll(&mut self, locked: bool) {
        if let Some(body) = self.document.body() {
            let style = body.style();
            let _ = if locked {
                style.set_property("overflow", "hidden")
            } else {
                style.remove_property("overflow").map(drop)
            };
        }
    }

    fn focus_close(&mut self) {
        if let Some(btn) = &self.close_btn {
            let _ = btn.focus();
        }
    }

    fn release_video(&mut self) {
        if let Some(video) = &self.video {
            let _ = video.pause();
            let _ = video.remove_attribute("src");
            video.load();
        }
    }
}
