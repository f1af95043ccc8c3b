use showcase_core::{CardElement, CardPart, Result};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

use crate::constants::*;
use crate::utils::lookup_error;

/// A project card element read through the card markup contract.
pub struct DomCard<'a> {
    el: &'a Element,
}

impl<'a> DomCard<'a> {
    pub fn new(el: &'a Element) -> Self {
        DomCard { el }
    }

    fn select(&self, selector: &str) -> Result<Option<Element>> {
        self.el
            .query_selector(selector)
            .map_err(|e| lookup_error(selector, e))
    }
}

impl CardElement for DomCard<'_> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.el.get_attribute(name)
    }

    fn text(&self, part: CardPart) -> Result<Option<String>> {
        let selector = match part {
            CardPart::Title => CARD_TITLE_SELECTOR,
            CardPart::Summary => CARD_SUMMARY_SELECTOR,
            CardPart::Status => CARD_STATUS_SELECTOR,
            CardPart::Badge => CARD_BADGE_SELECTOR,
        };
        Ok(self.select(selector)?.and_then(|n| n.text_content()))
    }

    fn tag_texts(&self) -> Result<Vec<String>> {
        let nodes = self
            .el
            .query_selector_all(CARD_TAG_SELECTOR)
            .map_err(|e| lookup_error(CARD_TAG_SELECTOR, e))?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|n| n.text_content())
            .collect())
    }

    // `src` on the image element is the resolved absolute URL.
    fn primary_image(&self) -> Result<Option<String>> {
        Ok(self.select(CARD_IMAGE_SELECTOR)?.and_then(|img| {
            match img.dyn_ref::<HtmlImageElement>() {
                Some(img) => Some(img.src()),
                None => img.get_attribute("src"),
            }
        }))
    }
}

/// Make a card reachable and announced as a button.
pub fn prepare_card(el: &Element) {
    let _ = el.set_attribute("tabindex", "0");
    let _ = el.set_attribute("role", "button");
    let title = el
        .query_selector(CARD_TITLE_SELECTOR)
        .ok()
        .flatten()
        .and_then(|t| t.text_content());
    if let Some(title) = title {
        let _ = el.set_attribute("aria-label", &format!("Open details for {}", title.trim()));
    }
}
