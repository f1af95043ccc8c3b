use showcase_core::constants::ATTR_CATEGORY;
use showcase_core::{Categorized, Filter, FilterPager, initial_tab};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList};

use crate::constants::*;
use crate::utils::{set_disabled, set_shown};

/// A card in the grid with the category it was declared with.
pub struct GridCard {
    pub element: HtmlElement,
    category: Option<String>,
}

impl Categorized for GridCard {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

/// Filter tabs, pagination controls and the card grid they drive.
pub struct GridView {
    pager: FilterPager<GridCard>,
    pub tabs: Vec<Element>,
    pub prev_btn: Option<HtmlElement>,
    pub next_btn: Option<HtmlElement>,
    toolbar: Option<HtmlElement>,
}

impl GridView {
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        let cards = elements(document.query_selector_all(CARD_SELECTOR)?)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|element| GridCard {
                category: element.get_attribute(ATTR_CATEGORY).filter(|c| !c.is_empty()),
                element,
            })
            .collect();
        let tabs = elements(document.query_selector_all(FILTER_TAB_SELECTOR)?);
        let html = |sel: &str| -> Result<Option<HtmlElement>, JsValue> {
            Ok(document
                .query_selector(sel)?
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
        };

        let tags = tab_tags(&tabs);
        let filter = match initial_tab(tags.iter().map(String::as_str)) {
            Some((idx, filter)) => {
                mark_active(&tabs, idx);
                filter
            }
            None => Filter::All,
        };

        Ok(GridView {
            pager: FilterPager::new(cards, filter),
            prev_btn: html(PAGE_PREV_SELECTOR)?,
            next_btn: html(PAGE_NEXT_SELECTOR)?,
            toolbar: html(TOOLBAR_SELECTOR)?,
            tabs,
        })
    }

    pub fn select_tab(&mut self, idx: usize) {
        let Some(tab) = self.tabs.get(idx) else {
            return;
        };
        let tag = tab.get_attribute(FILTER_ATTR).unwrap_or_default();
        mark_active(&self.tabs, idx);
        self.pager.set_filter(Filter::parse(&tag));
        self.render();
    }

    pub fn next_page(&mut self) {
        self.pager.next_page();
        self.render();
    }

    pub fn prev_page(&mut self) {
        self.pager.prev_page();
        self.render();
    }

    pub fn render(&self) {
        for card in self.pager.cards() {
            set_shown(&card.element, false);
        }
        for card in self.pager.visible_page() {
            set_shown(&card.element, true);
        }
        let nav = self.pager.nav();
        if let Some(btn) = &self.prev_btn {
            set_disabled(btn, !nav.has_prev);
        }
        if let Some(btn) = &self.next_btn {
            set_disabled(btn, !nav.has_next);
        }
        if let Some(toolbar) = &self.toolbar {
            set_shown(toolbar, true);
        }
    }
}

fn tab_tags(tabs: &[Element]) -> Vec<String> {
    tabs.iter()
        .map(|t| t.get_attribute(FILTER_ATTR).unwrap_or_default())
        .collect()
}

fn mark_active(tabs: &[Element], idx: usize) {
    for (i, tab) in tabs.iter().enumerate() {
        let _ = tab.class_list().toggle_with_force(ACTIVE_CLASS, i == idx);
    }
}
