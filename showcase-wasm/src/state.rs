use std::cell::RefCell;
use std::rc::Rc;

use showcase_core::{
    ActivationGuard, CardElement, CardPart, ModalController, ModalKey, Opened, ShowcaseConfig,
};
use web_sys::{Document, Element, Event, KeyboardEvent, Window};

use crate::grid::GridView;
use crate::markup::DomCard;
use crate::modal_view::DomModal;
use crate::utils::{log, log_error};

/// The modal controller bound to its DOM region.
pub struct ModalSession {
    pub controller: ModalController,
    pub view: DomModal,
    activations: ActivationGuard<Event>,
}

impl ModalSession {
    pub fn new(config: ShowcaseConfig, view: DomModal) -> Self {
        ModalSession {
            controller: ModalController::new(config),
            view,
            activations: ActivationGuard::default(),
        }
    }

    pub fn open(&mut self, card: &Element) {
        let dom = DomCard::new(card);
        if let Ok(Some(title)) = dom.text(CardPart::Title) {
            log(&format!("Opening project card: {}", title.trim()));
        }
        if let Opened::Degraded(err) = self.controller.open(&mut self.view, &dom) {
            log_error(&format!("Showing minimal project details: {}", err));
        }
    }

    /// Single entry point for card activations from any listener. The same
    /// event seen twice (card listener, then grid delegate) opens once.
    pub fn activate(&mut self, event: &Event, card: &Element) {
        if self.activations.claim(event.clone()) {
            self.open(card);
        }
    }

    pub fn close(&mut self) {
        self.controller.close(&mut self.view);
    }

    pub fn navigate(&mut self, delta: isize) {
        if let Err(err) = self.controller.navigate(&mut self.view, delta) {
            log_error(&format!("Gallery render failed: {}", err));
        }
    }

    pub fn handle_key(&mut self, e: &KeyboardEvent) {
        let key = ModalKey::from_key(&e.key(), e.shift_key());
        match self.controller.handle_key(&mut self.view, key) {
            Ok(true) => e.prevent_default(),
            Ok(false) => {}
            Err(err) => {
                e.prevent_default();
                log_error(&format!("Gallery render failed: {}", err));
            }
        }
    }
}

/// Everything the page's event handlers share, built once at start-up and
/// handed to each listener by closure.
pub struct Showcase {
    pub window: Window,
    pub document: Document,
    pub grid: Rc<RefCell<GridView>>,
    pub modal: Option<Rc<RefCell<ModalSession>>>,
}
