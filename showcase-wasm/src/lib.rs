use std::cell::RefCell;
use std::rc::Rc;

use showcase_core::is_activation_key;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, KeyboardEvent, MouseEvent};

mod constants;
mod grid;
mod markup;
mod modal_view;
mod state;
mod utils;

use crate::constants::*;
use crate::grid::GridView;
use crate::markup::prepare_card;
use crate::modal_view::DomModal;
use crate::state::{ModalSession, Showcase};
use crate::utils::{closest, load_config, log};

fn attach_grid(grid: Rc<RefCell<GridView>>) -> Result<(), JsValue> {
    let g = grid.borrow();

    // Filter tabs
    for (idx, tab) in g.tabs.iter().enumerate() {
        let gr = grid.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            gr.borrow_mut().select_tab(idx);
        }));
        tab.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    // Pagination
    if let Some(btn) = &g.prev_btn {
        let gr = grid.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            gr.borrow_mut().prev_page();
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }
    if let Some(btn) = &g.next_btn {
        let gr = grid.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            gr.borrow_mut().next_page();
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }
    Ok(())
}

fn attach_modal_controls(session: Rc<RefCell<ModalSession>>) -> Result<(), JsValue> {
    let s = session.borrow();

    // Close paths: button and backdrop
    if let Some(btn) = &s.view.close_btn {
        let st = session.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            st.borrow_mut().close();
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }
    if let Some(backdrop) = &s.view.backdrop {
        let st = session.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            st.borrow_mut().close();
        }));
        backdrop.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    // Gallery prev/next
    for (btn, delta) in [(&s.view.prev_btn, -1), (&s.view.next_btn, 1)] {
        if let Some(btn) = btn {
            let st = session.clone();
            let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
                st.borrow_mut().navigate(delta);
            }));
            btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
            onclick.forget();
        }
    }
    Ok(())
}

// Cards get their own listeners and the grid gets delegated ones, so cards
// swapped in later stay interactive. Both routes go through
// `ModalSession::activate`, which drops the second sighting of an event.
fn attach_card_activation(showcase: &Showcase, session: Rc<RefCell<ModalSession>>) -> Result<(), JsValue> {
    let cards = showcase.document.query_selector_all(CARD_SELECTOR)?;
    for i in 0..cards.length() {
        let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        prepare_card(&card);

        let st = session.clone();
        let el = card.clone();
        let keydown = Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(move |e: KeyboardEvent| {
            if is_activation_key(&e.key()) {
                e.prevent_default();
                st.borrow_mut().activate(&e, &el);
            }
        }));
        card.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
        keydown.forget();

        let st = session.clone();
        let el = card.clone();
        let click = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            // inner links keep their own behaviour
            if closest(e.target(), "a").is_some() {
                return;
            }
            st.borrow_mut().activate(&e, &el);
        }));
        card.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }

    let Some(grid) = showcase.document.query_selector(GRID_SELECTOR)? else {
        return Ok(());
    };
    {
        let st = session.clone();
        let click = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let Some(card) = closest(e.target(), CARD_SELECTOR) else {
                return;
            };
            if closest(e.target(), "a").is_some() {
                return;
            }
            st.borrow_mut().activate(&e, &card);
        }));
        grid.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }
    {
        let st = session.clone();
        let keydown = Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(move |e: KeyboardEvent| {
            let Some(card) = closest(e.target(), CARD_SELECTOR) else {
                return;
            };
            if is_activation_key(&e.key()) {
                e.prevent_default();
                st.borrow_mut().activate(&e, &card);
            }
        }));
        grid.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
        keydown.forget();
    }
    Ok(())
}

fn attach_keyboard(showcase: &Showcase, session: Rc<RefCell<ModalSession>>) -> Result<(), JsValue> {
    let keydown = Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(move |e: KeyboardEvent| {
        session.borrow_mut().handle_key(&e);
    }));
    showcase
        .document
        .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    keydown.forget();
    Ok(())
}

/// Expose `window.openForCard(el)` and `window.lastOpenedCard()` for
/// external triggering and debugging.
fn install_host_hooks(showcase: &Showcase, session: Rc<RefCell<ModalSession>>) -> Result<(), JsValue> {
    let st = session.clone();
    let open = Closure::<dyn FnMut(JsValue)>::wrap(Box::new(move |v: JsValue| {
        match v.dyn_into::<Element>() {
            Ok(card) => st.borrow_mut().open(&card),
            Err(_) => log("openForCard expects a card element"),
        }
    }));
    js_sys::Reflect::set(&showcase.window, &JsValue::from_str("openForCard"), open.as_ref())?;
    open.forget();

    let last = Closure::<dyn FnMut() -> JsValue>::wrap(Box::new(move || {
        session
            .borrow()
            .controller
            .last_card_json()
            .map(JsValue::from)
            .unwrap_or(JsValue::UNDEFINED)
    }));
    js_sys::Reflect::set(&showcase.window, &JsValue::from_str("lastOpenedCard"), last.as_ref())?;
    last.forget();
    Ok(())
}

fn attach_ui(showcase: &Showcase) -> Result<(), JsValue> {
    attach_grid(showcase.grid.clone())?;
    if let Some(session) = &showcase.modal {
        attach_modal_controls(session.clone())?;
        attach_card_activation(showcase, session.clone())?;
        attach_keyboard(showcase, session.clone())?;
        install_host_hooks(showcase, session.clone())?;
    }
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let config = load_config(&window);

    let grid = Rc::new(RefCell::new(GridView::from_document(&document)?));
    let modal = DomModal::from_document(&document)?
        .map(|view| Rc::new(RefCell::new(ModalSession::new(config, view))));
    if modal.is_none() {
        log("No project modal in page; cards will not open");
    }

    let showcase = Showcase {
        window,
        document,
        grid,
        modal,
    };
    attach_ui(&showcase)?;
    showcase.grid.borrow().render();
    Ok(())
}

