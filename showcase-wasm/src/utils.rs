use showcase_core::{ShowcaseConfig, ShowcaseError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, EventTarget, HtmlButtonElement, HtmlElement, Window};

use crate::constants::CONFIG_GLOBAL;

/// Log a message to the browser console.
pub fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

pub fn log_error(s: &str) {
    web_sys::console::error_1(&JsValue::from_str(s));
}

pub fn lookup_error(selector: &str, err: JsValue) -> ShowcaseError {
    ShowcaseError::Lookup {
        selector: selector.to_string(),
        reason: format!("{:?}", err),
    }
}

pub fn dom_error(context: &str, err: JsValue) -> ShowcaseError {
    ShowcaseError::Dom(format!("{}: {:?}", context, err))
}

/// First match under `parent` as an `HtmlElement`.
pub fn select_html(parent: &Element, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(parent
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// Toggle inline `display: none`.
pub fn set_shown(el: &HtmlElement, shown: bool) {
    let style = el.style();
    let _ = if shown {
        style.remove_property("display").map(drop)
    } else {
        style.set_property("display", "none")
    };
}

/// Set the `disabled` state of a control and mirror it in `aria-disabled`.
pub fn set_disabled(el: &HtmlElement, disabled: bool) {
    if let Some(btn) = el.dyn_ref::<HtmlButtonElement>() {
        btn.set_disabled(disabled);
    } else if disabled {
        let _ = el.set_attribute("disabled", "");
    } else {
        let _ = el.remove_attribute("disabled");
    }
    let _ = el.set_attribute("aria-disabled", if disabled { "true" } else { "false" });
}

/// Nearest ancestor (or self) of an event target matching `selector`.
pub fn closest(target: Option<EventTarget>, selector: &str) -> Option<Element> {
    target?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

/// Read host overrides from `window.__SHOWCASE_CONFIG`, which may be a JSON
/// string or a plain object. Falls back to defaults on anything malformed.
pub fn load_config(window: &Window) -> ShowcaseConfig {
    let raw = match js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(v) if !v.is_undefined() && !v.is_null() => v,
        _ => return ShowcaseConfig::default(),
    };
    let text = match raw.as_string() {
        Some(s) => s,
        None => match js_sys::JSON::stringify(&raw) {
            Ok(s) => String::from(s),
            Err(e) => {
                log_error(&format!("Unreadable {}: {:?}", CONFIG_GLOBAL, e));
                return ShowcaseConfig::default();
            }
        },
    };
    match ShowcaseConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            log_error(&format!("Ignoring {}: {}", CONFIG_GLOBAL, e));
            ShowcaseConfig::default()
        }
    }
}
