//! Bindings to the htmx global and its request lifecycle events.

use std::rc::Rc;

use contracts::shared::routes::{Fragment, ORDERS_TABLE_ID};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, Element, HtmlElement};

use super::{filter, select_in_document, wiring, AppController};
use crate::controller::busy::BusyIndicator;
use crate::controller::filter::CompleteFilter;

/// Marker rendered into the order table when it lists one patient's orders
const PATIENT_VIEW_MARKER: &str = "[data-view-type=\"patient-orders\"]";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = htmx, js_name = ajax, catch)]
    fn htmx_ajax(verb: &str, path: &str, context: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Serialize)]
struct AjaxContext<'a> {
    target: &'a str,
}

/// Fetch `fragment` and swap it into its target element.
pub fn swap(fragment: Fragment) {
    let route = fragment.route();
    let target = fragment.target();
    let context = match serde_wasm_bindgen::to_value(&AjaxContext { target: &target }) {
        Ok(context) => context,
        Err(err) => {
            log::error!("failed to build htmx context for {}: {}", route, err);
            return;
        }
    };
    if let Err(err) = htmx_ajax("GET", &route, &context) {
        log::error!("htmx.ajax GET {} failed: {:?}", route, err);
    }
}

fn detail_field(event: &CustomEvent, path: &[&str]) -> Option<JsValue> {
    let mut value = event.detail();
    for key in path {
        value = js_sys::Reflect::get(&value, &JsValue::from_str(key)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
    }
    Some(value)
}

fn request_path(event: &CustomEvent) -> String {
    detail_field(event, &["pathInfo", "requestPath"])
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

fn set_loading_visible(visible: bool) {
    for el in select_in_document(".loading") {
        if let Some(el) = el.dyn_ref::<HtmlElement>() {
            let display = if visible { "block" } else { "none" };
            let _ = el.style().set_property("display", display);
        }
    }
}

fn listen(target: &HtmlElement, name: &str, handler: impl FnMut(CustomEvent) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(CustomEvent)>);
    if let Err(err) = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref()) {
        log::error!("failed to listen for {}: {:?}", name, err);
    }
    // Lives as long as the page
    closure.forget();
}

/// Re-integrate a freshly swapped fragment.
fn after_swap(
    controller: &Rc<AppController>,
    complete_filter: &CompleteFilter,
    target: &Element,
) {
    wiring::attach_behavior(target, controller);

    if target.id() == ORDERS_TABLE_ID {
        let patient_view = target
            .query_selector(PATIENT_VIEW_MARKER)
            .ok()
            .flatten()
            .is_some();
        filter::reapply_after_swap(complete_filter);
        let checked = wiring::checked_order_ids();
        controller.after_orders_swap(&checked, patient_view);
    } else {
        controller.refresh_controls();
    }
}

/// Hook the htmx lifecycle events bubbling up to `body`.
pub fn install_lifecycle(
    body: &HtmlElement,
    controller: &Rc<AppController>,
    complete_filter: &CompleteFilter,
) {
    let busy = Rc::new(BusyIndicator::new());

    let begin = Rc::clone(&busy);
    listen(body, "htmx:beforeRequest", move |event| {
        log::debug!("htmx request {}", request_path(&event));
        if begin.begin() {
            set_loading_visible(true);
        }
    });

    let end = Rc::clone(&busy);
    listen(body, "htmx:afterRequest", move |_| {
        if end.end() {
            set_loading_visible(false);
        }
    });

    let ctrl = Rc::clone(controller);
    let complete_filter = complete_filter.clone();
    listen(body, "htmx:afterSwap", move |event| {
        let target = detail_field(&event, &["target"]).and_then(|v| v.dyn_into::<Element>().ok());
        match target {
            Some(target) => after_swap(&ctrl, &complete_filter, &target),
            None => ctrl.refresh_controls(),
        }
    });

    listen(body, "htmx:responseError", |event| {
        let status = detail_field(&event, &["xhr", "status"]).and_then(|v| v.as_f64());
        log::error!("htmx error {}: status {:?}", request_path(&event), status);
    });
}
