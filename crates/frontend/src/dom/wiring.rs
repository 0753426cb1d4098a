//! Attaches controller behaviour to server-rendered markup.
//!
//! htmx swaps discard the listeners on replaced nodes, so this runs at
//! start-up and again on every swapped fragment. Bound elements carry
//! `data-rt-bound` and are skipped on later passes.

use std::rc::Rc;

use contracts::OrderId;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

use super::{filter, select_all, select_in_document, AppController};
use crate::controller::filter::{is_hidden, selectable_ids};
use crate::controller::selection::parse_id;

const BOUND: &str = "data-rt-bound";
const ORDER_CHECKBOX: &str = ".order-checkbox";

/// Elements under `root` (itself included) that match `selector` and are not bound yet.
/// They are marked as bound before being returned.
fn claim(root: &Element, selector: &str) -> Vec<Element> {
    let mut found = select_all(root, selector);
    if root.matches(selector).unwrap_or(false) {
        found.insert(0, root.clone());
    }
    found
        .into_iter()
        .filter(|el| !el.has_attribute(BOUND))
        .inspect(|el| {
            let _ = el.set_attribute(BOUND, "");
        })
        .collect()
}

fn on(elements: &[Element], event: &str, handler: impl FnMut(Event) + 'static) {
    if elements.is_empty() {
        return;
    }
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    for el in elements {
        let _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn mark_row(checkbox: &Element, checked: bool) {
    if let Ok(Some(row)) = checkbox.closest("tr") {
        let _ = row.class_list().toggle_with_force("table-active", checked);
    }
}

fn order_id(checkbox: &HtmlInputElement) -> Option<OrderId> {
    let id = parse_id(&checkbox.value());
    if id.is_none() {
        log::warn!("order checkbox with non-numeric value {:?}", checkbox.value());
    }
    id
}

/// Ids of every checked order checkbox currently in the document.
pub fn checked_order_ids() -> Vec<OrderId> {
    select_in_document(ORDER_CHECKBOX)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        .filter(|input| input.checked())
        .filter_map(|input| parse_id(&input.value()))
        .collect()
}

/// Bind checkboxes, the select-all box, worklist entries and the logout link under `root`,
/// then push fresh control states. Safe to call repeatedly on the same subtree.
pub fn attach_behavior(root: &Element, controller: &Rc<AppController>) {
    let ctrl = Rc::clone(controller);
    on(&claim(root, ORDER_CHECKBOX), "change", move |event| {
        let Some(input) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(id) = order_id(&input) else { return };
        mark_row(&input, input.checked());
        ctrl.toggle_order(id, input.checked());
    });

    let ctrl = Rc::clone(controller);
    on(&claim(root, "#select-all"), "change", move |event| {
        let Some(toggle) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let checked = toggle.checked();
        let inputs: Vec<HtmlInputElement> = select_in_document(ORDER_CHECKBOX)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
            .collect();
        let rows: Vec<(OrderId, String)> = inputs
            .iter()
            .filter_map(|input| Some((order_id(input)?, filter::row_display(input))))
            .collect();
        for input in inputs.iter().filter(|input| !is_hidden(&filter::row_display(input))) {
            input.set_checked(checked);
            mark_row(input, checked);
        }
        ctrl.select_all(&selectable_ids(&rows), checked);
    });

    // Entries that carry an inline handler already call `selectWorklist`
    let entries: Vec<Element> = claim(root, ".worklist-item[data-worklist-id]")
        .into_iter()
        .filter(|el| !el.has_attribute("onclick"))
        .collect();
    let ctrl = Rc::clone(controller);
    on(&entries, "click", move |event| {
        let Some(entry) = event
            .current_target()
            .and_then(|t| t.dyn_into::<Element>().ok())
        else {
            return;
        };
        let Some(id) = entry
            .get_attribute("data-worklist-id")
            .and_then(|raw| parse_id(&raw))
        else {
            return;
        };
        let name = entry
            .get_attribute("data-worklist-name")
            .or_else(|| entry.text_content())
            .map(|name| name.trim().to_string())
            .unwrap_or_else(|| id.to_string());
        ctrl.select_worklist(id, &name);
    });

    let ctrl = Rc::clone(controller);
    on(&claim(root, "[data-action=\"logout\"]"), "click", move |event| {
        event.prevent_default();
        ctrl.logout();
    });

    controller.refresh_controls();
}
