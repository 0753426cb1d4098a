use contracts::enums::severity::Severity;
use contracts::shared::routes::Fragment;
use contracts::{UserId, WorklistId};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use super::{body, document, htmx, select_in_document, toast};
use crate::controller::page::Page;
use crate::controller::selection::{parse_id, ControlStates};

const ADD_TO_WORKLIST_BTN: &str = "add-to-worklist-btn";
const STATUS_SELECT: &str = "status-select";
const NOTE_INPUT: &str = "note-input";
const WORKLIST_ACTIONS: &str = "worklist-actions";

/// The live dashboard document
#[derive(Debug, Clone)]
pub struct BrowserPage {
    toast_delay_ms: u32,
}

impl BrowserPage {
    pub fn new(toast_delay_ms: u32) -> Self {
        Self { toast_delay_ms }
    }
}

fn by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

fn set_disabled(el: &Element, disabled: bool) {
    let _ = el.toggle_attribute_with_force("disabled", disabled);
}

/// Current value of an input, select or textarea
fn control_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        Some(select.value())
    } else {
        el.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
    }
}

fn set_control_value(el: &Element, value: &str) {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

impl Page for BrowserPage {
    fn notify(&self, message: &str, severity: Severity) {
        toast::show_toast(message, severity, self.toast_delay_ms);
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn apply_controls(&self, controls: &ControlStates) {
        if let Some(btn) = by_id(ADD_TO_WORKLIST_BTN) {
            set_disabled(&btn, !controls.add_to_worklist);
        }
        if let Some(select) = by_id(STATUS_SELECT) {
            set_disabled(&select, !controls.status_select);
        }
        if let Some(input) = by_id(NOTE_INPUT) {
            set_disabled(&input, !controls.note_input);
        }
        for btn in select_in_document(".action-btn") {
            set_disabled(&btn, !controls.action_buttons);
        }
    }

    fn highlight_worklist(&self, worklist_id: WorklistId) {
        for item in select_in_document(".worklist-item") {
            let _ = item.class_list().remove_1("active");
        }
        let selector = format!("[data-worklist-id=\"{}\"]", worklist_id);
        match document().and_then(|d| d.query_selector(&selector).ok().flatten()) {
            Some(item) => {
                let _ = item.class_list().add_1("active");
            }
            None => log::warn!("no worklist entry for id {}", worklist_id),
        }
    }

    fn set_worklist_actions_visible(&self, visible: bool) {
        let Some(actions) = by_id(WORKLIST_ACTIONS) else {
            return;
        };
        let classes = actions.class_list();
        if visible {
            let _ = classes.remove_1("d-none");
            let _ = classes.add_1("d-flex");
        } else {
            let _ = classes.remove_1("d-flex");
            let _ = classes.add_1("d-none");
        }
    }

    fn request_fragment(&self, fragment: Fragment) {
        htmx::swap(fragment);
    }

    fn status_value(&self) -> String {
        by_id(STATUS_SELECT)
            .and_then(|el| control_value(&el))
            .unwrap_or_default()
    }

    fn reset_status(&self) {
        if let Some(el) = by_id(STATUS_SELECT) {
            set_control_value(&el, "");
        }
    }

    fn note_text(&self) -> String {
        by_id(NOTE_INPUT)
            .and_then(|el| control_value(&el))
            .unwrap_or_default()
    }

    fn clear_note(&self) {
        if let Some(el) = by_id(NOTE_INPUT) {
            set_control_value(&el, "");
        }
    }

    fn user_id(&self) -> Option<UserId> {
        body()
            .and_then(|b| b.get_attribute("data-user-id"))
            .and_then(|raw| parse_id(&raw))
    }

    fn navigate(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(url) {
                log::error!("navigation to {} failed: {:?}", url, err);
            }
        }
    }
}
