//! Functions the server templates call from inline handlers,
//! e.g. `onclick="selectWorklist(3, 'Morning list')"`.

use std::rc::Rc;

use contracts::enums::severity::Severity;
use contracts::WorklistId;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};

use super::{document, filter, toast, AppController};
use crate::config::ClientConfig;
use crate::controller::selection::parse_id;

/// Numbers arrive as JS numbers or as strings lifted from data attributes.
fn id_from_js(value: &JsValue) -> Option<WorklistId> {
    if let Some(n) = value.as_f64() {
        if n.fract() == 0.0 {
            return Some(n as WorklistId);
        }
        return None;
    }
    value.as_string().and_then(|s| parse_id(&s))
}

fn install(name: &str, function: JsValue) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = js_sys::Reflect::set(&window, &JsValue::from_str(name), &function) {
        log::error!("failed to install {}: {:?}", name, err);
    }
}

/// Register an async controller action under `name`.
fn install_action<F, Fut>(name: &'static str, controller: &Rc<AppController>, action: F)
where
    F: Fn(Rc<AppController>) -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    let ctrl = Rc::clone(controller);
    let closure = Closure::<dyn Fn()>::new(move || {
        log::debug!("{} invoked", name);
        spawn_local(action(Rc::clone(&ctrl)));
    });
    install(name, closure.into_js_value());
}

pub fn install_all(controller: &Rc<AppController>, config: &ClientConfig) {
    let ctrl = Rc::clone(controller);
    let select_worklist = Closure::<dyn Fn(JsValue, JsValue)>::new(move |id: JsValue, name: JsValue| {
        let Some(worklist_id) = id_from_js(&id) else {
            log::warn!("selectWorklist called with {:?}", id);
            return;
        };
        let name = name.as_string().unwrap_or_else(|| worklist_id.to_string());
        ctrl.select_worklist(worklist_id, &name);
    });
    install("selectWorklist", select_worklist.into_js_value());

    install_action("addSelectedToWorklist", controller, |c| async move {
        let _ = c.add_selected_to_worklist().await;
    });
    install_action("updateOrderStatus", controller, |c| async move {
        let _ = c.update_status().await;
    });
    install_action("addNote", controller, |c| async move {
        let _ = c.add_note().await;
    });
    install_action("removeFromWorklist", controller, |c| async move {
        let _ = c.remove_from_worklist().await;
    });

    let ctrl = Rc::clone(controller);
    let copy_worklist = Closure::<dyn Fn(JsValue)>::new(move |source: JsValue| {
        let Some(source) = id_from_js(&source) else {
            log::warn!("copyWorklist called with {:?}", source);
            return;
        };
        let ctrl = Rc::clone(&ctrl);
        spawn_local(async move {
            let _ = ctrl.copy_worklist(source).await;
        });
    });
    install("copyWorklist", copy_worklist.into_js_value());

    let ctrl = Rc::clone(controller);
    let toggle_subscription =
        Closure::<dyn Fn(JsValue, JsValue)>::new(move |id: JsValue, subscribe: JsValue| {
            let Some(worklist_id) = id_from_js(&id) else {
                log::warn!("toggleSubscription called with {:?}", id);
                return;
            };
            let subscribe = subscribe.is_truthy();
            let ctrl = Rc::clone(&ctrl);
            spawn_local(async move {
                let _ = ctrl.toggle_subscription(worklist_id, subscribe).await;
            });
        });
    install("toggleSubscription", toggle_subscription.into_js_value());

    let complete_filter = config.filter.clone();
    let toggle_show_complete = Closure::<dyn Fn(JsValue)>::new(move |button: JsValue| {
        let button = button
            .dyn_into::<Element>()
            .ok()
            .or_else(|| document().and_then(|d| d.get_element_by_id("show-complete-btn")));
        match button {
            Some(button) => filter::toggle_show_complete(&button, &complete_filter),
            None => log::warn!("toggleShowComplete without a button"),
        }
    });
    install("toggleShowComplete", toggle_show_complete.into_js_value());

    let ctrl = Rc::clone(controller);
    let handle_logout = Closure::<dyn Fn(JsValue)>::new(move |event: JsValue| {
        if let Ok(event) = event.dyn_into::<Event>() {
            event.prevent_default();
        }
        ctrl.logout();
    });
    install("handleLogout", handle_logout.into_js_value());

    let delay = config.toast_delay_ms;
    let show_toast = Closure::<dyn Fn(JsValue, JsValue)>::new(move |message: JsValue, kind: JsValue| {
        let message = message.as_string().unwrap_or_default();
        let severity = kind
            .as_string()
            .map(|k| Severity::from_name(&k))
            .unwrap_or_default();
        toast::show_toast(&message, severity, delay);
    });
    install("showToast", show_toast.into_js_value());
}
