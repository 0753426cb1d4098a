//! Management panels that may render empty on first load.

use contracts::shared::routes::Fragment;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};

use super::{document, htmx};

const LAZY_PANELS: [Fragment; 2] = [Fragment::SubscriptionManager, Fragment::CopyManager];

/// Tab pane that hosts the lazy panels
const MANAGE_TAB: &str = "#manage";

/// Fetch every lazy panel that is on the page but still empty.
pub fn load_empty_panels() {
    let Some(document) = document() else { return };
    for fragment in LAZY_PANELS {
        let Some(panel) = document.get_element_by_id(fragment.target_id()) else {
            continue;
        };
        if panel.inner_html().trim().is_empty() {
            log::debug!("loading empty panel #{}", fragment.target_id());
            htmx::swap(fragment);
        }
    }
}

fn load_after(delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        load_empty_panels();
    });
}

/// Check the panels once after `delay_ms` and again whenever the manage tab is shown.
pub fn install(delay_ms: u32) {
    load_after(delay_ms);

    let Some(document) = document() else { return };
    let on_tab_shown = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let shows_manage = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|tab| tab.get_attribute("data-bs-target"))
            .is_some_and(|target| target == MANAGE_TAB);
        if shows_manage {
            // Let Bootstrap finish the tab transition first
            load_after(100);
        }
    });
    if let Err(err) =
        document.add_event_listener_with_callback("shown.bs.tab", on_tab_shown.as_ref().unchecked_ref())
    {
        log::error!("failed to listen for tab changes: {:?}", err);
    }
    on_tab_shown.forget();
}
