//! Transient notifications rendered into `#toast-container`.

use contracts::enums::severity::Severity;
use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use super::document;

const TOAST_CONTAINER: &str = "toast-container";

#[component]
fn Toast(message: String, severity: Severity) -> impl IntoView {
    view! {
        <div class="toast show" role="alert" aria-live="assertive" aria-atomic="true">
            <div class=format!("toast-header {} text-white", severity.bg_class())>
                <i class="bi bi-info-circle-fill me-2"></i>
                <strong class="me-auto">"ResTrack"</strong>
                <button type="button" class="btn-close btn-close-white" data-bs-dismiss="toast"></button>
            </div>
            // Rendered as a text node, never parsed as markup
            <div class="toast-body">{message}</div>
        </div>
    }
}

/// Show `message` for `delay_ms`, then remove it.
///
/// Pages without a toast container get no notification at all.
pub fn show_toast(message: &str, severity: Severity, delay_ms: u32) {
    let Some(container) = document().and_then(|d| d.get_element_by_id(TOAST_CONTAINER)) else {
        log::debug!("no #{}; dropping {:?} toast: {}", TOAST_CONTAINER, severity, message);
        return;
    };
    let Ok(container) = container.dyn_into::<HtmlElement>() else {
        return;
    };

    let message = message.to_string();
    let handle = mount_to(container, move || {
        view! { <Toast message=message severity=severity/> }
    });

    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        // Unmounting removes the toast's nodes
        drop(handle);
    });
}
