//! Browser side of the controller: web-sys implementations of its seams
//! and the event wiring that feeds it.

pub mod filter;
pub mod globals;
pub mod htmx;
pub mod page;
pub mod panels;
pub mod toast;
pub mod wiring;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::controller::Controller;
use crate::shared::api_utils::HttpBackend;

pub type AppController = Controller<page::BrowserPage, HttpBackend>;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

/// All elements under `root` matching `selector`, in document order.
pub fn select_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("bad selector {:?}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Same as [`select_all`] over the whole document.
pub fn select_in_document(selector: &str) -> Vec<Element> {
    document()
        .and_then(|d| d.document_element())
        .map(|root| select_all(&root, selector))
        .unwrap_or_default()
}
