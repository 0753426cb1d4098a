use contracts::shared::routes::ORDERS_TABLE_ID;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::{document, select_all};
use crate::controller::filter::{flag_set, CompleteFilter, FLAG_ATTR};

fn cell_texts(row: &Element) -> Vec<String> {
    let cells = row.children();
    (0..cells.length())
        .filter_map(|i| cells.item(i))
        .map(|cell| cell.text_content().unwrap_or_default())
        .collect()
}

/// Show or hide the order rows for `complete_only`, persist the flag and relabel `button`.
fn apply(button: &Element, filter: &CompleteFilter, complete_only: bool) {
    let Some(root) = document()
        .and_then(|d| d.get_element_by_id(ORDERS_TABLE_ID).or_else(|| d.document_element()))
    else {
        return;
    };
    let rows = select_all(&root, "tbody tr");
    let cells: Vec<Vec<String>> = rows.iter().map(cell_texts).collect();
    let visible = filter.visibility(complete_only, &cells);

    let mut hidden = 0;
    for (row, visible) in rows.iter().zip(visible) {
        let Some(row) = row.dyn_ref::<HtmlElement>() else {
            continue;
        };
        let style = row.style();
        if visible {
            let _ = style.remove_property("display");
        } else {
            hidden += 1;
            let _ = style.set_property("display", "none");
        }
    }
    log::debug!("complete-only={} hid {} of {} rows", complete_only, hidden, rows.len());

    let _ = button.set_attribute(FLAG_ATTR, if complete_only { "true" } else { "false" });
    button.set_text_content(Some(filter.label(complete_only)));
}

/// Flip the "show complete only" filter driven by `button`.
pub fn toggle_show_complete(button: &Element, filter: &CompleteFilter) {
    let complete_only = !flag_set(button.get_attribute(FLAG_ATTR).as_deref());
    apply(button, filter, complete_only);
}

/// A refreshed order table renders every row; put the filter back if it was on.
pub fn reapply_after_swap(filter: &CompleteFilter) {
    let selector = format!("[{}]", FLAG_ATTR);
    let Some(button) = document().and_then(|d| d.query_selector(&selector).ok().flatten()) else {
        return;
    };
    if flag_set(button.get_attribute(FLAG_ATTR).as_deref()) {
        apply(&button, filter, true);
    }
}

/// Inline `display` of the table row holding `el`, empty when unset.
pub fn row_display(el: &Element) -> String {
    el.closest("tr")
        .ok()
        .flatten()
        .and_then(|row| row.dyn_into::<HtmlElement>().ok())
        .and_then(|row| row.style().get_property_value("display").ok())
        .unwrap_or_default()
}
