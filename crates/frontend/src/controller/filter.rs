//! "Show complete only" view filter for the order table.
//!
//! Purely client-side: rows are hidden, never removed, and the server is
//! not involved.

use contracts::enums::order_status::OrderStatus;
use contracts::OrderId;

/// Attribute holding the filter state on the toggle button
pub const FLAG_ATTR: &str = "data-show-complete";

/// A row's inline `display` value as set by the filter
pub fn is_hidden(display: &str) -> bool {
    display.trim().eq_ignore_ascii_case("none")
}

/// Ids a "select all" acts on. Each row is `(id, display)`; rows the
/// filter has hidden are left out.
pub fn selectable_ids<S: AsRef<str>>(rows: &[(OrderId, S)]) -> Vec<OrderId> {
    rows.iter()
        .filter(|(_, display)| !is_hidden(display.as_ref()))
        .map(|(id, _)| *id)
        .collect()
}

/// Whether the persisted flag says "complete only" is in force.
pub fn flag_set(flag: Option<&str>) -> bool {
    flag.map(str::trim) == Some("true")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteFilter {
    /// Index of the status cell within an order row
    pub status_cell: usize,
    /// Rows with fewer cells (group headers, spacers) are never hidden
    pub min_cells: usize,
    pub show_complete_label: String,
    pub show_all_label: String,
}

impl Default for CompleteFilter {
    fn default() -> Self {
        Self {
            status_cell: 6,
            min_cells: 7,
            show_complete_label: "Show Complete Only".to_string(),
            show_all_label: "Show All".to_string(),
        }
    }
}

impl CompleteFilter {
    /// Whether a row with the given cell texts stays visible.
    pub fn row_visible<S: AsRef<str>>(&self, complete_only: bool, cells: &[S]) -> bool {
        if !complete_only || cells.len() < self.min_cells {
            return true;
        }
        cells
            .get(self.status_cell)
            .and_then(|text| OrderStatus::from_label(text.as_ref()))
            == Some(OrderStatus::Complete)
    }

    pub fn visibility<S: AsRef<str>>(&self, complete_only: bool, rows: &[Vec<S>]) -> Vec<bool> {
        rows.iter()
            .map(|cells| self.row_visible(complete_only, cells))
            .collect()
    }

    /// Button label for the given state. It names what the next click does.
    pub fn label(&self, complete_only: bool) -> &str {
        if complete_only {
            &self.show_all_label
        } else {
            &self.show_complete_label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str) -> Vec<String> {
        let mut cells: Vec<String> = (0..6).map(|i| format!("cell {}", i)).collect();
        cells.push(status.to_string());
        cells
    }

    #[test]
    fn test_hides_everything_but_complete() {
        let filter = CompleteFilter::default();
        let rows = vec![
            row("Complete"),
            row("scheduled"),
            row("  COMPLETE "),
            row("in progress"),
            row("cancelled"),
        ];

        assert_eq!(
            filter.visibility(true, &rows),
            vec![true, false, true, false, false]
        );
        assert_eq!(filter.visibility(false, &rows), vec![true; 5]);
    }

    #[test]
    fn test_short_rows_always_shown() {
        let filter = CompleteFilter::default();
        let header = vec!["Patient: DOE, Jane".to_string()];
        assert!(filter.row_visible(true, &header));
    }

    #[test]
    fn test_select_all_skips_filtered_rows() {
        let rows = [(1, ""), (2, "none"), (3, ""), (4, "none"), (5, " None ")];
        assert_eq!(selectable_ids(&rows), vec![1, 3]);
    }

    #[test]
    fn test_flag_parsing() {
        assert!(flag_set(Some("true")));
        assert!(!flag_set(Some("false")));
        assert!(!flag_set(None));
    }

    /// A refreshed table comes back fully visible; with the flag still set,
    /// applying it again hides the non-complete rows.
    #[test]
    fn test_reapplying_after_refresh() {
        let filter = CompleteFilter::default();
        let rows = vec![row("complete"), row("partial")];
        let complete_only = flag_set(Some("true"));
        assert_eq!(filter.visibility(complete_only, &rows), vec![true, false]);
        assert_eq!(filter.label(complete_only), "Show All");
    }

    #[test]
    fn test_labels_alternate() {
        let filter = CompleteFilter::default();
        assert_eq!(filter.label(false), "Show Complete Only");
        assert_eq!(filter.label(true), "Show All");
    }
}
