use serde::{Deserialize, Serialize};

/// Order statuses as the server reports them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    WaitingForReview,
    DataNotCollected,
    Scheduled,
    InProgress,
    Partial,
    Complete,
    Cancelled,
    Resolved,
    Entered,
    NoShow,
    Supplemental,
    NotApplicable,
}

impl OrderStatus {
    /// Label rendered in the status column
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::WaitingForReview => "waiting for review",
            OrderStatus::DataNotCollected => "data not collected",
            OrderStatus::Scheduled => "scheduled",
            OrderStatus::InProgress => "in progress",
            OrderStatus::Partial => "partial",
            OrderStatus::Complete => "complete",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Resolved => "resolved",
            OrderStatus::Entered => "entered",
            OrderStatus::NoShow => "no show",
            OrderStatus::Supplemental => "supplemental",
            OrderStatus::NotApplicable => "NA",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::WaitingForReview,
            OrderStatus::DataNotCollected,
            OrderStatus::Scheduled,
            OrderStatus::InProgress,
            OrderStatus::Partial,
            OrderStatus::Complete,
            OrderStatus::Cancelled,
            OrderStatus::Resolved,
            OrderStatus::Entered,
            OrderStatus::NoShow,
            OrderStatus::Supplemental,
            OrderStatus::NotApplicable,
        ]
    }

    /// Parse the text of a status cell. Surrounding whitespace and case are ignored.
    pub fn from_label(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::all()
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(text))
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parsing_ignores_case_and_padding() {
        assert_eq!(OrderStatus::from_label("  Complete\n"), Some(OrderStatus::Complete));
        assert_eq!(OrderStatus::from_label("NO SHOW"), Some(OrderStatus::NoShow));
        assert_eq!(OrderStatus::from_label("completed"), None);
        assert_eq!(OrderStatus::from_label(""), None);
    }
}
