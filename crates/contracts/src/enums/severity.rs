use serde::{Deserialize, Serialize};

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    /// Background class of the toast header
    pub fn bg_class(&self) -> &'static str {
        match self {
            Severity::Info => "bg-info",
            Severity::Success => "bg-success",
            Severity::Warning => "bg-warning",
            Severity::Danger => "bg-danger",
        }
    }

    /// Parse the severity names used by inline handlers. Unknown names map to `Info`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "danger" => Severity::Danger,
            _ => Severity::Info,
        }
    }
}
