//! Client configuration rendered by the server as `data-*` attributes on `<body>`.
//!
//! Every key is optional; absent or unparseable values keep the default.

use contracts::shared::routes::DEFAULT_API_PREFIX;

use crate::controller::filter::CompleteFilter;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_prefix: String,
    /// How long a toast stays on screen
    pub toast_delay_ms: u32,
    /// Delay before empty management panels are fetched after start-up
    pub panel_load_delay_ms: u32,
    pub log_level: log::Level,
    pub filter: CompleteFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            toast_delay_ms: 3000,
            panel_load_delay_ms: 1000,
            log_level: log::Level::Debug,
            filter: CompleteFilter::default(),
        }
    }
}

impl ClientConfig {
    /// Build from an attribute lookup (`"api-prefix"` → `data-api-prefix`).
    ///
    /// Returns the config together with one message per rejected value, so
    /// the caller can log them once logging is up.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut rejected = Vec::new();

        if let Some(prefix) = lookup("api-prefix") {
            let prefix = prefix.trim().trim_end_matches('/');
            if prefix.starts_with('/') {
                config.api_prefix = prefix.to_string();
            } else {
                rejected.push(format!("data-api-prefix must start with '/': {:?}", prefix));
            }
        }

        parse_into(&lookup, "toast-delay", &mut config.toast_delay_ms, &mut rejected);
        parse_into(&lookup, "panel-load-delay", &mut config.panel_load_delay_ms, &mut rejected);
        parse_into(&lookup, "log-level", &mut config.log_level, &mut rejected);
        parse_into(&lookup, "status-cell", &mut config.filter.status_cell, &mut rejected);
        parse_into(&lookup, "min-cells", &mut config.filter.min_cells, &mut rejected);

        if let Some(label) = lookup("show-complete-label") {
            config.filter.show_complete_label = label;
        }
        if let Some(label) = lookup("show-all-label") {
            config.filter.show_all_label = label;
        }

        (config, rejected)
    }

    pub fn from_document() -> (Self, Vec<String>) {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        match body {
            Some(body) => Self::from_lookup(|key| body.get_attribute(&format!("data-{}", key))),
            None => (Self::default(), Vec::new()),
        }
    }
}

fn parse_into<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    slot: &mut T,
    rejected: &mut Vec<String>,
) {
    if let Some(raw) = lookup(key) {
        match raw.trim().parse() {
            Ok(value) => *slot = value,
            Err(_) => rejected.push(format!("ignoring data-{}={:?}", key, raw)),
        }
    }
}
