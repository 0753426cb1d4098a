//! Routing for the ResTrack HTTP surface.
//!
//! Mutating calls carry their payload as a percent-encoded JSON path
//! segment rather than as a request body. Fragment routes return HTML
//! partials that replace a subtree of the dashboard.

use serde::Serialize;
use serde_json::Value;

use super::ids::WorklistId;

pub const DEFAULT_API_PREFIX: &str = "/api/v1";

/// Id of the element holding the order table partial.
pub const ORDERS_TABLE_ID: &str = "orders-table";

pub const LOGOUT_ROUTE: &str = "/logout";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// The mutating API endpoints the dashboard calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    AddToWorklist,
    UpdateStatus,
    Annotate,
    RemoveFromWorklist,
    CopyWorklist,
    Subscribe,
    Unsubscribe,
}

impl Endpoint {
    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::AddToWorklist | Endpoint::UpdateStatus | Endpoint::Subscribe => HttpMethod::Put,
            Endpoint::Annotate | Endpoint::CopyWorklist => HttpMethod::Post,
            Endpoint::RemoveFromWorklist | Endpoint::Unsubscribe => HttpMethod::Delete,
        }
    }

    /// Path below the API prefix, without the payload segment
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::AddToWorklist => "add_to_worklist",
            Endpoint::UpdateStatus => "comment",
            Endpoint::Annotate => "annotate",
            Endpoint::RemoveFromWorklist => "remove_from_worklist",
            Endpoint::CopyWorklist => "worklists/copy",
            Endpoint::Subscribe => "worklists/subscribe",
            Endpoint::Unsubscribe => "worklists/unsubscribe",
        }
    }

    /// Whether success is read from a JSON boolean body instead of the HTTP status
    pub fn reports_success_in_body(&self) -> bool {
        matches!(self, Endpoint::AddToWorklist)
    }
}

/// A fully routed API call, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub method: HttpMethod,
    pub url: String,
}

impl ApiRequest {
    pub fn encode<T: Serialize>(
        prefix: &str,
        endpoint: Endpoint,
        payload: &T,
    ) -> Result<Self, serde_json::Error> {
        let json = serde_json::to_string(payload)?;
        let url = format!(
            "{}/{}/{}",
            prefix.trim_end_matches('/'),
            endpoint.path(),
            urlencoding::encode(&json)
        );
        Ok(Self {
            endpoint,
            method: endpoint.method(),
            url,
        })
    }
}

/// Server-rendered partials the client asks to be swapped into the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    WorklistOrders(WorklistId),
    WorklistSelector,
    SubscriptionManager,
    CopyManager,
}

impl Fragment {
    pub fn route(&self) -> String {
        match self {
            Fragment::WorklistOrders(id) => format!("/worklists/{}/orders", id),
            Fragment::WorklistSelector => "/worklists/selector".to_string(),
            Fragment::SubscriptionManager => "/worklists/subscription-manager".to_string(),
            Fragment::CopyManager => "/worklists/copy-manager".to_string(),
        }
    }

    /// Id of the element whose content the partial replaces
    pub fn target_id(&self) -> &'static str {
        match self {
            Fragment::WorklistOrders(_) => ORDERS_TABLE_ID,
            Fragment::WorklistSelector => "worklist-selector",
            Fragment::SubscriptionManager => "subscription-manager",
            Fragment::CopyManager => "copy-manager",
        }
    }

    /// CSS selector form of [`Fragment::target_id`]
    pub fn target(&self) -> String {
        format!("#{}", self.target_id())
    }
}

/// JavaScript-style truthiness of a JSON response body.
pub fn json_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_is_a_single_encoded_segment() {
        let req = ApiRequest::encode(
            "/api/v1/",
            Endpoint::AddToWorklist,
            &json!({"worklist_id": 3, "order_ids": [1, 2]}),
        )
        .unwrap();

        assert_eq!(req.method, HttpMethod::Put);
        assert!(req.url.starts_with("/api/v1/add_to_worklist/"));
        let segment = req.url.rsplit('/').next().unwrap();
        assert!(!segment.contains('{'));
        let decoded = urlencoding::decode(segment).unwrap();
        let value: Value = serde_json::from_str(&decoded).unwrap();
        assert_eq!(value["order_ids"], json!([1, 2]));
    }

    #[test]
    fn test_endpoint_methods() {
        assert_eq!(Endpoint::Annotate.method(), HttpMethod::Post);
        assert_eq!(Endpoint::RemoveFromWorklist.method(), HttpMethod::Delete);
        assert_eq!(Endpoint::Unsubscribe.method(), HttpMethod::Delete);
        assert_eq!(Endpoint::Subscribe.method(), HttpMethod::Put);
        assert_eq!(Endpoint::CopyWorklist.path(), "worklists/copy");
    }

    #[test]
    fn test_fragment_routes() {
        assert_eq!(Fragment::WorklistOrders(12).route(), "/worklists/12/orders");
        assert_eq!(Fragment::WorklistOrders(12).target(), "#orders-table");
        assert_eq!(Fragment::SubscriptionManager.target_id(), "subscription-manager");
    }

    #[test]
    fn test_json_truthiness() {
        assert!(json_truthy(&json!(true)));
        assert!(json_truthy(&json!(1)));
        assert!(json_truthy(&json!({"ok": false})));
        assert!(!json_truthy(&json!(false)));
        assert!(!json_truthy(&json!(null)));
        assert!(!json_truthy(&json!(0)));
        assert!(!json_truthy(&json!("")));
    }
}
