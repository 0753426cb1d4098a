//! Selection & action controller for the worklist dashboard.
//!
//! Holds the selected order ids and the worklist in focus, keeps the
//! action controls in step with them and issues the mutating API calls.
//! Every write is followed by a re-fetch of the affected partial; the
//! server stays the only source of truth.

pub mod backend;
pub mod busy;
pub mod error;
pub mod filter;
pub mod page;
pub mod selection;


use std::cell::RefCell;

use contracts::enums::severity::Severity;
use contracts::shared::routes::{json_truthy, ApiRequest, Endpoint, Fragment, LOGOUT_ROUTE};
use contracts::worklists::{
    AddToWorklistDto, AnnotateDto, CopyWorklistDto, RemoveFromWorklistDto, SubscriptionDto,
    UpdateStatusDto,
};
use contracts::{OrderId, WorklistId};
use serde::Serialize;

use self::backend::{ApiResponse, Backend};
use self::error::{ActionError, Outcome};
use self::page::Page;
use self::selection::{ControlStates, SelectionState};

const SELECT_ORDERS_AND_WORKLIST: &str = "Please select orders and a worklist";
const SELECT_ORDERS_AND_STATUS: &str = "Please select orders and a status";
const SELECT_WORKLIST_ORDERS_NOTE: &str = "Please select a worklist, orders, and enter a note";
const SELECT_ORDERS_TO_REMOVE: &str = "Please select orders to remove";
const SELECT_TARGET_WORKLIST: &str =
    "Please select a target worklist first by clicking on a worklist in the sidebar";
const COPY_ONTO_ITSELF: &str = "Cannot copy a worklist to itself";
const USER_ID_MISSING: &str = "User ID not found, please refresh the page or log in again";

/// User-facing text for the two failure classes of one action
struct FailureText {
    rejected: &'static str,
    errored: &'static str,
}

pub struct Controller<P, B> {
    page: P,
    backend: B,
    api_prefix: String,
    state: RefCell<SelectionState>,
}

impl<P: Page, B: Backend> Controller<P, B> {
    pub fn new(page: P, backend: B, api_prefix: impl Into<String>) -> Self {
        Self {
            page,
            backend,
            api_prefix: api_prefix.into(),
            state: RefCell::new(SelectionState::new()),
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn selected_orders(&self) -> Vec<OrderId> {
        self.state.borrow().order_ids()
    }

    pub fn current_worklist(&self) -> Option<WorklistId> {
        self.state.borrow().worklist()
    }

    pub fn controls(&self) -> ControlStates {
        self.state.borrow().controls()
    }

    /// Push the derived control states to the page.
    pub fn refresh_controls(&self) {
        let controls = self.controls();
        self.page.apply_controls(&controls);
    }

    // ── Selection ────────────────────────────────────────────────────────────

    pub fn toggle_order(&self, order_id: OrderId, checked: bool) {
        self.state.borrow_mut().set(order_id, checked);
        self.refresh_controls();
    }

    /// "Select all": `order_ids` are every visible row, all now set to `checked`.
    pub fn select_all(&self, order_ids: &[OrderId], checked: bool) {
        self.state.borrow_mut().set_many(order_ids, checked);
        self.refresh_controls();
    }

    fn clear_selection(&self) {
        self.state.borrow_mut().clear_orders();
        self.refresh_controls();
    }

    pub fn select_worklist(&self, worklist_id: WorklistId, name: &str) {
        log::debug!("selecting worklist {}", worklist_id);
        self.state.borrow_mut().focus_worklist(worklist_id);
        self.refresh_controls();
        self.page.highlight_worklist(worklist_id);
        self.page.set_worklist_actions_visible(true);
        self.page
            .request_fragment(Fragment::WorklistOrders(worklist_id));
        self.page
            .notify(&format!("Selected worklist: {}", name), Severity::Info);
    }

    /// Reconcile with a freshly swapped order table.
    ///
    /// `checked` holds the ids of the checkboxes that are checked in the new
    /// markup. A patient view hides the worklist actions whatever the focus.
    pub fn after_orders_swap(&self, checked: &[OrderId], patient_view: bool) {
        self.state.borrow_mut().retain_checked(checked);
        let show_actions = !patient_view && self.current_worklist().is_some();
        self.page.set_worklist_actions_visible(show_actions);
        self.refresh_controls();
    }

    pub fn logout(&self) {
        self.page.notify("Logging out...", Severity::Info);
        self.page.navigate(LOGOUT_ROUTE);
    }

    // ── Mutating actions ─────────────────────────────────────────────────────

    pub async fn add_selected_to_worklist(&self) -> Result<Outcome, ActionError> {
        let result = self.try_add_selected_to_worklist().await;
        self.report(
            result,
            FailureText {
                rejected: "Failed to add orders to worklist",
                errored: "Error adding orders to worklist",
            },
        )
    }

    async fn try_add_selected_to_worklist(&self) -> Result<Outcome, ActionError> {
        let (order_ids, worklist_id) = self.require_worklist_selection(SELECT_ORDERS_AND_WORKLIST)?;
        let count = order_ids.len();

        self.call(
            Endpoint::AddToWorklist,
            &AddToWorklistDto {
                worklist_id,
                order_ids,
            },
        )
        .await?;

        self.page
            .notify(&format!("Added {} orders to worklist", count), Severity::Success);
        self.clear_selection();
        self.refresh_listing();
        Ok(Outcome::Applied)
    }

    pub async fn update_status(&self) -> Result<Outcome, ActionError> {
        let result = self.try_update_status().await;
        self.report(
            result,
            FailureText {
                rejected: "Failed to update order status",
                errored: "Error updating order status",
            },
        )
    }

    async fn try_update_status(&self) -> Result<Outcome, ActionError> {
        let status = self.page.status_value().trim().to_string();
        let order_ids = self.selected_orders();
        if status.is_empty() || order_ids.is_empty() {
            return Err(ActionError::Invalid(SELECT_ORDERS_AND_STATUS));
        }
        let count = order_ids.len();

        self.call(
            Endpoint::UpdateStatus,
            &UpdateStatusDto {
                action: status,
                order_ids,
            },
        )
        .await?;

        self.page
            .notify(&format!("Updated status for {} orders", count), Severity::Success);
        self.page.reset_status();
        self.clear_selection();
        self.refresh_listing();
        Ok(Outcome::Applied)
    }

    pub async fn add_note(&self) -> Result<Outcome, ActionError> {
        let result = self.try_add_note().await;
        self.report(
            result,
            FailureText {
                rejected: "Failed to add note",
                errored: "Error adding note",
            },
        )
    }

    async fn try_add_note(&self) -> Result<Outcome, ActionError> {
        let note_text = self.page.note_text().trim().to_string();
        if note_text.is_empty() {
            return Err(ActionError::Invalid(SELECT_WORKLIST_ORDERS_NOTE));
        }
        let (order_ids, worklist_id) = self.require_worklist_selection(SELECT_WORKLIST_ORDERS_NOTE)?;
        let count = order_ids.len();

        self.call(
            Endpoint::Annotate,
            &AnnotateDto {
                note_text,
                order_ids,
                worklist_id,
            },
        )
        .await?;

        self.page
            .notify(&format!("Added note to {} orders", count), Severity::Success);
        self.page.clear_note();
        self.clear_selection();
        self.refresh_listing();
        Ok(Outcome::Applied)
    }

    pub async fn remove_from_worklist(&self) -> Result<Outcome, ActionError> {
        let result = self.try_remove_from_worklist().await;
        self.report(
            result,
            FailureText {
                rejected: "Failed to remove orders",
                errored: "Error removing orders",
            },
        )
    }

    async fn try_remove_from_worklist(&self) -> Result<Outcome, ActionError> {
        let (order_ids, worklist_id) = self.require_worklist_selection(SELECT_ORDERS_TO_REMOVE)?;
        let count = order_ids.len();

        if !self
            .page
            .confirm(&format!("Remove {} orders from worklist?", count))
        {
            return Ok(Outcome::Declined);
        }

        self.call(
            Endpoint::RemoveFromWorklist,
            &RemoveFromWorklistDto {
                worklist_id,
                order_ids,
            },
        )
        .await?;

        self.page
            .notify(&format!("Removed {} orders from worklist", count), Severity::Success);
        self.clear_selection();
        self.refresh_listing();
        Ok(Outcome::Applied)
    }

    /// Copy every order of `source` into the worklist in focus.
    pub async fn copy_worklist(&self, source: WorklistId) -> Result<Outcome, ActionError> {
        let result = self.try_copy_worklist(source).await;
        self.report(
            result,
            FailureText {
                rejected: "Failed to copy worklist",
                errored: "Error copying worklist",
            },
        )
    }

    async fn try_copy_worklist(&self, source: WorklistId) -> Result<Outcome, ActionError> {
        let current = self
            .current_worklist()
            .ok_or(ActionError::Invalid(SELECT_TARGET_WORKLIST))?;
        if source == current {
            return Err(ActionError::Invalid(COPY_ONTO_ITSELF));
        }
        if !self
            .page
            .confirm("Copy all orders from selected worklist to current worklist?")
        {
            return Ok(Outcome::Declined);
        }

        self.call(
            Endpoint::CopyWorklist,
            &CopyWorklistDto {
                worklist_to_copy_from: source,
                current_worklist: current,
            },
        )
        .await?;

        self.page
            .notify("Worklist copied successfully", Severity::Success);
        self.refresh_listing();
        Ok(Outcome::Applied)
    }

    pub async fn toggle_subscription(
        &self,
        worklist_id: WorklistId,
        subscribe: bool,
    ) -> Result<Outcome, ActionError> {
        let result = self.try_toggle_subscription(worklist_id, subscribe).await;
        let rejected = if subscribe {
            "Failed to subscribe to worklist"
        } else {
            "Failed to unsubscribe from worklist"
        };
        self.report(
            result,
            FailureText {
                rejected,
                errored: "Error updating subscription",
            },
        )
    }

    async fn try_toggle_subscription(
        &self,
        worklist_id: WorklistId,
        subscribe: bool,
    ) -> Result<Outcome, ActionError> {
        let user_id = self.page.user_id().ok_or(ActionError::MissingUser)?;
        let endpoint = if subscribe {
            Endpoint::Subscribe
        } else {
            Endpoint::Unsubscribe
        };

        self.call(
            endpoint,
            &SubscriptionDto {
                user_id,
                worklist_id,
            },
        )
        .await?;

        let message = if subscribe {
            "Subscribed to worklist"
        } else {
            "Unsubscribed from worklist"
        };
        self.page.notify(message, Severity::Success);
        self.page.request_fragment(Fragment::WorklistSelector);
        self.page.request_fragment(Fragment::SubscriptionManager);
        Ok(Outcome::Applied)
    }

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn require_worklist_selection(
        &self,
        message: &'static str,
    ) -> Result<(Vec<OrderId>, WorklistId), ActionError> {
        let state = self.state.borrow();
        match state.worklist() {
            Some(worklist_id) if !state.is_empty() => Ok((state.order_ids(), worklist_id)),
            _ => Err(ActionError::Invalid(message)),
        }
    }

    /// Re-fetch the listing of the worklist in focus, if any.
    fn refresh_listing(&self) {
        if let Some(worklist_id) = self.current_worklist() {
            self.page
                .request_fragment(Fragment::WorklistOrders(worklist_id));
        }
    }

    async fn call<T: Serialize>(
        &self,
        endpoint: Endpoint,
        payload: &T,
    ) -> Result<ApiResponse, ActionError> {
        let request = ApiRequest::encode(&self.api_prefix, endpoint, payload)
            .map_err(error::TransportError::from)?;
        log::debug!("{} {}", request.method.as_str(), request.url);

        let response = self.backend.send(&request).await?;
        if !response.ok() {
            return Err(ActionError::Rejected {
                endpoint,
                status: response.status,
            });
        }
        if endpoint.reports_success_in_body() && !json_truthy(&response.json()?) {
            return Err(ActionError::Rejected {
                endpoint,
                status: response.status,
            });
        }
        Ok(response)
    }

    /// Tell the user how an action ended. Successes notify themselves.
    fn report(
        &self,
        result: Result<Outcome, ActionError>,
        text: FailureText,
    ) -> Result<Outcome, ActionError> {
        match &result {
            Ok(_) => {}
            Err(ActionError::Invalid(message)) => {
                log::warn!("action not sent: {}", message);
                self.page.notify(message, Severity::Warning);
            }
            Err(ActionError::MissingUser) => {
                log::error!("no data-user-id on the page");
                self.page.notify(USER_ID_MISSING, Severity::Danger);
            }
            Err(err @ ActionError::Rejected { .. }) => {
                log::error!("{}", err);
                self.page.notify(text.rejected, Severity::Danger);
            }
            Err(ActionError::Transport(err)) => {
                log::error!("Error: {}", err);
                self.page.notify(text.errored, Severity::Danger);
            }
        }
        result
    }
}
