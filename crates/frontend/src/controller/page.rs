use contracts::enums::severity::Severity;
use contracts::shared::routes::Fragment;
use contracts::{UserId, WorklistId};

use super::selection::ControlStates;

/// The slice of the dashboard the controller reads from and writes to.
///
/// The browser implementation lives in `crate::dom::page`; tests use a
/// recording fake.
pub trait Page {
    /// Show a transient notification.
    fn notify(&self, message: &str, severity: Severity);

    /// Ask the user a yes/no question. Blocks until answered.
    fn confirm(&self, message: &str) -> bool;

    fn apply_controls(&self, controls: &ControlStates);

    /// Mark one worklist entry active and clear the mark on its peers.
    fn highlight_worklist(&self, worklist_id: WorklistId);

    fn set_worklist_actions_visible(&self, visible: bool);

    /// Ask the server for a partial and swap it into its target.
    fn request_fragment(&self, fragment: Fragment);

    fn status_value(&self) -> String;
    fn reset_status(&self);

    fn note_text(&self) -> String;
    fn clear_note(&self);

    /// Id of the logged-in user as rendered into the page, if any.
    fn user_id(&self) -> Option<UserId>;

    fn navigate(&self, url: &str);
}
