use serde::{Deserialize, Serialize};

use crate::{OrderId, UserId, WorklistId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddToWorklistDto {
    pub worklist_id: WorklistId,
    pub order_ids: Vec<OrderId>,
}

/// Applies a status to each order. `action` is the value chosen in the status select.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStatusDto {
    pub action: String,
    pub order_ids: Vec<OrderId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotateDto {
    pub note_text: String,
    pub order_ids: Vec<OrderId>,
    pub worklist_id: WorklistId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveFromWorklistDto {
    pub worklist_id: WorklistId,
    pub order_ids: Vec<OrderId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyWorklistDto {
    pub worklist_to_copy_from: WorklistId,
    pub current_worklist: WorklistId,
}

/// Body of both the subscribe and the unsubscribe call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionDto {
    pub user_id: UserId,
    pub worklist_id: WorklistId,
}
