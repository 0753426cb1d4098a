//! Wire-level types shared between the ResTrack server and the browser client.
//!
//! Nothing in here touches the DOM; the frontend crate builds on these.

pub mod enums;
pub mod shared;
pub mod worklists;

pub use shared::ids::{OrderId, UserId, WorklistId};
