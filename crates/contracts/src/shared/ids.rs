/// Server-side primary key of an order row.
pub type OrderId = i64;

/// Server-side primary key of a worklist.
pub type WorklistId = i64;

/// Server-side primary key of a user.
pub type UserId = i64;
