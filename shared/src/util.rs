use chrono::{DateTime, Utc};

/// Current UTC instant
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Generate an opaque entity id.
///
/// UUIDv7 in simple (hex, no dashes) form: 32 chars, time-ordered, so ids
/// sort in creation order the same way storage ids would.
pub fn new_id() -> String {
    uuid::Uuid::now_v7().simple().to_string()
}
