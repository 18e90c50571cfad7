//! Data models
//!
//! Each entity has a stored shape plus `*Create` / `*Update` payloads.
//! Ids are opaque strings (`<entity>_id`) generated by the server and are
//! distinct from the storage-internal record id. Update payloads use
//! `Option` per field: `None` means "leave untouched".
//!
//! Stored shapes tolerate sparse documents: an update that upserts writes
//! only the id, the patched fields and `updated_at`, so any other field
//! missing from storage decodes to its zero value.

pub mod dining_table;
pub mod food;
pub mod invoice;
pub mod menu;
pub mod order;
pub mod order_item;
pub mod user;

// Re-exports
pub use dining_table::*;
pub use food::*;
pub use invoice::*;
pub use menu::*;
pub use order::*;
pub use order_item::*;
pub use user::*;
