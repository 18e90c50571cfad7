//! Use-case services
//!
//! One service per entity. Services validate payloads, check references,
//! stamp ids and timestamps, and go through the repositories for storage.

pub mod dining_table;
pub mod food;
pub mod invoice;
pub mod menu;
pub mod order;
pub mod order_item;
pub mod user;

pub use dining_table::DiningTableService;
pub use food::FoodService;
pub use invoice::InvoiceService;
pub use menu::MenuService;
pub use order::OrderService;
pub use order_item::{CreatedPack, OrderItemService};
pub use user::UserService;
