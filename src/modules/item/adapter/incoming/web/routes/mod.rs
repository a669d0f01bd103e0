mod create_item;
mod delete_item;
mod get_item;
mod get_items;
mod update_item;

pub use create_item::*;
pub use delete_item::*;
pub use get_item::*;
pub use get_items::*;
pub use update_item::*;
