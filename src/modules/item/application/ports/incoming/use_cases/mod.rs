mod create_item_use_case;
mod delete_item_use_case;
mod get_item_use_case;
mod get_items_use_case;
mod update_item_use_case;

pub use create_item_use_case::{CreateItemError, CreateItemUseCase};
pub use delete_item_use_case::{DeleteItemError, DeleteItemUseCase};
pub use get_item_use_case::{GetItemError, GetItemUseCase};
pub use get_items_use_case::{GetItemsError, GetItemsUseCase};
pub use update_item_use_case::{UpdateItemError, UpdateItemUseCase};
