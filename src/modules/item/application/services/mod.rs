mod create_item_service;
mod delete_item_service;
mod get_item_service;
mod get_items_service;
mod update_item_service;

pub use create_item_service::CreateItemService;
pub use delete_item_service::DeleteItemService;
pub use get_item_service::GetItemService;
pub use get_items_service::GetItemsService;
pub use update_item_service::UpdateItemService;
