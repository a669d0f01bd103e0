use std::sync::Arc;

use crate::item::application::ports::incoming::use_cases::{
    CreateItemUseCase, DeleteItemUseCase, GetItemUseCase, GetItemsUseCase, UpdateItemUseCase,
};

#[derive(Clone)]
pub struct ItemUseCases {
    pub list: Arc<dyn GetItemsUseCase + Send + Sync>,
    pub get: Arc<dyn GetItemUseCase + Send + Sync>,
    pub create: Arc<dyn CreateItemUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateItemUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteItemUseCase + Send + Sync>,
}
