use crate::item::application::item_use_cases::ItemUseCases;
use crate::item::application::ports::incoming::use_cases::{
    CreateItemUseCase, DeleteItemUseCase, GetItemUseCase, GetItemsUseCase, UpdateItemUseCase,
};
use crate::tests::support::stubs::*;
use crate::user::application::ports::incoming::use_cases::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, GetUsersUseCase, LoginUserUseCase,
    UpdateUserUseCase,
};
use crate::user::application::user_use_cases::UserUseCases;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Every use case starts as a stub; tests swap in the one they exercise.
pub struct TestAppStateBuilder {
    item: ItemUseCases,
    user: UserUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            item: ItemUseCases {
                list: Arc::new(StubGetItemsUseCase::success(vec![])),
                get: Arc::new(StubGetItemUseCase::not_found()),
                create: Arc::new(StubCreateItemUseCase),
                update: Arc::new(StubUpdateItemUseCase),
                delete: Arc::new(StubDeleteItemUseCase),
            },
            user: UserUseCases {
                list: Arc::new(StubGetUsersUseCase::success(vec![])),
                get: Arc::new(StubGetUserUseCase),
                create: Arc::new(StubCreateUserUseCase),
                update: Arc::new(StubUpdateUserUseCase),
                delete: Arc::new(StubDeleteUserUseCase::ok()),
                login: Arc::new(StubLoginUserUseCase::accepting()),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_items(mut self, uc: impl GetItemsUseCase + Send + Sync + 'static) -> Self {
        self.item.list = Arc::new(uc);
        self
    }

    pub fn with_get_item(mut self, uc: impl GetItemUseCase + Send + Sync + 'static) -> Self {
        self.item.get = Arc::new(uc);
        self
    }

    pub fn with_create_item(mut self, uc: impl CreateItemUseCase + Send + Sync + 'static) -> Self {
        self.item.create = Arc::new(uc);
        self
    }

    pub fn with_update_item(mut self, uc: impl UpdateItemUseCase + Send + Sync + 'static) -> Self {
        self.item.update = Arc::new(uc);
        self
    }

    pub fn with_delete_item(mut self, uc: impl DeleteItemUseCase + Send + Sync + 'static) -> Self {
        self.item.delete = Arc::new(uc);
        self
    }

    pub fn with_get_users(mut self, uc: impl GetUsersUseCase + Send + Sync + 'static) -> Self {
        self.user.list = Arc::new(uc);
        self
    }

    pub fn with_get_user(mut self, uc: impl GetUserUseCase + Send + Sync + 'static) -> Self {
        self.user.get = Arc::new(uc);
        self
    }

    pub fn with_create_user(mut self, uc: impl CreateUserUseCase + Send + Sync + 'static) -> Self {
        self.user.create = Arc::new(uc);
        self
    }

    pub fn with_update_user(mut self, uc: impl UpdateUserUseCase + Send + Sync + 'static) -> Self {
        self.user.update = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl DeleteUserUseCase + Send + Sync + 'static) -> Self {
        self.user.delete = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.user.login = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            item: self.item,
            user: self.user,
        })
    }
}
