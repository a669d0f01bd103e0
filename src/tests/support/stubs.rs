use async_trait::async_trait;
use chrono::Utc;

use crate::item::application::{
    domain::entities::Item,
    ports::incoming::use_cases::{
        CreateItemError, CreateItemUseCase, DeleteItemError, DeleteItemUseCase, GetItemError,
        GetItemUseCase, GetItemsError, GetItemsUseCase, UpdateItemError, UpdateItemUseCase,
    },
    ports::outgoing::{CreateItemData, UpdateItemData},
};
use crate::user::application::{
    domain::entities::User,
    ports::incoming::use_cases::{
        CreateUserCommand, CreateUserError, CreateUserUseCase, DeleteUserError, DeleteUserUseCase,
        GetUserError, GetUserUseCase, GetUsersError, GetUsersUseCase, LoginCommand, LoginError,
        LoginUserUseCase, UpdateUserCommand, UpdateUserError, UpdateUserUseCase,
    },
};

pub fn sample_item(id: i32) -> Item {
    let now = Utc::now();
    Item {
        id,
        name: "Sample item".to_string(),
        price: 1.0,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_user(email: &str) -> User {
    let now = Utc::now();
    User {
        id: 1,
        email: email.to_string(),
        created_at: now,
        updated_at: now,
    }
}

// ============================================================
// Items
// ============================================================

#[derive(Clone)]
pub struct StubGetItemsUseCase {
    result: Result<Vec<Item>, GetItemsError>,
}

impl StubGetItemsUseCase {
    pub fn success(items: Vec<Item>) -> Self {
        Self { result: Ok(items) }
    }
}

#[async_trait]
impl GetItemsUseCase for StubGetItemsUseCase {
    async fn execute(&self) -> Result<Vec<Item>, GetItemsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetItemUseCase {
    result: Result<Item, GetItemError>,
}

impl StubGetItemUseCase {
    pub fn not_found() -> Self {
        Self {
            result: Err(GetItemError::NotFound),
        }
    }
}

#[async_trait]
impl GetItemUseCase for StubGetItemUseCase {
    async fn execute(&self, _id: i32) -> Result<Item, GetItemError> {
        self.result.clone()
    }
}

/// Echoes the input back with a fixed id.
#[derive(Clone, Default)]
pub struct StubCreateItemUseCase;

#[async_trait]
impl CreateItemUseCase for StubCreateItemUseCase {
    async fn execute(&self, data: CreateItemData) -> Result<Item, CreateItemError> {
        Ok(Item {
            name: data.name,
            price: data.price,
            ..sample_item(1)
        })
    }
}

#[derive(Clone, Default)]
pub struct StubUpdateItemUseCase;

#[async_trait]
impl UpdateItemUseCase for StubUpdateItemUseCase {
    async fn execute(&self, _id: i32, _data: UpdateItemData) -> Result<Item, UpdateItemError> {
        Err(UpdateItemError::NotFound)
    }
}

#[derive(Clone, Default)]
pub struct StubDeleteItemUseCase;

#[async_trait]
impl DeleteItemUseCase for StubDeleteItemUseCase {
    async fn execute(&self, _id: i32) -> Result<(), DeleteItemError> {
        Ok(())
    }
}

// ============================================================
// Users
// ============================================================

#[derive(Clone)]
pub struct StubGetUsersUseCase {
    result: Result<Vec<User>, GetUsersError>,
}

impl StubGetUsersUseCase {
    pub fn success(users: Vec<User>) -> Self {
        Self { result: Ok(users) }
    }

    pub fn error(err: GetUsersError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetUsersUseCase for StubGetUsersUseCase {
    async fn execute(&self) -> Result<Vec<User>, GetUsersError> {
        self.result.clone()
    }
}

#[derive(Clone, Default)]
pub struct StubGetUserUseCase;

#[async_trait]
impl GetUserUseCase for StubGetUserUseCase {
    async fn execute(&self, _email: &str) -> Result<User, GetUserError> {
        Err(GetUserError::NotFound)
    }
}

#[derive(Clone, Default)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl CreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, command: CreateUserCommand) -> Result<User, CreateUserError> {
        Ok(sample_user(&command.email))
    }
}

#[derive(Clone, Default)]
pub struct StubUpdateUserUseCase;

#[async_trait]
impl UpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(
        &self,
        _email: &str,
        _command: UpdateUserCommand,
    ) -> Result<User, UpdateUserError> {
        Err(UpdateUserError::NotFound)
    }
}

#[derive(Clone)]
pub struct StubDeleteUserUseCase {
    result: Result<(), DeleteUserError>,
}

impl StubDeleteUserUseCase {
    pub fn ok() -> Self {
        Self { result: Ok(()) }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(DeleteUserError::RepositoryError("db down".to_string())),
        }
    }
}

#[async_trait]
impl DeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _email: &str) -> Result<(), DeleteUserError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubLoginUserUseCase {
    result: Option<LoginError>,
}

impl StubLoginUserUseCase {
    /// Accepts any credentials and returns a user with the submitted email.
    pub fn accepting() -> Self {
        Self { result: None }
    }

    pub fn error(err: LoginError) -> Self {
        Self { result: Some(err) }
    }
}

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, command: LoginCommand) -> Result<User, LoginError> {
        match self.result.clone() {
            Some(err) => Err(err),
            None => Ok(sample_user(&command.email)),
        }
    }
}
