mod create_user_use_case;
mod delete_user_use_case;
mod get_user_use_case;
mod get_users_use_case;
mod login_user_use_case;
mod update_user_use_case;

pub use create_user_use_case::{CreateUserCommand, CreateUserError, CreateUserUseCase};
pub use delete_user_use_case::{DeleteUserError, DeleteUserUseCase};
pub use get_user_use_case::{GetUserError, GetUserUseCase};
pub use get_users_use_case::{GetUsersError, GetUsersUseCase};
pub use login_user_use_case::{LoginCommand, LoginError, LoginUserUseCase};
pub use update_user_use_case::{UpdateUserCommand, UpdateUserError, UpdateUserUseCase};
