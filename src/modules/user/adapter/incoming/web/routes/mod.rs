mod create_user;
mod delete_user;
mod get_user;
mod get_users;
mod login_user;
mod update_user;

pub use create_user::*;
pub use delete_user::*;
pub use get_user::*;
pub use get_users::*;
pub use login_user::*;
pub use update_user::*;
