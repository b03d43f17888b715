//! User registration and login

pub mod handlers;
pub mod models;
pub mod password;
pub mod service;

pub use models::{LoginRequest, RegisterRequest, Role, User, UserStatus};
pub use password::PasswordScheme;
pub use service::UserService;
