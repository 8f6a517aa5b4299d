//! User domain entity.

pub mod mapper;
pub mod model;
pub mod repository;
pub mod schema;
pub mod validator;

pub use mapper::UserMapper;
pub use model::User;
pub use repository::{UserRepository, user_repository};
pub use schema::{USER_SEARCHABLES, user_schema};
pub use validator::UserValidator;
