//! Repository layer for database operations

pub mod accounts;
pub mod users;

pub use accounts::AccountRepository;
pub use users::UserRepository;
