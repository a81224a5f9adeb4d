//! Gateway request handlers.

pub mod accounts;
pub mod health;
pub mod transfers;
pub mod users;
