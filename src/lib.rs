//! money_transfer - Atomic account-to-account transfers on PostgreSQL.
//!
//! Registered users hold monetary accounts; the transfer engine moves funds
//! between two accounts atomically. Deadlock-free under arbitrary concurrency
//! because contested row locks are always acquired in ascending account-id
//! order, inside one transaction per transfer.
//!
//! # Modules
//!
//! - [`models`] - User, Account and the transfer command
//! - [`validation`] - Field-tagged validation, phases A and B
//! - [`store`] - User/account repositories (incl. `FOR UPDATE` reads)
//! - [`transfer`] - The transfer engine and its transaction boundary
//! - [`db`] - Connection pool and idempotent schema bootstrap
//! - [`gateway`] - Thin axum HTTP layer
//! - [`config`] / [`logging`] - Process configuration and tracing setup

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod store;
pub mod transfer;
pub mod validation;

// Convenient re-exports at crate root
pub use db::Database;
pub use models::{Account, Transfer, TransferRequest, User};
pub use store::{AccountRepository, UserRepository};
pub use transfer::{TransferEngine, TransferError, TransferService};
pub use validation::ValidationError;
