//! The transfer engine: ordered lock acquisition, re-validation against the
//! locked snapshot, and the debit/credit pair.

pub mod engine;
pub mod error;

pub use engine::{TransferEngine, TransferService};
pub use error::TransferError;
