//! Field service for the DataType2 facade.
//!
//! One method per contract field. Each decides between read and write from
//! the inputs it is given, encodes byte inputs, calls the ledger, renders
//! integers as decimal strings, and maps known reverts to [`ServiceError`]
//! variants. This is the main entry point for anything embedding the facade.

pub mod error;
pub mod service;
pub mod views;

pub use error::{ServiceError, ServiceResult};
pub use service::FieldService;
pub use views::{DetailsView, NumberReply, UserView};

// Re-export key types
pub use dt2_chain::{InMemoryLedger, Ledger, RpcLedger};
