//! cgpa-core
//!
//! Business logic for the CGPA calculator: ledger mutations, aggregation and
//! the session that ties them together.
//! Depends on cgpa-domain. No CLI, no terminal I/O, no storage.

pub mod aggregator;
pub mod error;
pub mod format;
pub mod ledger_service;
pub mod public_api;
pub mod session;

pub use aggregator::*;
pub use error::CoreError;
pub use ledger_service::*;
pub use session::*;

#[cfg(test)]
mod tests;
