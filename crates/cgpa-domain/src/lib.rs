//! cgpa-domain
//!
//! Pure domain models (CourseEntry, CourseLedger, GradingScale, PriorTotals).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod common;
pub mod course;
pub mod ledger;
pub mod numeric;
pub mod prior;
pub mod scale;

pub use common::*;
pub use course::*;
pub use ledger::*;
pub use numeric::*;
pub use prior::*;
pub use scale::*;
