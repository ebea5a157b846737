#![doc(test(attr(deny(warnings))))]

//! CGPA Calc computes a cumulative grade-point average from course grades,
//! credit units and previously accumulated totals, and ships an interactive
//! shell to drive the calculation.

pub mod cli;
pub mod errors;
pub mod utils;

pub use cgpa_config as config;
pub use cgpa_core as core;
pub use cgpa_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("CGPA Calc tracing initialized.");
    });
}
