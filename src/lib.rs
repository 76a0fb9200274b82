//! skeleton - A minimal application skeleton
//!
//! This library provides a few small functions (greeting, arithmetic and
//! data tagging) together with the entry sequence used by the binary.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod error;
pub mod example_module;
pub mod output;

pub use error::{Error, Result};
pub use example_module::{DataKind, Number, ProcessedData, calculate_sum, greet, process_data};
