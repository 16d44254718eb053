//! Observability for the Vitrine storefront widget.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with session context
//! - `LogBuilder` - Fluent construction of entries with typed fields
//! - `LogCapture` - In-memory buffer of emitted entries

mod logging;

pub use logging::*;
