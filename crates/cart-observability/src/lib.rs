//! Observability for the cart store.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with session context
//! - `DispatchLogger` - A `CartObserver` that logs every dispatch

mod dispatch;
mod logging;

pub use dispatch::*;
pub use logging::*;
