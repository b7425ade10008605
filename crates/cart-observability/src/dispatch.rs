//! Dispatch logging.

use cart_core::action::ActionKind;
use cart_core::store::{CartObserver, Dispatch};

use crate::logging::{LogLevel, StructuredLogger};

/// Logs one entry per cart dispatch.
///
/// Changes log at info, no-ops at debug, unrecognized actions at warn.
#[derive(Debug, Clone)]
pub struct DispatchLogger {
    logger: StructuredLogger,
}

impl DispatchLogger {
    /// Wrap a logger.
    pub fn new(logger: StructuredLogger) -> Self {
        Self {
            logger: logger.with_component("cart-store"),
        }
    }

    /// The level a dispatch is logged at.
    pub fn level_for(dispatch: &Dispatch<'_>) -> LogLevel {
        if dispatch.action.kind() == ActionKind::Unrecognized {
            LogLevel::Warn
        } else if dispatch.changed() {
            LogLevel::Info
        } else {
            LogLevel::Debug
        }
    }
}

impl CartObserver for DispatchLogger {
    fn on_dispatch(&self, dispatch: &Dispatch<'_>) {
        let level = Self::level_for(dispatch);
        if !self.logger.enabled(level) {
            return;
        }

        let kind = dispatch.action.kind();
        let message = match level {
            LogLevel::Warn => "unrecognized action ignored",
            LogLevel::Info => "cart updated",
            _ => "cart unchanged",
        };

        let mut entry = self
            .logger
            .builder(level, message)
            .field_u64("sequence", dispatch.sequence)
            .field("action", kind.as_str())
            .field_u64("lines_before", dispatch.previous.len() as u64)
            .field_u64("lines_after", dispatch.current.len() as u64)
            .field_u64("item_count", dispatch.current.item_count())
            .field_bool("changed", dispatch.changed());

        if let Some(id) = dispatch.action.item_id() {
            entry = entry.field_u64("item_id", id.get());
        }

        entry.emit();
    }
}
