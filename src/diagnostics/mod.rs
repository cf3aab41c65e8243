// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording application activity.
//!
//! Captures user actions, warnings, errors and timed network operations in
//! a memory-bounded circular buffer, and exports them as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticsCollector`]: Owner of the buffer, drained on each tick
//! - [`DiagnosticsHandle`]: Cloneable, non-blocking sender used by components

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AppOperation, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction,
    WarningEvent, WarningType,
};
