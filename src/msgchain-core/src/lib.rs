// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Chained message classification for msgchain-rs.
//!
//! A [`HandlerChain`] holds format matchers in priority order. Each message is
//! offered to the head of the chain; a matcher either parses it, reports it as
//! malformed, or hands it to its successor.

pub mod chain;
pub mod decode;
pub mod handler;
pub mod manager;
pub mod report;

pub type DynResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use chain::{ChainBuilder, ChainError, HandlerChain};
pub use decode::{BeaconFix, Mission, ParsedRecord, PayloadMessage, TelemetryReading};
pub use handler::{MessageHandler, Outcome, Successor, Verdict};
pub use manager::{DispatchSummary, MessageManager};
pub use report::{render_line, ReportFormat};
