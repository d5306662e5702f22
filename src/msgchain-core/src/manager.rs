// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Feeds messages to the chain and reports each terminal outcome.

use std::io::{self, Write};

use tracing::{info, warn};

use crate::chain::HandlerChain;
use crate::handler::Outcome;
use crate::report::{render_line, ReportFormat};

/// Per-outcome counters for a batch of dispatched messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub matched: usize,
    pub unrecognized: usize,
    pub malformed: usize,
}

impl DispatchSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Matched { .. } => self.matched += 1,
            Outcome::Unrecognized => self.unrecognized += 1,
            Outcome::Malformed { .. } => self.malformed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.matched + self.unrecognized + self.malformed
    }
}

/// Owns the handler chain and renders one report line per message.
#[derive(Debug)]
pub struct MessageManager {
    chain: HandlerChain,
    format: ReportFormat,
}

impl MessageManager {
    pub fn new(chain: HandlerChain, format: ReportFormat) -> Self {
        info!("handler chain: {}", chain.handler_names().join(" -> "));
        Self { chain, format }
    }

    pub fn chain(&self) -> &HandlerChain {
        &self.chain
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Classify a message without reporting it.
    pub fn classify(&self, message: &str) -> Outcome {
        self.chain.classify(message)
    }

    /// Classify a message and write its report line to `out`.
    pub fn dispatch<W: Write>(&self, message: &str, out: &mut W) -> io::Result<Outcome> {
        let outcome = self.chain.classify(message);
        match &outcome {
            Outcome::Matched { handler, .. } => info!("message accepted by {}", handler),
            Outcome::Unrecognized => warn!("no handler recognized message: {}", message),
            Outcome::Malformed {
                mission, reason, ..
            } => warn!("malformed {} message ({}): {}", mission, reason, message),
        }
        let line = render_line(message, &outcome, self.format)?;
        writeln!(out, "{}", line)?;
        Ok(outcome)
    }

    /// Dispatch every non-blank line of `input` in order.
    ///
    /// A message that fails to classify never stops the ones after it; only
    /// an output error aborts the batch.
    pub fn dispatch_all<W: Write>(&self, input: &str, out: &mut W) -> io::Result<DispatchSummary> {
        let mut summary = DispatchSummary::default();
        for line in input.lines() {
            let message = line.strip_suffix('\r').unwrap_or(line);
            if message.trim().is_empty() {
                continue;
            }
            let outcome = self.dispatch(message, out)?;
            summary.record(&outcome);
        }
        info!(
            "dispatched {} message(s): {} matched, {} unrecognized, {} malformed",
            summary.total(),
            summary.matched,
            summary.unrecognized,
            summary.malformed
        );
        Ok(summary)
    }
}
