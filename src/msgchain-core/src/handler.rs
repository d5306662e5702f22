// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Message handler trait and the match/delegate protocol.
//!
//! Each handler owns exactly one grammar. [`MessageHandler::parse`] checks the
//! message against it; [`MessageHandler::attempt`] turns that verdict into an
//! [`Outcome`], handing unmatched messages to the [`Successor`].

use std::fmt::Debug;

use serde::Serialize;
use tracing::{debug, trace};

use crate::decode::{Mission, ParsedRecord};

/// Result of checking a message against a single handler's grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The message matched and was decoded.
    Parsed(ParsedRecord),
    /// The message is not in this handler's format.
    NoMatch,
    /// The message is in this handler's format but its content is invalid.
    Malformed(String),
}

/// Terminal result of walking the chain for one message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Matched {
        /// Name of the handler that accepted the message.
        handler: &'static str,
        record: ParsedRecord,
    },
    Unrecognized,
    Malformed {
        message: String,
        mission: Mission,
        reason: String,
    },
}

impl Outcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    pub fn record(&self) -> Option<&ParsedRecord> {
        match self {
            Self::Matched { record, .. } => Some(record),
            _ => None,
        }
    }
}

/// Non-owning view of the handlers after the current one.
///
/// The chain owns its handlers in registration order; a successor is simply
/// the remaining slice, so links cannot be misordered or form a cycle.
#[derive(Clone, Copy)]
pub struct Successor<'a> {
    rest: &'a [Box<dyn MessageHandler>],
}

impl<'a> Successor<'a> {
    pub fn new(rest: &'a [Box<dyn MessageHandler>]) -> Self {
        Self { rest }
    }

    /// A successor that terminates the chain.
    pub fn none() -> Self {
        Self { rest: &[] }
    }

    pub fn is_none(&self) -> bool {
        self.rest.is_empty()
    }

    /// Name of the next handler, if any.
    pub fn name(&self) -> Option<&'static str> {
        self.rest.first().map(|h| h.name())
    }

    /// Offer the message to the next handler, or report it unrecognized when
    /// the chain ends here.
    pub fn attempt(self, message: &str) -> Outcome {
        match self.rest.split_first() {
            Some((head, tail)) => {
                trace!("trying handler {}", head.name());
                head.attempt(message, Successor::new(tail))
            }
            None => Outcome::Unrecognized,
        }
    }
}

/// A link in the classification chain.
///
/// Implementors only provide their grammar via [`parse`](Self::parse); the
/// provided [`attempt`](Self::attempt) implements delegation. Handlers must not
/// keep per-message state, so a built chain can be shared between threads.
pub trait MessageHandler: Debug + Send + Sync {
    /// Stable handler name, unique within a chain.
    fn name(&self) -> &'static str;

    /// Mission whose format this handler recognizes.
    fn mission(&self) -> Mission;

    /// Check the message against this handler's grammar.
    fn parse(&self, message: &str) -> Verdict;

    /// Parse the message or delegate it to `successor`.
    ///
    /// A malformed message is reported here and never passed on.
    fn attempt(&self, message: &str, successor: Successor<'_>) -> Outcome {
        match self.parse(message) {
            Verdict::Parsed(record) => Outcome::Matched {
                handler: self.name(),
                record,
            },
            Verdict::Malformed(reason) => Outcome::Malformed {
                message: message.to_string(),
                mission: self.mission(),
                reason,
            },
            Verdict::NoMatch => {
                match successor.name() {
                    Some(next) => debug!("{}: no match, delegating to {}", self.name(), next),
                    None => debug!("{}: no match, end of chain", self.name()),
                }
                successor.attempt(message)
            }
        }
    }
}
