// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Chain assembly.
//!
//! Handlers are registered in priority order and frozen into a
//! [`HandlerChain`] by [`ChainBuilder::build`]. Registration order decides
//! which grammar wins when two could accept the same text, so a handler with
//! a narrower grammar must be registered before a more permissive one.

use thiserror::Error;
use tracing::debug;

use crate::handler::{MessageHandler, Outcome, Successor};

/// Errors raised while assembling a chain, before any message is dispatched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("handler chain is empty")]
    Empty,

    #[error("handler '{0}' is already registered")]
    Duplicate(String),
}

/// Collects handlers in priority order.
#[derive(Debug, Default)]
pub struct ChainBuilder {
    handlers: Vec<Box<dyn MessageHandler>>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler to the end of the chain.
    ///
    /// Fails if a handler with the same name is already registered.
    pub fn register(&mut self, handler: Box<dyn MessageHandler>) -> Result<&mut Self, ChainError> {
        if self.is_registered(handler.name()) {
            return Err(ChainError::Duplicate(handler.name().to_string()));
        }
        debug!(
            "registered handler {} at position {}",
            handler.name(),
            self.handlers.len()
        );
        self.handlers.push(handler);
        Ok(self)
    }

    /// Register several handlers, keeping their order.
    pub fn register_all<I>(&mut self, handlers: I) -> Result<&mut Self, ChainError>
    where
        I: IntoIterator<Item = Box<dyn MessageHandler>>,
    {
        for handler in handlers {
            self.register(handler)?;
        }
        Ok(self)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.handlers.iter().any(|h| h.name() == name)
    }

    /// Freeze the registered handlers into a chain.
    pub fn build(self) -> Result<HandlerChain, ChainError> {
        if self.handlers.is_empty() {
            return Err(ChainError::Empty);
        }
        Ok(HandlerChain {
            handlers: self.handlers,
        })
    }
}

/// An immutable, non-empty sequence of handlers.
///
/// Each handler's successor is the next one in registration order; the last
/// handler has none.
#[derive(Debug)]
pub struct HandlerChain {
    handlers: Vec<Box<dyn MessageHandler>>,
}

impl HandlerChain {
    /// Walk the chain from its head and return the terminal outcome.
    pub fn classify(&self, message: &str) -> Outcome {
        Successor::new(&self.handlers).attempt(message)
    }

    /// Handler names in the order they are tried.
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }
}
