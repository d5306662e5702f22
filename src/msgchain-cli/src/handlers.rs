// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Built-in handler chain.
//!
//! Handlers are tried in this order:
//! 1. `perseverance` (telemetry): fixed tags, anchored at the start.
//! 2. `voyager` (beacon): fixed tag, anchored at the start.
//! 3. `orion` (JSON payload): must come after the anchored grammars. Under
//!    the strict policy it claims every JSON object, so it is the widest
//!    grammar in the chain.

use msgchain_beacon::BeaconHandler;
use msgchain_core::{ChainBuilder, ChainError, HandlerChain, MessageHandler};
use msgchain_payload::{PayloadHandler, PayloadPolicy};
use msgchain_telemetry::TelemetryHandler;

/// The built-in handlers in priority order.
pub fn builtin_handlers(policy: PayloadPolicy) -> Vec<Box<dyn MessageHandler>> {
    vec![
        Box::new(TelemetryHandler::new()),
        Box::new(BeaconHandler::new()),
        Box::new(PayloadHandler::new(policy)),
    ]
}

/// Register all built-in handlers on a builder.
pub fn register_builtin_handlers_on(
    builder: &mut ChainBuilder,
    policy: PayloadPolicy,
) -> Result<(), ChainError> {
    builder.register_all(builtin_handlers(policy))?;
    Ok(())
}

pub fn build_default_chain(policy: PayloadPolicy) -> Result<HandlerChain, ChainError> {
    let mut builder = ChainBuilder::new();
    register_builtin_handlers_on(&mut builder, policy)?;
    builder.build()
}
