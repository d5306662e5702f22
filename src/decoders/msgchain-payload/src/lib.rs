// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Mission control JSON payload matcher.
//!
//! A payload is a JSON object carrying a text `message` field, e.g.
//! `{ "message": "Testing" }`. Unknown keys are ignored.
//!
//! How an object with the wrong shape is reported depends on
//! [`PayloadPolicy`]:
//! - `strict`: text that is not a JSON object is passed on, but an object
//!   without a string `message` is malformed.
//! - `lenient`: every decode failure is passed on to the next handler.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use msgchain_core::decode::{Mission, ParsedRecord, PayloadMessage};
use msgchain_core::handler::{MessageHandler, Verdict};

/// Reporting policy for JSON objects that do not fit the payload shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadPolicy {
    #[default]
    Strict,
    Lenient,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    message: String,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PayloadHandler {
    policy: PayloadPolicy,
}

impl PayloadHandler {
    pub const NAME: &'static str = "orion";

    pub fn new(policy: PayloadPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> PayloadPolicy {
        self.policy
    }
}

impl MessageHandler for PayloadHandler {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn mission(&self) -> Mission {
        Mission::Orion
    }

    fn parse(&self, message: &str) -> Verdict {
        let object = match serde_json::from_str::<Value>(message) {
            Ok(value @ Value::Object(_)) => value,
            Ok(_) | Err(_) => return Verdict::NoMatch,
        };
        match serde_json::from_value::<Envelope>(object) {
            Ok(envelope) => Verdict::Parsed(ParsedRecord::Payload(PayloadMessage {
                message: envelope.message,
            })),
            Err(e) => match self.policy {
                PayloadPolicy::Strict => Verdict::Malformed(e.to_string()),
                PayloadPolicy::Lenient => {
                    trace!("payload object rejected ({}), passing on", e);
                    Verdict::NoMatch
                }
            },
        }
    }
}
