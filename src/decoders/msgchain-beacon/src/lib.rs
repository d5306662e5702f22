// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Deep-space probe distance beacon matcher.
//!
//! Beacon lines start with the `VYYR` tag followed by a single-digit probe id
//! and the distance in millions of kilometres:
//!
//! ```text
//! VYYR    1   3456123.234 0   0   0   1
//! ```
//!
//! Fields after the distance are status flags and are not decoded.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use msgchain_core::decode::{BeaconFix, Mission, ParsedRecord};
use msgchain_core::handler::{MessageHandler, Verdict};

static BEACON_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^VYYR\s{1,4}(?<id>\d)\s{1,4}(?<distance>\d+\.\d{1,3})\s+")
        .expect("beacon line pattern")
});

#[derive(Debug, Default, Clone, Copy)]
pub struct BeaconHandler;

impl BeaconHandler {
    pub const NAME: &'static str = "voyager";

    pub fn new() -> Self {
        Self
    }
}

impl MessageHandler for BeaconHandler {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn mission(&self) -> Mission {
        Mission::Voyager
    }

    fn parse(&self, message: &str) -> Verdict {
        let Some(caps) = BEACON_LINE.captures(message) else {
            return Verdict::NoMatch;
        };
        trace!("beacon line matched: {:?}", &caps[0]);

        let probe_id = match caps["id"].parse::<u8>() {
            Ok(id) => id,
            Err(e) => return Verdict::Malformed(format!("probe id: {}", e)),
        };
        match caps["distance"].parse::<f64>() {
            Ok(distance_mkm) => Verdict::Parsed(ParsedRecord::Beacon(BeaconFix {
                probe_id,
                distance_mkm,
            })),
            Err(e) => Verdict::Malformed(format!("distance: {}", e)),
        }
    }
}
