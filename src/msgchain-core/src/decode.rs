// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Shared types for records produced by the format matchers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Source a message format belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mission {
    /// Rover surface telemetry (`SOL:...TEM:...`).
    Perseverance,
    /// Mission control JSON payloads.
    Orion,
    /// Deep-space probe distance beacons (`VYYR ...`).
    Voyager,
}

impl Mission {
    /// Short description of the wire format this mission emits.
    pub fn format_name(&self) -> &'static str {
        match self {
            Mission::Perseverance => "structured telemetry",
            Mission::Orion => "json payload",
            Mission::Voyager => "beacon distance",
        }
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mission::Perseverance => "Perseverance",
            Mission::Orion => "Orion",
            Mission::Voyager => "Voyager",
        };
        f.write_str(name)
    }
}

/// A decoded message, one variant per recognized format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParsedRecord {
    #[serde(rename = "telemetry")]
    Telemetry(TelemetryReading),
    #[serde(rename = "payload")]
    Payload(PayloadMessage),
    #[serde(rename = "beacon")]
    Beacon(BeaconFix),
}

impl ParsedRecord {
    pub fn mission(&self) -> Mission {
        match self {
            ParsedRecord::Telemetry(_) => Mission::Perseverance,
            ParsedRecord::Payload(_) => Mission::Orion,
            ParsedRecord::Beacon(_) => Mission::Voyager,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryReading {
    /// Mission day (sol)
    pub sol: u64,
    /// Surface temperature
    pub temperature: f64,
    /// Relative humidity
    pub humidity: f64,
    /// Wind speed
    pub wind_speed: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadMessage {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconFix {
    /// Probe identifier (single digit)
    pub probe_id: u8,
    /// Distance from Earth in millions of kilometres
    pub distance_mkm: f64,
}
