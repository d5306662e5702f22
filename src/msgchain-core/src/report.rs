// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! One-line rendering of dispatch outcomes.

use serde::{Deserialize, Serialize};

use crate::decode::ParsedRecord;
use crate::handler::Outcome;

/// Output format for report lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable sentence per message.
    #[default]
    Text,
    /// One JSON object per message (JSON Lines).
    Json,
}

#[derive(Serialize)]
struct ReportLine<'a> {
    message: &'a str,
    result: &'a Outcome,
}

/// Render the outcome for `message` as a single line (no trailing newline).
pub fn render_line(
    message: &str,
    outcome: &Outcome,
    format: ReportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(render_text(message, outcome)),
        ReportFormat::Json => serde_json::to_string(&ReportLine {
            message,
            result: outcome,
        }),
    }
}

fn render_text(message: &str, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Matched { record, .. } => render_record(record),
        Outcome::Unrecognized => {
            format!("UNRECOGNIZED: no registered handler accepts this message: {message}")
        }
        Outcome::Malformed {
            message,
            mission,
            reason,
        } => format!(
            "MALFORMED: {} message in {} format is invalid ({}): {}",
            mission,
            mission.format_name(),
            reason,
            message
        ),
    }
}

fn render_record(record: &ParsedRecord) -> String {
    match record {
        ParsedRecord::Telemetry(t) => format!(
            "Perseverance: sol {}, {}° at the surface, humidity {}, wind {}",
            t.sol, t.temperature, t.humidity, t.wind_speed
        ),
        ParsedRecord::Payload(p) => format!("Orion: {}", p.message),
        ParsedRecord::Beacon(b) => format!(
            "Voyager {} is {} million km away",
            b.probe_id, b.distance_mkm
        ),
    }
}
