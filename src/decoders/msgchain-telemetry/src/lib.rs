// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Rover surface telemetry matcher.
//!
//! Frames look like `SOL:668TEM:12.5HUM:4.0WND:35.92`: fixed tags in fixed
//! order, anchored at the start of the message. Anything after the wind
//! field is ignored.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use msgchain_core::decode::{Mission, ParsedRecord, TelemetryReading};
use msgchain_core::handler::{MessageHandler, Verdict};

static TELEMETRY_FRAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^SOL:(?<sol>\d+)TEM:(?<temperature>\d+\.\d{1,2})HUM:(?<humidity>\d+\.\d{1,2})WND:(?<wind>\d{1,3}\.\d{1,2})",
    )
    .expect("telemetry frame pattern")
});

#[derive(Debug, Default, Clone, Copy)]
pub struct TelemetryHandler;

impl TelemetryHandler {
    pub const NAME: &'static str = "perseverance";

    pub fn new() -> Self {
        Self
    }
}

impl MessageHandler for TelemetryHandler {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn mission(&self) -> Mission {
        Mission::Perseverance
    }

    fn parse(&self, message: &str) -> Verdict {
        let Some(caps) = TELEMETRY_FRAME.captures(message) else {
            return Verdict::NoMatch;
        };
        trace!("telemetry frame matched: {}", &caps[0]);

        // The grammar only admits digits and one dot, so the decimal fields
        // always parse; the sol can still overflow.
        let sol = match caps["sol"].parse::<u64>() {
            Ok(sol) => sol,
            Err(e) => return Verdict::Malformed(format!("sol '{}': {}", &caps["sol"], e)),
        };
        let field = |name: &str| caps[name].parse::<f64>();
        match (field("temperature"), field("humidity"), field("wind")) {
            (Ok(temperature), Ok(humidity), Ok(wind_speed)) => {
                Verdict::Parsed(ParsedRecord::Telemetry(TelemetryReading {
                    sol,
                    temperature,
                    humidity,
                    wind_speed,
                }))
            }
            _ => Verdict::Malformed("unreadable decimal field".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(msg: &str) -> Verdict {
        TelemetryHandler::new().parse(msg)
    }

    #[test]
    fn test_reference_frame() {
        assert_eq!(
            parse("SOL:668TEM:12.5HUM:4.0WND:35.92"),
            Verdict::Parsed(ParsedRecord::Telemetry(TelemetryReading {
                sol: 668,
                temperature: 12.5,
                humidity: 4.0,
                wind_speed: 35.92,
            }))
        );
    }

    #[test]
    fn test_trailing_text_is_ignored() {
        let Verdict::Parsed(ParsedRecord::Telemetry(t)) =
            parse("SOL:1TEM:0.01HUM:99.99WND:100.5 extra fields")
        else {
            panic!("expected telemetry");
        };
        assert_eq!(t.sol, 1);
        assert_eq!(t.temperature, 0.01);
        assert_eq!(t.humidity, 99.99);
        assert_eq!(t.wind_speed, 100.5);
    }

    #[test]
    fn test_must_be_anchored_at_start() {
        assert_eq!(parse(" SOL:668TEM:12.5HUM:4.0WND:35.92"), Verdict::NoMatch);
        assert_eq!(parse("xSOL:668TEM:12.5HUM:4.0WND:35.92"), Verdict::NoMatch);
    }

    #[test]
    fn test_partial_prefix_is_no_match() {
        // Recognizable tag but broken temperature: atomic grammar, not malformed.
        assert_eq!(parse("SOL:668TEM:12HUM:4.0WND:35.92"), Verdict::NoMatch);
        assert_eq!(parse("SOL:668TEM:12.555HUM:4.0WND:35.92"), Verdict::NoMatch);
        assert_eq!(parse("SOL:668"), Verdict::NoMatch);
    }

    #[test]
    fn test_wind_limits() {
        // Four integer digits in the wind field cannot match at the start.
        assert_eq!(parse("SOL:1TEM:1.0HUM:1.0WND:1000.0"), Verdict::NoMatch);
        assert_eq!(parse("SOL:1TEM:1.0HUM:1.0WND:35."), Verdict::NoMatch);
    }

    #[test]
    fn test_wind_third_fraction_digit_is_trailing() {
        // Only two fraction digits are consumed; the rest is trailing text.
        let Verdict::Parsed(ParsedRecord::Telemetry(t)) = parse("SOL:1TEM:1.0HUM:1.0WND:35.929")
        else {
            panic!("expected telemetry");
        };
        assert_eq!(t.wind_speed, 35.92);
    }

    #[test]
    fn test_sol_overflow_is_malformed() {
        let verdict = parse("SOL:99999999999999999999999TEM:1.0HUM:1.0WND:1.0");
        assert!(matches!(verdict, Verdict::Malformed(reason) if reason.starts_with("sol")));
    }

    #[test]
    fn test_non_ascii_digits_are_malformed() {
        // `\d` accepts any Unicode digit; such a frame is recognized but unreadable.
        let verdict = parse("SOL:1TEM:\u{0661}.0HUM:1.0WND:1.0");
        assert_eq!(
            verdict,
            Verdict::Malformed("unreadable decimal field".to_string())
        );
    }

    #[test]
    fn test_other_formats_do_not_match() {
        assert_eq!(parse(r#"{ "message": "Testing" }"#), Verdict::NoMatch);
        assert_eq!(parse("VYYR    1   3456123.234 0"), Verdict::NoMatch);
        assert_eq!(parse(""), Verdict::NoMatch);
    }
}
