// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

/// Built-in transmission used by `--sample`: two beacons, one unknown
/// line, one payload and one telemetry frame.
pub const SAMPLE_TRANSMISSION: &str = "\
VYYR    1   3456123.234 0   0   0   1
VYYR    2   4013225.909 0   0   0   1
---FAKE MESSAGE---FAKE MESSAGE---
{ \"message\": \"Testing\" }
SOL:668TEM:12.5HUM:4.0WND:35.92
";
