// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Human-readable rendering of attempt result values.
//!
//! Attempt results are plain integers whose meaning depends on the event:
//!
//! - Timed events store centiseconds
//! - Fewest moves stores a move count for singles and the mean multiplied
//!   by 100 for averages
//! - Multiple blindfolded stores `0DDTTTTTMM`, where `99 - DD` is the number
//!   of points scored
//!
//! Any non-positive value is a DNF or an attempt that was never made.

use crate::types::{EventCategory, EventId};

/// Whether a value is a single attempt or an average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptKind {
    /// The best single attempt.
    Single,
    /// The average (or mean) of a round.
    Average,
}

const CENTISECONDS_PER_SECOND: i64 = 100;
const CENTISECONDS_PER_MINUTE: i64 = 60 * CENTISECONDS_PER_SECOND;
const CENTISECONDS_PER_HOUR: i64 = 60 * CENTISECONDS_PER_MINUTE;

/// Formats a centisecond count as a clock string.
///
/// Leading zero components are dropped: `1234` is `12.34`, `6543` is
/// `1:05.43` and `360000` is `1:00:00.00`.
#[must_use]
pub fn centiseconds_to_clock_format(centiseconds: i64) -> String {
    let hours: i64 = centiseconds / CENTISECONDS_PER_HOUR;
    let minutes: i64 = (centiseconds % CENTISECONDS_PER_HOUR) / CENTISECONDS_PER_MINUTE;
    let seconds: i64 = (centiseconds % CENTISECONDS_PER_MINUTE) / CENTISECONDS_PER_SECOND;
    let hundredths: i64 = centiseconds % CENTISECONDS_PER_SECOND;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}.{hundredths:02}")
    } else if minutes > 0 {
        format!("{minutes}:{seconds:02}.{hundredths:02}")
    } else {
        format!("{seconds}.{hundredths:02}")
    }
}

/// Returns the points scored by a multiple blindfolded attempt.
#[must_use]
pub const fn multibld_attempt_to_points(value: i64) -> i64 {
    let inverted_points: i64 = (value / 10_000_000) % 100;
    99 - inverted_points
}

/// Formats an attempt result value for display in the context of `event`.
#[must_use]
pub fn format_attempt_result(event: &EventId, value: i64, kind: AttemptKind) -> String {
    if value <= 0 {
        return String::from("DNF");
    }

    match (event.category(), kind) {
        (EventCategory::Timed, _) => centiseconds_to_clock_format(value),
        (EventCategory::FewestMoves, AttemptKind::Single) => format!("{value} moves"),
        (EventCategory::FewestMoves, AttemptKind::Average) => {
            format!("{}.{:02} moves", value / 100, value % 100)
        }
        (EventCategory::MultipleBlindfolded, _) => {
            format!("{} points", multibld_attempt_to_points(value))
        }
    }
}
