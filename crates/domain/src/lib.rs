// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod attempt_result;
mod competition_result;
mod error;
mod types;

#[cfg(test)]
mod tests;

pub use attempt_result::{
    AttemptKind, centiseconds_to_clock_format, format_attempt_result,
    multibld_attempt_to_points,
};
pub use competition_result::{CompetitionResult, format_calendar_date, parse_calendar_date};
pub use error::DomainError;
pub use types::{EventCategory, EventId, PersonId};
