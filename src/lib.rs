// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day → calendar date decomposition.
//!
//! This crate turns Julian Days into year, month, day, hour, minute and
//! second, switching from the proleptic Julian calendar to the Gregorian
//! calendar at 1582-10-15 (JD 2 299 161) and skipping year zero.
//!
//! # Entry points
//!
//! - [`decompose`] / [`decompose_batch`] — scalar and batch conversion to `f64` fields.
//! - [`decompose_as`] / [`decompose_batch_as`] — the same with every field cast to `T`.
//! - [`decompose_with`] — batch conversion packaged by an [`OutputFormat`] selector.
//! - [`Time::to_calendar`] — decomposition of a typed instant ([`JulianDate`], [`ModifiedJulianDate`]).
//!
//! # Output shapes
//!
//! | [`OutputFormat`] | Scalar | Batch |
//! |------------------|--------|-------|
//! | `record` | [`CalendarDate<T>`] | [`CalendarColumns<T>`] |
//! | `tuple` | [`CalendarTuple<T>`] | [`ColumnsTuple<T>`] |
//! | `paired-sequence` | [`Paired<T>`] (one item) | [`Paired<T>`] |
//!
//! # Example
//!
//! ```
//! use caldat::{decompose_batch, JulianDate};
//!
//! let j2000 = JulianDate::J2000.to_calendar().unwrap();
//! assert_eq!(j2000.to_string(), "2000-01-01T12:00:00.000");
//!
//! let columns = decompose_batch(&[2_299_160.0, 2_299_161.0]).unwrap();
//! assert_eq!(columns.day, vec![4.0, 15.0]);
//! ```

mod decompose;
mod error;
mod fields;
mod format;
pub(crate) mod instant;
mod julian_date_ext;
pub(crate) mod scales;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use decompose::{
    decompose, decompose_as, decompose_batch, decompose_batch_as, decompose_with,
    GREGORIAN_START_JD,
};
pub use error::CalendarError;
pub use fields::{CalendarColumns, CalendarDate, CalendarTuple, ColumnsTuple, Paired};
pub use format::{OutputFormat, Shape, Shaped};
pub use instant::{Time, TimeScale};
pub use scales::{JD, MJD};

/// Julian Day — continuous count of days since the Julian Period.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Modified Julian Date — `JD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;
