// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar field containers.
//!
//! - [`CalendarDate<T>`]: the six fields of a single decomposed instant.
//! - [`CalendarColumns<T>`]: the same six fields for a batch, stored
//!   column-wise so each field is a contiguous `Vec<T>`.
//!
//! Both default to `f64`, which keeps sub-second fractions in `second`.
//! Use [`CalendarDate::cast`] / [`CalendarColumns::cast`] to retype every
//! field at once (e.g. `i32` truncates toward zero).

use crate::error::CalendarError;
use num_traits::{NumCast, ToPrimitive};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `(year, month, day, hour, minute, second)`.
pub type CalendarTuple<T> = (T, T, T, T, T, T);

/// Column-wise tuple produced by [`CalendarColumns::into_tuple`].
pub type ColumnsTuple<T> = (Vec<T>, Vec<T>, Vec<T>, Vec<T>, Vec<T>, Vec<T>);

const FIELD_NAMES: [&str; 6] = ["year", "month", "day", "hour", "minute", "second"];

fn cast_field<T, U>(field: &'static str, value: T) -> Result<U, CalendarError>
where
    T: ToPrimitive + Copy,
    U: NumCast,
{
    U::from(value).ok_or_else(|| CalendarError::Cast {
        field,
        value: value.to_f64().unwrap_or(f64::NAN),
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// CalendarDate<T>
// ═══════════════════════════════════════════════════════════════════════════

/// Calendar date and time-of-day of a single Julian Day.
///
/// `year` follows the no-year-zero convention: the year before `1` is `-1`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDate<T = f64> {
    pub year: T,
    pub month: T,
    pub day: T,
    pub hour: T,
    pub minute: T,
    pub second: T,
}

impl<T> CalendarDate<T> {
    /// Fields in `(year, month, day, hour, minute, second)` order.
    #[inline]
    pub fn into_tuple(self) -> CalendarTuple<T> {
        (
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// Apply `f` to every field.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> CalendarDate<U> {
        CalendarDate {
            year: f(self.year),
            month: f(self.month),
            day: f(self.day),
            hour: f(self.hour),
            minute: f(self.minute),
            second: f(self.second),
        }
    }
}

impl<T: ToPrimitive + Copy> CalendarDate<T> {
    /// Convert every field to `U`.
    ///
    /// Float → integer casts truncate toward zero. Fails with
    /// [`CalendarError::Cast`] when a field is out of `U`'s range.
    pub fn cast<U: NumCast>(&self) -> Result<CalendarDate<U>, CalendarError> {
        Ok(CalendarDate {
            year: cast_field(FIELD_NAMES[0], self.year)?,
            month: cast_field(FIELD_NAMES[1], self.month)?,
            day: cast_field(FIELD_NAMES[2], self.day)?,
            hour: cast_field(FIELD_NAMES[3], self.hour)?,
            minute: cast_field(FIELD_NAMES[4], self.minute)?,
            second: cast_field(FIELD_NAMES[5], self.second)?,
        })
    }
}

impl CalendarDate<f64> {
    /// Elapsed seconds since midnight.
    #[inline]
    pub fn seconds_of_day(&self) -> f64 {
        self.hour * 3_600.0 + self.minute * 60.0 + self.second
    }
}

impl<T> From<CalendarDate<T>> for CalendarTuple<T> {
    #[inline]
    fn from(date: CalendarDate<T>) -> Self {
        date.into_tuple()
    }
}

impl fmt::Display for CalendarDate<f64> {
    /// `YYYY-MM-DDTHH:MM:SS.sss`, with a leading `-` for years before 1.
    ///
    /// The clock is rebuilt from [`seconds_of_day`](Self::seconds_of_day)
    /// truncated to milliseconds, so a `minute` of `-1` with `second ≈ 60`
    /// prints as the preceding minute and never as `:60.000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MILLIS_PER_DAY: i64 = 86_400_000;

        if self.year < 0.0 {
            f.write_str("-")?;
        }
        let millis =
            ((self.seconds_of_day() * 1_000.0).floor() as i64).clamp(0, MILLIS_PER_DAY - 1);
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}",
            self.year.abs(),
            self.month,
            self.day,
            millis / 3_600_000,
            millis / 60_000 % 60,
            millis / 1_000 % 60,
            millis % 1_000
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CalendarColumns<T>
// ═══════════════════════════════════════════════════════════════════════════

/// Calendar fields of a batch of Julian Days, one column per field.
///
/// Every column has the same length as the input batch.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarColumns<T = f64> {
    pub year: Vec<T>,
    pub month: Vec<T>,
    pub day: Vec<T>,
    pub hour: Vec<T>,
    pub minute: Vec<T>,
    pub second: Vec<T>,
}

impl CalendarColumns<f64> {
    /// `len` rows of zeros.
    pub(crate) fn zeroed(len: usize) -> Self {
        Self {
            year: vec![0.0; len],
            month: vec![0.0; len],
            day: vec![0.0; len],
            hour: vec![0.0; len],
            minute: vec![0.0; len],
            second: vec![0.0; len],
        }
    }
}

impl<T> CalendarColumns<T> {
    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.year.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.year.is_empty()
    }

    /// The six columns in `(year, month, day, hour, minute, second)` order.
    pub fn into_tuple(self) -> ColumnsTuple<T> {
        (
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// Single-pass iterator of per-row tuples.
    pub fn into_paired(self) -> Paired<T> {
        Paired {
            year: self.year.into_iter(),
            month: self.month.into_iter(),
            day: self.day.into_iter(),
            hour: self.hour.into_iter(),
            minute: self.minute.into_iter(),
            second: self.second.into_iter(),
        }
    }
}

impl<T: Copy> CalendarColumns<T> {
    /// Row `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<CalendarDate<T>> {
        Some(CalendarDate {
            year: *self.year.get(index)?,
            month: *self.month.get(index)?,
            day: *self.day.get(index)?,
            hour: *self.hour.get(index)?,
            minute: *self.minute.get(index)?,
            second: *self.second.get(index)?,
        })
    }

    /// Iterate rows as [`CalendarDate`] records.
    pub fn iter(&self) -> impl Iterator<Item = CalendarDate<T>> + '_ {
        (0..self.len()).map_while(move |i| self.get(i))
    }
}

impl<T: ToPrimitive + Copy> CalendarColumns<T> {
    /// Convert every value of every column to `U`.
    ///
    /// See [`CalendarDate::cast`] for the conversion rules.
    pub fn cast<U: NumCast>(&self) -> Result<CalendarColumns<U>, CalendarError> {
        fn column<T: ToPrimitive + Copy, U: NumCast>(
            field: &'static str,
            values: &[T],
        ) -> Result<Vec<U>, CalendarError> {
            values.iter().map(|&v| cast_field(field, v)).collect()
        }

        Ok(CalendarColumns {
            year: column(FIELD_NAMES[0], &self.year)?,
            month: column(FIELD_NAMES[1], &self.month)?,
            day: column(FIELD_NAMES[2], &self.day)?,
            hour: column(FIELD_NAMES[3], &self.hour)?,
            minute: column(FIELD_NAMES[4], &self.minute)?,
            second: column(FIELD_NAMES[5], &self.second)?,
        })
    }
}

impl<T> From<CalendarDate<T>> for CalendarColumns<T> {
    fn from(date: CalendarDate<T>) -> Self {
        Self {
            year: vec![date.year],
            month: vec![date.month],
            day: vec![date.day],
            hour: vec![date.hour],
            minute: vec![date.minute],
            second: vec![date.second],
        }
    }
}

impl<T> FromIterator<CalendarDate<T>> for CalendarColumns<T> {
    fn from_iter<I: IntoIterator<Item = CalendarDate<T>>>(iter: I) -> Self {
        let mut columns = Self {
            year: Vec::new(),
            month: Vec::new(),
            day: Vec::new(),
            hour: Vec::new(),
            minute: Vec::new(),
            second: Vec::new(),
        };
        for date in iter {
            columns.year.push(date.year);
            columns.month.push(date.month);
            columns.day.push(date.day);
            columns.hour.push(date.hour);
            columns.minute.push(date.minute);
            columns.second.push(date.second);
        }
        columns
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Paired
// ═══════════════════════════════════════════════════════════════════════════

/// Lazy sequence of `(year, month, day, hour, minute, second)` tuples.
///
/// Consumes the columns it was built from, so it can be walked once.
#[derive(Debug, Clone)]
pub struct Paired<T> {
    year: std::vec::IntoIter<T>,
    month: std::vec::IntoIter<T>,
    day: std::vec::IntoIter<T>,
    hour: std::vec::IntoIter<T>,
    minute: std::vec::IntoIter<T>,
    second: std::vec::IntoIter<T>,
}

impl<T> Iterator for Paired<T> {
    type Item = CalendarTuple<T>;

    fn next(&mut self) -> Option<Self::Item> {
        Some((
            self.year.next()?,
            self.month.next()?,
            self.day.next()?,
            self.hour.next()?,
            self.minute.next()?,
            self.second.next()?,
        ))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.year.size_hint()
    }
}

impl<T> ExactSizeIterator for Paired<T> {}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
