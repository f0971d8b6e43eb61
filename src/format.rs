// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Output shaping.
//!
//! A decomposition result can be handed back in three shapes, selected by
//! [`OutputFormat`]:
//!
//! | Format | Scalar input | Batch input |
//! |--------|--------------|-------------|
//! | [`Record`](OutputFormat::Record) | [`CalendarDate<T>`] | [`CalendarColumns<T>`] |
//! | [`Tuple`](OutputFormat::Tuple) | `(T, T, T, T, T, T)` | six `Vec<T>` |
//! | [`PairedSequence`](OutputFormat::PairedSequence) | one-item [`Paired<T>`] | [`Paired<T>`] |

use crate::error::CalendarError;
use crate::fields::{CalendarColumns, CalendarDate, CalendarTuple, ColumnsTuple, Paired};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shape of a decomposition result.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OutputFormat {
    /// Labelled structure with six named fields.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "dict"))]
    Record,
    /// Ordered `(year, month, day, hour, minute, second)` tuple.
    Tuple,
    /// Lazy sequence of 6-tuples, one per input element.
    #[cfg_attr(feature = "serde", serde(alias = "paired", alias = "zip"))]
    PairedSequence,
}

impl OutputFormat {
    /// Canonical selector name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Record => "record",
            Self::Tuple => "tuple",
            Self::PairedSequence => "paired-sequence",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CalendarError;

    /// Case-insensitive; `dict` and `zip` are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "record" | "dict" => Ok(Self::Record),
            "tuple" => Ok(Self::Tuple),
            "paired-sequence" | "paired" | "zip" => Ok(Self::PairedSequence),
            _ => Err(CalendarError::InvalidFormat(s.to_owned())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Shape trait
// ═══════════════════════════════════════════════════════════════════════════

/// Record types that can be repackaged per [`OutputFormat`].
pub trait Shape: Sized {
    /// Numeric type of every field.
    type Value;
    /// Positional form of the record.
    type Tuple;

    fn into_tuple(self) -> Self::Tuple;

    fn into_paired(self) -> Paired<Self::Value>;

    /// Package `self` according to `format`.
    fn shape(self, format: OutputFormat) -> Shaped<Self> {
        match format {
            OutputFormat::Record => Shaped::Record(self),
            OutputFormat::Tuple => Shaped::Tuple(self.into_tuple()),
            OutputFormat::PairedSequence => Shaped::Paired(self.into_paired()),
        }
    }
}

impl<T> Shape for CalendarDate<T> {
    type Value = T;
    type Tuple = CalendarTuple<T>;

    #[inline]
    fn into_tuple(self) -> Self::Tuple {
        CalendarDate::into_tuple(self)
    }

    fn into_paired(self) -> Paired<T> {
        CalendarColumns::from(self).into_paired()
    }
}

impl<T> Shape for CalendarColumns<T> {
    type Value = T;
    type Tuple = ColumnsTuple<T>;

    #[inline]
    fn into_tuple(self) -> Self::Tuple {
        CalendarColumns::into_tuple(self)
    }

    #[inline]
    fn into_paired(self) -> Paired<T> {
        CalendarColumns::into_paired(self)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Shaped<R>
// ═══════════════════════════════════════════════════════════════════════════

/// A decomposition result packaged in one of the [`OutputFormat`] shapes.
#[derive(Debug)]
pub enum Shaped<R: Shape> {
    Record(R),
    Tuple(R::Tuple),
    Paired(Paired<R::Value>),
}

impl<R: Shape> Shaped<R> {
    /// The format this value was packaged with.
    pub fn format(&self) -> OutputFormat {
        match self {
            Self::Record(_) => OutputFormat::Record,
            Self::Tuple(_) => OutputFormat::Tuple,
            Self::Paired(_) => OutputFormat::PairedSequence,
        }
    }

    pub fn into_record(self) -> Option<R> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn into_tuple(self) -> Option<R::Tuple> {
        match self {
            Self::Tuple(tuple) => Some(tuple),
            _ => None,
        }
    }

    pub fn into_paired(self) -> Option<Paired<R::Value>> {
        match self {
            Self::Paired(paired) => Some(paired),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon() -> CalendarDate {
        CalendarDate {
            year: 2000.0,
            month: 1.0,
            day: 1.0,
            hour: 12.0,
            minute: 0.0,
            second: 0.0,
        }
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("record".parse::<OutputFormat>(), Ok(OutputFormat::Record));
        assert_eq!("dict".parse::<OutputFormat>(), Ok(OutputFormat::Record));
        assert_eq!("Tuple".parse::<OutputFormat>(), Ok(OutputFormat::Tuple));
        assert_eq!(
            "paired-sequence".parse::<OutputFormat>(),
            Ok(OutputFormat::PairedSequence)
        );
        assert_eq!(" zip ".parse::<OutputFormat>(), Ok(OutputFormat::PairedSequence));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert_eq!(
            "csv".parse::<OutputFormat>(),
            Err(CalendarError::InvalidFormat("csv".into()))
        );
        assert!("".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn display_roundtrips_through_from_str() {
        for format in [
            OutputFormat::Record,
            OutputFormat::Tuple,
            OutputFormat::PairedSequence,
        ] {
            assert_eq!(format.to_string().parse::<OutputFormat>(), Ok(format));
        }
        assert_eq!(OutputFormat::default(), OutputFormat::Record);
    }

    #[test]
    fn scalar_shapes() {
        let record = noon().shape(OutputFormat::Record);
        assert_eq!(record.format(), OutputFormat::Record);
        assert_eq!(record.into_record(), Some(noon()));

        let tuple = noon().shape(OutputFormat::Tuple).into_tuple();
        assert_eq!(tuple, Some((2000.0, 1.0, 1.0, 12.0, 0.0, 0.0)));

        let paired: Vec<_> = noon()
            .shape(OutputFormat::PairedSequence)
            .into_paired()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(paired, vec![(2000.0, 1.0, 1.0, 12.0, 0.0, 0.0)]);
    }

    #[test]
    fn batch_shapes() {
        let columns: CalendarColumns = vec![noon(), CalendarDate { day: 2.0, ..noon() }]
            .into_iter()
            .collect();

        let (_, _, day, hour, _, _) = columns
            .clone()
            .shape(OutputFormat::Tuple)
            .into_tuple()
            .unwrap();
        assert_eq!(day, vec![1.0, 2.0]);
        assert_eq!(hour, vec![12.0, 12.0]);

        let shaped = columns.shape(OutputFormat::PairedSequence);
        assert!(shaped.into_record().is_none());
    }
}
