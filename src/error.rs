// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every decomposition entry point.

use thiserror::Error;

/// Failures reported while decomposing Julian Days into calendar fields.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalendarError {
    /// A Julian Day was NaN or infinite.
    ///
    /// `index` is the position inside the batch (always `0` for scalars).
    #[error("invalid Julian Day at index {index}: {value} is not finite")]
    InvalidInput { index: usize, value: f64 },

    /// The output-format selector was not one of the recognised names.
    #[error("unrecognised output format `{0}` (expected record, tuple or paired-sequence)")]
    InvalidFormat(String),

    /// A calendar field does not fit in the requested output type.
    #[error("{field} value {value} cannot be represented in the requested output type")]
    Cast { field: &'static str, value: f64 },
}
