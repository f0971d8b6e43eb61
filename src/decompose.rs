// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day → calendar date decomposition.
//!
//! The conversion follows the `caldat` routine of *Numerical Recipes in C*
//! (Press et al., 1988) and Hatcher (1984):
//!
//! 1. split the Julian Day into a midnight-aligned day count and a day fraction;
//! 2. turn the fraction into hour, minute and second;
//! 3. apply the Gregorian cross-over correction from JD 2 299 161 onwards;
//! 4. recover day, month and year from the corrected day count.
//!
//! Steps 2 and 3 and the month/year renormalisation only touch the elements
//! selected by a boolean mask, so a batch is processed column by column.
//! The scalar entry point is a one-element batch.
//!
//! ## References
//! * Press, Flannery, Teukolsky & Vetterling (1988), *Numerical Recipes in C*, §1.1
//! * Hatcher (1984), QJRAS 25, 53

use crate::error::CalendarError;
use crate::fields::{CalendarColumns, CalendarDate};
use crate::format::{OutputFormat, Shape, Shaped};
use num_traits::NumCast;

/// First Julian Day number of the Gregorian calendar (1582-10-15).
pub const GREGORIAN_START_JD: f64 = 2_299_161.0;

/// Decompose a single Julian Day into calendar fields.
///
/// ```
/// let date = caldat::decompose(2_451_545.0).unwrap();
/// assert_eq!(date.into_tuple(), (2000.0, 1.0, 1.0, 12.0, 0.0, 0.0));
/// ```
pub fn decompose(jd: f64) -> Result<CalendarDate<f64>, CalendarError> {
    let mut out = [0.0_f64; 6];
    {
        let [year, month, day, hour, minute, second] = &mut out;
        decompose_into(
            std::slice::from_ref(&jd),
            FieldsMut {
                year: std::slice::from_mut(year),
                month: std::slice::from_mut(month),
                day: std::slice::from_mut(day),
                hour: std::slice::from_mut(hour),
                minute: std::slice::from_mut(minute),
                second: std::slice::from_mut(second),
            },
        )?;
    }
    let [year, month, day, hour, minute, second] = out;
    Ok(CalendarDate {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

/// Decompose every Julian Day of `jds`, preserving order and length.
///
/// Fails on the first non-finite value with [`CalendarError::InvalidInput`].
pub fn decompose_batch(jds: &[f64]) -> Result<CalendarColumns<f64>, CalendarError> {
    let mut columns = CalendarColumns::zeroed(jds.len());
    decompose_into(
        jds,
        FieldsMut {
            year: &mut columns.year,
            month: &mut columns.month,
            day: &mut columns.day,
            hour: &mut columns.hour,
            minute: &mut columns.minute,
            second: &mut columns.second,
        },
    )?;
    Ok(columns)
}

/// [`decompose`] with every field cast to `T`.
///
/// ```
/// let date = caldat::decompose_as::<i32>(2_451_545.25).unwrap();
/// assert_eq!(date.into_tuple(), (2000, 1, 1, 18, 0, 0));
/// ```
pub fn decompose_as<T: NumCast>(jd: f64) -> Result<CalendarDate<T>, CalendarError> {
    decompose(jd)?.cast()
}

/// [`decompose_batch`] with every field cast to `T`.
pub fn decompose_batch_as<T: NumCast>(jds: &[f64]) -> Result<CalendarColumns<T>, CalendarError> {
    decompose_batch(jds)?.cast()
}

/// Decompose a batch and package it according to a format selector.
///
/// `format` accepts the names understood by [`OutputFormat`]'s `FromStr`;
/// anything else fails with [`CalendarError::InvalidFormat`].
pub fn decompose_with(
    jds: &[f64],
    format: &str,
) -> Result<Shaped<CalendarColumns<f64>>, CalendarError> {
    let format: OutputFormat = format.parse()?;
    Ok(decompose_batch(jds)?.shape(format))
}

// ═══════════════════════════════════════════════════════════════════════════
// Columnar core
// ═══════════════════════════════════════════════════════════════════════════

/// Output columns, all of the same length as the input.
struct FieldsMut<'a> {
    year: &'a mut [f64],
    month: &'a mut [f64],
    day: &'a mut [f64],
    hour: &'a mut [f64],
    minute: &'a mut [f64],
    second: &'a mut [f64],
}

/// Indices where `mask` is set.
fn selected(mask: &[bool]) -> impl Iterator<Item = usize> + '_ {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &keep)| keep.then_some(i))
}

fn ensure_finite(jds: &[f64]) -> Result<(), CalendarError> {
    match jds.iter().position(|jd| !jd.is_finite()) {
        Some(index) => {
            #[cfg(feature = "log")]
            log::warn!("rejecting non-finite Julian Day {} at index {index}", jds[index]);
            Err(CalendarError::InvalidInput {
                index,
                value: jds[index],
            })
        }
        None => Ok(()),
    }
}

fn decompose_into(jds: &[f64], out: FieldsMut<'_>) -> Result<(), CalendarError> {
    ensure_finite(jds)?;

    // Day count aligned on midnight, and the elapsed fraction of that day.
    let jul: Vec<f64> = jds.iter().map(|&jd| (jd + 0.5).floor()).collect();
    let frac: Vec<f64> = jds
        .iter()
        .zip(&jul)
        .map(|(&jd, &jul)| jd + 0.5 - jul)
        .collect();

    // Time of day. Exact midnights keep hour/minute/second at zero.
    out.hour.fill(0.0);
    out.minute.fill(0.0);
    out.second.fill(0.0);
    let has_time: Vec<bool> = frac.iter().map(|&f| f != 0.0).collect();
    for i in selected(&has_time) {
        let hour = (frac[i] * 24.0).floor();
        let fm = frac[i] - hour / 24.0;
        let minute = (fm * 1_440.0).floor();
        out.hour[i] = hour;
        out.minute[i] = minute;
        out.second[i] = (fm - minute / 1_440.0) * 86_400.0;
    }

    // Gregorian cross-over correction.
    let mut corrected = jul.clone();
    let gregorian: Vec<bool> = jul.iter().map(|&j| j >= GREGORIAN_START_JD).collect();
    for i in selected(&gregorian) {
        let jalpha = (((jul[i] - 1_867_216.0) - 0.25) / 36_524.25).floor();
        corrected[i] = jul[i] + 1.0 + jalpha - (0.25 * jalpha).floor();
    }

    #[cfg(feature = "log")]
    log::debug!(
        "decomposing {} Julian Days ({} with time of day, {} Gregorian)",
        jds.len(),
        has_time.iter().filter(|&&m| m).count(),
        gregorian.iter().filter(|&&m| m).count()
    );

    // Internal years start in March; `je` indexes months from 4 (March).
    for (i, &ja) in corrected.iter().enumerate() {
        let jb = ja + 1_524.0;
        let jc = (6_680.0 + ((jb - 2_439_870.0) - 122.1) / 365.25).floor();
        let jd = (365.0 * jc + 0.25 * jc).floor();
        let je = ((jb - jd) / 30.6001).floor();
        out.day[i] = jb - jd - (30.6001 * je).floor();
        out.month[i] = je - 1.0;
        out.year[i] = jc - 4_715.0;
    }

    let past_december: Vec<bool> = out.month.iter().map(|&m| m > 12.0).collect();
    for i in selected(&past_december) {
        out.month[i] -= 12.0;
    }

    let march_based: Vec<bool> = out.month.iter().map(|&m| m > 2.0).collect();
    for i in selected(&march_based) {
        out.year[i] -= 1.0;
    }

    // No year zero: 1 BC is -1.
    let before_common_era: Vec<bool> = out.year.iter().map(|&y| y <= 0.0).collect();
    for i in selected(&before_common_era) {
        out.year[i] -= 1.0;
    }

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(date: &CalendarDate) -> (f64, f64, f64) {
        (date.year, date.month, date.day)
    }

    #[test]
    fn j2000_is_noon_on_new_year() {
        let date = decompose(2_451_545.0).unwrap();
        assert_eq!(date.into_tuple(), (2000.0, 1.0, 1.0, 12.0, 0.0, 0.0));
    }

    #[test]
    fn known_epochs() {
        assert_eq!(ymd(&decompose(2_440_587.5).unwrap()), (1970.0, 1.0, 1.0));
        assert_eq!(ymd(&decompose(2_400_000.5).unwrap()), (1858.0, 11.0, 17.0));
        assert_eq!(ymd(&decompose(2_460_000.5).unwrap()), (2023.0, 2.0, 25.0));
        assert_eq!(ymd(&decompose(2_415_020.0).unwrap()), (1899.0, 12.0, 31.0));
    }

    #[test]
    fn gregorian_cross_over_skips_ten_days() {
        let last_julian = decompose(2_299_160.0).unwrap();
        assert_eq!(
            last_julian.into_tuple(),
            (1582.0, 10.0, 4.0, 12.0, 0.0, 0.0)
        );

        let first_midnight = decompose(2_299_160.5).unwrap();
        assert_eq!(
            first_midnight.into_tuple(),
            (1582.0, 10.0, 15.0, 0.0, 0.0, 0.0)
        );

        let first_noon = decompose(GREGORIAN_START_JD).unwrap();
        assert_eq!(first_noon.into_tuple(), (1582.0, 10.0, 15.0, 12.0, 0.0, 0.0));

        assert_eq!(ymd(&decompose(2_299_159.5).unwrap()), (1582.0, 10.0, 4.0));
    }

    #[test]
    fn there_is_no_year_zero() {
        assert_eq!(ymd(&decompose(1_721_057.5).unwrap()), (-1.0, 1.0, 1.0));
        assert_eq!(ymd(&decompose(1_721_422.5).unwrap()), (-1.0, 12.0, 31.0));
        assert_eq!(ymd(&decompose(1_721_423.5).unwrap()), (1.0, 1.0, 1.0));
    }

    #[test]
    fn julian_period_origin() {
        let date = decompose(0.0).unwrap();
        assert_eq!(date.into_tuple(), (-4713.0, 1.0, 1.0, 12.0, 0.0, 0.0));
        assert_eq!(ymd(&decompose(-0.5).unwrap()), (-4713.0, 1.0, 1.0));
    }

    #[test]
    fn fraction_just_below_the_hour_yields_minute_minus_one() {
        // The fraction rounds one step below 20/24, so the hour is 20 and
        // the minute floor lands on -1 with the second carrying ~60.
        let date = decompose(0.333_333_333_333_333_3).unwrap();
        assert_eq!(
            (date.year, date.month, date.day, date.hour, date.minute),
            (-4713.0, 1.0, 1.0, 20.0, -1.0)
        );
        assert!((date.second - 59.999_999_999_990_41).abs() < 1e-9, "second = {}", date.second);
        assert!((date.seconds_of_day() - 72_000.0).abs() < 1e-6);
        assert_eq!(date.to_string(), "-4713-01-01T19:59:59.999");
    }

    #[test]
    fn midnight_has_exact_zero_time() {
        let date = decompose(2_451_544.5).unwrap();
        assert_eq!(date.hour, 0.0);
        assert_eq!(date.minute, 0.0);
        assert_eq!(date.second, 0.0);
    }

    #[test]
    fn quarter_days_are_exact() {
        let date = decompose(2_451_545.25).unwrap();
        assert_eq!(date.into_tuple(), (2000.0, 1.0, 1.0, 18.0, 0.0, 0.0));
    }

    #[test]
    fn fractional_day_keeps_sub_second_precision() {
        // 14:24:00 plus float noise from the day fraction.
        let date = decompose(2_451_545.1).unwrap();
        assert_eq!(ymd(&date), (2000.0, 1.0, 1.0));
        assert_eq!(date.hour, 14.0);
        let expected = 14.0 * 3_600.0 + 24.0 * 60.0;
        assert!(
            (date.seconds_of_day() - expected).abs() < 1e-3,
            "seconds of day = {}",
            date.seconds_of_day()
        );
    }

    #[test]
    fn batch_matches_scalar() {
        let jds = [2_451_545.0, 2_299_160.0, 1_721_057.5, 2_451_545.1, 0.0];
        let columns = decompose_batch(&jds).unwrap();
        assert_eq!(columns.len(), jds.len());
        for (i, &jd) in jds.iter().enumerate() {
            assert_eq!(columns.get(i), Some(decompose(jd).unwrap()), "jd = {jd}");
        }
    }

    #[test]
    fn empty_batch_is_empty() {
        let columns = decompose_batch(&[]).unwrap();
        assert!(columns.is_empty());
    }

    #[test]
    fn non_finite_input_is_rejected() {
        assert_eq!(
            decompose(f64::INFINITY),
            Err(CalendarError::InvalidInput {
                index: 0,
                value: f64::INFINITY
            })
        );

        let err = decompose_batch(&[2_451_545.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidInput { index: 1, value } if value.is_nan()));
    }

    #[test]
    fn integer_output_truncates() {
        let date = decompose_as::<i64>(2_451_545.1).unwrap();
        assert_eq!((date.year, date.month, date.day, date.hour), (2000, 1, 1, 14));

        let columns = decompose_batch_as::<i32>(&[2_299_160.0, 1_721_057.5]).unwrap();
        assert_eq!(columns.year, vec![1582, -1]);
        assert_eq!(columns.day, vec![4, 1]);
    }

    #[test]
    fn format_selector_dispatch() {
        let jds = [2_451_545.0, 2_451_546.0];

        let record = decompose_with(&jds, "record").unwrap().into_record().unwrap();
        assert_eq!(record.day, vec![1.0, 2.0]);

        let (year, ..) = decompose_with(&jds, "tuple").unwrap().into_tuple().unwrap();
        assert_eq!(year, vec![2000.0, 2000.0]);

        let rows: Vec<_> = decompose_with(&jds, "zip")
            .unwrap()
            .into_paired()
            .unwrap()
            .collect();
        assert_eq!(rows[1], (2000.0, 1.0, 2.0, 12.0, 0.0, 0.0));

        assert_eq!(
            decompose_with(&jds, "json").unwrap_err(),
            CalendarError::InvalidFormat("json".into())
        );
    }
}
