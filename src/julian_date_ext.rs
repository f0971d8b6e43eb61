// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day (`Time<JD>`) specific extensions.

use super::decompose::{decompose_batch, GREGORIAN_START_JD};
use super::error::CalendarError;
use super::fields::CalendarColumns;
use super::instant::{Time, TimeScale};
use super::scales::JD;

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Noon of 1582-10-15, the first day of the Gregorian calendar.
    pub const GREGORIAN_START: Self = Self::new(GREGORIAN_START_JD);

    /// Whether this instant is decomposed with the Gregorian calendar.
    ///
    /// The switch happens at the civil midnight starting 1582-10-15,
    /// i.e. from JD 2 299 160.5 onwards.
    #[inline]
    pub fn is_gregorian(&self) -> bool {
        (self.value() + 0.5).floor() >= GREGORIAN_START_JD
    }
}

impl<S: TimeScale> Time<S> {
    /// Decompose a slice of instants column-wise.
    pub fn to_calendar_columns(times: &[Self]) -> Result<CalendarColumns<f64>, CalendarError> {
        let jds: Vec<f64> = times.iter().map(Time::julian_day_value).collect();
        decompose_batch(&jds)
    }
}

#[cfg(test)]
mod tests {
    use super::super::scales::MJD;
    use super::*;
    use qtty::Days;

    #[test]
    fn gregorian_switch_is_at_civil_midnight() {
        assert!(!Time::<JD>::new(2_299_160.0).is_gregorian());
        assert!(!Time::<JD>::new(2_299_160.499).is_gregorian());
        assert!(Time::<JD>::new(2_299_160.5).is_gregorian());
        assert!(Time::<JD>::GREGORIAN_START.is_gregorian());
        assert!(Time::<JD>::J2000.is_gregorian());
    }

    #[test]
    fn gregorian_start_decomposes_to_october_15() {
        let date = Time::<JD>::GREGORIAN_START.to_calendar().unwrap();
        assert_eq!(date.into_tuple(), (1582.0, 10.0, 15.0, 12.0, 0.0, 0.0));

        let eve = (Time::<JD>::GREGORIAN_START - Days::new(1.0))
            .to_calendar()
            .unwrap();
        assert_eq!(eve.into_tuple(), (1582.0, 10.0, 4.0, 12.0, 0.0, 0.0));
    }

    #[test]
    fn columns_from_typed_instants() {
        let times = [Time::<MJD>::new(51_544.5), Time::<MJD>::new(0.0)];
        let columns = Time::to_calendar_columns(&times).unwrap();
        assert_eq!(columns.year, vec![2000.0, 1858.0]);
        assert_eq!(columns.hour, vec![12.0, 0.0]);
    }
}
