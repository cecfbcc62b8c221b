use chrono::{Datelike, NaiveDate};

use crate::core::scale::LinearScale;
use crate::error::{ChartError, ChartResult};

/// Calendar-date scale backed by a linear mapping over a day count.
///
/// Dates map proportionally to their day offset from the common era, so the
/// mapping stays strictly monotonic and the domain endpoints land exactly on
/// the range endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(start: NaiveDate, end: NaiveDate, range: (f64, f64)) -> ChartResult<Self> {
        if start == end {
            return Err(ChartError::InvalidData(
                "time scale domain must span more than one day".to_owned(),
            ));
        }

        let inner = LinearScale::new((day_number(start), day_number(end)), range)?;
        Ok(Self { inner })
    }

    /// Fits the domain to the earliest and latest date present in `dates`.
    pub fn from_dates(dates: &[NaiveDate], range: (f64, f64)) -> ChartResult<Self> {
        let first = dates.iter().min().copied();
        let last = dates.iter().max().copied();
        match (first, last) {
            (Some(start), Some(end)) => Self::new(start, end, range),
            _ => Err(ChartError::InvalidData(
                "time scale cannot be built from empty data".to_owned(),
            )),
        }
    }

    pub fn scale(self, date: NaiveDate) -> ChartResult<f64> {
        self.inner.scale(day_number(date))
    }

    pub fn invert(self, pixel: f64) -> ChartResult<NaiveDate> {
        let day = self.inner.invert(pixel)?.round();
        if day < f64::from(i32::MIN) || day > f64::from(i32::MAX) {
            return Err(ChartError::InvalidData(
                "pixel maps outside the representable date range".to_owned(),
            ));
        }
        NaiveDate::from_num_days_from_ce_opt(day as i32).ok_or_else(|| {
            ChartError::InvalidData("pixel maps outside the representable date range".to_owned())
        })
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.inner.range()
    }
}

fn day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}
