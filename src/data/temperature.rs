use rust_decimal::Decimal;
use serde::Deserialize;

use crate::data::decode_json;
use crate::error::ChartResult;

/// Global land-surface temperature dataset: a base temperature plus one
/// variance reading per year/month.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalTemperature {
    pub base_temperature: Decimal,
    pub monthly_variance: Vec<MonthlyVariance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MonthlyVariance {
    pub year: i32,
    /// 1-12 as published; the rendered `data-month` annotation is 0-based.
    pub month: u32,
    pub variance: Decimal,
}

impl GlobalTemperature {
    pub fn from_json_str(raw: &str) -> ChartResult<Self> {
        decode_json(raw, "temperature dataset")
    }

    /// Actual temperature for one reading.
    #[must_use]
    pub fn temperature_of(&self, reading: MonthlyVariance) -> Decimal {
        self.base_temperature + reading.variance
    }
}
