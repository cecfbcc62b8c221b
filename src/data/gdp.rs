use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::data::decode_json;
use crate::error::{ChartError, ChartResult};

/// Quarterly US GDP series: `data` rows of `[iso-date, billions]`.
#[derive(Debug, Clone, Deserialize)]
pub struct GdpDataset {
    pub data: Vec<(String, Decimal)>,
}

/// One decoded observation. `date_text` keeps the upstream date string
/// verbatim for the `data-date` annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct GdpObservation {
    pub date_text: String,
    pub date: NaiveDate,
    pub value: Decimal,
}

impl GdpDataset {
    pub fn from_json_str(raw: &str) -> ChartResult<Self> {
        decode_json(raw, "GDP dataset")
    }

    /// Parses every row's date, failing on the first malformed one.
    pub fn observations(&self) -> ChartResult<Vec<GdpObservation>> {
        self.data
            .iter()
            .map(|(date_text, value)| {
                let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d").map_err(|err| {
                    ChartError::InvalidData(format!("malformed GDP date `{date_text}`: {err}"))
                })?;
                Ok(GdpObservation {
                    date_text: date_text.clone(),
                    date,
                    value: *value,
                })
            })
            .collect()
    }
}
