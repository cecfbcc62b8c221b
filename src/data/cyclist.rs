use serde::Deserialize;

use crate::data::decode_json;
use crate::error::ChartResult;

/// One Alpe d'Huez ascent record from the cyclist dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CyclistRide {
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Seconds")]
    pub seconds: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Nationality")]
    pub nationality: String,
    /// Free-text allegation; empty means no allegation.
    #[serde(rename = "Doping")]
    pub doping: String,
}

impl CyclistRide {
    #[must_use]
    pub fn has_doping_allegation(&self) -> bool {
        !self.doping.is_empty()
    }
}

pub fn rides_from_json_str(raw: &str) -> ChartResult<Vec<CyclistRide>> {
    decode_json(raw, "cyclist dataset")
}
