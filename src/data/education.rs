use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::data::decode_json;
use crate::error::ChartResult;

/// County-level educational attainment record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountyEducation {
    pub fips: u32,
    pub state: String,
    pub area_name: String,
    #[serde(rename = "bachelorsOrHigher")]
    pub bachelors_or_higher: Decimal,
}

pub fn counties_from_json_str(raw: &str) -> ChartResult<Vec<CountyEducation>> {
    decode_json(raw, "education dataset")
}

/// Keyed lookup from FIPS code to education record.
///
/// The cross-reference between geometry and education data goes through this
/// index; a miss is an ordinary `None`, never a crash. Duplicate FIPS codes
/// keep the first record seen.
#[derive(Debug, Clone)]
pub struct EducationIndex<'a> {
    by_fips: HashMap<u32, &'a CountyEducation>,
}

impl<'a> EducationIndex<'a> {
    #[must_use]
    pub fn new(records: &'a [CountyEducation]) -> Self {
        let mut by_fips = HashMap::with_capacity(records.len());
        for record in records {
            by_fips.entry(record.fips).or_insert(record);
        }
        Self { by_fips }
    }

    #[must_use]
    pub fn get(&self, fips: u32) -> Option<&'a CountyEducation> {
        self.by_fips.get(&fips).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_fips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_fips.is_empty()
    }
}
