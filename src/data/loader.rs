//! Blocking dataset loader (feature `fetch`).
//!
//! One GET per resource, no retry, no partial result: a fetch or decode
//! failure is terminal for the render attempt.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{ChartError, ChartResult};

pub const GDP_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";
pub const TEMPERATURE_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";
pub const CYCLIST_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";
pub const EDUCATION_DATA_URL: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/choropleth_map/for_user_education.json";
pub const COUNTY_DATA_URL: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/choropleth_map/counties.json";
pub const GAME_SALES_URL: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/video-game-sales-data.json";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

#[derive(Debug)]
pub struct DatasetLoader {
    client: reqwest::blocking::Client,
}

impl DatasetLoader {
    pub fn new() -> ChartResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ChartError::Fetch(format!("client setup failed: {err}")))?;
        Ok(Self { client })
    }

    /// Fetches and decodes one JSON resource.
    pub fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> ChartResult<T> {
        debug!(url, "fetching dataset");
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|err| ChartError::Fetch(format!("GET {url} failed: {err}")))?;
        let decoded = response
            .json::<T>()
            .map_err(|err| ChartError::Decode(format!("{url}: {err}")))?;
        info!(url, "dataset loaded");
        Ok(decoded)
    }

    /// Fan-out/fan-in join over two resources.
    ///
    /// Both must fetch and decode before anything is returned; failure of
    /// either aborts the join.
    pub fn fetch_join<A, B>(&self, url_a: &str, url_b: &str) -> ChartResult<(A, B)>
    where
        A: DeserializeOwned,
        B: DeserializeOwned,
    {
        let a = self.fetch_json::<A>(url_a)?;
        let b = self.fetch_json::<B>(url_b)?;
        Ok((a, b))
    }
}
