//! Dataset models for the four public JSON sources.
//!
//! Every model decodes offline through `from_json_str`; the network loader
//! lives behind the `fetch` feature.

pub mod cyclist;
pub mod education;
pub mod games;
pub mod gdp;
pub mod temperature;
pub mod topology;

#[cfg(feature = "fetch")]
pub mod loader;

use serde::de::DeserializeOwned;

use crate::error::{ChartError, ChartResult};

pub(crate) fn decode_json<T: DeserializeOwned>(raw: &str, what: &str) -> ChartResult<T> {
    serde_json::from_str(raw).map_err(|err| ChartError::Decode(format!("{what}: {err}")))
}
