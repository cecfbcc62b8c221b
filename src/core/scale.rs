use crate::error::{ChartError, ChartResult};

/// Linear mapping from a numeric domain onto a pixel range.
///
/// The range may be inverted (`range.0 > range.1`) so vertical axes can plot
/// larger values higher. Domain endpoints always map exactly onto the range
/// endpoints and the mapping is strictly monotonic in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() || domain.0 == domain.1 {
            return Err(ChartError::InvalidData(
                "scale domain must be finite with distinct endpoints".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() || range.0 == range.1 {
            return Err(ChartError::InvalidData(
                "scale range must be finite with distinct endpoints".to_owned(),
            ));
        }

        Ok(Self { domain, range })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.range
    }

    pub fn scale(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain.0) / (self.domain.1 - self.domain.0);
        Ok(self.range.0 + normalized * (self.range.1 - self.range.0))
    }

    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range.0) / (self.range.1 - self.range.0);
        Ok(self.domain.0 + normalized * (self.domain.1 - self.domain.0))
    }
}
