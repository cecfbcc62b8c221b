use crate::error::{ChartError, ChartResult};

/// Ordered discrete categories mapped onto uniform pixel bands.
///
/// The first category starts at `range.0`; bands advance toward `range.1`.
/// `padding_inner` is the fraction of each step left blank between bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    categories: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
}

impl BandScale {
    pub fn new(
        categories: Vec<String>,
        range: (f64, f64),
        padding_inner: f64,
    ) -> ChartResult<Self> {
        if categories.is_empty() {
            return Err(ChartError::InvalidData(
                "band scale needs at least one category".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() || range.0 >= range.1 {
            return Err(ChartError::InvalidData(
                "band scale range must be finite and ascending".to_owned(),
            ));
        }
        if !padding_inner.is_finite() || !(0.0..1.0).contains(&padding_inner) {
            return Err(ChartError::InvalidData(
                "band padding must be in [0, 1)".to_owned(),
            ));
        }

        Ok(Self {
            categories,
            range,
            padding_inner,
        })
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn step(&self) -> f64 {
        (self.range.1 - self.range.0) / self.categories.len() as f64
    }

    /// Uniform width of one band.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    pub fn index_of(&self, category: &str) -> ChartResult<usize> {
        self.categories
            .iter()
            .position(|known| known == category)
            .ok_or_else(|| {
                ChartError::InvalidData(format!("unknown band category `{category}`"))
            })
    }

    /// Leading edge of the band for `category`.
    pub fn band_start(&self, category: &str) -> ChartResult<f64> {
        let index = self.index_of(category)?;
        Ok(self.band_start_at(index))
    }

    #[must_use]
    pub fn band_start_at(&self, index: usize) -> f64 {
        let step = self.step();
        self.range.0 + index as f64 * step + step * self.padding_inner / 2.0
    }

    /// Center of the band for `category`, used for axis tick placement.
    pub fn center(&self, category: &str) -> ChartResult<f64> {
        Ok(self.band_start(category)? + self.bandwidth() / 2.0)
    }
}
