use indexmap::IndexMap;

use crate::core::color::Color;
use crate::error::{ChartError, ChartResult};

/// Continuous domain split into N equal-width bins by N-1 boundary values,
/// each bin mapped to one discrete color.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale {
    lower: f64,
    upper: f64,
    boundaries: Vec<f64>,
    colors: Vec<Color>,
}

impl ThresholdScale {
    /// Builds the scale over `[min, max]` with one bin per color.
    pub fn equal_bins(min: f64, max: f64, colors: Vec<Color>) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ChartError::InvalidData(
                "threshold domain must be finite and ascending".to_owned(),
            ));
        }
        if colors.len() < 2 {
            return Err(ChartError::InvalidData(
                "threshold scale needs at least two colors".to_owned(),
            ));
        }
        for color in &colors {
            color.validate()?;
        }

        let bin_width = (max - min) / colors.len() as f64;
        let boundaries = (1..colors.len())
            .map(|index| min + bin_width * index as f64)
            .collect();
        Ok(Self {
            lower: min,
            upper: max,
            boundaries,
            colors,
        })
    }

    /// Maps a value to its bin color; values below/above the domain clamp to
    /// the first/last bin.
    pub fn color_for(&self, value: f64) -> ChartResult<Color> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let bin = self
            .boundaries
            .iter()
            .position(|boundary| value < *boundary)
            .unwrap_or(self.colors.len() - 1);
        Ok(self.colors[bin])
    }

    /// Lower boundary of every bin, first entry being the domain minimum.
    #[must_use]
    pub fn bin_lower_bounds(&self) -> Vec<f64> {
        let mut bounds = Vec::with_capacity(self.colors.len());
        bounds.push(self.lower);
        bounds.extend_from_slice(&self.boundaries);
        bounds
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

/// Continuous interpolation across a domain that may be reversed
/// (`domain.0 > domain.1`), as the temperature ramp is.
#[derive(Debug, Clone, Copy)]
pub struct SequentialScale {
    domain: (f64, f64),
    interpolator: fn(f64) -> Color,
}

impl SequentialScale {
    pub fn new(domain: (f64, f64), interpolator: fn(f64) -> Color) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() || domain.0 == domain.1 {
            return Err(ChartError::InvalidData(
                "sequential domain must be finite with distinct endpoints".to_owned(),
            ));
        }

        Ok(Self {
            domain,
            interpolator,
        })
    }

    pub fn color_for(&self, value: f64) -> ChartResult<Color> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let t = (value - self.domain.0) / (self.domain.1 - self.domain.0);
        Ok((self.interpolator)(t.clamp(0.0, 1.0)))
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }
}

/// Discrete category to color mapping preserving category insertion order,
/// used for legends and categorical fills.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalScale {
    entries: IndexMap<String, Color>,
}

impl OrdinalScale {
    /// Assigns palette colors to categories in order, cycling the palette
    /// when there are more categories than colors.
    pub fn new<I>(categories: I, palette: &[Color]) -> ChartResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        if palette.is_empty() {
            return Err(ChartError::InvalidData(
                "ordinal palette must not be empty".to_owned(),
            ));
        }
        for color in palette {
            color.validate()?;
        }

        let mut entries = IndexMap::new();
        for category in categories {
            let index = entries.len() % palette.len();
            entries.entry(category).or_insert(palette[index]);
        }
        if entries.is_empty() {
            return Err(ChartError::InvalidData(
                "ordinal scale needs at least one category".to_owned(),
            ));
        }

        Ok(Self { entries })
    }

    /// `None` when the category was never registered; callers pick the
    /// fallback.
    #[must_use]
    pub fn color_for(&self, category: &str) -> Option<Color> {
        self.entries.get(category).copied()
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, Color)> {
        self.entries
            .iter()
            .map(|(category, color)| (category.as_str(), *color))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
