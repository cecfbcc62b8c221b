pub mod band_scale;
pub mod color;
pub mod color_scale;
pub mod layout;
pub mod scale;
pub mod time_scale;
pub mod types;

pub use band_scale::BandScale;
pub use color::Color;
pub use color_scale::{OrdinalScale, SequentialScale, ThresholdScale};
pub use layout::{Margin, PlotArea, plot_area};
pub use scale::LinearScale;
pub use time_scale::TimeScale;
pub use types::{Viewport, decimal_to_f64, format_fixed1};
