use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#rrggbb` hex notation.
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidData(format!(
                "invalid hex color `{hex}`"
            )));
        }

        let channel = |slice: &str| -> ChartResult<u8> {
            u8::from_str_radix(slice, 16)
                .map_err(|_| ChartError::InvalidData(format!("invalid hex color `{hex}`")))
        };
        Ok(Self::from_rgb8(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ))
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// `#rrggbb` form of the opaque channels.
    #[must_use]
    pub fn to_hex(self) -> String {
        let quantize = |channel: f64| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            quantize(self.red),
            quantize(self.green),
            quantize(self.blue)
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// The ten-color categorical palette used for ordinal encodings.
pub const CATEGORY10: [Color; 10] = [
    Color::from_rgb8(0x1f, 0x77, 0xb4),
    Color::from_rgb8(0xff, 0x7f, 0x0e),
    Color::from_rgb8(0x2c, 0xa0, 0x2c),
    Color::from_rgb8(0xd6, 0x27, 0x28),
    Color::from_rgb8(0x94, 0x67, 0xbd),
    Color::from_rgb8(0x8c, 0x56, 0x4b),
    Color::from_rgb8(0xe3, 0x77, 0xc2),
    Color::from_rgb8(0x7f, 0x7f, 0x7f),
    Color::from_rgb8(0xbc, 0xbd, 0x22),
    Color::from_rgb8(0x17, 0xbe, 0xcf),
];

/// Eight-class sequential blues for the education threshold scale.
pub const BLUES_8: [Color; 8] = [
    Color::from_rgb8(0xf7, 0xfb, 0xff),
    Color::from_rgb8(0xde, 0xeb, 0xf7),
    Color::from_rgb8(0xc6, 0xdb, 0xef),
    Color::from_rgb8(0x9e, 0xca, 0xe1),
    Color::from_rgb8(0x6b, 0xae, 0xd6),
    Color::from_rgb8(0x42, 0x92, 0xc6),
    Color::from_rgb8(0x21, 0x71, 0xb5),
    Color::from_rgb8(0x08, 0x45, 0x94),
];

/// Eleven diverging red-yellow-blue stops for the temperature ramp.
pub const RD_YL_BU_11: [Color; 11] = [
    Color::from_rgb8(0xa5, 0x00, 0x26),
    Color::from_rgb8(0xd7, 0x30, 0x27),
    Color::from_rgb8(0xf4, 0x6d, 0x43),
    Color::from_rgb8(0xfd, 0xae, 0x61),
    Color::from_rgb8(0xfe, 0xe0, 0x90),
    Color::from_rgb8(0xff, 0xff, 0xbf),
    Color::from_rgb8(0xe0, 0xf3, 0xf8),
    Color::from_rgb8(0xab, 0xd9, 0xe9),
    Color::from_rgb8(0x74, 0xad, 0xd1),
    Color::from_rgb8(0x45, 0x75, 0xb4),
    Color::from_rgb8(0x31, 0x36, 0x95),
];

/// Piecewise-linear interpolation across the RdYlBu ramp.
///
/// `t` is clamped to [0, 1]; 0 is the red end, 1 the blue end.
#[must_use]
pub fn interpolate_rd_yl_bu(t: f64) -> Color {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (RD_YL_BU_11.len() - 1) as f64;
    let low = scaled.floor() as usize;
    let high = scaled.ceil() as usize;
    if low == high {
        return RD_YL_BU_11[low];
    }

    let fraction = scaled - low as f64;
    let a = RD_YL_BU_11[low];
    let b = RD_YL_BU_11[high];
    Color::rgb(
        a.red + (b.red - a.red) * fraction,
        a.green + (b.green - a.green) * fraction,
        a.blue + (b.blue - a.blue) * fraction,
    )
}
