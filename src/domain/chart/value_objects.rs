use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Ranges narrower than this are treated as flat
pub const FLAT_RANGE_EPSILON: f64 = 1e-9;

/// Value Object - Color theme. Affects palette only, never geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[display(fmt = "light")]
    #[strum(serialize = "light")]
    Light,
    #[default]
    #[display(fmt = "dark")]
    #[strum(serialize = "dark")]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::from_hex(0x0f172a),
                grid: Color::from_hex(0x1e293b),
                bullish: Color::from_hex(0x10b981),
                bearish: Color::from_hex(0xef4444),
                moving_average: Color::from_hex(0x3b82f6),
                current_price: Color::from_hex(0x06b6d4),
                label_text: Color::WHITE,
            },
            Theme::Light => Palette {
                background: Color::from_hex(0xf8fafc),
                grid: Color::from_hex(0xe2e8f0),
                bullish: Color::from_hex(0x10b981),
                bearish: Color::from_hex(0xef4444),
                moving_average: Color::from_hex(0x2563eb),
                current_price: Color::from_hex(0x0891b2),
                label_text: Color::WHITE,
            },
        }
    }
}

/// Value Object - opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(((hex >> 16) & 0xFF) as u8, ((hex >> 8) & 0xFF) as u8, (hex & 0xFF) as u8)
    }

    pub fn to_hex(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// `#rrggbb`, as accepted by canvas style setters
    pub fn to_css(&self) -> String {
        format!("#{:06x}", self.to_hex())
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

/// Value Object - every color the renderer uses for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Color,
    pub grid: Color,
    pub bullish: Color,
    pub bearish: Color,
    pub moving_average: Color,
    pub current_price: Color,
    pub label_text: Color,
}

/// Map a price to a raster y coordinate.
///
/// `max_price` lands on `margin`, `min_price` on `pixel_height - margin`.
/// A flat range (narrower than [`FLAT_RANGE_EPSILON`] or not finite) maps
/// every price to the vertical midpoint.
pub fn scale_y(price: f64, min_price: f64, max_price: f64, pixel_height: f64, margin: f64) -> f64 {
    let range = max_price - min_price;
    if !range.is_finite() || range.abs() < FLAT_RANGE_EPSILON {
        return pixel_height / 2.0;
    }
    let drawable = pixel_height - 2.0 * margin;
    pixel_height - ((price - min_price) / range) * drawable - margin
}

/// Value Object - price-to-pixel transform for one render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub min_price: f64,
    pub max_price: f64,
    pub pixel_height: f64,
    pub margin: f64,
}

impl ViewTransform {
    pub fn new(min_price: f64, max_price: f64, pixel_height: f64, margin: f64) -> Self {
        Self { min_price, max_price, pixel_height, margin }
    }

    pub fn price_range(&self) -> f64 {
        self.max_price - self.min_price
    }

    pub fn is_flat(&self) -> bool {
        let range = self.price_range();
        !range.is_finite() || range.abs() < FLAT_RANGE_EPSILON
    }

    pub fn price_to_y(&self, price: f64) -> f64 {
        scale_y(price, self.min_price, self.max_price, self.pixel_height, self.margin)
    }
}
