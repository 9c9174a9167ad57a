use serde::{Deserialize, Serialize};

/// RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("color {text:?} is not a hex string (expected '#rgb' or '#rrggbb')")]
    NotHex { text: String },
    #[error("color {text:?} contains non-hex digits")]
    BadDigits { text: String },
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Build from components in [0, 255].
    #[must_use]
    pub fn from_rgb255(r: f64, g: f64, b: f64) -> Self {
        Self::new(r / 255.0, g / 255.0, b / 255.0)
    }

    /// Components scaled to [0, 255].
    #[must_use]
    pub fn to_rgb255(self) -> [f64; 3] {
        [self.r * 255.0, self.g * 255.0, self.b * 255.0]
    }

    /// Parse a `#rgb`, `#rrggbb` or `0x`-prefixed hex color.
    pub fn from_hex(text: &str) -> Result<Self, ColorParseError> {
        let trimmed = text.trim();
        let digits = if let Some(stripped) = trimmed.strip_prefix('#') {
            stripped
        } else if let Some(stripped) = trimmed.strip_prefix("0x") {
            stripped
        } else {
            return Err(ColorParseError::NotHex {
                text: text.to_owned(),
            });
        };

        let expanded = match digits.len() {
            3 => {
                let mut result = String::with_capacity(6);
                for ch in digits.chars() {
                    result.push(ch);
                    result.push(ch);
                }
                result
            }
            6 => digits.to_owned(),
            _ => {
                return Err(ColorParseError::NotHex {
                    text: text.to_owned(),
                });
            }
        };

        let value = u32::from_str_radix(&expanded, 16).map_err(|_| ColorParseError::BadDigits {
            text: text.to_owned(),
        })?;
        let r = ((value >> 16) & 0xFF) as f64;
        let g = ((value >> 8) & 0xFF) as f64;
        let b = (value & 0xFF) as f64;
        Ok(Self::from_rgb255(r, g, b))
    }
}

/// Colormap a renderer applies to a scalar channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Colormap {
    /// Continuous elevation colormap ("terrain").
    Terrain,
    /// Discrete palette in category order.
    Listed(Vec<Color>),
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn parses_six_digit_hex() {
        let c = Color::from_hex("#ff8000").unwrap();
        assert!((c.r - 1.0).abs() < EPS);
        assert!((c.g - 128.0 / 255.0).abs() < EPS);
        assert!((c.b - 0.0).abs() < EPS);
    }

    #[test]
    fn parses_short_hex_and_0x_prefix() {
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("0x000000").unwrap(), Color::BLACK);
    }

    #[test]
    fn rejects_non_hex_input() {
        assert!(matches!(
            Color::from_hex("red"),
            Err(ColorParseError::NotHex { .. })
        ));
        assert!(matches!(
            Color::from_hex("#12345"),
            Err(ColorParseError::NotHex { .. })
        ));
        assert!(matches!(
            Color::from_hex("#zzzzzz"),
            Err(ColorParseError::BadDigits { .. })
        ));
    }

    #[test]
    fn rgb255_round_trip() {
        let c = Color::from_rgb255(12.0, 34.0, 56.0);
        let back = c.to_rgb255();
        assert!((back[0] - 12.0).abs() < EPS);
        assert!((back[1] - 34.0).abs() < EPS);
        assert!((back[2] - 56.0).abs() < EPS);
    }
}
