//! CSS Color values
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//!
//! The paint source emits `hsl(<hue> 100% 50% / <alpha>)` fills, so the main
//! entry point here is [`ColorValue::from_hsla`]. Hex parsing is kept for the
//! CLI's background option.

use serde::Serialize;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color represented as RGBA components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorValue {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

impl ColorValue {
    /// White (#ffffff)
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 255 };

    /// [§ 7.1 The hsl() function](https://www.w3.org/TR/css-color-4/#the-hsl-notation)
    ///
    /// Construct a color from HSL components plus alpha.
    ///
    /// - `hue`: angle in degrees (wraps into [0, 360))
    /// - `saturation`, `lightness`: 0.0-1.0
    /// - `alpha`: 0.0 (transparent) - 1.0 (opaque), clamped
    #[must_use]
    pub fn from_hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
        Self { r, g, b, a: alpha_to_u8(alpha) }
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    /// "The syntax of a <hex-color> is a <hash-token> token whose value consists of
    /// 3, 4, 6, or 8 hexadecimal digits."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        match hex.len() {
            // [§ 4.2.1]
            // "The three-digit RGB notation (#RGB) is converted into six-digit form (#RRGGBB)
            // by replicating digits, not by adding zeros."
            3 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                Some(Self { r, g, b, a: 255 })
            }
            // Four-digit RGBA notation (#RGBA)
            4 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                let a = u8::from_str_radix(&hex[3..4].repeat(2), 16).ok()?;
                Some(Self { r, g, b, a })
            }
            // Six-digit RGB notation (#RRGGBB)
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b, a: 255 })
            }
            // Eight-digit RGBA notation (#RRGGBBAA)
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self { r, g, b, a })
            }
            _ => None,
        }
    }
}

/// Convert an alpha value (0.0-1.0) to a u8 (0-255).
///
/// [§ 4.1](https://www.w3.org/TR/css-color-4/#rgb-functions)
///
/// "The <alpha-value> can be a <number> (clamped to [0, 1])."
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn alpha_to_u8(alpha: f64) -> u8 {
    (alpha * 255.0).round().clamp(0.0, 255.0) as u8
}

/// [§ 4.2.4 HSL-to-RGB](https://www.w3.org/TR/css-color-4/#hsl-to-rgb)
///
/// Convert HSL color to RGB.
///
/// - hue: angle in degrees (0-360, wraps)
/// - saturation: 0.0-1.0
/// - lightness: 0.0-1.0
///
/// Returns (r, g, b) as u8 values.
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    // Normalize hue to [0, 360)
    let h = ((hue % 360.0) + 360.0) % 360.0;
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    // [§ 4.2.4](https://www.w3.org/TR/css-color-4/#hsl-to-rgb)
    //
    // "HOW TO RETURN hsl.h, hsl.s, hsl.l converted to an idealized-rgb color"
    //
    // Standard algorithm using chroma and intermediate value.
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = h / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (r1, g1, b1) = match h_prime as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        5 => (c, 0.0, x),
        _ => (0.0, 0.0, 0.0),
    };

    let m = l - c / 2.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

    (to_u8(r1), to_u8(g1), to_u8(b1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hsla_primaries() {
        // hsl(0 100% 50%) = red, hsl(120 100% 50%) = lime, hsl(240 100% 50%) = blue
        assert_eq!(ColorValue::from_hsla(0.0, 1.0, 0.5, 1.0), ColorValue { r: 255, g: 0, b: 0, a: 255 });
        assert_eq!(ColorValue::from_hsla(120.0, 1.0, 0.5, 1.0), ColorValue { r: 0, g: 255, b: 0, a: 255 });
        assert_eq!(ColorValue::from_hsla(240.0, 1.0, 0.5, 1.0), ColorValue { r: 0, g: 0, b: 255, a: 255 });
    }

    #[test]
    fn test_from_hsla_hue_wraps() {
        // 360 degrees is the same angle as 0
        assert_eq!(
            ColorValue::from_hsla(360.0, 1.0, 0.5, 1.0),
            ColorValue::from_hsla(0.0, 1.0, 0.5, 1.0)
        );
    }

    #[test]
    fn test_from_hsla_alpha_rounding() {
        // 0.5 * 255 = 127.5 rounds to 128; out-of-range alpha clamps
        assert_eq!(ColorValue::from_hsla(0.0, 1.0, 0.5, 0.5).a, 128);
        assert_eq!(ColorValue::from_hsla(0.0, 1.0, 0.5, 2.0).a, 255);
        assert_eq!(ColorValue::from_hsla(0.0, 1.0, 0.5, -1.0).a, 0);
    }

    #[test]
    fn test_from_hex_six_digit() {
        assert_eq!(
            ColorValue::from_hex("#336699"),
            Some(ColorValue { r: 0x33, g: 0x66, b: 0x99, a: 255 })
        );
    }

    #[test]
    fn test_from_hex_short_and_invalid() {
        assert_eq!(
            ColorValue::from_hex("fff"),
            Some(ColorValue { r: 255, g: 255, b: 255, a: 255 })
        );
        assert_eq!(ColorValue::from_hex("#12345"), None);
        assert_eq!(ColorValue::from_hex("#gggggg"), None);
    }
}
