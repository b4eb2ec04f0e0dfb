use crate::error::{PitchvizError, PitchvizResult};

/// Straight (non-premultiplied) sRGB color, components in 0..=1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (case-insensitive, `#` optional).
    pub fn from_hex(s: &str) -> PitchvizResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> PitchvizResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| PitchvizError::color(format!("invalid hex byte \"{pair}\"")))
        }

        let (r, g, b, a) = match s.len() {
            6 => {
                let r = hex_byte(&s[0..2])?;
                let g = hex_byte(&s[2..4])?;
                let b = hex_byte(&s[4..6])?;
                (r, g, b, 255)
            }
            8 => {
                let r = hex_byte(&s[0..2])?;
                let g = hex_byte(&s[2..4])?;
                let b = hex_byte(&s[4..6])?;
                let a = hex_byte(&s[6..8])?;
                (r, g, b, a)
            }
            _ => {
                return Err(PitchvizError::color(
                    "hex color must be #RRGGBB or #RRGGBBAA",
                ));
            }
        };

        Ok(Self::rgba(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        ))
    }

    /// Hex form suitable for SVG attributes: `#rrggbb`, or `#rrggbbaa` when
    /// the alpha channel is not fully opaque.
    pub fn to_hex(self) -> String {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        let (r, g, b, a) = (to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a));
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Component-wise interpolation in straight sRGB space. Endpoints are
    /// exact: `t <= 0` yields `a`, `t >= 1` yields `b`.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        fn mix(a: f64, b: f64, t: f64) -> f64 {
            if t <= 0.0 {
                a
            } else if t >= 1.0 {
                b
            } else {
                a + (b - a) * t
            }
        }

        Self {
            r: mix(a.r, b.r, t),
            g: mix(a.g, b.g, t),
            b: mix(a.b, b.b, t),
            a: mix(a.a, b.a, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_rgb_and_rgba() {
        let c = Color::from_hex("#ff0000").unwrap();
        assert_eq!(c, Color::rgb(1.0, 0.0, 0.0));

        let c = Color::from_hex("0000ff80").unwrap();
        assert!((c.b - 1.0).abs() < 1e-9);
        assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);

        assert!(Color::from_hex("#abc").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn hex_roundtrip() {
        for s in ["#22c55e", "#0f172a", "#fbbf24"] {
            assert_eq!(Color::from_hex(s).unwrap().to_hex(), s);
        }
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = Color::from_rgb8(0x0f, 0x17, 0x2a);
        let b = Color::from_rgb8(0x3b, 0x82, 0xf6);
        assert_eq!(Color::lerp(a, b, 0.0), a);
        assert_eq!(Color::lerp(a, b, 1.0), b);

        let mid = Color::lerp(a, b, 0.5);
        assert!(mid.r > a.r && mid.r < b.r);
    }
}
