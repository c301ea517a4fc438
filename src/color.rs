//! Color Math - Contrast Derivation
//!
//! Category colors arrive as 6-hex-digit strings. Title text needs a darker
//! shade and the badge symbol a lighter one so both read against the
//! colorized background. Darken/lighten shift HSL lightness by an absolute
//! fraction, clamped to [0, 1].

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a 6-hex-digit color string (no `#` prefix).
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Format as a lowercase 6-hex-digit string (no `#` prefix).
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Reduce lightness by `amount` (0.0..=1.0), clamped at black.
    pub fn darken(self, amount: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l - amount).clamp(0.0, 1.0))
    }

    /// Increase lightness by `amount` (0.0..=1.0), clamped at white.
    pub fn lighten(self, amount: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l + amount).clamp(0.0, 1.0))
    }

    /// Weighted channel luminance in [0, 1]. Only the ordering matters here:
    /// lowering HSL lightness at fixed hue/saturation never raises a channel,
    /// so darken/lighten move luminance strictly down/up until they clamp.
    pub fn relative_luminance(self) -> f64 {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    fn to_hsl(self) -> (f64, f64, f64) {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } / 6.0;

        (h, s, l)
    }

    fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        if s == 0.0 {
            let v = channel(l);
            return Self { r: v, g: v, b: v };
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self {
            r: channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
            g: channel(hue_to_channel(p, q, h)),
            b: channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
        }
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        for hex in ["ff9900", "f463f4", "000000", "ffffff", "0a0b0c"] {
            let rgb = Rgb::from_hex(hex).unwrap();
            assert_eq!(rgb.to_hex(), hex);
        }
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert!(Rgb::from_hex("#ff9900").is_none());
        assert!(Rgb::from_hex("ff990").is_none());
        assert!(Rgb::from_hex("ff99zz").is_none());
        assert!(Rgb::from_hex("").is_none());
    }

    #[test]
    fn test_darken_lowers_luminance() {
        let base = Rgb::from_hex("ff9900").unwrap();
        let darker = base.darken(0.2);
        assert!(darker.relative_luminance() < base.relative_luminance());
    }

    #[test]
    fn test_lighten_raises_luminance() {
        let base = Rgb::from_hex("f463f4").unwrap();
        let lighter = base.lighten(0.3);
        assert!(lighter.relative_luminance() > base.relative_luminance());
    }

    #[test]
    fn test_extremes_clamp_without_overflow() {
        let black = Rgb::from_hex("000000").unwrap();
        assert_eq!(black.darken(0.5), black);

        let white = Rgb::from_hex("ffffff").unwrap();
        assert_eq!(white.lighten(0.5), white);

        // Near-extreme inputs clamp at the boundary instead of wrapping.
        let near_black = Rgb::from_hex("050505").unwrap();
        assert_eq!(near_black.darken(0.9).to_hex(), "000000");
        let near_white = Rgb::from_hex("fafafa").unwrap();
        assert_eq!(near_white.lighten(0.9).to_hex(), "ffffff");
    }

    #[test]
    fn test_deterministic() {
        let base = Rgb::from_hex("3366cc").unwrap();
        assert_eq!(base.darken(0.2), base.darken(0.2));
        assert_eq!(base.lighten(0.3), base.lighten(0.3));
    }
}
