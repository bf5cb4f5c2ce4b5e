use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLUE: Color = Color {
        r: 0,
        g: 0,
        b: 255,
        a: 255,
    };

    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        // Slicing below assumes one byte per digit.
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b, a: 255 })
            }
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

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let color = Color::from_hex("#03a9f4").unwrap();
        assert_eq!(color, Color::from_rgba(3, 169, 244, 255));
    }

    #[test]
    fn parses_eight_digit_hex() {
        let color = Color::from_hex("03a9f480").unwrap();
        assert_eq!(color.a, 128);
    }

    #[test]
    fn rejects_bad_lengths() {
        assert!(Color::from_hex("#fff").is_none());
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#03a9f4ff00").is_none());
    }

    #[test]
    fn rejects_multibyte_input() {
        // "€" is three bytes, so these land on the 6- and 8-byte arms
        // without falling on a char boundary.
        assert!(Color::from_hex("€€").is_none());
        assert!(Color::from_hex("#€€ab").is_none());
        assert!(Color::from_hex("#日本語").is_none());
    }

    #[test]
    fn hex_round_trip() {
        let color = Color::from_rgba(3, 169, 244, 255);
        assert_eq!(color.to_hex(), "#03a9f4");
        assert_eq!(Color::from_hex(&color.to_hex()), Some(color));
    }
}
