//! Hex color values as they appear in theme files.
//!
//! Theme colors are `#RRGGBB` or `#RRGGBBAA` strings. Only the leading
//! `#RRGGBB` is ever parsed; whatever follows it (an alpha byte, or anything
//! else) is carried along untouched.

use std::fmt;

/// Length of the `#RRGGBB` prefix.
pub const RGB_PREFIX_LEN: usize = 7;

/// A simple RGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses a `#RRGGBB` string. Case-insensitive; anything else is rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use literate_theme::color::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#ff6B35"), Some(Rgb(255, 107, 53)));
    /// assert_eq!(Rgb::from_hex("#fff"), None);
    /// assert_eq!(Rgb::from_hex("#ff6b35cc"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Rgb(r, g, b))
    }

    /// Formats as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Splits a theme color into its `#RRGGBB` prefix and the trailing rest.
///
/// Returns `None` when the value is shorter than the prefix or the prefix
/// would cut a multi-byte character. The prefix is not validated here.
///
/// ```rust
/// use literate_theme::color::split_color;
///
/// assert_eq!(split_color("#112233"), Some(("#112233", "")));
/// assert_eq!(split_color("#112233cc"), Some(("#112233", "cc")));
/// assert_eq!(split_color("#123"), None);
/// ```
pub fn split_color(value: &str) -> Option<(&str, &str)> {
    if value.len() < RGB_PREFIX_LEN || !value.is_char_boundary(RGB_PREFIX_LEN) {
        return None;
    }
    Some(value.split_at(RGB_PREFIX_LEN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        assert_eq!(Rgb::from_hex("#000000"), Some(Rgb(0, 0, 0)));
        assert_eq!(Rgb::from_hex("#A8B8B8"), Some(Rgb(0xa8, 0xb8, 0xb8)));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert_eq!(Rgb::from_hex("112233"), None);
        assert_eq!(Rgb::from_hex("#11223g"), None);
        assert_eq!(Rgb::from_hex("#+12233"), None);
        assert_eq!(Rgb::from_hex("red"), None);
        assert_eq!(Rgb::from_hex(""), None);
    }

    #[test]
    fn test_to_hex_lowercase() {
        assert_eq!(Rgb(0xAB, 0x0C, 0xFF).to_hex(), "#ab0cff");
        assert_eq!(Rgb(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn test_split_color_multibyte() {
        assert_eq!(split_color("#11223é"), None);
        assert_eq!(split_color("#112233é"), Some(("#112233", "é")));
    }
}
