use std::fmt;

/// RGB color used as the visual identity of an item
///
/// Colors never affect gameplay. Presentation layers tint icons and
/// world pickups with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Parses a 6-digit hex color, with or without a leading `#`
    ///
    /// Returns None for anything else (wrong length, non-hex digits).
    ///
    /// # Example
    /// ```
    /// use slot_inventory::item::Color;
    /// assert_eq!(Color::parse_hex("#ff8000"), Some(Color::rgb(255, 128, 0)));
    /// assert_eq!(Color::parse_hex("FF8000"), Some(Color::rgb(255, 128, 0)));
    /// assert_eq!(Color::parse_hex("orange"), None);
    /// ```
    pub fn parse_hex(value: &str) -> Option<Color> {
        let digits = value.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Resolves a color field from catalog data
    ///
    /// Blank values silently become white. Malformed values become white
    /// and log a warning, they never fail the load.
    pub fn from_catalog_field(value: Option<&str>) -> Color {
        let Some(raw) = value.filter(|v| !v.trim().is_empty()) else {
            return Color::WHITE;
        };

        Color::parse_hex(raw).unwrap_or_else(|| {
            log::warn!("Invalid color '{}', falling back to white", raw);
            Color::WHITE
        })
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!(Color::parse_hex("#00FF7f"), Some(Color::rgb(0, 255, 127)));
        assert_eq!(Color::parse_hex("  00ff7f "), Some(Color::rgb(0, 255, 127)));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Color::parse_hex("#fff"), None);
        assert_eq!(Color::parse_hex("#12345g"), None);
        assert_eq!(Color::parse_hex("#1234567"), None);
        assert_eq!(Color::parse_hex(""), None);
    }

    #[test]
    fn test_catalog_field_falls_back_to_white() {
        assert_eq!(Color::from_catalog_field(None), Color::WHITE);
        assert_eq!(Color::from_catalog_field(Some("   ")), Color::WHITE);
        assert_eq!(Color::from_catalog_field(Some("not-a-color")), Color::WHITE);
        assert_eq!(Color::from_catalog_field(Some("#102030")), Color::rgb(16, 32, 48));
    }

    #[test]
    fn test_display_is_uppercase_hex() {
        assert_eq!(Color::rgb(171, 205, 239).to_string(), "#ABCDEF");
    }
}
