use ratatui::style::Color;
use showreel_core::config::ThemeColorOverrides;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg: Color,
    pub surface: Color,
    pub surface_alt: Color,

    // Foreground colors
    pub text: Color,
    pub muted: Color,
    pub disabled: Color,

    // Semantic colors
    pub brand: Color,
    pub brand_soft: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Emerald on slate, as on the site
        Self {
            bg: Color::Rgb(0x0b, 0x12, 0x0f),
            surface: Color::Rgb(0x13, 0x1c, 0x18),
            surface_alt: Color::Rgb(0x1c, 0x27, 0x22),
            text: Color::Rgb(0xf1, 0xf5, 0xf3),
            muted: Color::Rgb(0x9c, 0xab, 0xa4),
            disabled: Color::Rgb(0x4b, 0x57, 0x52),
            brand: Color::Rgb(0x14, 0xb8, 0x7a),
            brand_soft: Color::Rgb(0x6e, 0xe7, 0xb7),
            error: Color::Rgb(0xf8, 0x71, 0x71),
            success: Color::Rgb(0x34, 0xd3, 0x99),
            border: Color::Rgb(0x2c, 0x3a, 0x34),
        }
    }
}

impl Theme {
    /// Default palette with user overrides applied
    pub fn from_overrides(overrides: &ThemeColorOverrides) -> Self {
        let mut theme = Self::default();
        let slots: [(&Option<String>, &mut Color); 6] = [
            (&overrides.brand, &mut theme.brand),
            (&overrides.surface, &mut theme.surface),
            (&overrides.text, &mut theme.text),
            (&overrides.muted, &mut theme.muted),
            (&overrides.error, &mut theme.error),
            (&overrides.success, &mut theme.success),
        ];
        for (hex, slot) in slots {
            if let Some(color) = hex.as_deref().and_then(parse_hex_color) {
                *slot = color;
            }
        }
        theme
    }
}

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#14b87a"), Some(Color::Rgb(0x14, 0xb8, 0x7a)));
        assert_eq!(parse_hex_color("fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
    }

    #[test]
    fn test_overrides_apply_only_valid_colors() {
        let overrides = ThemeColorOverrides {
            brand: Some("#ff0000".to_string()),
            muted: Some("nope".to_string()),
            ..ThemeColorOverrides::default()
        };
        let theme = Theme::from_overrides(&overrides);
        assert_eq!(theme.brand, Color::Rgb(255, 0, 0));
        assert_eq!(theme.muted, Theme::default().muted);
    }
}
