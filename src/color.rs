use egui::Color32;

/// Formats a color as `#rrggbb`, ignoring alpha.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Parses `#rrggbb` (the leading `#` is optional) into an opaque color.
pub fn parse_hex(text: &str) -> Option<Color32> {
    let digits = text.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_hex_is_lowercase_rgb() {
        assert_eq!(to_hex(Color32::from_rgb(255, 0, 171)), "#ff00ab");
        assert_eq!(to_hex(Color32::BLACK), "#000000");
    }

    #[test]
    fn test_parse_hex_accepts_optional_hash() {
        assert_eq!(parse_hex("#1a2b3c"), Some(Color32::from_rgb(0x1a, 0x2b, 0x3c)));
        assert_eq!(parse_hex("FFFFFF"), Some(Color32::WHITE));
        assert_eq!(parse_hex("  #00ff00 "), Some(Color32::from_rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_hex_rejects_malformed_input() {
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#gg0000"), None);
        assert_eq!(parse_hex("#12345678"), None);
        assert_eq!(parse_hex("#ééé"), None);
    }
}
