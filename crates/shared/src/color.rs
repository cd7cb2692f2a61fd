//! Hex colour strings as stored in the project file.

/// Parse `#rrggbb` (or `rrggbb`, or the `#rgb` shorthand) into RGB bytes.
pub fn parse_hex_color(s: &str) -> Option<[u8; 3]> {
    let hex = s.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some([r, g, b])
        }
        3 => {
            let mut out = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                out[i] = v * 17;
            }
            Some(out)
        }
        _ => None,
    }
}

/// Format RGB bytes as a lowercase `#rrggbb` string
pub fn format_hex_color(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// RGB bytes to linear-ish floats in `[0, 1]` for the renderer
pub fn rgb_to_f32(rgb: [u8; 3]) -> [f32; 3] {
    [
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        assert_eq!(parse_hex_color("#ff00ff"), Some([255, 0, 255]));
        assert_eq!(parse_hex_color("00FF80"), Some([0, 255, 128]));
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!(parse_hex_color("#f0a"), Some([255, 0, 170]));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_hex_color("red"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn test_format_lowercase() {
        assert_eq!(format_hex_color([255, 204, 0]), "#ffcc00");
        assert_eq!(format_hex_color([0, 0, 0]), "#000000");
    }
}
