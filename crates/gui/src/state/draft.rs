//! Edit-panel draft: a working copy of the selected cube.
//!
//! Text buffers hold exactly what the user typed; the parsed values live in
//! `cube` and are only written back to the scene on apply.

use shared::{format_hex_color, Cube};

/// Value used when a dimension field does not hold a usable number
pub const DIMENSION_FALLBACK: f64 = 1.0;

/// One of the three size fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
    Depth,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Width, Dimension::Height, Dimension::Depth];

    fn slot(self) -> usize {
        match self {
            Dimension::Width => 0,
            Dimension::Height => 1,
            Dimension::Depth => 2,
        }
    }

    /// i18n key for the field label
    pub fn label_key(self) -> &'static str {
        match self {
            Dimension::Width => "edit.width",
            Dimension::Height => "edit.height",
            Dimension::Depth => "edit.depth",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    cube: Cube,
    dimension_text: [String; 3],
    position_text: [String; 3],
}

impl Default for EditDraft {
    fn default() -> Self {
        Self::from_cube(&Cube::default())
    }
}

impl EditDraft {
    pub fn from_cube(cube: &Cube) -> Self {
        Self {
            cube: cube.clone(),
            dimension_text: cube.dimensions().map(format_number),
            position_text: cube.position.map(format_number),
        }
    }

    /// Parsed draft values
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn dimension_text(&self, dim: Dimension) -> &str {
        &self.dimension_text[dim.slot()]
    }

    /// Buffer for a text widget; call `reparse_dimension` after it changes
    pub fn dimension_text_mut(&mut self, dim: Dimension) -> &mut String {
        &mut self.dimension_text[dim.slot()]
    }

    pub fn reparse_dimension(&mut self, dim: Dimension) {
        let value = parse_dimension(&self.dimension_text[dim.slot()]);
        match dim {
            Dimension::Width => self.cube.width = value,
            Dimension::Height => self.cube.height = value,
            Dimension::Depth => self.cube.depth = value,
        }
    }

    pub fn set_dimension_text(&mut self, dim: Dimension, text: &str) {
        self.dimension_text[dim.slot()] = text.to_string();
        self.reparse_dimension(dim);
    }

    pub fn position_text(&self, axis: usize) -> &str {
        &self.position_text[axis.min(2)]
    }

    /// Buffer for a text widget; call `reparse_position` after it changes
    pub fn position_text_mut(&mut self, axis: usize) -> &mut String {
        &mut self.position_text[axis.min(2)]
    }

    /// Position fields are taken as typed, without clamping; malformed text
    /// keeps the previous value.
    pub fn reparse_position(&mut self, axis: usize) {
        let axis = axis.min(2);
        if let Some(v) = parse_leading_float(&self.position_text[axis]).filter(|v| v.is_finite()) {
            self.cube.position[axis] = v;
        }
    }

    pub fn set_position_text(&mut self, axis: usize, text: &str) {
        self.position_text[axis.min(2)] = text.to_string();
        self.reparse_position(axis);
    }

    pub fn set_color_rgb(&mut self, rgb: [u8; 3]) {
        self.cube.color = format_hex_color(rgb);
    }
}

/// Parse a dimension field. Anything that is not a finite positive number
/// falls back to `DIMENSION_FALLBACK`, negatives included, so every stored
/// dimension stays a positive scale factor.
pub fn parse_dimension(text: &str) -> f64 {
    match parse_leading_float(text) {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => DIMENSION_FALLBACK,
    }
}

/// Parse the longest numeric prefix of `text` ("2.5cm" -> 2.5, "abc" -> None)
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let b = s.as_bytes();
    let len = b.len();
    let mut i = 0;

    if i < len && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    while i < len && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < len && b[i] == b'.' {
        let frac_start = i + 1;
        let mut k = frac_start;
        while k < len && b[k].is_ascii_digit() {
            k += 1;
        }
        if digits > 0 || k > frac_start {
            digits += k - frac_start;
            i = k;
        }
    }
    if digits == 0 {
        return None;
    }

    if i < len && (b[i] == b'e' || b[i] == b'E') {
        let mut k = i + 1;
        if k < len && (b[k] == b'+' || b[k] == b'-') {
            k += 1;
        }
        let exp_start = k;
        while k < len && b[k].is_ascii_digit() {
            k += 1;
        }
        if k > exp_start {
            i = k;
        }
    }

    s[..i].parse().ok()
}

fn format_number(v: f64) -> String {
    format!("{v}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_float() {
        assert_eq!(parse_leading_float("2.5"), Some(2.5));
        assert_eq!(parse_leading_float("  -3"), Some(-3.0));
        assert_eq!(parse_leading_float("1."), Some(1.0));
        assert_eq!(parse_leading_float(".25"), Some(0.25));
        assert_eq!(parse_leading_float("4cm"), Some(4.0));
        assert_eq!(parse_leading_float("1e2x"), Some(100.0));
        assert_eq!(parse_leading_float("3e"), Some(3.0));
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("-"), None);
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("inf"), None);
    }

    #[test]
    fn test_parse_dimension_fallback() {
        assert_eq!(parse_dimension("abc"), 1.0);
        assert_eq!(parse_dimension(""), 1.0);
        assert_eq!(parse_dimension("0"), 1.0);
        assert_eq!(parse_dimension("-2"), 1.0);
        assert_eq!(parse_dimension("2.5"), 2.5);
    }

    #[test]
    fn test_from_cube_formats_fields() {
        let cube = Cube {
            width: 2.0,
            height: 0.5,
            depth: 1.25,
            color: "#ff0000".into(),
            position: [-2.0, 0.5, -1.0],
        };
        let d = EditDraft::from_cube(&cube);
        assert_eq!(d.cube(), &cube);
        assert_eq!(d.dimension_text(Dimension::Width), "2");
        assert_eq!(d.dimension_text(Dimension::Height), "0.5");
        assert_eq!(d.position_text(0), "-2");
    }

    #[test]
    fn test_set_dimension_text_garbage() {
        let mut d = EditDraft::from_cube(&Cube::default());
        d.set_dimension_text(Dimension::Width, "abc");
        assert_eq!(d.cube().width, 1.0);
        assert_eq!(d.dimension_text(Dimension::Width), "abc");
        assert!(!d.cube().width.is_nan());
    }

    #[test]
    fn test_set_dimension_text_valid() {
        let mut d = EditDraft::default();
        d.set_dimension_text(Dimension::Depth, "3.5");
        assert_eq!(d.cube().depth, 3.5);
        assert_eq!(d.cube().width, 1.0);
    }

    #[test]
    fn test_position_unclamped_and_malformed_keeps_previous() {
        let mut d = EditDraft::default();
        d.set_position_text(0, "12");
        assert_eq!(d.cube().position[0], 12.0);
        d.set_position_text(0, "oops");
        assert_eq!(d.cube().position[0], 12.0);
        d.set_position_text(1, "-3");
        assert_eq!(d.cube().position[1], -3.0);
    }

    #[test]
    fn test_set_color_rgb() {
        let mut d = EditDraft::default();
        d.set_color_rgb([0, 128, 255]);
        assert_eq!(d.cube().color, "#0080ff");
    }
}
