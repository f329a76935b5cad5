//! Committed strokes and the style parameters that shape them.

use crate::constants::*;
use crate::geometry::{path_length, point_at_distance, ActivePath, CommittedPath, Point, Viewport};

/// Style supplied by the control panel at the moment a stroke ends.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub spray_color: String,
    pub radius: i32,
    pub text: String,
    pub text_size: u32,
    pub text_color: String,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            spray_color: DEFAULT_SPRAY_COLOR.to_string(),
            radius: DEFAULT_RADIUS,
            text: DEFAULT_TEXT.to_string(),
            text_size: DEFAULT_TEXT_SIZE,
            text_color: DEFAULT_TEXT_COLOR.to_string(),
        }
    }
}

impl StrokeStyle {
    /// Build a style from raw control values, falling back to defaults for
    /// anything blank or unparsable.
    pub fn from_controls(
        spray_color: &str,
        radius: &str,
        text: &str,
        text_size: &str,
        text_color: &str,
    ) -> Self {
        let radius = match parse_int(radius) {
            Some(r) if r != 0 => r.clamp(0, i32::MAX as i64) as i32,
            _ => DEFAULT_RADIUS,
        };
        let text_size = match parse_int(text_size) {
            Some(s) if s != 0 => s.clamp(MIN_TEXT_SIZE as i64, u32::MAX as i64) as u32,
            _ => DEFAULT_TEXT_SIZE,
        };
        Self {
            spray_color: color_or(spray_color, DEFAULT_SPRAY_COLOR),
            radius,
            text: text_or_default(text),
            text_size,
            text_color: color_or(text_color, DEFAULT_TEXT_COLOR),
        }
    }

    pub fn thickness(&self) -> f64 {
        thickness_for_radius(self.radius)
    }
}

pub fn thickness_for_radius(radius: i32) -> f64 {
    BASE_THICKNESS + THICKNESS_PER_RADIUS * radius as f64
}

/// Number of glyphs that fit along `total_len` at the spacing `text_size`
/// implies. Always at least one, so a tap still shows a letter, and never
/// more than [`MAX_GLYPHS_PER_STROKE`].
pub fn glyph_count(total_len: f64, text_size: u32) -> usize {
    let spacing = MIN_CHAR_SPACING.max(text_size as f64 * CHAR_SPACING_PER_SIZE);
    let n = (total_len / spacing).floor();
    if n.is_finite() && n >= 1.0 {
        (n.min(MAX_GLYPHS_PER_STROKE as f64)) as usize
    } else {
        1
    }
}

pub(crate) fn text_or_default(text: &str) -> String {
    let t = text.trim();
    if t.is_empty() {
        DEFAULT_TEXT.to_string()
    } else {
        t.to_string()
    }
}

fn color_or(value: &str, fallback: &str) -> String {
    let v = value.trim();
    if v.is_empty() {
        fallback.to_string()
    } else {
        v.to_string()
    }
}

// Leading-integer parse: "12", "12.7" and "12px" all read as 12.
fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..end].parse().ok()
}

/// One text glyph placed on a path, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub at: Point,
}

/// Spread `count` glyphs of `text` evenly by arc length over a pixel path,
/// cycling through the text.
pub fn layout_glyphs(path: &[Point], text: &str, count: usize) -> Vec<Glyph> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() || path.is_empty() {
        return Vec::new();
    }
    let total = path_length(path);
    let denom = count.saturating_sub(1).max(1) as f64;
    (0..count)
        .filter_map(|i| {
            let d = (i as f64 / denom) * total;
            point_at_distance(path, d).map(|at| Glyph {
                ch: chars[i % chars.len()],
                at,
            })
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub path: CommittedPath,
    pub spray_color: String,
    pub thickness: f64,
    pub text: String,
    pub text_size: u32,
    pub text_color: String,
    pub num_chars: usize,
    /// Pixel arc length when the stroke was committed.
    pub total_len: f64,
}

impl Stroke {
    /// Freeze `path` with `style`. `None` when nothing usable survives
    /// normalization.
    pub fn commit(path: &ActivePath, style: &StrokeStyle, viewport: Viewport) -> Option<Self> {
        if path.is_empty() {
            return None;
        }
        let committed = path.commit(viewport);
        if committed.is_empty() {
            return None;
        }
        let total_len = path.length();
        Some(Self {
            path: committed,
            spray_color: style.spray_color.clone(),
            thickness: style.thickness(),
            text: text_or_default(&style.text),
            text_size: style.text_size,
            text_color: style.text_color.clone(),
            num_chars: glyph_count(total_len, style.text_size),
            total_len,
        })
    }

    pub fn pixel_path(&self, viewport: Viewport) -> Vec<Point> {
        self.path.to_pixels(viewport)
    }

    /// Glyph positions for `viewport`. The glyph count is fixed at commit;
    /// positions follow the path as it is drawn now.
    pub fn glyphs(&self, viewport: Viewport) -> Vec<Glyph> {
        layout_glyphs(&self.pixel_path(viewport), &self.text, self.num_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_reads_leading_digits() {
        assert_eq!(parse_int("12"), Some(12));
        assert_eq!(parse_int(" 7px"), Some(7));
        assert_eq!(parse_int("12.9"), Some(12));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int(""), None);
    }

    #[test]
    fn glyphs_cycle_through_text() {
        let path = [Point::new(0.0, 0.0), Point::new(30.0, 0.0)];
        let glyphs = layout_glyphs(&path, "ab", 4);
        let chars: String = glyphs.iter().map(|g| g.ch).collect();
        assert_eq!(chars, "abab");
        assert_eq!(glyphs[0].at, Point::new(0.0, 0.0));
        assert!((glyphs[3].at.x - 30.0).abs() < 1e-9);
    }

    #[test]
    fn single_glyph_sits_on_first_point() {
        let path = [Point::new(5.0, 6.0)];
        let glyphs = layout_glyphs(&path, "oh", 1);
        assert_eq!(glyphs, vec![Glyph { ch: 'o', at: Point::new(5.0, 6.0) }]);
    }
}
