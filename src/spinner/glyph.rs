//! Character classification for spinner cells.
//!
//! Every character of a display string becomes exactly one glyph. Digits get
//! a reel, decimal separators get a narrow static cell, and everything else
//! (unit markers, the `-` placeholder, stray text) is shown as a literal.

/// What kind of cell a character renders as
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlyphKind {
    /// A digit from 0 to 9, rendered as a 10-face reel
    Digit(u8),
    /// A `.` or `,` separator, rendered as a narrow static cell
    Separator,
    /// Any other character, rendered as a static cell with a smaller font
    Literal,
}

impl GlyphKind {
    /// Classify a single character. Never fails: unknown characters are literals.
    pub fn classify(c: char) -> Self {
        match c {
            '0'..='9' => GlyphKind::Digit(c as u8 - b'0'),
            '.' | ',' => GlyphKind::Separator,
            _ => GlyphKind::Literal,
        }
    }

    pub fn is_reel(self) -> bool {
        matches!(self, GlyphKind::Digit(_))
    }
}

/// Classify every character of a display value, in order.
///
/// # Examples
/// ```ignore
/// assert_eq!(
///     glyphs_for_value("1.5k"),
///     vec![('1', GlyphKind::Digit(1)), ('.', GlyphKind::Separator),
///          ('5', GlyphKind::Digit(5)), ('k', GlyphKind::Literal)]
/// );
/// ```
pub fn glyphs_for_value(value: &str) -> Vec<(char, GlyphKind)> {
    value.chars().map(|c| (c, GlyphKind::classify(c))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_digits() {
        for (i, c) in ('0'..='9').enumerate() {
            assert_eq!(GlyphKind::classify(c), GlyphKind::Digit(i as u8));
        }
    }

    #[test]
    fn test_classify_separators() {
        assert_eq!(GlyphKind::classify('.'), GlyphKind::Separator);
        assert_eq!(GlyphKind::classify(','), GlyphKind::Separator);
    }

    #[test]
    fn test_classify_falls_back_to_literal() {
        for c in ['-', 'k', 'M', ' ', '₮', '٣'] {
            assert_eq!(GlyphKind::classify(c), GlyphKind::Literal, "{c:?}");
        }
    }

    #[test]
    fn test_glyphs_preserve_order() {
        let glyphs = glyphs_for_value("1.5k");
        assert_eq!(
            glyphs,
            vec![
                ('1', GlyphKind::Digit(1)),
                ('.', GlyphKind::Separator),
                ('5', GlyphKind::Digit(5)),
                ('k', GlyphKind::Literal),
            ]
        );
    }

    #[test]
    fn test_empty_value() {
        assert!(glyphs_for_value("").is_empty());
    }
}
