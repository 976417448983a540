//! Glyph tables and font registry
//!
//! A glyph is six column bytes, each byte covering one 8-pixel-tall text
//! row (bit 0 at the top). A [`Font`] names a 256-entry [`GlyphTable`];
//! adding a font means adding a table and an entry in [`FONTS`].
//!
//! ```
//! use pcd8544::{Font, GLYPH_WIDTH};
//!
//! let font = Font::default();
//! assert_eq!(font.name(), "6x8");
//! assert_eq!(font.glyph(b'A').len(), GLYPH_WIDTH);
//! assert_eq!(Font::by_name("6x8-bold"), Some(Font::BOLD));
//! ```

mod regular;

/// Glyph width in columns, including one blank spacing column
pub const GLYPH_WIDTH: usize = 6;

/// Column bitmap of a single character
pub type Glyph = [u8; GLYPH_WIDTH];

/// One glyph per character code
pub type GlyphTable = [Glyph; 256];

/// Lead bytes of two-byte UTF-8 Cyrillic sequences
///
/// These are never drawn: the continuation byte that follows carries the
/// glyph, so the lead byte takes no space on screen.
pub const SKIP_CODES: [u8; 2] = [0xD0, 0xD1];

/// Regular table with ASCII and Cyrillic glyphs
pub static REGULAR_6X8: GlyphTable = regular::REGULAR;

/// Bold variant of the regular table
pub static BOLD_6X8: GlyphTable = embolden(&regular::REGULAR);

/// Shipped fonts; the first entry is the default
pub static FONTS: [Font; 2] = [Font::REGULAR, Font::BOLD];

/// Whether `code` renders as nothing at all
pub fn is_skip_code(code: u8) -> bool {
    SKIP_CODES.contains(&code)
}

/// Resolve the glyph for `code` in `font`
pub fn glyph(font: Font, code: u8) -> &'static Glyph {
    font.glyph(code)
}

/// A named glyph table
#[derive(Clone, Copy)]
pub struct Font {
    name: &'static str,
    table: &'static GlyphTable,
}

impl Font {
    /// 6x8 font with ASCII and Cyrillic glyphs
    pub const REGULAR: Font = Font::new("6x8", &REGULAR_6X8);
    /// Horizontally emboldened [`Font::REGULAR`]
    pub const BOLD: Font = Font::new("6x8-bold", &BOLD_6X8);

    /// Wrap a glyph table under a name
    pub const fn new(name: &'static str, table: &'static GlyphTable) -> Self {
        Self { name, table }
    }

    /// Font name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Glyph for `code`
    pub fn glyph(&self, code: u8) -> &'static Glyph {
        &self.table[code as usize]
    }

    /// Look up a shipped font by name
    pub fn by_name(name: &str) -> Option<Font> {
        FONTS.iter().copied().find(|font| font.name == name)
    }
}

impl core::fmt::Debug for Font {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Font")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Default for Font {
    fn default() -> Self {
        FONTS[0]
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && core::ptr::eq(self.table, other.table)
    }
}

impl Eq for Font {}

/// OR every column into its right neighbour, keeping column 0 blank
const fn embolden(table: &GlyphTable) -> GlyphTable {
    let mut bold = [[0u8; GLYPH_WIDTH]; 256];
    let mut code = 0;
    while code < 256 {
        let mut col = 1;
        while col < GLYPH_WIDTH {
            bold[code][col] = table[code][col] | table[code][col - 1];
            col += 1;
        }
        code += 1;
    }
    bold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_font_is_first_registered() {
        assert_eq!(Font::default(), FONTS[0]);
        assert_eq!(Font::default(), Font::REGULAR);
    }

    #[test]
    fn lookup_is_pure() {
        for font in FONTS {
            for code in 0..=255u8 {
                assert_eq!(glyph(font, code), glyph(font, code));
            }
        }
    }

    #[test]
    fn ascii_glyphs() {
        assert_eq!(Font::REGULAR.glyph(b' '), &[0; GLYPH_WIDTH]);
        assert_eq!(
            Font::REGULAR.glyph(b'A'),
            &[0x00, 0x7E, 0x11, 0x11, 0x11, 0x7E]
        );
        assert_eq!(
            Font::REGULAR.glyph(b'0'),
            &[0x00, 0x3E, 0x51, 0x49, 0x45, 0x3E]
        );
    }

    #[test]
    fn cyrillic_glyphs_follow_utf8_continuation_bytes() {
        // "Ж" is D0 96, "я" is D1 8F
        let zhe = "Ж".as_bytes();
        let ya = "я".as_bytes();
        assert!(is_skip_code(zhe[0]));
        assert!(is_skip_code(ya[0]));
        assert_eq!(
            Font::REGULAR.glyph(zhe[1]),
            &[0x00, 0x77, 0x08, 0x7F, 0x08, 0x77]
        );
        assert_eq!(
            Font::REGULAR.glyph(ya[1]),
            &[0x00, 0x48, 0x34, 0x14, 0x14, 0x7C]
        );
    }

    #[test]
    fn only_two_skip_codes() {
        let skipped = (0..=255u8).filter(|&code| is_skip_code(code)).count();
        assert_eq!(skipped, 2);
        assert!(is_skip_code(208));
        assert!(is_skip_code(209));
    }

    #[test]
    fn bold_is_superset_of_regular() {
        for code in 0..=255u8 {
            let regular = Font::REGULAR.glyph(code);
            let bold = Font::BOLD.glyph(code);
            assert_eq!(bold[0], 0);
            for col in 0..GLYPH_WIDTH {
                assert_eq!(regular[col] & bold[col], regular[col]);
            }
        }
        assert_eq!(
            Font::BOLD.glyph(b'I'),
            &[0x00, 0x00, 0x41, 0x7F, 0x7F, 0x41]
        );
    }

    #[test]
    fn equality_needs_name_and_table() {
        assert_eq!(Font::new("6x8", &REGULAR_6X8), Font::REGULAR);
        assert_ne!(Font::new("6x8", &BOLD_6X8), Font::REGULAR);
        assert_ne!(Font::new("mine", &REGULAR_6X8), Font::REGULAR);
    }

    #[test]
    fn by_name_finds_registered_fonts_only() {
        assert_eq!(Font::by_name("6x8"), Some(Font::REGULAR));
        assert_eq!(Font::by_name("6x8-bold"), Some(Font::BOLD));
        assert_eq!(Font::by_name("8x16"), None);
    }
}
