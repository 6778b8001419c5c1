//! Large-digit clock font
//!
//! Each glyph is a run of vertical 8-pixel column slices, LSB at the top,
//! written left to right. Only the first six or seven columns carry ink; the
//! rest of the 10-byte stride is inter-glyph spacing, so every glyph advances
//! the cursor by exactly [`GLYPH_WIDTH`] columns.

/// Columns per glyph, spacing included
pub const GLYPH_WIDTH: usize = 10;

/// One glyph: [`GLYPH_WIDTH`] column bytes
pub type Glyph = [u8; GLYPH_WIDTH];

/// Index of `:` in [`FONT_6X10`]
const COLON: usize = 10;

/// Digits `0`-`9` followed by `:`
pub static FONT_6X10: [Glyph; 11] = [
    [0x3E, 0x7F, 0xC1, 0xC1, 0xC1, 0xC1, 0xC1, 0x7F, 0x3E, 0x00], // 0
    [0x00, 0x00, 0xC2, 0xFF, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00], // 1
    [0xE2, 0xF3, 0x99, 0x99, 0x99, 0xCF, 0xC6, 0x00, 0x00, 0x00], // 2
    [0x42, 0xC3, 0x89, 0x89, 0x89, 0xFF, 0x76, 0x00, 0x00, 0x00], // 3
    [0x3C, 0x3E, 0x27, 0x23, 0xFF, 0xFF, 0x20, 0x00, 0x00, 0x00], // 4
    [0x4F, 0xCF, 0x89, 0x89, 0x89, 0xF9, 0x71, 0x00, 0x00, 0x00], // 5
    [0x7E, 0xFF, 0x89, 0x89, 0x89, 0xFB, 0x72, 0x00, 0x00, 0x00], // 6
    [0x03, 0x03, 0xE1, 0xF1, 0x19, 0x0F, 0x07, 0x00, 0x00, 0x00], // 7
    [0x76, 0xFF, 0x89, 0x89, 0x89, 0xFF, 0x76, 0x00, 0x00, 0x00], // 8
    [0x4E, 0xDF, 0x91, 0x91, 0x91, 0xFF, 0x7E, 0x00, 0x00, 0x00], // 9
    [0x00, 0x00, 0x6C, 0x6C, 0x00, 0x6C, 0x6C, 0x00, 0x00, 0x00], // :
];

/// Get the glyph for a character
///
/// Characters outside `0`-`9` and `:` render as `0`. This matches the
/// behaviour the clock has always shipped with; use [`is_supported`] to
/// detect it.
pub fn glyph(ch: char) -> &'static Glyph {
    let idx = match ch {
        '0'..='9' => ch as usize - '0' as usize,
        ':' => COLON,
        _ => 0,
    };
    &FONT_6X10[idx]
}

/// Whether `ch` has its own glyph (rather than the `0` fallback)
pub fn is_supported(ch: char) -> bool {
    ch.is_ascii_digit() || ch == ':'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_index_table() {
        for (i, ch) in ('0'..='9').enumerate() {
            assert_eq!(glyph(ch), &FONT_6X10[i]);
        }
        assert_eq!(glyph(':'), &FONT_6X10[COLON]);
    }

    #[test]
    fn test_reference_bytes() {
        assert_eq!(
            glyph('7'),
            &[0x03, 0x03, 0xE1, 0xF1, 0x19, 0x0F, 0x07, 0x00, 0x00, 0x00]
        );
        assert_eq!(
            glyph(':'),
            &[0x00, 0x00, 0x6C, 0x6C, 0x00, 0x6C, 0x6C, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_every_supported_char_matches_reference() {
        let reference: [(char, Glyph); 11] = [
            ('0', [0x3E, 0x7F, 0xC1, 0xC1, 0xC1, 0xC1, 0xC1, 0x7F, 0x3E, 0x00]),
            ('1', [0x00, 0x00, 0xC2, 0xFF, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00]),
            ('2', [0xE2, 0xF3, 0x99, 0x99, 0x99, 0xCF, 0xC6, 0x00, 0x00, 0x00]),
            ('3', [0x42, 0xC3, 0x89, 0x89, 0x89, 0xFF, 0x76, 0x00, 0x00, 0x00]),
            ('4', [0x3C, 0x3E, 0x27, 0x23, 0xFF, 0xFF, 0x20, 0x00, 0x00, 0x00]),
            ('5', [0x4F, 0xCF, 0x89, 0x89, 0x89, 0xF9, 0x71, 0x00, 0x00, 0x00]),
            ('6', [0x7E, 0xFF, 0x89, 0x89, 0x89, 0xFB, 0x72, 0x00, 0x00, 0x00]),
            ('7', [0x03, 0x03, 0xE1, 0xF1, 0x19, 0x0F, 0x07, 0x00, 0x00, 0x00]),
            ('8', [0x76, 0xFF, 0x89, 0x89, 0x89, 0xFF, 0x76, 0x00, 0x00, 0x00]),
            ('9', [0x4E, 0xDF, 0x91, 0x91, 0x91, 0xFF, 0x7E, 0x00, 0x00, 0x00]),
            (':', [0x00, 0x00, 0x6C, 0x6C, 0x00, 0x6C, 0x6C, 0x00, 0x00, 0x00]),
        ];

        for (ch, bytes) in reference.iter() {
            assert_eq!(glyph(*ch), bytes, "glyph {:?}", ch);
        }
    }

    #[test]
    fn test_unsupported_falls_back_to_zero() {
        for ch in [' ', 'A', 'z', '.', '-', '\0', 'é', '٣'] {
            assert_eq!(glyph(ch), glyph('0'), "char {:?}", ch);
            assert!(!is_supported(ch));
        }
    }

    #[test]
    fn test_supported_alphabet() {
        let supported: Vec<char> = (0u8..=127)
            .map(char::from)
            .filter(|&c| is_supported(c))
            .collect();
        assert_eq!(supported, "0123456789:".chars().collect::<Vec<_>>());
    }

    #[test]
    fn test_every_glyph_ends_in_spacing() {
        for g in FONT_6X10.iter() {
            assert_eq!(g.len(), GLYPH_WIDTH);
            assert_eq!(g[GLYPH_WIDTH - 1], 0x00);
        }
    }
}
