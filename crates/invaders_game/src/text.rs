use crate::buffer::PixelBuffer;
use crate::draw::draw_sprite;
use crate::sprite::Sprite;

pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 7;
/// First character in the sheet (space).
pub const FIRST_GLYPH: u8 = b' ';
/// Space through backtick.
pub const GLYPH_COUNT: usize = 65;

const MAX_DIGITS: usize = 64;

/// 5x7 glyphs for ASCII 32..=96, one byte per row, bit 4 leftmost.
#[rustfmt::skip]
const GLYPH_ROWS: [[u8; GLYPH_HEIGHT]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04], // !
    [0x0a, 0x0a, 0x0a, 0x00, 0x00, 0x00, 0x00], // "
    [0x0a, 0x0a, 0x1f, 0x0a, 0x1f, 0x0a, 0x0a], // #
    [0x04, 0x0f, 0x14, 0x0e, 0x05, 0x1e, 0x04], // $
    [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03], // %
    [0x0c, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0d], // &
    [0x0c, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00], // '
    [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02], // (
    [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08], // )
    [0x00, 0x04, 0x15, 0x0e, 0x15, 0x04, 0x00], // *
    [0x00, 0x04, 0x04, 0x1f, 0x04, 0x04, 0x00], // +
    [0x00, 0x00, 0x00, 0x00, 0x0c, 0x04, 0x08], // ,
    [0x00, 0x00, 0x00, 0x1f, 0x00, 0x00, 0x00], // -
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x0c], // .
    [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00], // /
    [0x0e, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0e], // 0
    [0x04, 0x0c, 0x04, 0x04, 0x04, 0x04, 0x0e], // 1
    [0x0e, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1f], // 2
    [0x1f, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0e], // 3
    [0x02, 0x06, 0x0a, 0x12, 0x1f, 0x02, 0x02], // 4
    [0x1f, 0x10, 0x1e, 0x01, 0x01, 0x11, 0x0e], // 5
    [0x06, 0x08, 0x10, 0x1e, 0x11, 0x11, 0x0e], // 6
    [0x1f, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0e, 0x11, 0x11, 0x0e, 0x11, 0x11, 0x0e], // 8
    [0x0e, 0x11, 0x11, 0x0f, 0x01, 0x02, 0x0c], // 9
    [0x00, 0x0c, 0x0c, 0x00, 0x0c, 0x0c, 0x00], // :
    [0x00, 0x0c, 0x0c, 0x00, 0x0c, 0x04, 0x08], // ;
    [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02], // <
    [0x00, 0x00, 0x1f, 0x00, 0x1f, 0x00, 0x00], // =
    [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08], // >
    [0x0e, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04], // ?
    [0x0e, 0x11, 0x01, 0x0d, 0x15, 0x15, 0x0e], // @
    [0x0e, 0x11, 0x11, 0x11, 0x1f, 0x11, 0x11], // A
    [0x1e, 0x11, 0x11, 0x1e, 0x11, 0x11, 0x1e], // B
    [0x0e, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0e], // C
    [0x1c, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1c], // D
    [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x1f], // E
    [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x10], // F
    [0x0e, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0f], // G
    [0x11, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11], // H
    [0x0e, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0e], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0c], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1f], // L
    [0x11, 0x1b, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0e, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e], // O
    [0x1e, 0x11, 0x11, 0x1e, 0x10, 0x10, 0x10], // P
    [0x0e, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0d], // Q
    [0x1e, 0x11, 0x11, 0x1e, 0x14, 0x12, 0x11], // R
    [0x0f, 0x10, 0x10, 0x0e, 0x01, 0x01, 0x1e], // S
    [0x1f, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0a, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0a], // W
    [0x11, 0x11, 0x0a, 0x04, 0x0a, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0a, 0x04, 0x04, 0x04], // Y
    [0x1f, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1f], // Z
    [0x0e, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0e], // [
    [0x00, 0x10, 0x08, 0x04, 0x02, 0x01, 0x00], // \
    [0x0e, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0e], // ]
    [0x04, 0x0a, 0x11, 0x00, 0x00, 0x00, 0x00], // ^
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1f], // _
    [0x08, 0x04, 0x02, 0x00, 0x00, 0x00, 0x00], // `
];

/// Fixed-width HUD font.
pub struct GlyphSheet {
    glyphs: Vec<Sprite>,
}

impl Default for GlyphSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphSheet {
    pub fn new() -> Self {
        let glyphs = GLYPH_ROWS
            .iter()
            .map(|rows| {
                let rows: Vec<u16> = rows.iter().map(|&r| r as u16).collect();
                Sprite::from_rows(GLYPH_WIDTH, &rows)
            })
            .collect();
        Self { glyphs }
    }

    /// Glyph for an ASCII character, or `None` outside space..=backtick.
    pub fn glyph(&self, ch: char) -> Option<&Sprite> {
        let code = ch as u32;
        let first = FIRST_GLYPH as u32;
        if code < first {
            return None;
        }
        self.glyphs.get((code - first) as usize)
    }

    pub fn digit(&self, digit: u8) -> &Sprite {
        debug_assert!(digit < 10);
        &self.glyphs[(b'0' - FIRST_GLYPH + digit) as usize]
    }

    /// Horizontal distance between consecutive glyphs.
    #[inline]
    pub fn advance(&self) -> i32 {
        GLYPH_WIDTH as i32 + 1
    }
}

/// Draws `text` left to right starting at `(x, y)`. Characters without a
/// glyph are skipped and do not move the cursor.
pub fn draw_text(
    buffer: &mut PixelBuffer,
    glyphs: &GlyphSheet,
    text: &str,
    x: i32,
    y: i32,
    color: u32,
) {
    let mut xp = x;
    for ch in text.chars() {
        let Some(glyph) = glyphs.glyph(ch) else {
            continue;
        };
        draw_sprite(buffer, glyph, xp, y, color);
        xp += glyphs.advance();
    }
}

/// Draws `value` in decimal, most significant digit first.
pub fn draw_number(
    buffer: &mut PixelBuffer,
    glyphs: &GlyphSheet,
    value: u64,
    x: i32,
    y: i32,
    color: u32,
) {
    let mut digits = [0u8; MAX_DIGITS];
    let mut count = 0;
    let mut current = value;
    loop {
        digits[count] = (current % 10) as u8;
        count += 1;
        current /= 10;
        if current == 0 || count == MAX_DIGITS {
            break;
        }
    }

    let mut xp = x;
    for &digit in digits[..count].iter().rev() {
        draw_sprite(buffer, glyphs.digit(digit), xp, y, color);
        xp += glyphs.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: u32 = 0xffff_ffff;

    fn inked(buffer: &PixelBuffer) -> usize {
        buffer.pixels().iter().filter(|&&p| p == INK).count()
    }

    fn glyph_pixels(sheet: &GlyphSheet, ch: char) -> usize {
        sheet.glyph(ch).unwrap().mask().iter().filter(|&&b| b != 0).count()
    }

    #[test]
    fn covers_space_through_backtick() {
        let sheet = GlyphSheet::new();
        assert!(sheet.glyph(' ').is_some());
        assert!(sheet.glyph('`').is_some());
        assert!(sheet.glyph('a').is_none());
        assert!(sheet.glyph('\n').is_none());
        assert!(sheet.glyph('é').is_none());
        assert_eq!(glyph_pixels(&sheet, ' '), 0);
    }

    #[test]
    fn digits_match_their_characters() {
        let sheet = GlyphSheet::new();
        for d in 0..10u8 {
            let ch = char::from(b'0' + d);
            assert_eq!(sheet.digit(d), sheet.glyph(ch).unwrap());
        }
    }

    #[test]
    fn text_advances_one_pixel_past_each_glyph() {
        let sheet = GlyphSheet::new();
        let mut buffer = PixelBuffer::new(32, 8);
        draw_text(&mut buffer, &sheet, "II", 0, 0, INK);

        // 'I' has a vertical stroke in column 2
        assert_eq!(buffer.pixel(2, 3), Some(INK));
        assert_eq!(buffer.pixel(2 + 6, 3), Some(INK));
        assert_eq!(inked(&buffer), 2 * glyph_pixels(&sheet, 'I'));
    }

    #[test]
    fn unknown_characters_are_skipped_without_advancing() {
        let sheet = GlyphSheet::new();
        let mut plain = PixelBuffer::new(32, 8);
        let mut noisy = PixelBuffer::new(32, 8);
        draw_text(&mut plain, &sheet, "HI", 0, 0, INK);
        draw_text(&mut noisy, &sheet, "HxiI", 0, 0, INK);
        assert_eq!(plain.pixels(), noisy.pixels());
    }

    #[test]
    fn number_renders_like_its_digits_as_text() {
        let sheet = GlyphSheet::new();
        for value in [0u64, 7, 120, 9_876_543_210, u64::MAX] {
            let mut as_number = PixelBuffer::new(160, 8);
            let mut as_text = PixelBuffer::new(160, 8);
            draw_number(&mut as_number, &sheet, value, 1, 0, INK);
            draw_text(&mut as_text, &sheet, &value.to_string(), 1, 0, INK);
            assert_eq!(as_number.pixels(), as_text.pixels(), "value {value}");
        }
    }
}
