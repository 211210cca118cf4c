use crate::buffer::PixelBuffer;
use crate::sprite::Sprite;

/// Blits the opaque pixels of `sprite` in a solid `color`.
///
/// `(x, y)` is the sprite's bottom-left corner in the y-up buffer, so the
/// sprite covers columns `x..x + width` and rows `y..y + height`; mask row 0
/// lands on row `y + height - 1`. Pixels falling outside the buffer are
/// clipped.
pub fn draw_sprite(buffer: &mut PixelBuffer, sprite: &Sprite, x: i32, y: i32, color: u32) {
    let width = buffer.width() as i64;
    let height = buffer.height() as i64;
    let sprite_h = sprite.height() as i64;

    for yi in 0..sprite.height() {
        let dy = y as i64 + (sprite_h - 1 - yi as i64);
        if dy < 0 || dy >= height {
            continue;
        }
        for xi in 0..sprite.width() {
            let dx = x as i64 + xi as i64;
            if dx < 0 || dx >= width {
                continue;
            }
            if sprite.is_opaque(xi, yi) {
                buffer.set_pixel(dx as i32, dy as i32, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: u32 = 0x8000_00ff;

    fn solid(w: usize, h: usize) -> Sprite {
        Sprite::new(w, h, vec![1; w * h])
    }

    fn inked(buffer: &PixelBuffer) -> usize {
        buffer.pixels().iter().filter(|&&p| p == INK).count()
    }

    #[test]
    fn first_mask_row_is_the_top() {
        // top row opaque, bottom row transparent
        let sprite = Sprite::new(2, 2, vec![1, 1, 0, 0]);
        let mut buffer = PixelBuffer::new(4, 4);
        draw_sprite(&mut buffer, &sprite, 1, 1, INK);

        assert_eq!(buffer.pixel(1, 2), Some(INK));
        assert_eq!(buffer.pixel(2, 2), Some(INK));
        assert_eq!(buffer.pixel(1, 1), Some(0));
        assert_eq!(inked(&buffer), 2);
    }

    #[test]
    fn transparent_pixels_keep_the_background() {
        let sprite = Sprite::new(3, 1, vec![1, 0, 1]);
        let mut buffer = PixelBuffer::new(3, 1);
        buffer.clear(7);
        draw_sprite(&mut buffer, &sprite, 0, 0, INK);
        assert_eq!(buffer.pixels(), &[INK, 7, INK]);
    }

    #[test]
    fn clips_partially_visible_sprites() {
        let sprite = solid(4, 4);
        let cases = [
            ((-2, 0), 8),
            ((0, -3), 4),
            ((8, 8), 4),
            ((9, 9), 1),
            ((-2, -2), 4),
        ];
        for ((x, y), expected) in cases {
            let mut buffer = PixelBuffer::new(10, 10);
            draw_sprite(&mut buffer, &sprite, x, y, INK);
            assert_eq!(inked(&buffer), expected, "anchor ({x}, {y})");
        }
    }

    #[test]
    fn fully_offscreen_sprites_write_nothing() {
        let sprite = solid(3, 3);
        for (x, y) in [(-3, 0), (0, -3), (10, 0), (0, 10), (i32::MIN, i32::MAX), (i32::MAX, 0)] {
            let mut buffer = PixelBuffer::new(10, 10);
            draw_sprite(&mut buffer, &sprite, x, y, INK);
            assert_eq!(inked(&buffer), 0, "anchor ({x}, {y})");
        }
    }

    #[test]
    fn clipped_mask_keeps_its_shape() {
        // checkerboard half off the left edge
        let sprite = Sprite::new(4, 2, vec![1, 0, 1, 0, 0, 1, 0, 1]);
        let mut buffer = PixelBuffer::new(4, 4);
        draw_sprite(&mut buffer, &sprite, -2, 0, INK);

        // visible columns are sprite columns 2 and 3
        assert_eq!(buffer.pixel(0, 1), Some(INK));
        assert_eq!(buffer.pixel(1, 1), Some(0));
        assert_eq!(buffer.pixel(0, 0), Some(0));
        assert_eq!(buffer.pixel(1, 0), Some(INK));
        assert_eq!(inked(&buffer), 2);
    }
}
