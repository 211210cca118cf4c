/// Software frame buffer of packed `RGBA8888` pixels.
///
/// Rows are stored bottom-up: row 0 is the bottom of the screen and y grows
/// upward, the same orientation a GPU texture uses. Pixel `(x, y)` lives at
/// index `y * width + x`.
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw storage, bottom row first.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Writes one pixel. Coordinates outside the buffer are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Fills row `y` across the full width.
    pub fn fill_row(&mut self, y: usize, color: u32) {
        if y < self.height {
            let start = y * self.width;
            self.pixels[start..start + self.width].fill(color);
        }
    }

    /// Copies the buffer into `out` as top-down rows of native-endian packed
    /// `RGBA8888`, ready for a streaming texture upload.
    pub fn write_rgba8888(&self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.pixels.len() * 4);

        let pitch = self.width * 4;
        for (row, dst) in out.chunks_exact_mut(pitch).enumerate().take(self.height) {
            let src_y = self.height - 1 - row;
            let src = &self.pixels[src_y * self.width..(src_y + 1) * self.width];
            for (px, bytes) in src.iter().zip(dst.chunks_exact_mut(4)) {
                bytes.copy_from_slice(&px.to_ne_bytes());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PixelBuffer;

    #[test]
    fn clear_sets_every_pixel() {
        for (w, h) in [(1, 1), (3, 7), (224, 256)] {
            let mut buffer = PixelBuffer::new(w, h);
            buffer.clear(0x2078_64ff);
            assert_eq!(buffer.pixels().len(), w * h);
            assert!(buffer.pixels().iter().all(|&p| p == 0x2078_64ff));
        }
    }

    #[test]
    fn set_pixel_ignores_out_of_range_coordinates() {
        let mut buffer = PixelBuffer::new(4, 4);
        buffer.set_pixel(-1, 0, 1);
        buffer.set_pixel(0, -1, 1);
        buffer.set_pixel(4, 0, 1);
        buffer.set_pixel(0, 4, 1);
        assert!(buffer.pixels().iter().all(|&p| p == 0));

        buffer.set_pixel(3, 2, 9);
        assert_eq!(buffer.pixel(3, 2), Some(9));
        assert_eq!(buffer.pixels()[2 * 4 + 3], 9);
    }

    #[test]
    fn rgba_output_is_flipped_to_top_down() {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.fill_row(0, 0x1122_33ff);
        buffer.fill_row(1, 0xaabb_ccff);

        let mut out = vec![0u8; 2 * 2 * 4];
        buffer.write_rgba8888(&mut out);

        assert_eq!(&out[0..4], &0xaabb_ccffu32.to_ne_bytes());
        assert_eq!(&out[8..12], &0x1122_33ffu32.to_ne_bytes());
    }
}
