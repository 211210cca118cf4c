#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);
    pub const RED: Color = Color::new_rgb(255, 0, 0);
    pub const GREEN: Color = Color::new_rgb(0, 255, 0);

    /// Maroon used for every sprite in the playfield.
    pub const SPRITE: Color = Color::new_rgb(128, 0, 0);
    /// Teal playfield background.
    pub const BACKGROUND: Color = Color::new_rgb(32, 120, 100);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Packs the color as `(R << 24) | (G << 16) | (B << 8) | A`.
    #[inline]
    pub const fn to_u32(&self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }

    #[inline]
    pub const fn from_u32(value: u32) -> Color {
        let [r, g, b, a] = value.to_be_bytes();
        Color { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn packs_red_into_the_high_byte() {
        assert_eq!(Color::new_rgb(0x12, 0x34, 0x56).to_u32(), 0x1234_56ff);
        assert_eq!(Color::RED.to_u32(), 0xff00_00ff);
    }

    #[test]
    fn unpacks_what_it_packs() {
        let c = Color::BACKGROUND;
        assert_eq!(Color::from_u32(c.to_u32()), c);
        assert_eq!(Color::from_u32(c.to_u32()).a, 0xff);
    }
}
