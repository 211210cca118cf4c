/// One-bit-per-byte bitmap. A nonzero byte is opaque.
///
/// The first row of `mask` is the visual top of the sprite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    width: usize,
    height: usize,
    mask: Vec<u8>,
}

impl Sprite {
    pub fn new(width: usize, height: usize, mask: Vec<u8>) -> Self {
        assert_eq!(
            mask.len(),
            width * height,
            "sprite mask must hold width * height entries"
        );
        Self {
            width,
            height,
            mask,
        }
    }

    /// Builds a sprite from rows of packed bits, most significant bit leftmost.
    pub fn from_rows(width: usize, rows: &[u16]) -> Self {
        debug_assert!(width <= 16);
        let mut mask = Vec::with_capacity(width * rows.len());
        for &row in rows {
            for col in 0..width {
                mask.push(((row >> (width - 1 - col)) & 1) as u8);
            }
        }
        Self::new(width, rows.len(), mask)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn is_opaque(&self, x: usize, y: usize) -> bool {
        self.mask[y * self.width + x] != 0
    }

    pub fn mask(&self) -> &[u8] {
        &self.mask
    }
}

/// Handle into a [`SpriteSheet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpriteId(usize);

/// Arena of sprites. Sprites never change after they are added, so anything
/// holding a [`SpriteId`] can share them freely.
#[derive(Default)]
pub struct SpriteSheet {
    sprites: Vec<Sprite>,
}

impl SpriteSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, sprite: Sprite) -> SpriteId {
        self.sprites.push(sprite);
        SpriteId(self.sprites.len() - 1)
    }

    #[inline]
    pub fn get(&self, id: SpriteId) -> &Sprite {
        &self.sprites[id.0]
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
