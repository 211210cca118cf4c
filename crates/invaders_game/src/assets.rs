use crate::sprite::{Sprite, SpriteId, SpriteSheet};
use crate::text::GlyphSheet;

/*
 * .....@.....
 * ....@@@....
 * ....@@@....
 * .@@@@@@@@@.
 * @@@@@@@@@@@
 * @@@@@@@@@@@
 * @@@@@@@@@@@
 */
#[rustfmt::skip]
const PLAYER_ROWS: [u16; 7] = [
    0b000_0010_0000,
    0b000_0111_0000,
    0b000_0111_0000,
    0b011_1111_1110,
    0b111_1111_1111,
    0b111_1111_1111,
    0b111_1111_1111,
];

const BULLET_ROWS: [u16; 3] = [0b1, 0b1, 0b1];

/*
 * .@..@...@..@.
 * ..@..@.@..@..
 * ...@.....@...
 * @@.........@@
 * ...@.....@...
 * ..@..@.@..@..
 * .@..@...@..@.
 */
#[rustfmt::skip]
const DEATH_ROWS: [u16; 7] = [
    0b0_1001_0001_0010,
    0b0_0100_1010_0100,
    0b0_0010_0000_1000,
    0b1_1000_0000_0011,
    0b0_0010_0000_1000,
    0b0_0100_1010_0100,
    0b0_1001_0001_0010,
];

/// Small squid, two frames.
#[rustfmt::skip]
const SQUID_ROWS: [[u16; 8]; 2] = [
    [
        0b0001_1000, // ...@@...
        0b0011_1100, // ..@@@@..
        0b0111_1110, // .@@@@@@.
        0b1101_1011, // @@.@@.@@
        0b1111_1111, // @@@@@@@@
        0b0101_1010, // .@.@@.@.
        0b1000_0001, // @......@
        0b0100_0010, // .@....@.
    ],
    [
        0b0001_1000, // ...@@...
        0b0011_1100, // ..@@@@..
        0b0111_1110, // .@@@@@@.
        0b1101_1011, // @@.@@.@@
        0b1111_1111, // @@@@@@@@
        0b0010_0100, // ..@..@..
        0b0101_1010, // .@.@@.@.
        0b1010_0101, // @.@..@.@
    ],
];

/// Crab, two frames.
#[rustfmt::skip]
const CRAB_ROWS: [[u16; 8]; 2] = [
    [
        0b001_0000_0100, // ..@.....@..
        0b000_1000_1000, // ...@...@...
        0b001_1111_1100, // ..@@@@@@@..
        0b011_0111_0110, // .@@.@@@.@@.
        0b111_1111_1111, // @@@@@@@@@@@
        0b101_1111_1101, // @.@@@@@@@.@
        0b101_0000_0101, // @.@.....@.@
        0b000_1101_1000, // ...@@.@@...
    ],
    [
        0b001_0000_0100, // ..@.....@..
        0b100_1000_1001, // @..@...@..@
        0b101_1111_1101, // @.@@@@@@@.@
        0b111_0111_0111, // @@@.@@@.@@@
        0b111_1111_1111, // @@@@@@@@@@@
        0b011_1111_1110, // .@@@@@@@@@.
        0b001_0000_0100, // ..@.....@..
        0b010_0000_0010, // .@.......@.
    ],
];

/// Octopus, two frames.
#[rustfmt::skip]
const OCTOPUS_ROWS: [[u16; 8]; 2] = [
    [
        0b0000_1111_0000, // ....@@@@....
        0b0111_1111_1110, // .@@@@@@@@@@.
        0b1111_1111_1111, // @@@@@@@@@@@@
        0b1110_0110_0111, // @@@..@@..@@@
        0b1111_1111_1111, // @@@@@@@@@@@@
        0b0001_1001_1000, // ...@@..@@...
        0b0011_0110_1100, // ..@@.@@.@@..
        0b1100_0000_0011, // @@........@@
    ],
    [
        0b0000_1111_0000, // ....@@@@....
        0b0111_1111_1110, // .@@@@@@@@@@.
        0b1111_1111_1111, // @@@@@@@@@@@@
        0b1110_0110_0111, // @@@..@@..@@@
        0b1111_1111_1111, // @@@@@@@@@@@@
        0b0011_1001_1100, // ..@@@..@@@..
        0b0110_0110_0110, // .@@..@@..@@.
        0b0011_0000_1100, // ..@@....@@..
    ],
];

/// Every sprite the game draws, loaded once and never modified.
pub struct Assets {
    pub sheet: SpriteSheet,
    pub player: SpriteId,
    pub bullet: SpriteId,
    pub alien_death: SpriteId,
    /// Animation frames indexed by alien kind (squid, crab, octopus).
    pub alien_frames: [[SpriteId; 2]; 3],
    pub glyphs: GlyphSheet,
}

impl Default for Assets {
    fn default() -> Self {
        Self::new()
    }
}

impl Assets {
    pub fn new() -> Self {
        let mut sheet = SpriteSheet::new();
        let player = sheet.add(Sprite::from_rows(11, &PLAYER_ROWS));
        let bullet = sheet.add(Sprite::from_rows(1, &BULLET_ROWS));
        let alien_death = sheet.add(Sprite::from_rows(13, &DEATH_ROWS));

        let mut load_frames = |width: usize, rows: &[[u16; 8]; 2]| {
            [
                sheet.add(Sprite::from_rows(width, &rows[0])),
                sheet.add(Sprite::from_rows(width, &rows[1])),
            ]
        };
        let alien_frames = [
            load_frames(8, &SQUID_ROWS),
            load_frames(11, &CRAB_ROWS),
            load_frames(12, &OCTOPUS_ROWS),
        ];

        Self {
            sheet,
            player,
            bullet,
            alien_death,
            alien_frames,
            glyphs: GlyphSheet::new(),
        }
    }

    #[inline]
    pub fn sprite(&self, id: SpriteId) -> &Sprite {
        self.sheet.get(id)
    }
}
