use invaders_common::Color;

use crate::animation::SpriteAnimation;
use crate::assets::Assets;
use crate::buffer::PixelBuffer;
use crate::collision::overlaps;
use crate::config::GameConfig;
use crate::draw::draw_sprite;
use crate::input::InputState;
use crate::sprite::Sprite;
use crate::text::{draw_number, draw_text, GLYPH_HEIGHT};

/// Capacity of the bullet pool. Fire requests beyond it are dropped.
pub const MAX_BULLETS: usize = 128;

pub const ALIEN_ROWS: usize = 5;
pub const ALIEN_COLUMNS: usize = 11;
pub const NUM_ALIENS: usize = ALIEN_ROWS * ALIEN_COLUMNS;

/// Ticks a killed alien keeps showing its death sprite.
pub const ALIEN_DEATH_TICKS: u8 = 10;
/// Ticks each alien animation frame is held.
pub const ALIEN_FRAME_DURATION: usize = 10;

const PLAYER_SPEED: i32 = 2;
const BULLET_SPEED: i32 = 2;

const PLAYER_START_X: i32 = 112 - 5;
const PLAYER_START_Y: i32 = 32;

const FORMATION_X: i32 = 20;
const FORMATION_Y: i32 = 128;
const FORMATION_STEP_X: i32 = 16;
const FORMATION_STEP_Y: i32 = 17;

const HUD_MARGIN: i32 = 4;
const SEPARATOR_Y: usize = 16;

/// Alien state. The discriminants double as the kind number used for
/// scoring (`10 * (4 - kind)`).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum AlienType {
    Dead = 0,
    Squid = 1,
    Crab = 2,
    Octopus = 3,
}

impl AlienType {
    /// Kind for a formation row, row 0 being the one nearest the player.
    pub fn for_row(row: usize) -> Self {
        match (ALIEN_ROWS - row) / 2 + 1 {
            1 => AlienType::Squid,
            2 => AlienType::Crab,
            _ => AlienType::Octopus,
        }
    }

    pub fn points(self) -> u64 {
        match self {
            AlienType::Dead => 0,
            kind => 10 * (4 - kind as u64),
        }
    }

    /// Index into per-kind tables, `None` for dead aliens.
    fn kind_index(self) -> Option<usize> {
        match self {
            AlienType::Dead => None,
            kind => Some(kind as usize - 1),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Alien {
    pub x: i32,
    pub y: i32,
    pub kind: AlienType,
}

impl Alien {
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.kind == AlienType::Dead
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub lives: u8,
}

/// A shot in flight. `dir` is the vertical velocity in pixels per tick;
/// zero marks an inactive slot.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    pub dir: i32,
}

/// Fixed-capacity bullet storage. Live bullets are packed at the front and
/// removal swaps the last live bullet into the hole, so order is not
/// meaningful.
pub struct BulletPool {
    slots: [Bullet; MAX_BULLETS],
    len: usize,
}

impl Default for BulletPool {
    fn default() -> Self {
        Self {
            slots: [Bullet::default(); MAX_BULLETS],
            len: 0,
        }
    }
}

impl BulletPool {
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == MAX_BULLETS
    }

    /// Adds a bullet, returning `false` if the pool is full or the bullet is
    /// inactive.
    pub fn push(&mut self, bullet: Bullet) -> bool {
        if self.is_full() || bullet.dir == 0 {
            return false;
        }
        self.slots[self.len] = bullet;
        self.len += 1;
        true
    }

    pub fn swap_remove(&mut self, index: usize) -> Bullet {
        assert!(index < self.len, "bullet index {index} out of range");
        let removed = self.slots[index];
        self.len -= 1;
        self.slots[index] = self.slots[self.len];
        self.slots[self.len] = Bullet::default();
        removed
    }

    pub fn as_slice(&self) -> &[Bullet] {
        &self.slots[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bullet> {
        self.as_slice().iter()
    }
}

/// The whole simulation: formation, player, bullets and score.
///
/// A frame is `render` followed by `update`, so what is on screen always
/// shows the state resolved by the previous tick.
pub struct GameState {
    width: i32,
    height: i32,
    assets: Assets,
    aliens: Vec<Alien>,
    death_counters: Vec<u8>,
    player: Player,
    bullets: BulletPool,
    /// One independent animation per alien kind.
    animations: [SpriteAnimation; 3],
    score: u64,
}

impl GameState {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_config(width, height, GameConfig::default())
    }

    pub fn with_config(width: usize, height: usize, config: GameConfig) -> Self {
        let assets = Assets::new();
        let animations = assets
            .alien_frames
            .map(|frames| SpriteAnimation::new(frames.to_vec(), ALIEN_FRAME_DURATION, true));

        let mut game = Self {
            width: width as i32,
            height: height as i32,
            assets,
            aliens: Vec::with_capacity(NUM_ALIENS),
            death_counters: vec![ALIEN_DEATH_TICKS; NUM_ALIENS],
            player: Player {
                x: PLAYER_START_X,
                y: PLAYER_START_Y,
                lives: config.starting_lives(),
            },
            bullets: BulletPool::default(),
            animations,
            score: 0,
        };
        game.lay_out_formation();
        log::info!(
            "New game: {}x{} field, {} aliens, {} lives",
            width,
            height,
            game.aliens.len(),
            game.player.lives
        );
        game
    }

    /// Places the aliens on an 11x5 grid, centering each kind under the
    /// width of the death sprite.
    fn lay_out_formation(&mut self) {
        let reference_width = self.assets.sprite(self.assets.alien_death).width() as i32;
        self.aliens.clear();
        for row in 0..ALIEN_ROWS {
            let kind = AlienType::for_row(row);
            let width = self.alive_width(kind);
            let x_offset = (reference_width - width) / 2;
            for column in 0..ALIEN_COLUMNS {
                self.aliens.push(Alien {
                    x: FORMATION_STEP_X * column as i32 + FORMATION_X + x_offset,
                    y: FORMATION_STEP_Y * row as i32 + FORMATION_Y,
                    kind,
                });
            }
        }
    }

    fn alive_width(&self, kind: AlienType) -> i32 {
        kind.kind_index()
            .map(|k| self.assets.sprite(self.assets.alien_frames[k][0]).width() as i32)
            .unwrap_or(0)
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn bullets(&self) -> &BulletPool {
        &self.bullets
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn death_counter(&self, index: usize) -> u8 {
        self.death_counters[index]
    }

    /// Whether the alien still appears on screen, alive or as a death sprite.
    pub fn is_alien_visible(&self, index: usize) -> bool {
        self.death_counters[index] > 0
    }

    pub fn animation(&self, kind: AlienType) -> Option<&SpriteAnimation> {
        kind.kind_index().map(|k| &self.animations[k])
    }

    /// Sprite an alien is currently drawn and hit-tested with.
    pub fn alien_sprite(&self, alien: &Alien) -> Option<&Sprite> {
        match alien.kind.kind_index() {
            None => Some(self.assets.sprite(self.assets.alien_death)),
            Some(k) => self.animations[k]
                .current_frame()
                .map(|id| self.assets.sprite(id)),
        }
    }

    /// Queues a bullet directly. Returns `false` when it was dropped.
    pub fn spawn_bullet(&mut self, bullet: Bullet) -> bool {
        self.bullets.push(bullet)
    }

    /// Draws the HUD, the formation, bullets and the player. Read-only.
    pub fn render(&self, buffer: &mut PixelBuffer) {
        let ink = Color::SPRITE.to_u32();
        let glyphs = &self.assets.glyphs;

        let hud_y = self.height - GLYPH_HEIGHT as i32 - 7;
        draw_text(buffer, glyphs, "SCORE", HUD_MARGIN, hud_y, ink);
        draw_number(buffer, glyphs, self.score, HUD_MARGIN + 6 * glyphs.advance(), hud_y, ink);

        draw_text(buffer, glyphs, "LIVES", HUD_MARGIN, 7, ink);
        draw_number(
            buffer,
            glyphs,
            self.player.lives as u64,
            HUD_MARGIN + 6 * glyphs.advance(),
            7,
            ink,
        );

        buffer.fill_row(SEPARATOR_Y, ink);

        for (index, alien) in self.aliens.iter().enumerate() {
            if !self.is_alien_visible(index) {
                continue;
            }
            if let Some(sprite) = self.alien_sprite(alien) {
                draw_sprite(buffer, sprite, alien.x, alien.y, ink);
            }
        }

        let bullet_sprite = self.assets.sprite(self.assets.bullet);
        for bullet in self.bullets.iter() {
            draw_sprite(buffer, bullet_sprite, bullet.x, bullet.y, ink);
        }

        let player_sprite = self.assets.sprite(self.assets.player);
        draw_sprite(buffer, player_sprite, self.player.x, self.player.y, ink);
    }

    /// Advances the simulation one tick and consumes the latched fire request.
    pub fn update(&mut self, input: &mut InputState) {
        self.decay_death_counters();
        self.update_bullets();
        self.move_player(input.move_direction());
        if input.take_fire() {
            self.fire();
        }
        for animation in &mut self.animations {
            animation.advance();
        }
    }

    fn decay_death_counters(&mut self) {
        for (alien, counter) in self.aliens.iter().zip(self.death_counters.iter_mut()) {
            if alien.is_dead() && *counter > 0 {
                *counter -= 1;
            }
        }
    }

    fn update_bullets(&mut self) {
        let bullet_sprite = self.assets.sprite(self.assets.bullet);
        let death_sprite = self.assets.sprite(self.assets.alien_death);
        let floor = bullet_sprite.height() as i32;

        let mut i = 0;
        'bullets: while i < self.bullets.len {
            let bullet = &mut self.bullets.slots[i];
            bullet.y += bullet.dir;
            if bullet.y < floor || bullet.y >= self.height {
                self.bullets.swap_remove(i);
                continue;
            }
            let (bx, by) = (bullet.x, bullet.y);

            for alien in self.aliens.iter_mut() {
                let Some(k) = alien.kind.kind_index() else {
                    continue;
                };
                let Some(frame) = self.animations[k].current_frame() else {
                    continue;
                };
                let alien_sprite = self.assets.sprite(frame);
                if !overlaps(bullet_sprite, bx, by, alien_sprite, alien.x, alien.y) {
                    continue;
                }

                let points = alien.kind.points();
                alien.x -= (death_sprite.width() as i32 - alien_sprite.width() as i32) / 2;
                alien.kind = AlienType::Dead;
                self.score += points;
                log::debug!(
                    "Alien hit at ({}, {}), +{} points, score {}",
                    alien.x,
                    alien.y,
                    points,
                    self.score
                );

                self.bullets.swap_remove(i);
                continue 'bullets;
            }
            i += 1;
        }
    }

    fn move_player(&mut self, direction: i32) {
        let delta = PLAYER_SPEED * direction;
        if delta == 0 {
            return;
        }
        let width = self.assets.sprite(self.assets.player).width() as i32;
        let player = &mut self.player;
        if player.x + width + delta >= self.width {
            player.x = self.width - width;
        } else if player.x + delta <= 0 {
            player.x = 0;
        } else {
            player.x += delta;
        }
    }

    fn fire(&mut self) {
        let width = self.assets.sprite(self.assets.player).width() as i32;
        let bullet = Bullet {
            x: self.player.x + width / 2,
            y: self.player.y,
            dir: BULLET_SPEED,
        };
        if !self.bullets.push(bullet) {
            log::trace!("Fire request dropped, {} bullets in flight", self.bullets.len());
        }
    }
}
