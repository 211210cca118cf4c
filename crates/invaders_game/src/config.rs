/// Player-facing game options.
///
/// `lives` mirrors the arcade "ships per credit" switch and is limited to
/// 3..=6.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub lives: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { lives: 3 }
    }
}

impl GameConfig {
    pub fn with_lives(lives: u8) -> Self {
        Self { lives }
    }

    pub fn starting_lives(&self) -> u8 {
        self.lives.clamp(3, 6)
    }
}

#[cfg(test)]
mod tests {
    use super::GameConfig;

    #[test]
    fn lives_are_clamped() {
        assert_eq!(GameConfig::default().starting_lives(), 3);
        assert_eq!(GameConfig::with_lives(0).starting_lives(), 3);
        assert_eq!(GameConfig::with_lives(5).starting_lives(), 5);
        assert_eq!(GameConfig::with_lives(200).starting_lives(), 6);
    }
}
