use crate::buffer::PixelBuffer;
use crate::config::GameConfig;
use crate::game::GameState;
use crate::input::{Control, InputState};
use crate::{SCREEN_HEIGHT, SCREEN_SCALE, SCREEN_WIDTH};
use invaders_common::app::App;
use invaders_common::color::Color;
use invaders_common::key::Key;

/// Frontend-facing wrapper around [`GameState`].
///
/// Each `update` renders the current state, advances the simulation one
/// tick and hands the frame to the frontend as top-down `RGBA8888`.
pub struct InvadersApp {
    should_exit: bool,
    paused: bool,
    frame_counter: u64,
    pub game: GameState,
    input: InputState,
    buffer: PixelBuffer,
}

impl Default for InvadersApp {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl InvadersApp {
    pub fn new(config: GameConfig) -> Self {
        Self {
            should_exit: false,
            paused: false,
            frame_counter: 0,
            game: GameState::with_config(SCREEN_WIDTH, SCREEN_HEIGHT, config),
            input: InputState::new(),
            buffer: PixelBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }
}

fn control_for(key: Key) -> Option<Control> {
    match key {
        Key::A | Key::Left => Some(Control::Left),
        Key::D | Key::Right => Some(Control::Right),
        Key::Space => Some(Control::Fire),
        _ => None,
    }
}

impl App for InvadersApp {
    fn init(&mut self) {
        log::info!("Invaders init");
    }

    fn update(&mut self, screen_state: &mut [u8]) {
        self.buffer.clear(Color::BACKGROUND.to_u32());
        self.game.render(&mut self.buffer);

        if !self.paused {
            self.game.update(&mut self.input);
            self.frame_counter = self.frame_counter.wrapping_add(1);
            if self.frame_counter % 600 == 0 {
                log::debug!(
                    "frame={} score={} bullets={}",
                    self.frame_counter,
                    self.game.score(),
                    self.game.bullets().len()
                );
            }
        }

        self.buffer.write_rgba8888(screen_state);

        if self.paused {
            overlay_pause_banner(screen_state);
        }
    }

    fn handle_key_event(&mut self, key: Key, is_pressed: bool) {
        if is_pressed {
            match key {
                Key::Escape => {
                    self.should_exit = true;
                    return;
                }
                Key::P => {
                    self.paused = !self.paused;
                    log::debug!("paused={}", self.paused);
                    return;
                }
                // Any other key resumes a paused game.
                _ if self.paused => {
                    self.paused = false;
                }
                _ => {}
            }
        }

        if let Some(control) = control_for(key) {
            self.input.handle(control, is_pressed);
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Invaders exit, final score {}", self.game.score());
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        "Invaders".to_string()
    }
}

/// Striped band across the top of the screen while paused.
fn overlay_pause_banner(screen_state: &mut [u8]) {
    let pitch = SCREEN_WIDTH * 4;
    debug_assert_eq!(screen_state.len(), pitch * SCREEN_HEIGHT);

    let banner_height = 12usize.min(SCREEN_HEIGHT);
    for (y, row) in screen_state.chunks_exact_mut(pitch).take(banner_height).enumerate() {
        let color = if y % 2 == 0 { Color::WHITE } else { Color::BLACK };
        let bytes = color.to_u32().to_ne_bytes();
        for px in row.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Vec<u8> {
        vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT * 4]
    }

    #[test]
    fn escape_requests_exit() {
        let mut app = InvadersApp::default();
        assert!(!app.should_exit());
        app.handle_key_event(Key::Escape, true);
        assert!(app.should_exit());
    }

    #[test]
    fn update_fills_the_screen() {
        let mut app = InvadersApp::default();
        let mut screen = screen();
        app.update(&mut screen);

        let background = Color::BACKGROUND.to_u32().to_ne_bytes();
        // top-left pixel is above the HUD text
        assert_eq!(&screen[0..4], &background);
        assert!(screen.chunks_exact(4).any(|px| px != background));
    }

    #[test]
    fn keys_drive_the_game() {
        let mut app = InvadersApp::default();
        let mut screen = screen();

        app.handle_key_event(Key::Space, true);
        app.handle_key_event(Key::Space, false);
        app.handle_key_event(Key::Right, true);
        app.update(&mut screen);

        assert_eq!(app.game.bullets().len(), 1);
        assert_eq!(app.game.player().x, 109);
    }

    #[test]
    fn pause_freezes_the_simulation() {
        let mut app = InvadersApp::default();
        let mut screen = screen();

        app.handle_key_event(Key::P, true);
        assert!(app.is_paused());
        app.handle_key_event(Key::D, true);
        assert!(!app.is_paused());

        app.handle_key_event(Key::P, true);
        app.update(&mut screen);
        assert_eq!(app.game.player().x, 107);
        assert_eq!(&screen[0..4], &Color::WHITE.to_u32().to_ne_bytes());

        app.handle_key_event(Key::P, true);
        app.update(&mut screen);
        assert_eq!(app.game.player().x, 109);
    }
}
