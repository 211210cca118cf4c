pub mod animation;
pub mod app;
pub mod assets;
pub mod buffer;
pub mod collision;
pub mod config;
pub mod draw;
pub mod game;
pub mod input;
pub mod sprite;
pub mod text;

pub use app::InvadersApp;
pub use buffer::PixelBuffer;
pub use config::GameConfig;
pub use game::GameState;
pub use input::{Control, InputState};

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: usize = 224;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 256;
/// Default integer scaling factor for the SDL2 frontend.
pub const SCREEN_SCALE: u32 = 3;
