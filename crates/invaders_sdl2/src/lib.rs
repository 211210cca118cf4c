use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use typed_builder::TypedBuilder;

pub use invaders_common;
pub use invaders_common::app::App;
pub use sdl2;

use invaders_common::key::Key;

/// Layout of the screen buffer handed to [`App::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Packed 32-bit pixels, red in the most significant byte, stored in
    /// native byte order.
    RGBA8888,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub title: String,
    #[builder(default = PixelFormat::RGBA8888)]
    pub pixel_format: PixelFormat,
}

pub struct SdlContext;

impl SdlContext {
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            pixel_format,
        } = sdl_init_info;

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().present_vsync().build()?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(|e| anyhow!(e))?;

        let creator = canvas.texture_creator();
        let mut texture =
            creator.create_texture_streaming(map_pixel_format(pixel_format), width, height)?;

        let color_size = map_pixel_format_size(pixel_format);
        let pitch = (width * color_size) as usize;
        let mut screen_state = vec![0u8; pitch * height as usize];

        log::info!("{title}: {width}x{height} at {scale}x");
        app.init();
        let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        let target_frame = Duration::from_micros(16_667);
        let mut last_frame = Instant::now();

        loop {
            if app.should_exit() {
                app.exit();
                break;
            }

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => {
                        app.exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        repeat: false,
                        ..
                    } => {
                        app.handle_key_event(map_keycode(keycode), true);
                    }
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => {
                        app.handle_key_event(map_keycode(keycode), false);
                    }
                    _ => {}
                }
            }

            app.update(&mut screen_state);

            texture.update(None, &screen_state, pitch)?;
            canvas.clear();
            canvas.copy(&texture, None, None).map_err(|e| anyhow!(e))?;
            canvas.present();

            let elapsed = last_frame.elapsed();
            if elapsed < target_frame {
                std::thread::sleep(target_frame - elapsed);
            }
            last_frame = Instant::now();
        }

        Ok(())
    }
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGBA8888 => PixelFormatEnum::RGBA8888,
    }
}

pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGBA8888 => 4,
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::A => Key::A,
        Keycode::D => Key::D,
        Keycode::P => Key::P,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Space => Key::Space,
        Keycode::Escape => Key::Escape,
        _ => Key::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_info_defaults_to_rgba() {
        let info = SdlInitInfo::builder()
            .width(224)
            .height(256)
            .scale(3)
            .title("Invaders".to_string())
            .build();
        assert_eq!(info.pixel_format, PixelFormat::RGBA8888);
        assert_eq!(map_pixel_format_size(info.pixel_format), 4);
    }

    #[test]
    fn maps_game_keys() {
        assert_eq!(map_keycode(Keycode::Space), Key::Space);
        assert_eq!(map_keycode(Keycode::Left), Key::Left);
        assert_eq!(map_keycode(Keycode::Escape), Key::Escape);
        assert_eq!(map_keycode(Keycode::Z), Key::None);
    }
}
