use crate::key::Key;

/// Contract between a game and the frontend that presents it.
///
/// The frontend owns the window, the event pump and the texture upload. Each
/// frame it forwards key events, then hands `update` a screen buffer laid out
/// in the pixel format it was configured with.
pub trait App {
    fn init(&mut self);
    fn update(&mut self, screen: &mut [u8]);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
