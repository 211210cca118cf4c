/// Discrete game controls, after the frontend has mapped physical keys.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Control {
    Left,
    Right,
    Fire,
}

/// Input gathered between two ticks.
///
/// Movement accumulates held keys: a press adds its direction and the
/// matching release takes it back, so holding left and right at once nets to
/// zero. Fire is latched by a press and consumed by the next tick.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    move_dir: i32,
    fire_pending: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, control: Control, is_pressed: bool) {
        match (control, is_pressed) {
            (Control::Right, true) | (Control::Left, false) => self.move_dir += 1,
            (Control::Right, false) | (Control::Left, true) => self.move_dir -= 1,
            (Control::Fire, true) => self.fire_pending = true,
            (Control::Fire, false) => {}
        }
    }

    /// Net horizontal intent in `-1..=1`.
    #[inline]
    pub fn move_direction(&self) -> i32 {
        self.move_dir.clamp(-1, 1)
    }

    #[inline]
    pub fn fire_pending(&self) -> bool {
        self.fire_pending
    }

    /// Returns the latched fire request and clears it.
    pub fn take_fire(&mut self) -> bool {
        std::mem::take(&mut self.fire_pending)
    }
}
