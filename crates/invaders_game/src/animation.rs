use crate::sprite::SpriteId;

/// Cycles through a fixed list of sprites, holding each for `frame_duration`
/// ticks.
#[derive(Clone, Debug)]
pub struct SpriteAnimation {
    looping: bool,
    frame_duration: usize,
    time: usize,
    finished: bool,
    frames: Vec<SpriteId>,
}

impl SpriteAnimation {
    pub fn new(frames: Vec<SpriteId>, frame_duration: usize, looping: bool) -> Self {
        assert!(!frames.is_empty(), "animation needs at least one frame");
        assert!(frame_duration > 0, "frame duration must be at least one tick");
        Self {
            looping,
            frame_duration,
            time: 0,
            finished: false,
            frames,
        }
    }

    #[inline]
    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn frame_duration(&self) -> usize {
        self.frame_duration
    }

    #[inline]
    pub fn time(&self) -> usize {
        self.time
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances by one tick. A non-looping animation finishes when it runs
    /// past its last frame and ignores further ticks.
    pub fn advance(&mut self) {
        if self.finished {
            return;
        }
        self.time += 1;
        if self.time == self.num_frames() * self.frame_duration {
            if self.looping {
                self.time = 0;
            } else {
                self.finished = true;
            }
        }
    }

    /// Index of the frame showing at the current tick.
    pub fn frame_index(&self) -> Option<usize> {
        if self.finished {
            None
        } else {
            Some(self.time / self.frame_duration)
        }
    }

    pub fn current_frame(&self) -> Option<SpriteId> {
        self.frame_index().map(|i| self.frames[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::{Sprite, SpriteSheet};

    fn two_frames() -> (SpriteId, SpriteId) {
        let mut sheet = SpriteSheet::new();
        let a = sheet.add(Sprite::new(1, 1, vec![1]));
        let b = sheet.add(Sprite::new(1, 1, vec![0]));
        (a, b)
    }

    #[test]
    fn looping_animation_cycles_back_to_zero() {
        let (a, b) = two_frames();
        let mut anim = SpriteAnimation::new(vec![a, b], 10, true);

        let mut seen = Vec::new();
        for _ in 0..20 {
            seen.push(anim.frame_index().unwrap());
            anim.advance();
        }

        let mut expected = vec![0; 10];
        expected.extend([1; 10]);
        assert_eq!(seen, expected);
        assert_eq!(anim.time(), 0);
        assert_eq!(anim.current_frame(), Some(a));
    }

    #[test]
    fn current_frame_follows_time() {
        let (a, b) = two_frames();
        let mut anim = SpriteAnimation::new(vec![a, b], 3, true);
        for _ in 0..3 {
            anim.advance();
        }
        assert_eq!(anim.current_frame(), Some(b));
    }

    #[test]
    fn one_shot_animation_finishes() {
        let (a, b) = two_frames();
        let mut anim = SpriteAnimation::new(vec![a, b], 2, false);
        for _ in 0..3 {
            anim.advance();
        }
        assert_eq!(anim.current_frame(), Some(b));
        anim.advance();
        assert!(anim.is_finished());
        assert_eq!(anim.current_frame(), None);

        anim.advance();
        assert!(anim.is_finished());
        assert_eq!(anim.time(), 4);
    }

    #[test]
    fn supports_arbitrary_frame_counts() {
        let mut sheet = SpriteSheet::new();
        let frames: Vec<_> = (0..5)
            .map(|_| sheet.add(Sprite::new(1, 1, vec![1])))
            .collect();
        let mut anim = SpriteAnimation::new(frames.clone(), 1, true);
        for expected in frames.iter().chain(frames.iter()) {
            assert_eq!(anim.current_frame(), Some(*expected));
            anim.advance();
        }
    }
}
