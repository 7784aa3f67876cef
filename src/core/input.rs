use std::time::{Duration, Instant};

use bitflags::bitflags;
use smallvec::SmallVec;

/* ------------------------ logical pad buttons ------------------------ */

/// Hold-to-scroll timing: a held button re-fires after an initial delay,
/// then at a fixed interval. Debouncing happens upstream in the driver.
pub const REPEAT_DELAY: Duration = Duration::from_millis(300);
pub const REPEAT_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Button {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    /// Activate / confirm.
    A = 4,
    /// Back / close.
    B = 5,
    /// Coarse decrement (value -10).
    L1 = 6,
    /// Coarse increment (value +10).
    R1 = 7,
    Menu = 8,
}

pub const BUTTON_COUNT: usize = 9;

impl Button {
    #[inline(always)]
    pub const fn ix(self) -> usize {
        self as usize
    }

    #[inline(always)]
    const fn flag(self) -> Buttons {
        Buttons::from_bits_truncate(1 << (self as u16))
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::A => "A",
            Self::B => "B",
            Self::L1 => "L1",
            Self::R1 => "R1",
            Self::Menu => "MENU",
        }
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Buttons: u16 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const A = 1 << 4;
        const B = 1 << 5;
        const L1 = 1 << 6;
        const R1 = 1 << 7;
        const MENU = 1 << 8;
    }
}

/* --------------------------- per-frame state --------------------------- */

/// Per-frame edge/repeat state for the logical pad.
///
/// Drivers queue raw press/release edges as they arrive; the frame loop
/// folds them in once per frame with `begin_frame(now)`, after which the
/// `just_*` queries stay stable for the rest of the pass.
#[derive(Debug, Default)]
pub struct Pad {
    queued: SmallVec<[(Button, bool); 8]>,
    down: Buttons,
    just_pressed: Buttons,
    just_released: Buttons,
    just_repeated: Buttons,
    pressed_at: [Option<Instant>; BUTTON_COUNT],
    last_repeat_at: [Option<Instant>; BUTTON_COUNT],
}

impl Pad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw edge from the input driver. Redundant edges (press while
    /// already down, release while up) are dropped at `begin_frame`.
    pub fn queue(&mut self, button: Button, pressed: bool) {
        self.queued.push((button, pressed));
    }

    /// Fold queued edges into button state and recompute repeat edges.
    /// Call exactly once per frame, before dispatching input.
    pub fn begin_frame(&mut self, now: Instant) {
        self.just_pressed = Buttons::empty();
        self.just_released = Buttons::empty();
        self.just_repeated = Buttons::empty();

        let edges: SmallVec<[(Button, bool); 8]> = self.queued.drain(..).collect();
        for (button, pressed) in edges {
            let flag = button.flag();
            if pressed {
                if self.down.contains(flag) {
                    continue;
                }
                self.down |= flag;
                self.just_pressed |= flag;
                self.pressed_at[button.ix()] = Some(now);
                self.last_repeat_at[button.ix()] = Some(now);
            } else {
                if !self.down.contains(flag) {
                    continue;
                }
                self.down &= !flag;
                self.just_released |= flag;
                self.pressed_at[button.ix()] = None;
                self.last_repeat_at[button.ix()] = None;
            }
        }

        // The press edge itself counts as a repeat; held buttons re-fire
        // after REPEAT_DELAY, then every REPEAT_INTERVAL.
        self.just_repeated |= self.just_pressed;
        for ix in 0..BUTTON_COUNT {
            let flag = Buttons::from_bits_truncate(1 << ix);
            if !self.down.contains(flag) || self.just_pressed.contains(flag) {
                continue;
            }
            let (Some(pressed_at), Some(last_repeat_at)) =
                (self.pressed_at[ix], self.last_repeat_at[ix])
            else {
                continue;
            };
            if now.duration_since(pressed_at) >= REPEAT_DELAY
                && now.duration_since(last_repeat_at) >= REPEAT_INTERVAL
            {
                self.just_repeated |= flag;
                self.last_repeat_at[ix] = Some(now);
            }
        }
    }

    #[inline(always)]
    pub fn is_pressed(&self, button: Button) -> bool {
        self.down.contains(button.flag())
    }

    #[inline(always)]
    pub fn just_pressed(&self, button: Button) -> bool {
        self.just_pressed.contains(button.flag())
    }

    #[inline(always)]
    pub fn just_released(&self, button: Button) -> bool {
        self.just_released.contains(button.flag())
    }

    /// True on the press edge and on every auto-repeat tick thereafter.
    #[inline(always)]
    pub fn just_repeated(&self, button: Button) -> bool {
        self.just_repeated.contains(button.flag())
    }

    /// True when any edge or repeat fired this frame.
    #[inline(always)]
    pub fn any_activity(&self) -> bool {
        !(self.just_pressed | self.just_released | self.just_repeated).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Button, Pad, REPEAT_DELAY, REPEAT_INTERVAL};
    use std::time::Instant;

    #[test]
    fn press_edge_sets_pressed_and_repeated() {
        let mut pad = Pad::new();
        let t0 = Instant::now();
        pad.queue(Button::Down, true);
        pad.begin_frame(t0);
        assert!(pad.just_pressed(Button::Down));
        assert!(pad.just_repeated(Button::Down), "press edge counts as repeat");
        assert!(pad.is_pressed(Button::Down));
        assert!(!pad.just_released(Button::Down));
    }

    #[test]
    fn no_repeat_before_initial_delay() {
        let mut pad = Pad::new();
        let t0 = Instant::now();
        pad.queue(Button::Right, true);
        pad.begin_frame(t0);
        pad.begin_frame(t0 + REPEAT_DELAY / 2);
        assert!(!pad.just_pressed(Button::Right));
        assert!(!pad.just_repeated(Button::Right));
        assert!(pad.is_pressed(Button::Right));
    }

    #[test]
    fn held_button_repeats_at_interval_after_delay() {
        let mut pad = Pad::new();
        let t0 = Instant::now();
        pad.queue(Button::Up, true);
        pad.begin_frame(t0);

        let t1 = t0 + REPEAT_DELAY;
        pad.begin_frame(t1);
        assert!(pad.just_repeated(Button::Up), "first repeat after delay");

        pad.begin_frame(t1 + REPEAT_INTERVAL / 2);
        assert!(!pad.just_repeated(Button::Up), "too soon for second repeat");

        pad.begin_frame(t1 + REPEAT_INTERVAL);
        assert!(pad.just_repeated(Button::Up), "second repeat after interval");
    }

    #[test]
    fn release_clears_state_and_fires_edge() {
        let mut pad = Pad::new();
        let t0 = Instant::now();
        pad.queue(Button::A, true);
        pad.begin_frame(t0);
        pad.queue(Button::A, false);
        pad.begin_frame(t0 + REPEAT_INTERVAL);
        assert!(pad.just_released(Button::A));
        assert!(!pad.is_pressed(Button::A));
        pad.begin_frame(t0 + REPEAT_DELAY * 2);
        assert!(!pad.just_repeated(Button::A), "released button must not repeat");
    }

    #[test]
    fn redundant_edges_are_dropped() {
        let mut pad = Pad::new();
        let t0 = Instant::now();
        pad.queue(Button::B, false);
        pad.queue(Button::B, true);
        pad.queue(Button::B, true);
        pad.begin_frame(t0);
        assert!(pad.just_pressed(Button::B));
        assert!(!pad.just_released(Button::B));
    }
}
