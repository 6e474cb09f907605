//! Eased integer counter driven by display frames.
//!
//! Animators never sleep or own a timer: the caller hands them the timestamp
//! of each frame. Time comes from a [`FrameClock`], so tests can drive an
//! animation with a manually advanced clock instead of real time.

#[cfg(test)]
use std::cell::Cell;
use std::time::Instant;

/// Source of frame timestamps, in milliseconds on a monotonic clock.
pub trait FrameClock {
    fn now_ms(&self) -> f64;
}

/// Wall-clock frames, measured from when the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Manually advanced clock.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Cell<f64>,
}

#[cfg(test)]
impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

#[cfg(test)]
impl FrameClock for VirtualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStep {
    pub value: i64,
    pub done: bool,
}

#[derive(Debug, Clone)]
pub struct CounterAnimator {
    start: i64,
    end: i64,
    duration_ms: f64,
    start_time: f64,
    done: bool,
}

impl CounterAnimator {
    /// Begin an animation at the clock's current time.
    pub fn start(start: i64, end: i64, duration_ms: f64, clock: &dyn FrameClock) -> Self {
        Self {
            start,
            end,
            duration_ms,
            start_time: clock.now_ms(),
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Value to display for the frame at `now_ms`. Once progress reaches 1 the
    /// value is exactly `end` and the animator asks for no more frames.
    pub fn on_frame(&mut self, now_ms: f64) -> FrameStep {
        let elapsed = (now_ms - self.start_time).max(0.0);
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed / self.duration_ms).min(1.0)
        };

        let value = if progress >= 1.0 {
            self.end
        } else {
            let eased = ease_out_cubic(progress);
            (self.start as f64 + (self.end - self.start) as f64 * eased).round() as i64
        };

        self.done = progress >= 1.0;
        FrameStep {
            value,
            done: self.done,
        }
    }
}

/// Displayed counter text plus the animators writing to it.
///
/// Animators are independent: starting a new one does not cancel the old,
/// and on each frame they write in start order, so the newest wins.
#[derive(Debug, Default)]
pub struct CounterDisplay {
    text: String,
    animators: Vec<CounterAnimator>,
}

impl CounterDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn animate(&mut self, animator: CounterAnimator) {
        self.animators.push(animator);
    }

    pub fn is_animating(&self) -> bool {
        !self.animators.is_empty()
    }

    /// Step every running animator. Returns whether another frame is wanted.
    pub fn on_frame(&mut self, now_ms: f64) -> bool {
        for animator in &mut self.animators {
            let step = animator.on_frame(now_ms);
            self.text = step.value.to_string();
        }
        self.animators.retain(|a| !a.is_done());
        self.is_animating()
    }
}
