mod animatable;
mod state;
mod timing;

pub use animatable::Animatable;
pub use state::{AdvanceResult, AnimationState};
pub use timing::TimingFunction;

/// Configuration for how the transition fraction animates when the state flips
#[derive(Clone, Debug)]
pub struct Transition {
    /// Duration of the animation in milliseconds
    pub duration_ms: u32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration_ms: u32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
        }
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// A zero-length transition applies its target without any frames
    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }
}

impl Default for Transition {
    /// 300 ms with a decelerating curve
    fn default() -> Self {
        Self::new(300, TimingFunction::EaseOut)
    }
}
