use std::time::Instant;

use crate::animation::{Animatable, Transition};

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (animation not running or same value)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// Time-driven interpolation of one animatable value.
///
/// The clock starts on the first [`advance`](Self::advance) after
/// [`animate_to`](Self::animate_to), so the first frame always shows the
/// start value and the host decides what "now" means.
pub struct AnimationState<T: Animatable> {
    /// Current interpolated value
    current: T,
    /// Value the animation is heading to
    target: T,
    /// Value when animation started
    start: T,
    /// Progress from 0.0 to 1.0
    progress: f32,
    /// Time of the first frame; `None` until the first advance
    start_time: Option<Instant>,
    /// Transition configuration
    transition: Transition,
}

impl<T: Animatable> AnimationState<T> {
    pub fn new(initial_value: T, transition: Transition) -> Self {
        Self {
            current: initial_value.clone(),
            target: initial_value.clone(),
            start: initial_value,
            progress: 1.0, // Start completed
            start_time: None,
            transition,
        }
    }

    /// Start animating from the current value to a new target.
    ///
    /// Any animation in flight is superseded; the new one begins wherever the
    /// value currently is.
    pub fn animate_to(&mut self, new_target: T) {
        self.start = self.current.clone();
        self.target = new_target;
        self.progress = 0.0;
        self.start_time = None;
    }

    /// Advance the animation to `now` and return whether the value changed
    pub fn advance(&mut self, now: Instant) -> AdvanceResult<T> {
        if self.progress >= 1.0 {
            return AdvanceResult::NoChange;
        }

        let start_time = *self.start_time.get_or_insert(now);
        let elapsed_ms = now.saturating_duration_since(start_time).as_secs_f32() * 1000.0;

        let t = if self.transition.duration_ms == 0 {
            1.0
        } else {
            (elapsed_ms / self.transition.duration_ms as f32).min(1.0)
        };
        self.progress = t;

        // Land exactly on the target so the resting value is bit-exact
        let new_value = if t >= 1.0 {
            self.target.clone()
        } else {
            T::lerp(&self.start, &self.target, self.transition.timing.evaluate(t))
        };

        let changed = new_value != self.current;
        self.current = new_value.clone();

        if changed {
            AdvanceResult::Changed(new_value)
        } else {
            AdvanceResult::NoChange
        }
    }

    /// Check if animation is still running
    pub fn is_animating(&self) -> bool {
        self.progress < 1.0
    }

    /// Get current value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Get target value
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Set value immediately without animation, cancelling any in flight
    pub fn set_immediate(&mut self, value: T) {
        self.current = value.clone();
        self.target = value.clone();
        self.start = value;
        self.progress = 1.0;
        self.start_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TimingFunction;
    use std::time::Duration;

    fn linear(duration_ms: u32) -> Transition {
        Transition::new(duration_ms, TimingFunction::Linear)
    }

    #[test]
    fn test_starts_completed() {
        let state = AnimationState::new(0.0f32, linear(100));
        assert!(!state.is_animating());
        assert_eq!(*state.current(), 0.0);
    }

    #[test]
    fn test_first_advance_holds_start_value() {
        let mut state = AnimationState::new(0.0f32, linear(100));
        state.animate_to(1.0);
        let t0 = Instant::now();
        assert_eq!(state.advance(t0), AdvanceResult::NoChange);
        assert!(state.is_animating());
    }

    #[test]
    fn test_linear_progress() {
        let mut state = AnimationState::new(0.0f32, linear(100));
        state.animate_to(1.0);
        let t0 = Instant::now();
        state.advance(t0);
        assert!(state.advance(t0 + Duration::from_millis(50)).is_changed());
        assert!((state.current() - 0.5).abs() < 1e-4);
        assert_eq!(
            state.advance(t0 + Duration::from_millis(100)),
            AdvanceResult::Changed(1.0)
        );
        assert!(!state.is_animating());
        assert_eq!(
            state.advance(t0 + Duration::from_millis(200)),
            AdvanceResult::NoChange
        );
    }

    #[test]
    fn test_ease_out_is_ahead_of_linear() {
        let mut state = AnimationState::new(0.0f32, Transition::default());
        state.animate_to(1.0);
        let t0 = Instant::now();
        state.advance(t0);
        state.advance(t0 + Duration::from_millis(150));
        assert!((state.current() - 0.75).abs() < 1e-4);
    }

    #[test]
    fn test_overrun_lands_on_target() {
        let mut state = AnimationState::new(1.0f32, Transition::default());
        state.animate_to(0.0);
        let t0 = Instant::now();
        state.advance(t0);
        state.advance(t0 + Duration::from_secs(5));
        assert_eq!(*state.current(), 0.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn test_retarget_starts_from_current() {
        let mut state = AnimationState::new(0.0f32, linear(100));
        state.animate_to(1.0);
        let t0 = Instant::now();
        state.advance(t0);
        state.advance(t0 + Duration::from_millis(40));
        assert!((state.current() - 0.4).abs() < 1e-4);

        state.animate_to(0.0);
        assert_eq!(*state.target(), 0.0);
        let t1 = t0 + Duration::from_millis(41);
        state.advance(t1);
        assert!((state.current() - 0.4).abs() < 1e-4);
        state.advance(t1 + Duration::from_millis(50));
        assert!((state.current() - 0.2).abs() < 1e-4);
    }

    #[test]
    fn test_set_immediate_cancels() {
        let mut state = AnimationState::new(0.0f32, linear(100));
        state.animate_to(1.0);
        state.set_immediate(1.0);
        assert!(!state.is_animating());
        assert_eq!(*state.current(), 1.0);
    }
}
