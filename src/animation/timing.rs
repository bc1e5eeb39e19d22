//! Timing functions (easing curves) for the state transition.
//!
//! A timing function maps normalized elapsed time to interpolation progress.
//! The switch icon defaults to [`TimingFunction::EaseOut`], a decelerating
//! curve that starts fast and settles into the target state.
//!
//! ## Built-in Easing Functions
//!
//! - [`TimingFunction::Linear`] - Constant speed (no easing)
//! - [`TimingFunction::EaseIn`] - Starts slow, ends fast (acceleration)
//! - [`TimingFunction::EaseOut`] - Starts fast, ends slow (deceleration)
//! - [`TimingFunction::EaseInOut`] - Slow start and end, fast middle
//! - [`TimingFunction::Decelerate`] - Ease-out with an adjustable factor
//!
//! ## Example
//!
//! ```ignore
//! let style = SwitchIconStyle::new()
//!     .animation_duration(250)
//!     .timing(TimingFunction::Decelerate(1.5));
//! ```

use std::sync::Arc;

/// Timing function that controls the animation curve
#[derive(Clone, Default)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    Linear,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    #[default]
    EaseOut,
    /// Starts slow, speeds up, then slows down
    EaseInOut,
    /// `1 - (1 - t)^(2 * factor)`; a factor of 1.0 is the same as `EaseOut`
    Decelerate(f32),
    /// Custom timing function
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// Evaluate the timing function at time t (0.0 to 1.0)
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => ease_in(t),
            TimingFunction::EaseOut => ease_out(t),
            TimingFunction::EaseInOut => ease_in_out(t),
            TimingFunction::Decelerate(factor) => decelerate(t, *factor),
            TimingFunction::Custom(f) => f(t),
        }
    }

    /// Create a custom timing function from a closure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(f))
    }
}

impl std::fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingFunction::Linear => write!(f, "Linear"),
            TimingFunction::EaseIn => write!(f, "EaseIn"),
            TimingFunction::EaseOut => write!(f, "EaseOut"),
            TimingFunction::EaseInOut => write!(f, "EaseInOut"),
            TimingFunction::Decelerate(factor) => write!(f, "Decelerate({})", factor),
            TimingFunction::Custom(_) => write!(f, "Custom"),
        }
    }
}

// Easing functions

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

fn decelerate(t: f32, factor: f32) -> f32 {
    if factor == 1.0 {
        ease_out(t)
    } else {
        1.0 - (1.0 - t).powf(2.0 * factor)
    }
}
