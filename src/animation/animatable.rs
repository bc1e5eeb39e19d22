use crate::widgets::{Color, Point};

/// Trait for types that can be animated by interpolating between values
pub trait Animatable: Clone + PartialEq + 'static {
    /// Linear interpolation between two values
    /// t = 0.0 returns `from`, t = 1.0 returns `to`
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

/// Channel-wise interpolation in linear RGBA space. Stateless, so every
/// widget shares it without any evaluator object.
impl Animatable for Color {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Color {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }
}

impl Animatable for Point {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t)
    }
}
