//! An icon that animates between enabled and disabled.
//!
//! Disabling sweeps a diagonal dash across the icon from the top-left to the
//! bottom-right corner while the tint cross-fades to the disabled color and
//! the icon fades to the disabled alpha. Enabling plays it backwards.
//!
//! A single scalar, the *fraction*, drives everything: 0 is the enabled look,
//! 1 the disabled look. At rest it is exactly 0 or 1.
//!
//! ```ignore
//! let frames = Rc::new(FrameRequests::new());
//! let mut icon = SwitchIcon::new(
//!     SwitchIconStyle::new().tint_color(Color::from_hex(0x2196F3)),
//!     frames.clone(),
//! )?
//! .source("icons/mic.svg");
//!
//! icon.set_bounds(Rect::new(0.0, 0.0, 48.0, 48.0));
//! icon.toggle(true);
//! while icon.advance_animations(Instant::now()) {
//!     icon.paint(&mut canvas);
//! }
//! ```

mod geometry;
mod saved_state;
mod style;

pub use geometry::{DashGeometry, DASH_THICKNESS_PART};
pub use saved_state::{InstanceState, SavedState};
pub use style::{
    parse_color, SwitchIconStyle, ATTR_ANIMATION_DURATION, ATTR_DISABLED_ALPHA,
    ATTR_DISABLED_COLOR, ATTR_ENABLED, ATTR_NO_DASH, ATTR_TINT_COLOR,
    DEFAULT_ANIMATION_DURATION_MS, DEFAULT_DISABLED_ALPHA,
};

use std::rc::Rc;
use std::time::Instant;

use crate::animation::{Animatable, AnimationState};
use crate::error::ConfigError;
use crate::invalidation::{request_redraw, ChangeFlags, FrameScheduler};
use crate::renderer::{Canvas, ClipPath, ColorFilter, DashPaint};

use super::image::{ContentFit, ImageSource};
use super::widget::{Event, EventResponse, MouseButton, Widget};
use super::{Color, Padding, Rect};

/// Fraction of the fully enabled look.
const ENABLED_FRACTION: f32 = 0.0;
/// Fraction of the fully disabled look.
const DISABLED_FRACTION: f32 = 1.0;

fn resting_fraction(enabled: bool) -> f32 {
    if enabled {
        ENABLED_FRACTION
    } else {
        DISABLED_FRACTION
    }
}

pub struct SwitchIcon {
    style: SwitchIconStyle,
    disabled_color: Color,
    source: Option<ImageSource>,
    content_fit: ContentFit,
    scheduler: Rc<dyn FrameScheduler>,

    bounds: Rect,
    padding: Padding,
    geometry: DashGeometry,
    clip_path: ClipPath,

    enabled: bool,
    fraction: f32,
    color: Color,
    alpha: u8,
    /// The single interpolation driver; replaced wholesale on retarget
    animation: AnimationState<f32>,
    changes: ChangeFlags,
    /// Pointer went down inside the bounds and has not been released
    pressed: bool,
}

impl SwitchIcon {
    /// Create a switch icon, failing if the style does not validate.
    ///
    /// The widget starts at rest in the style's initial state. No redraw is
    /// requested until the host reports bounds or the state changes.
    pub fn new(
        style: SwitchIconStyle,
        scheduler: Rc<dyn FrameScheduler>,
    ) -> Result<Self, ConfigError> {
        style.validate()?;

        let enabled = style.enabled;
        let fraction = resting_fraction(enabled);
        let disabled_color = style.resolved_disabled_color();
        let animation = AnimationState::new(fraction, style.transition());

        let mut icon = Self {
            color: style.tint_color,
            disabled_color,
            source: None,
            content_fit: ContentFit::default(),
            scheduler,
            bounds: Rect::default(),
            padding: Padding::default(),
            geometry: DashGeometry::default(),
            clip_path: ClipPath::default(),
            enabled,
            fraction,
            alpha: 255,
            animation,
            changes: ChangeFlags::empty(),
            pressed: false,
            style,
        };
        icon.apply_fraction(fraction);
        icon.changes = ChangeFlags::empty();
        Ok(icon)
    }

    /// Create a switch icon from a string attribute bag.
    pub fn from_attributes<'a, I>(
        attributes: I,
        scheduler: Rc<dyn FrameScheduler>,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::new(SwitchIconStyle::from_attributes(attributes)?, scheduler)
    }

    /// Set the icon to draw.
    pub fn source(mut self, source: impl Into<ImageSource>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set how the icon fits the content box.
    pub fn content_fit(mut self, fit: ContentFit) -> Self {
        self.content_fit = fit;
        self
    }

    pub fn style(&self) -> &SwitchIconStyle {
        &self.style
    }

    /// Logical state. Flips as soon as a transition is requested.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Transition progress: 0 is enabled, 1 is disabled.
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Current tint.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Current icon and dash alpha.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn color_filter(&self) -> ColorFilter {
        ColorFilter::src_in(self.color)
    }

    pub fn geometry(&self) -> &DashGeometry {
        &self.geometry
    }

    pub fn clip_path(&self) -> &ClipPath {
        &self.clip_path
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Drain what changed since the last call.
    pub fn take_changes(&mut self) -> ChangeFlags {
        std::mem::take(&mut self.changes)
    }

    /// Move to `enabled`, doing nothing at all if already there.
    pub fn set_enabled(&mut self, enabled: bool, animate: bool) {
        if self.enabled == enabled {
            return;
        }
        self.toggle(animate);
    }

    /// Flip the state, animated or not.
    ///
    /// The logical state flips immediately. An animation already in flight is
    /// abandoned and the new one starts from the current fraction.
    pub fn toggle(&mut self, animate: bool) {
        self.enabled = !self.enabled;
        let target = resting_fraction(self.enabled);
        log::debug!(
            "Switch icon -> {} (from fraction {:.3}, animate: {})",
            if self.enabled { "enabled" } else { "disabled" },
            self.fraction,
            animate
        );

        if animate && self.style.animation_duration_ms > 0 {
            self.animation.animate_to(target);
            // First frame: the animation holds its start value until advanced
            request_redraw(self.scheduler.as_ref());
            self.changes |= ChangeFlags::PAINT;
        } else {
            self.animation.set_immediate(target);
            self.set_fraction(target);
        }
    }

    /// Record a snapshot chained after the host's own state.
    pub fn save_instance_state(&self, super_state: Vec<u8>) -> SavedState {
        SavedState::new(super_state, self.enabled)
    }

    /// Restore a snapshot, returning the host state for the host to restore.
    ///
    /// A state that is not a switch icon snapshot is handed back untouched.
    /// A snapshot lands at rest with no animation running.
    pub fn restore_instance_state(&mut self, state: InstanceState) -> Vec<u8> {
        match state {
            InstanceState::SwitchIcon(saved) => {
                log::debug!("Restoring switch icon, enabled: {}", saved.icon_enabled);
                self.enabled = saved.icon_enabled;
                let fraction = resting_fraction(self.enabled);
                self.animation.set_immediate(fraction);
                self.set_fraction(fraction);
                saved.super_state
            }
            InstanceState::Host(super_state) => super_state,
        }
    }

    /// Padding changed; the geometry follows.
    pub fn set_padding(&mut self, padding: Padding) {
        if padding != self.padding {
            self.padding = padding;
            self.update_geometry();
        }
    }

    /// Store `fraction` with its derived color, alpha and clip, then ask
    /// for a redraw.
    fn set_fraction(&mut self, fraction: f32) {
        self.apply_fraction(fraction);
        request_redraw(self.scheduler.as_ref());
        self.changes |= ChangeFlags::PAINT;
    }

    fn apply_fraction(&mut self, fraction: f32) {
        // Overshooting custom curves must not extrapolate color or the band
        let fraction = fraction.clamp(ENABLED_FRACTION, DISABLED_FRACTION);
        self.fraction = fraction;
        self.update_color(fraction);
        self.update_alpha(fraction);
        self.update_clip_path();
    }

    fn update_color(&mut self, fraction: f32) {
        if self.style.tint_color == self.disabled_color {
            return;
        }
        self.color = Color::lerp(&self.style.tint_color, &self.disabled_color, fraction);
        self.changes |= ChangeFlags::COLOR;
    }

    fn update_alpha(&mut self, fraction: f32) {
        self.alpha = alpha_at(self.style.disabled_alpha, fraction);
        self.changes |= ChangeFlags::ALPHA;
    }

    fn update_clip_path(&mut self) {
        self.clip_path = self.geometry.clip_path(self.fraction);
        self.changes |= ChangeFlags::CLIP;
    }

    fn update_geometry(&mut self) {
        self.geometry = DashGeometry::compute(self.bounds.size(), &self.padding);
        log::debug!(
            "Switch icon geometry: {}x{}, dash thickness {}",
            self.bounds.width,
            self.bounds.height,
            self.geometry.thickness()
        );
        self.changes |= ChangeFlags::GEOMETRY;
        self.update_clip_path();
    }

    fn dash_paint(&self) -> DashPaint {
        DashPaint {
            color: self.color.with_alpha(self.alpha),
            width: self.geometry.thickness(),
        }
    }
}

/// Icon alpha at `fraction`: 255 when enabled, `disabled_alpha` when disabled.
pub fn alpha_at(disabled_alpha: f32, fraction: f32) -> u8 {
    let alpha = disabled_alpha + (1.0 - fraction) * (1.0 - disabled_alpha);
    (255.0 * alpha).round().clamp(0.0, 255.0) as u8
}

impl Widget for SwitchIcon {
    fn advance_animations(&mut self, now: Instant) -> bool {
        if !self.animation.is_animating() {
            return false;
        }
        if self.animation.advance(now).is_changed() {
            let fraction = *self.animation.current();
            self.set_fraction(fraction);
        }
        self.animation.is_animating()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        let resized = bounds.size() != self.bounds.size();
        self.bounds = bounds;
        if resized {
            self.update_geometry();
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.save();
        // At rest enabled there is no dash and nothing is cut
        if !self.style.no_dash && self.fraction > ENABLED_FRACTION {
            let geometry = &self.geometry;
            canvas.draw_line(
                geometry.start(),
                geometry.dash_end_at(self.fraction),
                &self.dash_paint(),
            );
            if canvas.capabilities().clip_out {
                canvas.clip_out_path(&self.clip_path);
            } else {
                canvas.clip_path_xor(&self.clip_path);
            }
        }
        if let Some(ref source) = self.source {
            let content = Rect::from_size(self.bounds.size()).deflate(&self.padding);
            canvas.draw_icon(
                source,
                content,
                self.content_fit,
                self.color_filter(),
                self.alpha,
            );
        }
        canvas.restore();
    }

    /// A primary click released inside the bounds toggles with animation.
    fn event(&mut self, event: &Event) -> EventResponse {
        let local = Rect::from_size(self.bounds.size());
        match event {
            Event::MouseDown {
                x,
                y,
                button: MouseButton::Left,
            } if local.contains(*x, *y) => {
                self.pressed = true;
                EventResponse::Handled
            }
            Event::MouseUp {
                x,
                y,
                button: MouseButton::Left,
            } if self.pressed => {
                self.pressed = false;
                if local.contains(*x, *y) {
                    self.toggle(true);
                }
                EventResponse::Handled
            }
            Event::MouseLeave => {
                self.pressed = false;
                EventResponse::Ignored
            }
            _ => EventResponse::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invalidation::{FrameRequests, RedrawRequest};
    use crate::renderer::{CanvasCapabilities, DrawCommand, PaintContext};
    use std::time::Duration;

    fn icon_with(style: SwitchIconStyle) -> (SwitchIcon, Rc<FrameRequests>) {
        let frames = Rc::new(FrameRequests::new());
        let mut icon = SwitchIcon::new(style, frames.clone()).unwrap();
        icon.set_bounds(Rect::new(0.0, 0.0, 48.0, 48.0));
        (icon, frames)
    }

    #[test]
    fn test_alpha_endpoints() {
        assert_eq!(alpha_at(0.5, 0.0), 255);
        assert_eq!(alpha_at(0.5, 1.0), 128);
        assert_eq!(alpha_at(0.0, 1.0), 0);
        assert_eq!(alpha_at(1.0, 1.0), 255);
        assert_eq!(alpha_at(0.3, 1.0), 77);
    }

    #[test]
    fn test_alpha_non_increasing() {
        for disabled_alpha in [0.0, 0.25, 0.5, 0.9, 1.0] {
            let mut previous = alpha_at(disabled_alpha, 0.0);
            for i in 1..=100 {
                let alpha = alpha_at(disabled_alpha, i as f32 / 100.0);
                assert!(alpha <= previous);
                previous = alpha;
            }
        }
    }

    #[test]
    fn test_starts_at_rest() {
        let (icon, _) = icon_with(SwitchIconStyle::new());
        assert!(icon.is_enabled());
        assert_eq!(icon.fraction(), 0.0);
        assert_eq!(icon.alpha(), 255);

        let (icon, _) = icon_with(SwitchIconStyle::new().enabled(false));
        assert!(!icon.is_enabled());
        assert_eq!(icon.fraction(), 1.0);
        assert_eq!(icon.alpha(), 128);
    }

    #[test]
    fn test_construction_rejects_bad_alpha() {
        let frames = Rc::new(FrameRequests::new());
        let result = SwitchIcon::new(SwitchIconStyle::new().disabled_alpha(1.5), frames);
        assert!(matches!(
            result,
            Err(ConfigError::DisabledAlphaOutOfRange(a)) if a == 1.5
        ));
    }

    #[test]
    fn test_toggle_without_animation() {
        let (mut icon, frames) = icon_with(
            SwitchIconStyle::new()
                .tint_color(Color::BLACK)
                .disabled_color(Color::BLACK)
                .disabled_alpha(0.5)
                .animation_duration(0),
        );
        icon.take_changes();
        let before = frames.count();

        icon.toggle(false);

        assert!(!icon.is_enabled());
        assert_eq!(icon.fraction(), 1.0);
        assert_eq!(icon.alpha(), 128);
        assert_eq!(icon.color(), Color::BLACK);
        assert_eq!(frames.count() - before, 1);
        assert!(!icon.take_changes().contains(ChangeFlags::COLOR));
    }

    #[test]
    fn test_zero_duration_skips_frames() {
        let (mut icon, frames) = icon_with(SwitchIconStyle::new().animation_duration(0));
        let before = frames.count();
        icon.toggle(true);
        assert_eq!(icon.fraction(), 1.0);
        assert!(!icon.is_animating());
        assert_eq!(frames.count() - before, 1);
        assert!(!icon.advance_animations(Instant::now()));
    }

    #[test]
    fn test_color_interpolates() {
        let (mut icon, _) = icon_with(
            SwitchIconStyle::new()
                .tint_color(Color::from_hex(0x000000))
                .disabled_color(Color::from_hex(0xFFFFFF))
                .animation_duration(100)
                .timing(crate::animation::TimingFunction::Linear),
        );
        icon.take_changes();
        icon.toggle(true);
        let t0 = Instant::now();
        icon.advance_animations(t0);
        icon.advance_animations(t0 + Duration::from_millis(50));
        assert!((icon.color().r - 0.5).abs() < 1e-3);
        assert!(icon.take_changes().contains(ChangeFlags::COLOR));
    }

    #[test]
    fn test_set_enabled_same_state_is_noop() {
        let (mut icon, frames) = icon_with(SwitchIconStyle::new());
        icon.take_changes();
        let before = frames.count();
        let clip = *icon.clip_path();

        icon.set_enabled(true, true);
        icon.set_enabled(true, false);

        assert_eq!(frames.count(), before);
        assert_eq!(icon.fraction(), 0.0);
        assert_eq!(*icon.clip_path(), clip);
        assert!(icon.take_changes().is_empty());
        assert!(!icon.is_animating());
    }

    #[test]
    fn test_animated_toggle_reaches_target() {
        let (mut icon, frames) = icon_with(SwitchIconStyle::new());
        icon.toggle(true);
        assert!(!icon.is_enabled());
        assert!(icon.is_animating());

        let t0 = Instant::now();
        assert!(icon.advance_animations(t0));
        assert_eq!(icon.fraction(), 0.0);

        assert!(icon.advance_animations(t0 + Duration::from_millis(150)));
        assert!((icon.fraction() - 0.75).abs() < 1e-4);

        assert!(!icon.advance_animations(t0 + Duration::from_millis(300)));
        assert_eq!(icon.fraction(), 1.0);
        assert_eq!(icon.alpha(), 128);
        assert_eq!(frames.take(), Some(RedrawRequest::NextFrame));
    }

    #[test]
    fn test_retoggle_cancels_and_reverses() {
        let (mut icon, _) = icon_with(SwitchIconStyle::new());
        icon.toggle(true);
        let t0 = Instant::now();
        icon.advance_animations(t0);
        icon.advance_animations(t0 + Duration::from_millis(150));
        let midway = icon.fraction();

        icon.toggle(true);
        assert!(icon.is_enabled());
        assert!(icon.is_animating());
        // The new animation starts where the old one was
        let t1 = t0 + Duration::from_millis(160);
        icon.advance_animations(t1);
        assert_eq!(icon.fraction(), midway);

        assert!(!icon.advance_animations(t1 + Duration::from_millis(300)));
        assert_eq!(icon.fraction(), 0.0);
        assert_eq!(icon.alpha(), 255);
    }

    #[test]
    fn test_unanimated_toggle_cancels_animation() {
        let (mut icon, _) = icon_with(SwitchIconStyle::new());
        icon.toggle(true);
        let t0 = Instant::now();
        icon.advance_animations(t0);
        icon.advance_animations(t0 + Duration::from_millis(100));

        icon.toggle(false);
        assert!(icon.is_enabled());
        assert_eq!(icon.fraction(), 0.0);
        assert!(!icon.advance_animations(t0 + Duration::from_millis(200)));
        assert_eq!(icon.fraction(), 0.0);
    }

    #[test]
    fn test_resize_recomputes_geometry() {
        let (mut icon, _) = icon_with(SwitchIconStyle::new().enabled(false));
        assert_eq!(icon.geometry().thickness(), 4.0);
        icon.take_changes();

        icon.set_bounds(Rect::new(10.0, 10.0, 48.0, 48.0));
        assert!(!icon.take_changes().contains(ChangeFlags::GEOMETRY));

        icon.set_bounds(Rect::new(0.0, 0.0, 96.0, 96.0));
        assert_eq!(icon.geometry().thickness(), 8.0);
        assert_eq!(*icon.clip_path(), icon.geometry().clip_path(1.0));
        assert!(icon.take_changes().contains(ChangeFlags::GEOMETRY));

        icon.set_padding(Padding::all(24.0));
        assert_eq!(icon.geometry().thickness(), 4.0);
    }

    #[test]
    fn test_timer_fallback_scheduling() {
        let frames = Rc::new(FrameRequests::timer_only());
        let mut icon = SwitchIcon::new(SwitchIconStyle::new(), frames.clone()).unwrap();
        icon.toggle(false);
        assert_eq!(
            frames.take(),
            Some(RedrawRequest::Delayed(Duration::from_millis(10)))
        );
    }

    #[test]
    fn test_paint_order() {
        let (icon, _) = icon_with(SwitchIconStyle::new().enabled(false));
        let icon = icon.source("bell.svg");
        let mut ctx = PaintContext::new();
        icon.paint(&mut ctx);

        let commands = ctx.commands();
        assert_eq!(commands.len(), 5);
        assert_eq!(commands[0], DrawCommand::Save);
        match &commands[1] {
            DrawCommand::Line { from, to, paint } => {
                assert_eq!(*from, icon.geometry().start());
                assert_eq!(*to, icon.geometry().dash_end_at(1.0));
                assert_eq!(paint.width, 4.0);
                assert_eq!(paint.color.to_rgba8()[3], 128);
            }
            other => panic!("expected line, got {:?}", other),
        }
        assert_eq!(commands[2], DrawCommand::ClipOutPath(*icon.clip_path()));
        match &commands[3] {
            DrawCommand::Icon { alpha, rect, .. } => {
                assert_eq!(*alpha, 128);
                assert_eq!(*rect, Rect::new(0.0, 0.0, 48.0, 48.0));
            }
            other => panic!("expected icon, got {:?}", other),
        }
        assert_eq!(commands[4], DrawCommand::Restore);
    }

    #[test]
    fn test_paint_enabled_skips_dash_and_clip() {
        let (icon, _) = icon_with(SwitchIconStyle::new());
        let icon = icon.source("bell.svg");
        let mut ctx = PaintContext::new();
        icon.paint(&mut ctx);

        let commands = ctx.commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], DrawCommand::Save);
        assert!(matches!(commands[1], DrawCommand::Icon { alpha: 255, .. }));
        assert_eq!(commands[2], DrawCommand::Restore);
    }

    #[test]
    fn test_overshooting_curve_is_clamped() {
        let (mut icon, _) = icon_with(
            SwitchIconStyle::new()
                .tint_color(Color::BLACK)
                .disabled_color(Color::WHITE)
                .animation_duration(100)
                .timing(crate::animation::TimingFunction::custom(|t| t * 1.5)),
        );
        icon.toggle(true);
        let t0 = Instant::now();
        icon.advance_animations(t0);
        assert!(icon.advance_animations(t0 + Duration::from_millis(80)));

        assert_eq!(icon.fraction(), 1.0);
        assert_eq!(icon.color(), Color::WHITE);
        assert_eq!(*icon.clip_path(), icon.geometry().clip_path(1.0));

        // Undershoot on the way back stays at the enabled end
        icon.toggle(false);
        assert_eq!(icon.fraction(), 0.0);
    }

    #[test]
    fn test_paint_xor_fallback() {
        let (icon, _) = icon_with(SwitchIconStyle::new().enabled(false));
        let mut ctx = PaintContext::with_capabilities(CanvasCapabilities { clip_out: false });
        icon.paint(&mut ctx);
        assert!(ctx
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::ClipPathXor(_))));
    }

    #[test]
    fn test_paint_no_dash() {
        let (icon, _) = icon_with(SwitchIconStyle::new().no_dash(true).enabled(false));
        let icon = icon.source("bell.svg");
        let mut ctx = PaintContext::new();
        icon.paint(&mut ctx);
        assert!(!ctx.commands().iter().any(|c| c.is_clip()));
        assert!(!ctx
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Line { .. })));
        assert!(ctx
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Icon { alpha: 128, .. })));
    }

    #[test]
    fn test_save_restore_round_trip() {
        let (mut icon, _) = icon_with(SwitchIconStyle::new());
        icon.toggle(true);
        let bytes = icon.save_instance_state(vec![9, 9]).to_bytes();

        let (mut restored, _) = icon_with(SwitchIconStyle::new());
        let saved = SavedState::from_bytes(&bytes).unwrap();
        let host = restored.restore_instance_state(InstanceState::SwitchIcon(saved));

        assert_eq!(host, vec![9, 9]);
        assert!(!restored.is_enabled());
        assert_eq!(restored.fraction(), 1.0);
        assert!(!restored.is_animating());
    }

    #[test]
    fn test_restore_foreign_state_is_ignored() {
        let (mut icon, frames) = icon_with(SwitchIconStyle::new());
        let before = frames.count();
        let host = icon.restore_instance_state(InstanceState::Host(vec![1, 2, 3]));
        assert_eq!(host, vec![1, 2, 3]);
        assert!(icon.is_enabled());
        assert_eq!(frames.count(), before);
    }

    #[test]
    fn test_click_toggles() {
        let (mut icon, _) = icon_with(SwitchIconStyle::new());
        let down = Event::MouseDown {
            x: 10.0,
            y: 10.0,
            button: MouseButton::Left,
        };
        let up = Event::MouseUp {
            x: 12.0,
            y: 12.0,
            button: MouseButton::Left,
        };
        assert_eq!(icon.event(&down), EventResponse::Handled);
        assert_eq!(icon.event(&up), EventResponse::Handled);
        assert!(!icon.is_enabled());
        assert!(icon.is_animating());

        // Release outside cancels
        icon.event(&down);
        icon.event(&Event::MouseUp {
            x: 100.0,
            y: 10.0,
            button: MouseButton::Left,
        });
        assert!(!icon.is_enabled());
    }
}
