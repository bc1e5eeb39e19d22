//! Change tracking and redraw scheduling.
//!
//! Widgets never draw on their own. They record what changed in
//! [`ChangeFlags`] and ask the host for a redraw through a
//! [`FrameScheduler`]. Hosts that cannot align redraws with display refresh
//! report so via [`FrameScheduler::supports_frame_callbacks`] and get a
//! delayed invalidation instead.

use std::cell::Cell;
use std::time::Duration;

use bitflags::bitflags;

/// Delay used in place of a frame callback on hosts without one.
pub const FALLBACK_FRAME_DELAY: Duration = Duration::from_millis(10);

bitflags! {
    /// Flags indicating what aspects of a widget were updated
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct ChangeFlags: u8 {
        /// Dash geometry was recomputed from new bounds or padding
        const GEOMETRY = 0b0_0001;
        /// Tint color moved
        const COLOR    = 0b0_0010;
        /// Icon/dash alpha moved
        const ALPHA    = 0b0_0100;
        /// Clip band moved
        const CLIP     = 0b0_1000;
        /// A redraw was requested
        const PAINT    = 0b1_0000;
    }
}

/// How a redraw was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawRequest {
    /// Redraw on the next display frame
    NextFrame,
    /// Redraw after a fixed delay
    Delayed(Duration),
}

/// Host capability for scheduling redraws on the UI thread.
pub trait FrameScheduler {
    /// Whether the host can run a callback aligned with the next display frame.
    fn supports_frame_callbacks(&self) -> bool {
        true
    }

    /// Invalidate on the next display frame.
    fn invalidate_on_animation(&self);

    /// Invalidate after `delay`.
    fn invalidate_delayed(&self, delay: Duration);
}

/// Issue one redraw request through whichever path the host supports.
pub fn request_redraw(scheduler: &dyn FrameScheduler) -> RedrawRequest {
    if scheduler.supports_frame_callbacks() {
        scheduler.invalidate_on_animation();
        RedrawRequest::NextFrame
    } else {
        scheduler.invalidate_delayed(FALLBACK_FRAME_DELAY);
        RedrawRequest::Delayed(FALLBACK_FRAME_DELAY)
    }
}

/// A simple scheduler for hosts that poll: it remembers the last request and
/// counts how many were made.
#[derive(Debug, Default)]
pub struct FrameRequests {
    frame_callbacks: bool,
    pending: Cell<Option<RedrawRequest>>,
    count: Cell<u64>,
}

impl FrameRequests {
    /// A scheduler for hosts with frame callbacks.
    pub fn new() -> Self {
        Self {
            frame_callbacks: true,
            ..Self::default()
        }
    }

    /// A scheduler for hosts that only have timers.
    pub fn timer_only() -> Self {
        Self::default()
    }

    /// Take the pending request, if any.
    pub fn take(&self) -> Option<RedrawRequest> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Total requests seen since creation.
    pub fn count(&self) -> u64 {
        self.count.get()
    }

    fn record(&self, request: RedrawRequest) {
        self.pending.set(Some(request));
        self.count.set(self.count.get() + 1);
    }
}

impl FrameScheduler for FrameRequests {
    fn supports_frame_callbacks(&self) -> bool {
        self.frame_callbacks
    }

    fn invalidate_on_animation(&self) {
        self.record(RedrawRequest::NextFrame);
    }

    fn invalidate_delayed(&self, delay: Duration) {
        self.record(RedrawRequest::Delayed(delay));
    }
}
