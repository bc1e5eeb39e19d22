//! Drives a switch icon through a disable and an enable transition with a
//! calloop timer as the frame clock, writing every frame as a PNG.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example switch_icon_demo -- frames/
//! ```

use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use calloop::timer::{TimeoutAction, Timer};
use calloop::EventLoop;
use switchicon::prelude::*;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const ICON_SIZE: u32 = 96;

const MIC_SVG: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
    <path d="M12 14c1.66 0 3-1.34 3-3V5c0-1.66-1.34-3-3-3S9 3.34 9 5v6c0 1.66 1.34 3 3 3z"/>
    <path d="M17 11c0 2.76-2.24 5-5 5s-5-2.24-5-5H5c0 3.53 2.61 6.43 6 6.92V21h2v-3.08c3.39-.49 6-3.39 6-6.92h-2z"/>
</svg>"##;

struct Demo {
    icon: SwitchIcon,
    frames: Rc<FrameRequests>,
    out_dir: PathBuf,
    frame: u32,
    /// Transitions still to play, as target enabled states
    pending: Vec<bool>,
}

impl Demo {
    fn write_frame(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut canvas = RasterCanvas::new(ICON_SIZE, ICON_SIZE).ok_or("empty canvas")?;
        canvas.clear(Color::WHITE);
        self.icon.paint(&mut canvas);

        let path = self.out_dir.join(format!("frame_{:03}.png", self.frame));
        canvas.to_rgba_image().save(&path)?;
        log::info!(
            "Wrote {} (fraction {:.3}, alpha {})",
            path.display(),
            self.icon.fraction(),
            self.icon.alpha()
        );
        self.frame += 1;
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("switch_icon_frames"));
    std::fs::create_dir_all(&out_dir)?;

    // Timers only: every redraw request comes back as a delayed invalidation
    let frames = Rc::new(FrameRequests::timer_only());
    let style = SwitchIconStyle::new()
        .tint_color(Color::from_hex(0x2196F3))
        .disabled_color(Color::from_hex(0x9E9E9E))
        .animation_duration(400);
    let mut icon = SwitchIcon::new(style, frames.clone())?
        .source(ImageSource::SvgBytes(MIC_SVG.into()));
    icon.set_bounds(Rect::new(0.0, 0.0, ICON_SIZE as f32, ICON_SIZE as f32));
    icon.set_padding(Padding::all(12.0));

    let mut demo = Demo {
        icon,
        frames,
        out_dir,
        frame: 0,
        pending: vec![true, false],
    };
    demo.write_frame()?;

    let mut event_loop: EventLoop<Demo> = EventLoop::try_new()?;
    let signal = event_loop.get_signal();

    event_loop
        .handle()
        .insert_source(
            Timer::from_duration(FRAME_INTERVAL),
            move |deadline, _, demo: &mut Demo| {
                if !demo.icon.is_animating() {
                    match demo.pending.pop() {
                        Some(enabled) => demo.icon.set_enabled(enabled, true),
                        None => {
                            signal.stop();
                            return TimeoutAction::Drop;
                        }
                    }
                }

                demo.icon.advance_animations(deadline);
                if demo.frames.take().is_some() {
                    if let Err(e) = demo.write_frame() {
                        log::warn!("Failed to write frame: {}", e);
                    }
                }
                TimeoutAction::ToDuration(FRAME_INTERVAL)
            },
        )
        .map_err(|e| e.error)?;

    event_loop.run(None, &mut demo, |_| {})?;
    log::info!("Done after {} frames", demo.frame);
    Ok(())
}
