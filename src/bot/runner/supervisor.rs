//! The supervising detect-and-act loop.
//!
//! States run `Locating -> Running -> Stopped`. Every transient fault from
//! capture, decode, or dispatch is absorbed at the iteration boundary:
//! logged with its cause, followed by the fault backoff, retried without
//! bound. The endpoint is never re-established once lost; a permanently
//! dead endpoint keeps the loop backing off until the user cancels.

use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::bot::common::error::Result;
use crate::bot::device::DeviceTransport;
use crate::bot::frame::{Frame, FrameSource, ScreenshotDecoder};
use crate::bot::runner::cancel::CancelToken;
use crate::bot::runner::types::{LoopState, Pacing, TickOutcome};
use crate::bot::vision::RegionDetector;
use crate::bot::vision::types::{Detection, TargetPoint};

/// One-ended frame supply for the loop.
pub trait CaptureSource {
    fn capture(&mut self) -> Result<Frame>;
}

/// Tap command sink for the loop.
pub trait TapSink {
    fn tap(&mut self, point: TargetPoint) -> Result<()>;
}

impl<T: DeviceTransport, D: ScreenshotDecoder> CaptureSource for FrameSource<T, D> {
    fn capture(&mut self) -> Result<Frame> {
        FrameSource::capture(self)
    }
}

/// Drives capture, detection, and dispatch in an unbounded cycle.
///
/// Strictly sequential: one iteration at a time, each owning its frame
/// exclusively, with the selected pacing delay between iterations.
pub struct Supervisor<C: CaptureSource, T: TapSink> {
    capture: C,
    tap: T,
    detector: RegionDetector,
    pacing: Pacing,
    cancel: CancelToken,
    state: LoopState,
}

impl<C: CaptureSource, T: TapSink> Supervisor<C, T> {
    pub fn new(
        capture: C,
        tap: T,
        detector: RegionDetector,
        pacing: Pacing,
        cancel: CancelToken,
    ) -> Self {
        Self {
            capture,
            tap,
            detector,
            pacing,
            cancel,
            state: LoopState::Locating,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Run iterations until the cancel token fires.
    pub fn run(&mut self) {
        self.state = LoopState::Running;
        info!("Watching for targets, press Ctrl-C to stop");

        while !self.cancel.is_cancelled() {
            let delay = match self.tick() {
                TickOutcome::Tapped { .. } => self.pacing.cooldown,
                TickOutcome::Ignored { .. } | TickOutcome::NoMatch => self.pacing.idle,
                TickOutcome::Faulted => self.pacing.fault_backoff,
            };
            self.sleep(delay);
        }

        self.state = LoopState::Stopped;
        info!("Stopped by user");
    }

    /// One capture -> detect -> act iteration. Any component failure is
    /// classified here as a transient fault and reported as such; the
    /// caller applies the backoff.
    pub fn tick(&mut self) -> TickOutcome {
        match self.try_tick() {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Transient fault, will retry: {e}");
                TickOutcome::Faulted
            }
        }
    }

    fn try_tick(&mut self) -> Result<TickOutcome> {
        let frame = self.capture.capture()?;
        match self.detector.detect(&frame) {
            Detection::Found { point, area } => {
                info!(
                    "Target found (area {:.0}), tapping at ({}, {})",
                    area, point.x, point.y
                );
                self.tap.tap(point)?;
                Ok(TickOutcome::Tapped { point, area })
            }
            Detection::BelowThreshold { area } => {
                info!(
                    "Ignored: area {:.0} at or below threshold {:.0}",
                    area,
                    self.detector.min_area()
                );
                Ok(TickOutcome::Ignored { area })
            }
            Detection::NoRegions => {
                info!("No match on screen");
                Ok(TickOutcome::NoMatch)
            }
        }
    }

    /// Sleep in short slices so cancellation interrupts a pending delay.
    fn sleep(&self, total: Duration) {
        const SLICE: Duration = Duration::from_millis(50);

        let mut remaining = total;
        while !self.cancel.is_cancelled() && remaining > Duration::ZERO {
            let step = remaining.min(SLICE);
            thread::sleep(step);
            remaining -= step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::common::error::BotError;
    use crate::bot::vision::types::ColorRange;

    /// A BGR tone inside the default test range, HSV (13, 137, 182).
    const TARGET_BGR: [u8; 3] = [84, 126, 182];

    fn detector(min_area: f64) -> RegionDetector {
        let range = ColorRange::new([3, 97, 142], [23, 177, 222]).unwrap();
        RegionDetector::new(range, min_area)
    }

    fn fast_pacing() -> Pacing {
        Pacing {
            cooldown: Duration::from_millis(1),
            idle: Duration::from_millis(1),
            fault_backoff: Duration::from_millis(1),
        }
    }

    fn frame_with_block(x: u32, y: u32, w: u32, h: u32) -> Frame {
        let mut frame = Frame::new(200, 100, vec![0; 200 * 100 * 3]);
        for py in y..y + h {
            for px in x..x + w {
                let i = ((py * frame.width + px) * 3) as usize;
                frame.data[i..i + 3].copy_from_slice(&TARGET_BGR);
            }
        }
        frame
    }

    /// Capture source producing a fixed script of frames (`None` fails the
    /// call); cancels the token when the script runs out.
    struct ScriptedCapture {
        script: Vec<Option<Frame>>,
        calls: usize,
        cancel: Option<CancelToken>,
    }

    impl ScriptedCapture {
        fn new(script: Vec<Option<Frame>>) -> Self {
            Self {
                script,
                calls: 0,
                cancel: None,
            }
        }
    }

    impl CaptureSource for ScriptedCapture {
        fn capture(&mut self) -> Result<Frame> {
            let step = self.calls;
            self.calls += 1;
            if step + 1 >= self.script.len() {
                if let Some(cancel) = &self.cancel {
                    cancel.cancel();
                }
            }
            self.script
                .get(step)
                .expect("capture called past the script")
                .clone()
                .ok_or(BotError::EmptyScreenshot)
        }
    }

    #[derive(Default)]
    struct RecordingTap {
        taps: Vec<TargetPoint>,
    }

    impl TapSink for RecordingTap {
        fn tap(&mut self, point: TargetPoint) -> Result<()> {
            self.taps.push(point);
            Ok(())
        }
    }

    #[test]
    fn found_target_is_tapped_at_its_centroid() {
        let capture = ScriptedCapture::new(vec![Some(frame_with_block(100, 50, 40, 30))]);
        let mut sup = Supervisor::new(
            capture,
            RecordingTap::default(),
            detector(800.0),
            fast_pacing(),
            CancelToken::new(),
        );

        let outcome = sup.tick();
        assert!(matches!(outcome, TickOutcome::Tapped { point, .. }
            if point == TargetPoint { x: 120, y: 65 }));
        assert_eq!(sup.tap.taps, vec![TargetPoint { x: 120, y: 65 }]);
    }

    #[test]
    fn sub_threshold_region_is_not_tapped() {
        // 26x31 block: contour area 750, below the 800 gate.
        let capture = ScriptedCapture::new(vec![Some(frame_with_block(100, 50, 26, 31))]);
        let mut sup = Supervisor::new(
            capture,
            RecordingTap::default(),
            detector(800.0),
            fast_pacing(),
            CancelToken::new(),
        );

        let outcome = sup.tick();
        assert_eq!(outcome, TickOutcome::Ignored { area: 750.0 });
        assert!(sup.tap.taps.is_empty());
    }

    #[test]
    fn capture_failure_does_not_stop_the_next_iteration() {
        let capture = ScriptedCapture::new(vec![
            None,
            Some(frame_with_block(100, 50, 40, 30)),
        ]);
        let mut sup = Supervisor::new(
            capture,
            RecordingTap::default(),
            detector(800.0),
            fast_pacing(),
            CancelToken::new(),
        );

        assert_eq!(sup.tick(), TickOutcome::Faulted);
        // The loop survives: the next iteration still captures and acts.
        assert!(matches!(sup.tick(), TickOutcome::Tapped { .. }));
        assert_eq!(sup.capture.calls, 2);
    }

    #[test]
    fn dispatch_failure_is_a_transient_fault() {
        struct FailingTap;
        impl TapSink for FailingTap {
            fn tap(&mut self, _point: TargetPoint) -> Result<()> {
                Err(BotError::Dispatch("serial".to_string(), "gone".to_string()))
            }
        }

        let capture = ScriptedCapture::new(vec![Some(frame_with_block(100, 50, 40, 30))]);
        let mut sup = Supervisor::new(
            capture,
            FailingTap,
            detector(800.0),
            fast_pacing(),
            CancelToken::new(),
        );

        assert_eq!(sup.tick(), TickOutcome::Faulted);
    }

    #[test]
    fn pre_cancelled_token_stops_before_any_capture() {
        let cancel = CancelToken::new();
        cancel.cancel();

        let capture = ScriptedCapture::new(vec![]);
        let mut sup = Supervisor::new(
            capture,
            RecordingTap::default(),
            detector(800.0),
            fast_pacing(),
            cancel,
        );

        sup.run();
        assert_eq!(sup.state(), LoopState::Stopped);
        assert_eq!(sup.capture.calls, 0);
    }

    #[test]
    fn run_loops_until_cancelled() {
        let cancel = CancelToken::new();
        let mut capture = ScriptedCapture::new(vec![
            Some(frame_with_block(100, 50, 40, 30)),
            None,
            Some(frame_with_block(100, 50, 40, 30)),
        ]);
        capture.cancel = Some(cancel.clone());

        let mut sup = Supervisor::new(
            capture,
            RecordingTap::default(),
            detector(800.0),
            fast_pacing(),
            cancel,
        );

        sup.run();
        assert_eq!(sup.state(), LoopState::Stopped);
        assert_eq!(sup.capture.calls, 3);
        // Two successful detections bracket the suppressed fault.
        assert_eq!(sup.tap.taps.len(), 2);
    }

    #[test]
    fn supervisor_starts_in_locating_state() {
        let capture = ScriptedCapture::new(vec![]);
        let sup = Supervisor::new(
            capture,
            RecordingTap::default(),
            detector(800.0),
            fast_pacing(),
            CancelToken::new(),
        );
        assert_eq!(sup.state(), LoopState::Locating);
    }
}
