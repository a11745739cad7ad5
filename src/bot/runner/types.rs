//! Control loop configuration and state types

use std::time::Duration;

use crate::bot::vision::types::TargetPoint;

/// Pacing delays applied between loop iterations. Exactly one of them is
/// selected per iteration; they are never additive.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    /// Pause after a dispatched tap, giving the target time to react.
    pub cooldown: Duration,
    /// Pause after an iteration that found nothing to tap.
    pub idle: Duration,
    /// Pause after a suppressed transient fault.
    pub fault_backoff: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            cooldown: Duration::from_millis(500),
            idle: Duration::from_millis(100),
            fault_backoff: Duration::from_secs(1),
        }
    }
}

/// Control loop states. `Stopped` is terminal and reached only through
/// user cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Locating,
    Running,
    Stopped,
}

/// Result of one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// A target was found and a tap dispatched at it.
    Tapped { point: TargetPoint, area: f64 },
    /// Matching regions existed, all at or below the area threshold.
    Ignored { area: f64 },
    /// Nothing in the frame matched the color range.
    NoMatch,
    /// A transient fault was suppressed; the loop backs off and retries.
    Faulted,
}
