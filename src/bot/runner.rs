//! Control loop module
//!
//! This module contains the supervisor that drives capture, detection, and
//! dispatch in an unbounded cycle, plus its pacing and cancellation types.

mod cancel;
mod dispatcher;
mod supervisor;
pub mod types;

pub use cancel::CancelToken;
pub use dispatcher::Dispatcher;
pub use supervisor::{CaptureSource, Supervisor, TapSink};
pub use types::{LoopState, Pacing, TickOutcome};
