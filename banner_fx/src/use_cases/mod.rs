// Use cases layer: the two banner components as host-agnostic state machines.

pub mod battlefield;
pub mod strike;
pub mod types;

pub use battlefield::Battlefield;
pub use strike::{StrikeCycle, compute_cycle_ms, pick_strike_ms, reveal_offsets};
pub use types::{
    BannerFrame, Schedule, StrikePhase, SurfaceSize, Tap, TickReport, TimerFired, TimerKind,
    TimerRequest,
};
