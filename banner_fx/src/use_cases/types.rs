// Use-case level inputs/outputs for the banner components.

use crate::domain::Bolt;
use serde::Serialize;
use std::time::Duration;

/// Latest observed size of the battlefield surface, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

/// Pointer already converted to surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tap {
    pub x: f32,
    pub y: f32,
}

/// What a single `update` did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub shots_fired: usize,
    pub hits: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrikePhase {
    /// Not mounted, or torn down.
    Idle,
    /// Cycle running, strike not fired yet.
    StrikePending,
    /// Strike fired, waiting for the cycle to finish.
    CycleRunning,
    /// Cycle finished, waiting out the pause before restarting.
    Cooldown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Strike,
    FlashEnd,
    CycleEnd,
    Restart,
}

/// Ask the scheduler to report `kind` back after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub kind: TimerKind,
    pub delay: Duration,
    pub generation: u64,
}

/// A timer that elapsed, tagged with the cycle generation that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub kind: TimerKind,
    pub generation: u64,
}

impl From<TimerRequest> for TimerFired {
    fn from(req: TimerRequest) -> Self {
        Self {
            kind: req.kind,
            generation: req.generation,
        }
    }
}

/// Scheduler work produced by a state transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    // Cancel everything outstanding before adding `timers`.
    pub cancel_pending: bool,
    pub timers: Vec<TimerRequest>,
}

impl Schedule {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Latest banner state for the host to render.
#[derive(Debug, Clone, Serialize)]
pub struct BannerFrame {
    pub phase: StrikePhase,
    pub cycle: u64,
    pub fired: u64,
    pub flash: bool,
    pub bolt: Bolt,
    pub cycle_ms: f64,
    pub strike_at_ms: f64,
}
