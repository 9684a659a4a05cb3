// Strike orchestration for the hero banner: one lightning strike per reveal cycle,
// then a pause, then the whole cycle again.
//
// The state machine is pure. Every transition hands back the timers it needs; the
// runtime owns the actual clocks and reports elapsed timers through `on_timer`.

use super::types::{BannerFrame, Schedule, StrikePhase, TimerFired, TimerKind, TimerRequest};
use crate::domain::{Bolt, RandomSource, StrikeTuning, generate_bolt};
use std::time::Duration;
use tracing::{debug, info};

// Keeps the strike off the exact window edges even for a draw of 0.0.
const EDGE_GUARD: f64 = 1e-9;

/// Total duration of one reveal cycle for `token_count` words, in milliseconds.
pub fn compute_cycle_ms(token_count: usize, tuning: &StrikeTuning) -> f64 {
    let stagger = tuning.stagger_ms * token_count.saturating_sub(1) as u64;
    (tuning.headline_ms + tuning.delay_children_ms + stagger + tuning.settle_ms + tuning.tail_ms)
        as f64
}

/// Offset of each word reveal from cycle start.
pub fn reveal_offsets(token_count: usize, tuning: &StrikeTuning) -> Vec<Duration> {
    (0..token_count as u64)
        .map(|i| Duration::from_millis(tuning.delay_children_ms + i * tuning.stagger_ms))
        .collect()
}

/// Picks the strike instant, strictly inside the strike window of a cycle.
///
/// When tuning leaves no room for a window the earliest strike instant is used.
pub fn pick_strike_ms(cycle_ms: f64, tuning: &StrikeTuning, rng: &mut impl RandomSource) -> f64 {
    let lo = tuning.strike_min_ms as f64;
    let hi = cycle_ms - tuning.strike_end_guard_ms as f64;
    if hi <= lo {
        return lo;
    }
    let r = rng.next_f64().clamp(EDGE_GUARD, 1.0 - EDGE_GUARD);
    lo + (hi - lo) * r
}

fn millis(ms: f64) -> Duration {
    Duration::from_secs_f64(ms.max(0.0) / 1000.0)
}

/// Strike cycle state: `Idle -> StrikePending -> CycleRunning -> Cooldown -> ...`.
#[derive(Debug, Clone)]
pub struct StrikeCycle {
    tuning: StrikeTuning,
    token_count: usize,
    phase: StrikePhase,
    // Bumped on every (re)start and stop; timers from older generations are stale.
    generation: u64,
    cycle: u64,
    fired: u64,
    flash: bool,
    seed: f64,
    bolt: Bolt,
    cycle_ms: f64,
    strike_at_ms: f64,
}

impl StrikeCycle {
    pub fn new(tuning: StrikeTuning, token_count: usize, initial_seed: f64) -> Self {
        Self {
            tuning,
            token_count,
            phase: StrikePhase::Idle,
            generation: 0,
            cycle: 0,
            fired: 0,
            flash: false,
            seed: initial_seed,
            bolt: generate_bolt(initial_seed),
            cycle_ms: compute_cycle_ms(token_count, &tuning),
            strike_at_ms: 0.0,
        }
    }

    pub fn phase(&self) -> StrikePhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn fired(&self) -> u64 {
        self.fired
    }

    pub fn flash(&self) -> bool {
        self.flash
    }

    pub fn seed(&self) -> f64 {
        self.seed
    }

    pub fn bolt(&self) -> &Bolt {
        &self.bolt
    }

    pub fn cycle_ms(&self) -> f64 {
        self.cycle_ms
    }

    pub fn strike_at_ms(&self) -> f64 {
        self.strike_at_ms
    }

    /// Starts (or restarts) a cycle from the top.
    ///
    /// Anything still scheduled from before must be cancelled; the returned schedule
    /// says so.
    pub fn start(&mut self, rng: &mut impl RandomSource) -> Schedule {
        self.generation += 1;
        self.phase = StrikePhase::StrikePending;
        self.flash = false;
        self.cycle_ms = compute_cycle_ms(self.token_count, &self.tuning);
        self.strike_at_ms = pick_strike_ms(self.cycle_ms, &self.tuning, rng);
        debug!(
            cycle = self.cycle,
            cycle_ms = self.cycle_ms,
            strike_at_ms = self.strike_at_ms,
            "strike cycle planned"
        );

        Schedule {
            cancel_pending: true,
            timers: vec![
                self.request(TimerKind::Strike, millis(self.strike_at_ms)),
                self.request(TimerKind::CycleEnd, millis(self.cycle_ms)),
            ],
        }
    }

    /// Applies an elapsed timer. Stale or out-of-phase timers are ignored.
    pub fn on_timer(&mut self, fired: TimerFired, rng: &mut impl RandomSource) -> Schedule {
        if fired.generation != self.generation || self.phase == StrikePhase::Idle {
            debug!(kind = ?fired.kind, generation = fired.generation, "stale timer ignored");
            return Schedule::none();
        }

        match (fired.kind, self.phase) {
            (TimerKind::Strike, StrikePhase::StrikePending) => {
                self.seed = rng.next_f64();
                self.bolt = generate_bolt(self.seed);
                self.fired += 1;
                self.flash = true;
                self.phase = StrikePhase::CycleRunning;
                debug!(fired = self.fired, seed = self.seed, "lightning strike");
                Schedule {
                    cancel_pending: false,
                    timers: vec![
                        self.request(TimerKind::FlashEnd, Duration::from_millis(self.tuning.flash_ms)),
                    ],
                }
            }
            (TimerKind::FlashEnd, _) => {
                self.flash = false;
                Schedule::none()
            }
            (TimerKind::CycleEnd, StrikePhase::StrikePending | StrikePhase::CycleRunning) => {
                self.phase = StrikePhase::Cooldown;
                Schedule {
                    cancel_pending: false,
                    timers: vec![self.request(
                        TimerKind::Restart,
                        Duration::from_millis(self.tuning.restart_pause_ms),
                    )],
                }
            }
            (TimerKind::Restart, StrikePhase::Cooldown) => {
                self.cycle += 1;
                info!(cycle = self.cycle, "banner cycle restarting");
                self.start(rng)
            }
            (kind, phase) => {
                debug!(?kind, ?phase, "timer ignored in current phase");
                Schedule::none()
            }
        }
    }

    /// Stops the cycle. Every outstanding timer becomes stale.
    pub fn stop(&mut self) -> Schedule {
        self.generation += 1;
        self.phase = StrikePhase::Idle;
        self.flash = false;
        Schedule {
            cancel_pending: true,
            timers: Vec::new(),
        }
    }

    pub fn frame(&self) -> BannerFrame {
        BannerFrame {
            phase: self.phase,
            cycle: self.cycle,
            fired: self.fired,
            flash: self.flash,
            bolt: self.bolt.clone(),
            cycle_ms: self.cycle_ms,
            strike_at_ms: self.strike_at_ms,
        }
    }

    fn request(&self, kind: TimerKind, delay: Duration) -> TimerRequest {
        TimerRequest {
            kind,
            delay,
            generation: self.generation,
        }
    }
}
