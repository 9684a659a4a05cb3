// Framework bootstrap and mount/unmount plumbing for the banner components.
//
// Each mounted component is a single tokio task that exclusively owns its state.
// Hosts talk to it through a handle: events in over mpsc, frames out over watch.

use crate::domain::{BattlefieldTuning, RandomSource, StrikeTuning};
use crate::frameworks::config;
use crate::frameworks::scheduler::TimerSet;
use crate::interface_adapters::pointer::{PointerEvent, SurfaceGeometry};
use crate::interface_adapters::surface::{DrawCommand, RecordingSurface};
use crate::use_cases::{BannerFrame, Battlefield, StrikeCycle, SurfaceSize, Tap, TimerFired};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Random source that can move into a component task.
pub type SharedRandom = Box<dyn RandomSource + Send>;

pub fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// One rendered battlefield frame.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BattlefieldFrame {
    pub tick: u64,
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
    pub commands: Vec<DrawCommand>,
}

/// Owner's side of a mounted battlefield.
pub struct BattlefieldHandle {
    // Latest size always wins; taps queue up behind it.
    size_tx: watch::Sender<Option<SurfaceSize>>,
    taps_tx: mpsc::Sender<Tap>,
    frames_rx: watch::Receiver<BattlefieldFrame>,
    shutdown: Arc<Notify>,
    task: Option<JoinHandle<()>>,
}

/// Mounts a battlefield and starts its frame loop.
///
/// Nothing is simulated until the first [`BattlefieldHandle::resize`] with a usable
/// size arrives.
pub fn mount_battlefield(
    tuning: BattlefieldTuning,
    rng: SharedRandom,
    frame_interval: Duration,
) -> BattlefieldHandle {
    let (size_tx, size_rx) = watch::channel(None);
    let (taps_tx, taps_rx) = mpsc::channel(config::SURFACE_EVENT_CAPACITY);
    let (frames_tx, frames_rx) = watch::channel(BattlefieldFrame::default());
    let shutdown = Arc::new(Notify::new());

    let task = tokio::spawn(battlefield_task(
        Battlefield::new(tuning, rng),
        size_rx,
        taps_rx,
        frames_tx,
        frame_interval,
        shutdown.clone(),
    ));
    info!("battlefield mounted");

    BattlefieldHandle {
        size_tx,
        taps_tx,
        frames_rx,
        shutdown,
        task: Some(task),
    }
}

impl BattlefieldHandle {
    /// Container size changed. Never dropped: if the loop is behind, only the most
    /// recent size is applied. Ignored once torn down.
    pub fn resize(&self, width: f32, height: f32, device_pixel_ratio: f32) {
        if self.task.is_none() {
            return;
        }
        self.size_tx.send_replace(Some(SurfaceSize {
            width,
            height,
            device_pixel_ratio,
        }));
    }

    /// Tap at surface-local coordinates. Dropped when torn down or when the loop is
    /// backed up.
    pub fn tap(&self, x: f32, y: f32) {
        if self.task.is_none() {
            return;
        }
        if let Err(error) = self.taps_tx.try_send(Tap { x, y }) {
            debug!(%error, "tap dropped");
        }
    }

    /// Raw host pointer event; ignored when it carries no coordinate.
    pub fn pointer(&self, geometry: &SurfaceGeometry, event: &PointerEvent) {
        if let Some((x, y)) = geometry.to_surface(event) {
            self.tap(x, y);
        }
    }

    pub fn frames(&self) -> watch::Receiver<BattlefieldFrame> {
        self.frames_rx.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stops the frame loop. Idempotent; safe before any frame has run.
    pub fn teardown(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        self.shutdown.notify_one();
        task.abort();
        info!("battlefield torn down");
    }
}

impl Drop for BattlefieldHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn battlefield_task(
    mut battlefield: Battlefield<SharedRandom>,
    mut size_rx: watch::Receiver<Option<SurfaceSize>>,
    mut taps_rx: mpsc::Receiver<Tap>,
    frames_tx: watch::Sender<BattlefieldFrame>,
    frame_interval: Duration,
    shutdown: Arc<Notify>,
) {
    // Drive update-then-render at the configured frame rate.
    let mut interval = tokio::time::interval(frame_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut surface = RecordingSurface::new();
    let mut device_pixel_ratio = 1.0;
    let mut last_frame = Instant::now();
    let mut tick: u64 = 0;

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                break;
            }
            // Host input is applied between frames, never during one.
            Ok(()) = size_rx.changed() => {
                let size = *size_rx.borrow_and_update();
                if let Some(size) = size {
                    battlefield.resize(size.width, size.height);
                    device_pixel_ratio = size.device_pixel_ratio;
                }
            }
            Some(tap) = taps_rx.recv() => {
                battlefield.handle_tap(tap.x, tap.y);
            }
            now = interval.tick() => {
                let dt = now.saturating_duration_since(last_frame).as_secs_f32();
                last_frame = now;
                if !battlefield.is_mounted() {
                    continue;
                }

                let report = battlefield.update(dt);
                battlefield.render(&mut surface);
                tick += 1;
                if report.hits > 0 {
                    debug!(tick, hits = report.hits, "projectile hits");
                }

                let (width, height) = battlefield.size();
                let _ = frames_tx.send(BattlefieldFrame {
                    tick,
                    width,
                    height,
                    device_pixel_ratio,
                    commands: surface.take_commands(),
                });
            }
        }
    }
}

/// Owner's side of a mounted banner strike cycle.
pub struct BannerHandle {
    frames_rx: watch::Receiver<BannerFrame>,
    shutdown: Arc<Notify>,
    task: Option<JoinHandle<()>>,
}

/// Mounts the banner strike cycle for `token_count` revealed words and starts it.
pub fn mount_banner(
    tuning: StrikeTuning,
    token_count: usize,
    mut rng: SharedRandom,
) -> BannerHandle {
    let initial_seed = rng.next_f64();
    let cycle = StrikeCycle::new(tuning, token_count, initial_seed);
    let (frames_tx, frames_rx) = watch::channel(cycle.frame());
    let shutdown = Arc::new(Notify::new());

    let task = tokio::spawn(banner_task(cycle, rng, frames_tx, shutdown.clone()));
    info!(token_count, "banner mounted");

    BannerHandle {
        frames_rx,
        shutdown,
        task: Some(task),
    }
}

impl BannerHandle {
    pub fn frames(&self) -> watch::Receiver<BannerFrame> {
        self.frames_rx.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Cancels the cycle and every pending timer. Idempotent.
    ///
    /// The task winds down on its own: it cancels its timers and publishes a final
    /// `Idle` frame with the flash off.
    pub fn teardown(&mut self) {
        if self.task.take().is_none() {
            return;
        }
        self.shutdown.notify_one();
        info!("banner torn down");
    }
}

impl Drop for BannerHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn banner_task(
    mut cycle: StrikeCycle,
    mut rng: SharedRandom,
    frames_tx: watch::Sender<BannerFrame>,
    shutdown: Arc<Notify>,
) {
    let (fired_tx, mut fired_rx) = mpsc::unbounded_channel::<TimerFired>();
    let mut timers = TimerSet::new(fired_tx);

    timers.apply(cycle.start(&mut rng));
    let _ = frames_tx.send(cycle.frame());

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                break;
            }
            Some(fired) = fired_rx.recv() => {
                let schedule = cycle.on_timer(fired, &mut rng);
                timers.apply(schedule);
                let _ = frames_tx.send(cycle.frame());
            }
        }
    }

    timers.apply(cycle.stop());
    let _ = frames_tx.send(cycle.frame());
}
