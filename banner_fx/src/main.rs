use banner_fx::frameworks::config;
use banner_fx::interface_adapters::pointer::{
    BoundingRect, ClientPoint, PointerEvent, SurfaceGeometry,
};
use banner_fx::interface_adapters::svg::{StrokeLayer, stroke_layers};
use banner_fx::interface_adapters::utils::rng::SystemRandom;
use banner_fx::use_cases::BannerFrame;
use banner_fx::{BattlefieldFrame, init_runtime, mount_banner, mount_battlefield, tuning_from_env};
use serde::Serialize;
use std::time::Duration;
use tokio::time::{Instant, sleep_until};

// Demo surface: a 800x300 banner sitting 40 px below the top of the page.
const RECT: BoundingRect = BoundingRect {
    left: 0.0,
    top: 40.0,
    width: 800.0,
    height: 300.0,
};

#[derive(Serialize)]
#[serde(tag = "component", rename_all = "snake_case")]
enum Dump<'a> {
    Battlefield(&'a BattlefieldFrame),
    Strike {
        frame: &'a BannerFrame,
        layers: Vec<StrokeLayer>,
    },
}

fn dump(line: &Dump<'_>) {
    match serde_json::to_string(line) {
        Ok(json) => println!("{json}"),
        Err(error) => tracing::warn!(%error, "frame dump failed"),
    }
}

#[tokio::main]
async fn main() {
    init_runtime();
    let tuning = tuning_from_env();
    let run_for = config::run_duration();
    let dump_frames = config::dump_frames();

    let mut battlefield = mount_battlefield(
        tuning.battlefield,
        Box::new(SystemRandom::new()),
        config::frame_interval(),
    );
    let mut banner = mount_banner(
        tuning.strike,
        config::DEFAULT_TOKENS.len(),
        Box::new(SystemRandom::new()),
    );

    let geometry = SurfaceGeometry::new(RECT, 1.0);
    battlefield.resize(RECT.width, RECT.height, geometry.device_pixel_ratio);

    let mut battlefield_frames = battlefield.frames();
    let mut banner_frames = banner.frames();
    let deadline = Instant::now() + run_for;
    let mut next_tap = Instant::now() + Duration::from_secs(1);
    let mut taps: u32 = 0;
    let mut strikes_seen = 0;

    tracing::info!(run_secs = run_for.as_secs(), "banner demo running");

    loop {
        tokio::select! {
            _ = sleep_until(deadline) => break,
            _ = sleep_until(next_tap) => {
                // Sweep a click across the rows so some taps land.
                let event = PointerEvent {
                    touch: None,
                    mouse: Some(ClientPoint {
                        x: 100.0 + (taps % 7) as f32 * 90.0,
                        y: RECT.top + 24.0 + (taps % 7) as f32 * 42.0,
                    }),
                };
                battlefield.pointer(&geometry, &event);
                taps += 1;
                next_tap += Duration::from_millis(750);
            }
            Ok(()) = battlefield_frames.changed() => {
                if dump_frames {
                    let frame = battlefield_frames.borrow_and_update().clone();
                    dump(&Dump::Battlefield(&frame));
                }
            }
            Ok(()) = banner_frames.changed() => {
                let frame = banner_frames.borrow_and_update().clone();
                if frame.fired > strikes_seen {
                    strikes_seen = frame.fired;
                    tracing::info!(
                        cycle = frame.cycle,
                        fired = frame.fired,
                        seed = frame.bolt.seed,
                        branches = frame.bolt.branches.len(),
                        "strike"
                    );
                    if dump_frames {
                        let layers = stroke_layers(&frame.bolt);
                        dump(&Dump::Strike { frame: &frame, layers });
                    }
                }
            }
        }
    }

    battlefield.teardown();
    banner.teardown();
    tracing::info!(taps, strikes = strikes_seen, "banner demo finished");
}
