use crate::domain::ports::RandomSource;
use crate::domain::state::{Agent, Side};
use crate::domain::tuning::BattlefieldTuning;

/// Top/bottom margin actually used for a surface `height` px tall.
///
/// Surfaces shorter than four margins shrink it to a quarter of the height, so the
/// rows always keep half the height to spread over. Rows then sit inside
/// `[margin, height - margin]` of the shrunk margin, not the configured one.
pub fn row_margin(height: f32, margin: f32) -> f32 {
    margin.min(height.max(0.0) * 0.25)
}

/// Row height for `count` agents spread over `height` minus both (shrunk) margins.
pub fn row_spacing(height: f32, count: usize, margin: f32) -> f32 {
    // Guard the divisor so a single agent per side still has a valid layout.
    let gaps = count.saturating_sub(1).max(1) as f32;
    (height - 2.0 * row_margin(height, margin)).max(0.0) / gaps
}

/// Builds a fresh roster for a `width` x `height` surface.
///
/// Side A is laid out first, then side B; that order is also the tap priority.
pub fn spawn_roster(
    width: f32,
    height: f32,
    tuning: &BattlefieldTuning,
    rng: &mut impl RandomSource,
) -> Vec<Agent> {
    let count = tuning.agents_per_side;
    let margin = row_margin(height, tuning.vertical_margin);
    let spacing = row_spacing(height, count, tuning.vertical_margin);
    let mut agents = Vec::with_capacity(count * 2);

    for side in [Side::A, Side::B] {
        for i in 0..count {
            let y = margin + i as f32 * spacing;
            let offset = tuning.wrap_margin + rng.range_f32(0.0, tuning.spawn_spread);
            let x = match side {
                Side::A => -offset,
                Side::B => width + offset,
            };
            let speed = rng.range_f32(tuning.speed_min, tuning.speed_max);
            // Stagger the first volley.
            let fire_cooldown = rng.range_f32(0.0, tuning.cooldown_max);

            agents.push(Agent {
                side,
                x,
                y,
                radius: tuning.agent_radius,
                vx: side.facing() * speed,
                hidden_for: 0.0,
                fire_cooldown,
            });
        }
    }

    agents
}
