use crate::domain::state::{Agent, Effect, HitPoof, Projectile};
use crate::domain::tuning::BattlefieldTuning;
use tracing::debug;

/// Moves projectiles, drops the ones that left the field, and resolves hits.
///
/// Each hit hides the struck agent and leaves a poof at its position. Returns the
/// number of hits this tick.
pub fn tick_projectiles(
    agents: &mut [Agent],
    projectiles: &mut Vec<Projectile>,
    poofs: &mut Vec<HitPoof>,
    width: f32,
    dt: f32,
    tuning: &BattlefieldTuning,
) -> usize {
    let min_x = -tuning.projectile_margin;
    let max_x = width + tuning.projectile_margin;

    // Integrate movement and mark out-of-bounds shots.
    for p in projectiles.iter_mut() {
        p.x += p.vx * dt;
        if p.x < min_x || p.x > max_x {
            p.live = false;
        }
    }

    // Projectile vs agent collision (naive O(P*A); the roster is tiny).
    // A projectile is consumed by its first hit.
    let hit_radius = tuning.projectile_hit_radius();
    let hit_radius_sq = hit_radius * hit_radius;
    let mut hits = 0;
    for p in projectiles.iter_mut() {
        if !p.live {
            continue;
        }

        for (index, a) in agents.iter_mut().enumerate() {
            if a.is_hidden() || a.side == p.side {
                continue;
            }

            let dx = a.x - p.x;
            let dy = a.y - p.y;
            if (dx * dx + dy * dy) <= hit_radius_sq {
                a.hidden_for = tuning.projectile_hide_secs;
                poofs.push(Effect::at(a.x, a.y));
                debug!(victim = index, side = ?a.side, shooter = ?p.side, "agent hit");
                p.live = false;
                hits += 1;
                break;
            }
        }
    }

    projectiles.retain(|p| p.live);
    hits
}
