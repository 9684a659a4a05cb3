use crate::domain::ports::RandomSource;
use crate::domain::state::{Agent, Projectile};
use crate::domain::tuning::BattlefieldTuning;

/// Advances every agent by `dt`: march, wrap, hidden countdown, fire.
///
/// Returns the number of shots fired this tick.
pub fn tick_agents(
    agents: &mut [Agent],
    projectiles: &mut Vec<Projectile>,
    width: f32,
    dt: f32,
    tuning: &BattlefieldTuning,
    rng: &mut impl RandomSource,
) -> usize {
    let mut fired = 0;

    for a in agents.iter_mut() {
        a.x += a.vx * dt;
        wrap_agent(a, width, tuning, rng);

        // Hidden agents neither fire nor reload.
        if a.is_hidden() {
            a.hidden_for = (a.hidden_for - dt).max(0.0);
            continue;
        }

        a.fire_cooldown -= dt;
        if a.fire_cooldown <= 0.0 {
            let dir = a.direction();
            projectiles.push(Projectile {
                side: a.side,
                // Spawn at the rifle tip, in the direction the agent faces.
                x: muzzle_x(a, tuning),
                y: a.y,
                vx: dir * rng.range_f32(tuning.projectile_speed_min, tuning.projectile_speed_max),
                live: true,
            });
            a.fire_cooldown = rng.range_f32(tuning.cooldown_min, tuning.cooldown_max);
            fired += 1;
        }
    }

    fired
}

/// X coordinate of the rifle tip.
pub fn muzzle_x(a: &Agent, tuning: &BattlefieldTuning) -> f32 {
    a.x + a.direction() * (a.radius + tuning.muzzle_length)
}

fn wrap_agent(a: &mut Agent, width: f32, tuning: &BattlefieldTuning, rng: &mut impl RandomSource) {
    let margin = tuning.wrap_margin;
    let crossed = if a.vx > 0.0 {
        a.x > width + margin
    } else if a.vx < 0.0 {
        a.x < -margin
    } else {
        false
    };
    if !crossed {
        return;
    }

    let jitter = if tuning.wrap_jitter > 0.0 {
        rng.range_f32(0.0, tuning.wrap_jitter)
    } else {
        0.0
    };
    a.x = if a.vx > 0.0 {
        -margin - jitter
    } else {
        width + margin + jitter
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::Side;
    use crate::interface_adapters::utils::rng::SequenceRandom;

    fn agent(side: Side, x: f32, vx: f32) -> Agent {
        Agent {
            side,
            x,
            y: 50.0,
            radius: 6.0,
            vx,
            hidden_for: 0.0,
            fire_cooldown: 10.0,
        }
    }

    #[test]
    fn when_rightward_agent_passes_far_edge_then_it_wraps_to_left_margin() {
        let tuning = BattlefieldTuning::default();
        let mut rng = SequenceRandom::new(vec![0.5]);
        let mut agents = vec![agent(Side::A, 839.0, 40.0)];
        let mut projectiles = Vec::new();

        tick_agents(&mut agents, &mut projectiles, 800.0, 0.05, &tuning, &mut rng);

        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].x, -40.0);
    }

    #[test]
    fn when_leftward_agent_passes_far_edge_then_it_wraps_to_right_margin() {
        let tuning = BattlefieldTuning::default();
        let mut rng = SequenceRandom::new(vec![0.5]);
        let mut agents = vec![agent(Side::B, -39.0, -40.0)];
        let mut projectiles = Vec::new();

        tick_agents(&mut agents, &mut projectiles, 800.0, 0.05, &tuning, &mut rng);

        assert_eq!(agents[0].x, 840.0);
    }

    #[test]
    fn when_agent_is_inside_wrap_band_then_it_keeps_marching() {
        let tuning = BattlefieldTuning::default();
        let mut rng = SequenceRandom::new(vec![0.5]);
        let mut agents = vec![agent(Side::A, 830.0, 40.0)];
        let mut projectiles = Vec::new();

        tick_agents(&mut agents, &mut projectiles, 800.0, 0.05, &tuning, &mut rng);

        assert_eq!(agents[0].x, 832.0);
    }

    #[test]
    fn when_wrap_jitter_is_set_then_reentry_is_pushed_further_out() {
        let tuning = BattlefieldTuning {
            wrap_jitter: 20.0,
            ..BattlefieldTuning::default()
        };
        let mut rng = SequenceRandom::new(vec![0.5]);
        let mut agents = vec![agent(Side::A, 845.0, 40.0)];
        let mut projectiles = Vec::new();

        tick_agents(&mut agents, &mut projectiles, 800.0, 0.01, &tuning, &mut rng);

        assert_eq!(agents[0].x, -50.0);
    }

    #[test]
    fn when_cooldown_expires_then_projectile_spawns_at_muzzle_and_cooldown_rerolls() {
        let tuning = BattlefieldTuning::default();
        let mut rng = SequenceRandom::new(vec![0.0, 0.0]);
        let mut a = agent(Side::B, 400.0, -40.0);
        a.fire_cooldown = 0.01;
        let mut agents = vec![a];
        let mut projectiles = Vec::new();

        let fired = tick_agents(&mut agents, &mut projectiles, 800.0, 0.05, &tuning, &mut rng);

        assert_eq!(fired, 1);
        assert_eq!(projectiles.len(), 1);
        let p = &projectiles[0];
        assert_eq!(p.side, Side::B);
        // Agent moved to 398, faces left, tip is radius + muzzle further left.
        assert_eq!(p.x, 398.0 - (6.0 + tuning.muzzle_length));
        assert_eq!(p.vx, -tuning.projectile_speed_min);
        assert_eq!(agents[0].fire_cooldown, tuning.cooldown_min);
    }

    #[test]
    fn when_agent_is_hidden_then_it_does_not_fire_and_timer_counts_down() {
        let tuning = BattlefieldTuning::default();
        let mut rng = SequenceRandom::new(vec![0.5]);
        let mut a = agent(Side::A, 100.0, 40.0);
        a.fire_cooldown = 0.0;
        a.hidden_for = 0.3;
        let mut agents = vec![a];
        let mut projectiles = Vec::new();

        let fired = tick_agents(&mut agents, &mut projectiles, 800.0, 0.05, &tuning, &mut rng);

        assert_eq!(fired, 0);
        assert!(projectiles.is_empty());
        assert!((agents[0].hidden_for - 0.25).abs() < 1e-6);
        // Hidden agents still march.
        assert_eq!(agents[0].x, 102.0);
    }
}
