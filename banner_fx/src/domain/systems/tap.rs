use crate::domain::state::{Agent, Effect, HitPoof, ShotEffect};
use crate::domain::tuning::BattlefieldTuning;

/// Applies a tap at surface coordinates `(x, y)`.
///
/// Always leaves one shot ring. The first visible agent (roster order) within the
/// tap radius is hidden and leaves one poof. Returns that agent's index.
pub fn resolve_tap(
    agents: &mut [Agent],
    shots: &mut Vec<ShotEffect>,
    poofs: &mut Vec<HitPoof>,
    x: f32,
    y: f32,
    tuning: &BattlefieldTuning,
) -> Option<usize> {
    shots.push(Effect::at(x, y));

    let hit_radius = tuning.tap_hit_radius();
    let hit_radius_sq = hit_radius * hit_radius;
    let (index, agent) = agents.iter_mut().enumerate().find(|(_, a)| {
        let dx = a.x - x;
        let dy = a.y - y;
        !a.is_hidden() && dx * dx + dy * dy <= hit_radius_sq
    })?;

    agent.hidden_for = tuning.tap_hide_secs;
    poofs.push(Effect::at(agent.x, agent.y));
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::Side;

    fn agent(side: Side, x: f32, y: f32) -> Agent {
        Agent {
            side,
            x,
            y,
            radius: 6.0,
            vx: 30.0,
            hidden_for: 0.0,
            fire_cooldown: 1.0,
        }
    }

    #[test]
    fn when_tap_lands_on_agent_then_exactly_that_agent_is_hidden() {
        let tuning = BattlefieldTuning::default();
        let mut agents = vec![agent(Side::A, 10.0, 10.0), agent(Side::B, 200.0, 80.0)];
        let (mut shots, mut poofs) = (Vec::new(), Vec::new());

        let hit = resolve_tap(&mut agents, &mut shots, &mut poofs, 200.0, 80.0, &tuning);

        assert_eq!(hit, Some(1));
        assert_eq!(agents[1].hidden_for, tuning.tap_hide_secs);
        assert!(!agents[0].is_hidden());
        assert_eq!(shots.len(), 1);
        assert_eq!(poofs, vec![Effect::at(200.0, 80.0)]);
    }

    #[test]
    fn when_tap_misses_then_only_shot_ring_is_left() {
        let tuning = BattlefieldTuning::default();
        let mut agents = vec![agent(Side::A, 10.0, 10.0)];
        let (mut shots, mut poofs) = (Vec::new(), Vec::new());

        let hit = resolve_tap(&mut agents, &mut shots, &mut poofs, 10.0, 30.0, &tuning);

        assert_eq!(hit, None);
        assert_eq!(shots, vec![Effect::at(10.0, 30.0)]);
        assert!(poofs.is_empty());
    }

    #[test]
    fn when_tap_covers_two_agents_then_first_in_roster_wins() {
        let tuning = BattlefieldTuning::default();
        let mut agents = vec![agent(Side::B, 50.0, 50.0), agent(Side::A, 52.0, 50.0)];
        let (mut shots, mut poofs) = (Vec::new(), Vec::new());

        let hit = resolve_tap(&mut agents, &mut shots, &mut poofs, 51.0, 50.0, &tuning);

        assert_eq!(hit, Some(0));
        assert!(!agents[1].is_hidden());
        assert_eq!(poofs.len(), 1);
    }

    #[test]
    fn when_tap_radius_is_wider_than_projectile_radius_then_near_miss_still_counts() {
        let tuning = BattlefieldTuning::default();
        // 9.5 px away: outside 6 * 1.4, inside 6 * 1.7.
        let mut agents = vec![agent(Side::A, 100.0, 100.0)];
        let (mut shots, mut poofs) = (Vec::new(), Vec::new());

        let hit = resolve_tap(&mut agents, &mut shots, &mut poofs, 109.5, 100.0, &tuning);

        assert_eq!(hit, Some(0));
    }

    #[test]
    fn when_agent_is_hidden_then_tap_skips_it() {
        let tuning = BattlefieldTuning::default();
        let mut hidden = agent(Side::A, 100.0, 100.0);
        hidden.hidden_for = 0.1;
        let mut agents = vec![hidden];
        let (mut shots, mut poofs) = (Vec::new(), Vec::new());

        let hit = resolve_tap(&mut agents, &mut shots, &mut poofs, 100.0, 100.0, &tuning);

        assert_eq!(hit, None);
        assert_eq!(shots.len(), 1);
        assert!(poofs.is_empty());
    }
}
