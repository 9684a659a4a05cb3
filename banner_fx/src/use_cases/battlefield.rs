// Battlefield arena: owns the roster, projectiles and effects of one mounted banner.

use super::types::TickReport;
use crate::domain::systems::{agents, effects, projectiles, roster, tap};
use crate::domain::{
    Agent, BattlefieldTuning, HitPoof, Projectile, RandomSource, RenderSurface, Rgba,
    ShotEffect, Side,
};
use std::f32::consts::TAU;
use tracing::debug;

const SIDE_A_COLOR: Rgba = Rgba::rgb(99, 102, 241);
const SIDE_B_COLOR: Rgba = Rgba::rgb(217, 70, 239);
const PROJECTILE_COLOR: Rgba = Rgba::rgb(250, 204, 21);
const SHOT_COLOR: Rgba = Rgba::rgb(244, 244, 245);
const POOF_COLOR: Rgba = Rgba::rgb(251, 146, 60);

const RIFLE_WIDTH: f32 = 2.0;
const PROJECTILE_RADIUS: f32 = 1.8;
const POOF_RAYS: usize = 8;

/// A two-sided skirmish inside a `width` x `height` surface.
///
/// Starts unmounted; nothing runs until the first [`Battlefield::resize`] with a
/// positive size.
pub struct Battlefield<R> {
    tuning: BattlefieldTuning,
    rng: R,
    width: f32,
    height: f32,
    agents: Vec<Agent>,
    projectiles: Vec<Projectile>,
    shots: Vec<ShotEffect>,
    poofs: Vec<HitPoof>,
}

impl<R: RandomSource> Battlefield<R> {
    pub fn new(tuning: BattlefieldTuning, rng: R) -> Self {
        Self {
            tuning,
            rng,
            width: 0.0,
            height: 0.0,
            agents: Vec::new(),
            projectiles: Vec::new(),
            shots: Vec::new(),
            poofs: Vec::new(),
        }
    }

    /// True once a usable surface size has been seen.
    pub fn is_mounted(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn tuning(&self) -> &BattlefieldTuning {
        &self.tuning
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Rebuilds all layout-dependent state for a new surface size.
    ///
    /// The roster is recreated wholesale and every transient is dropped. A size
    /// that is not positive and finite unmounts the battlefield instead.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.projectiles.clear();
        self.shots.clear();
        self.poofs.clear();

        let usable = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
        if !usable {
            self.width = 0.0;
            self.height = 0.0;
            self.agents.clear();
            debug!(width, height, "battlefield surface unavailable");
            return;
        }

        self.width = width;
        self.height = height;
        self.agents = roster::spawn_roster(width, height, &self.tuning, &mut self.rng);
        debug!(width, height, agents = self.agents.len(), "battlefield roster rebuilt");
    }

    /// Advances the simulation by `dt` seconds (clamped to `max_dt`).
    pub fn update(&mut self, dt: f32) -> TickReport {
        if !self.is_mounted() {
            return TickReport::default();
        }

        let dt = if dt.is_nan() {
            0.0
        } else {
            dt.clamp(0.0, self.tuning.max_dt)
        };

        let shots_fired = agents::tick_agents(
            &mut self.agents,
            &mut self.projectiles,
            self.width,
            dt,
            &self.tuning,
            &mut self.rng,
        );
        let hits = projectiles::tick_projectiles(
            &mut self.agents,
            &mut self.projectiles,
            &mut self.poofs,
            self.width,
            dt,
            &self.tuning,
        );
        effects::age_effects(&mut self.shots, dt, self.tuning.shot_effect_life);
        effects::age_effects(&mut self.poofs, dt, self.tuning.hit_poof_life);

        TickReport { shots_fired, hits }
    }

    /// Applies a tap at surface-local coordinates.
    ///
    /// Returns the roster index of the agent that went down, if any.
    pub fn handle_tap(&mut self, x: f32, y: f32) -> Option<usize> {
        if !self.is_mounted() || !x.is_finite() || !y.is_finite() {
            return None;
        }

        let hit = tap::resolve_tap(
            &mut self.agents,
            &mut self.shots,
            &mut self.poofs,
            x,
            y,
            &self.tuning,
        );
        debug!(x, y, hit = ?hit, "tap");
        hit
    }

    /// Draws the current state. Hidden agents are skipped.
    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        if !self.is_mounted() {
            return;
        }
        let t = &self.tuning;
        surface.clear(self.width, self.height);

        for a in self.agents.iter().filter(|a| !a.is_hidden()) {
            let color = side_color(a.side);
            surface.fill_circle(a.x, a.y, a.radius, color);
            let shoulder = a.x + a.direction() * a.radius;
            surface.line(
                (shoulder, a.y),
                (agents::muzzle_x(a, t), a.y),
                RIFLE_WIDTH,
                color,
            );
        }

        for p in &self.projectiles {
            // Short streak behind the direction of travel.
            let tail = p.x - p.vx.signum() * t.trail_length;
            surface.line(
                (tail, p.y),
                (p.x, p.y),
                PROJECTILE_RADIUS,
                PROJECTILE_COLOR.with_alpha(0.45),
            );
            surface.fill_circle(p.x, p.y, PROJECTILE_RADIUS, PROJECTILE_COLOR);
        }

        for s in &self.shots {
            let f = s.fraction(t.shot_effect_life);
            let color = SHOT_COLOR.with_alpha(1.0 - f);
            surface.stroke_circle(s.x, s.y, 4.0 + 14.0 * f, 2.0, color);
            surface.fill_circle(s.x, s.y, 2.0, color);
        }

        for p in &self.poofs {
            let f = p.fraction(t.hit_poof_life);
            let color = POOF_COLOR.with_alpha(1.0 - f);
            let inner = t.agent_radius * 0.5 + 6.0 * f;
            let outer = inner + 4.0 + 10.0 * f;
            for k in 0..POOF_RAYS {
                let angle = k as f32 * TAU / POOF_RAYS as f32;
                let (sin, cos) = angle.sin_cos();
                surface.line(
                    (p.x + cos * inner, p.y + sin * inner),
                    (p.x + cos * outer, p.y + sin * outer),
                    1.5,
                    color,
                );
            }
        }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn shot_effects(&self) -> &[ShotEffect] {
        &self.shots
    }

    pub fn hit_poofs(&self) -> &[HitPoof] {
        &self.poofs
    }
}

fn side_color(side: Side) -> Rgba {
    match side {
        Side::A => SIDE_A_COLOR,
        Side::B => SIDE_B_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface_adapters::surface::{DrawCommand, RecordingSurface};
    use crate::interface_adapters::utils::rng::SequenceRandom;

    fn mounted(width: f32, height: f32) -> Battlefield<SequenceRandom> {
        let mut bf = Battlefield::new(
            BattlefieldTuning::default(),
            SequenceRandom::new(vec![0.3, 0.7, 0.5, 0.9, 0.1]),
        );
        bf.resize(width, height);
        bf
    }

    fn agent_bodies(surface: &RecordingSurface, radius: f32) -> usize {
        surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { radius: r, .. } if *r == radius))
            .count()
    }

    #[test]
    fn when_not_mounted_then_every_entry_point_is_a_no_op() {
        let mut bf = Battlefield::new(BattlefieldTuning::default(), SequenceRandom::new(vec![0.5]));
        let mut surface = RecordingSurface::new();

        assert_eq!(bf.update(0.016), TickReport::default());
        assert_eq!(bf.handle_tap(10.0, 10.0), None);
        bf.render(&mut surface);

        assert!(!bf.is_mounted());
        assert!(bf.shot_effects().is_empty());
        assert!(bf.agents().is_empty());
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn when_resized_then_roster_matches_reference_layout() {
        let bf = mounted(800.0, 300.0);

        assert_eq!(bf.agents().len(), 14);
        for side in [Side::A, Side::B] {
            let ys: Vec<f32> = bf
                .agents()
                .iter()
                .filter(|a| a.side == side)
                .map(|a| a.y)
                .collect();
            assert_eq!(ys.len(), 7);
            for (i, y) in ys.iter().enumerate() {
                assert!((y - (24.0 + i as f32 * 252.0 / 6.0)).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn when_resized_again_then_roster_is_rebuilt_and_transients_cleared() {
        let mut bf = mounted(800.0, 300.0);
        let (x, y) = (bf.agents()[0].x, bf.agents()[0].y);
        bf.handle_tap(x, y);
        for _ in 0..200 {
            bf.update(0.05);
        }

        bf.resize(400.0, 120.0);

        assert_eq!(bf.agents().len(), 14);
        assert!(bf.projectiles().is_empty());
        assert!(bf.shot_effects().is_empty());
        assert!(bf.hit_poofs().is_empty());
        assert!(bf.agents().iter().all(|a| !a.is_hidden()));
        assert!(bf.agents().iter().all(|a| a.y >= 24.0 && a.y <= 96.0 + 1e-4));
    }

    #[test]
    fn when_resized_to_zero_then_battlefield_unmounts() {
        let mut bf = mounted(800.0, 300.0);
        bf.resize(0.0, 300.0);

        assert!(!bf.is_mounted());
        assert!(bf.agents().is_empty());
        assert_eq!(bf.update(0.016), TickReport::default());
    }

    #[test]
    fn when_dt_is_huge_then_step_is_clamped() {
        let mut bf = mounted(800.0, 300.0);
        let before: Vec<f32> = bf.agents().iter().map(|a| a.x).collect();

        bf.update(5.0);

        for (a, x0) in bf.agents().iter().zip(before) {
            let moved = (a.x - x0).abs();
            assert!(moved <= a.vx.abs() * 0.05 + 1e-3, "moved {moved}");
        }
    }

    #[test]
    fn when_tap_hits_agent_then_it_is_hidden_and_not_drawn() {
        let mut bf = mounted(800.0, 300.0);
        // Rows are 42 px apart, so only the tapped agent is in range.
        let radius = bf.tuning().agent_radius;
        let target = bf.agents()[3].clone();

        let hit = bf.handle_tap(target.x, target.y);

        assert_eq!(hit, Some(3));
        assert!(bf.agents()[3].is_hidden());
        assert_eq!(bf.hit_poofs().len(), 1);
        assert_eq!(bf.hit_poofs()[0].x, target.x);
        assert_eq!(bf.shot_effects().len(), 1);

        let mut surface = RecordingSurface::new();
        bf.render(&mut surface);
        assert_eq!(agent_bodies(&surface, radius), 13);
    }

    #[test]
    fn when_tap_misses_then_only_shot_effect_is_added() {
        let mut bf = mounted(800.0, 300.0);

        let hit = bf.handle_tap(400.0, 10.0);

        assert_eq!(hit, None);
        assert_eq!(bf.shot_effects().len(), 1);
        assert!(bf.hit_poofs().is_empty());
    }

    #[test]
    fn when_effect_outlives_its_max_life_then_it_leaves_render_set() {
        let tuning = BattlefieldTuning {
            shot_effect_life: 0.25,
            ..BattlefieldTuning::default()
        };
        let mut bf = Battlefield::new(tuning, SequenceRandom::new(vec![0.5]));
        bf.resize(800.0, 300.0);
        bf.handle_tap(400.0, 5.0);

        // 8 * 1/32 s sums to exactly 0.25 s.
        for _ in 0..8 {
            bf.update(0.031_25);
        }
        assert_eq!(bf.shot_effects().len(), 1);

        bf.update(0.031_25);
        assert!(bf.shot_effects().is_empty());
    }

    #[test]
    fn when_hit_poof_outlives_its_max_life_then_it_leaves_render_set() {
        let mut bf = mounted(800.0, 300.0);
        let target = bf.agents()[3].clone();
        assert_eq!(bf.handle_tap(target.x, target.y), Some(3));
        assert_eq!(bf.tuning().hit_poof_life, 0.35);

        // 6 * 0.05 + 0.04 = 0.34 s, still inside the 0.35 s life.
        for _ in 0..6 {
            bf.update(0.05);
        }
        bf.update(0.04);
        assert_eq!(bf.hit_poofs().len(), 1);

        // 0.36 s: past it.
        bf.update(0.02);
        assert!(bf.hit_poofs().is_empty());
    }

    #[test]
    fn when_running_for_a_while_then_projectiles_only_hit_opponents() {
        let mut bf = mounted(300.0, 120.0);
        let mut hits = 0;
        for _ in 0..2000 {
            let before: Vec<bool> = bf.agents().iter().map(|a| a.is_hidden()).collect();
            let report = bf.update(0.02);
            hits += report.hits;
            // Agents only become hidden through hits.
            let newly_hidden = bf
                .agents()
                .iter()
                .zip(before)
                .filter(|(a, was)| a.is_hidden() && !*was)
                .count();
            // A hit can also land on an agent whose hide timer ran out this tick.
            assert!(newly_hidden <= report.hits);
            assert!(bf.projectiles().iter().all(|p| p.x >= -16.0 && p.x <= 316.0));
        }
        assert!(hits > 0, "expected some hits over 40 simulated seconds");
    }

    #[test]
    fn when_rendered_then_frame_starts_with_clear() {
        let bf = mounted(640.0, 200.0);
        let mut surface = RecordingSurface::new();
        bf.render(&mut surface);

        assert_eq!(
            surface.commands()[0],
            DrawCommand::Clear {
                width: 640.0,
                height: 200.0
            }
        );
        assert_eq!(agent_bodies(&surface, 6.0), 14);
    }
}
