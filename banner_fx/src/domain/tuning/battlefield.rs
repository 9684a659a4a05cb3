use serde::Deserialize;

/// Gameplay tuning for the battlefield banner.
///
/// Keep this separate from runtime configuration (frame interval, channel sizes).
/// Every field can be overridden from the `[battlefield]` table of a tuning file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BattlefieldTuning {
    /// Agents spawned per side on every (re)build of the roster.
    pub agents_per_side: usize,

    /// Empty band above the first row and below the last row, in pixels.
    pub vertical_margin: f32,

    /// Body radius in pixels.
    pub agent_radius: f32,

    /// Marching speed range in pixels per second.
    pub speed_min: f32,
    pub speed_max: f32,

    /// Seconds between shots; rerolled after every shot.
    pub cooldown_min: f32,
    pub cooldown_max: f32,

    /// Rifle length past the body edge; projectiles spawn at its tip.
    pub muzzle_length: f32,

    /// Projectile speed range in pixels per second.
    pub projectile_speed_min: f32,
    pub projectile_speed_max: f32,

    /// Projectiles are dropped once this far outside the horizontal bounds.
    pub projectile_margin: f32,

    /// Agents wrap once this far off screen, re-entering at the same distance
    /// beyond the opposite edge.
    pub wrap_margin: f32,

    /// Extra random distance added on re-entry (0 wraps exactly to the margin).
    pub wrap_jitter: f32,

    /// Initial off-screen scatter so the two columns do not enter in lockstep.
    pub spawn_spread: f32,

    /// Projectile hit radius as a multiple of the body radius.
    pub projectile_hit_scale: f32,

    /// Tap hit radius as a multiple of the body radius.
    pub tap_hit_scale: f32,

    /// Seconds an agent stays hidden after a projectile hit.
    pub projectile_hide_secs: f32,

    /// Seconds an agent stays hidden after being tapped.
    pub tap_hide_secs: f32,

    /// Lifetime of the tap ring in seconds.
    pub shot_effect_life: f32,

    /// Lifetime of the hit burst in seconds.
    pub hit_poof_life: f32,

    /// Upper bound for a single step; protects against jumps after a suspended tab.
    pub max_dt: f32,

    /// Length of the streak drawn behind a projectile.
    pub trail_length: f32,
}

impl Default for BattlefieldTuning {
    fn default() -> Self {
        Self {
            agents_per_side: 7,
            vertical_margin: 24.0,
            agent_radius: 6.0,
            speed_min: 28.0,
            speed_max: 56.0,
            cooldown_min: 0.9,
            cooldown_max: 2.4,
            muzzle_length: 9.0,
            projectile_speed_min: 220.0,
            projectile_speed_max: 320.0,
            projectile_margin: 16.0,
            wrap_margin: 40.0,
            wrap_jitter: 0.0,
            spawn_spread: 160.0,
            projectile_hit_scale: 1.4,
            tap_hit_scale: 1.7,
            projectile_hide_secs: 0.4,
            tap_hide_secs: 0.3,
            shot_effect_life: 0.25,
            hit_poof_life: 0.35,
            max_dt: 0.05,
            trail_length: 10.0,
        }
    }
}

impl BattlefieldTuning {
    pub fn projectile_hit_radius(&self) -> f32 {
        self.agent_radius * self.projectile_hit_scale
    }

    pub fn tap_hit_radius(&self) -> f32 {
        self.agent_radius * self.tap_hit_scale
    }
}
