// Domain-level simulation entities.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Spawns left of view and marches right.
    A,
    /// Spawns right of view and marches left.
    B,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Horizontal facing as a sign: +1 right, -1 left.
    pub fn facing(self) -> f32 {
        match self {
            Side::A => 1.0,
            Side::B => -1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Agent {
    pub side: Side,
    pub x: f32,
    // Fixed at spawn.
    pub y: f32,
    pub radius: f32,
    // Signed; the sign is the facing direction.
    pub vx: f32,

    // Combat state.
    pub hidden_for: f32,    // seconds left invisible after a hit
    pub fire_cooldown: f32, // seconds until next shot
}

impl Agent {
    pub fn is_hidden(&self) -> bool {
        self.hidden_for > 0.0
    }

    pub fn direction(&self) -> f32 {
        if self.vx < 0.0 { -1.0 } else { 1.0 }
    }
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    // Cleared on collision or when leaving bounds; swept after the tick.
    pub live: bool,
}

/// Short-lived visual marker: elapsed life only, no behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    pub x: f32,
    pub y: f32,
    pub life: f32,
}

impl Effect {
    pub fn at(x: f32, y: f32) -> Self {
        Self { x, y, life: 0.0 }
    }

    /// Elapsed life as a fraction of `max_life`, clamped to `0.0..=1.0`.
    pub fn fraction(&self, max_life: f32) -> f32 {
        if max_life <= 0.0 {
            return 1.0;
        }
        (self.life / max_life).clamp(0.0, 1.0)
    }
}

/// Expanding ring left where the user tapped.
pub type ShotEffect = Effect;
/// Ray burst left where an agent was struck.
pub type HitPoof = Effect;
