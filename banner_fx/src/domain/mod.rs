// Domain layer: simulation types, tuning, and pure rules.

pub mod bolt;
pub mod ports;
pub mod rng;
pub mod state;
pub mod systems;
pub mod tuning;

pub use bolt::{Bolt, Point, generate_bolt};
pub use ports::{RandomSource, RenderSurface, Rgba};
pub use state::{Agent, Effect, HitPoof, Projectile, ShotEffect, Side};
pub use tuning::{BattlefieldTuning, StrikeTuning};
