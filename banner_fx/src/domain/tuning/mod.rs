// Gameplay tuning, kept apart from runtime configuration.

pub mod battlefield;
pub mod strike;

pub use battlefield::BattlefieldTuning;
pub use strike::StrikeTuning;
