// Per-tick battlefield systems. Each one owns a single concern and mutates the arena
// slices it is handed.

pub mod agents;
pub mod effects;
pub mod projectiles;
pub mod roster;
pub mod tap;
