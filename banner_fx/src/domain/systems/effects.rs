use crate::domain::state::Effect;

/// Ages every effect by `dt` and drops the ones past `max_life`.
///
/// An effect is kept while `life <= max_life`, so it stays visible for its whole
/// configured lifetime.
pub fn age_effects(effects: &mut Vec<Effect>, dt: f32, max_life: f32) {
    for e in effects.iter_mut() {
        e.life += dt;
    }
    effects.retain(|e| e.life <= max_life);
}
