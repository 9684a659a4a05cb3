use serde::Deserialize;

/// Timing for the headline reveal and the lightning strike, in milliseconds.
///
/// Overridable from the `[strike]` table of a tuning file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StrikeTuning {
    /// Headline fade-in before the word list starts.
    pub headline_ms: u64,

    /// Delay before the first word is revealed.
    pub delay_children_ms: u64,

    /// Gap between consecutive word reveals.
    pub stagger_ms: u64,

    /// Time for the last word to settle.
    pub settle_ms: u64,

    /// Trailing hold before the cycle counts as finished.
    pub tail_ms: u64,

    /// Earliest strike instant after cycle start.
    pub strike_min_ms: u64,

    /// Latest strike instant, measured back from cycle end.
    pub strike_end_guard_ms: u64,

    /// How long the screen flash stays on.
    pub flash_ms: u64,

    /// Idle pause between the end of one cycle and the start of the next.
    pub restart_pause_ms: u64,
}

impl Default for StrikeTuning {
    fn default() -> Self {
        Self {
            headline_ms: 1600,
            delay_children_ms: 1400,
            stagger_ms: 280,
            settle_ms: 600,
            tail_ms: 400,
            strike_min_ms: 1600,
            strike_end_guard_ms: 700,
            flash_ms: 140,
            restart_pause_ms: 5000,
        }
    }
}
