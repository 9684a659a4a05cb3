use crate::domain::{BattlefieldTuning, StrikeTuning};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{env, fs, time::Duration};
use thiserror::Error;

// Runtime constants and env lookups (not gameplay tuning).

pub const SURFACE_EVENT_CAPACITY: usize = 64;

/// Words revealed under the headline; only their count drives strike timing.
pub const DEFAULT_TOKENS: [&str; 8] = [
    "Webpages",
    "Functional Apps",
    "Mobile Games",
    "PC Games",
    "Unity Games",
    "In-Game Tools",
    "Environments",
    "Scripting",
];

/// Frame pacing for the battlefield loop (the stand-in for the display refresh).
pub fn frame_interval() -> Duration {
    let millis = env::var("BANNER_FRAME_INTERVAL_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(16);
    Duration::from_millis(millis)
}

/// How long the demo binary keeps both components mounted.
pub fn run_duration() -> Duration {
    let secs = env::var("BANNER_RUN_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(12);
    Duration::from_secs(secs)
}

pub fn dump_frames() -> bool {
    matches!(env::var("BANNER_DUMP_FRAMES").as_deref(), Ok("1") | Ok("true"))
}

pub fn tuning_path() -> Option<PathBuf> {
    env::var_os("BANNER_TUNING_PATH").map(PathBuf::from)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid tuning file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Gameplay tuning for both components, as read from a TOML file.
///
/// Every table and field is optional; anything missing keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub battlefield: BattlefieldTuning,
    pub strike: StrikeTuning,
}

pub fn parse_tuning(text: &str) -> Result<Tuning, ConfigError> {
    Ok(toml::from_str(text)?)
}

pub fn load_tuning(path: &Path) -> Result<Tuning, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tuning(&text)
}

/// Tuning from `BANNER_TUNING_PATH`, falling back to defaults (with a warning) when
/// the file is missing or invalid.
pub fn tuning_from_env() -> Tuning {
    let Some(path) = tuning_path() else {
        return Tuning::default();
    };

    match load_tuning(&path) {
        Ok(tuning) => {
            tracing::info!(path = %path.display(), "tuning loaded");
            tuning
        }
        Err(error) => {
            tracing::warn!(%error, "using default tuning");
            Tuning::default()
        }
    }
}
