use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;

const APP_DIR_NAME: &str = "trail-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";
const LOG_FILE_NAME: &str = "trail-snake.log";

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// The board every round is played on.
pub const GRID: GridSize = GridSize {
    width: 20,
    height: 20,
};

/// Cell where the head spawns at round start.
pub const SPAWN_CELL: (i32, i32) = (10, 10);

/// Velocity increment per frame, in tenths of a cell.
pub const VELOCITY_STEP_TENTHS: u8 = 3;

/// Velocity at which the ramp resets to zero, in tenths of a cell.
pub const VELOCITY_CEILING_TENTHS: u8 = 15;

/// Target frame rate of the main loop.
pub const FRAMES_PER_SECOND: u32 = 60;

/// Minimum time between two applied direction changes.
pub const TURN_DEBOUNCE: Duration = Duration::from_millis(50);

/// Interval between tail removals while the death animation runs.
pub const DEATH_STEP: Duration = Duration::from_millis(100);

/// Random draws tried before apple placement scans for free cells.
pub const APPLE_SPAWN_ATTEMPTS: u32 = 64;

/// Text shown over the board once the round is lost.
pub const GAME_OVER_TEXT: &str = "YOU LOST HAHA =)))";

/// Board row the game-over text is centered on.
pub const GAME_OVER_ROW: u16 = 3;

/// What happens to the snake when a lost round is restarted.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartPolicy {
    /// Only score and round flags reset; the snake stays where the death
    /// animation left it.
    #[default]
    KeepSnake,
    /// A fresh snake spawns at the start cell with a new random direction.
    Respawn,
}

/// Log verbosity as written in the settings file.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// User settings read from the JSON settings file.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, Default, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub restart_policy: RestartPolicy,
    /// Fixed RNG seed for reproducible apple placement and spawn direction.
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub log_level: LogLevel,
}

impl Settings {
    /// Loads settings from `path`, or from the default location when `None`.
    ///
    /// A missing file at the default location yields defaults. A missing file
    /// that was named explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => load_settings_from_path(path),
            None => {
                let path = settings_path();
                match load_settings_from_path(&path) {
                    Err(ConfigError::Read { source, .. })
                        if source.kind() == io::ErrorKind::NotFound =>
                    {
                        Ok(Self::default())
                    }
                    other => other,
                }
            }
        }
    }

    /// Returns the log file path, falling back to the platform cache dir.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_path)
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

fn default_log_path() -> PathBuf {
    let mut base = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

fn load_settings_from_path(path: &Path) -> Result<Settings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
