use std::{
    fs, io,
    path::{Path, PathBuf},
};

use burrow::BoundaryPolicy;
use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read/write settings file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("No config directory found on this platform")]
    NoConfigDir,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Level raised by `steps`, saturating at [`LogLevel::Trace`].
    pub fn raised(self, steps: u8) -> Self {
        use LogLevel::*;
        const ORDER: [LogLevel; 6] = [Off, Error, Warn, Info, Debug, Trace];

        let idx = ORDER.iter().position(|&l| l == self).unwrap_or(2);
        ORDER[(idx + steps as usize).min(ORDER.len() - 1)]
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub boundary_policy: Option<BoundaryPolicy>,
    #[serde(default)]
    pub wall_char: Option<char>,
    #[serde(default)]
    pub floor_char: Option<char>,
    #[serde(default)]
    pub entrance_char: Option<char>,
    #[serde(default)]
    pub exit_char: Option<char>,
    #[serde(default)]
    pub color: Option<bool>,
    #[serde(default)]
    pub cube_scale: Option<f32>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

impl Settings {
    pub fn get_width(&self) -> i32 {
        self.width.unwrap_or(21)
    }

    pub fn get_height(&self) -> i32 {
        self.height.unwrap_or(21)
    }

    pub fn get_boundary_policy(&self) -> BoundaryPolicy {
        self.boundary_policy.unwrap_or_default()
    }

    pub fn get_wall_char(&self) -> char {
        self.wall_char.unwrap_or('#')
    }

    pub fn get_floor_char(&self) -> char {
        self.floor_char.unwrap_or(' ')
    }

    pub fn get_entrance_char(&self) -> char {
        self.entrance_char.unwrap_or('E')
    }

    pub fn get_exit_char(&self) -> char {
        self.exit_char.unwrap_or('X')
    }

    pub fn get_color(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn get_cube_scale(&self) -> f32 {
        self.cube_scale.unwrap_or(1.0)
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn default_path() -> Result<PathBuf, SettingsError> {
        dirs::config_dir()
            .map(|dir| dir.join("burrow").join("settings.ron"))
            .ok_or(SettingsError::NoConfigDir)
    }

    pub fn from_ron(settings: &str) -> Result<Self, SettingsError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(settings)?)
    }

    /// Loads the settings, writing the default file first if there is none at `path`.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(settings) => {
                log::debug!("loading settings from {:?}", path);
                Self::from_ron(&settings)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Self::reset_config(path)?;
                Self::from_ron(DEFAULT_SETTINGS)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_parse() {
        let settings = Settings::from_ron(DEFAULT_SETTINGS).unwrap();

        assert_eq!(settings.width, Some(21));
        assert_eq!(settings.boundary_policy, Some(BoundaryPolicy::Seal));
        assert_eq!(settings.floor_char, Some(' '));
        assert_eq!(settings.log_level, Some(LogLevel::Warn));
    }

    #[test]
    fn missing_fields_fall_back() {
        let settings = Settings::from_ron("(width: 9, boundary_policy: Legacy)").unwrap();

        assert_eq!(settings.get_width(), 9);
        assert_eq!(settings.get_height(), 21);
        assert_eq!(settings.get_boundary_policy(), BoundaryPolicy::Legacy);
        assert_eq!(settings.get_wall_char(), '#');
        assert!(settings.get_color());
    }

    #[test]
    fn broken_settings() {
        assert!(matches!(
            Settings::from_ron("(width: \"wide\")"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn raise_log_level() {
        assert_eq!(LogLevel::Warn.raised(0), LogLevel::Warn);
        assert_eq!(LogLevel::Warn.raised(2), LogLevel::Debug);
        assert_eq!(LogLevel::Off.raised(9), LogLevel::Trace);
    }

    #[test]
    fn load_creates_default_file() {
        let dir = std::env::temp_dir().join(format!("burrow-settings-{}", std::process::id()));
        let path = dir.join("settings.ron");
        let _ = fs::remove_dir_all(&dir);

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.get_width(), 21);
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_SETTINGS);

        fs::write(&path, "(height: 7)").unwrap();
        assert_eq!(Settings::load(&path).unwrap().get_height(), 7);

        let _ = fs::remove_dir_all(&dir);
    }
}
