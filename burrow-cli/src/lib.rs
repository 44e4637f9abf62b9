pub mod logging;
pub mod renderer;
pub mod settings;

use std::io;

use thiserror::Error;

use renderer::RenderError;
use settings::SettingsError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Generation failed: {0}")]
    Generator(#[from] burrow::GeneratorError),
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("Logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use log::LevelFilter;

    use super::*;

    #[test]
    fn second_logger_is_reported() {
        let _ = logging::init(LevelFilter::Off, false);
        let err = CliError::from(logging::init(LevelFilter::Off, false).unwrap_err());

        assert!(matches!(err, CliError::Logger(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Logger already installed"));
    }
}
