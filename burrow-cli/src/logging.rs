use std::{
    io::{self, Write as _},
    sync::{OnceLock, RwLock},
};

use crossterm::style::{Color, Stylize as _};
use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Installs the logger and sets its level.
///
/// Stdout is reserved for the rendered maze, so everything goes to stderr.
pub fn init(level: LevelFilter, color: bool) -> Result<(), log::SetLoggerError> {
    let logger = LOGGER.get_or_init(|| StderrLogger::new(level, color));
    logger.set_min_level(level);

    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

pub struct StderrLogger {
    min_level: RwLock<LevelFilter>,
    color: bool,
}

impl StderrLogger {
    fn new(min_level: LevelFilter, color: bool) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            color,
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        self.min_level
            .read()
            .map(|level| *level)
            .unwrap_or(LevelFilter::Warn)
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        if let Ok(mut min_level) = self.min_level.write() {
            *min_level = level;
        }
    }

    fn format(&self, record: &Record) -> String {
        let level = format!("{:<5}", record.level());
        let level = if self.color {
            level.with(level_color(record.level())).to_string()
        } else {
            level
        };

        format!(
            "{} {} -> {}",
            level,
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Blue,
        Level::Trace => Color::DarkGrey,
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // nowhere left to report a failed write to
            let _ = writeln!(io::stderr().lock(), "{}", self.format(record));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(level: Level) -> Metadata<'static> {
        Metadata::builder().level(level).target("burrow").build()
    }

    #[test]
    fn respects_min_level() {
        let logger = StderrLogger::new(LevelFilter::Info, false);

        assert!(logger.enabled(&metadata(Level::Error)));
        assert!(logger.enabled(&metadata(Level::Info)));
        assert!(!logger.enabled(&metadata(Level::Debug)));

        logger.set_min_level(LevelFilter::Off);
        assert!(!logger.enabled(&metadata(Level::Error)));
    }

    #[test]
    fn plain_format() {
        let logger = StderrLogger::new(LevelFilter::Trace, false);
        let line = logger.format(
            &Record::builder()
                .args(format_args!("carved {} cells", 12))
                .level(Level::Debug)
                .module_path(Some("burrow::algorithms"))
                .build(),
        );

        assert_eq!(line, "DEBUG burrow::algorithms -> carved 12 cells");
    }
}
