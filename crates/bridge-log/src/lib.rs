use std::path::Path;

use chrono::{Datelike, Timelike};
// Re-export logging functions for convenience.
pub use log::*;
use log4rs::{
    append::{console::ConsoleAppender, file::FileAppender},
    config::{runtime::ConfigErrors, Appender, Logger, Root},
    encode::pattern::PatternEncoder,
    Config,
};
use thiserror::Error;

/// Pattern used by both appenders.
const PATTERN: &str = "{d} {l} {t} - {m}{n}";

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("unable to open log file: {0}")]
    File(#[from] std::io::Error),
    #[error("invalid logging configuration: {0}")]
    Config(#[from] ConfigErrors),
    #[error("a logger has already been installed: {0}")]
    AlreadyInitialized(#[from] SetLoggerError),
}

/// Initializes console logging. Should be called before any other logging functions. Provided
/// `LevelFilter` will remove all logs below the provided level.
pub fn init(filter: LevelFilter) -> Result<(), LogInitError> {
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(console())))
        .build(Root::builder().appender("stdout").build(filter))?;

    install(config)
}

/// Same as [`init`], but also writes every record to a file inside `dir`. Name of the file is
/// based on the current time.
pub fn init_with_file(filter: LevelFilter, dir: impl AsRef<Path>) -> Result<(), LogInitError> {
    let now = chrono::Utc::now();
    let log_file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(dir.as_ref().join(format!(
            "{} {} {} {} {} {}.txt",
            now.year(),
            now.month(),
            now.day(),
            now.hour(),
            now.minute(),
            now.second()
        )))?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(console())))
        .appender(Appender::builder().build("log_file", Box::new(log_file)))
        .logger(
            Logger::builder()
                .appender("log_file")
                .additive(false)
                .build("bridge::log_file", filter),
        )
        .build(
            Root::builder()
                .appender("log_file")
                .appender("stdout")
                .build(filter),
        )?;

    install(config)
}

fn console() -> ConsoleAppender {
    ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build()
}

fn install(config: Config) -> Result<(), LogInitError> {
    log4rs::init_config(config)?;
    log_panics::init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_reported() {
        assert!(init(LevelFilter::Off).is_ok());
        assert!(matches!(
            init(LevelFilter::Off),
            Err(LogInitError::AlreadyInitialized(_))
        ));
    }
}
