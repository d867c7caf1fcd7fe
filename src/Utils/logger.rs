use chrono::Local;
use log::{LevelFilter, SetLoggerError};
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fmt;
use std::fs::File;

/// log level from its name: off, error, warn, info, debug or trace
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    match name {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

pub fn log_file_name() -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("log_{}.txt", date_and_time)
}

#[derive(Debug)]
pub enum LoggerError {
    File(std::io::Error),
    AlreadyInitialized(SetLoggerError),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoggerError::File(e) => write!(f, "cannot create log file: {}", e),
            LoggerError::AlreadyInitialized(e) => write!(f, "logger already initialized: {}", e),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::File(e) => Some(e),
            LoggerError::AlreadyInitialized(e) => Some(e),
        }
    }
}

/// Installs the global logger: a terminal logger on stderr (stdout belongs to the calculator)
/// and, if `log_file` is set, a copy into `log_<timestamp>.txt`. Returns the log file name.
/// Nothing is installed for `LevelFilter::Off`.
pub fn init_logger(level: LevelFilter, log_file: bool) -> Result<Option<String>, LoggerError> {
    if level == LevelFilter::Off {
        return Ok(None);
    }
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    let mut file_name = None;
    if log_file {
        let name = log_file_name();
        let file = File::create(&name).map_err(LoggerError::File)?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
        file_name = Some(name);
    }
    CombinedLogger::init(loggers).map_err(LoggerError::AlreadyInitialized)?;
    Ok(file_name)
}
