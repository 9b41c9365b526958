//! terminal logger for the diagnostics of the symbolic engine
use crate::symbolic::symbolic_errors::SymbolicError;
use simplelog::*;

/// Maps a textual loglevel to a filter. `off` and `none` disable logging.
pub fn parse_loglevel(level: &str) -> Result<LevelFilter, SymbolicError> {
    match level {
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" | "none" => Ok(LevelFilter::Off),
        _ => Err(SymbolicError::InvalidLogLevel(level.to_string())),
    }
}

/// Installs a terminal logger with the given loglevel (`None` means info).
///
/// Returns `Ok(true)` when a logger was installed, `Ok(false)` when logging is switched off or
/// a logger is already in place.
pub fn init_logger(loglevel: Option<&str>) -> Result<bool, SymbolicError> {
    let log_option = match loglevel {
        Some(level) => parse_loglevel(level)?,
        None => LevelFilter::Info,
    };
    if log_option == LevelFilter::Off {
        return Ok(false);
    }
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    Ok(logger_instance.is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_loglevel() {
        assert_eq!(parse_loglevel("warn"), Ok(LevelFilter::Warn));
        assert_eq!(parse_loglevel("none"), Ok(LevelFilter::Off));
        assert_eq!(
            parse_loglevel("verbose"),
            Err(SymbolicError::InvalidLogLevel("verbose".to_string()))
        );
    }

    #[test]
    fn test_init_logger() {
        assert_eq!(init_logger(Some("off")), Ok(false));
        assert!(init_logger(Some("loud")).is_err());
        // a second installation is refused by the log facade, not reported as an error
        let first = init_logger(Some("warn"));
        let second = init_logger(None);
        assert!(first.is_ok());
        assert_eq!(second, Ok(false));
    }
}
