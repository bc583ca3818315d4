use crate::error::{CliError, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::{Layer, Registry, filter::LevelFilter, fmt, prelude::*};

/// Installs the global subscriber: compact stderr output plus an optional
/// plain-text log file that records thread ids and targets.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let file_layer = log_file.as_deref().map(file_layer).transpose()?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(file_layer)
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer)
        .try_init()
        .map_err(|e| CliError::Other(anyhow::anyhow!(e)))
}

fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn file_layer(path: &Path) -> Result<impl Layer<Registry> + Send + Sync + 'static> {
    let file = File::create(path).map_err(CliError::Io)?;
    Ok(fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::Once;
    use tracing::{debug, error, info, trace, warn};

    static INIT: Once = Once::new();

    fn ensure_global_logger_is_set() {
        INIT.call_once(|| {
            setup_logging(3, false, None).expect("Failed to set up global logger for tests");
        });
    }

    #[test]
    #[serial]
    fn initialization_and_macros_work() {
        ensure_global_logger_is_set();

        error!("This is an error");
        warn!("Skipping invalid base 'X' at index 2.");
        info!("This is info");
        debug!("This is debug");
        trace!("This is trace");
    }

    #[test]
    #[serial]
    fn second_initialization_reports_an_error() {
        ensure_global_logger_is_set();
        let result = setup_logging(0, false, None);
        assert!(matches!(result, Err(CliError::Other(_))));
    }

    #[test]
    fn verbosity_maps_to_level_filters() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(5, false), LevelFilter::TRACE);
        assert_eq!(level_filter(0, true), LevelFilter::ERROR);
    }

    #[test]
    #[serial]
    fn file_layer_writes_events_to_the_given_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("helix.log");

        let subscriber = tracing_subscriber::registry().with(file_layer(&log_path).unwrap());
        tracing::subscriber::with_default(subscriber, || {
            debug!("Placing joint 'Joint_A_0'.");
        });

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Placing joint 'Joint_A_0'."));
        assert!(content.contains("DEBUG"));
        assert!(content.contains("ThreadId"));
        assert!(content.contains(module_path!()));
    }

    #[test]
    #[serial]
    fn invalid_log_file_path_propagates_error() {
        let invalid_path = PathBuf::from("/");

        if cfg!(unix) && invalid_path.is_dir() {
            let result = setup_logging(0, false, Some(invalid_path));
            assert!(matches!(result, Err(CliError::Io(_))));
        }
    }
}
