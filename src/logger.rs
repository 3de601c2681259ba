use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use log::LevelFilter;

use crate::error::AppError;

const APP_DIR_NAME: &str = "neon-snake";
const LOG_FILE_NAME: &str = "neon-snake.log";

/// Default log destination under the platform data directory.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Routes `log` output to `path`, appending.
///
/// The terminal owns stdout/stderr while the game runs, so logs never go
/// there. `RUST_LOG` overrides `level` when set.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), AppError> {
    let logger_error = |source| AppError::Logger {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(logger_error)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(logger_error)?;

    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();

    if let Err(error) = result {
        // Already initialised (tests, embedding); keep the existing logger.
        eprintln!("logger already initialised: {error}");
    }

    Ok(())
}
