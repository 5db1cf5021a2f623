//! XDG-compliant log directory management
//!
//! Logs are stored in `$XDG_STATE_HOME/hexed/logs/` (typically
//! `~/.local/state/hexed/logs/`), one PID-named file per process so that
//! concurrent instances do not interleave. Old log files are removed on startup.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{Duration, SystemTime};

/// Minimum age for log files to be cleaned up (7 days)
const CLEANUP_AGE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Cached log directory path
static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the base log directory, creating it if necessary.
///
/// Falls back to the system temp directory when the state directory cannot be created.
pub fn log_dir() -> &'static PathBuf {
    LOG_DIR.get_or_init(|| {
        let dir = get_xdg_log_dir().unwrap_or_else(|| std::env::temp_dir().join("hexed-logs"));

        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!("Failed to create log directory {:?}: {}", dir, e);
            return std::env::temp_dir().join("hexed-logs");
        }

        dir
    })
}

/// Get the XDG state home log directory
fn get_xdg_log_dir() -> Option<PathBuf> {
    if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
        let path = PathBuf::from(state_home);
        if path.is_absolute() {
            return Some(path.join("hexed").join("logs"));
        }
    }

    dirs::home_dir().map(|home| home.join(".local").join("state").join("hexed").join("logs"))
}

/// Get the path for the main log file for this process.
///
/// Returns `{log_dir}/hexed-{PID}.log`
pub fn main_log_path() -> PathBuf {
    log_dir().join(format!("hexed-{}.log", std::process::id()))
}

/// Remove log files in the log directory that belong to other processes and are old.
pub fn cleanup_stale_logs() {
    cleanup_stale_logs_in_dir(log_dir(), std::process::id(), CLEANUP_AGE);
}

fn cleanup_stale_logs_in_dir(dir: &Path, current_pid: u32, age: Duration) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        let Some(pid) = extract_pid_from_filename(&name) else {
            continue;
        };
        if pid == current_pid {
            continue;
        }

        if entry.file_type().map(|t| t.is_file()).unwrap_or(false)
            && is_file_older_than(&entry.path(), age)
        {
            if let Err(e) = fs::remove_file(entry.path()) {
                tracing::debug!("Failed to clean up stale log {:?}: {}", entry.path(), e);
            } else {
                tracing::debug!("Cleaned up stale log file: {:?}", entry.path());
            }
        }
    }
}

/// Check if a file is older than the specified duration
fn is_file_older_than(path: &Path, age: Duration) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };

    let Ok(modified) = metadata.modified() else {
        return false;
    };

    SystemTime::now()
        .duration_since(modified)
        .map(|elapsed| elapsed >= age)
        .unwrap_or(false)
}

/// Extract PID from a filename like "hexed-12345.log"
fn extract_pid_from_filename(name: &str) -> Option<u32> {
    name.strip_prefix("hexed-")?.strip_suffix(".log")?.parse().ok()
}
