// Debug logging module for Reflex Pong
// Routes tracing output to a file when enabled via --debug

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::SystemTime;

use tracing::Level;

/// Location of the debug log, next to other temp files
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("reflex-pong-debug.log")
}

/// Initialize debug logging to file
///
/// # Arguments
/// * `enabled` - Whether debug logging should be enabled (controlled by --debug flag)
///
/// # Behavior
/// - If enabled=false: Returns immediately, no subscriber is installed and
///   every `tracing` call stays a no-op
/// - If enabled=true: Truncates the log file, writes a header, and installs
///   a plain-text subscriber at DEBUG level
///
/// The terminal belongs to the game while it runs, so nothing is ever
/// logged to stdout or stderr.
pub fn init(enabled: bool) -> io::Result<()> {
    if !enabled {
        return Ok(());
    }

    let path = log_file_path();
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    writeln!(file, "=== Reflex Pong Debug Log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", path.display())?;
    writeln!(file, "========================================\n")?;

    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
