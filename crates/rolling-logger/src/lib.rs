//! Rolling file logger for Tauri applications.
//!
//! One log file per app under the platform log directory, rotated to a `.1`
//! sibling when it outgrows the size cap. A `tracing` subscriber is
//! installed over the same file, so `tracing` events and `log` records
//! (via the tracing-log bridge) land next to the direct [`info`]/[`warn`]/
//! [`error`] helpers.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::MakeWriter;

/// Rotate once the live file reaches this size.
const MAX_LOG_BYTES: u64 = 1024 * 1024;

struct Inner {
    path: PathBuf,
    max_bytes: u64,
    file: Mutex<File>,
}

impl Inner {
    fn open(path: PathBuf, max_bytes: u64) -> Result<Self, String> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| format!("failed to open {}: {e}", path.display()))?;
        Ok(Self {
            path,
            max_bytes,
            file: Mutex::new(file),
        })
    }

    fn write_bytes(&self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if file.metadata()?.len() >= self.max_bytes {
            // Best effort: a failed rename keeps appending to the old file.
            let rotated = self.path.with_extension("log.1");
            if fs::rename(&self.path, &rotated).is_ok() {
                *file = OpenOptions::new().create(true).append(true).open(&self.path)?;
            }
        }
        file.write(buf)
    }

    fn write_line(&self, level: &str, message: &str) -> Result<(), String> {
        let line = format!(
            "[{}] {level} {message}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
        );
        self.write_bytes(line.as_bytes())
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

#[derive(Clone)]
struct LogWriter(Arc<Inner>);

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write_bytes(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0
            .file
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .flush()
    }
}

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

static GLOBAL: OnceLock<Arc<Inner>> = OnceLock::new();

/// Initialize the logger, writing to `<dir>/<app_name>.log`.
pub fn init_logger(dir: PathBuf, app_name: &str) -> Result<(), String> {
    fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    let inner = Arc::new(Inner::open(dir.join(format!("{app_name}.log")), MAX_LOG_BYTES)?);
    GLOBAL
        .set(Arc::clone(&inner))
        .map_err(|_| "logger already initialized".to_string())?;

    let _ = tracing_subscriber::fmt()
        .with_writer(LogWriter(inner))
        .with_ansi(false)
        .try_init();

    tracing::info!("rolling logger initialized");
    Ok(())
}

fn write(level: &str, message: &str) -> Result<(), String> {
    match GLOBAL.get() {
        Some(inner) => inner.write_line(level, message),
        // Logging before init is a no-op rather than an error.
        None => Ok(()),
    }
}

pub fn info(message: &str) -> Result<(), String> {
    write("INFO", message)
}

pub fn warn(message: &str) -> Result<(), String> {
    write("WARN", message)
}

pub fn error(message: &str) -> Result<(), String> {
    write("ERROR", message)
}
