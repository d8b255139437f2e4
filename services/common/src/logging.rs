use std::{
    fs, panic,
    path::{Path, PathBuf},
    thread,
    time::{Duration, SystemTime},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

use crate::env::env_or;

const DEFAULT_LOG_DIR: &str = "/var/log/font-analytics";

/// Keeps the non-blocking file writer flushing; drop it only at process exit.
pub struct TracingGuards {
    _file_guard: Option<WorkerGuard>,
}

#[derive(Clone, Debug)]
pub struct LogSettings {
    pub log_dir: PathBuf,
    pub retention_days: u64,
    pub cleanup_interval_minutes: u64,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self {
            log_dir: PathBuf::from(env_or("LOG_DIR", DEFAULT_LOG_DIR.to_string())),
            retention_days: env_or("LOG_RETENTION_DAYS", 14u64),
            cleanup_interval_minutes: env_or("LOG_CLEANUP_INTERVAL_MINUTES", 360u64),
        }
    }

    fn retention(&self) -> Option<(Duration, Duration)> {
        if self.retention_days == 0 || self.cleanup_interval_minutes == 0 {
            return None;
        }
        Some((
            Duration::from_secs(self.retention_days * 24 * 60 * 60),
            Duration::from_secs(self.cleanup_interval_minutes * 60),
        ))
    }
}

pub fn init_tracing(service_name: &str) -> TracingGuards {
    let settings = LogSettings::from_env();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_root = settings.log_dir.join(service_name);

    // Stdout always; the rolling file only when the directory is usable.
    let (file_layer, file_guard) = match rolling_writer(&log_root, service_name) {
        Some((writer, guard)) => (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard)),
        None => (None, None),
    };

    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(file_layer);
    let _ = tracing::subscriber::set_global_default(subscriber);

    if file_guard.is_some() {
        if let Some((retention, interval)) = settings.retention() {
            spawn_log_cleanup(log_root, retention, interval);
        }
    } else {
        tracing::warn!(dir = %log_root.display(), "file logging disabled");
    }

    TracingGuards {
        _file_guard: file_guard,
    }
}

fn rolling_writer(
    log_root: &Path,
    service_name: &str,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    fs::create_dir_all(log_root).ok()?;
    // The appender panics when the directory is not writable.
    let appender = panic::catch_unwind(|| {
        tracing_appender::rolling::daily(log_root, format!("{service_name}.log"))
    })
    .ok()?;
    Some(tracing_appender::non_blocking(appender))
}

fn spawn_log_cleanup(log_root: PathBuf, retention: Duration, interval: Duration) {
    thread::spawn(move || loop {
        if let Some(cutoff) = SystemTime::now().checked_sub(retention) {
            cleanup_old_logs(&log_root, cutoff);
        }
        thread::sleep(interval);
    });
}

fn cleanup_old_logs(root: &Path, cutoff: SystemTime) -> usize {
    let Ok(entries) = fs::read_dir(root) else {
        return 0;
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            removed += cleanup_old_logs(&path, cutoff);
            continue;
        }
        let modified = fs::metadata(&path).and_then(|metadata| metadata.modified());
        if matches!(modified, Ok(modified) if modified < cutoff) && fs::remove_file(&path).is_ok() {
            removed += 1;
        }
    }
    removed
}
