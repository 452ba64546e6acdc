//! Logging Infrastructure
//!
//! Console output plus optional daily rotating files:
//! - `<log_dir>/app/app.YYYY-MM-DD.log` application logs, removed after
//!   [`LOG_RETENTION_DAYS`]
//! - `<log_dir>/audit/audit.YYYY-MM-DD.log` store mutations (target `audit`),
//!   kept forever

use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, prelude::*};

/// Application log retention
pub const LOG_RETENTION_DAYS: i64 = 14;

const AUDIT_TARGET: &str = "audit";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Remove `app` log files whose date is older than `retention_days`
///
/// Returns the number of deleted files. Audit logs are never touched. File
/// dates are UTC, matching the rolling appender's naming.
pub fn cleanup_old_logs(log_dir: &Path, retention_days: i64) -> anyhow::Result<usize> {
    let cutoff = chrono::Utc::now().date_naive() - chrono::Duration::days(retention_days);

    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(date) = app_log_date(name)
            && date < cutoff
        {
            fs::remove_file(&path)?;
            removed += 1;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(removed)
}

/// Date encoded in `app.YYYY-MM-DD[.log]` or `app-YYYY-MM-DD[.log]`
fn app_log_date(name: &str) -> Option<chrono::NaiveDate> {
    let rest = name
        .strip_prefix("app.")
        .or_else(|| name.strip_prefix("app-"))?;
    let date = rest.get(..10)?;
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Periodic cleanup task - runs every hour after the startup pass
async fn periodic_cleanup(log_dir: PathBuf) {
    use tokio::time::{Duration, sleep};

    loop {
        sleep(Duration::from_secs(3600)).await;

        if let Err(e) = cleanup_old_logs(&log_dir, LOG_RETENTION_DAYS) {
            tracing::error!(error = %e, "Failed to cleanup old logs");
        }
    }
}

fn file_layer(dir: &Path, prefix: &str, json: bool, audit: bool) -> anyhow::Result<BoxedLayer> {
    fs::create_dir_all(dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .build(dir)?;

    let layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(appender));
    let filter = tracing_subscriber::filter::filter_fn(move |meta| {
        (meta.target() == AUDIT_TARGET) == audit
    });

    Ok(if json {
        layer.json().with_filter(filter).boxed()
    } else {
        layer.with_filter(filter).boxed()
    })
}

/// Initialize the logging system
///
/// `RUST_LOG` overrides `level`. Must be called from within a tokio runtime
/// when `log_dir` is set (the cleanup task is spawned on it).
///
/// # Examples
/// ```no_run
/// # fn main() -> anyhow::Result<()> {
/// // Development: pretty console only
/// marketing_server::utils::logger::init_logger_with_file("debug", false, None)?;
/// # Ok(())
/// # }
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console: BoxedLayer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let mut layers = vec![console];
    if let Some(dir) = log_dir {
        let log_dir = Path::new(dir);
        layers.push(file_layer(&log_dir.join("app"), "app", json_format, false)?);
        layers.push(file_layer(&log_dir.join("audit"), "audit", json_format, true)?);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()?;

    if let Some(dir) = log_dir {
        let log_dir = Path::new(dir);
        match cleanup_old_logs(log_dir, LOG_RETENTION_DAYS) {
            Ok(removed) if removed > 0 => tracing::info!(removed, "Removed expired log files"),
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "Initial log cleanup failed"),
        }
        tokio::spawn(periodic_cleanup(log_dir.to_path_buf()));
    }
    Ok(())
}
