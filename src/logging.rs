use std::fs::File;

use tracing_subscriber::EnvFilter;

/// File logging, opt-in through `CAMBIO_LOG`.
///
/// Off by default: a subscriber writing to stderr would corrupt the
/// terminal UI. Point `CAMBIO_LOG` at a file path to enable it;
/// `RUST_LOG` filters as usual (default "info"). The actual file is
/// `{path}.{timestamp}.{pid}` so concurrent instances never share one.
pub fn init_tracing() {
    let Ok(log_path) = std::env::var("CAMBIO_LOG") else {
        return;
    };

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, std::process::id());

    let file = match File::create(&unique_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot create log file {}: {}", unique_path, err);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .init();
}
