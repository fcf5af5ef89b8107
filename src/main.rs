use anyhow::Context;

use cambio::config::Config;
use cambio::logging;
use cambio::tui;

fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let config = Config::load().context("Failed to load configuration")?;

    // The driver loop is synchronous; the runtime only carries fetches.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    tui::run(&config, runtime.handle().clone()).context("Terminal UI error")?;

    Ok(())
}
