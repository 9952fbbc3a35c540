use anyhow::Result;
use tracing::info;

use lucena_uci::UciEngine;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout is reserved for UCI replies.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    info!("lucena starting");
    UciEngine::new().run()?;
    Ok(())
}
