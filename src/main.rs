//! Address Book - Main entry point
//!
//! Runs an interactive address book session on stdin/stdout. Logs go to
//! stderr so they never mix with command output.

use address_book::cli::{interrupt_listener, Session};
use address_book::Config;
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only; RUST_LOG overrides LOG_LEVEL)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(prompt = %config.prompt, "Configuration loaded successfully");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        // Listen for Ctrl-C before anything is printed
        let interrupt = interrupt_listener()?;

        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut session = Session::new(config);
        session.run(stdin, tokio::io::stdout(), interrupt).await
    });

    // After Ctrl-C a blocking stdin read may still be outstanding; don't wait on it
    runtime.shutdown_background();

    result?;
    info!("Address book shutdown complete");
    Ok(())
}
