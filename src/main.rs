//! EduLMS terminal client
//!
//! Main application entry point

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use EduLMS::{
    config::Settings,
    handlers::{commands::navigate, handle_line},
    state::AppContext,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("loading configuration")?;
    settings.validate().context("validating configuration")?;

    // Initialize logging; the guard flushes the file writer on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", EduLMS::info());
    warn!("The mock user store keeps no credentials; any password is accepted");

    let mut ctx = AppContext::build(settings).await.context("building application context")?;

    let mut stdout = tokio::io::stdout();
    let start = ctx.location().clone();
    let first_page = navigate::open_route(&mut ctx, start).await?;
    stdout.write_all(format!("{}\n\nType /help for commands.\n> ", first_page).as_bytes()).await?;
    stdout.flush().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;
            continue;
        }

        let reply = handle_line(&mut ctx, &line).await;
        stdout.write_all(reply.text.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        if reply.quit {
            break;
        }
        stdout.write_all(b"\n> ").await?;
        stdout.flush().await?;
    }
    stdout.flush().await?;

    ctx.shutdown().await;
    info!("EduLMS client has been shut down.");

    Ok(())
}
