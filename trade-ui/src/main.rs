use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gpui::{App, Application};
use tracing::{error, info};

use trade_core::{TradingConfig, logging};
use trade_ui::{open_main_window, setup_app};

/// Desktop trading form: quotes, deposits, buys and sells.
///
/// Validated requests are forwarded to the sink named in the config file.
#[derive(Debug, Parser)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = TradingConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    logging::init_logging(&config.logging)?;
    info!(user = ?config.user_id, sink = ?config.sink.kind, "starting trading desk");

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            setup_app(cx);
            if let Err(e) = open_main_window(cx, &config) {
                error!(?e, "failed to open main window");
                cx.quit();
            }
        });

    Ok(())
}
