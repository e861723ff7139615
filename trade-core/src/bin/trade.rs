use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use trade_core::{
    FormField, SubmitAction, SubmitError, TradingConfig, TradingForm, UserSession, logging,
    sinks::build_sink,
};

/// Fill in one of the trading forms from the command line and submit it.
///
/// Values go through the same validation as the desktop form; accepted
/// requests are forwarded to the sink named in the config file.
#[derive(Debug, Parser)]
#[command(name = "trade")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// User id to send with the request (overrides the config file).
    #[arg(short, long)]
    user_id: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Request a quote for a stock symbol.
    Quote {
        #[arg(short, long)]
        symbol: String,
    },
    /// Add money to the account.
    Add {
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
    },
    /// Buy a dollar amount of a stock.
    Buy {
        #[arg(short, long)]
        symbol: String,
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
    },
    /// Sell a dollar amount of a stock.
    Sell {
        #[arg(short, long)]
        symbol: String,
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
    },
}

impl Command {
    /// Field edits implied by the arguments, plus the button they press.
    fn into_edits(self) -> (Vec<(FormField, String)>, SubmitAction) {
        match self {
            Command::Quote { symbol } => (
                vec![(FormField::QuoteSymbol, symbol)],
                SubmitAction::GetQuote,
            ),
            Command::Add { amount } => (
                vec![(FormField::AmountToAdd, amount)],
                SubmitAction::AddAmount,
            ),
            Command::Buy { symbol, amount } => (
                vec![
                    (FormField::StockToBuy, symbol),
                    (FormField::AmountToBuy, amount),
                ],
                SubmitAction::BuyStock,
            ),
            Command::Sell { symbol, amount } => (
                vec![
                    (FormField::StockToSell, symbol),
                    (FormField::AmountToSell, amount),
                ],
                SubmitAction::SellStock,
            ),
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = TradingConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    logging::init_logging(&config.logging)?;

    let session = match cli.user_id {
        Some(user_id) => UserSession::new(user_id),
        None => config.session(),
    };
    let sink = build_sink(&config.sink).context("Failed to open action sink")?;
    let mut form = TradingForm::new(session, sink);

    let (edits, action) = cli.command.into_edits();
    for (field, value) in edits {
        form.edit(field, value);
    }
    debug!(state = %form.state(), "submitting");

    match form.submit(action) {
        Ok(request) => {
            println!("{request}");
            Ok(ExitCode::SUCCESS)
        }
        Err(error @ (SubmitError::Validation { .. } | SubmitError::OutOfRange { .. })) => {
            eprintln!("{}", error.user_message());
            Ok(ExitCode::from(2))
        }
        Err(error) => Err(error.into()),
    }
}

fn main() -> Result<ExitCode> {
    run(Cli::parse())
}
