use tracing::info;

use super::{ActionSink, SinkError};
use crate::models::{TradeAction, TradeRequest};

/// Emits a diagnostic trace of each intended action and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ActionSink for LogSink {
    fn dispatch(
        &mut self,
        request: &TradeRequest,
    ) -> Result<(), SinkError> {
        let user = request.user_id.as_deref().unwrap_or("-");
        match &request.action {
            TradeAction::Quote { symbol } => info!(user, %symbol, "quote requested"),
            TradeAction::AddFunds { amount } => info!(user, %amount, "add funds requested"),
            TradeAction::Buy { symbol, amount } => {
                info!(user, %symbol, %amount, "buy requested")
            }
            TradeAction::Sell { symbol, amount } => {
                info!(user, %symbol, %amount, "sell requested")
            }
        }
        Ok(())
    }
}
