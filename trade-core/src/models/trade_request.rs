use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A validated action produced by one of the submission handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TradeAction {
    Quote { symbol: String },
    AddFunds { amount: Decimal },
    Buy { symbol: String, amount: Decimal },
    Sell { symbol: String, amount: Decimal },
}

impl TradeAction {
    /// Transaction server route this action is meant for.
    pub fn route(&self) -> &'static str {
        match self {
            Self::Quote { .. } => "/quote",
            Self::AddFunds { .. } => "/add",
            Self::Buy { .. } => "/buy",
            Self::Sell { .. } => "/sell",
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            Self::Quote { symbol } | Self::Buy { symbol, .. } | Self::Sell { symbol, .. } => {
                Some(symbol)
            }
            Self::AddFunds { .. } => None,
        }
    }
}

impl fmt::Display for TradeAction {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Quote { symbol } => write!(f, "quote for symbol {symbol:?}"),
            Self::AddFunds { amount } => write!(f, "add ${amount} to account"),
            Self::Buy { symbol, amount } => write!(f, "buy ${amount} of {symbol:?}"),
            Self::Sell { symbol, amount } => write!(f, "sell ${amount} of {symbol:?}"),
        }
    }
}

/// Envelope handed to an [`ActionSink`](crate::sinks::ActionSink).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRequest {
    pub user_id: Option<String>,
    pub action: TradeAction,
}

impl TradeRequest {
    pub fn new(
        user_id: Option<String>,
        action: TradeAction,
    ) -> Self {
        Self { user_id, action }
    }

    pub fn route(&self) -> &'static str {
        self.action.route()
    }

    /// JSON body in the shape the transaction server decodes.
    pub fn wire_body(&self) -> WireBody<'_> {
        let user_id = self.user_id.as_deref().unwrap_or_default();
        match &self.action {
            TradeAction::Quote { symbol } => WireBody {
                user_id,
                symbol: Some(symbol),
                amount: None,
                balance: None,
            },
            TradeAction::AddFunds { amount } => WireBody {
                user_id,
                symbol: None,
                amount: None,
                balance: Some(*amount),
            },
            TradeAction::Buy { symbol, amount } | TradeAction::Sell { symbol, amount } => {
                WireBody {
                    user_id,
                    symbol: Some(symbol),
                    amount: Some(*amount),
                    balance: None,
                }
            }
        }
    }
}

impl fmt::Display for TradeRequest {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match &self.user_id {
            Some(user) => write!(f, "{} (user {user})", self.action),
            None => write!(f, "{} (no user)", self.action),
        }
    }
}

/// Request body keyed the way the transaction server expects.
///
/// Amounts go out as JSON numbers since the server decodes them as floats.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireBody<'a> {
    #[serde(rename = "UserID")]
    pub user_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'a str>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub amount: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub balance: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_routes_match_transaction_server() {
        let buy = TradeAction::Buy {
            symbol: "ABC".into(),
            amount: dec!(10),
        };
        assert_eq!(buy.route(), "/buy");
        assert_eq!(TradeAction::AddFunds { amount: dec!(1) }.route(), "/add");
    }

    #[test]
    fn test_add_funds_body_uses_balance_key() {
        let request = TradeRequest::new(
            Some("u1".into()),
            TradeAction::AddFunds {
                amount: dec!(125.5),
            },
        );
        let json = serde_json::to_value(request.wire_body()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "UserID": "u1", "Balance": 125.5 })
        );
    }

    #[test]
    fn test_sell_body_without_user() {
        let request = TradeRequest::new(
            None,
            TradeAction::Sell {
                symbol: "XYZ".into(),
                amount: dec!(40),
            },
        );
        let json = serde_json::to_value(request.wire_body()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "UserID": "", "Symbol": "XYZ", "Amount": 40.0 })
        );
    }
}
