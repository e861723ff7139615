//! Submission handlers for the four trading forms.
//!
//! Each handler reads its fields from an immutable [`FormState`], validates
//! the amount where there is one, and returns the request to forward.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    models::{FormField, FormState, TradeAction, TradeRequest, UserSession},
    sinks::SinkError,
    validation::{AmountError, ValidationError, validate_amount},
};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{}: {source}", .field.label())]
    Validation {
        field: FormField,
        #[source]
        source: ValidationError,
    },

    #[error("{}: Please enter a smaller dollar amount", .field.label())]
    OutOfRange { field: FormField },

    #[error("Failed to forward request: {0}")]
    Sink(#[from] SinkError),
}

impl SubmitError {
    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { source, .. } => source.to_string(),
            Self::OutOfRange { .. } => AmountError::OutOfRange.to_string(),
            Self::Sink(e) => e.to_string(),
        }
    }

    pub fn validation_error(&self) -> Option<ValidationError> {
        match self {
            Self::Validation { source, .. } => Some(*source),
            Self::OutOfRange { .. } | Self::Sink(_) => None,
        }
    }
}

/// The four submit buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitAction {
    GetQuote,
    AddAmount,
    BuyStock,
    SellStock,
}

impl SubmitAction {
    pub const ALL: [SubmitAction; 4] = [
        SubmitAction::GetQuote,
        SubmitAction::AddAmount,
        SubmitAction::BuyStock,
        SubmitAction::SellStock,
    ];

    /// Fields read by this action, in display order.
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            Self::GetQuote => &[FormField::QuoteSymbol],
            Self::AddAmount => &[FormField::AmountToAdd],
            Self::BuyStock => &[FormField::StockToBuy, FormField::AmountToBuy],
            Self::SellStock => &[FormField::StockToSell, FormField::AmountToSell],
        }
    }

    pub fn form_title(&self) -> &'static str {
        match self {
            Self::GetQuote => "Get Quote:",
            Self::AddAmount => "Add Money to Account:",
            Self::BuyStock => "Buy Stock:",
            Self::SellStock => "Sell Stock:",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            Self::GetQuote => "Get Quote",
            Self::AddAmount => "Add Amount",
            Self::BuyStock => "Buy Stock",
            Self::SellStock => "Sell Stock",
        }
    }

    /// Runs the matching handler.
    pub fn run(
        &self,
        state: &FormState,
        session: &UserSession,
    ) -> Result<TradeRequest, SubmitError> {
        match self {
            Self::GetQuote => get_quote(state, session),
            Self::AddAmount => add_amount(state, session),
            Self::BuyStock => buy_stock(state, session),
            Self::SellStock => sell_stock(state, session),
        }
    }
}

fn validated(
    state: &FormState,
    field: FormField,
) -> Result<rust_decimal::Decimal, SubmitError> {
    validate_amount(state.get(field)).map_err(|e| match e {
        AmountError::Invalid(source) => SubmitError::Validation { field, source },
        AmountError::OutOfRange => SubmitError::OutOfRange { field },
    })
}

pub fn get_quote(
    state: &FormState,
    session: &UserSession,
) -> Result<TradeRequest, SubmitError> {
    let symbol = state.get(FormField::QuoteSymbol).to_string();
    Ok(TradeRequest::new(
        session.user_id.clone(),
        TradeAction::Quote { symbol },
    ))
}

pub fn add_amount(
    state: &FormState,
    session: &UserSession,
) -> Result<TradeRequest, SubmitError> {
    let amount = validated(state, FormField::AmountToAdd)?;
    Ok(TradeRequest::new(
        session.user_id.clone(),
        TradeAction::AddFunds { amount },
    ))
}

pub fn buy_stock(
    state: &FormState,
    session: &UserSession,
) -> Result<TradeRequest, SubmitError> {
    let amount = validated(state, FormField::AmountToBuy)?;
    let symbol = state.get(FormField::StockToBuy).to_string();
    Ok(TradeRequest::new(
        session.user_id.clone(),
        TradeAction::Buy { symbol, amount },
    ))
}

pub fn sell_stock(
    state: &FormState,
    session: &UserSession,
) -> Result<TradeRequest, SubmitError> {
    let amount = validated(state, FormField::AmountToSell)?;
    let symbol = state.get(FormField::StockToSell).to_string();
    Ok(TradeRequest::new(
        session.user_id.clone(),
        TradeAction::Sell { symbol, amount },
    ))
}
