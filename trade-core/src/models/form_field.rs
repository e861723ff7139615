use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a field holds a ticker symbol or a dollar amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Symbol,
    Amount,
}

/// The six draft slots of the trading form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    QuoteSymbol,
    AmountToAdd,
    StockToBuy,
    AmountToBuy,
    StockToSell,
    AmountToSell,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::QuoteSymbol,
        FormField::AmountToAdd,
        FormField::StockToBuy,
        FormField::AmountToBuy,
        FormField::StockToSell,
        FormField::AmountToSell,
    ];

    /// Stable key used in logs and serialized state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QuoteSymbol => "quoteSymbol",
            Self::AmountToAdd => "amountToAdd",
            Self::StockToBuy => "stockToBuy",
            Self::AmountToBuy => "amountToBuy",
            Self::StockToSell => "stockToSell",
            Self::AmountToSell => "amountToSell",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::QuoteSymbol | Self::StockToBuy | Self::StockToSell => FieldKind::Symbol,
            Self::AmountToAdd | Self::AmountToBuy | Self::AmountToSell => FieldKind::Amount,
        }
    }

    /// Human readable name for error reporting.
    pub fn label(&self) -> &'static str {
        match self {
            Self::QuoteSymbol => "Quote symbol",
            Self::AmountToAdd => "Amount to add",
            Self::StockToBuy => "Stock to buy",
            Self::AmountToBuy => "Amount to buy",
            Self::StockToSell => "Stock to sell",
            Self::AmountToSell => "Amount to sell",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self.kind() {
            FieldKind::Symbol => "Enter stock symbol",
            FieldKind::Amount => "Enter amount",
        }
    }

    /// Value a slot holds before the user has typed anything.
    pub fn initial_value(&self) -> &'static str {
        match self.kind() {
            FieldKind::Symbol => "",
            FieldKind::Amount => "0",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keys_and_labels_are_distinct() {
        let keys: BTreeSet<_> = FormField::ALL.iter().map(FormField::as_str).collect();
        let labels: BTreeSet<_> = FormField::ALL.iter().map(FormField::label).collect();
        assert_eq!(keys.len(), FormField::ALL.len());
        assert_eq!(labels.len(), FormField::ALL.len());
    }

    #[test]
    fn test_amount_fields_start_at_zero() {
        assert_eq!(FormField::AmountToBuy.initial_value(), "0");
        assert_eq!(FormField::StockToBuy.initial_value(), "");
        assert_eq!(FormField::AmountToSell.placeholder(), "Enter amount");
        assert_eq!(FormField::QuoteSymbol.placeholder(), "Enter stock symbol");
    }
}
