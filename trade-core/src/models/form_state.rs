//! Draft values for every input on the trading form.
//!
//! The state is a plain value: edits arrive as [`FieldEdit`] messages and
//! submission handlers only ever see a shared reference to it.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use super::FormField;

/// A single keystroke-level update to one slot of the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEdit {
    pub field: FormField,
    pub value: String,
}

impl FieldEdit {
    pub fn new(
        field: FormField,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Mapping from each [`FormField`] to its current string value.
///
/// Every slot is always present; a fresh state holds the fields'
/// [`FormField::initial_value`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    values: BTreeMap<FormField, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            values: FormField::ALL
                .iter()
                .map(|field| (*field, field.initial_value().to_string()))
                .collect(),
        }
    }

    /// Current draft value of `field`.
    pub fn get(
        &self,
        field: FormField,
    ) -> &str {
        self.values
            .get(&field)
            .map(String::as_str)
            .unwrap_or_else(|| field.initial_value())
    }

    /// Replaces the value of one slot, leaving every other slot untouched.
    pub fn apply(
        &mut self,
        edit: FieldEdit,
    ) {
        self.values.insert(edit.field, edit.value);
    }

    pub fn set(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) {
        self.apply(FieldEdit::new(field, value));
    }

    /// Consuming form of [`FormState::apply`], handy when folding a stream of edits.
    pub fn with_edit(
        mut self,
        edit: FieldEdit,
    ) -> Self {
        self.apply(edit);
        self
    }

    /// Returns every slot to its initial value.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.values
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<FieldEdit> for FormState {
    fn from_iter<I: IntoIterator<Item = FieldEdit>>(edits: I) -> Self {
        edits.into_iter().fold(Self::new(), Self::with_edit)
    }
}

impl fmt::Display for FormState {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (field, value) in self.iter() {
            writeln!(f, "{:<14}{:?}", format!("{field}:"), value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_state_holds_initial_values() {
        let state = FormState::new();
        assert_eq!(state.get(FormField::QuoteSymbol), "");
        assert_eq!(state.get(FormField::AmountToAdd), "0");
        assert_eq!(state.iter().count(), FormField::ALL.len());
    }

    #[test]
    fn test_edit_touches_only_its_slot() {
        for edited in FormField::ALL {
            let before = FormState::new();
            let after = before.clone().with_edit(FieldEdit::new(edited, "XYZ 12"));

            for field in FormField::ALL {
                if field == edited {
                    assert_eq!(after.get(field), "XYZ 12");
                } else {
                    assert_eq!(
                        after.get(field),
                        before.get(field),
                        "editing {edited} changed {field}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_later_edit_wins() {
        let state: FormState = [
            FieldEdit::new(FormField::StockToSell, "A"),
            FieldEdit::new(FormField::StockToSell, "AB"),
            FieldEdit::new(FormField::StockToSell, "ABC"),
        ]
        .into_iter()
        .collect();

        assert_eq!(state.get(FormField::StockToSell), "ABC");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = FormState::new();
        state.set(FormField::AmountToBuy, "250");
        state.set(FormField::StockToBuy, "MSFT");
        state.reset();
        assert_eq!(state, FormState::default());
    }
}
