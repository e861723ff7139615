use tracing::{debug, info, warn};

use crate::{
    handlers::{SubmitAction, SubmitError},
    models::{FieldEdit, FormField, FormState, TradeRequest, UserSession},
    sinks::{ActionSink, MemorySink},
};

/// Owns the draft state of the trading form and forwards validated
/// submissions to a sink.
pub struct TradingForm<S: ActionSink = Box<dyn ActionSink>> {
    state: FormState,
    session: UserSession,
    sink: S,
}

impl<S: ActionSink> TradingForm<S> {
    pub fn new(
        session: UserSession,
        sink: S,
    ) -> Self {
        Self {
            state: FormState::new(),
            session,
            sink,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn session(&self) -> &UserSession {
        &self.session
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn apply(
        &mut self,
        edit: FieldEdit,
    ) {
        debug!(field = %edit.field, value = %edit.value, "field edited");
        self.state.apply(edit);
    }

    pub fn edit(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) {
        self.apply(FieldEdit::new(field, value));
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Runs the handler for `action` against the current state.
    ///
    /// Requests that fail validation never reach the sink.
    pub fn submit(
        &mut self,
        action: SubmitAction,
    ) -> Result<TradeRequest, SubmitError> {
        let request = match action.run(&self.state, &self.session) {
            Ok(request) => request,
            Err(error) => {
                warn!(?action, %error, "submission rejected");
                return Err(error);
            }
        };

        self.sink.dispatch(&request)?;
        info!(?action, %request, "submission forwarded");
        Ok(request)
    }
}

impl TradingForm<MemorySink> {
    /// A form that records requests in memory instead of forwarding them.
    pub fn recording(session: UserSession) -> Self {
        Self::new(session, MemorySink::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::TradeAction, sinks::SinkError, validation::ValidationError};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    struct FailingSink;

    impl ActionSink for FailingSink {
        fn dispatch(
            &mut self,
            _request: &TradeRequest,
        ) -> Result<(), SinkError> {
            Err(SinkError::Io(std::io::Error::other("collaborator offline")))
        }
    }

    #[test]
    fn test_valid_submission_reaches_sink() {
        let mut form = TradingForm::recording(UserSession::new("u9"));
        form.edit(FormField::StockToBuy, "NVDA");
        form.edit(FormField::AmountToBuy, "1,000");

        let request = form.submit(SubmitAction::BuyStock).unwrap();

        assert_eq!(
            request.action,
            TradeAction::Buy {
                symbol: "NVDA".into(),
                amount: dec!(1000)
            }
        );
        assert_eq!(form.sink().requests(), &[request]);
    }

    #[test]
    fn test_rejected_submission_never_reaches_sink() {
        let mut form = TradingForm::recording(UserSession::anonymous());
        form.edit(FormField::AmountToAdd, "ten dollars");

        let err = form.submit(SubmitAction::AddAmount).unwrap_err();

        assert_eq!(err.validation_error(), Some(ValidationError::NotANumber));
        assert!(form.sink().requests().is_empty());
    }

    #[test]
    fn test_state_survives_submission() {
        let mut form = TradingForm::recording(UserSession::anonymous());
        form.edit(FormField::QuoteSymbol, "GOOG");
        form.submit(SubmitAction::GetQuote).unwrap();
        assert_eq!(form.state().get(FormField::QuoteSymbol), "GOOG");

        form.reset();
        assert_eq!(form.state(), &FormState::new());
    }

    #[test]
    fn test_sink_failure_is_reported() {
        let mut form = TradingForm::new(UserSession::anonymous(), FailingSink);
        let err = form.submit(SubmitAction::GetQuote).unwrap_err();
        assert!(matches!(err, SubmitError::Sink(_)));
        assert!(err.user_message().contains("collaborator offline"));
    }
}
