use std::collections::BTreeMap;

use gpui::{
    AppContext, ClickEvent, Context, Div, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window, div, green, red,
};
use gpui_component::{
    input::{Input, InputState},
    v_flex,
};
use trade_core::{FormField, SubmitAction, TradingForm};
use tracing::debug;

use super::{make_button, make_labeled_row};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Outcome of the last button press, shown under the forms.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub message: SharedString,
}

pub fn button_id(action: SubmitAction) -> &'static str {
    match action {
        SubmitAction::GetQuote => "get-quote",
        SubmitAction::AddAmount => "add-amount",
        SubmitAction::BuyStock => "buy-stock",
        SubmitAction::SellStock => "sell-stock",
    }
}

/// The four trading forms: one text input per [`FormField`] and one
/// button per [`SubmitAction`].
pub struct TradingPanel {
    inputs: BTreeMap<FormField, Entity<InputState>>,
    form: TradingForm,
    status: Option<StatusLine>,
}

impl TradingPanel {
    pub fn new(
        form: TradingForm,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let inputs = FormField::ALL
            .into_iter()
            .map(|field| {
                let state = cx.new(|input_cx| {
                    InputState::new(window, input_cx).placeholder(field.placeholder())
                });
                (field, state)
            })
            .collect();

        Self {
            inputs,
            form,
            status: None,
        }
    }

    /// Copies the inputs behind `action` into the form state, then submits.
    fn submit(
        &mut self,
        action: SubmitAction,
        cx: &mut Context<Self>,
    ) {
        for field in action.fields() {
            if let Some(input) = self.inputs.get(field) {
                let value = input.read(cx).value().to_string();
                self.form.edit(*field, value);
            }
        }

        self.status = Some(match self.form.submit(action) {
            Ok(request) => StatusLine {
                kind: StatusKind::Success,
                message: format!("Sent {request}").into(),
            },
            Err(error) => StatusLine {
                kind: StatusKind::Error,
                message: error.user_message().into(),
            },
        });
        debug!(?action, status = ?self.status, "panel status updated");
        cx.notify();
    }

    fn render_row(
        &self,
        action: SubmitAction,
        cx: &mut Context<Self>,
    ) -> Div {
        let row = action
            .fields()
            .iter()
            .filter_map(|field| self.inputs.get(field))
            .fold(make_labeled_row(action.form_title()), |row, state| {
                row.child(Input::new(state).flex_grow())
            });

        row.child(make_button(
            button_id(action),
            action.button_label(),
            cx.listener(move |this, _: &ClickEvent, _window, cx| this.submit(action, cx)),
        ))
    }

    fn render_status(&self) -> Div {
        match &self.status {
            Some(StatusLine {
                kind: StatusKind::Success,
                message,
            }) => div().text_color(green()).child(message.clone()),
            Some(StatusLine {
                kind: StatusKind::Error,
                message,
            }) => div().text_color(red()).child(message.clone()),
            None => div(),
        }
    }
}

impl Render for TradingPanel {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let rows = SubmitAction::ALL.map(|action| self.render_row(action, cx));

        v_flex()
            .gap_2()
            .size_full()
            .children(rows)
            .child(self.render_status())
    }
}
