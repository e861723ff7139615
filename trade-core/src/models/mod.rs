mod form_field;
mod form_state;
mod session;
mod trade_request;

pub use form_field::{FieldKind, FormField};
pub use form_state::{FieldEdit, FormState};
pub use session::UserSession;
pub use trade_request::{TradeAction, TradeRequest, WireBody};
