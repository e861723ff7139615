pub mod config;
pub mod form;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod sinks;
pub mod validation;

pub use config::{ConfigError, TradingConfig};
pub use form::TradingForm;
pub use handlers::{SubmitAction, SubmitError, add_amount, buy_stock, get_quote, sell_stock};
pub use models::*;
pub use validation::{
    AmountError, ValidationError, check_amount, is_positive_number, validate_amount,
};
