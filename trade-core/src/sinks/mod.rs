//! Destinations for validated trade requests.
//!
//! The form never talks to a trading service directly; it hands each
//! request to an [`ActionSink`] chosen from configuration.

mod json_lines;
mod log;
mod memory;

use std::{fs::File, io::BufWriter};

use thiserror::Error;

use crate::{
    config::{SinkConfig, SinkKind},
    models::TradeRequest,
};

pub use json_lines::JsonLinesSink;
pub use log::LogSink;
pub use memory::MemorySink;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Receives every request that passed validation.
pub trait ActionSink {
    fn dispatch(
        &mut self,
        request: &TradeRequest,
    ) -> Result<(), SinkError>;
}

impl<S: ActionSink + ?Sized> ActionSink for Box<S> {
    fn dispatch(
        &mut self,
        request: &TradeRequest,
    ) -> Result<(), SinkError> {
        (**self).dispatch(request)
    }
}

/// Builds the sink described by `config`.
///
/// # Errors
/// * [`SinkError::Io`] when the JSON-lines file cannot be opened.
pub fn build_sink(config: &SinkConfig) -> Result<Box<dyn ActionSink>, SinkError> {
    match &config.kind {
        SinkKind::Log => Ok(Box::new(LogSink)),
        SinkKind::JsonLines => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(&config.path)?;
            tracing::debug!(path = %config.path.display(), "writing requests as JSON lines");
            Ok(Box::new(JsonLinesSink::new(BufWriter::new(file))))
        }
    }
}
