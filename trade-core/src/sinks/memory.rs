use super::{ActionSink, SinkError};
use crate::models::TradeRequest;

/// Keeps every dispatched request in order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    requests: Vec<TradeRequest>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[TradeRequest] {
        &self.requests
    }
}

impl ActionSink for MemorySink {
    fn dispatch(
        &mut self,
        request: &TradeRequest,
    ) -> Result<(), SinkError> {
        self.requests.push(request.clone());
        Ok(())
    }
}
