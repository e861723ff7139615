use std::io::Write;

use serde::Serialize;

use super::{ActionSink, SinkError};
use crate::models::{TradeRequest, WireBody};

#[derive(Serialize)]
struct Line<'a> {
    route: &'static str,
    body: WireBody<'a>,
}

/// Writes one `{"route": .., "body": ..}` object per request.
///
/// Each line is flushed as soon as it is written so a reader tailing the
/// output sees requests immediately.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ActionSink for JsonLinesSink<W> {
    fn dispatch(
        &mut self,
        request: &TradeRequest,
    ) -> Result<(), SinkError> {
        let line = Line {
            route: request.route(),
            body: request.wire_body(),
        };
        serde_json::to_writer(&mut self.writer, &line)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TradeAction;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_writes_one_line_per_request() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.dispatch(&TradeRequest::new(
            Some("u1".into()),
            TradeAction::Quote {
                symbol: "IBM".into(),
            },
        ))
        .unwrap();
        sink.dispatch(&TradeRequest::new(
            Some("u1".into()),
            TradeAction::Buy {
                symbol: "IBM".into(),
                amount: dec!(99.5),
            },
        ))
        .unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(
            lines,
            vec![
                serde_json::json!({
                    "route": "/quote",
                    "body": { "UserID": "u1", "Symbol": "IBM" }
                }),
                serde_json::json!({
                    "route": "/buy",
                    "body": { "UserID": "u1", "Symbol": "IBM", "Amount": 99.5 }
                }),
            ]
        );
    }
}
