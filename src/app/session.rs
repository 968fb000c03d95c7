use crate::adapters::TerminalUi;
use crate::core::handler::LookupHandler;
use crate::core::{LookupOutcome, LookupPort};
use crate::utils::error::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub found: usize,
    pub not_found: usize,
    pub transport_errors: usize,
    pub validation_errors: usize,
}

impl SessionSummary {
    pub fn total(&self) -> usize {
        self.found + self.not_found + self.transport_errors + self.validation_errors
    }

    fn record(&mut self, result: &Result<LookupOutcome>) {
        match result {
            Ok(LookupOutcome::Success(_)) => self.found += 1,
            Ok(LookupOutcome::NotFound(_)) => self.not_found += 1,
            Ok(LookupOutcome::TransportError(_)) => self.transport_errors += 1,
            Err(_) => self.validation_errors += 1,
        }
    }
}

/// 互動模式：每一行輸入觸發一次查詢
pub struct LookupSession<O: Write + Send, N: Write + Send, L: LookupPort> {
    handler: LookupHandler<TerminalUi<O, N>, L>,
}

impl<O: Write + Send, N: Write + Send, L: LookupPort> LookupSession<O, N, L> {
    pub fn new(handler: LookupHandler<TerminalUi<O, N>, L>) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &LookupHandler<TerminalUi<O, N>, L> {
        &self.handler
    }

    pub async fn run<R: AsyncBufRead + Unpin>(&self, reader: R) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
                break;
            }

            self.handler.ui().set_input(line);
            let result = self.handler.handle().await;
            summary.record(&result);
        }

        tracing::info!(
            "Session finished: {} lookups ({} found, {} not found, {} failed, {} empty)",
            summary.total(),
            summary.found,
            summary.not_found,
            summary.transport_errors,
            summary.validation_errors
        );

        Ok(summary)
    }
}
