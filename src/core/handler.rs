use crate::core::{LookupOutcome, LookupPort, Notices, PostalCode, UiPort};
use crate::utils::error::{LookupError, Result};

/// 一次觸發 = 讀取輸入 → 查詢 → 分類 → 顯示
///
/// Concurrent calls to [`LookupHandler::handle`] are not serialized: each
/// writes the display fields when its own response resolves, so the last
/// response to arrive wins.
pub struct LookupHandler<U: UiPort, L: LookupPort> {
    ui: U,
    lookup: L,
    notices: Notices,
}

impl<U: UiPort, L: LookupPort> LookupHandler<U, L> {
    pub fn new(ui: U, lookup: L) -> Self {
        Self::with_notices(ui, lookup, Notices::default())
    }

    pub fn with_notices(ui: U, lookup: L, notices: Notices) -> Self {
        Self {
            ui,
            lookup,
            notices,
        }
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Returns `Err(ValidationError)` for empty input; every other result is an outcome.
    pub async fn handle(&self) -> Result<LookupOutcome> {
        let raw = self.ui.read_input();

        let code = match PostalCode::parse(&raw) {
            Some(code) => code,
            None => {
                tracing::debug!("Empty postal code, skipping lookup");
                self.ui.show_notice(&self.notices.empty_input);
                return Err(LookupError::ValidationError {
                    message: self.notices.empty_input.clone(),
                });
            }
        };

        tracing::info!("Looking up postal code {}", code);
        let outcome = self.lookup.lookup(&code).await;

        match &outcome {
            LookupOutcome::Success(address) => {
                tracing::info!(
                    "✅ {} → {} {} {}",
                    code,
                    address.region,
                    address.locality,
                    address.remainder
                );
                self.ui.show_fields(address);
            }
            LookupOutcome::NotFound(message) => {
                tracing::info!("No address for {}: {}", code, message);
                self.ui.show_notice(message);
            }
            LookupOutcome::TransportError(cause) => {
                tracing::error!("❌ Lookup for {} failed: {}", code, cause);
                self.ui.show_notice(&self.notices.transport_failure);
            }
        }

        Ok(outcome)
    }
}
