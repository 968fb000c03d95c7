use crate::core::{AddressResult, ApiResponse, LookupOutcome};

/// API 以 status 400 表示參數錯誤（查無資料）
pub const API_STATUS_BAD_REQUEST: u16 = 400;

/// 將 HTTP 狀態碼與回應本體分類成查詢結果
pub fn classify(http_status: u16, body: &[u8], default_not_found: &str) -> LookupOutcome {
    if !(200..300).contains(&http_status) {
        return LookupOutcome::TransportError(format!("unexpected HTTP status {}", http_status));
    }

    let response: ApiResponse = match serde_json::from_slice(body) {
        Ok(response) => response,
        Err(e) => return LookupOutcome::TransportError(format!("undecodable response body: {}", e)),
    };

    classify_response(response, default_not_found)
}

pub fn classify_response(response: ApiResponse, default_not_found: &str) -> LookupOutcome {
    let not_found = |message: Option<String>| {
        LookupOutcome::NotFound(
            message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| default_not_found.to_string()),
        )
    };

    if response.status == API_STATUS_BAD_REQUEST {
        return not_found(response.message);
    }

    match response.results.and_then(|results| results.into_iter().next()) {
        Some(first) => {
            tracing::debug!(
                "First result: zipcode={:?}, prefcode={:?}, kana=({:?}, {:?}, {:?})",
                first.zipcode,
                first.prefcode,
                first.kana1,
                first.kana2,
                first.kana3
            );
            LookupOutcome::Success(AddressResult::from(first))
        }
        None => not_found(response.message),
    }
}
