use serde::{Deserialize, Serialize};

/// 使用者輸入的郵遞區號（未經結構驗證，只檢查非空）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCode(String);

impl PostalCode {
    /// 去除前後空白；空字串回傳 None
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 顯示欄位的三個地址組成部分
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressResult {
    pub region: String,
    pub locality: String,
    pub remainder: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Success(AddressResult),
    NotFound(String),
    TransportError(String),
}

impl LookupOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LookupOutcome::Success(_))
    }
}

/// zipcloud 回應本體
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<ApiAddress>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiAddress {
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub address3: Option<String>,
    #[serde(default)]
    pub kana1: Option<String>,
    #[serde(default)]
    pub kana2: Option<String>,
    #[serde(default)]
    pub kana3: Option<String>,
    #[serde(default)]
    pub prefcode: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
}

impl From<ApiAddress> for AddressResult {
    fn from(address: ApiAddress) -> Self {
        Self {
            region: address.address1.unwrap_or_default(),
            locality: address.address2.unwrap_or_default(),
            remainder: address.address3.unwrap_or_default(),
        }
    }
}

/// 提示訊息文字
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notices {
    pub empty_input: String,
    pub not_found: String,
    pub transport_failure: String,
}

impl Default for Notices {
    fn default() -> Self {
        Self {
            empty_input: "郵便番号を入力してください。".to_string(),
            not_found: "該当するデータが見つかりませんでした".to_string(),
            transport_failure: "データの取得に失敗しました。通信環境を確認してください。"
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postal_code_trims_and_rejects_blank() {
        assert_eq!(PostalCode::parse(" 1000001\n").unwrap().as_str(), "1000001");
        assert!(PostalCode::parse("").is_none());
        assert!(PostalCode::parse("  \t").is_none());
    }

    #[test]
    fn test_missing_address_components_default_to_empty() {
        let address: ApiAddress =
            serde_json::from_value(serde_json::json!({"address1": "東京都"})).unwrap();
        let result = AddressResult::from(address);

        assert_eq!(result.region, "東京都");
        assert_eq!(result.locality, "");
        assert_eq!(result.remainder, "");
    }

    #[test]
    fn test_api_response_accepts_null_results_and_missing_message() {
        let body: ApiResponse =
            serde_json::from_str(r#"{"status": 200, "results": null}"#).unwrap();

        assert_eq!(body.status, 200);
        assert!(body.message.is_none());
        assert!(body.results.is_none());
    }
}
