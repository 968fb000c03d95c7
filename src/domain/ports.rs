use crate::domain::model::{AddressResult, LookupOutcome, Notices, PostalCode};
use async_trait::async_trait;
use std::time::Duration;

/// 輸入欄位、三個顯示欄位與提示視窗
pub trait UiPort: Send + Sync {
    fn read_input(&self) -> String;
    fn show_fields(&self, address: &AddressResult);
    fn show_notice(&self, message: &str);
}

#[async_trait]
pub trait LookupPort: Send + Sync {
    async fn lookup(&self, code: &PostalCode) -> LookupOutcome;
}

/// 代理中繼設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRelay {
    pub endpoint: String,
    pub url_param: String,
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn query_param(&self) -> &str;
    fn proxy(&self) -> Option<ProxyRelay>;
    fn timeout(&self) -> Option<Duration>;
    fn notices(&self) -> Notices;
}
