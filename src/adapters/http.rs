use crate::core::classify::classify;
use crate::core::{ConfigProvider, LookupOutcome, LookupPort, PostalCode};
use crate::utils::error::Result;
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

pub const DEFAULT_API_ENDPOINT: &str = "https://zipcloud.ibsnet.co.jp/api/search";
pub const DEFAULT_QUERY_PARAM: &str = "zipcode";
pub const DEFAULT_PROXY_ENDPOINT: &str = "https://api.allorigins.win/raw";
pub const DEFAULT_PROXY_URL_PARAM: &str = "url";

#[derive(Debug, Clone)]
struct Relay {
    endpoint: Url,
    url_param: String,
}

/// 透過代理中繼呼叫 zipcloud 郵遞區號 API
#[derive(Debug, Clone)]
pub struct ZipcloudClient {
    client: Client,
    api_endpoint: Url,
    query_param: String,
    relay: Option<Relay>,
    default_not_found: String,
}

impl ZipcloudClient {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        validate_url("api.endpoint", config.api_endpoint())?;
        let api_endpoint = Url::parse(config.api_endpoint())?;

        let relay = match config.proxy() {
            Some(proxy) => {
                validate_url("proxy.endpoint", &proxy.endpoint)?;
                Some(Relay {
                    endpoint: Url::parse(&proxy.endpoint)?,
                    url_param: proxy.url_param,
                })
            }
            None => None,
        };

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_endpoint,
            query_param: config.query_param().to_string(),
            relay,
            default_not_found: config.notices().not_found,
        })
    }

    /// API 本身的查詢網址
    pub fn target_url(&self, code: &PostalCode) -> Url {
        let mut url = self.api_endpoint.clone();
        url.query_pairs_mut()
            .append_pair(&self.query_param, code.as_str());
        url
    }

    /// 實際送出的網址；有設定代理時將目標網址編碼後放入代理參數
    pub fn request_url(&self, code: &PostalCode) -> Url {
        let target = self.target_url(code);
        match &self.relay {
            Some(relay) => {
                let mut url = relay.endpoint.clone();
                url.query_pairs_mut()
                    .append_pair(&relay.url_param, target.as_str());
                url
            }
            None => target,
        }
    }
}

#[async_trait]
impl LookupPort for ZipcloudClient {
    async fn lookup(&self, code: &PostalCode) -> LookupOutcome {
        let url = self.request_url(code);
        tracing::debug!("Making API request to: {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return LookupOutcome::TransportError(format!("request failed: {}", e)),
        };

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                return LookupOutcome::TransportError(format!("failed to read response: {}", e))
            }
        };

        classify(status.as_u16(), &body, &self.default_not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Notices, ProxyRelay};
    use std::time::Duration;

    struct MockConfig {
        api_endpoint: String,
        proxy: Option<ProxyRelay>,
    }

    impl MockConfig {
        fn new(api_endpoint: &str, proxy: Option<ProxyRelay>) -> Self {
            Self {
                api_endpoint: api_endpoint.to_string(),
                proxy,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn api_endpoint(&self) -> &str {
            &self.api_endpoint
        }

        fn query_param(&self) -> &str {
            DEFAULT_QUERY_PARAM
        }

        fn proxy(&self) -> Option<ProxyRelay> {
            self.proxy.clone()
        }

        fn timeout(&self) -> Option<Duration> {
            Some(Duration::from_secs(5))
        }

        fn notices(&self) -> Notices {
            Notices::default()
        }
    }

    fn allorigins() -> Option<ProxyRelay> {
        Some(ProxyRelay {
            endpoint: DEFAULT_PROXY_ENDPOINT.to_string(),
            url_param: DEFAULT_PROXY_URL_PARAM.to_string(),
        })
    }

    #[test]
    fn test_target_url_embeds_code() {
        let client =
            ZipcloudClient::from_config(&MockConfig::new(DEFAULT_API_ENDPOINT, None)).unwrap();
        let code = PostalCode::parse("1000001").unwrap();

        assert_eq!(
            client.target_url(&code).as_str(),
            "https://zipcloud.ibsnet.co.jp/api/search?zipcode=1000001"
        );
        assert_eq!(client.request_url(&code), client.target_url(&code));
    }

    #[test]
    fn test_request_url_wraps_target_for_relay() {
        let client =
            ZipcloudClient::from_config(&MockConfig::new(DEFAULT_API_ENDPOINT, allorigins()))
                .unwrap();
        let code = PostalCode::parse("1000001").unwrap();

        assert_eq!(
            client.request_url(&code).as_str(),
            "https://api.allorigins.win/raw?url=https%3A%2F%2Fzipcloud.ibsnet.co.jp%2Fapi%2Fsearch%3Fzipcode%3D1000001"
        );
    }

    #[test]
    fn test_code_is_percent_encoded() {
        let client =
            ZipcloudClient::from_config(&MockConfig::new(DEFAULT_API_ENDPOINT, None)).unwrap();
        let code = PostalCode::parse("100&x=1").unwrap();

        let url = client.target_url(&code);
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(pairs, vec![("zipcode".to_string(), "100&x=1".to_string())]);
    }

    #[test]
    fn test_invalid_endpoints_are_rejected() {
        assert!(ZipcloudClient::from_config(&MockConfig::new("not a url", None)).is_err());

        let bad_proxy = Some(ProxyRelay {
            endpoint: "ftp://relay.example.com".to_string(),
            url_param: "url".to_string(),
        });
        assert!(
            ZipcloudClient::from_config(&MockConfig::new(DEFAULT_API_ENDPOINT, bad_proxy))
                .is_err()
        );
    }
}
