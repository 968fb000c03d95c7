use crate::adapters::http::{
    DEFAULT_API_ENDPOINT, DEFAULT_PROXY_ENDPOINT, DEFAULT_PROXY_URL_PARAM, DEFAULT_QUERY_PARAM,
};
use crate::core::{ConfigProvider, Notices, ProxyRelay};
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub proxy: ProxyConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub notices: NoticesConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint: Option<String>,
    pub query_param: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProxyConfig {
    pub enabled: Option<bool>,
    pub endpoint: Option<String>,
    pub url_param: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoticesConfig {
    pub empty_input: Option<String>,
    pub not_found: Option<String>,
    pub transport_failure: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LookupError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LookupError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ZIPCLOUD_ENDPOINT})；未設定的變數保留原文
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LookupError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn proxy_enabled(&self) -> bool {
        self.proxy.enabled.unwrap_or(true)
    }

    fn proxy_endpoint(&self) -> &str {
        self.proxy
            .endpoint
            .as_deref()
            .unwrap_or(DEFAULT_PROXY_ENDPOINT)
    }

    fn proxy_url_param(&self) -> &str {
        self.proxy
            .url_param
            .as_deref()
            .unwrap_or(DEFAULT_PROXY_URL_PARAM)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        self.api.endpoint.as_deref().unwrap_or(DEFAULT_API_ENDPOINT)
    }

    fn query_param(&self) -> &str {
        self.api.query_param.as_deref().unwrap_or(DEFAULT_QUERY_PARAM)
    }

    fn proxy(&self) -> Option<ProxyRelay> {
        if !self.proxy_enabled() {
            return None;
        }
        Some(ProxyRelay {
            endpoint: self.proxy_endpoint().to_string(),
            url_param: self.proxy_url_param().to_string(),
        })
    }

    fn timeout(&self) -> Option<Duration> {
        self.http.timeout_seconds.map(Duration::from_secs)
    }

    fn notices(&self) -> Notices {
        let defaults = Notices::default();
        Notices {
            empty_input: self
                .notices
                .empty_input
                .clone()
                .unwrap_or(defaults.empty_input),
            not_found: self.notices.not_found.clone().unwrap_or(defaults.not_found),
            transport_failure: self
                .notices
                .transport_failure
                .clone()
                .unwrap_or(defaults.transport_failure),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.endpoint", self.api_endpoint())?;
        validate_non_empty_string("api.query_param", self.query_param())?;

        if self.proxy_enabled() {
            validate_url("proxy.endpoint", self.proxy_endpoint())?;
            validate_non_empty_string("proxy.url_param", self.proxy_url_param())?;
        }

        if let Some(timeout) = self.http.timeout_seconds {
            validate_range("http.timeout_seconds", timeout, 1, 300)?;
        }

        let notices = self.notices();
        for (field, text) in [
            ("notices.empty_input", &notices.empty_input),
            ("notices.not_found", &notices.not_found),
            ("notices.transport_failure", &notices.transport_failure),
        ] {
            validate_non_empty_string(field, text)?;
        }

        Ok(())
    }
}
