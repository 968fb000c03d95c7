use crate::adapters::http::{
    DEFAULT_API_ENDPOINT, DEFAULT_PROXY_ENDPOINT, DEFAULT_PROXY_URL_PARAM, DEFAULT_QUERY_PARAM,
};
use crate::core::{ConfigProvider, Notices, ProxyRelay};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "postal-lookup")]
#[command(about = "Look up a Japanese address from its postal code")]
pub struct CliConfig {
    #[arg(help = "Postal code to look up; omit to start an interactive session")]
    pub zipcode: Option<String>,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = DEFAULT_QUERY_PARAM)]
    pub query_param: String,

    #[arg(long, default_value = DEFAULT_PROXY_ENDPOINT)]
    pub proxy_endpoint: String,

    #[arg(long, default_value = DEFAULT_PROXY_URL_PARAM)]
    pub proxy_param: String,

    #[arg(long, help = "Call the API directly without the proxy relay")]
    pub no_proxy: bool,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn query_param(&self) -> &str {
        &self.query_param
    }

    fn proxy(&self) -> Option<ProxyRelay> {
        if self.no_proxy {
            return None;
        }
        Some(ProxyRelay {
            endpoint: self.proxy_endpoint.clone(),
            url_param: self.proxy_param.clone(),
        })
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn notices(&self) -> Notices {
        Notices::default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("--api-endpoint", &self.api_endpoint)?;
        validate_non_empty_string("--query-param", &self.query_param)?;

        if !self.no_proxy {
            validate_url("--proxy-endpoint", &self.proxy_endpoint)?;
            validate_non_empty_string("--proxy-param", &self.proxy_param)?;
        }

        if let Some(timeout) = self.timeout_seconds {
            validate_range("--timeout-seconds", timeout, 1, 300)?;
        }

        Ok(())
    }
}
