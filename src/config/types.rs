use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rates: RatesConfig,
}

/// Rate service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesConfig {
    /// Endpoint serving the latest rate table.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Currency every rate is quoted against (default: "EUR").
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

fn default_endpoint() -> String {
    "http://api.fixer.io/latest".to_string()
}

fn default_base_currency() -> String {
    "EUR".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

impl RatesConfig {
    /// Full request URL with the base currency applied.
    ///
    /// Appends `base=` with `?` or `&` depending on whether the endpoint
    /// already carries a query string.
    pub fn url(&self) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}base={}", self.endpoint, separator, self.base_currency)
    }
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            base_currency: default_base_currency(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rates: RatesConfig::default(),
        }
    }
}
