//! # Client configuration — `clinic.toml`
//!
//! Settings the front-end needs before it can talk to the backend or render
//! money. Stored next to the session (key [`ClinicConfig::filename`]) so each
//! installation can point at its own API.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000/api"
//!
//! [ui]
//! page_size = 10
//! currency = "$"
//!
//! [payroll]
//! tax_rate = 0.10
//! overtime_multiplier = 1.5
//! standard_hours = 160.0
//! ```
//!
//! Every section and field has a default, so a missing or partial file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClinicConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub payroll: PayrollConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Rows per table page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_page_size() -> usize {
    10
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            currency: default_currency(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayrollConfig {
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: f64,
    /// Monthly hours covered by the base salary.
    #[serde(default = "default_standard_hours")]
    pub standard_hours: f64,
}

fn default_tax_rate() -> f64 {
    0.10
}

fn default_overtime_multiplier() -> f64 {
    1.5
}

fn default_standard_hours() -> f64 {
    160.0
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            overtime_multiplier: default_overtime_multiplier(),
            standard_hours: default_standard_hours(),
        }
    }
}

impl ClinicConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            ..Self::default()
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.ui.page_size = page_size;
        self
    }

    /// Key under which the config is persisted.
    pub fn filename() -> &'static str {
        "clinic.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClinicConfig::from_toml("").unwrap();
        assert_eq!(config, ClinicConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.ui.page_size, 10);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = ClinicConfig::from_toml("[payroll]\ntax_rate = 0.2\n").unwrap();
        assert_eq!(config.payroll.tax_rate, 0.2);
        assert_eq!(config.payroll.overtime_multiplier, 1.5);
        assert_eq!(config.ui.currency, "$");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClinicConfig::new("https://clinic.example/api").with_page_size(25);
        let text = config.to_toml().unwrap();
        assert!(text.contains("base_url = \"https://clinic.example/api\""));
        assert_eq!(ClinicConfig::from_toml(&text).unwrap(), config);
    }
}
