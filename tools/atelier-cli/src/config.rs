//! CLI configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use atelier_commerce::cart::ShippingPolicy;
use atelier_commerce::Money;
use serde::{Deserialize, Serialize};

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 2] = ["atelier.toml", ".atelier.toml"];

/// Contents of `atelier.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtelierConfig {
    /// Local store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Checkout settings.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Review board settings.
    #[serde(default)]
    pub reviews: ReviewsConfig,
}

impl AtelierConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?;
        config
            .checkout
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }
}

/// Local store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Where stored values live (default: `~/.local/share/atelier`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Checkout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Simulated payment time.
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,

    /// Orders above this many dollars ship free.
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: i64,

    /// Shipping charge in dollars otherwise.
    #[serde(default = "default_flat_shipping")]
    pub flat_shipping: i64,
}

fn default_processing_delay_ms() -> u64 {
    2000
}

fn default_free_shipping_threshold() -> i64 {
    100
}

fn default_flat_shipping() -> i64 {
    12
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
            free_shipping_threshold: default_free_shipping_threshold(),
            flat_shipping: default_flat_shipping(),
        }
    }
}

impl CheckoutConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    /// Reject shipping amounts that are negative or too large to hold in cents.
    pub fn validate(&self) -> Result<()> {
        for (field, dollars) in [
            ("free_shipping_threshold", self.free_shipping_threshold),
            ("flat_shipping", self.flat_shipping),
        ] {
            if dollars < 0 {
                bail!("checkout.{field} must not be negative, got {dollars}");
            }
            if Money::try_usd(dollars).is_none() {
                bail!("checkout.{field} is too large: {dollars}");
            }
        }
        Ok(())
    }

    pub fn shipping_policy(&self) -> ShippingPolicy {
        ShippingPolicy {
            free_threshold: Money::usd(self.free_shipping_threshold),
            flat_rate: Money::usd(self.flat_shipping),
        }
    }
}

/// Review board configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewsConfig {
    /// Simulated submit latency.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
}

fn default_submit_delay_ms() -> u64 {
    800
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
        }
    }
}

impl ReviewsConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

/// Generate a default atelier.toml config file.
pub fn generate_default_config() -> String {
    r#"# Atelier storefront configuration

[store]
# data_dir = "~/.local/share/atelier"

[checkout]
processing_delay_ms = 2000
free_shipping_threshold = 100
flat_shipping = 12

[reviews]
submit_delay_ms = 800
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AtelierConfig::default();
        assert!(config.store.data_dir.is_none());
        assert_eq!(config.checkout.processing_delay(), Duration::from_secs(2));
        assert_eq!(config.checkout.shipping_policy(), ShippingPolicy::default());
        assert_eq!(config.reviews.submit_delay(), Duration::from_millis(800));
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: AtelierConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.checkout.processing_delay_ms, 2000);
        assert_eq!(config.checkout.free_shipping_threshold, 100);
        assert_eq!(config.reviews.submit_delay_ms, 800);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AtelierConfig = toml::from_str(
            r#"
[store]
data_dir = "/tmp/atelier"

[checkout]
flat_shipping = 5
"#,
        )
        .unwrap();
        assert_eq!(config.store.data_dir, Some(PathBuf::from("/tmp/atelier")));
        assert_eq!(config.checkout.flat_shipping, 5);
        assert_eq!(config.checkout.processing_delay_ms, 2000);
        assert_eq!(config.reviews.submit_delay_ms, 800);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atelier.toml");
        std::fs::write(&path, "[reviews]\nsubmit_delay_ms = 0\n").unwrap();

        let loaded = AtelierConfig::load(&path).unwrap();
        assert_eq!(loaded.reviews.submit_delay_ms, 0);
        assert!(AtelierConfig::load(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_load_rejects_out_of_range_shipping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atelier.toml");

        std::fs::write(&path, "[checkout]\nfree_shipping_threshold = 100000000000000000\n").unwrap();
        let err = AtelierConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("free_shipping_threshold"));

        std::fs::write(&path, "[checkout]\nflat_shipping = -1\n").unwrap();
        let err = AtelierConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("flat_shipping"));
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(CheckoutConfig::default().validate().is_ok());
    }
}
