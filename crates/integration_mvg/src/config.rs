//! MVG client configuration

use serde::{Deserialize, Serialize};

use crate::models::TransportType;

/// Configuration for the MVG departures client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)] // Product filter needs one flag per transport type
pub struct MvgConfig {
    /// Base URL of the MVG bgw-pt API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    ///
    /// The upstream rejects requests without a browser-like User-Agent.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Include U-Bahn departures
    #[serde(default = "default_true")]
    pub products_ubahn: bool,

    /// Include S-Bahn departures
    #[serde(default = "default_true")]
    pub products_sbahn: bool,

    /// Include bus departures
    #[serde(default = "default_true")]
    pub products_bus: bool,

    /// Include tram departures
    #[serde(default = "default_true")]
    pub products_tram: bool,

    /// Include regional and long-distance rail departures
    #[serde(default = "default_true")]
    pub products_bahn: bool,

    /// Include regional bus departures
    #[serde(default = "default_false")]
    pub products_regional_bus: bool,

    /// Include ferry departures
    #[serde(default = "default_false")]
    pub products_schiff: bool,
}

fn default_base_url() -> String {
    "https://www.mvg.de/api/bgw-pt/v3".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)".to_string()
}

const fn default_true() -> bool {
    true
}

const fn default_false() -> bool {
    false
}

impl Default for MvgConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            products_ubahn: true,
            products_sbahn: true,
            products_bus: true,
            products_tram: true,
            products_bahn: true,
            products_regional_bus: false,
            products_schiff: false,
        }
    }
}

impl MvgConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Derive the active transport type filter from the product flags
    ///
    /// The default flag set yields the filter `UBAHN,SBAHN,BUS,TRAM,BAHN`;
    /// regional bus and ferry are opt-in.
    #[must_use]
    pub fn transport_types(&self) -> Vec<TransportType> {
        let mut types = Vec::new();
        if self.products_ubahn {
            types.push(TransportType::Ubahn);
        }
        if self.products_sbahn {
            types.push(TransportType::Sbahn);
        }
        if self.products_bus {
            types.push(TransportType::Bus);
        }
        if self.products_tram {
            types.push(TransportType::Tram);
        }
        if self.products_bahn {
            types.push(TransportType::Bahn);
        }
        if self.products_regional_bus {
            types.push(TransportType::RegionalBus);
        }
        if self.products_schiff {
            types.push(TransportType::Schiff);
        }
        types
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if a field holds an unusable value.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.user_agent.is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        if self.transport_types().is_empty() {
            return Err("at least one transport type must be enabled".to_string());
        }
        Ok(())
    }
}
