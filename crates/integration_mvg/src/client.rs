//! MVG departures client
//!
//! HTTP client for the public MVG bgw-pt/v3 API: nearest-station lookup
//! by coordinate and departure queries by station identifier.

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::MvgConfig;
use crate::error::MvgError;
use crate::models::{Departure, Station, TransportType};

/// Trait for MVG API clients
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MvgClient: Send + Sync {
    /// Find stations near a coordinate, ordered by proximity
    ///
    /// The upstream ordering is trusted; callers interested in the
    /// nearest stop take the first element.
    async fn find_nearby_stations(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Station>, MvgError>;

    /// Fetch upcoming departures for a station
    ///
    /// `transport_types` overrides the configured product filter for this
    /// call; `None` uses the configured defaults.
    async fn departures(
        &self,
        global_id: &str,
        limit: u8,
        offset_minutes: u32,
        transport_types: Option<Vec<TransportType>>,
    ) -> Result<Vec<Departure>, MvgError>;
}

/// HTTP client for the MVG bgw-pt/v3 API
#[derive(Debug)]
pub struct HttpMvgClient {
    client: Client,
    config: MvgConfig,
}

impl HttpMvgClient {
    /// Create a new MVG client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP
    /// client cannot be initialized.
    pub fn new(config: &MvgConfig) -> Result<Self, MvgError> {
        config.validate().map_err(MvgError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| MvgError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, MvgError> {
        Self::new(&MvgConfig::default())
    }

    /// Check that a coordinate lies within the valid WGS84 range
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), MvgError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(MvgError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Parse the JSON station array returned by the nearby endpoint
    fn parse_stations_response(body: &str) -> Result<Vec<Station>, MvgError> {
        serde_json::from_str(body).map_err(|e| MvgError::ParseError(e.to_string()))
    }

    /// Parse the JSON departure array returned by the departures endpoint
    fn parse_departures_response(body: &str) -> Result<Vec<Departure>, MvgError> {
        serde_json::from_str(body).map_err(|e| MvgError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl MvgClient for HttpMvgClient {
    #[instrument(skip(self))]
    async fn find_nearby_stations(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Station>, MvgError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = format!("{}/stations/nearby", self.config.base_url);
        let params = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
        ];

        debug!(?url, "Searching nearby stations");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MvgError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    MvgError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MvgError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MvgError::ParseError(e.to_string()))?;
        let stations = Self::parse_stations_response(&body)?;

        if stations.is_empty() {
            warn!("No stations found");
        }

        debug!(count = stations.len(), "Stations found");
        Ok(stations)
    }

    #[instrument(skip(self, transport_types))]
    async fn departures(
        &self,
        global_id: &str,
        limit: u8,
        offset_minutes: u32,
        transport_types: Option<Vec<TransportType>>,
    ) -> Result<Vec<Departure>, MvgError> {
        let url = format!("{}/departures", self.config.base_url);

        let types = transport_types.unwrap_or_else(|| self.config.transport_types());
        let type_filter = types
            .iter()
            .map(TransportType::api_name)
            .collect::<Vec<_>>()
            .join(",");

        let params = [
            ("globalId", global_id.to_string()),
            ("limit", limit.to_string()),
            ("offsetInMinutes", offset_minutes.to_string()),
            ("transportTypes", type_filter),
        ];

        debug!(?url, "Fetching departures");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MvgError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    MvgError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MvgError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MvgError::ParseError(e.to_string()))?;
        let departures = Self::parse_departures_response(&body)?;

        debug!(count = departures.len(), "Departures fetched");
        Ok(departures)
    }
}
