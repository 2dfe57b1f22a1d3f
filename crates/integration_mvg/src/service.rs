//! Nearest-station departure service
//!
//! Orchestrates the two-step pipeline: resolve the nearest station for a
//! coordinate, fetch its departures, render the report. "No station
//! nearby" is an expected outcome and surfaces as `Ok(None)` rather than
//! an error.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, instrument, warn};

use crate::client::{HttpMvgClient, MvgClient};
use crate::error::MvgError;
use crate::models::{DepartureBoard, TransportType};
use crate::report::render_board;

/// Options for a departure board query
#[derive(Debug, Clone)]
pub struct BoardOptions {
    /// Maximum number of departures (default: 8)
    pub limit: u8,
    /// Forward time shift in minutes, e.g. walking time to the stop
    /// (default: 0)
    pub offset_minutes: u32,
    /// Render one line per departure instead of two (default: false)
    pub compact: bool,
    /// Transport type filter overriding the configured products
    /// (default: None)
    pub transport_types: Option<Vec<TransportType>>,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            limit: 8,
            offset_minutes: 0,
            compact: false,
            transport_types: None,
        }
    }
}

impl BoardOptions {
    /// Set the maximum number of departures
    #[must_use]
    pub fn with_limit(mut self, limit: u8) -> Self {
        self.limit = limit;
        self
    }

    /// Set the forward time shift in minutes
    #[must_use]
    pub fn with_offset_minutes(mut self, offset_minutes: u32) -> Self {
        self.offset_minutes = offset_minutes;
        self
    }

    /// Switch between compact and two-line rendering
    #[must_use]
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Restrict the board to the given transport types
    #[must_use]
    pub fn with_transport_types(mut self, transport_types: Vec<TransportType>) -> Self {
        self.transport_types = Some(transport_types);
        self
    }
}

/// Service resolving the nearest station and its departure board
pub struct DepartureService {
    client: Arc<dyn MvgClient>,
}

impl fmt::Debug for DepartureService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepartureService").finish_non_exhaustive()
    }
}

impl DepartureService {
    /// Create a new departure service on top of an MVG client
    #[must_use]
    pub fn new(client: Arc<dyn MvgClient>) -> Self {
        Self { client }
    }

    /// Resolve the nearest station and fetch its departures
    ///
    /// Returns `Ok(None)` when no station exists near the coordinate;
    /// the departures endpoint is not queried in that case.
    ///
    /// # Errors
    ///
    /// Returns an error when a request fails or a response cannot be
    /// parsed.
    #[instrument(skip(self, options))]
    pub async fn nearest_board(
        &self,
        latitude: f64,
        longitude: f64,
        options: &BoardOptions,
    ) -> Result<Option<DepartureBoard>, MvgError> {
        let stations = self
            .client
            .find_nearby_stations(latitude, longitude)
            .await?;

        let Some(station) = stations.into_iter().next() else {
            warn!("No station near coordinate");
            return Ok(None);
        };

        debug!(global_id = %station.global_id, name = %station.name, "Station resolved");

        let departures = self
            .client
            .departures(
                &station.global_id,
                options.limit,
                options.offset_minutes,
                options.transport_types.clone(),
            )
            .await?;

        Ok(Some(DepartureBoard {
            station,
            departures,
        }))
    }

    /// Resolve the nearest station and render its departure board
    ///
    /// Maps the "no station nearby" case to a fixed message instead of
    /// an error, so the result is always printable.
    ///
    /// # Errors
    ///
    /// Returns an error when a request fails or a response cannot be
    /// parsed.
    pub async fn render_nearest(
        &self,
        latitude: f64,
        longitude: f64,
        options: &BoardOptions,
    ) -> Result<String, MvgError> {
        match self.nearest_board(latitude, longitude, options).await? {
            Some(board) => Ok(render_board(
                &board.station,
                &board.departures,
                options.compact,
                Utc::now(),
            )),
            None => Ok(String::from("❌ Keine Station in der Nähe gefunden")),
        }
    }
}

/// Fetch and render the departure board nearest to a coordinate
///
/// Convenience entry point constructing a default-configured client.
///
/// # Errors
///
/// Returns an error when the client cannot be built, a request fails or
/// a response cannot be parsed.
pub async fn nearby_departures(
    latitude: f64,
    longitude: f64,
    options: &BoardOptions,
) -> Result<String, MvgError> {
    let client = HttpMvgClient::with_defaults()?;
    let service = DepartureService::new(Arc::new(client));
    service.render_nearest(latitude, longitude, options).await
}
