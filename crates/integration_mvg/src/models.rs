//! MVG data models
//!
//! Typed representations of stations and departures as returned by the
//! MVG bgw-pt/v3 API. Wire field names are camelCase; departure instants
//! are epoch milliseconds.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A transit stop as returned by the nearby-stations endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Opaque upstream identifier, the key for departure queries
    pub global_id: String,
    /// Display name, e.g. "Hauptbahnhof"
    pub name: String,
    /// Locality, e.g. "München"
    pub place: String,
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.place)
    }
}

/// A single departure row as returned by the departures endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Departure {
    /// Scheduled departure instant
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub planned_departure_time: DateTime<Utc>,
    /// Best known departure instant, later than planned when delayed
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub realtime_departure_time: DateTime<Utc>,
    /// Delay in minutes (None = no delay information)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_in_minutes: Option<i64>,
    /// Whether realtime data is available for this departure
    #[serde(default)]
    pub realtime: bool,
    /// Transport type of the departing vehicle
    pub transport_type: TransportType,
    /// Short route label, e.g. "U2" or "54"
    pub label: String,
    /// Destination text
    pub destination: String,
    /// Whether the departure is cancelled
    #[serde(default)]
    pub cancelled: bool,
    /// Platform number, where the stop has platforms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<u32>,
    /// Free-text service messages
    #[serde(default)]
    pub messages: Vec<String>,
}

/// A resolved station together with its upcoming departures
///
/// Departures keep the upstream order; no local re-sorting happens.
#[derive(Debug, Clone, Serialize)]
pub struct DepartureBoard {
    /// The station the departures were queried for
    pub station: Station,
    /// Upcoming departures in upstream order
    pub departures: Vec<Departure>,
}

/// Transport type classification used by the MVG API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportType {
    /// U-Bahn
    Ubahn,
    /// S-Bahn
    Sbahn,
    /// Bus
    Bus,
    /// Tram
    Tram,
    /// Regionalbus
    RegionalBus,
    /// Regional and long-distance rail
    Bahn,
    /// Ferry
    Schiff,
    /// Transport type outside the known enumeration
    #[serde(other)]
    Unknown,
}

impl TransportType {
    /// Icon for report rendering
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Ubahn => "🚇",
            Self::Sbahn => "🚆",
            Self::Bus => "🚌",
            Self::Tram => "🚃",
            Self::RegionalBus => "🚐",
            Self::Bahn => "🚄",
            Self::Schiff => "⛴️",
            Self::Unknown => "🚏",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ubahn => "U-Bahn",
            Self::Sbahn => "S-Bahn",
            Self::Bus => "Bus",
            Self::Tram => "Tram",
            Self::RegionalBus => "Regionalbus",
            Self::Bahn => "Bahn",
            Self::Schiff => "Schiff",
            Self::Unknown => "ÖPNV",
        }
    }

    /// Filter token understood by the departures endpoint
    #[must_use]
    pub const fn api_name(&self) -> &'static str {
        match self {
            Self::Ubahn => "UBAHN",
            Self::Sbahn => "SBAHN",
            Self::Bus => "BUS",
            Self::Tram => "TRAM",
            Self::RegionalBus => "REGIONAL_BUS",
            Self::Bahn => "BAHN",
            Self::Schiff => "SCHIFF",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Map a CLI filter alias to a transport type
    ///
    /// Accepts short and long aliases ("U", "UBAHN", "REGIONAL", ...),
    /// case-insensitively; unknown tokens yield `None`.
    #[must_use]
    pub fn parse_alias(token: &str) -> Option<Self> {
        match token.trim().to_uppercase().as_str() {
            "U" | "UBAHN" => Some(Self::Ubahn),
            "S" | "SBAHN" => Some(Self::Sbahn),
            "BUS" => Some(Self::Bus),
            "TRAM" => Some(Self::Tram),
            "REGIONAL" | "REGIONAL_BUS" => Some(Self::RegionalBus),
            "BAHN" => Some(Self::Bahn),
            "SCHIFF" => Some(Self::Schiff),
            _ => None,
        }
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
