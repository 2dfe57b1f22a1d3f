//! Departure board client for Munich public transport
//!
//! Resolves the station nearest to a coordinate via the public MVG
//! bgw-pt/v3 API and lists its upcoming departures, rendered as German
//! text (full or compact) or consumed as typed data.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern: [`MvgClient`] defines the
//! two upstream calls (nearby stations, departures), implemented by
//! [`HttpMvgClient`]. [`DepartureService`] orchestrates the pipeline and
//! [`render_board`] formats the result; both treat "no station nearby"
//! as an expected outcome, not an error.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_mvg::{BoardOptions, nearby_departures};
//!
//! let options = BoardOptions::default().with_limit(5);
//! let report = nearby_departures(48.154, 11.620, &options).await?;
//! println!("{report}");
//! ```

mod client;
mod config;
mod error;
mod models;
mod report;
mod service;

pub use client::{HttpMvgClient, MvgClient};
pub use config::MvgConfig;
pub use error::MvgError;
pub use models::{Departure, DepartureBoard, Station, TransportType};
pub use report::{relative_departure, render_board};
pub use service::{BoardOptions, DepartureService, nearby_departures};
