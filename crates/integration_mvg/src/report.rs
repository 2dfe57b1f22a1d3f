//! Departure board rendering
//!
//! Pure formatting functions: relative departure times and the text
//! report in compact or two-line form. The clock is an explicit argument
//! so rendering stays deterministic.

use chrono::{DateTime, Utc};

use crate::models::{Departure, Station};

/// Format the time until departure relative to `now`
///
/// The difference is rounded to the nearest whole minute, ties rounding
/// toward the later minute. Departures due now or already gone render as
/// "jetzt". A positive delay is appended as " (+N)".
#[must_use]
pub fn relative_departure(
    departure_at: DateTime<Utc>,
    delay_minutes: Option<i64>,
    now: DateTime<Utc>,
) -> String {
    let minutes = ((departure_at - now).num_seconds() + 30).div_euclid(60);

    let mut time_str = match minutes {
        m if m <= 0 => String::from("jetzt"),
        1 => String::from("1 min"),
        m => format!("{m} min"),
    };

    if let Some(delay) = delay_minutes.filter(|d| *d > 0) {
        time_str.push_str(&format!(" (+{delay})"));
    }

    time_str
}

/// Render a departure board as a multi-line text block
///
/// The header names the station and its locality. Compact mode uses one
/// line per departure, full mode a detail line with the wait time and
/// platform. Departures render in input order.
#[must_use]
pub fn render_board(
    station: &Station,
    departures: &[Departure],
    compact: bool,
    now: DateTime<Utc>,
) -> String {
    let mut lines = vec![
        format!("📍 **{}** ({})", station.name, station.place),
        String::new(),
    ];

    if departures.is_empty() {
        lines.push(String::from("Keine Abfahrten gefunden"));
        return lines.join("\n");
    }

    for departure in departures {
        let icon = departure.transport_type.icon();
        let time_str = relative_departure(
            departure.realtime_departure_time,
            departure.delay_in_minutes,
            now,
        );

        let label = if departure.cancelled {
            format!("~~{}~~ ❌", departure.label)
        } else {
            departure.label.clone()
        };

        if compact {
            lines.push(format!(
                "{icon} {label} → {} ({time_str})",
                departure.destination
            ));
        } else {
            let platform = departure
                .platform
                .map(|p| format!(" · Gl. {p}"))
                .unwrap_or_default();
            lines.push(format!("{icon} **{label}** → {}", departure.destination));
            lines.push(format!("   ⏱ {time_str}{platform}"));
        }
    }

    lines.join("\n")
}
