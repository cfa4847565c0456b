#[cfg(feature = "web")]
pub mod api;
pub mod stats;

use chrono::NaiveDateTime;

/// Formats a server timestamp for display.
pub fn format_time(time: NaiveDateTime) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}
