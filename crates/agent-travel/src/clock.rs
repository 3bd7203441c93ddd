//! Current time in UTC

use chrono::{DateTime, Utc};

use crate::response::{Report, ToolResponse};

/// `2025-01-31 09:30:00 UTC`
pub fn format_utc(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Current UTC time, formatted with [`format_utc`]
pub fn current_time() -> String {
    format_utc(Utc::now())
}

/// `get_current_time` tool body
pub fn get_current_time() -> ToolResponse<Report> {
    ToolResponse::success(Report {
        report: current_time(),
    })
}
