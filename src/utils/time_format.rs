use chrono::{DateTime, Local, Utc};

/// Launch time in the server's local timezone.
pub fn format_launch_time(t: DateTime<Utc>) -> String {
    t.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S %Z").to_string()
}
