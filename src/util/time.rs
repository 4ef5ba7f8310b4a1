use chrono::{DateTime, Local, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Render a timestamp the way an en-US clock reads in the local timezone,
/// ie "3:04:05 PM".
pub fn display_time(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%-I:%M:%S %p").to_string()
}
