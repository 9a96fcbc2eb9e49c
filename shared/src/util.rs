use chrono::NaiveDate;

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Today's date in local time, used for record creation dates
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Format a byte count the way the document library shows file sizes (`"2.40 MB"`).
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}
