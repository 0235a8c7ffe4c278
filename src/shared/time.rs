use chrono::{DateTime, Utc};

/// Formats a timestamp for list rows: "Today", "Yesterday", "N days ago",
/// "N weeks ago", or the plain date beyond a month.
pub fn format_relative_date(timestamp: DateTime<Utc>) -> String {
    format_relative_date_at(timestamp, Utc::now())
}

fn format_relative_date_at(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = now.signed_duration_since(timestamp).num_days();

    if days <= 0 {
        "Today".to_string()
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        format!("{days} days ago")
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}
