use chrono::{DateTime, Utc};

/// Format a timestamp as a human-readable relative time string.
pub fn relative_time(dt: &DateTime<Utc>) -> String {
    relative_to(dt, &Utc::now())
}

pub fn relative_to(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(dt).num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    let days = hours / 24;
    if days < 30 {
        return format!("{}d ago", days);
    }

    if days < 365 {
        return format!("{}mo ago", days / 30);
    }

    format!("{}y ago", days / 365)
}
