use chrono::{DateTime, FixedOffset, Utc};
use minijinja::{Error, ErrorKind};

use crate::models::parse_iso8601;

/// `{{ record.lastModified | humanize_ts }}` → "3 hours ago".
pub fn humanize_ts(value: &str) -> Result<String, Error> {
    let then = parse_iso8601(value)
        .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))?;
    Ok(humanize(then, Utc::now()))
}

/// Relative phrase for the distance between `then` and `now`.
pub fn humanize(then: DateTime<FixedOffset>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then);
    let seconds = delta.num_seconds();
    let future = seconds < 0;
    let seconds = seconds.unsigned_abs();

    if seconds == 0 {
        return "now".to_string();
    }

    let phrase = match seconds {
        1 => "a second".to_string(),
        2..=59 => format!("{} seconds", seconds),
        60..=119 => "a minute".to_string(),
        120..=3_599 => format!("{} minutes", seconds / 60),
        3_600..=7_199 => "an hour".to_string(),
        7_200..=86_399 => format!("{} hours", seconds / 3_600),
        _ => {
            let days = seconds / 86_400;
            match days {
                1 => "a day".to_string(),
                2..=29 => format!("{} days", days),
                30..=364 => match days / 30 {
                    1 => "a month".to_string(),
                    months => format!("{} months", months),
                },
                _ => match days / 365 {
                    1 => "a year".to_string(),
                    years => format!("{} years", years),
                },
            }
        }
    };

    if future {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}
