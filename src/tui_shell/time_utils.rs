use std::sync::OnceLock;

use time::format_description::FormatItem;

use super::*;

fn ts_ui_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse(
            "[year]-[month repr:numerical padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero]Z",
        )
        .unwrap_or_default()
    })
}

fn fmt_abs(dt: OffsetDateTime) -> String {
    dt.format(ts_ui_format())
        .unwrap_or_else(|_| dt.unix_timestamp().to_string())
}

fn fmt_since(dt: OffsetDateTime, now: OffsetDateTime) -> Option<String> {
    let secs = (now - dt).whole_seconds();

    // Clock skew between client and server.
    if secs < 0 {
        return None;
    }

    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;

    let s = if secs < 60 {
        "just now".to_string()
    } else if mins < 60 {
        format!("{}m ago", mins)
    } else if hours < 48 {
        format!("{}h ago", hours)
    } else if days < 14 {
        format!("{}d ago", days)
    } else {
        return None;
    };
    Some(s)
}

/// Relative time for recent records, an absolute date otherwise.
pub(super) fn fmt_created(ts_ms: i64, now: OffsetDateTime) -> String {
    let Some(dt) = i128::from(ts_ms)
        .checked_mul(1_000_000)
        .and_then(|n| OffsetDateTime::from_unix_timestamp_nanos(n).ok())
    else {
        return String::new();
    };
    fmt_since(dt, now).unwrap_or_else(|| fmt_abs(dt))
}

#[cfg(test)]
#[path = "../tests/tui_shell/time_utils_tests.rs"]
mod tests;
