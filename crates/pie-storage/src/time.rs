use jiff::Timestamp;

/// Human-readable age of `then` relative to `now`, as shown next to a
/// restored draft. Anything a day or older is shown as a UTC date and time.
pub fn time_ago(then: Timestamp, now: Timestamp) -> String {
    let seconds = now.as_second() - then.as_second();
    match seconds {
        s if s < 60 => "just now".to_string(),
        s if s < 120 => "1 minute ago".to_string(),
        s if s < 3_600 => format!("{} minutes ago", s / 60),
        s if s < 7_200 => "1 hour ago".to_string(),
        s if s < 86_400 => format!("{} hours ago", s / 3_600),
        _ => then.strftime("%Y-%m-%d %H:%M UTC").to_string(),
    }
}
