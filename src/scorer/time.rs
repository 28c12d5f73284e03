/// Converts `mm:ss` or `hh:mm:ss` to total seconds.
///
/// Any other shape, the empty string included, is `Some(0)`. Sub-fields are
/// trimmed, an empty sub-field counts as zero and ranges are not checked, so
/// `"1:75"` is 135 seconds. Sub-fields may carry decimals; a fractional total
/// is rounded up to the next whole second. A sub-field that is not a finite
/// number, or a total beyond `i64`, gives `None`.
pub fn time_to_seconds(time: &str) -> Option<i64> {
    if time.is_empty() {
        return Some(0);
    }

    let parts: Vec<&str> = time.split(':').collect();
    let total = match parts.as_slice() {
        [m, s] => field(m)? * 60.0 + field(s)?,
        [h, m, s] => field(h)? * 3600.0 + field(m)? * 60.0 + field(s)?,
        _ => return Some(0),
    };

    // Rounding up keeps `x <= threshold` exact against whole-second thresholds.
    let secs = total.ceil();
    if !secs.is_finite() || secs.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(secs as i64)
}

fn field(part: &str) -> Option<f64> {
    let p = part.trim();
    if p.is_empty() {
        return Some(0.0);
    }
    p.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `m:ss` under an hour, `h:mm:ss` from there on.
pub fn format_time(seconds: u64) -> String {
    if seconds < 3600 {
        let mins = seconds / 60;
        let secs = seconds % 60;
        format!("{}:{:02}", mins, secs)
    } else {
        let hours = seconds / 3600;
        let mins = (seconds % 3600) / 60;
        let secs = seconds % 60;
        format!("{}:{:02}:{:02}", hours, mins, secs)
    }
}
