/// Unit ladder for 1024-based file sizes.
const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable byte count: `0` becomes `"0 Bytes"`, `1024` becomes
/// `"1 KB"`, `1536` becomes `"1.5 KB"`. Values are rounded to two decimals
/// with trailing zeros dropped. The unit is clamped at GB, so anything at
/// or beyond 1024 GB still formats as a (large) GB value.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    // floor(log1024(bytes)) without going through floats.
    let unit = ((bytes.ilog2() / 10) as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(unit as i32);
    format!("{} {}", trim_decimals(value), UNITS[unit])
}

/// Two-decimal rendering with trailing zeros (and a bare point) dropped,
/// matching how the percentage and size labels read.
pub(crate) fn trim_decimals(value: f64) -> String {
    let mut text = format!("{value:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}
