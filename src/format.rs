// Human-readable rendering of byte counts, rates, percentages and temperatures.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a byte count with binary scaling, e.g. `1536 -> "1.50 KB"`. Zero is `"0 B"`.
pub fn format_bytes(bytes: u64) -> String {
    scaled(bytes as f64)
}

/// Like [`format_bytes`], with an absent count rendered as `"0 B"`.
pub fn format_optional_bytes(bytes: Option<u64>) -> String {
    bytes.map(format_bytes).unwrap_or_else(|| scaled(0.0))
}

/// Formats a bytes-per-second rate, e.g. `"1.50 KB/s"`.
pub fn format_rate(bytes_per_sec: f64) -> String {
    format!("{}/s", scaled(bytes_per_sec))
}

/// Rounds to two decimal places.
pub fn round_percent(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub fn format_celsius(value: f32) -> String {
    format!("{value}°C")
}

/// Clock speed in GHz, as reported.
pub fn format_ghz(value: f64) -> String {
    format!("{value} GHz")
}

fn scaled(value: f64) -> String {
    if value.is_nan() || value <= 0.0 {
        return "0 B".into();
    }
    // Powers of 1024 are exact in f64, so boundaries land on their own unit.
    let mut i = 0;
    while i + 1 < UNITS.len() && value >= 1024f64.powi(i as i32 + 1) {
        i += 1;
    }
    format!("{:.2} {}", value / 1024f64.powi(i as i32), UNITS[i])
}
