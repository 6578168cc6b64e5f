//! Human-readable formatting for banner values.

/// Formats bytes with binary units (B, KiB, MiB, GiB, TiB).
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;
    const TIB: f64 = GIB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= TIB {
        format!("{:.2} TiB", bytes_f64 / TIB)
    } else if bytes_f64 >= GIB {
        format!("{:.2} GiB", bytes_f64 / GIB)
    } else if bytes_f64 >= MIB {
        format!("{:.2} MiB", bytes_f64 / MIB)
    } else if bytes_f64 >= KIB {
        format!("{:.2} KiB", bytes_f64 / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// Formats an uptime as `2d 3h 4m`, dropping leading zero units.
///
/// Anything under a minute is shown in seconds.
#[must_use]
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3600;
    let minutes = (seconds % 3600) / 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m")
    } else {
        format!("{seconds}s")
    }
}

/// Share of `total` that is used, clamped to `0.0..=1.0`.
#[must_use]
pub fn usage_fraction(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (used as f64 / total as f64).clamp(0.0, 1.0)
}

/// Formats `used / total` as a percentage with one decimal.
#[must_use]
pub fn format_percent(used: u64, total: u64) -> String {
    format!("{:.1}%", usage_fraction(used, total) * 100.0)
}

/// Renders a fixed-width usage bar such as `[####......]`.
#[must_use]
pub fn usage_bar(fraction: f64, width: usize) -> String {
    const FILL: &str = "#";
    const EMPTY: &str = ".";

    let fraction = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
    let filled = ((fraction * width as f64).round() as usize).min(width);
    format!("[{}{}]", FILL.repeat(filled), EMPTY.repeat(width - filled))
}

/// `"used / total (pct)"`, the common shape of the memory, swap and disk lines.
#[must_use]
pub fn format_usage(used: u64, total: u64) -> String {
    format!(
        "{} / {} ({})",
        format_bytes(used),
        format_bytes(total),
        format_percent(used, total)
    )
}
