// panelfetch-core/tests/format_tests.rs

use panelfetch_core::{format_bytes, format_percent, format_uptime, format_usage};

#[test]
fn test_format_bytes() {
    assert_eq!(format_bytes(0), "0 B");
    assert_eq!(format_bytes(1023), "1023 B");
    assert_eq!(format_bytes(1024), "1.00 KiB");
    assert_eq!(format_bytes(1536), "1.50 KiB");
    assert_eq!(format_bytes(1024 * 1024 - 1), "1024.00 KiB"); // Check rounding
    assert_eq!(format_bytes(1024 * 1024), "1.00 MiB");
    assert_eq!(format_bytes(1024 * 1024 * 1024), "1.00 GiB");
    assert_eq!(format_bytes(1024 * 1024 * 1024 * 1536 / 1024), "1.50 GiB");
    assert_eq!(format_bytes(1024_u64.pow(4) * 2), "2.00 TiB");
}

#[test]
fn test_format_uptime() {
    assert_eq!(format_uptime(0), "0s");
    assert_eq!(format_uptime(59), "59s");
    assert_eq!(format_uptime(60), "1m");
    assert_eq!(format_uptime(3599), "59m");
    assert_eq!(format_uptime(3600), "1h 0m");
    assert_eq!(format_uptime(3661), "1h 1m");
    assert_eq!(format_uptime(86_400), "1d 0h 0m");
    assert_eq!(format_uptime(86_400 * 3 + 3600 * 4 + 60 * 12 + 9), "3d 4h 12m");
}

#[test]
fn test_format_percent() {
    assert_eq!(format_percent(0, 0), "0.0%");
    assert_eq!(format_percent(1, 3), "33.3%");
    assert_eq!(format_percent(50, 100), "50.0%");
    assert_eq!(format_percent(150, 100), "100.0%");
}

#[test]
fn test_format_usage() {
    assert_eq!(
        format_usage(512 * 1024 * 1024, 2 * 1024 * 1024 * 1024),
        "512.00 MiB / 2.00 GiB (25.0%)"
    );
}
