//! Human-readable byte sizes in binary (1024) steps.

use crate::format::{MAX_FRACTION_DIGITS, to_fixed};

const UNITS: [&str; 6] = ["Bytes", "KB", "MB", "GB", "TB", "PB"];
const STEP: f64 = 1024.0;

/// Decimals used by [`format_file_size`].
pub const FILE_SIZE_DECIMALS: usize = 1;

/// `1536` → `1.5 KB` with up to `decimals` fraction digits.
///
/// Trailing zeros are dropped. Zero is `0 Bytes`; negative and non-finite
/// sizes give `""`, as do more than [`MAX_FRACTION_DIGITS`] decimals.
/// Sizes past the petabyte tier stay in `PB`.
pub fn format_bytes(bytes: f64, decimals: usize) -> String {
    if bytes == 0.0 {
        return "0 Bytes".to_string();
    }
    if !bytes.is_finite() || bytes < 0.0 {
        return String::new();
    }

    let mut tier = 0;
    while tier + 1 < UNITS.len() && bytes >= STEP.powi(tier as i32 + 1) {
        tier += 1;
    }

    let scaled = bytes / STEP.powi(tier as i32);
    let Ok(shown) = to_fixed(scaled, decimals).parse::<f64>() else {
        return String::new();
    };
    format!("{shown} {}", UNITS[tier])
}

/// [`format_bytes`] with one decimal.
pub fn format_file_size(bytes: f64) -> String {
    format_bytes(bytes, FILE_SIZE_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0.0, 2), "0 Bytes");
        assert_eq!(format_bytes(1024.0, 2), "1 KB");
        assert_eq!(format_bytes(1500.0, 2), "1.46 KB");
        assert_eq!(format_bytes(1_048_576.0, 2), "1 MB");
        assert_eq!(format_bytes(1_073_741_824.0, 2), "1 GB");
        assert_eq!(format_bytes(500.0, 2), "500 Bytes");
    }

    #[test]
    fn test_format_bytes_edges() {
        assert_eq!(format_bytes(1023.0, 2), "1023 Bytes");
        assert_eq!(format_bytes(0.5, 2), "0.5 Bytes");
        assert_eq!(format_bytes(1024f64.powi(6), 2), "1024 PB");
        assert_eq!(format_bytes(-1.0, 2), "");
        assert_eq!(format_bytes(f64::NAN, 2), "");
        assert_eq!(format_bytes(1500.0, 0), "1 KB");
        assert_eq!(format_bytes(1500.0, 70_000), "");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(1536.0), "1.5 KB");
        assert_eq!(format_file_size(10.0 * 1024.0 * 1024.0), "10 MB");
        assert_eq!(format_file_size(0.0), "0 Bytes");
    }
}
