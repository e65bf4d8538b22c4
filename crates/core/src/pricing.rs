//! Price display formatting.

/// Format a rouble amount for display: magnitudes above a million render
/// as `x.yM`, above a thousand as `x.yK`, anything else as-is.
pub fn format_price(value: i64) -> String {
    if value.abs() > 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value.abs() > 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}
