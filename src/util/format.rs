//! Display formatting helpers for prices and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format integer cents as a dollar amount, e.g. `125000` → `$1,250.00`.
pub fn format_price_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    let dollars = magnitude / 100;
    let remainder = magnitude % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    format!("{sign}${grouped}.{remainder:02}")
}

/// Display the date portion of an RFC 3339 timestamp (`2024-03-01`).
pub fn display_date(rfc3339: &str) -> &str {
    rfc3339.split('T').next().unwrap_or(rfc3339)
}
