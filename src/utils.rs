//! Utility functions for formatting.

/// Render an integer with `,` between thousands groups.
///
/// Capacity errors quote the offending value this way so that large requests
/// read at a glance:
/// - `20000` → `"20,000"`
/// - `-1234567` → `"-1,234,567"`
/// - `999` → `"999"`
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
