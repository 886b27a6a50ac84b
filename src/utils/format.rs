//! Formatting utilities for money and percentages.

/// Format a ruble amount with thin-space thousands and a decimal comma
/// (e.g., "23 890,72 ₽").
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('\u{202f}');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{},{:02} ₽", sign, grouped, fraction)
}

/// Format a share as a whole percentage (e.g., 0.8 -> "80%").
pub fn format_percent(share: f64) -> String {
    format!("{}%", (share * 100.0).round() as i64)
}

/// Parse a user-entered number, accepting spaces and a decimal comma.
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
