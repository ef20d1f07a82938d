//! Number formatting for reports. Currency is a label, never converted.

/// `1234567.891` → `1,234,567.89` (`decimals` places, grouped thousands).
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.00 prints as 0.00
    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

pub fn format_currency(value: f64, currency: &str) -> String {
    format!("{} {}", format_number(value, 2), currency)
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_number(0.0, 2), "0.00");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1_000.0, 0), "1,000");
        assert_eq!(format_number(1_250_000.0, 0), "1,250,000");
        assert_eq!(format_number(140_625.0, 2), "140,625.00");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_number(-750.0, 2), "-750.00");
        assert_eq!(format_number(-1_234_567.5, 1), "-1,234,567.5");
        assert_eq!(format_number(-0.001, 2), "0.00");
    }

    #[test]
    fn test_currency_and_percent() {
        assert_eq!(format_currency(12_345.5, "EUR"), "12,345.50 EUR");
        assert_eq!(format_percent(1306.25), "1,306.25%");
        assert_eq!(format_number(f64::NAN, 2), "n/a");
    }
}
