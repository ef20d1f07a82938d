use serde::{Deserialize, Serialize};

/// The five funnel assumptions every forecast starts from.
///
/// `ctr` and `cr` are percentages (2.5 means 2.5%), divided by 100 only at
/// the point of use.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FunnelInputs {
    /// Total spend.
    pub budget: f64,
    /// Cost per 1000 impressions.
    pub cpm: f64,
    /// Click-through rate, percent.
    pub ctr: f64,
    /// Conversion rate (leads / clicks), percent.
    pub cr: f64,
    /// Revenue per conversion.
    pub avg_check: f64,
}

impl FunnelInputs {
    pub fn new(budget: f64, cpm: f64, ctr: f64, cr: f64, avg_check: f64) -> Self {
        Self {
            budget,
            cpm,
            ctr,
            cr,
            avg_check,
        }
    }

    /// Build inputs from raw text fields. Anything unparsable becomes 0.
    pub fn parse(budget: &str, cpm: &str, ctr: &str, cr: &str, avg_check: &str) -> Self {
        Self::new(
            parse_input(budget),
            parse_input(cpm),
            parse_input(ctr),
            parse_input(cr),
            parse_input(avg_check),
        )
    }
}

/// Lenient numeric parsing for user-typed fields.
///
/// Accepts `1 000`, `1_000`, and `2,5` (comma as decimal separator when no
/// dot is present). Empty, unparsable, or non-finite text yields `0.0`.
pub fn parse_input(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect();
    if cleaned.is_empty() {
        return 0.0;
    }

    let normalized = if cleaned.contains('.') {
        cleaned.replace(',', "")
    } else if cleaned.matches(',').count() == 1 {
        cleaned.replace(',', ".")
    } else {
        cleaned.replace(',', "")
    };

    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_input("10000"), 10_000.0);
        assert_eq!(parse_input("  2.5 "), 2.5);
        assert_eq!(parse_input("-3"), -3.0);
    }

    #[test]
    fn test_parse_separators() {
        assert_eq!(parse_input("1 000"), 1_000.0);
        assert_eq!(parse_input("1_000.50"), 1_000.5);
        assert_eq!(parse_input("2,5"), 2.5);
        assert_eq!(parse_input("1,000.25"), 1_000.25);
        assert_eq!(parse_input("1,000,000"), 1_000_000.0);
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(parse_input(""), 0.0);
        assert_eq!(parse_input("abc"), 0.0);
        assert_eq!(parse_input("12abc"), 0.0);
        assert_eq!(parse_input("inf"), 0.0);
        assert_eq!(parse_input("NaN"), 0.0);
    }

    #[test]
    fn test_inputs_from_fields() {
        let inputs = FunnelInputs::parse("10000", "8", "2,5", "3", "");
        assert_eq!(inputs, FunnelInputs::new(10_000.0, 8.0, 2.5, 3.0, 0.0));
    }
}
