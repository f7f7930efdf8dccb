//! Currency and percentage rendering in German notation.
use serde_json::Value;

/// Coerces a payload value to a finite number.
///
/// Numbers pass through; numeric strings are parsed after trimming; absent,
/// `null` and empty values count as zero. Anything else also counts as zero
/// and is reported as a warning.
pub fn to_number(value: &Value) -> f64 {
    let parsed = match value {
        Value::Null => Some(0.0),
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => Some(0.0),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Array(_) | Value::Object(_) => None,
    };
    match parsed.filter(|n| n.is_finite()) {
        Some(n) => n,
        None => {
            log::warn!("Treating non-numeric payload value {} as 0", value);
            0.0
        }
    }
}

/// `1234.5` → `"1.234,50"`: two decimals, `.` between thousands, `,` before
/// the decimals, no currency symbol.
pub fn format_euro(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    format!("{}{},{}", if negative { "-" } else { "" }, group_thousands(integer), fraction)
}

/// `12.34` → `"12,3"`, or `"12,3 %"` when the target field asks for a symbol.
pub fn format_percent(value: f64, with_symbol: bool) -> String {
    let base = format!("{:.1}", value).replace('.', ",");
    if with_symbol { format!("{} %", base) } else { base }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_euro() {
        assert_eq!(format_euro(1234.5), "1.234,50");
        assert_eq!(format_euro(0.0), "0,00");
        assert_eq!(format_euro(999.999), "1.000,00");
        assert_eq!(format_euro(1234567.891), "1.234.567,89");
        assert_eq!(format_euro(100.0), "100,00");
        assert_eq!(format_euro(-2500.0), "-2.500,00");
        assert_eq!(format_euro(-0.001), "0,00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.34, true), "12,3 %");
        assert_eq!(format_percent(12.34, false), "12,3");
        assert_eq!(format_percent(45.0, false), "45,0");
        assert_eq!(format_percent(0.0, true), "0,0 %");
    }

    #[test]
    fn test_to_number() {
        assert_eq!(to_number(&json!(1234.5)), 1234.5);
        assert_eq!(to_number(&json!(" 17.25 ")), 17.25);
        assert_eq!(to_number(&json!(null)), 0.0);
        assert_eq!(to_number(&json!("")), 0.0);
        assert_eq!(to_number(&json!("viel")), 0.0);
        assert_eq!(to_number(&json!("NaN")), 0.0);
        assert_eq!(to_number(&json!({ "a": 1 })), 0.0);
    }
}
