//! Date parsing and German date rendering.
use chrono::NaiveDate;

/// Accepted input shapes, tried in order.
const INPUT_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%Y/%m/%d"];

/// Parses ISO (`2024-03-05`), German (`05.03.2024`) or slash ISO-order
/// (`2024/03/05`) dates. Surrounding whitespace is ignored.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

/// Renders `DD.MM.YYYY`, or the trimmed input unchanged when it is not a date.
pub fn format_date(text: &str) -> String {
    match parse_date(text) {
        Some(date) => date.format("%d.%m.%Y").to_string(),
        None => text.trim().to_string(),
    }
}

/// Renders `MM.YYYY`, or an empty string when the input is not a date.
pub fn format_month_year(text: &str) -> String {
    parse_date(text)
        .map(|date| date.format("%m.%Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_shapes() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5);
        assert_eq!(parse_date("2024-03-05"), expected);
        assert_eq!(parse_date("05.03.2024"), expected);
        assert_eq!(parse_date("2024/03/05"), expected);
        assert_eq!(parse_date("  2024-03-05 "), expected);
        assert_eq!(parse_date("03/05/2024"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_format_date_round_trip_and_fallback() {
        assert_eq!(format_date("2024-03-05"), "05.03.2024");
        assert_eq!(format_date("2024/12/31"), "31.12.2024");
        assert_eq!(format_date(" ab Q3 "), "ab Q3");
        assert_eq!(format_date("2024-02-30"), "2024-02-30");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_month_year() {
        assert_eq!(format_month_year("2024-03-05"), "03.2024");
        assert_eq!(format_month_year("05.11.2025"), "11.2025");
        assert_eq!(format_month_year("irgendwann"), "");
    }
}
