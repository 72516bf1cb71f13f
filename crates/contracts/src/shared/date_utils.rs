/// Utilities for date formatting
///
/// Даты приходят из `<input type="date">` в виде `YYYY-MM-DD`, а бэкенд
/// печатает их в PDF как `DD/MM/YYYY`.

/// Format ISO date string to DD/MM/YYYY
/// Example: "2024-03-07" -> "07/03/2024"
///
/// Чистая перестановка компонентов: календарь не проверяется,
/// "2024-13-40" превращается в "40/13/2024". Строка без трёх
/// компонентов возвращается как есть.
pub fn format_flight_date(date_str: &str) -> String {
    let mut parts = date_str.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => format!("{}/{}/{}", day, month, year),
        _ => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_flight_date() {
        assert_eq!(format_flight_date("2024-03-07"), "07/03/2024");
        assert_eq!(format_flight_date("2025-12-31"), "31/12/2025");
    }

    #[test]
    fn test_no_calendar_validation() {
        assert_eq!(format_flight_date("2024-13-40"), "40/13/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_flight_date(""), "");
        assert_eq!(format_flight_date("invalid"), "invalid");
        assert_eq!(format_flight_date("2024-03"), "2024-03");
    }

    #[test]
    fn test_extra_components_ignored() {
        assert_eq!(format_flight_date("2024-03-07-extra"), "07/03/2024");
    }
}
