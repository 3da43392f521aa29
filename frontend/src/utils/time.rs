use chrono::NaiveDate;

/// Normalizes the date-input value into the `YYYY-MM-DD` form the rating
/// service expects. Date inputs occasionally hand back a full timestamp;
/// only the calendar date is kept. Unparseable input passes through trimmed.
pub fn format_submission_date(input: &str) -> String {
    let value = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    if let Some((date_part, _)) = value.split_once('T') {
        if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_date_passes_through() {
        assert_eq!(format_submission_date("2024-05-01"), "2024-05-01");
    }

    #[test]
    fn timestamp_keeps_date_part() {
        assert_eq!(
            format_submission_date("2024-05-01T09:30:00.000Z"),
            "2024-05-01"
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(format_submission_date(" 2024-05-01 "), "2024-05-01");
    }

    #[test]
    fn unparseable_input_passes_through() {
        assert_eq!(format_submission_date("not-a-date"), "not-a-date");
    }
}
