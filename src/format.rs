use chrono::NaiveDateTime;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
    /// `Tue 05, 21, 2019 9:30PM`
    #[default]
    Medium,
}

pub fn format_datetime(value: &NaiveDateTime, format: DateFormat) -> String {
    let pattern = match format {
        DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
        DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
    };
    value.format(pattern).to_string()
}

/// Accepts the formats a show form can send: the plain `2019-05-21 21:30:00`,
/// the same without seconds, and a browser `datetime-local` value.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(datetime);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M") {
        return Some(datetime);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(datetime);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn show_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 5, 21)
            .unwrap()
            .and_hms_opt(21, 30, 0)
            .unwrap()
    }

    #[test]
    fn medium_format() {
        assert_eq!(
            format_datetime(&show_time(), DateFormat::Medium),
            "Tue 05, 21, 2019 9:30PM"
        );
    }

    #[test]
    fn full_format() {
        assert_eq!(
            format_datetime(&show_time(), DateFormat::Full),
            "Tuesday May, 21, 2019 at 9:30PM"
        );
    }

    #[test]
    fn parses_form_inputs() {
        assert_eq!(parse_datetime("2019-05-21 21:30:00"), Some(show_time()));
        assert_eq!(parse_datetime("2019-05-21 21:30"), Some(show_time()));
        assert_eq!(parse_datetime(" 2019-05-21T21:30 "), Some(show_time()));
        assert_eq!(parse_datetime("21/05/2019"), None);
        assert_eq!(parse_datetime(""), None);
    }
}
