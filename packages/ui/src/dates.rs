use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `January 5, 2025`
    Long,
    /// `Jan 5, 2025`
    Short,
}

/// Render a project timestamp for cards; `N/A` when the API sent none.
pub fn format_date(date: Option<DateTime<Utc>>, style: DateStyle) -> String {
    let Some(date) = date else {
        return "N/A".to_string();
    };
    let pattern = match style {
        DateStyle::Long => "%B %-d, %Y",
        DateStyle::Short => "%b %-d, %Y",
    };
    date.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_styles() {
        let date = Utc.with_ymd_and_hms(2025, 1, 5, 10, 30, 0).unwrap();
        assert_eq!(format_date(Some(date), DateStyle::Long), "January 5, 2025");
        assert_eq!(format_date(Some(date), DateStyle::Short), "Jan 5, 2025");
    }

    #[test]
    fn test_missing_date() {
        assert_eq!(format_date(None, DateStyle::Long), "N/A");
    }
}
