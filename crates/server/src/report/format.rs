//! Value formatting shared by the activity reports.

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const ACTIVITY_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

/// Timestamp to `YYYY-MM-DD HH:MM` in UTC; a missing timestamp renders as an
/// empty string.
pub fn format_activity_date(ts: Option<OffsetDateTime>) -> String {
    match ts {
        Some(ts) => ts
            .to_offset(UtcOffset::UTC)
            .format(&ACTIVITY_DATE_FORMAT)
            .unwrap_or_default(),
        None => String::new(),
    }
}

/// Render integer cents as a dollar amount with thousands separators, without
/// the currency symbol: 1234 becomes `12.34`.
pub fn cents_to_dollar_string(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}{}.{:02}", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn cents_to_dollar_string_basic() {
        assert_eq!(cents_to_dollar_string(1234), "12.34");
        assert_eq!(cents_to_dollar_string(500), "5.00");
        assert_eq!(cents_to_dollar_string(0), "0.00");
        assert_eq!(cents_to_dollar_string(5), "0.05");
    }

    #[test]
    fn cents_to_dollar_string_groups_thousands() {
        assert_eq!(cents_to_dollar_string(123_456_789), "1,234,567.89");
        assert_eq!(cents_to_dollar_string(100_000), "1,000.00");
        assert_eq!(cents_to_dollar_string(99_999), "999.99");
    }

    #[test]
    fn cents_to_dollar_string_negative() {
        assert_eq!(cents_to_dollar_string(-1234), "-12.34");
    }

    #[test]
    fn format_activity_date_renders_utc_minutes() {
        let ts = datetime!(2025-06-01 10:30:45 UTC);
        assert_eq!(format_activity_date(Some(ts)), "2025-06-01 10:30");
    }

    #[test]
    fn format_activity_date_normalizes_offsets() {
        let ts = datetime!(2025-06-01 10:30:00 +02:00);
        assert_eq!(format_activity_date(Some(ts)), "2025-06-01 08:30");
    }

    #[test]
    fn format_activity_date_none_is_blank() {
        assert_eq!(format_activity_date(None), "");
    }
}
