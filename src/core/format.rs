use crate::utils::error::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// `(XXX) XXX-XXXX` for exactly ten digits, otherwise the input unchanged.
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        phone.to_string()
    }
}

/// Long US form, e.g. `January 5, 2024`. Accepts `YYYY-MM-DD`,
/// `YYYY-MM-DD HH:MM:SS` (as the server renders datetimes) and RFC 3339.
pub fn format_date(value: &str) -> Result<String> {
    let value = value.trim();
    let date = match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date,
        Err(date_err) => {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
                datetime.date()
            } else if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
                datetime.date_naive()
            } else {
                return Err(date_err.into());
            }
        }
    };
    Ok(date.format("%B %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_phone_number() {
        assert_eq!(format_phone_number("0912345678"), "(091) 234-5678");
        assert_eq!(format_phone_number("091-234 5678"), "(091) 234-5678");
        assert_eq!(format_phone_number("+84 912 345 678"), "+84 912 345 678");
        assert_eq!(format_phone_number("123"), "123");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-05").unwrap(), "January 5, 2024");
        assert_eq!(format_date("2023-12-31 08:30:00").unwrap(), "December 31, 2023");
        assert_eq!(format_date("2024-02-29T23:00:00+07:00").unwrap(), "February 29, 2024");
        assert!(format_date("yesterday").is_err());
    }
}
