//! Format validators for dates, colors, URLs, IP addresses and JSON.
//!
//! Each returns a plain `bool`; none of them panic on arbitrary input.

use std::net::IpAddr;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use url::Url;

use crate::error::Result;

static SQL_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$")
        .expect("sql date pattern is valid")
});

static SQL_DATETIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01]) ([01][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]$")
        .expect("sql datetime pattern is valid")
});

static SQL_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]$").expect("sql time pattern is valid")
});

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([A-Fa-f0-9]{3}|[A-Fa-f0-9]{6})$").expect("hex color pattern is valid")
});

/// `YYYY-MM-DD`, and a real calendar date.
pub fn is_valid_sql_date(text: &str) -> bool {
    SQL_DATE.is_match(text) && NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
}

/// `YYYY-MM-DD HH:MM:SS` with a single space, and a real calendar date.
pub fn is_valid_sql_datetime(text: &str) -> bool {
    SQL_DATETIME.is_match(text)
        && NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").is_ok()
}

/// `HH:MM:SS` on a 24-hour clock.
pub fn is_valid_sql_time(text: &str) -> bool {
    SQL_TIME.is_match(text) && NaiveTime::parse_from_str(text, "%H:%M:%S").is_ok()
}

/// Three or six hex digits, optionally prefixed with `#`.
pub fn is_valid_hex_color(text: &str) -> bool {
    HEX_COLOR.is_match(text)
}

/// An absolute URL with both a scheme and a host.
pub fn is_url(text: &str) -> bool {
    match Url::parse(text) {
        Ok(url) => !url.scheme().is_empty() && url.host().is_some(),
        Err(_) => false,
    }
}

/// A dotted-quad IPv4 address, or an IPv4-mapped IPv6 address.
pub fn is_ipv4(text: &str) -> bool {
    match text.parse::<IpAddr>() {
        Ok(IpAddr::V4(_)) => true,
        Ok(IpAddr::V6(v6)) => v6.to_ipv4_mapped().is_some(),
        Err(_) => false,
    }
}

/// An IPv6 address that is not IPv4-mapped.
pub fn is_ipv6(text: &str) -> bool {
    match text.parse::<IpAddr>() {
        Ok(IpAddr::V6(v6)) => v6.to_ipv4_mapped().is_none(),
        _ => false,
    }
}

/// RFC 1918 IPv4 (`10/8`, `172.16/12`, `192.168/16`) or IPv6 unique local
/// (`fc00::/7`). Unparsable input is not private.
pub fn is_private_ip(text: &str) -> bool {
    match text.parse::<IpAddr>() {
        Ok(IpAddr::V4(v4)) => v4.is_private(),
        Ok(IpAddr::V6(v6)) => match v6.to_ipv4_mapped() {
            Some(v4) => v4.is_private(),
            None => v6.segments()[0] & 0xfe00 == 0xfc00,
        },
        Err(_) => false,
    }
}

/// Whether `text` parses as a JSON document.
pub fn is_valid_json(text: &str) -> bool {
    match validate_json(text) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("Invalid JSON: {e}");
            false
        }
    }
}

/// Parse `text` as JSON, returning the parser error on failure.
pub fn validate_json(text: &str) -> Result<()> {
    serde_json::from_str::<serde::de::IgnoredAny>(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HelpersError;

    #[test]
    fn sql_date() {
        for date in ["2023-01-01", "1999-12-31", "2024-02-29", "2020-06-15"] {
            assert!(is_valid_sql_date(date), "{date} should be valid");
        }
        for date in [
            "2023-13-01",
            "2023-00-10",
            "2023-12-32",
            "2023-02-30",
            "2001-02-29",
            "2023/12/01",
            "23-12-01",
        ] {
            assert!(!is_valid_sql_date(date), "{date} should be invalid");
        }
    }

    #[test]
    fn sql_datetime() {
        for value in [
            "2023-01-01 12:30:45",
            "1999-12-31 23:59:59",
            "2020-02-29 00:00:00",
        ] {
            assert!(is_valid_sql_datetime(value), "{value} should be valid");
        }
        for value in [
            "2023-01-01 24:00:00",
            "2023-12-01 23:60:00",
            "2023-12-01 12:30:60",
            "2023-13-01 12:30:45",
            "2023-02-30 12:30:45",
            "2023-12-01T12:30:45",
            "2023-12-01\t12:30:45",
            "2023-01-01 12:30",
        ] {
            assert!(!is_valid_sql_datetime(value), "{value} should be invalid");
        }
    }

    #[test]
    fn sql_time() {
        for value in ["00:00:00", "23:59:59", "12:30:45", "07:45:00"] {
            assert!(is_valid_sql_time(value), "{value} should be valid");
        }
        for value in ["24:00:00", "12:60:00", "12:00:60", "12:00", "12:00:00:1", "120000"] {
            assert!(!is_valid_sql_time(value), "{value} should be invalid");
        }
    }

    #[test]
    fn hex_color() {
        for value in ["1f1f1F", "AFAFAF", "F00", "#1f1f1F", "#F00", "#123"] {
            assert!(is_valid_hex_color(value), "{value} should be valid");
        }
        for value in ["GGGGGG", "12345", "", "1F1F1F1F", "#", "##F00"] {
            assert!(!is_valid_hex_color(value), "{value} should be invalid");
        }
    }

    #[test]
    fn url() {
        for value in [
            "http://appercase.ru",
            "ftp://appercase.ru",
            "https://www.example.com/path?query=123",
            "http://localhost:8080",
            "http://192.168.1.1",
            "https://[::1]",
            "http://test-domain",
        ] {
            assert!(is_url(value), "{value} should be a URL");
        }
        for value in [
            "http//appercase.ru",
            "appercase.ru",
            "https://example.com:invalid",
            "",
            "https://",
            "mailto:someone@example.com",
        ] {
            assert!(!is_url(value), "{value} should not be a URL");
        }
    }

    #[test]
    fn ipv4() {
        for value in ["192.168.0.1", "255.255.255.255", "0.0.0.0", "::ffff:10.0.0.1"] {
            assert!(is_ipv4(value), "{value} should be IPv4");
        }
        for value in ["256.256.256.256", "192.168.0", "192.168.0.1.1", "abc.def.ghi.jkl", "::1"] {
            assert!(!is_ipv4(value), "{value} should not be IPv4");
        }
    }

    #[test]
    fn ipv6() {
        for value in ["::1", "2001:db8::ff00:42:8329", "::", "1::1:1:1:1:1:1"] {
            assert!(is_ipv6(value), "{value} should be IPv6");
        }
        for value in [
            "1200::AB00:1234::2552:7777:1313",
            "192.168.0.1",
            "12345::",
            "::ffff:10.0.0.1",
        ] {
            assert!(!is_ipv6(value), "{value} should not be IPv6");
        }
    }

    #[test]
    fn private_ip() {
        for value in ["10.1.2.3", "172.16.0.1", "172.31.255.255", "192.168.1.1", "fd12::1", "::ffff:192.168.0.1"] {
            assert!(is_private_ip(value), "{value} should be private");
        }
        for value in ["8.8.8.8", "172.32.0.1", "127.0.0.1", "2001:db8::1", "not an ip"] {
            assert!(!is_private_ip(value), "{value} should not be private");
        }
    }

    #[test]
    fn json() {
        assert!(is_valid_json(r#"{"a": [1, 2, {"b": null}]}"#));
        assert!(is_valid_json("42"));
        assert!(!is_valid_json("{a: 1}"));
        assert!(!is_valid_json(""));
        assert!(matches!(validate_json("[1,"), Err(HelpersError::Json(_))));
    }
}
