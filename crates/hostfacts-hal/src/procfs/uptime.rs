//! Parsing helpers for `/proc/uptime`.

use crate::{HostQueryError, HostResult};

/// Parses the first field (elapsed seconds) and truncates to whole seconds.
pub fn parse_uptime_secs(content: &str) -> HostResult<u64> {
    let token = content
        .split_whitespace()
        .next()
        .ok_or_else(|| HostQueryError::malformed("uptime", "empty content"))?;
    let seconds: f64 = token.parse().map_err(|_| {
        HostQueryError::malformed("uptime", format!("first field is not numeric: {token:?}"))
    })?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(HostQueryError::malformed(
            "uptime",
            format!("seconds out of range: {token:?}"),
        ));
    }
    // Truncation (not rounding) matches the kernel-reported whole seconds.
    Ok(seconds as u64)
}

/// Splits whole seconds into (hours, minutes) for display.
pub fn split_hours_minutes(secs: u64) -> (u64, u64) {
    (secs / 3600, (secs % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(parse_uptime_secs("5000.32 1234.5\n").unwrap(), 5000);
        assert_eq!(parse_uptime_secs("59.9 0\n").unwrap(), 59);
    }

    #[test]
    fn splits_hours_and_minutes() {
        assert_eq!(split_hours_minutes(5000), (1, 23));
        assert_eq!(split_hours_minutes(59), (0, 0));
        assert_eq!(split_hours_minutes(3600), (1, 0));
    }

    #[test]
    fn non_numeric_first_field_is_malformed() {
        let err = parse_uptime_secs("up 5 days\n").unwrap_err();
        assert!(matches!(
            err,
            HostQueryError::MalformedSource { what: "uptime", .. }
        ));
    }

    #[test]
    fn empty_content_is_malformed() {
        assert!(parse_uptime_secs("  \n").is_err());
    }

    #[test]
    fn negative_seconds_are_rejected() {
        assert!(parse_uptime_secs("-3.0 0\n").is_err());
    }
}
