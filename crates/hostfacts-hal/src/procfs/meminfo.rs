//! Parsing helpers for `/proc/meminfo`.

use crate::{HostQueryError, HostResult};

/// Returns the first two lines (total and free memory), each trimmed.
pub fn summary_lines(content: &str) -> HostResult<[String; 2]> {
    let mut lines = content.lines();
    let total = lines
        .next()
        .ok_or_else(|| HostQueryError::malformed("meminfo", "fewer than two lines"))?;
    let free = lines
        .next()
        .ok_or_else(|| HostQueryError::malformed("meminfo", "fewer than two lines"))?;
    Ok([total.trim().to_string(), free.trim().to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_exactly_first_two_lines_trimmed() {
        let data = "MemTotal:       16384000 kB\nMemFree:         8000000 kB\nMemAvailable:   12000000 kB\n";
        assert_eq!(
            summary_lines(data).unwrap(),
            [
                "MemTotal:       16384000 kB".to_string(),
                "MemFree:         8000000 kB".to_string(),
            ]
        );
    }

    #[test]
    fn one_line_is_malformed() {
        let err = summary_lines("MemTotal:       16384000 kB\n").unwrap_err();
        assert!(matches!(
            err,
            HostQueryError::MalformedSource { what: "meminfo", .. }
        ));
    }

    #[test]
    fn empty_content_is_malformed() {
        assert!(summary_lines("").is_err());
    }
}
