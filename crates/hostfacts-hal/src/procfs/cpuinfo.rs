//! Parsing helpers for `/proc/cpuinfo`.

use crate::{HostQueryError, HostResult};

/// Extracts the `model name` value of every CPU entry, in source order.
///
/// Zero matches is not an error (some architectures omit the field).
pub fn parse_model_names(content: &str) -> HostResult<Vec<String>> {
    let mut models = Vec::new();
    for line in content.lines() {
        match line.split_once(':') {
            Some((key, value)) if key.trim() == "model name" => {
                models.push(value.trim().to_string());
            }
            Some(_) => {}
            None => {
                if line.trim() == "model name" {
                    return Err(HostQueryError::malformed(
                        "cpuinfo",
                        format!("model name line has no colon-delimited value: {line:?}"),
                    ));
                }
            }
        }
    }
    Ok(models)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_value_after_first_colon_trimmed() {
        let data = "model name\t: Example CPU @ 2.00GHz\n";
        assert_eq!(
            parse_model_names(data).unwrap(),
            vec!["Example CPU @ 2.00GHz".to_string()]
        );
    }

    #[test]
    fn keeps_source_order_across_entries() {
        let data = "\
processor\t: 0
model name\t: CPU A
flags\t\t: fpu vme

processor\t: 1
model name\t: CPU B
";
        assert_eq!(
            parse_model_names(data).unwrap(),
            vec!["CPU A".to_string(), "CPU B".to_string()]
        );
    }

    #[test]
    fn zero_matches_is_empty_not_error() {
        let data = "processor\t: 0\nBogoMIPS\t: 108.00\n";
        assert_eq!(parse_model_names(data).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn value_containing_colons_is_kept_whole() {
        let data = "model name : Weird: CPU: Name\n";
        assert_eq!(
            parse_model_names(data).unwrap(),
            vec!["Weird: CPU: Name".to_string()]
        );
    }

    #[test]
    fn model_name_line_without_colon_is_malformed() {
        let err = parse_model_names("model name\n").unwrap_err();
        assert!(matches!(
            err,
            HostQueryError::MalformedSource { what: "cpuinfo", .. }
        ));
    }
}
