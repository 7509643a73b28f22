/// Returns the value of the first `key` in a decoded query string.
pub(crate) fn first_param<'a, K, V>(pairs: &'a [(K, V)], key: &str) -> Option<&'a str>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .iter()
        .find(|(k, _)| k.as_ref() == key)
        .map(|(_, v)| v.as_ref())
}

/// Parses a 1-based count, falling back to `default` when absent or not an
/// integer and clamping non-positive values to 1.
pub(crate) fn parse_count(value: Option<&str>, default: usize) -> usize {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return default;
    };
    match value.parse::<i64>() {
        Ok(n) if n < 1 => 1,
        Ok(n) => usize::try_from(n).unwrap_or(usize::MAX),
        // Larger than i64 but still all digits: treat as "very large".
        Err(_) if value.bytes().all(|b| b.is_ascii_digit()) => usize::MAX,
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::{first_param, parse_count};

    #[test]
    fn first_param_returns_first_match() {
        let pairs = vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "3".to_string()),
        ];
        assert_eq!(first_param(&pairs, "a"), Some("1"));
        assert_eq!(first_param(&pairs, "b"), Some("2"));
        assert_eq!(first_param(&pairs, "c"), None);
    }

    #[test]
    fn parse_count_defaults_and_clamps() {
        assert_eq!(parse_count(None, 10), 10);
        assert_eq!(parse_count(Some(""), 10), 10);
        assert_eq!(parse_count(Some("  "), 10), 10);
        assert_eq!(parse_count(Some("abc"), 10), 10);
        assert_eq!(parse_count(Some("2.5"), 10), 10);
        assert_eq!(parse_count(Some("0"), 10), 1);
        assert_eq!(parse_count(Some("-7"), 10), 1);
        assert_eq!(parse_count(Some(" 25 "), 10), 25);
        assert_eq!(parse_count(Some("99999999999999999999999"), 10), usize::MAX);
    }
}
