//! Small text helpers used when laying out entries.

/// Splits a multi-line description into its non-blank lines, trimmed.
/// `"A\n\nB\n"` yields `["A", "B"]`.
pub fn description_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins the non-empty parts with `sep`, so a half-filled range or location
/// never shows a dangling separator.
pub fn join_present(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// `Some(value)` unless the value is blank.
pub fn present(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Project links get `https://` unless they already start with `http`.
pub fn project_link(link: &str) -> Option<String> {
    match link.trim() {
        "" => None,
        link if link.starts_with("http") => Some(link.to_string()),
        link => Some(format!("https://{link}")),
    }
}

/// `link` as an `href` target, or `None` when it names a scheme other than
/// `http`/`https` (`javascript:`, `data:`). Scheme-less links pass through.
pub fn safe_href(link: &str) -> Option<String> {
    let link = link.trim();
    if link.is_empty() {
        return None;
    }
    let scheme = link.split_once(':').map(|(scheme, _)| scheme).filter(|scheme| {
        scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    });
    match scheme {
        None => Some(link.to_string()),
        Some(scheme) if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") => {
            Some(link.to_string())
        }
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_lines_drop_blank_and_trailing() {
        assert_eq!(description_lines("A\n\nB\n"), vec!["A", "B"]);
    }

    #[test]
    fn test_description_lines_handle_crlf_and_whitespace() {
        assert_eq!(description_lines("  one\r\n   \r\ntwo  "), vec!["one", "two"]);
    }

    #[test]
    fn test_description_lines_empty() {
        assert!(description_lines("").is_empty());
        assert!(description_lines("\n\n").is_empty());
    }

    #[test]
    fn test_join_present_skips_empty_parts() {
        assert_eq!(join_present(&["Sep 2016", "2021"], " – "), "Sep 2016 – 2021");
        assert_eq!(join_present(&["", "2021"], " – "), "2021");
        assert_eq!(join_present(&["", " "], ", "), "");
    }

    #[test]
    fn test_present() {
        assert_eq!(present("x"), Some("x".to_string()));
        assert_eq!(present("  "), None);
    }

    #[test]
    fn test_project_link_trims_before_prefixing() {
        assert_eq!(project_link(" http://x.io").as_deref(), Some("http://x.io"));
        assert_eq!(project_link("github.com/me").as_deref(), Some("https://github.com/me"));
        assert_eq!(project_link("   "), None);
    }

    #[test]
    fn test_safe_href_blocks_script_schemes() {
        assert_eq!(safe_href("javascript:alert(1)"), None);
        assert_eq!(safe_href(" JavaScript:alert(1)"), None);
        assert_eq!(safe_href("data:text/html,hi"), None);
        assert_eq!(safe_href("HTTPS://aws.com/c").as_deref(), Some("HTTPS://aws.com/c"));
        assert_eq!(safe_href("aws.com/cert").as_deref(), Some("aws.com/cert"));
        assert_eq!(safe_href("aws.com/c?t=1:2").as_deref(), Some("aws.com/c?t=1:2"));
        assert_eq!(safe_href(""), None);
    }
}
