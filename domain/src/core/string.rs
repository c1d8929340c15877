//! String helpers for log lines and diagnostics.

/// Truncate a string to a maximum byte length with ellipsis (UTF-8 safe)
///
/// Upstream error bodies can be arbitrarily large HTML pages; callers use
/// this to keep log lines bounded.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Number of leading characters of a secret that may be shown
pub const SECRET_VISIBLE_CHARS: usize = 8;

/// Mask a credential for display: keep the first few characters only.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "(none)".to_string();
    }
    let visible: String = secret.chars().take(SECRET_VISIBLE_CHARS).collect();
    format!("{}...", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("Status 500: boom", 10), "Status ...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 'é' is 2 bytes; never split it
        assert_eq!(truncate("éééééé", 8), "éé...");
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("796c01f5d0bb"), "796c01f5...");
        assert_eq!(mask_secret("abc"), "abc...");
        assert_eq!(mask_secret(""), "(none)");
    }
}
