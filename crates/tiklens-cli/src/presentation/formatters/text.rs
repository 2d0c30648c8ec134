pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// `1 follower`, `3 followers`
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// `+3`, `-2`, `0`
pub fn signed(n: i64) -> String {
    if n > 0 { format!("+{}", n) } else { n.to_string() }
}

pub fn profile_url(username: &str) -> String {
    format!("https://www.tiktok.com/@{}", username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("alice", 10), "alice");
        assert_eq!(truncate("a_very_long_username", 10), "a_very_...");
        assert_eq!(truncate("abcdef", 3), "abc");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("ééééé", 5), "ééééé");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "follower", "followers"), "1 follower");
        assert_eq!(pluralize(0, "follower", "followers"), "0 followers");
    }

    #[test]
    fn test_profile_url() {
        assert_eq!(profile_url("alice"), "https://www.tiktok.com/@alice");
    }

    #[test]
    fn test_signed() {
        assert_eq!(signed(3), "+3");
        assert_eq!(signed(-2), "-2");
        assert_eq!(signed(0), "0");
    }
}
