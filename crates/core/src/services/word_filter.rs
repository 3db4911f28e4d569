//! Word filter for guest submissions.
//!
//! A deny-list filter with leetspeak normalization. Submitted text is
//! lowercased, common digit and symbol substitutions are undone, and the
//! result is checked for substring matches against the list.

/// Inappropriate words and phrases. Basic list, extend as needed.
const DENY_LIST: &[&str] = &[
    // Common profanity
    "fuck", "shit", "ass", "bitch", "damn", "crap", "dick", "cock", "pussy",
    "asshole", "bastard", "cunt", "whore", "slut", "fag", "faggot", "nigger",
    "nigga", "retard", "retarded",
    // Variations with common letter substitutions
    "f*ck", "sh*t", "b*tch", "a$$", "d*ck", "c*ck", "p*ssy",
    "fck", "fuk", "fuq", "sht", "btch", "dck",
    // Hate speech
    "nazi", "hitler", "kys", "kill yourself",
    // Spam/scam patterns
    "buy now", "click here", "free money", "make money fast",
];

/// Outcome of running text through the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
    /// Whether the text passed.
    pub is_clean: bool,
    /// User-facing reason when it did not.
    pub reason: Option<String>,
}

impl FilterResult {
    const fn clean() -> Self {
        Self {
            is_clean: true,
            reason: None,
        }
    }

    fn rejected(reason: &str) -> Self {
        Self {
            is_clean: false,
            reason: Some(reason.to_string()),
        }
    }
}

/// Normalize text for comparison: lowercase, undo common substitutions,
/// strip masking characters, collapse whitespace.
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = false;

    for c in text.to_lowercase().chars() {
        let mapped = match c {
            '0' => Some('o'),
            '1' => Some('i'),
            '3' => Some('e'),
            '4' => Some('a'),
            '5' | '$' => Some('s'),
            '@' => Some('a'),
            '*' | '_' | '-' => None,
            c if c.is_whitespace() => {
                if last_was_space {
                    None
                } else {
                    Some(' ')
                }
            }
            c => Some(c),
        };

        if let Some(m) = mapped {
            last_was_space = m == ' ';
            out.push(m);
        }
    }

    out
}

fn contains_denied(text: &str) -> bool {
    let normalized = normalize(text);
    DENY_LIST
        .iter()
        .any(|word| normalized.contains(&normalize(word)))
}

/// Check a message body.
#[must_use]
pub fn check_message(message: &str) -> FilterResult {
    if contains_denied(message) {
        FilterResult::rejected(
            "Your message contains inappropriate language. Please keep it friendly!",
        )
    } else {
        FilterResult::clean()
    }
}

/// Check a display name.
#[must_use]
pub fn check_name(name: &str) -> FilterResult {
    if contains_denied(name) {
        FilterResult::rejected("Please use an appropriate name.")
    } else {
        FilterResult::clean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_message_passes() {
        let result = check_message("Loved the 3D printed vase, great layer lines!");
        assert!(result.is_clean);
        assert!(result.reason.is_none());
    }

    #[test]
    fn test_plain_profanity_rejected() {
        assert!(!check_message("well shit").is_clean);
    }

    #[test]
    fn test_leetspeak_rejected() {
        // "fr33 m0n3y" normalizes to "free money"
        assert!(!check_message("get fr33 m0n3y here").is_clean);
    }

    #[test]
    fn test_masked_profanity_rejected() {
        assert!(!check_message("s-h-i-t happens").is_clean);
        assert!(!check_message("f*ck").is_clean);
    }

    #[test]
    fn test_spam_phrase_rejected() {
        assert!(!check_message("click here for a deal").is_clean);
    }

    #[test]
    fn test_name_check_uses_name_reason() {
        let result = check_name("b1tch");
        assert!(!result.is_clean);
        assert_eq!(result.reason.as_deref(), Some("Please use an appropriate name."));
    }

    #[test]
    fn test_clean_name_passes() {
        assert!(check_name("Sharon").is_clean);
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("kill   \t yourself"), "kill yourself");
    }
}
