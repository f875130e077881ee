use crate::stopwords;
use std::borrow::Cow;

/// Normalize free text into a canonical token string.
///
/// Lowercases, treats every run of characters outside `a`..`z` as a single
/// separator, optionally drops stop words, and joins the remaining tokens
/// with single spaces. Absent input is the empty string. The output contains
/// only lowercase ASCII letters and single interior spaces.
pub fn normalize(text: Option<&str>, remove_stop_words: bool) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let lower = text.to_lowercase();
    let kept: Vec<&str> = tokens(&lower)
        .filter(|t| !remove_stop_words || !is_stop_word(t))
        .collect();
    kept.join(" ")
}

/// Normalize without stop-word removal. This is the form catalog skills
/// and typed user skills are stored in.
pub fn clean_text(text: &str) -> String {
    normalize(Some(text), false)
}

/// Normalize raw bytes, replacing invalid UTF-8 sequences with separators.
pub fn normalize_bytes(bytes: &[u8], remove_stop_words: bool) -> String {
    let text: Cow<'_, str> = String::from_utf8_lossy(bytes);
    normalize(Some(&text), remove_stop_words)
}

/// Split already-lowercased text into maximal runs of `a`..`z`.
///
/// Characters outside that range (including uppercase letters) act as
/// separators, so callers must lowercase first.
pub fn tokens(lower: &str) -> impl Iterator<Item = &str> {
    lower
        .split(|c: char| !c.is_ascii_lowercase())
        .filter(|t| !t.is_empty())
}

pub fn is_stop_word(word: &str) -> bool {
    stopwords::english().contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_canonical(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_lowercase() || c == ' ')
            && !s.starts_with(' ')
            && !s.ends_with(' ')
            && !s.contains("  ")
    }

    #[test]
    fn normalize_strips_punctuation_and_case() {
        assert_eq!(
            normalize(Some(" Python, Machine-Learning & SQL!! "), true),
            "python machine learning sql"
        );
    }

    #[test]
    fn normalize_collapses_runs() {
        // "c++" is one token, not a token plus empty fragments
        assert_eq!(clean_text("c++"), "c");
        assert_eq!(clean_text("c++, c#,  java"), "c c java");
    }

    #[test]
    fn normalize_none_is_empty() {
        assert_eq!(normalize(None, false), "");
        assert_eq!(normalize(None, true), "");
    }

    #[test]
    fn normalize_empty_and_punctuation_only() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   "), "");
        assert_eq!(clean_text("!!! 123 --- ___"), "");
    }

    #[test]
    fn normalize_digits_and_underscores_separate() {
        assert_eq!(clean_text("python3_django2"), "python django");
        assert_eq!(clean_text("web2py"), "web py");
    }

    #[test]
    fn normalize_unicode_noise() {
        assert_eq!(clean_text("Café ☕ résumé 🚀 Rust"), "caf r sum rust");
        assert!(is_canonical(&clean_text("日本語 テキスト")));
        assert_eq!(clean_text("日本語 テキスト"), "");
    }

    #[test]
    fn normalize_stop_words_optional() {
        let text = "Python with the AWS and Kubernetes";
        assert_eq!(
            normalize(Some(text), false),
            "python with the aws and kubernetes"
        );
        assert_eq!(normalize(Some(text), true), "python aws kubernetes");
    }

    #[test]
    fn normalize_only_stop_words_is_empty() {
        assert_eq!(normalize(Some("The and of, to!"), true), "");
    }

    #[test]
    fn normalize_keeps_skill_like_short_words() {
        assert_eq!(normalize(Some("Go, R and C"), true), "go r c");
        assert_eq!(normalize(Some("IT helpdesk, Go"), true), "it helpdesk go");
    }

    #[test]
    fn normalize_output_is_canonical() {
        let inputs = [
            "",
            "  leading and trailing  ",
            "MiXeD CaSe",
            "tabs\tand\nnewlines\r\n",
            "émoji 😀 and ñ",
            "a.b.c",
            "\u{0000}\u{ffff}",
        ];
        for input in inputs {
            for rm in [false, true] {
                let out = normalize(Some(input), rm);
                assert!(is_canonical(&out), "not canonical: {out:?} from {input:?}");
            }
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [
            " Python, Machine-Learning & SQL!! ",
            "The quick brown fox",
            "c++ / C# / F#",
            "",
        ];
        for input in inputs {
            for rm in [false, true] {
                let once = normalize(Some(input), rm);
                let twice = normalize(Some(&once), rm);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn normalize_bytes_handles_invalid_utf8() {
        let bytes = b"Rust\xff\xfeSQL";
        assert_eq!(normalize_bytes(bytes, false), "rust sql");
        assert_eq!(normalize_bytes(&[0xff, 0xfe, 0xfd], false), "");
    }

    #[test]
    fn tokens_skips_empty() {
        let t: Vec<&str> = tokens("--a--bc--").collect();
        assert_eq!(t, vec!["a", "bc"]);
    }

    #[test]
    fn stop_word_lookup() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("and"));
        assert!(!is_stop_word("python"));
        assert!(!is_stop_word("go"));
        assert!(!is_stop_word("it"));
    }
}
