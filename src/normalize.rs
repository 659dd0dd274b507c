// Text normalization for sentiment scoring.
// Strips markup and non-semantic characters while keeping sentence
// punctuation, which the weighted scorer can make use of.
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static NOISE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s.,!?;:]").unwrap());

/// Clean raw post text for analysis: drop HTML-like tags, drop characters
/// outside of word characters / whitespace / sentence punctuation, then
/// collapse whitespace runs and trim. Idempotent: character removal happens
/// before whitespace collapsing, so a second pass changes nothing.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let no_tags = TAG_RE.replace_all(raw, "");
    let cleaned = NOISE_RE.replace_all(&no_tags, "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_html_tags() {
        let text = "<p>Hello <b>world</b></p>";
        assert_eq!(normalize(text), "Hello world");
    }

    #[test]
    fn test_collapses_whitespace() {
        let text = "one\t\ttwo\n\nthree    four";
        assert_eq!(normalize(text), "one two three four");
    }

    #[test]
    fn test_removes_noise_keeps_punctuation() {
        let text = "great* product! worth $5, right?";
        assert_eq!(normalize(text), "great product! worth 5, right?");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t  "), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "<div>some @ text</div>",
            "a @@ b",
            "  spaced   out , text !  ",
            "plain sentence.",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_removal_does_not_leave_double_spaces() {
        // Dropping a standalone symbol must not leave two adjacent spaces.
        assert_eq!(normalize("a @ b"), "a b");
    }
}
