/// Fuzzy "did you mean" suggestions for unknown library names.
use nucleo_matcher::{
    Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};

/// Maximum number of suggestions returned.
const MAX_SUGGESTIONS: usize = 5;

/// Rank `installed` names against `query`, best match first.
///
/// Names that do not fuzzy-match at all are dropped.
#[must_use]
pub fn suggest(query: &str, installed: &[&str]) -> Vec<String> {
    let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);
    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);

    let mut scored: Vec<(&str, u32)> = installed
        .iter()
        .filter_map(|&name| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(name, &mut buf);
            pattern.score(haystack, &mut matcher).map(|s| (name, s))
        })
        .collect();

    // Stable sort keeps registration order among equal scores.
    scored.sort_by_key(|&(_, s)| std::cmp::Reverse(s));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(name, _)| name.to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typo_suggests_close_name() {
        let got = suggest("jqury", &["bootstrap", "jquery", "zepto"]);
        assert_eq!(got, vec!["jquery"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(suggest("xyz", &["bootstrap", "jquery"]).is_empty());
    }

    #[test]
    fn test_limit() {
        let names = ["a1", "a2", "a3", "a4", "a5", "a6", "a7"];
        assert_eq!(suggest("a", &names).len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_equal_scores_keep_registration_order() {
        let names = ["a3", "a1", "a2"];
        assert_eq!(suggest("a", &names), vec!["a3", "a1", "a2"]);
    }
}
