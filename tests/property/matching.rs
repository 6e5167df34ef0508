//! Normalization and approximate matching properties.

use postsift::fuzzy::{find_approx, substring_distance};
use postsift::{build_index, fuzzy_search, normalize, IndexMode, SearchConfig};
use proptest::prelude::*;

use crate::common::make_doc;

/// Latin, Vietnamese and Hangul text with irregular spacing.
fn blog_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(
        "[a-zA-Z àáạảãâầấậẩẫăằắặẳẵèéẹẻẽêềếệểễìíịỉĩòóọỏõôồốộổỗơờớợởỡùúụủũưừứựửữỳýỵỷỹđĐÀÁÂÊÔƠƯ가-힣\t]{0,30}",
    )
    .unwrap()
}

fn ascii_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,10}").unwrap()
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(text in blog_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_collapses_whitespace(text in blog_text()) {
        let out = normalize(&text);
        prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.contains('\t'));
    }

    #[test]
    fn prop_contained_pattern_is_exact(
        prefix in ascii_word(),
        word in ascii_word(),
        suffix in ascii_word(),
    ) {
        let text = format!("{prefix} {word} {suffix}");
        let found = find_approx(&word, &text, 0);
        prop_assert_eq!(found.map(|m| m.distance), Some(0));
    }

    #[test]
    fn prop_distance_never_exceeds_pattern_length(pattern in ascii_word(), text in ascii_word()) {
        let p: Vec<char> = pattern.chars().collect();
        let t: Vec<char> = text.chars().collect();
        let found = substring_distance(&p, &t, p.len());
        prop_assert!(found.is_some());
        prop_assert!(found.unwrap().distance <= p.len());
    }

    #[test]
    fn prop_larger_budget_finds_superset(pattern in ascii_word(), text in ascii_word(), max in 0usize..4) {
        if find_approx(&pattern, &text, max).is_some() {
            prop_assert!(find_approx(&pattern, &text, max + 1).is_some());
        }
    }

    #[test]
    fn prop_one_deletion_is_within_one_edit(
        word in "[a-z]{3,10}",
        idx in any::<prop::sample::Index>(),
    ) {
        let mut chars: Vec<char> = word.chars().collect();
        chars.remove(idx.index(chars.len()));
        let typo: String = chars.into_iter().collect();

        let found = find_approx(&word, &typo, 1);
        prop_assert!(found.map_or(false, |m| m.distance <= 1));
    }

    #[test]
    fn prop_title_finds_its_own_post(words in prop::collection::vec("[a-z]{2,8}", 1..4)) {
        let title = words.join(" ");
        let docs = vec![
            make_doc("target", &title, "2024-01-01"),
            make_doc("other", "Unrelated", "2024-02-01"),
        ];
        let index = build_index(&docs, IndexMode::TitleOnly);
        let hits = fuzzy_search(&index, &title, &SearchConfig::default());
        prop_assert!(hits.iter().any(|h| h.doc == 0));
    }
}
