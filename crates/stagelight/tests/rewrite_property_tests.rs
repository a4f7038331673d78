//! Property tests for direction-aware class rewriting.

use proptest::prelude::*;
use stagelight::{Direction, rewrite_class_name};

/// Tokens built from the directional vocabulary plus plain utilities.
fn directional_token() -> impl Strategy<Value = String> {
    let prefix = prop::sample::select(vec!["ms", "me", "ps", "pe"]);
    let suffix = prop::sample::select(vec!["start", "end"]);
    prop_oneof![
        (prefix, "(-[a-z0-9]{1,4}){0,2}").prop_map(|(p, rest)| format!("{p}{rest}")),
        ("[a-z]{1,6}-", suffix).prop_map(|(head, s)| format!("{head}{s}")),
        "[a-z]{1,8}(-[a-z0-9]{1,4})?",
    ]
}

fn class_list() -> impl Strategy<Value = String> {
    prop::collection::vec(directional_token(), 0..8).prop_map(|tokens| tokens.join(" "))
}

fn normalized(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

proptest! {
    #[test]
    fn rtl_rewrite_is_an_involution(s in class_list()) {
        let once = rewrite_class_name(Direction::Rtl, &s);
        prop_assert_eq!(rewrite_class_name(Direction::Rtl, &once), s);
    }

    #[test]
    fn ltr_rewrite_is_identity(s in class_list()) {
        prop_assert_eq!(rewrite_class_name(Direction::Ltr, &s), s);
    }

    #[test]
    fn rewrite_never_panics(s in "\\PC{0,80}") {
        let _ = rewrite_class_name(Direction::Rtl, &s);
        let _ = rewrite_class_name(Direction::Ltr, &s);
    }

    #[test]
    fn rewrite_normalizes_whitespace(s in "[a-z \\t\\n-]{0,60}") {
        prop_assert_eq!(rewrite_class_name(Direction::Ltr, &s), normalized(&s));
    }

    #[test]
    fn rewrite_preserves_token_count(s in "[a-z0-9 -]{0,60}") {
        let out = rewrite_class_name(Direction::Rtl, &s);
        prop_assert_eq!(out.split_whitespace().count(), s.split_whitespace().count());
    }

    #[test]
    fn plain_tokens_pass_through(s in "(d|fw|col|row|btn)-(flex|bold|block|lg|[0-9]{1,2})") {
        prop_assert_eq!(rewrite_class_name(Direction::Rtl, &s), s);
    }
}
