//! Direction-aware utility class names.
//!
//! Spacing and alignment utilities come in logical pairs (`ms-*`/`me-*`,
//! `ps-*`/`pe-*`, `*-start`/`*-end`). In right-to-left layouts the pairs are
//! swapped so the same markup renders mirrored.
//!
//! ```rust
//! use stagelight::{Direction, rewrite_class_name};
//!
//! assert_eq!(
//!     rewrite_class_name(Direction::Rtl, "ms-2 text-start fw-bold"),
//!     "me-2 text-end fw-bold",
//! );
//! assert_eq!(rewrite_class_name(Direction::Ltr, "ms-2"), "ms-2");
//! ```

use crate::mode::Direction;

/// Margin/padding start/end prefixes.
const SPACING_PREFIXES: [&str; 4] = ["ms", "me", "ps", "pe"];

const START: &str = "start";
const END: &str = "end";

/// Rewrites a whitespace-separated class list for `direction`.
///
/// Tokens are rejoined with single spaces in their original order. Left to
/// right leaves every token untouched. Never fails.
pub fn rewrite_class_name(direction: Direction, class_name: &str) -> String {
    let tokens = class_name.split_whitespace();
    match direction {
        Direction::Ltr => tokens.collect::<Vec<_>>().join(" "),
        Direction::Rtl => tokens.map(mirror_token).collect::<Vec<_>>().join(" "),
    }
}

/// Mirrors a single class token. Prefix rules win over suffix rules.
pub fn mirror_token(token: &str) -> String {
    if let Some(rest) = spacing_rest(token) {
        let swapped = match &token[..2] {
            "ms" => "me",
            "me" => "ms",
            "ps" => "pe",
            _ => "ps",
        };
        return format!("{swapped}{rest}");
    }

    if let Some(head) = token.strip_suffix(START) {
        return format!("{head}{END}");
    }
    if let Some(head) = token.strip_suffix(END) {
        return format!("{head}{START}");
    }

    token.to_string()
}

/// Returns the text after a spacing prefix when the token has one followed by
/// a non-alphabetic character or nothing at all.
fn spacing_rest(token: &str) -> Option<&str> {
    let prefix = SPACING_PREFIXES
        .iter()
        .find(|prefix| token.starts_with(*prefix))?;
    let rest = &token[prefix.len()..];
    match rest.chars().next() {
        Some(c) if c.is_alphabetic() => None,
        _ => Some(rest),
    }
}
