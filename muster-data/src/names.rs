//! Name normalization for figure/unit matching.
//!
//! Miniature lines ship named variants — "Théoden (plastic)", "Boromir
//! (Captain of the White Tower)", alternate sculpts with an "(Escort)"
//! subtitle — that should all count toward the same role requirement.
//! Stripping the parenthetical qualifier unifies them without a synonym
//! table. Matching is exact on the normalized key: no fuzzy similarity.

/// Normalize a unit or figure name into its match key.
///
/// Removes every parenthesized group together with its surrounding
/// whitespace, then trims and lowercases the remainder. Each group is
/// stripped independently (non-greedy); an unclosed `(` is left in place.
///
/// The function is pure, total, and idempotent. A name that is entirely
/// parenthetical normalizes to the empty string; callers must treat an
/// empty key as matching nothing.
///
/// # Examples
///
/// ```
/// use muster_data::match_key;
///
/// assert_eq!(match_key("Théoden (plastic)"), "théoden");
/// assert_eq!(match_key("Gondor Ranger"), "gondor ranger");
/// assert_eq!(match_key("(Unknown)"), "");
/// ```
pub fn match_key(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut rest = name;

    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            break;
        };
        out.push_str(rest[..open].trim_end());
        rest = rest[open + close + 1..].trim_start();
    }
    out.push_str(rest);

    out.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_is_lowercased_and_trimmed() {
        assert_eq!(match_key("  Gondor Ranger  "), "gondor ranger");
    }

    #[test]
    fn strips_trailing_variant() {
        assert_eq!(match_key("Théoden (plastic)"), match_key("Théoden"));
        assert_eq!(match_key("Boromir (metal)"), "boromir");
    }

    #[test]
    fn strips_multiple_independent_groups() {
        assert_eq!(match_key("Gandalf (the White) (mounted)"), "gandalf");
        assert_eq!(match_key("A (x) B (y)"), "ab");
    }

    #[test]
    fn interior_group_consumes_surrounding_whitespace() {
        // Mirrors replacing the whole `\s*(...)\s*` run with nothing.
        assert_eq!(match_key("Éomer (Marshal) of Rohan"), "éomerof rohan");
    }

    #[test]
    fn entirely_parenthetical_name_is_empty() {
        assert_eq!(match_key("(Unknown)"), "");
        assert_eq!(match_key("  (a) (b)  "), "");
    }

    #[test]
    fn unclosed_paren_is_kept() {
        assert_eq!(match_key("Frodo (Ringbearer"), "frodo (ringbearer");
    }

    #[test]
    fn idempotent() {
        for name in [
            "Théoden (plastic)",
            "(Unknown)",
            "Frodo (Ringbearer",
            "A (x) B (y)",
            "",
            "  MÛMAK (War Beast)  ",
        ] {
            let once = match_key(name);
            assert_eq!(match_key(&once), once);
        }
    }
}
