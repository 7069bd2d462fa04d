// ============================
// crates/ui-lib/src/rules.rs
// ============================
//! The password rule catalog and its derived computations.
//!
//! The catalog is fixed at seven rules. Two independent computations run on
//! every keystroke in the recovery view:
//! - [`sample_active`] shuffles the catalog and takes the first five, so the
//!   displayed requirements churn as the user types.
//! - [`met_rules`] evaluates *every* rule against the full input, so a rule
//!   can show up as met even while it is not displayed as a requirement.
//!   That mismatch is the product; do not scope the check to the subset.

use neverpass_common::RuleId;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Number of rules displayed as requirements at any time
pub const ACTIVE_RULES: usize = 5;

static UPPERCASE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").unwrap());
static LOWERCASE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]").unwrap());
static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").unwrap());
static SPECIAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\W_]").unwrap());
static EMOJI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{1F600}-\x{1F64F}]").unwrap());

/// A single catalog entry: identifier, display text, and a pure predicate
/// over the current input
pub struct Rule {
    pub id: RuleId,
    pub description: &'static str,
    check: fn(&str) -> bool,
}

impl Rule {
    /// Evaluate this rule's predicate against `text`
    pub fn is_met(&self, text: &str) -> bool {
        (self.check)(text)
    }
}

fn min_length(text: &str) -> bool {
    text.chars().count() >= 10
}

fn min_uppercase(text: &str) -> bool {
    UPPERCASE_RE.find_iter(text).count() >= 2
}

fn min_lowercase(text: &str) -> bool {
    LOWERCASE_RE.find_iter(text).count() >= 3
}

fn min_digits(text: &str) -> bool {
    DIGIT_RE.find_iter(text).count() >= 3
}

fn min_special(text: &str) -> bool {
    SPECIAL_RE.find_iter(text).count() >= 2
}

fn has_banana(text: &str) -> bool {
    text.contains("banana")
}

fn has_emoji(text: &str) -> bool {
    EMOJI_RE.is_match(text)
}

/// The full, immutable rule catalog
pub static CATALOG: [Rule; 7] = [
    Rule {
        id: RuleId::Length,
        description: "At least 10 characters",
        check: min_length,
    },
    Rule {
        id: RuleId::Uppercase,
        description: "At least two uppercase letters",
        check: min_uppercase,
    },
    Rule {
        id: RuleId::Lowercase,
        description: "At least three lowercase letters",
        check: min_lowercase,
    },
    Rule {
        id: RuleId::Digit,
        description: "At least three digits",
        check: min_digits,
    },
    Rule {
        id: RuleId::SpecialChar,
        description: "At least two special characters",
        check: min_special,
    },
    Rule {
        id: RuleId::Funny,
        description: "Must include the word \"banana\"",
        check: has_banana,
    },
    Rule {
        id: RuleId::Emoji,
        description: "Must contain at least one emoji \u{1F603}",
        check: has_emoji,
    },
];

/// Shuffle the catalog and take the first [`ACTIVE_RULES`] entries as the
/// currently displayed requirements
pub fn sample_active<R: Rng + ?Sized>(rng: &mut R) -> Vec<&'static Rule> {
    let mut order: Vec<&'static Rule> = CATALOG.iter().collect();
    order.shuffle(rng);
    order.truncate(ACTIVE_RULES);
    order
}

/// Descriptions of every catalog rule `text` satisfies, in catalog order
pub fn met_rules(text: &str) -> Vec<&'static str> {
    CATALOG
        .iter()
        .filter(|rule| rule.is_met(text))
        .map(|rule| rule.description)
        .collect()
}

/// A uniformly random `#RRGGBB` color
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06X}", rng.random_range(0..0x100_0000u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_catalog_is_fixed_at_seven() {
        assert_eq!(CATALOG.len(), 7);
        let ids: Vec<RuleId> = CATALOG.iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                RuleId::Length,
                RuleId::Uppercase,
                RuleId::Lowercase,
                RuleId::Digit,
                RuleId::SpecialChar,
                RuleId::Funny,
                RuleId::Emoji,
            ]
        );
    }

    #[test]
    fn test_met_rules_reference_input() {
        // 2 uppercase, 3 lowercase, 3 digits, 2 specials, length 10,
        // no "banana", no emoji
        let met = met_rules("AAbbb123!!");
        assert_eq!(
            met,
            vec![
                "At least 10 characters",
                "At least two uppercase letters",
                "At least three lowercase letters",
                "At least three digits",
                "At least two special characters",
            ]
        );
    }

    #[test]
    fn test_met_rules_empty_input() {
        assert!(met_rules("").is_empty());
    }

    #[test]
    fn test_banana_and_emoji_rules() {
        let met = met_rules("banana\u{1F600}");
        assert!(met.contains(&"Must include the word \"banana\""));
        assert!(met.contains(&"Must contain at least one emoji \u{1F603}"));
        // Emoji outside the U+1F600..U+1F64F block does not count
        let met = met_rules("\u{1F680}");
        assert!(!met.contains(&"Must contain at least one emoji \u{1F603}"));
    }

    #[test]
    fn test_special_char_counts_underscore() {
        // `[\W_]` treats the underscore as special even though \w matches it
        assert!(met_rules("__").contains(&"At least two special characters"));
    }

    #[test]
    fn test_active_subset_always_five() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let active = sample_active(&mut rng);
            assert_eq!(active.len(), ACTIVE_RULES);
            // No duplicates: a shuffle-and-take can never repeat an entry
            for (i, rule) in active.iter().enumerate() {
                assert!(!active[..i].iter().any(|r| r.id == rule.id));
            }
        }
    }

    #[test]
    fn test_sampling_is_seed_deterministic() {
        let a: Vec<RuleId> = sample_active(&mut StdRng::seed_from_u64(7))
            .iter()
            .map(|r| r.id)
            .collect();
        let b: Vec<RuleId> = sample_active(&mut StdRng::seed_from_u64(7))
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_color_format() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let color = random_color(&mut rng);
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}
