//! The ordered escape rule table.
//!
//! Each rule is a regex anchored at a backslash. At every backslash the rules
//! are tried in order and the first match wins, so longer forms of the same
//! escape (`\n(xx`, `\f[name]`) sit next to their short forms with patterns that
//! cannot overlap.

use std::sync::LazyLock;

use regex::Regex;

/// What a matched escape turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// Fixed replacement text.
    Literal(&'static str),
    /// `\"`: the rest of the line is dropped.
    Comment,
    /// Interpolates the register named by the first capture.
    Register,
    /// Switches font to the name in the first capture.
    Font,
    /// Named special character from the first capture.
    Special,
    /// Produces nothing (`\&`, `\c`, italic corrections, conditional braces).
    Dropped,
}

pub struct EscapeRule {
    pub pattern: Regex,
    pub expansion: Expansion,
}

fn rule(pattern: &str, expansion: Expansion) -> EscapeRule {
    EscapeRule {
        pattern: Regex::new(&format!("^(?:{pattern})")).expect("escape rule pattern is valid"),
        expansion,
    }
}

pub static RULES: LazyLock<Vec<EscapeRule>> = LazyLock::new(|| {
    use Expansion::*;
    vec![
        rule(r"\\e", Literal("\\")),
        rule(r"\\-", Literal("\u{2212}")),
        rule(r"\\\|", Literal("\u{2006}")),
        rule(r"\\ ", Literal(" ")),
        rule(r#"\\""#, Comment),
        rule(r"\\n\(([A-Za-z0-9.]{2})", Register),
        rule(r"\\n\[([^\]]+)\]", Register),
        rule(r"\\n([A-Za-z0-9.])", Register),
        rule(r"\\f\(([A-Za-z0-9]{2})", Font),
        rule(r"\\f\[([^\]]*)\]", Font),
        rule(r"\\f([A-Za-z0-9])", Font),
        rule(r"\\\((\S{2})", Special),
        rule(r"\\\[([^\]\s]+)\]", Special),
        rule(r"\\[&c{}%),/]", Dropped),
        rule(r"\\~", Literal("\u{00A0}")),
        rule(r"\\0", Literal("\u{2007}")),
        rule(r"\\\^", Literal("\u{200A}")),
        rule(r"\\'", Literal("\u{00B4}")),
        rule(r"\\`", Literal("`")),
        rule(r"\\\\", Literal("\\")),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    fn first_match(input: &str) -> Option<(Expansion, String)> {
        RULES.iter().find_map(|rule| {
            rule.pattern
                .find(input)
                .map(|m| (rule.expansion, m.as_str().to_string()))
        })
    }

    #[test]
    fn rules_only_match_at_start() {
        assert!(first_match(r"x\e").is_none());
    }

    #[test]
    fn long_register_form_wins_over_short() {
        assert_eq!(
            first_match(r"\n(PDrest"),
            Some((Expansion::Register, r"\n(PD".to_string()))
        );
    }

    #[test]
    fn bracketed_font_name() {
        assert_eq!(
            first_match(r"\f[BI]x"),
            Some((Expansion::Font, r"\f[BI]".to_string()))
        );
    }

    #[test]
    fn unknown_escape_matches_nothing() {
        assert!(first_match(r"\q").is_none());
    }
}
