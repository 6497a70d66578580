//! Conditions of `.if` and `.ie`.
//!
//! Supported forms: `n`, `t`, `rNAME` (register is set), numeric comparisons
//! like `1<2` or `3=3`, and any of these negated with a leading `!`. Register
//! escapes are expanded by the caller before parsing. Anything else is treated
//! as false.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::registers::Registers;
use crate::parsing::state::TranslationMode;

static COMPARISON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?\d+(?:\.\d+)?)\s*(==|=|<=|>=|!=|<|>)\s*([+-]?\d+(?:\.\d+)?)$")
        .expect("comparison pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    fn parse(op: &str) -> Option<Self> {
        match op {
            "=" | "==" => Some(Self::Eq),
            "!=" => Some(Self::Ne),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Le),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Ge),
            _ => None,
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Self::Eq => lhs == rhs,
            Self::Ne => lhs != rhs,
            Self::Lt => lhs < rhs,
            Self::Le => lhs <= rhs,
            Self::Gt => lhs > rhs,
            Self::Ge => lhs >= rhs,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Not(Box<Condition>),
    Nroff,
    Troff,
    RegisterSet(String),
    Compare { lhs: f64, op: CompareOp, rhs: f64 },
}

impl Condition {
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some(inner) = text.strip_prefix('!') {
            return Self::parse(inner).map(|c| Self::Not(Box::new(c)));
        }
        match text {
            "n" => return Some(Self::Nroff),
            "t" => return Some(Self::Troff),
            _ => {}
        }
        if let Some(name) = text.strip_prefix('r')
            && !name.is_empty()
        {
            return Some(Self::RegisterSet(name.to_string()));
        }
        let caps = COMPARISON.captures(text)?;
        Some(Self::Compare {
            lhs: caps.get(1)?.as_str().parse().ok()?,
            op: CompareOp::parse(caps.get(2)?.as_str())?,
            rhs: caps.get(3)?.as_str().parse().ok()?,
        })
    }

    pub fn holds(&self, mode: TranslationMode, registers: &Registers) -> bool {
        match self {
            Self::Not(inner) => !inner.holds(mode, registers),
            Self::Nroff => mode == TranslationMode::Nroff,
            Self::Troff => mode == TranslationMode::Troff,
            Self::RegisterSet(name) => registers.contains(name),
            Self::Compare { lhs, op, rhs } => op.apply(*lhs, *rhs),
        }
    }
}

/// Evaluates a condition; unparsable conditions are false.
pub fn evaluate(text: &str, mode: TranslationMode, registers: &Registers) -> bool {
    Condition::parse(text).is_some_and(|condition| condition.holds(mode, registers))
}
