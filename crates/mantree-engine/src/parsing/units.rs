//! Troff lengths with scale indicators, converted to em.
//!
//! Conversions assume a 10 point font on 12 point line spacing.

use std::sync::LazyLock;

use regex::Regex;

static LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+))([mnpPicuv]?)$").expect("length pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Em,
    En,
    Point,
    Pica,
    Inch,
    Centimeter,
    Vee,
}

impl Unit {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "m" => Some(Self::Em),
            "n" => Some(Self::En),
            "p" => Some(Self::Point),
            "P" => Some(Self::Pica),
            "i" => Some(Self::Inch),
            "c" => Some(Self::Centimeter),
            "v" => Some(Self::Vee),
            _ => None,
        }
    }

    fn ems(self) -> f32 {
        match self {
            Self::Em => 1.0,
            Self::En => 0.5,
            Self::Point => 0.1,
            Self::Pica => 1.2,
            Self::Inch => 7.2,
            Self::Centimeter => 7.2 / 2.54,
            Self::Vee => 1.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: Unit,
}

impl Length {
    /// Parses `3`, `0.5v`, `-2n`. A bare number takes `default_unit`.
    pub fn parse(text: &str, default_unit: Unit) -> Option<Self> {
        let caps = LENGTH.captures(text.trim())?;
        let value: f32 = caps.get(1)?.as_str().parse().ok()?;
        let suffix = caps.get(2).map_or("", |m| m.as_str());
        let unit = match suffix {
            "" => default_unit,
            // basic units are too small to matter; read them as points
            "u" => Unit::Point,
            other => Unit::from_suffix(other)?,
        };
        Some(Self { value, unit })
    }

    pub fn to_em(self) -> f32 {
        self.value * self.unit.ems()
    }

    /// The length counted in `unit`, without a detour through em when units agree.
    pub fn in_unit(self, unit: Unit) -> f32 {
        if self.unit == unit {
            self.value
        } else {
            self.to_em() / unit.ems()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2", Unit::En, 1.0)]
    #[case("2m", Unit::En, 2.0)]
    #[case("1i", Unit::En, 7.2)]
    #[case(".5", Unit::Em, 0.5)]
    #[case("-4n", Unit::En, -2.0)]
    #[case("10p", Unit::En, 1.0)]
    fn converts_to_em(#[case] text: &str, #[case] default_unit: Unit, #[case] ems: f32) {
        let length = Length::parse(text, default_unit).unwrap();
        assert!((length.to_em() - ems).abs() < 1e-4, "{text} -> {}", length.to_em());
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("3x")]
    #[case("1.2.3")]
    fn rejects_malformed(#[case] text: &str) {
        assert_eq!(Length::parse(text, Unit::Em), None);
    }

    #[test]
    fn same_unit_is_exact() {
        let length = Length::parse("2v", Unit::Vee).unwrap();
        assert_eq!(length.in_unit(Unit::Vee), 2.0);
    }
}
