/// Looks up a named special character (`\(co`, `\[em]`).
///
/// Names of the form `uXXXX` resolve to that Unicode code point.
pub fn special(name: &str) -> Option<String> {
    if let Some(hex) = name.strip_prefix('u')
        && hex.len() >= 4
    {
        return u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from);
    }
    named(name).map(str::to_string)
}

fn named(name: &str) -> Option<&'static str> {
    let glyph = match name {
        "co" => "\u{00A9}",
        "rg" => "\u{00AE}",
        "tm" => "\u{2122}",
        "em" => "\u{2014}",
        "en" => "\u{2013}",
        "hy" => "-",
        "bu" => "\u{2022}",
        "de" => "\u{00B0}",
        "mu" => "\u{00D7}",
        "di" => "\u{00F7}",
        "mi" => "\u{2212}",
        "pl" => "+",
        "eq" => "=",
        "lq" => "\u{201C}",
        "rq" => "\u{201D}",
        "oq" => "\u{2018}",
        "cq" => "\u{2019}",
        "dq" => "\"",
        "aq" => "'",
        "ga" => "`",
        "aa" => "\u{00B4}",
        "ti" | "ap" => "~",
        "ha" => "^",
        "rs" => "\\",
        "sl" => "/",
        "ba" | "or" => "|",
        "Fo" => "\u{00AB}",
        "Fc" => "\u{00BB}",
        "<=" => "\u{2264}",
        ">=" => "\u{2265}",
        "!=" => "\u{2260}",
        "->" => "\u{2192}",
        "<-" => "\u{2190}",
        "ua" => "\u{2191}",
        "da" => "\u{2193}",
        "sc" => "\u{00A7}",
        "ps" => "\u{00B6}",
        "ct" => "\u{00A2}",
        "Eu" | "eu" => "\u{20AC}",
        "Po" => "\u{00A3}",
        "Ye" => "\u{00A5}",
        _ => return None,
    };
    Some(glyph)
}
