//! Output escaping applied to text as it enters the document tree.
//!
//! HTML metacharacters become entities first, then each configured special
//! glyph becomes a numeric character reference.

/// Characters written out as `&#xNNNN;` references.
pub const NUMERIC_ENTITIES: [char; 10] = [
    '\u{2006}', // six-per-em space (\|)
    '\u{2212}', // minus (\-)
    '\u{00A9}',
    '\u{00AE}',
    '\u{2122}',
    '\u{2014}',
    '\u{2013}',
    '\u{2022}',
    '\u{00B0}',
    '\u{00D7}',
];

pub fn escape_output(text: &str) -> String {
    let encoded = html_escape::encode_text(text);
    let mut out = String::with_capacity(encoded.len());
    for c in encoded.chars() {
        if NUMERIC_ENTITIES.contains(&c) {
            out.push_str(&format!("&#x{:04X};", c as u32));
        } else {
            out.push(c);
        }
    }
    out
}
