// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_man_page(sections: usize) -> Vec<String> {
    let mut lines = vec![r#".TH BENCH 1 2024-01-01 "mantree" "Benchmarks""#.to_string()];

    for section in 0..sections {
        lines.push(format!(".SH SECTION{section}"));
        lines.push(r"Paragraph text with \fBbold\fR and \fIitalic\fR words, a minus \- sign".into());
        lines.push("and a second line that joins the first.".into());
        for option in 0..3 {
            lines.push(".TP".into());
            lines.push(format!(r".BR \-o{option} , \-\-option{option}"));
            lines.push("Description of the option, long enough to wrap in a terminal.".into());
        }
        lines.push(".RS 4".into());
        lines.push(".nf".into());
        lines.push("preformatted   block".into());
        lines.push(".fi".into());
        lines.push(".RE".into());
    }

    lines
}
