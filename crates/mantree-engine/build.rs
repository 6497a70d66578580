//! Writes `fixture_tests.rs` into `OUT_DIR`: a `#[test]` for every page under
//! `tests/fixtures/`, each calling `fixture_test` with the page's file stem.

use std::fmt::Write;
use std::path::{Path, PathBuf};

const FIXTURE_DIR: &str = "tests/fixtures";

fn main() {
    let out_dir = std::env::var("OUT_DIR").expect("cargo sets OUT_DIR");
    let dest = Path::new(&out_dir).join("fixture_tests.rs");

    let mut pages: Vec<PathBuf> = std::fs::read_dir(FIXTURE_DIR)
        .expect("fixture directory is readable")
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "man"))
        .collect();
    pages.sort();

    let mut code = String::from("mod fixtures {\n    use super::fixture_test;\n");
    for page in &pages {
        let Some(stem) = page.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let _ = write!(
            code,
            "\n    #[test]\n    fn {}() {{\n        fixture_test({stem:?});\n    }}\n",
            test_name(stem)
        );
        println!("cargo::rerun-if-changed={}", page.display());
    }
    code.push_str("}\n");

    std::fs::write(&dest, code).expect("fixture tests are writable");
    println!("cargo::rerun-if-changed={FIXTURE_DIR}");
}

/// `nofill-blocks` → `nofill_blocks`; a leading digit gets a `page_` prefix.
fn test_name(stem: &str) -> String {
    let name: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("page_{name}")
    } else {
        name
    }
}
