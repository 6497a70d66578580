//! Locating and reading man page sources.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use flate2::read::GzDecoder;

/// Where system man page directories are configured on most Linux systems.
pub const DEFAULT_MANPATH_CONFIG: &str = "/etc/manpath.config";

/// Sections searched by [`find_man_page`].
pub const SECTIONS: std::ops::RangeInclusive<u8> = 1..=8;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not valid {encoding}: {path}")]
    InvalidEncoding {
        path: PathBuf,
        encoding: &'static str,
    },
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),
}

/// Looks up an encoding by its WHATWG label (`utf-8`, `latin1`, `koi8-r`, ...).
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding, IoError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| IoError::UnknownEncoding(label.to_string()))
}

/// Encodes rendered output. Characters the encoding cannot represent become
/// numeric character references.
pub fn encode_output<'a>(text: &'a str, encoding: &'static Encoding) -> Cow<'a, [u8]> {
    let (bytes, used, unmappable) = encoding.encode(text);
    if used != encoding {
        log::debug!("{} output is written as {}", encoding.name(), used.name());
    }
    if unmappable {
        log::warn!("some characters are not representable in {}", used.name());
    }
    bytes
}

/// Reads man page directories from a manpath configuration file.
///
/// A missing or unreadable file gives an empty list.
pub fn read_manpath_config(path: &Path) -> Vec<PathBuf> {
    let Ok(text) = fs::read_to_string(path) else {
        log::debug!("no manpath config at {}", path.display());
        return Vec::new();
    };
    let search_path: Vec<PathBuf> = std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).collect())
        .unwrap_or_default();
    parse_manpath_config(&text, &search_path)
}

/// Collects `MANDATORY_MANPATH dir` entries, and `MANPATH_MAP bin man`
/// entries whose `bin` directory is in `search_path`.
pub fn parse_manpath_config(text: &str, search_path: &[PathBuf]) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            ["MANDATORY_MANPATH", dir, ..] => dirs.push(PathBuf::from(dir)),
            ["MANPATH_MAP", bin, man, ..] if search_path.iter().any(|p| p == Path::new(bin)) => {
                dirs.push(PathBuf::from(man));
            }
            _ => {}
        }
    }
    dirs
}

/// Finds `DIR/manS/NAME.S.gz` or `DIR/manS/NAME.S` in the first directory
/// that has one. Sections outside 1..=8 never match.
pub fn find_man_page(name: &str, section: u8, dirs: &[PathBuf]) -> Option<PathBuf> {
    if !SECTIONS.contains(&section) {
        return None;
    }
    let file_name = format!("{name}.{section}");
    let section_dir = format!("man{section}");

    dirs.iter().find_map(|dir| {
        let base = dir.join(&section_dir);
        [
            base.join(format!("{file_name}.gz")),
            base.join(&file_name),
        ]
        .into_iter()
        .find(|candidate| candidate.is_file())
    })
}

/// Reads a page as lines without terminators, decompressing `.gz` files and
/// decoding from `encoding`. Malformed input is an error, not replaced.
pub fn read_lines(path: &Path, encoding: &'static Encoding) -> Result<Vec<String>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    let bytes = if is_gzip(path) {
        let mut decoded = Vec::new();
        GzDecoder::new(fs::File::open(path)?).read_to_end(&mut decoded)?;
        decoded
    } else {
        fs::read(path)?
    };

    let text = encoding
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .ok_or_else(|| IoError::InvalidEncoding {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        })?;
    Ok(text.lines().map(str::to_string).collect())
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{KOI8_R, UTF_8, WINDOWS_1252};
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_page(dir: &TempDir, relative: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    fn gzip(content: &str) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn parses_manpath_config() {
        let config = "\
# comment
MANDATORY_MANPATH /usr/man
MANDATORY_MANPATH\t/usr/share/man
MANPATH_MAP /bin /usr/share/man
MANPATH_MAP /opt/bin /opt/man
MANDB_MAP /usr/man /var/cache/man
";
        let dirs = parse_manpath_config(config, &[PathBuf::from("/opt/bin")]);
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/usr/man"),
                PathBuf::from("/usr/share/man"),
                PathBuf::from("/opt/man"),
            ]
        );
    }

    #[test]
    fn missing_manpath_config_is_empty() {
        assert!(read_manpath_config(Path::new("/this/path/does/not/exist")).is_empty());
    }

    #[test]
    fn finds_compressed_page_first() {
        let dir = TempDir::new().unwrap();
        write_page(&dir, "man1/ls.1", b".TH LS 1");
        let gz = write_page(&dir, "man1/ls.1.gz", &gzip(".TH LS 1"));

        let found = find_man_page("ls", 1, &[dir.path().to_path_buf()]);
        assert_eq!(found, Some(gz));
    }

    #[test]
    fn finds_plain_page_in_later_directory() {
        let empty = TempDir::new().unwrap();
        let dir = TempDir::new().unwrap();
        let plain = write_page(&dir, "man5/passwd.5", b".TH PASSWD 5");

        let dirs = [empty.path().to_path_buf(), dir.path().to_path_buf()];
        assert_eq!(find_man_page("passwd", 5, &dirs), Some(plain));
        assert_eq!(find_man_page("passwd", 1, &dirs), None);
    }

    #[test]
    fn sections_outside_range_never_match() {
        let dir = TempDir::new().unwrap();
        write_page(&dir, "man9/x.9", b"");
        assert_eq!(find_man_page("x", 9, &[dir.path().to_path_buf()]), None);
        assert_eq!(find_man_page("x", 0, &[dir.path().to_path_buf()]), None);
    }

    #[test]
    fn reads_plain_and_gzip_lines() {
        let dir = TempDir::new().unwrap();
        let plain = write_page(&dir, "a.1", b".TH A 1\r\ntext\n");
        let gz = write_page(&dir, "b.1.GZ", &gzip(".TH B 1\ntext"));

        assert_eq!(read_lines(&plain, UTF_8).unwrap(), vec![".TH A 1", "text"]);
        assert_eq!(read_lines(&gz, UTF_8).unwrap(), vec![".TH B 1", "text"]);
    }

    #[test]
    fn read_errors() {
        let dir = TempDir::new().unwrap();
        let binary = write_page(&dir, "bad.1", &[0xff, 0xfe, 0x00]);

        assert!(matches!(
            read_lines(&dir.path().join("missing.1"), UTF_8),
            Err(IoError::NotFound(_))
        ));
        assert!(matches!(
            read_lines(&binary, UTF_8),
            Err(IoError::InvalidEncoding {
                encoding: "UTF-8",
                ..
            })
        ));
    }

    #[test]
    fn reads_latin1_page() {
        let dir = TempDir::new().unwrap();
        // "Müller café" in ISO-8859-1
        let page = write_page(&dir, "latin1.1", b".TH M\xfcLLER 1\nM\xfcller caf\xe9\n");
        let latin1 = encoding_for_label("latin1").unwrap();

        assert_eq!(
            read_lines(&page, latin1).unwrap(),
            vec![".TH M\u{fc}LLER 1", "M\u{fc}ller caf\u{e9}"]
        );
        assert!(matches!(
            read_lines(&page, UTF_8),
            Err(IoError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn encoding_labels() {
        assert_eq!(encoding_for_label("utf-8").unwrap(), UTF_8);
        assert_eq!(encoding_for_label(" ISO-8859-1 ").unwrap(), WINDOWS_1252);
        assert_eq!(encoding_for_label("koi8-r").unwrap(), KOI8_R);
        assert!(matches!(
            encoding_for_label("klingon"),
            Err(IoError::UnknownEncoding(label)) if label == "klingon"
        ));
    }

    #[test]
    fn unmappable_output_becomes_character_references() {
        assert_eq!(
            encode_output("caf\u{e9} \u{2014}", KOI8_R).as_ref(),
            b"caf&#233; &#8212;"
        );
        assert_eq!(encode_output("\u{2014}", UTF_8).as_ref(), "\u{2014}".as_bytes());
    }
}
