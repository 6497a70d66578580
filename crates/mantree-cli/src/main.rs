use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use mantree_config::Config;
use mantree_engine::io::SECTIONS;
use mantree_engine::render::render_html;
use mantree_engine::{
    TranslateOptions, TranslationMode, encode_output, encoding_for_label, find_man_page, read_lines,
    read_manpath_config, translate,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::{fs, process};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Json,
}

/// Translate a man page into HTML or a JSON document tree.
#[derive(Debug, Parser)]
#[command(name = "mantree", version)]
struct Args {
    /// Page name (looked up on the manpath) or a path to a page source
    name: String,

    /// Manual section to search
    #[arg(short, long)]
    section: Option<u8>,

    /// Write output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fail on requests the translator does not implement
    #[arg(long)]
    strict: bool,

    /// Use nroff layout settings
    #[arg(long)]
    nroff: bool,

    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Encoding of the page source
    #[arg(short, long, default_value = "utf-8")]
    encoding: String,

    /// Encoding of the written output
    #[arg(long, default_value = "utf-8")]
    output_encoding: String,

    /// Log dispatch details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", Config::config_path().display());
            process::exit(1);
        }
    };

    let options = TranslateOptions {
        strict: args.strict || config.strict,
        mode: if args.nroff || config.nroff {
            TranslationMode::Nroff
        } else {
            TranslationMode::Troff
        },
    };

    let input_encoding = encoding_for_label(&args.encoding)?;
    let output_encoding = encoding_for_label(&args.output_encoding)?;

    let page = resolve_page(&args.name, args.section, &config)?;
    log::debug!("translating {} as {}", page.display(), input_encoding.name());

    let lines = read_lines(&page, input_encoding)
        .with_context(|| format!("reading {}", page.display()))?;
    let translation = match translate(&lines, &options) {
        Ok(translation) => translation,
        Err(e) => {
            // strict mode: report the offending request and stop
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let rendered = match args.format {
        Format::Html => render_html(
            &translation,
            output_encoding.output_encoding().name(),
            &chrono::Local::now(),
        ),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&translation)?;
            json.push('\n');
            json
        }
    };

    let bytes = encode_output(&rendered, output_encoding);
    match &args.output {
        Some(path) => fs::write(path, &bytes)
            .with_context(|| format!("writing {}", path.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(&bytes)
            .context("writing to stdout")?,
    }

    Ok(())
}

/// Finds the page source for `name`.
///
/// An explicit section is searched alone; otherwise the configured default
/// section is tried first, then the rest in order. A name that is not found
/// on the manpath is tried as a file path.
fn resolve_page(name: &str, section: Option<u8>, config: &Config) -> Result<PathBuf> {
    let mut dirs = config.extra_manpath.clone();
    dirs.extend(read_manpath_config(&config.manpath_config));

    let sections: Vec<u8> = match section {
        Some(section) => vec![section],
        None => std::iter::once(config.default_section)
            .chain(SECTIONS.filter(|s| *s != config.default_section))
            .collect(),
    };

    if !name.contains('/')
        && let Some(found) = sections
            .iter()
            .find_map(|section| find_man_page(name, *section, &dirs))
    {
        return Ok(found);
    }

    let path = Path::new(name);
    if path.is_file() {
        return Ok(path.to_path_buf());
    }

    match section {
        Some(section) => bail!("No manual entry for {name} in section {section}"),
        None => bail!("No manual entry for {name}"),
    }
}
