pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use io::{
    IoError, encode_output, encoding_for_label, find_man_page, read_lines, read_manpath_config,
};
pub use models::*;
pub use parsing::{
    TranslateError, TranslateOptions, condition::evaluate, escape::tokenize,
    state::TranslationMode, translate,
};
