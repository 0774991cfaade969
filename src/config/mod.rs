//! Load options for langdict.
//!
//! This module handles:
//! - Normalizing the loose call shapes into a validated [`Config`]
//! - Language code and default file name validation
//! - TOML options file parsing

pub mod normalize;
pub mod parser;
pub mod types;

pub use normalize::{Language, Target, normalize};
pub use parser::{parse_options_file, parse_options_str};
pub use types::{
	Config, DEFAULT_FILE_NAME, DirectoryList, LanguageCode, Options, normalize_default_file_name,
};
