use crate::error::{LangError, Result};
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

/// Default message file name used when neither the options nor the context
/// provide one.
pub const DEFAULT_FILE_NAME: &str = "default-lang.json";

static LANGUAGE_CODE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[a-z]{2}_[A-Z]{2}$").expect("language code pattern is valid"));

/// Raw load options, as accepted by the looser call shapes or read from an
/// options file.
///
/// Every field is optional; [`crate::config::normalize`] turns a stack of
/// these into a validated [`Config`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Options {
	/// One directory or a list of directories to search.
	#[serde(default)]
	pub directories: Option<DirectoryList>,

	/// Language code of the overlay to load, in `xx_XX` form.
	#[serde(default, alias = "language-code")]
	pub lang_code: Option<String>,

	/// Name of the base dictionary file. `.json` is appended when missing.
	#[serde(default, alias = "default-file-name")]
	pub default_file: Option<String>,

	/// Report overwritten keys through the logger while loading.
	#[serde(default)]
	pub safe: Option<bool>,
}

impl Options {
	/// Overlay `other` on top of `self`; fields set in `other` win.
	pub fn overlay(self, other: Options) -> Options {
		Options {
			directories: other.directories.or(self.directories),
			lang_code: other.lang_code.or(self.lang_code),
			default_file: other.default_file.or(self.default_file),
			safe: other.safe.or(self.safe),
		}
	}
}

/// A single directory or an ordered list of directories.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DirectoryList {
	One(PathBuf),
	Many(Vec<PathBuf>),
}

impl DirectoryList {
	pub fn into_vec(self) -> Vec<PathBuf> {
		match self {
			DirectoryList::One(dir) => vec![dir],
			DirectoryList::Many(dirs) => dirs,
		}
	}
}

/// A validated language code such as `es_ES`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
	pub fn parse(code: &str) -> Result<Self> {
		if LANGUAGE_CODE_REGEX.is_match(code) {
			Ok(LanguageCode(code.to_string()))
		} else {
			Err(LangError::InvalidLanguageCode {
				code: code.to_string(),
			})
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl FromStr for LanguageCode {
	type Err = LangError;

	fn from_str(s: &str) -> Result<Self> {
		LanguageCode::parse(s)
	}
}

impl fmt::Display for LanguageCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Normalized load configuration.
///
/// `directories` is never empty and `default_file_name`, when set, always
/// ends in `.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	directories: Vec<PathBuf>,
	language_code: Option<LanguageCode>,
	default_file_name: Option<String>,
	safe: bool,
}

impl Config {
	/// Create a configuration searching the given directories.
	pub fn new<I, P>(directories: I) -> Result<Self>
	where
		I: IntoIterator<Item = P>,
		P: Into<PathBuf>,
	{
		let directories: Vec<PathBuf> = directories.into_iter().map(Into::into).collect();
		if directories.is_empty() {
			return Err(LangError::NoDirectories);
		}

		Ok(Config {
			directories,
			language_code: None,
			default_file_name: None,
			safe: false,
		})
	}

	/// Set the overlay language. An empty code clears it.
	pub fn with_language_code(mut self, code: &str) -> Result<Self> {
		self.language_code = if code.is_empty() {
			None
		} else {
			Some(LanguageCode::parse(code)?)
		};
		Ok(self)
	}

	/// Override the default file name for this configuration.
	pub fn with_default_file_name(mut self, name: &str) -> Result<Self> {
		self.default_file_name = Some(normalize_default_file_name(name)?);
		Ok(self)
	}

	pub fn with_safe(mut self, safe: bool) -> Self {
		self.safe = safe;
		self
	}

	pub fn directories(&self) -> &[PathBuf] {
		&self.directories
	}

	pub fn language_code(&self) -> Option<&LanguageCode> {
		self.language_code.as_ref()
	}

	pub fn default_file_name(&self) -> Option<&str> {
		self.default_file_name.as_deref()
	}

	pub fn safe(&self) -> bool {
		self.safe
	}
}

/// Validate a default file name, appending `.json` when it has no extension.
pub fn normalize_default_file_name(name: &str) -> Result<String> {
	match Path::new(name).extension() {
		None => Ok(format!("{name}.json")),
		Some(ext) if ext == "json" => Ok(name.to_string()),
		Some(_) => Err(LangError::InvalidDefaultFileExtension {
			file_name: name.to_string(),
		}),
	}
}
