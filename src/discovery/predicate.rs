use crate::config::LanguageCode;
use std::path::{Path, PathBuf};

/// A file found while walking a message directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
	/// Directory containing the file.
	pub dir: PathBuf,

	/// File name without its extension.
	pub stem: String,

	/// Extension without the leading dot, empty when there is none.
	pub extension: String,

	/// File name including the extension.
	pub file_name: String,

	/// Full path to the file.
	pub path: PathBuf,
}

impl CandidateFile {
	pub fn from_path(path: &Path) -> Self {
		let lossy = |s: Option<&std::ffi::OsStr>| {
			s.map(|s| s.to_string_lossy().into_owned())
				.unwrap_or_default()
		};

		CandidateFile {
			dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
			stem: lossy(path.file_stem()),
			extension: lossy(path.extension()),
			file_name: lossy(path.file_name()),
			path: path.to_path_buf(),
		}
	}
}

/// Selects message files by name.
///
/// Without a language code only the default file matches. With one, files
/// named `<code>.json` or ending in `-<code>.json` match as well.
#[derive(Debug, Clone)]
pub struct FilePredicate {
	default_file_name: String,
	language_file_name: Option<String>,
	language_suffix: Option<String>,
}

impl FilePredicate {
	pub fn new(default_file_name: &str, language_code: Option<&LanguageCode>) -> Self {
		FilePredicate {
			default_file_name: default_file_name.to_string(),
			language_file_name: language_code.map(|code| format!("{code}.json")),
			language_suffix: language_code.map(|code| format!("-{code}.json")),
		}
	}

	pub fn default_file_name(&self) -> &str {
		&self.default_file_name
	}

	/// Check if the file should be loaded.
	pub fn matches(&self, file: &CandidateFile) -> bool {
		if self.is_default(file) {
			return true;
		}

		let exact = self
			.language_file_name
			.as_ref()
			.is_some_and(|name| file.file_name == *name);
		let suffixed = self
			.language_suffix
			.as_ref()
			.is_some_and(|suffix| file.file_name.ends_with(suffix.as_str()));

		exact || suffixed
	}

	/// Check if the file is a default (base) dictionary.
	pub fn is_default(&self, file: &CandidateFile) -> bool {
		file.file_name == self.default_file_name
	}
}
