use crate::config::types::{Config, DirectoryList, Options};
use crate::error::{LangError, Result};
use std::path::{Path, PathBuf};

/// First argument of a load call: where to look, or a complete options object.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
	Directories(Vec<PathBuf>),
	Options(Options),
}

/// Second argument of a load call: a language code or an options object.
#[derive(Debug, Clone, PartialEq)]
pub enum Language {
	Code(String),
	Options(Options),
}

impl From<&str> for Target {
	fn from(dir: &str) -> Self {
		Target::Directories(vec![PathBuf::from(dir)])
	}
}

impl From<String> for Target {
	fn from(dir: String) -> Self {
		Target::Directories(vec![PathBuf::from(dir)])
	}
}

impl From<&Path> for Target {
	fn from(dir: &Path) -> Self {
		Target::Directories(vec![dir.to_path_buf()])
	}
}

impl From<PathBuf> for Target {
	fn from(dir: PathBuf) -> Self {
		Target::Directories(vec![dir])
	}
}

impl<P: Into<PathBuf>> From<Vec<P>> for Target {
	fn from(dirs: Vec<P>) -> Self {
		Target::Directories(dirs.into_iter().map(Into::into).collect())
	}
}

impl<P: Into<PathBuf>, const N: usize> From<[P; N]> for Target {
	fn from(dirs: [P; N]) -> Self {
		Target::Directories(dirs.into_iter().map(Into::into).collect())
	}
}

impl From<Options> for Target {
	fn from(options: Options) -> Self {
		Target::Options(options)
	}
}

impl From<&str> for Language {
	fn from(code: &str) -> Self {
		Language::Code(code.to_string())
	}
}

impl From<String> for Language {
	fn from(code: String) -> Self {
		Language::Code(code)
	}
}

impl From<Options> for Language {
	fn from(options: Options) -> Self {
		Language::Options(options)
	}
}

/// Build a validated [`Config`] from the loose call shapes.
///
/// When `target` is a directory list, the explicit `options` are applied
/// first, then a second-position options object, then the directly supplied
/// directories and language code. When `target` is itself an options object
/// it is taken as the full configuration and the other arguments are ignored.
pub fn normalize(
	target: impl Into<Target>,
	language: Option<Language>,
	options: Option<Options>,
) -> Result<Config> {
	let resolved = match target.into() {
		Target::Options(options) => options,
		Target::Directories(directories) => {
			let mut resolved = options.unwrap_or_default();
			let mut direct = Options {
				directories: Some(DirectoryList::Many(directories)),
				..Default::default()
			};
			match language {
				Some(Language::Code(code)) => direct.lang_code = Some(code),
				Some(Language::Options(second)) => resolved = resolved.overlay(second),
				None => {}
			}
			resolved.overlay(direct)
		}
	};

	Config::from_options(resolved)
}

impl Config {
	/// Validate a fully merged options object.
	pub fn from_options(options: Options) -> Result<Config> {
		let directories = options
			.directories
			.map(|dirs| dirs.into_vec())
			.unwrap_or_default();
		if directories.is_empty() {
			return Err(LangError::NoDirectories);
		}

		let mut config = Config::new(directories)?;
		if let Some(ref code) = options.lang_code {
			config = config.with_language_code(code)?;
		}
		if let Some(ref name) = options.default_file {
			config = config.with_default_file_name(name)?;
		}
		Ok(config.with_safe(options.safe.unwrap_or(false)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_single_directory_is_wrapped() {
		let config = normalize("messages", None, None).unwrap();
		assert_eq!(config.directories(), &[PathBuf::from("messages")]);
		assert!(config.language_code().is_none());
		assert!(!config.safe());
	}

	#[test]
	fn test_directories_and_code() {
		let config = normalize(vec!["a", "b"], Some("es_ES".into()), None).unwrap();
		assert_eq!(
			config.directories(),
			&[PathBuf::from("a"), PathBuf::from("b")]
		);
		assert_eq!(config.language_code().unwrap().as_str(), "es_ES");
	}

	#[test]
	fn test_second_argument_options_object() {
		let second = Options {
			directories: Some(DirectoryList::One(PathBuf::from("ignored"))),
			lang_code: Some("fr_FR".to_string()),
			safe: Some(true),
			..Default::default()
		};
		let config = normalize("messages", Some(second.into()), None).unwrap();

		// Direct directories win over the options object.
		assert_eq!(config.directories(), &[PathBuf::from("messages")]);
		assert_eq!(config.language_code().unwrap().as_str(), "fr_FR");
		assert!(config.safe());
	}

	#[test]
	fn test_explicit_options_are_lowest_priority() {
		let explicit = Options {
			lang_code: Some("en_GB".to_string()),
			default_file: Some("base".to_string()),
			..Default::default()
		};
		let config = normalize("messages", Some("es_ES".into()), Some(explicit)).unwrap();

		assert_eq!(config.language_code().unwrap().as_str(), "es_ES");
		assert_eq!(config.default_file_name(), Some("base.json"));
	}

	#[test]
	fn test_explicit_options_language_kept_when_not_overridden() {
		let explicit = Options {
			lang_code: Some("en_GB".to_string()),
			..Default::default()
		};
		let config = normalize("messages", None, Some(explicit)).unwrap();
		assert_eq!(config.language_code().unwrap().as_str(), "en_GB");
	}

	#[test]
	fn test_options_object_used_as_is() {
		let options = Options {
			directories: Some(DirectoryList::Many(vec![
				PathBuf::from("x"),
				PathBuf::from("y"),
			])),
			lang_code: Some("de_DE".to_string()),
			..Default::default()
		};
		let config = normalize(options, Some("es_ES".into()), None).unwrap();

		assert_eq!(config.directories().len(), 2);
		assert_eq!(config.language_code().unwrap().as_str(), "de_DE");
	}

	#[test]
	fn test_missing_directories_fails() {
		let result = normalize(Options::default(), None, None);
		assert!(matches!(result, Err(LangError::NoDirectories)));

		let result = normalize(Vec::<PathBuf>::new(), None, None);
		assert!(matches!(result, Err(LangError::NoDirectories)));
	}

	#[test]
	fn test_malformed_language_code_fails() {
		let err = normalize("messages", Some("xx".into()), None).unwrap_err();
		assert!(err.is_configuration_error());
		match err {
			LangError::InvalidLanguageCode { code } => assert_eq!(code, "xx"),
			_ => panic!("Expected InvalidLanguageCode error"),
		}
	}

	#[test]
	fn test_bad_default_file_extension_fails() {
		let options = Options {
			default_file: Some("base.txt".to_string()),
			..Default::default()
		};
		let err = normalize("messages", Some(options.into()), None).unwrap_err();
		assert!(matches!(err, LangError::InvalidDefaultFileExtension { .. }));
	}
}
