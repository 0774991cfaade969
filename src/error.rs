use std::path::PathBuf;

/// Library-level structured errors for langdict.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum LangError {
	#[error("No message directories were given")]
	NoDirectories,

	#[error("\"{code}\" is not a valid language code (expected xx_XX)")]
	InvalidLanguageCode { code: String },

	#[error("Expected a .json default file, got: {file_name}")]
	InvalidDefaultFileExtension { file_name: String },

	#[error("Message directory not found: {path}")]
	DirectoryNotFound { path: PathBuf },

	#[error("Failed to resolve the current directory")]
	CurrentDirError {
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to walk message directory: {path}")]
	WalkError {
		path: PathBuf,
		#[source]
		source: walkdir::Error,
	},

	#[error("Failed to read message file: {path}")]
	MessageReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse message file: {path}")]
	MessageParseError {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("Message {key} in {path} is not a string")]
	NonStringValue { path: PathBuf, key: String },

	#[error("Failed to read options file: {path}")]
	OptionsReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse options file: {path}")]
	OptionsParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

impl LangError {
	/// True for errors raised while validating options, before any I/O.
	pub fn is_configuration_error(&self) -> bool {
		matches!(
			self,
			LangError::NoDirectories
				| LangError::InvalidLanguageCode { .. }
				| LangError::InvalidDefaultFileExtension { .. }
		)
	}

	/// True for message files whose content is not a flat JSON string map.
	pub fn is_format_error(&self) -> bool {
		matches!(
			self,
			LangError::MessageParseError { .. } | LangError::NonStringValue { .. }
		)
	}
}

/// Result type alias using LangError.
pub type Result<T> = std::result::Result<T, LangError>;
