use crate::error::{LangError, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// The contents of one message file, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageFile {
	/// The file the messages were read from.
	pub path: PathBuf,

	/// Key/value pairs as written in the file.
	pub entries: Vec<(String, String)>,
}

impl MessageFile {
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(key, _)| key.as_str())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries
			.iter()
			.map(|(key, value)| (key.as_str(), value.as_str()))
	}
}

/// Read and parse a message file.
pub fn parse_message_file(path: &Path) -> Result<MessageFile> {
	let content = std::fs::read_to_string(path).map_err(|source| LangError::MessageReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_message_str(&content, path)
}

/// Parse message file content. It must be a single JSON object whose values
/// are all strings.
pub fn parse_message_str(content: &str, path: &Path) -> Result<MessageFile> {
	let object: Map<String, Value> =
		serde_json::from_str(content).map_err(|source| LangError::MessageParseError {
			path: path.to_path_buf(),
			source,
		})?;

	let entries = object
		.into_iter()
		.map(|(key, value)| match value {
			Value::String(text) => Ok((key, text)),
			_ => Err(LangError::NonStringValue {
				path: path.to_path_buf(),
				key,
			}),
		})
		.collect::<Result<Vec<_>>>()?;

	Ok(MessageFile {
		path: path.to_path_buf(),
		entries,
	})
}
