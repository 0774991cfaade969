use crate::config::{Config, Language, Options, Target, normalize};
use crate::context::LoaderContext;
use crate::dictionary::{MessageDictionary, Messages, merge_safe, merge_unsafe, parse_message_file};
use crate::discovery::{CandidateFile, FilePredicate, walk};
use crate::error::Result;

/// Message files found across all configured directories.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveredFiles {
	/// Default files, in discovery order.
	pub default_files: Vec<CandidateFile>,

	/// Language files, in discovery order.
	pub language_files: Vec<CandidateFile>,
}

impl LoaderContext {
	/// Walk every configured directory and split the matches into default and
	/// language files. No file content is read.
	pub fn discover(&self, config: &Config) -> Result<DiscoveredFiles> {
		let default_file_name = config
			.default_file_name()
			.unwrap_or(self.default_file_name());
		let predicate = FilePredicate::new(default_file_name, config.language_code());
		let mut discovered = DiscoveredFiles::default();

		for dir in config.directories() {
			for file in walk(dir, &predicate)? {
				let file = file?;
				if predicate.is_default(&file) {
					discovered.default_files.push(file);
				} else {
					discovered.language_files.push(file);
				}
			}
		}

		tracing::debug!(
			"Discovered {} default and {} language files",
			discovered.default_files.len(),
			discovered.language_files.len()
		);
		Ok(discovered)
	}

	/// Load and merge the messages described by `config`.
	///
	/// All default files are merged before any language file, so overlays win
	/// regardless of the directory they were found in. With `safe` set,
	/// overwritten keys are reported through the logger.
	pub fn load(&mut self, config: &Config) -> Result<Messages> {
		let discovered = self.discover(config)?;
		let mut messages = MessageDictionary::new();

		for file in discovered
			.default_files
			.iter()
			.chain(discovered.language_files.iter())
		{
			let parsed = parse_message_file(&file.path)?;
			tracing::trace!("Merging {} messages from {}", parsed.entries.len(), file.path.display());
			if config.safe() {
				merge_safe(&mut messages, parsed.iter(), &mut *self.logger);
			} else {
				merge_unsafe(&mut messages, parsed.iter());
			}
		}

		Ok(messages.into_messages())
	}
}

/// Load messages with a default [`LoaderContext`].
///
/// ```no_run
/// let messages = langdict::load(vec!["src/errors", "src/messages"], Some("es_ES".into()), None)?;
/// println!("{:?}", messages.get("HELLO"));
/// # Ok::<(), langdict::LangError>(())
/// ```
pub fn load(
	target: impl Into<Target>,
	language: Option<Language>,
	options: Option<Options>,
) -> Result<Messages> {
	let config = normalize(target, language, options)?;
	LoaderContext::default().load(&config)
}
