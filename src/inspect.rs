use crate::config::{Config, Language, Options, Target, normalize};
use crate::context::LoaderContext;
use crate::dictionary::{MessageDictionary, Messages, merge_safe, parse_message_file};
use crate::error::Result;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// What an inspection found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InspectReport {
	/// Default files, in the order they were processed.
	pub default_files: Vec<PathBuf>,

	/// Language files, in the order they were processed.
	pub language_files: Vec<PathBuf>,

	/// Default keys with no translation, with their default text.
	/// Only filled when at least one language file was found.
	pub untranslated: Vec<(String, String)>,

	/// Translated keys with no matching default key, with their text.
	/// Only filled when at least one language file was found.
	pub orphans: Vec<(String, String)>,

	/// Final dictionary, translations over defaults.
	pub merged: Messages,
}

impl LoaderContext {
	/// Inspect the messages described by `config`, writing diagnostics to the
	/// logger. See [`LoaderContext::report`].
	pub fn inspect(&mut self, config: &Config) -> Result<()> {
		self.report(config).map(|_| ())
	}

	/// Walk and merge like [`LoaderContext::load`], logging every file and key
	/// found, overwritten keys, untranslated and orphan keys, and the final
	/// dictionary.
	pub fn report(&mut self, config: &Config) -> Result<InspectReport> {
		let discovered = self.discover(config)?;
		let mut report = InspectReport::default();
		let mut defaults = MessageDictionary::new();
		let mut translations = MessageDictionary::new();

		for file in &discovered.default_files {
			let parsed = parse_message_file(&file.path)?;
			self.log(&format!("\nfrom {}:", file.path.display()));
			for key in parsed.keys() {
				self.log(&format!("\t {key}"));
			}
			merge_safe(&mut defaults, parsed.iter(), &mut *self.logger);
			report.default_files.push(file.path.clone());
		}

		let mut untranslated: BTreeSet<String> = defaults.keys().map(str::to_string).collect();
		for file in &discovered.language_files {
			let parsed = parse_message_file(&file.path)?;
			self.log(&format!("\nfrom {}:", file.path.display()));
			for key in parsed.keys() {
				self.log(&format!("\t {key}"));
				untranslated.remove(&key.to_uppercase());
			}
			merge_safe(&mut translations, parsed.iter(), &mut *self.logger);
			report.language_files.push(file.path.clone());
		}

		if !report.language_files.is_empty() {
			report.untranslated = untranslated
				.into_iter()
				.filter_map(|key| {
					let text = defaults.get(&key)?.to_string();
					Some((key, text))
				})
				.collect();
			report.orphans = translations
				.iter()
				.filter(|(key, _)| !defaults.contains_key(key))
				.map(|(key, text)| (key.to_string(), text.to_string()))
				.collect();

			if !report.untranslated.is_empty() {
				self.log("\nUntranslated keys:");
				for (key, text) in &report.untranslated {
					self.log(&format!("\t{key}: '{text}'"));
				}
			}
			if !report.orphans.is_empty() {
				self.log("\nOrphan keys:");
				for (key, text) in &report.orphans {
					self.log(&format!("\t{key}: '{text}'"));
				}
			}
		}

		let mut merged = defaults;
		for (key, text) in translations.iter() {
			merged.insert(key, text);
		}

		self.log("\nResulting dictionary:");
		for (key, text) in merged.iter() {
			self.log(&format!("\t{key:.<20}..: '{text}'"));
		}

		report.merged = merged.into_messages();
		Ok(report)
	}
}

/// Inspect messages with a default [`LoaderContext`], writing to stdout.
pub fn inspect(
	target: impl Into<Target>,
	language: Option<Language>,
	options: Option<Options>,
) -> Result<()> {
	let config = normalize(target, language, options)?;
	LoaderContext::default().inspect(&config)
}
