use crate::config::DEFAULT_FILE_NAME;
use std::fmt;

/// Sink for diagnostic lines written by safe merges and the inspector.
pub type Logger = Box<dyn FnMut(&str)>;

/// Settings shared by every load and inspect call made through it.
///
/// A host normally builds one context at startup and reuses it. The default
/// file name and logger are read at the start of each call; changing them
/// while a call is in progress is not supported.
pub struct LoaderContext {
	default_file_name: String,
	pub(crate) logger: Logger,
}

impl LoaderContext {
	pub fn new() -> Self {
		LoaderContext {
			default_file_name: DEFAULT_FILE_NAME.to_string(),
			logger: Box::new(|line: &str| println!("{line}")),
		}
	}

	/// Name of the base dictionary file when the config does not override it.
	pub fn default_file_name(&self) -> &str {
		&self.default_file_name
	}

	pub fn set_default_file_name(&mut self, name: impl Into<String>) {
		self.default_file_name = name.into();
	}

	pub fn set_logger(&mut self, logger: impl FnMut(&str) + 'static) {
		self.logger = Box::new(logger);
	}

	pub fn with_default_file_name(mut self, name: impl Into<String>) -> Self {
		self.set_default_file_name(name);
		self
	}

	pub fn with_logger(mut self, logger: impl FnMut(&str) + 'static) -> Self {
		self.set_logger(logger);
		self
	}

	pub(crate) fn log(&mut self, line: &str) {
		(self.logger)(line);
	}
}

impl Default for LoaderContext {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for LoaderContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LoaderContext")
			.field("default_file_name", &self.default_file_name)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::RefCell;
	use std::rc::Rc;

	#[test]
	fn test_default_context() {
		let ctx = LoaderContext::default();
		assert_eq!(ctx.default_file_name(), "default-lang.json");
	}

	#[test]
	fn test_set_logger_receives_lines() {
		let lines = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&lines);
		let mut ctx = LoaderContext::new()
			.with_default_file_name("base.json")
			.with_logger(move |line| sink.borrow_mut().push(line.to_string()));

		ctx.log("first");
		ctx.log("second");

		assert_eq!(ctx.default_file_name(), "base.json");
		assert_eq!(*lines.borrow(), vec!["first", "second"]);
	}
}
