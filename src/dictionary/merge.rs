use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Mutable message storage. Keys are uppercased on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageDictionary {
	entries: BTreeMap<String, String>,
}

impl MessageDictionary {
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a message, returning the value it replaced.
	pub fn insert(&mut self, key: &str, value: impl Into<String>) -> Option<String> {
		self.entries.insert(key.to_uppercase(), value.into())
	}

	pub fn remove(&mut self, key: &str) -> Option<String> {
		self.entries.remove(&key.to_uppercase())
	}

	/// Look up a message. The key is matched case-insensitively.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(&key.to_uppercase()).map(String::as_str)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(&key.to_uppercase())
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Freeze the dictionary into a read-only view.
	pub fn into_messages(self) -> Messages {
		Messages(self)
	}
}

/// The merged result of a load: a read-only message dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Messages(MessageDictionary);

impl Messages {
	/// Look up a message. The key is matched case-insensitively.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter()
	}

	pub fn into_inner(self) -> BTreeMap<String, String> {
		self.0.entries
	}
}

impl IntoIterator for Messages {
	type Item = (String, String);
	type IntoIter = btree_map::IntoIter<String, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.entries.into_iter()
	}
}

/// Merge `source` into `target`; later values replace earlier ones silently.
pub fn merge_unsafe<'a, I>(target: &mut MessageDictionary, source: I)
where
	I: IntoIterator<Item = (&'a str, &'a str)>,
{
	for (key, value) in source {
		target.insert(key, value);
	}
}

/// Merge `source` into `target`, reporting every overwritten key through
/// `logger` before replacing it, followed by an overwrite count.
pub fn merge_safe<'a, I>(target: &mut MessageDictionary, source: I, logger: &mut dyn FnMut(&str))
where
	I: IntoIterator<Item = (&'a str, &'a str)>,
{
	let mut overwritten = 0;
	for (key, value) in source {
		if let Some(previous) = target.get(key) {
			logger(&format!(
				"Overwrote {}('{}') with '{}'.",
				key.to_uppercase(),
				previous,
				value
			));
			overwritten += 1;
		}
		target.insert(key, value);
	}

	if overwritten > 0 {
		logger(&format!("{overwritten} message(s) overwritten."));
	}
}
