use crate::discovery::predicate::{CandidateFile, FilePredicate};
use crate::error::{LangError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazily walk `root` and its subdirectories, yielding files accepted by
/// `predicate`.
///
/// The walk is depth-first with entries sorted by file name inside each
/// directory. Symbolic links are not followed. Fails up front with
/// [`LangError::DirectoryNotFound`] when `root` is not an existing directory.
/// An empty `root` means the current directory.
pub fn walk<'a>(root: &Path, predicate: &'a FilePredicate) -> Result<MatchedFiles<'a>> {
	let root = if root.as_os_str().is_empty() {
		Path::new(".")
	} else {
		root
	};
	let root = std::path::absolute(root).map_err(|source| LangError::CurrentDirError { source })?;
	if !root.is_dir() {
		return Err(LangError::DirectoryNotFound { path: root });
	}

	tracing::debug!("Walking message directory {}", root.display());
	let inner = WalkDir::new(&root).sort_by_file_name().into_iter();

	Ok(MatchedFiles {
		root,
		inner,
		predicate,
	})
}

/// Iterator over the message files found under one root directory.
pub struct MatchedFiles<'a> {
	root: PathBuf,
	inner: walkdir::IntoIter,
	predicate: &'a FilePredicate,
}

impl MatchedFiles<'_> {
	pub fn root(&self) -> &Path {
		&self.root
	}
}

impl Iterator for MatchedFiles<'_> {
	type Item = Result<CandidateFile>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let entry = match self.inner.next()? {
				Ok(entry) => entry,
				Err(source) => {
					let path = source.path().unwrap_or(self.root.as_path()).to_path_buf();
					return Some(Err(LangError::WalkError { path, source }));
				}
			};

			if entry.file_type().is_dir() {
				continue;
			}

			let file = CandidateFile::from_path(entry.path());
			if self.predicate.matches(&file) {
				tracing::trace!("Matched message file {}", file.path.display());
				return Some(Ok(file));
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::LanguageCode;
	use std::fs;

	fn touch(path: &Path) {
		fs::create_dir_all(path.parent().unwrap()).unwrap();
		fs::write(path, "{}").unwrap();
	}

	#[test]
	fn test_walk_missing_root() {
		let temp_dir = tempfile::tempdir().unwrap();
		let missing = temp_dir.path().join("missing");
		let predicate = FilePredicate::new("default-lang.json", None);

		match walk(&missing, &predicate) {
			Err(LangError::DirectoryNotFound { path }) => assert_eq!(path, missing),
			_ => panic!("Expected DirectoryNotFound error"),
		}
	}

	#[test]
	fn test_walk_recurses_and_filters() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		touch(&root.join("default-lang.json"));
		touch(&root.join("notes.json"));
		touch(&root.join("errors/default-lang.json"));
		touch(&root.join("errors/errors-es_ES.json"));
		touch(&root.join("errors/deep/es_ES.json"));
		touch(&root.join("errors/deep/fr_FR.json"));

		let code = LanguageCode::parse("es_ES").unwrap();
		let predicate = FilePredicate::new("default-lang.json", Some(&code));
		let found: Vec<PathBuf> = walk(root, &predicate)
			.unwrap()
			.map(|f| f.unwrap().path)
			.collect();

		assert_eq!(
			found,
			vec![
				root.join("default-lang.json"),
				root.join("errors/deep/es_ES.json"),
				root.join("errors/default-lang.json"),
				root.join("errors/errors-es_ES.json"),
			]
		);
	}

	#[test]
	fn test_walk_relative_root_is_made_absolute() {
		let predicate = FilePredicate::new("default-lang.json", None);
		let files = walk(Path::new("src"), &predicate).unwrap();
		assert!(files.root().is_absolute());
	}

	#[test]
	fn test_walk_empty_root_is_current_dir() {
		let predicate = FilePredicate::new("default-lang.json", None);
		let files = walk(Path::new(""), &predicate).unwrap();

		let cwd = std::env::current_dir().unwrap();
		assert!(files.root().is_absolute());
		assert_eq!(files.root().canonicalize().unwrap(), cwd.canonicalize().unwrap());
	}

	#[test]
	fn test_walk_rewalks_on_each_call() {
		let temp_dir = tempfile::tempdir().unwrap();
		let predicate = FilePredicate::new("default-lang.json", None);

		assert_eq!(walk(temp_dir.path(), &predicate).unwrap().count(), 0);
		touch(&temp_dir.path().join("default-lang.json"));
		assert_eq!(walk(temp_dir.path(), &predicate).unwrap().count(), 1);
	}
}
