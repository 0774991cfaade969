//! Message file discovery for langdict.
//!
//! This module handles:
//! - Selecting default and language files by name
//! - Recursive directory walking

pub mod predicate;
pub mod walker;

pub use predicate::{CandidateFile, FilePredicate};
pub use walker::{MatchedFiles, walk};
