//! Message dictionaries for langdict.
//!
//! This module handles:
//! - Case-normalized key/value storage
//! - Silent and reported merge strategies
//! - Reading JSON message files

pub mod merge;
pub mod parser;

pub use merge::{MessageDictionary, Messages, merge_safe, merge_unsafe};
pub use parser::{MessageFile, parse_message_file, parse_message_str};
