//! Langdict - load and merge localized JSON message dictionaries.
//!
//! This library provides the core functionality for langdict, including:
//! - Normalizing load options from several call shapes
//! - Discovering default and language message files in directory trees
//! - Merging dictionaries, with optional overwrite reporting
//! - Inspecting translations for missing and orphan keys
//!
//! # Example
//!
//! ```no_run
//! use langdict::{Config, LoaderContext};
//!
//! let config = Config::new(["src/errors", "src/messages"])?.with_language_code("es_ES")?;
//! let mut ctx = LoaderContext::new().with_logger(|line| eprintln!("{line}"));
//! let messages = ctx.load(&config)?;
//!
//! if let Some(text) = messages.get("HELLO") {
//!     println!("{text}");
//! }
//! # Ok::<(), langdict::LangError>(())
//! ```

pub mod config;
pub mod context;
pub mod dictionary;
pub mod discovery;
pub mod error;
pub mod inspect;
pub mod loader;

pub use config::{Config, Language, LanguageCode, Options, Target, normalize};
pub use context::{Logger, LoaderContext};
pub use dictionary::{MessageDictionary, Messages};
pub use error::{LangError, Result};
pub use inspect::{InspectReport, inspect};
pub use loader::{DiscoveredFiles, load};
